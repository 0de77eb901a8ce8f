//! MEMLOG - Log Metrics & Observability
//! Provides atomic counters for tracking log operations
//! in a lock-free, thread-safe manner using `AtomicU64`.
//!
//! Counters are updated outside the log's mutex so observing
//! them never contends with appends.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Atomic operation counters for the record log.
///
/// All counters use `Ordering::Relaxed`; they are for observability only
/// and never used for synchronization.
#[derive(Debug)]
pub struct LogMetrics {
    /// Total number of `append` operations.
    pub appends: AtomicU64,
    /// Total number of `get` operations (hits and misses).
    pub gets: AtomicU64,
    /// Total number of `get` operations that hit `KeyNotFound`.
    pub misses: AtomicU64,
    /// Total number of `list` operations.
    pub lists: AtomicU64,
    /// Total value bytes appended.
    pub bytes_written: AtomicU64,
    /// Total value bytes returned by `get` and `list`.
    pub bytes_read: AtomicU64,
    started: Instant,
}

impl LogMetrics {
    /// Create a new metrics instance with all counters at zero.
    pub fn new() -> Self {
        Self {
            appends: AtomicU64::new(0),
            gets: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            lists: AtomicU64::new(0),
            bytes_written: AtomicU64::new(0),
            bytes_read: AtomicU64::new(0),
            started: Instant::now(),
        }
    }

    /// Record an append operation.
    pub fn record_append(&self, value_size: usize) {
        self.appends.fetch_add(1, Ordering::Relaxed);
        self.bytes_written
            .fetch_add(value_size as u64, Ordering::Relaxed);
    }

    /// Record a get operation. `None` means the key was not found.
    pub fn record_get(&self, value_size: Option<usize>) {
        self.gets.fetch_add(1, Ordering::Relaxed);
        match value_size {
            Some(size) => {
                self.bytes_read.fetch_add(size as u64, Ordering::Relaxed);
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Record a list operation returning `total_size` value bytes.
    pub fn record_list(&self, total_size: usize) {
        self.lists.fetch_add(1, Ordering::Relaxed);
        self.bytes_read
            .fetch_add(total_size as u64, Ordering::Relaxed);
    }

    /// Uptime in seconds since the metrics were created.
    pub fn uptime_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// Total number of operations (appends + gets + lists).
    pub fn total_ops(&self) -> u64 {
        self.appends.load(Ordering::Relaxed)
            + self.gets.load(Ordering::Relaxed)
            + self.lists.load(Ordering::Relaxed)
    }

    /// Operations per second since start.
    pub fn ops_per_sec(&self) -> f64 {
        let uptime = self.uptime_secs();
        if uptime < 0.001 {
            return 0.0;
        }
        self.total_ops() as f64 / uptime
    }

    /// Format metrics as a human-readable report.
    pub fn report(&self) -> String {
        format!(
            "═══ MEMLOG Metrics ═══\n\
             Operations:\n\
               appends:   {}\n\
               gets:      {}\n\
               misses:    {}\n\
               lists:     {}\n\
             Throughput:\n\
               total ops: {}\n\
               ops/sec:   {:.2}\n\
             I/O:\n\
               written:   {} bytes\n\
               read:      {} bytes\n\
             Uptime: {:.2}s\n",
            self.appends.load(Ordering::Relaxed),
            self.gets.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
            self.lists.load(Ordering::Relaxed),
            self.total_ops(),
            self.ops_per_sec(),
            self.bytes_written.load(Ordering::Relaxed),
            self.bytes_read.load(Ordering::Relaxed),
            self.uptime_secs(),
        )
    }
}

impl Default for LogMetrics {
    fn default() -> Self {
        Self::new()
    }
}
