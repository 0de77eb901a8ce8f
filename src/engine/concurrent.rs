//! MEMLOG - Concurrent Log Handle
//! Thread-safe wrapper around [`MemLog`] using Arc + Mutex.
//!
//! ## Concurrency Model
//! - Every operation (`append`, `get`, `list`, `len`) takes the **same** mutex
//!   for its whole structural step, so the "read length, push, return key"
//!   sequence of an append is atomic and a reader never sees a half-appended record.
//! - Values are `Bytes`, so what leaves the critical section is an immutable
//!   snapshot; encoding it for a transport happens after the guard is dropped.
//! - Metrics counters are updated after the guard is released.
//!
//! ## Use Case
//! Construct one `SharedLog` at startup and clone the handle into every
//! consumer (server state, worker threads, tests).

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::Result;
use crate::types::{Key, Record, Value};

use super::metrics::LogMetrics;
use super::MemLog;

/// Thread-safe, cloneable handle to a single record log.
///
/// ## Example
/// ```
/// use memlog::engine::concurrent::SharedLog;
/// use std::thread;
///
/// let log = SharedLog::new();
/// let writer = log.clone();
///
/// thread::spawn(move || {
///     writer.append("hello");
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(log.get(0).unwrap().value, "hello");
/// ```
#[derive(Clone, Default)]
pub struct SharedLog {
    inner: Arc<Mutex<MemLog>>,
    metrics: Arc<LogMetrics>,
}

impl SharedLog {
    /// Create a new, empty shared log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty shared log with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemLog::with_capacity(capacity))),
            metrics: Arc::new(LogMetrics::new()),
        }
    }

    /// Acquire the log. A panic in another holder cannot leave the
    /// sequence half-mutated, so a poisoned guard is still consistent.
    fn lock(&self) -> MutexGuard<'_, MemLog> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a value and return its assigned key.
    pub fn append(&self, value: impl Into<Value>) -> Key {
        let value = value.into();
        let size = value.len();
        let key = self.lock().append(value);
        self.metrics.record_append(size);
        log::debug!("appended record {} ({} bytes)", key, size);
        key
    }

    /// Get the record stored at `key`.
    pub fn get(&self, key: Key) -> Result<Record> {
        let result = self.lock().get(key);
        self.metrics.record_get(result.as_ref().ok().map(Record::size));
        result
    }

    /// Snapshot of every record in append order.
    pub fn list(&self) -> Vec<Record> {
        let records = self.lock().list();
        self.metrics
            .record_list(records.iter().map(Record::size).sum());
        records
    }

    /// Number of records in the log.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if the log holds no records.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Operation counters for this log.
    pub fn metrics(&self) -> &LogMetrics {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use std::collections::HashSet;
    use std::sync::atomic::Ordering;
    use std::thread;

    #[test]
    fn test_append_get() {
        let log = SharedLog::new();

        assert_eq!(log.append(b"value".to_vec()), 0);
        assert_eq!(log.get(0).unwrap().value, Bytes::from_static(b"value"));
    }

    #[test]
    fn test_clone_and_share() {
        let log = SharedLog::new();

        let clone = log.clone();
        clone.append("shared");

        // Original handle sees the update
        assert_eq!(log.len(), 1);
        assert_eq!(log.get(0).unwrap().value, Bytes::from_static(b"shared"));
    }

    #[test]
    fn test_concurrent_appends_unique_keys() {
        let log = SharedLog::new();
        let mut handles = vec![];

        for t in 0..8 {
            let log = log.clone();
            handles.push(thread::spawn(move || {
                (0..250)
                    .map(|i| log.append(format!("{}-{}", t, i)))
                    .collect::<Vec<_>>()
            }));
        }

        let mut keys = HashSet::new();
        for handle in handles {
            for key in handle.join().unwrap() {
                assert!(keys.insert(key), "duplicate key {}", key);
            }
        }

        assert_eq!(keys.len(), 2000);
        assert_eq!(keys, (0..2000).collect::<HashSet<u64>>());
        assert_eq!(log.len(), 2000);
    }

    #[test]
    fn test_keys_increase_per_thread() {
        let log = SharedLog::new();
        let mut handles = vec![];

        for _ in 0..4 {
            let log = log.clone();
            handles.push(thread::spawn(move || {
                let keys: Vec<u64> = (0..100).map(|_| log.append("x")).collect();
                assert!(keys.windows(2).all(|w| w[0] < w[1]));
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_concurrent_read_write() {
        let log = SharedLog::new();
        log.append("initial");

        let mut handles = vec![];

        // 5 readers
        for _ in 0..5 {
            let log = log.clone();
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    let records = log.list();
                    for (i, record) in records.iter().enumerate() {
                        assert_eq!(record.key, i as u64);
                    }
                }
            }));
        }

        // 5 writers
        for i in 0..5 {
            let log = log.clone();
            handles.push(thread::spawn(move || {
                for j in 0..100 {
                    let key = log.append(format!("writer_{}_{}", i, j));
                    assert_eq!(log.get(key).unwrap().key, key);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(log.len(), 501);
    }

    #[test]
    fn test_survives_poisoned_lock() {
        let log = SharedLog::new();
        log.append("before");

        let poisoner = log.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.lock().unwrap();
            panic!("poison the log");
        })
        .join();

        assert_eq!(log.append("after"), 1);
        assert_eq!(log.get(0).unwrap().value, Bytes::from_static(b"before"));
    }

    #[test]
    fn test_metrics_access() {
        let log = SharedLog::new();
        log.append("abc");
        let _ = log.get(0);
        let _ = log.get(9);
        log.list();

        let metrics = log.metrics();
        assert_eq!(metrics.appends.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.gets.load(Ordering::Relaxed), 2);
        assert_eq!(metrics.misses.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.bytes_read.load(Ordering::Relaxed), 6);
        assert_eq!(metrics.total_ops(), 4);
    }
}
