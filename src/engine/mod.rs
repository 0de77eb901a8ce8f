//! MEMLOG - Log Engine Module
//! The append-only record sequence and its thread-safe handle.

pub mod concurrent;
pub mod metrics;

use crate::error::{LogError, Result};
use crate::types::{Key, Record, Value};

/// The append-only record sequence.
///
/// Keys are positions: the record at index `i` always carries key `i`.
/// This type is not synchronized; share it through
/// [`SharedLog`](concurrent::SharedLog).
#[derive(Debug, Default)]
pub struct MemLog {
    records: Vec<Record>,
}

impl MemLog {
    /// Create a new, empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Number of records in the log.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a value and return the key it was assigned.
    pub fn append(&mut self, value: Value) -> Key {
        let key = self.records.len() as Key; // = index of the new record
        self.records.push(Record { key, value });
        key
    }

    /// Look up the record at `key`.
    pub fn get(&self, key: Key) -> Result<Record> {
        usize::try_from(key)
            .ok()
            .and_then(|idx| self.records.get(idx))
            .cloned()
            .ok_or(LogError::KeyNotFound { key })
    }

    /// All records in append order.
    pub fn list(&self) -> Vec<Record> {
        self.records.clone()
    }
}
