//! MEMLOG - Custom Error Types
//! The log core has a single failure mode: reading past the end.

use thiserror::Error;

/// Custom Result type for log operations.
pub type Result<T> = std::result::Result<T, LogError>;

/// Error types for the record log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    /// No record has been assigned this key yet.
    #[error("key not found: {key}")]
    KeyNotFound { key: u64 },
}
