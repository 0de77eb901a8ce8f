//! MEMLOG - In-Memory Append-Only Record Log
//!
//! A single, process-lifetime sequence of records. Every appended value is
//! assigned a key equal to its position, starting from zero.
//!
//! ## Features
//! - **MemLog**: Vec-backed sequence where key == index
//! - **SharedLog**: Thread-safe Arc + Mutex handle, cloned into every consumer
//! - **Metrics**: Lock-free atomic counters for observability
//! - **HTTP server**: axum front end speaking JSON or bincode
//!
//! ## Example
//! ```
//! use memlog::engine::concurrent::SharedLog;
//! use memlog::error::LogError;
//!
//! let log = SharedLog::new();
//!
//! assert_eq!(log.append("a"), 0);
//! assert_eq!(log.append("b"), 1);
//! assert_eq!(log.get(0).unwrap().value, "a");
//! assert_eq!(log.get(5), Err(LogError::KeyNotFound { key: 5 }));
//! assert_eq!(log.list().len(), 2);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod server;
pub mod types;
