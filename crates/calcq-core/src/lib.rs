//! calcq Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - The async runtime
//! - Threads or synchronization primitives
//! - File I/O
//!
//! All types here represent the core computation domain of calcq: task
//! kinds, tasks, results, and the persisted log line format.

pub mod error;
pub mod logline;
pub mod task;

// Re-export commonly used types
pub use error::LogLineError;
pub use logline::LogEntry;
pub use task::{Task, TaskKind, TaskResult};
