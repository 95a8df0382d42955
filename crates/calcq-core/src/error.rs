//! Core domain errors.

use thiserror::Error;

/// Errors raised while parsing a persisted log line.
///
/// The log is an external artifact and may have been hand-edited, so
/// these are recoverable: the validator turns any of them into a failed
/// verdict rather than aborting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LogLineError {
    /// Line does not have the field count its kind requires.
    #[error("wrong field count: expected {expected}, got {got}")]
    FieldCount { expected: usize, got: usize },

    /// Second token is not a known task kind name.
    #[error("unknown task kind: {0}")]
    UnknownKind(String),

    /// A field that should be numeric did not parse.
    #[error("invalid numeric field '{field}': {value}")]
    InvalidNumber { field: &'static str, value: String },
}
