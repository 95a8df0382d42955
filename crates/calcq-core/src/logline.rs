//! Persisted result log line format.
//!
//! One line per result, space separated, values fixed-point with 5
//! fractional digits:
//!
//! ```text
//! <index> Sin  <value> <x>
//! <index> Sqrt <value> <x>
//! <index> Pow  <value> <x> <y>
//! ```
//!
//! The field count depends on the kind token, so parsing branches on the
//! second token before reading the remaining fields.

use crate::error::LogLineError;
use crate::task::{TaskKind, TaskResult};

/// A parsed log line.
///
/// `y` is `0.0` for kinds that do not carry an exponent field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogEntry {
    /// Completion-order index of the result.
    pub index: usize,
    /// Task kind.
    pub kind: TaskKind,
    /// Logged value.
    pub value: f64,
    /// First operand.
    pub x: f64,
    /// Second operand, present only for `Pow` lines.
    pub y: f64,
}

/// Render one result as a log line, without a trailing newline.
pub fn render(index: usize, result: &TaskResult) -> String {
    if result.kind.uses_exponent() {
        format!(
            "{} {} {:.5} {:.5} {:.5}",
            index,
            result.kind.name(),
            result.value,
            result.x,
            result.y
        )
    } else {
        format!(
            "{} {} {:.5} {:.5}",
            index,
            result.kind.name(),
            result.value,
            result.x
        )
    }
}

fn parse_f64(field: &'static str, token: &str) -> Result<f64, LogLineError> {
    token.parse().map_err(|_| LogLineError::InvalidNumber {
        field,
        value: token.to_string(),
    })
}

/// Parse one log line.
pub fn parse(line: &str) -> Result<LogEntry, LogLineError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(LogLineError::FieldCount {
            expected: 4,
            got: tokens.len(),
        });
    }

    let kind = TaskKind::from_name(tokens[1])
        .ok_or_else(|| LogLineError::UnknownKind(tokens[1].to_string()))?;

    // Field count is determined by the kind, not a fixed schema.
    let expected = if kind.uses_exponent() { 5 } else { 4 };
    if tokens.len() != expected {
        return Err(LogLineError::FieldCount {
            expected,
            got: tokens.len(),
        });
    }

    let index = tokens[0]
        .parse()
        .map_err(|_| LogLineError::InvalidNumber {
            field: "index",
            value: tokens[0].to_string(),
        })?;
    let value = parse_f64("value", tokens[2])?;
    let x = parse_f64("x", tokens[3])?;
    let y = if kind.uses_exponent() {
        parse_f64("y", tokens[4])?
    } else {
        0.0
    };

    Ok(LogEntry {
        index,
        kind,
        value,
        x,
        y,
    })
}
