//! Offline log validation.
//!
//! Re-parses the persisted log and recomputes the expected value for
//! every entry from its own operands. The log is an external artifact
//! that may have been hand-edited, so a malformed line is a failed
//! verdict, never a panic or an error.

use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

use calcq_core::logline;

/// Absolute-difference tolerance for the recomputation check.
pub const TOLERANCE: f64 = 0.1;

/// Validate parsed log lines; blank lines are skipped.
///
/// Returns `true` only if every entry parses and its logged value is
/// within [`TOLERANCE`] of the recomputed one. The scan short-circuits
/// on the first failure. A NaN on either side fails the comparison,
/// which is how square roots of negative operands surface.
pub fn validate_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> bool {
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let entry = match logline::parse(line) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, line, "Malformed log line");
                return false;
            }
        };
        let expected = entry.kind.apply(entry.x, entry.y);
        // NaN never satisfies the comparison, so NaN entries fail here.
        let within = (entry.value - expected).abs() <= TOLERANCE;
        if !within {
            warn!(
                index = entry.index,
                kind = entry.kind.name(),
                logged = entry.value,
                expected,
                "Log entry out of tolerance"
            );
            return false;
        }
    }
    true
}

/// Validate a persisted log file.
///
/// I/O failures are real errors; malformed content is a `false` verdict.
pub fn validate_file(path: &Path) -> io::Result<bool> {
    let text = fs::read_to_string(path)?;
    Ok(validate_lines(text.lines()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logfile::write_log_file;
    use calcq_core::{Task, TaskKind, TaskResult};

    #[test]
    fn test_valid_lines_pass() {
        let lines = [
            "0 Sin 0.00000 0.00000",
            "1 Pow 8.00000 2.00000 3.00000",
            "2 Sqrt 4.00000 16.00000",
        ];
        assert!(validate_lines(lines));
    }

    #[test]
    fn test_value_off_by_half_fails() {
        // sqrt(16) = 4; 4.5 is outside the 0.1 tolerance.
        let lines = ["0 Sin 0.00000 0.00000", "1 Sqrt 4.50000 16.00000"];
        assert!(!validate_lines(lines));
    }

    #[test]
    fn test_value_within_tolerance_passes() {
        assert!(validate_lines(["0 Sqrt 4.05000 16.00000"]));
    }

    #[test]
    fn test_malformed_line_fails_whole_file() {
        let lines = ["0 Sin 0.00000 0.00000", "not a log line"];
        assert!(!validate_lines(lines));
    }

    #[test]
    fn test_blank_lines_skipped() {
        assert!(validate_lines(["0 Sin 0.00000 0.00000", "", "  "]));
    }

    #[test]
    fn test_verdict_is_idempotent() {
        let lines = ["0 Pow 8.00000 2.00000 3.00000"];
        assert_eq!(validate_lines(lines), validate_lines(lines));

        let bad = ["0 Pow 9.00000 2.00000 3.00000"];
        assert_eq!(validate_lines(bad), validate_lines(bad));
        assert!(!validate_lines(bad));
    }

    #[test]
    fn test_validate_file_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("output.txt");
        let results: Vec<TaskResult> = [
            Task::new(TaskKind::Sine, 42.0, 0.0),
            Task::new(TaskKind::SquareRoot, 99.0, 0.0),
            Task::new(TaskKind::Power, 3.0, 3.0),
        ]
        .iter()
        .map(TaskResult::compute)
        .collect();

        write_log_file(&path, &results).unwrap();
        assert!(validate_file(&path).unwrap());
        // Same file, same verdict.
        assert!(validate_file(&path).unwrap());
    }

    #[test]
    fn test_validate_missing_file_is_io_error() {
        assert!(validate_file(Path::new("/nonexistent/output.txt")).is_err());
    }
}
