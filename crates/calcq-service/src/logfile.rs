//! Result log persistence.
//!
//! Writes collected results in completion order, one line per result in
//! the format rendered by `calcq_core::logline`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use calcq_core::{logline, TaskResult};

/// Write every result to `w`, indexed by completion order from 0.
pub fn write_log<W: Write>(w: &mut W, results: &[TaskResult]) -> io::Result<()> {
    for (index, result) in results.iter().enumerate() {
        writeln!(w, "{}", logline::render(index, result))?;
    }
    Ok(())
}

/// Write the result log to a file, replacing any existing content.
pub fn write_log_file(path: &Path, results: &[TaskResult]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_log(&mut writer, results)?;
    writer.flush()?;
    info!(path = %path.display(), lines = results.len(), "Result log written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calcq_core::{Task, TaskKind};

    #[test]
    fn test_write_log_lines() {
        let results = vec![
            TaskResult::compute(&Task::new(TaskKind::Sine, 0.0, 0.0)),
            TaskResult::compute(&Task::new(TaskKind::Power, 2.0, 3.0)),
        ];
        let mut buf = Vec::new();
        write_log(&mut buf, &results).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "0 Sin 0.00000 0.00000\n1 Pow 8.00000 2.00000 3.00000\n");
    }

    #[test]
    fn test_write_log_file_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("output.txt");
        let results = vec![TaskResult::compute(&Task::new(TaskKind::SquareRoot, 16.0, 0.0))];

        write_log_file(&path, &results).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let entry = logline::parse(text.lines().next().unwrap()).unwrap();
        assert_eq!(entry.kind, TaskKind::SquareRoot);
        assert_eq!(entry.value, 4.0);
        assert_eq!(entry.x, 16.0);
    }
}
