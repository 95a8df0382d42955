//! Driver configuration.

use std::path::PathBuf;

use clap::Parser;

/// calcq - concurrent task-processing service driver
#[derive(Parser, Debug)]
#[command(name = "calcq-service")]
#[command(about = "Runs one task batch, writes the result log, and validates it", long_about = None)]
pub struct Config {
    /// Number of tasks each producer enqueues
    #[arg(long, default_value_t = 10_000)]
    pub tasks_per_producer: usize,

    /// Path of the persisted result log
    #[arg(short, long, default_value = "output.txt")]
    pub output: PathBuf,

    /// Base RNG seed; producer i is seeded with seed + i
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["calcq-service"]);
        assert_eq!(config.tasks_per_producer, 10_000);
        assert_eq!(config.output, PathBuf::from("output.txt"));
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_overrides() {
        let config = Config::parse_from([
            "calcq-service",
            "--tasks-per-producer",
            "100",
            "--output",
            "/tmp/log.txt",
            "--seed",
            "7",
        ]);
        assert_eq!(config.tasks_per_producer, 100);
        assert_eq!(config.output, PathBuf::from("/tmp/log.txt"));
        assert_eq!(config.seed, 7);
    }
}
