//! calcq Service Driver
//!
//! Runs one batch: three producers (Sine, SquareRoot, Power) feed one
//! service, the result log is written to disk, and the validator
//! re-checks the persisted file.

use std::process::ExitCode;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod logfile;
mod producer;
mod queue;
mod service;
mod validator;
mod worker;

use calcq_core::{TaskKind, TaskResult};
use config::Config;
use producer::Producer;
use service::Service;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::parse();
    info!(
        tasks_per_producer = config.tasks_per_producer,
        output = %config.output.display(),
        seed = config.seed,
        "Starting calcq batch"
    );

    let results = run_batch(&config).await?;
    logfile::write_log_file(&config.output, &results)?;

    if validator::validate_file(&config.output)? {
        println!("Everything is correct!");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("Something went wrong!");
        Ok(ExitCode::FAILURE)
    }
}

/// Run one 3-producer batch to completion and collect the result log.
async fn run_batch(config: &Config) -> Result<Vec<TaskResult>, Box<dyn std::error::Error>> {
    let mut service = Service::new();

    let producers: Vec<_> = [TaskKind::Sine, TaskKind::SquareRoot, TaskKind::Power]
        .into_iter()
        .enumerate()
        .map(|(i, kind)| {
            Producer::new(service.queue(), kind, config.seed + i as u64)
                .start(config.tasks_per_producer)
        })
        .collect();

    service.start()?;

    for handle in producers {
        handle.join().await?;
    }

    service.request_stop()?;
    service.join().await?;

    Ok(service.collect_results()?)
}
