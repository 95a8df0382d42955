//! Service lifecycle.
//!
//! The [`Service`] owns the queue, the cooperative stop flag, and the
//! worker; producers attach through [`Service::queue`]. The intended run
//! sequence is: start producers, `start()` the service, join producers,
//! `request_stop()`, `join()`, then `collect_results()`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use calcq_core::TaskResult;

use crate::queue::TaskQueue;
use crate::worker::spawn_worker;

/// Lifecycle state of the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ServiceState {
    /// Constructed, worker not yet running.
    #[default]
    Created,
    /// Worker running, accepting and processing tasks.
    Running,
    /// Stop requested; the worker keeps draining the queue.
    StopRequested,
    /// Worker terminated; results are available.
    Stopped,
}

/// Service lifecycle errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("service already started")]
    AlreadyStarted,

    #[error("service was never started")]
    NotStarted,

    #[error("service has not stopped yet")]
    NotStopped,

    #[error("results already collected")]
    AlreadyCollected,

    #[error("worker panicked: {0}")]
    WorkerPanicked(String),
}

/// The task-processing service: one queue, one worker, one result log.
pub struct Service {
    queue: Arc<TaskQueue>,
    stop: Arc<AtomicBool>,
    state: ServiceState,
    worker: Option<JoinHandle<Vec<TaskResult>>>,
    results: Option<Vec<TaskResult>>,
}

impl Service {
    /// Create a service in the `Created` state.
    pub fn new() -> Self {
        Self {
            queue: Arc::new(TaskQueue::new()),
            stop: Arc::new(AtomicBool::new(false)),
            state: ServiceState::Created,
            worker: None,
            results: None,
        }
    }

    /// The shared queue, for binding producers.
    pub fn queue(&self) -> Arc<TaskQueue> {
        Arc::clone(&self.queue)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ServiceState {
        self.state
    }

    /// Start the worker. `Created -> Running`.
    pub fn start(&mut self) -> Result<(), ServiceError> {
        if self.state != ServiceState::Created {
            return Err(ServiceError::AlreadyStarted);
        }
        debug!("Starting service worker");
        self.worker = Some(spawn_worker(
            Arc::clone(&self.queue),
            Arc::clone(&self.stop),
        ));
        self.state = ServiceState::Running;
        Ok(())
    }

    /// Request a cooperative stop. `Running -> StopRequested`.
    ///
    /// Does not block and does not halt the worker by itself: the worker
    /// terminates only once it also observes an empty queue.
    pub fn request_stop(&mut self) -> Result<(), ServiceError> {
        if self.state != ServiceState::Running {
            return Err(ServiceError::NotStarted);
        }
        self.stop.store(true, Ordering::Release);
        self.queue.wake();
        self.state = ServiceState::StopRequested;
        debug!(pending = self.queue.len(), "Stop requested");
        Ok(())
    }

    /// Wait for the worker to terminate. `StopRequested -> Stopped`.
    ///
    /// Takes ownership of the worker's result log; after this returns,
    /// [`Service::collect_results`] succeeds.
    pub async fn join(&mut self) -> Result<(), ServiceError> {
        let worker = self.worker.take().ok_or(ServiceError::NotStarted)?;
        let results = worker
            .await
            .map_err(|e| ServiceError::WorkerPanicked(e.to_string()))?;
        info!(results = results.len(), "Service stopped");
        self.results = Some(results);
        self.state = ServiceState::Stopped;
        Ok(())
    }

    /// Move the result log out, in completion order.
    ///
    /// Callable exactly once, and only after [`Service::join`] returned.
    pub fn collect_results(&mut self) -> Result<Vec<TaskResult>, ServiceError> {
        if self.state != ServiceState::Stopped {
            return Err(ServiceError::NotStopped);
        }
        self.results.take().ok_or(ServiceError::AlreadyCollected)
    }
}

impl Default for Service {
    fn default() -> Self {
        Self::new()
    }
}
