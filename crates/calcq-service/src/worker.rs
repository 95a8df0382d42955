//! The single consumer loop.
//!
//! Exactly one worker drains the queue. It owns the result log outright
//! while running (no lock on appends) and hands it back through its
//! `JoinHandle` when it terminates; awaiting the handle is the
//! happens-before edge that makes the log safe to read.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, trace};

use calcq_core::TaskResult;

use crate::queue::TaskQueue;

/// Spawn the worker loop.
///
/// Per iteration: arm the queue wakeup, atomically check-and-pop, and
/// either compute-and-append or, on an empty queue, check the stop flag
/// and park. The loop only exits when a dequeue attempt came back empty
/// *while* stop was already requested, so a task enqueued after the stop
/// request is still processed — stop never truncates pending work.
pub fn spawn_worker(
    queue: Arc<TaskQueue>,
    stop: Arc<AtomicBool>,
) -> JoinHandle<Vec<TaskResult>> {
    tokio::spawn(async move {
        debug!("Worker started");
        let mut results: Vec<TaskResult> = Vec::new();

        loop {
            // Armed before the dequeue attempt so an enqueue landing in
            // between is not lost.
            let notified = queue.notified();

            if let Some(task) = queue.try_dequeue() {
                let result = TaskResult::compute(&task);
                trace!(
                    kind = task.kind.name(),
                    x = task.x,
                    y = task.y,
                    value = result.value,
                    "Processed task"
                );
                results.push(result);
                continue;
            }

            // Stop is only honored once the queue was observed empty.
            if stop.load(Ordering::Acquire) {
                break;
            }

            notified.await;
        }

        info!(results = results.len(), "Worker terminated");
        results
    })
}
