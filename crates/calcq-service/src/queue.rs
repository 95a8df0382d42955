//! Shared task queue.
//!
//! A thread-safe, unbounded FIFO shared by all producers and the single
//! worker. Emptiness check and removal happen under one lock acquisition
//! (`try_dequeue`), never as separate critical sections. The worker parks
//! on the queue's [`Notify`] instead of polling; every enqueue and the
//! service stop-request wake it.

use std::collections::VecDeque;
use std::sync::Mutex;

use tokio::sync::futures::Notified;
use tokio::sync::Notify;

use calcq_core::Task;

/// Unbounded FIFO of pending tasks.
///
/// Per-producer enqueue order is preserved; interleaving across
/// concurrent producers is unspecified. There is no capacity bound and
/// no backpressure.
#[derive(Debug, Default)]
pub struct TaskQueue {
    tasks: Mutex<VecDeque<Task>>,
    available: Notify,
}

impl TaskQueue {
    /// Create a new, empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task to the tail and wake the worker.
    ///
    /// Never blocks beyond the lock hold and never fails. A poisoned
    /// lock means a producer or the worker already panicked mid-section,
    /// which is unrecoverable here.
    pub fn enqueue(&self, task: Task) {
        self.tasks.lock().unwrap().push_back(task);
        self.available.notify_one();
    }

    /// Atomically check for and remove the head task.
    ///
    /// Returns `None` without blocking if the queue is empty. The
    /// emptiness read and the pop are a single critical section.
    pub fn try_dequeue(&self) -> Option<Task> {
        self.tasks.lock().unwrap().pop_front()
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.tasks.lock().unwrap().len()
    }

    /// Whether the queue is currently empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.lock().unwrap().is_empty()
    }

    /// A future resolving on the next wakeup.
    ///
    /// The worker must arm this *before* its dequeue attempt so an
    /// enqueue landing between the failed attempt and the await is not
    /// lost.
    pub fn notified(&self) -> Notified<'_> {
        self.available.notified()
    }

    /// Wake the worker so it re-checks the stop flag.
    ///
    /// `notify_one` stores a permit when nobody is parked yet, so a
    /// stop request can never slip between the worker's failed dequeue
    /// and its await.
    pub fn wake(&self) {
        self.available.notify_one();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calcq_core::TaskKind;
    use std::sync::Arc;

    #[test]
    fn test_fifo_order() {
        let queue = TaskQueue::new();
        for i in 0..5 {
            queue.enqueue(Task::new(TaskKind::Sine, i as f64, 0.0));
        }
        for i in 0..5 {
            let task = queue.try_dequeue().unwrap();
            assert_eq!(task.x, i as f64);
        }
        assert!(queue.try_dequeue().is_none());
    }

    #[test]
    fn test_try_dequeue_empty_is_none() {
        let queue = TaskQueue::new();
        assert!(queue.is_empty());
        assert!(queue.try_dequeue().is_none());
        // A failed dequeue must not disturb later enqueues.
        queue.enqueue(Task::new(TaskKind::Power, 2.0, 3.0));
        assert_eq!(queue.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_enqueues_all_land() {
        let queue = Arc::new(TaskQueue::new());
        let mut handles = Vec::new();
        for p in 0..4 {
            let queue = Arc::clone(&queue);
            handles.push(tokio::spawn(async move {
                for i in 0..100 {
                    queue.enqueue(Task::new(TaskKind::SquareRoot, (p * 100 + i) as f64, 0.0));
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(queue.len(), 400);
    }

    #[tokio::test]
    async fn test_notified_wakes_on_enqueue() {
        let queue = Arc::new(TaskQueue::new());
        let waiter = {
            let queue = Arc::clone(&queue);
            tokio::spawn(async move {
                let notified = queue.notified();
                match queue.try_dequeue() {
                    Some(task) => Some(task),
                    None => {
                        notified.await;
                        queue.try_dequeue()
                    }
                }
            })
        };
        // Give the waiter a chance to park first.
        tokio::task::yield_now().await;
        queue.enqueue(Task::new(TaskKind::Sine, 1.0, 0.0));
        let task = waiter.await.unwrap();
        assert!(task.is_some());
    }
}
