//! Task producers.
//!
//! Each producer is bound to one task kind and one shared queue. It
//! enqueues a fixed number of tasks on its own task, with operands
//! drawn from a per-producer seeded RNG so a run is reproducible under
//! test. Producers never observe each other's state.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::{JoinError, JoinHandle};
use tracing::debug;

use calcq_core::{Task, TaskKind};

use crate::queue::TaskQueue;

/// A producer of tasks of one fixed kind.
pub struct Producer {
    queue: Arc<TaskQueue>,
    kind: TaskKind,
    seed: u64,
}

impl Producer {
    /// Create a producer bound to a queue and a kind.
    ///
    /// `seed` initializes this producer's private RNG; equal seeds give
    /// equal task sequences.
    pub fn new(queue: Arc<TaskQueue>, kind: TaskKind, seed: u64) -> Self {
        Self { queue, kind, seed }
    }

    /// Spawn the producing task, enqueuing `count` tasks.
    ///
    /// Operands are integers coerced to f64: `x` in `0..100`, `y` in
    /// `0..4`. Enqueue order within this producer is its generation
    /// order.
    pub fn start(self, count: usize) -> ProducerHandle {
        let handle = tokio::spawn(async move {
            let mut rng = StdRng::seed_from_u64(self.seed);
            for _ in 0..count {
                let x = rng.gen_range(0..100) as f64;
                let y = rng.gen_range(0..4) as f64;
                self.queue.enqueue(Task::new(self.kind, x, y));
            }
            debug!(kind = self.kind.name(), count, "Producer finished");
            count
        });
        ProducerHandle { handle }
    }
}

/// Handle to a running producer.
pub struct ProducerHandle {
    handle: JoinHandle<usize>,
}

impl ProducerHandle {
    /// Wait until the producer has enqueued everything.
    ///
    /// Returns the number of tasks enqueued; fails only if the producer
    /// task panicked.
    pub async fn join(self) -> Result<usize, JoinError> {
        self.handle.await
    }
}
