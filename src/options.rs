// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The knobs a render is run with.  Once a render starts these are not
//! mutated.

use crate::errors::RenderError;
use crate::escape::MAX_ITERATIONS;

/// Default size of the worker pool.
pub const DEFAULT_WORKERS: usize = 4;

/// Parameters shared by the sequential and concurrent renderers.  The
/// sequential renderer only looks at `iterations`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Iteration budget per point.
    pub iterations: usize,
    /// Number of worker threads in the concurrent renderer.
    pub workers: usize,
    /// How many work items may wait in the queue.  Zero means every
    /// item is handed directly from the producer to a worker.
    pub queue_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            iterations: MAX_ITERATIONS,
            workers: DEFAULT_WORKERS,
            queue_depth: 0,
        }
    }
}

impl RenderOptions {
    /// Same options with a different worker count.
    pub fn with_workers(self, workers: usize) -> Self {
        RenderOptions { workers, ..self }
    }

    /// Same options with a different iteration budget.
    pub fn with_iterations(self, iterations: usize) -> Self {
        RenderOptions { iterations, ..self }
    }

    /// Same options with a different work queue depth.
    pub fn with_queue_depth(self, queue_depth: usize) -> Self {
        RenderOptions {
            queue_depth,
            ..self
        }
    }

    /// A pool without workers would never drain the queue.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.workers == 0 {
            return Err(RenderError::NoWorkers);
        }
        Ok(())
    }
}
