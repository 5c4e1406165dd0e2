//! Configuration for partition scoring.

use crate::error::InputError;

/// Configuration options for [`SimilarityScorer`](crate::SimilarityScorer).
///
/// The worker count is request-scoped: it is carried by the scorer instance
/// and applies only to calls made through it. No process-wide state is
/// touched when sizing the pool.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of worker threads for the parallel regions (default: 1).
    ///
    /// With the `parallel` feature off this value is validated but
    /// otherwise ignored; all work runs on the calling thread. Any worker
    /// count produces bit-identical results.
    pub workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { workers: 1 }
    }
}

impl Config {
    /// Check the configuration, rejecting a zero worker count.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.workers == 0 {
            return Err(InputError::ZeroWorkers);
        }
        Ok(())
    }
}
