//! Main `SimilarityScorer` entry point and builder.

use crate::config::Config;
use crate::error::InputError;
use crate::result::CostResult;
use crate::similarity::{aggregate_of, fmeasure_of};
use crate::thread_pool::run_with_workers;

/// Main entry point for partition scoring.
///
/// Use the builder pattern to configure the worker count, then score
/// individual pairs or whole collections. A scorer is cheap to build and
/// carries no state beyond its configuration; it may be reused and shared
/// across threads freely.
///
/// # Example
///
/// ```
/// use partition_cost::SimilarityScorer;
///
/// let scorer = SimilarityScorer::new().workers(4);
///
/// let a = [1.0, 1.0, 2.0, 2.0];
/// let b = [5.0, 5.0, 9.0, 9.0];
/// let s = scorer.fmeasure(&a, &b).unwrap();
/// assert!((s - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimilarityScorer {
    config: Config,
}

impl SimilarityScorer {
    /// Create with default configuration (one worker).
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the worker count for the parallel regions.
    ///
    /// Zero is rejected with [`InputError::ZeroWorkers`] at call time.
    pub fn workers(mut self, n: usize) -> Self {
        self.config.workers = n;
        self
    }

    /// Access the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Best-match F-measure similarity of `pred` against `reference`.
    ///
    /// Both slices label the same items in the same index order. The
    /// result lies in [0, 1]; note that the measure weights by
    /// reference-cluster size and is therefore not symmetric in its
    /// arguments for arbitrary inputs.
    ///
    /// # Errors
    ///
    /// - [`InputError::EmptyPartition`] if either slice is empty
    /// - [`InputError::LengthMismatch`] if the lengths differ
    /// - [`InputError::ZeroWorkers`] if the configured worker count is 0
    pub fn fmeasure(&self, pred: &[f64], reference: &[f64]) -> Result<f64, InputError> {
        self.config.validate()?;
        if pred.is_empty() || reference.is_empty() {
            return Err(InputError::EmptyPartition);
        }
        if pred.len() != reference.len() {
            return Err(InputError::LengthMismatch {
                expected: pred.len(),
                actual: reference.len(),
            });
        }

        Ok(run_with_workers(self.config.workers, || {
            fmeasure_of(pred, reference)
        }))
    }

    /// Pairwise similarity matrix and cost vector for a collection.
    ///
    /// Every unordered pair of partitions is scored once and mirrored, the
    /// diagonal is fixed to 1, and each partition's cost is one minus its
    /// average similarity to the others (averaged over N; see crate docs
    /// for the N=1 consequence).
    ///
    /// # Errors
    ///
    /// - [`InputError::EmptyCollection`] if `partitions` is empty
    /// - [`InputError::EmptyPartition`] if the partitions have no items
    /// - [`InputError::LengthMismatch`] if any partition's length differs
    ///   from the first one's
    /// - [`InputError::ZeroWorkers`] if the configured worker count is 0
    pub fn aggregate<P>(&self, partitions: &[P]) -> Result<CostResult, InputError>
    where
        P: AsRef<[f64]> + Sync,
    {
        self.config.validate()?;
        if partitions.is_empty() {
            return Err(InputError::EmptyCollection);
        }

        let parts: Vec<&[f64]> = partitions.iter().map(AsRef::as_ref).collect();
        let expected = parts[0].len();
        if expected == 0 {
            return Err(InputError::EmptyPartition);
        }
        for part in &parts[1..] {
            if part.len() != expected {
                return Err(InputError::LengthMismatch {
                    expected,
                    actual: part.len(),
                });
            }
        }

        Ok(run_with_workers(self.config.workers, || {
            aggregate_of(&parts)
        }))
    }
}
