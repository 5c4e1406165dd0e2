//! # partition-cost
//!
//! Score collections of clustering partitions.
//!
//! Given two label assignments over the same items, this crate computes
//! their best-match F-measure similarity. Given a whole collection of
//! partitions (e.g. posterior draws from an MCMC sampler), it computes the
//! full pairwise similarity matrix and a per-partition cost — one minus the
//! average similarity to the rest of the collection — which can serve as a
//! loss for selecting a representative partition.
//!
//! Labels are arbitrary `f64` values compared for equality only; relabeling
//! a partition does not change any score.
//!
//! ## Quick Start
//!
//! ```
//! let a = vec![1.0, 1.0, 2.0, 3.0, 2.0, 3.0];
//! let b = vec![1.0, 1.0, 1.0, 2.0, 3.0, 3.0];
//!
//! let s = partition_cost::fmeasure(&a, &b).unwrap();
//! assert!((s - 61.0 / 90.0).abs() < 1e-12);
//!
//! let result = partition_cost::aggregate_cost(&[a, b]).unwrap();
//! assert_eq!(result.n_partitions(), 2);
//! ```
//!
//! ## Parallelism
//!
//! With the `parallel` feature (on by default), pairwise comparisons run on
//! a rayon pool sized by the caller:
//!
//! ```
//! use partition_cost::SimilarityScorer;
//!
//! let partitions = vec![
//!     vec![1.0, 1.0, 2.0, 3.0, 2.0, 3.0],
//!     vec![1.0, 1.0, 1.0, 2.0, 3.0, 3.0],
//!     vec![2.0, 2.0, 1.0, 1.0, 1.0, 1.0],
//! ];
//!
//! let result = SimilarityScorer::new()
//!     .workers(2)
//!     .aggregate(&partitions)
//!     .unwrap();
//! assert_eq!(result.cost.len(), 3);
//! ```
//!
//! Results are bit-identical for any worker count: every parallel unit
//! writes a disjoint output slot and all reductions run in index order.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod error;
mod result;
mod scorer;
mod similarity;
mod thread_pool;
mod types;

// Functional modules
pub mod likelihood;
pub mod output;

// Re-exports for public API
pub use config::Config;
pub use constants::LOG_2PI;
pub use error::InputError;
pub use likelihood::{mvn_likelihood, MvnLikelihood};
pub use result::CostResult;
pub use scorer::SimilarityScorer;
pub use types::SimilarityMatrix;

/// Convenience function: best-match F-measure similarity with one worker.
///
/// Equivalent to `SimilarityScorer::new().fmeasure(pred, reference)`.
///
/// # Errors
///
/// Returns [`InputError`] if either slice is empty or their lengths differ.
pub fn fmeasure(pred: &[f64], reference: &[f64]) -> Result<f64, InputError> {
    SimilarityScorer::new().fmeasure(pred, reference)
}

/// Convenience function: similarity matrix and cost vector with one worker.
///
/// Equivalent to `SimilarityScorer::new().aggregate(partitions)`.
///
/// # Errors
///
/// Returns [`InputError`] if the collection is empty, a partition is empty,
/// or the partitions do not all have the same length.
pub fn aggregate_cost<P>(partitions: &[P]) -> Result<CostResult, InputError>
where
    P: AsRef<[f64]> + Sync,
{
    SimilarityScorer::new().aggregate(partitions)
}
