//! Type aliases and common types.

use nalgebra::DMatrix;

/// N×N symmetric matrix of pairwise partition similarities.
///
/// Diagonal entries are 1 by convention (self-similarity); off-diagonal
/// entries are best-match F-measure values in [0, 1].
pub type SimilarityMatrix = DMatrix<f64>;
