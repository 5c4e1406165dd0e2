//! Similarity matrix and cost vector over a partition collection.

use nalgebra::DMatrix;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::fmeasure_of;
use crate::result::CostResult;

/// Pairwise similarity matrix and per-partition cost for a collection.
///
/// The matrix starts as the N×N identity (self-similarity is 1 by
/// convention); each unordered pair (i, j), i < j is scored once with
/// [`fmeasure_of`] and mirrored into both cells, so the matrix is
/// symmetric by construction. The cost of partition k is
///
/// ```text
/// cost[k] = 1 - (colsum(k) - 1) / N
/// ```
///
/// one minus its average similarity to the other partitions, with the
/// average deliberately taken over N rather than N-1: the literal formula
/// is kept for compatibility with existing results. Consequences, pinned
/// by tests: K identical partitions cost 1/K each, and a singleton
/// collection costs exactly 1.
///
/// The pair scores are an order-preserving parallel map over the (i, j)
/// list and each column sum runs in index order, so the output is
/// bit-identical at any worker count.
///
/// Callers must have validated that the collection is non-empty and that
/// all partitions share one non-zero length.
pub(crate) fn aggregate_of(partitions: &[&[f64]]) -> CostResult {
    let n = partitions.len();
    let mut similarity = DMatrix::identity(n, n);

    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect();

    #[cfg(feature = "parallel")]
    let scores: Vec<f64> = pairs
        .par_iter()
        .map(|&(i, j)| fmeasure_of(partitions[i], partitions[j]))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let scores: Vec<f64> = pairs
        .iter()
        .map(|&(i, j)| fmeasure_of(partitions[i], partitions[j]))
        .collect();

    for (&(i, j), &s) in pairs.iter().zip(scores.iter()) {
        similarity[(i, j)] = s;
        similarity[(j, i)] = s;
    }

    let n_f = n as f64;

    #[cfg(feature = "parallel")]
    let cost: Vec<f64> = (0..n)
        .into_par_iter()
        .map(|k| column_cost(&similarity, k, n_f))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let cost: Vec<f64> = (0..n).map(|k| column_cost(&similarity, k, n_f)).collect();

    CostResult { similarity, cost }
}

/// 1 - (colsum - 1)/N for one column; the "-1" removes the diagonal before
/// averaging.
fn column_cost(similarity: &DMatrix<f64>, k: usize, n: f64) -> f64 {
    let colsum: f64 = similarity.column(k).iter().sum();
    1.0 - (colsum - 1.0) / n
}
