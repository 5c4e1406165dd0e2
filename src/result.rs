//! Aggregation result types.

use serde::{Deserialize, Serialize};

use crate::types::SimilarityMatrix;

/// Complete result of a cost aggregation over a partition collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostResult {
    /// N×N symmetric pairwise similarity matrix, diagonal fixed to 1.
    pub similarity: SimilarityMatrix,

    /// Per-partition cost: one minus the average similarity to the other
    /// partitions (averaged over N, see crate docs).
    pub cost: Vec<f64>,
}

impl CostResult {
    /// Number of partitions in the scored collection.
    pub fn n_partitions(&self) -> usize {
        self.cost.len()
    }

    /// Mean cost across the collection.
    pub fn mean_cost(&self) -> f64 {
        self.cost.iter().sum::<f64>() / self.cost.len() as f64
    }

    /// Index and cost of the most representative partition (lowest cost).
    ///
    /// Ties resolve to the lowest index.
    pub fn best(&self) -> (usize, f64) {
        let mut best_idx = 0;
        for (idx, &c) in self.cost.iter().enumerate() {
            if c < self.cost[best_idx] {
                best_idx = idx;
            }
        }
        (best_idx, self.cost[best_idx])
    }
}
