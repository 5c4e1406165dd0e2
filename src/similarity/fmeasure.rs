//! Best-match F-measure between two partitions.

use super::labels::{cardinality, distinct_labels, joint_count};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Best-match F-measure similarity of `pred` against `reference`.
///
/// For every pair of a reference cluster c and a predicted cluster k, the
/// contingency count M(c,k) yields precision M(c,k)/|k| and recall
/// M(c,k)/|c|, combined into F(c,k) = 2·Pr·Re/(Pr+Re) with F = 0 when
/// Pr+Re = 0 (the harmonic mean is undefined on an empty cell). Each
/// reference cluster keeps its best-matching predicted cluster, and the
/// per-cluster maxima are averaged weighted by reference-cluster size.
///
/// The result lies in [0, 1]. It is 1 when the two partitions group the
/// items identically (up to relabeling), and is NOT symmetric in its
/// arguments in general: the reference partition supplies the weights.
///
/// Uses whatever rayon pool is installed on the calling thread; the F
/// columns and the final reduction are collected in index order, so the
/// result is bit-identical at any worker count.
///
/// Callers must have validated that the slices are non-empty and of equal
/// length.
pub(crate) fn fmeasure_of(pred: &[f64], reference: &[f64]) -> f64 {
    debug_assert!(!pred.is_empty());
    debug_assert_eq!(pred.len(), reference.len());

    let total_items = reference.len() as f64;
    let pred_labels = distinct_labels(pred);
    let ref_labels = distinct_labels(reference);

    let ref_card: Vec<f64> = ref_labels
        .iter()
        .map(|&c| cardinality(reference, c))
        .collect();

    // One F column per predicted cluster. Columns are independent, so this
    // is the inner parallel loop; order-preserving collect keeps the
    // layout identical to the sequential path.
    #[cfg(feature = "parallel")]
    let f_columns: Vec<Vec<f64>> = pred_labels
        .par_iter()
        .map(|&k| f_column(pred, reference, k, &ref_labels, &ref_card))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let f_columns: Vec<Vec<f64>> = pred_labels
        .iter()
        .map(|&k| f_column(pred, reference, k, &ref_labels, &ref_card))
        .collect();

    // Best-match reduction: each reference cluster keeps its maximum F,
    // weighted by cluster size. Rows are independent, one output slot each.
    #[cfg(feature = "parallel")]
    let weighted: Vec<f64> = (0..ref_labels.len())
        .into_par_iter()
        .map(|c| best_match_weight(&f_columns, c, ref_card[c], total_items))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let weighted: Vec<f64> = (0..ref_labels.len())
        .map(|c| best_match_weight(&f_columns, c, ref_card[c], total_items))
        .collect();

    // Final sum in index order for determinism.
    weighted.iter().sum()
}

/// F(c, k) for all reference clusters c against one predicted cluster k.
fn f_column(
    pred: &[f64],
    reference: &[f64],
    pred_label: f64,
    ref_labels: &[f64],
    ref_card: &[f64],
) -> Vec<f64> {
    // Nonzero because pred_label was derived from pred itself.
    let pred_card = cardinality(pred, pred_label);

    ref_labels
        .iter()
        .zip(ref_card.iter())
        .map(|(&c, &c_card)| {
            let joint = joint_count(reference, c, pred, pred_label);
            let precision = joint / pred_card;
            let recall = joint / c_card;
            if precision + recall == 0.0 {
                0.0
            } else {
                2.0 * precision * recall / (precision + recall)
            }
        })
        .collect()
}

/// max_k F(c,k) · |c| / n for reference cluster index `c`.
fn best_match_weight(f_columns: &[Vec<f64>], c: usize, c_card: f64, total_items: f64) -> f64 {
    let best = f_columns
        .iter()
        .map(|column| column[c])
        .fold(0.0_f64, f64::max);
    best * c_card / total_items
}
