//! Label set extraction and counting.
//!
//! Labels are `f64` values interpreted as categorical cluster ids. They
//! are ordered with `total_cmp` and matched bit-for-bit, so every distinct
//! bit pattern is its own cluster id (in particular a NaN label is a
//! regular cluster value rather than one that matches nothing).

/// Distinct label values of a partition, sorted ascending.
///
/// The result is never empty for a non-empty input, which is what
/// guarantees nonzero cluster cardinalities downstream.
pub(crate) fn distinct_labels(values: &[f64]) -> Vec<f64> {
    let mut labels = values.to_vec();
    labels.sort_by(|a, b| a.total_cmp(b));
    labels.dedup_by(|a, b| a.to_bits() == b.to_bits());
    labels
}

/// Number of items carrying `label`, as a float for use in ratios.
pub(crate) fn cardinality(values: &[f64], label: f64) -> f64 {
    let bits = label.to_bits();
    values.iter().filter(|v| v.to_bits() == bits).count() as f64
}

/// Number of items in reference-cluster `ref_label` AND predicted-cluster
/// `pred_label`, i.e. one cell of the contingency table.
pub(crate) fn joint_count(
    reference: &[f64],
    ref_label: f64,
    pred: &[f64],
    pred_label: f64,
) -> f64 {
    let ref_bits = ref_label.to_bits();
    let pred_bits = pred_label.to_bits();
    reference
        .iter()
        .zip(pred.iter())
        .filter(|(r, p)| r.to_bits() == ref_bits && p.to_bits() == pred_bits)
        .count() as f64
}
