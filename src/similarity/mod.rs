//! Pairwise F-measure similarity and cost aggregation.
//!
//! This module holds the core computation:
//! - sorted distinct label extraction and label counting
//! - best-match F-measure between two partitions
//! - the N×N similarity matrix and per-partition cost vector

mod cost;
mod fmeasure;
mod labels;

pub(crate) use cost::aggregate_of;
pub(crate) use fmeasure::fmeasure_of;
