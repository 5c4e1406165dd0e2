//! Input validation errors.
//!
//! Every public entry point validates its inputs before any computation
//! starts; a failed validation returns one of these variants and no partial
//! result is produced. The computation itself is deterministic and pure, so
//! retrying a failed call without changing the input will fail identically.

/// Error type for invalid inputs to the scoring and likelihood routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Two partitions (or a partition and the collection's expected length)
    /// do not have the same number of items.
    LengthMismatch {
        /// Length every partition in the call is expected to have.
        expected: usize,
        /// Length actually found.
        actual: usize,
    },
    /// A partition contains no items.
    EmptyPartition,
    /// The partition collection contains no partitions.
    EmptyCollection,
    /// The requested worker count is zero.
    ZeroWorkers,
    /// A dimension of a likelihood input does not match the data.
    DimensionMismatch {
        /// Which input the mismatch was found in.
        what: &'static str,
        /// Size implied by the data matrix.
        expected: usize,
        /// Size actually found.
        actual: usize,
    },
    /// A covariance matrix has no Cholesky factorization.
    NotPositiveDefinite {
        /// Index of the offending cluster.
        cluster: usize,
    },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "partition length mismatch: expected {} items, got {}",
                    expected, actual
                )
            }
            InputError::EmptyPartition => write!(f, "partition contains no items"),
            InputError::EmptyCollection => write!(f, "partition collection is empty"),
            InputError::ZeroWorkers => write!(f, "worker count must be at least 1"),
            InputError::DimensionMismatch {
                what,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "dimension mismatch in {}: expected {}, got {}",
                    what, expected, actual
                )
            }
            InputError::NotPositiveDefinite { cluster } => {
                write!(
                    f,
                    "covariance matrix of cluster {} is not positive definite",
                    cluster
                )
            }
        }
    }
}

impl std::error::Error for InputError {}
