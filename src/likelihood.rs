//! Multivariate Normal likelihood for clustered data points.
//!
//! Evaluates the per-observation, per-cluster, and total (log-)likelihood
//! of a clustered dataset under cluster-specific Gaussian parameters. Each
//! cluster's covariance is Cholesky-factored once; observations assigned
//! to that cluster then share the factor for their quadratic forms.

use nalgebra::{Cholesky, DMatrix};
use serde::{Deserialize, Serialize};

use crate::constants::LOG_2PI;
use crate::error::InputError;

/// Likelihood of a clustered dataset under per-cluster Normal densities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MvnLikelihood {
    /// Per-observation (log-)likelihood, length n, in data column order.
    pub indiv: Vec<f64>,

    /// Per-cluster (log-)likelihood, length K, in cluster-value order.
    pub clust: Vec<f64>,

    /// Total (log-)likelihood over all observations.
    pub total: f64,
}

/// Evaluate per-cluster multivariate Normal (log-)likelihoods.
///
/// # Arguments
///
/// * `x` - data matrix of dimension p×n; each column is one observation
/// * `labels` - length-n cluster assignment, one label per column of `x`
/// * `cluster_values` - the K distinct label values, in the order that
///   matches the columns of `means` and the entries of `covariances`
/// * `means` - p×K matrix of cluster mean vectors
/// * `covariances` - K covariance matrices, each p×p
/// * `log_scale` - return log-likelihoods when true, plain likelihoods
///   when false
///
/// Observations whose label matches none of `cluster_values` contribute
/// nothing: their `indiv` entry stays 0 (or 1 after exponentiation).
///
/// # Errors
///
/// Dimension disagreements are reported as [`InputError::LengthMismatch`]
/// or [`InputError::DimensionMismatch`] before any factorization runs. A
/// covariance matrix without a Cholesky factorization yields
/// [`InputError::NotPositiveDefinite`] with the offending cluster index.
pub fn mvn_likelihood(
    x: &DMatrix<f64>,
    labels: &[f64],
    cluster_values: &[f64],
    means: &DMatrix<f64>,
    covariances: &[DMatrix<f64>],
    log_scale: bool,
) -> Result<MvnLikelihood, InputError> {
    let p = x.nrows();
    let n = x.ncols();
    let k_clusters = cluster_values.len();

    if n == 0 {
        return Err(InputError::EmptyPartition);
    }
    if p == 0 {
        return Err(InputError::DimensionMismatch {
            what: "data rows (p)",
            expected: 1,
            actual: 0,
        });
    }
    if labels.len() != n {
        return Err(InputError::LengthMismatch {
            expected: n,
            actual: labels.len(),
        });
    }
    if k_clusters == 0 {
        return Err(InputError::EmptyCollection);
    }
    if means.nrows() != p {
        return Err(InputError::DimensionMismatch {
            what: "mean vector rows",
            expected: p,
            actual: means.nrows(),
        });
    }
    if means.ncols() != k_clusters {
        return Err(InputError::DimensionMismatch {
            what: "mean vector count",
            expected: k_clusters,
            actual: means.ncols(),
        });
    }
    if covariances.len() != k_clusters {
        return Err(InputError::DimensionMismatch {
            what: "covariance matrix count",
            expected: k_clusters,
            actual: covariances.len(),
        });
    }
    for sigma in covariances {
        if sigma.nrows() != p || sigma.ncols() != p {
            return Err(InputError::DimensionMismatch {
                what: "covariance matrix size",
                expected: p,
                actual: sigma.nrows().max(sigma.ncols()),
            });
        }
    }

    let constant = -(p as f64) * LOG_2PI / 2.0;
    let mut indiv = vec![0.0_f64; n];
    let mut clust = vec![0.0_f64; k_clusters];

    for (k, &value) in cluster_values.iter().enumerate() {
        let members: Vec<usize> = labels
            .iter()
            .enumerate()
            .filter(|(_, l)| l.to_bits() == value.to_bits())
            .map(|(i, _)| i)
            .collect();

        let chol = Cholesky::new(covariances[k].clone())
            .ok_or(InputError::NotPositiveDefinite { cluster: k })?;
        // log sqrt det Σ = Σ log diag(L)
        let half_log_det: f64 = chol.l().diagonal().iter().map(|d| d.ln()).sum();

        for &i in &members {
            let centered = x.column(i) - means.column(k);
            let quadform = centered.dot(&chol.solve(&centered));
            indiv[i] = -0.5 * quadform - half_log_det + constant;
        }
        clust[k] = members.iter().map(|&i| indiv[i]).sum();
    }

    let total = clust.iter().sum();

    let mut result = MvnLikelihood {
        indiv,
        clust,
        total,
    };
    if !log_scale {
        for v in &mut result.indiv {
            *v = v.exp();
        }
        for v in &mut result.clust {
            *v = v.exp();
        }
        result.total = result.total.exp();
    }

    Ok(result)
}
