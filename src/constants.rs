//! Numeric constants.

/// Natural log of 2π, used in the multivariate Normal log-density.
pub const LOG_2PI: f64 = 1.837_877_066_409_345_5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_2pi_matches_runtime_value() {
        assert!((LOG_2PI - std::f64::consts::TAU.ln()).abs() < 1e-15);
    }
}
