//! Standard normal distribution quantiles.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::{MathError, MathResult};

/// Quantile (inverse CDF) of the standard normal distribution.
///
/// For a tail probability `p` this is the z-score below which a standard
/// normal variate falls with probability `p`; e.g. `p = 0.05` gives
/// approximately −1.6449 and `p = 0.01` approximately −2.3263.
///
/// # Errors
///
/// Returns [`MathError::InvalidProbability`] unless `p` is strictly inside
/// (0, 1); the quantile is unbounded at the endpoints.
pub fn standard_normal_quantile(p: f64) -> MathResult<f64> {
    if !p.is_finite() || p <= 0.0 || p >= 1.0 {
        return Err(MathError::InvalidProbability {
            value: p,
            min: 0.0,
            max: 1.0,
        });
    }

    // Unit normal parameters are always valid.
    let normal = Normal::new(0.0, 1.0).map_err(|e| MathError::invalid_input(e.to_string()))?;
    Ok(normal.inverse_cdf(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_common_z_scores() {
        assert_relative_eq!(
            standard_normal_quantile(0.05).unwrap(),
            -1.6449,
            epsilon = 1e-3
        );
        assert_relative_eq!(
            standard_normal_quantile(0.01).unwrap(),
            -2.3263,
            epsilon = 1e-3
        );
        assert_relative_eq!(standard_normal_quantile(0.5).unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_symmetry() {
        let lower = standard_normal_quantile(0.05).unwrap();
        let upper = standard_normal_quantile(0.95).unwrap();
        assert_relative_eq!(lower, -upper, epsilon = 1e-9);
    }

    #[test]
    fn test_endpoints_rejected() {
        for p in [0.0, 1.0, -0.1, 1.1, f64::NAN] {
            assert!(matches!(
                standard_normal_quantile(p),
                Err(MathError::InvalidProbability { .. })
            ));
        }
    }
}
