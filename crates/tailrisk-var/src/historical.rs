//! Historical simulation VaR calculation.

use tailrisk_core::{ConfidenceLevel, ReturnSeries};
use tailrisk_math::quantile::quantile;

use crate::error::VarError;
use crate::result::{VaRMethod, VaRResult};

/// Calculate historical VaR from a series of returns.
///
/// Sorts the observed returns and takes the empirical quantile at the tail
/// probability `alpha = 1 - confidence_level`, using linear interpolation
/// between bracketing order statistics (Hyndman–Fan type 7, the NumPy
/// default — see [`tailrisk_math::quantile::quantile`]). No distributional
/// assumption is made; the threshold always lies within the observed
/// min/max return range.
///
/// Small samples are a caveat rather than an error: the interpolated
/// quantile stays well-defined, but for a stable estimate the series
/// should hold at least `1 / alpha` observations (20 at 95% confidence,
/// 100 at 99%).
///
/// # Arguments
///
/// * `returns` - Historical log returns (as decimals, e.g., -0.01 for -1%)
/// * `confidence_level` - Confidence level of the estimate
///
/// # Errors
///
/// Returns [`VarError::InsufficientData`] for fewer than 2 returns.
pub fn historical_var(
    returns: &ReturnSeries,
    confidence_level: ConfidenceLevel,
) -> Result<VaRResult, VarError> {
    if returns.len() < 2 {
        return Err(VarError::InsufficientData {
            required: 2,
            actual: returns.len(),
        });
    }

    let threshold = quantile(returns.as_slice(), confidence_level.alpha())?;

    Ok(VaRResult::from_threshold(
        VaRMethod::Historical,
        confidence_level,
        threshold,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn returns(values: &[f64]) -> ReturnSeries {
        ReturnSeries::new(values.to_vec()).unwrap()
    }

    #[test]
    fn test_historical_var_known_series() {
        // Log returns of the [100, 102, 101, 105, 103] price path. The 5th
        // percentile with type-7 interpolation sits between the two worst
        // returns: -0.019231 + 0.15 * (-0.009852 - (-0.019231)).
        let series = returns(&[0.019803, -0.009852, 0.038840, -0.019231]);

        let result = historical_var(&series, ConfidenceLevel::P95).unwrap();

        assert_eq!(result.method, VaRMethod::Historical);
        assert_relative_eq!(result.threshold_return, -0.017824, epsilon = 1e-5);
        assert_relative_eq!(result.var_value, 0.017824, epsilon = 1e-5);
    }

    #[test]
    fn test_all_gains_clamp_to_zero() {
        let series = returns(&[0.01, 0.02, 0.015, 0.005]);

        let result = historical_var(&series, ConfidenceLevel::P95).unwrap();
        assert!(result.threshold_return > 0.0);
        assert_relative_eq!(result.var_value, 0.0);
    }

    #[test]
    fn test_single_return_is_insufficient() {
        let series = returns(&[-0.02]);
        assert_eq!(
            historical_var(&series, ConfidenceLevel::P95),
            Err(VarError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
    }

    proptest! {
        #[test]
        fn prop_threshold_within_observed_range(
            values in proptest::collection::vec(-0.1_f64..0.1, 2..100),
            level in 0.5_f64..0.999
        ) {
            let series = returns(&values);
            let confidence = ConfidenceLevel::new(level).unwrap();

            let result = historical_var(&series, confidence).unwrap();

            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(result.threshold_return >= min);
            prop_assert!(result.threshold_return <= max);
        }

        #[test]
        fn prop_var_monotone_in_confidence(
            values in proptest::collection::vec(-0.1_f64..0.1, 2..100),
            lo in 0.5_f64..0.94,
            step in 0.001_f64..0.05
        ) {
            let series = returns(&values);
            let low = ConfidenceLevel::new(lo).unwrap();
            let high = ConfidenceLevel::new(lo + step).unwrap();

            let var_lo = historical_var(&series, low).unwrap();
            let var_hi = historical_var(&series, high).unwrap();

            prop_assert!(var_hi.var_value >= var_lo.var_value - 1e-12);
        }
    }
}
