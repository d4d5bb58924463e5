//! Descriptive statistics.
//!
//! All estimators here are sample estimators: variance and standard
//! deviation use the unbiased n−1 denominator, since a historical return
//! window is a sample from the return distribution, not the population.

use crate::error::{MathError, MathResult};

/// Arithmetic mean of a sample.
///
/// # Errors
///
/// Returns [`MathError::InsufficientData`] for an empty sample.
pub fn mean(values: &[f64]) -> MathResult<f64> {
    if values.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Unbiased sample variance (n−1 denominator).
///
/// # Errors
///
/// Returns [`MathError::InsufficientData`] for fewer than 2 observations.
pub fn sample_variance(values: &[f64]) -> MathResult<f64> {
    if values.len() < 2 {
        return Err(MathError::insufficient_data(2, values.len()));
    }

    let mu = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - mu) * (v - mu)).sum();
    Ok(sum_sq / (values.len() - 1) as f64)
}

/// Unbiased sample standard deviation (n−1 denominator).
///
/// # Errors
///
/// Returns [`MathError::InsufficientData`] for fewer than 2 observations.
pub fn sample_std(values: &[f64]) -> MathResult<f64> {
    Ok(sample_variance(values)?.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), Err(MathError::insufficient_data(1, 0)));
    }

    #[test]
    fn test_sample_variance_known_value() {
        // Returns of the [100, 102, 101, 105, 103] price path.
        let returns = [0.019803, -0.009852, 0.038840, -0.019231];
        assert_relative_eq!(
            sample_std(&returns).unwrap(),
            0.026765,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_sample_variance_requires_two_points() {
        assert_eq!(
            sample_variance(&[0.01]),
            Err(MathError::insufficient_data(2, 1))
        );
    }

    #[test]
    fn test_zero_variance() {
        assert_relative_eq!(sample_std(&[0.0, 0.0, 0.0]).unwrap(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_variance_is_non_negative(
            values in proptest::collection::vec(-1.0_f64..1.0, 2..50)
        ) {
            prop_assert!(sample_variance(&values).unwrap() >= 0.0);
        }

        #[test]
        fn prop_mean_within_range(
            values in proptest::collection::vec(-1.0_f64..1.0, 1..50)
        ) {
            let mu = mean(&values).unwrap();
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(mu >= min - 1e-12 && mu <= max + 1e-12);
        }
    }
}
