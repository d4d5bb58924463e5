//! Parametric (variance-covariance) VaR calculation.

use tailrisk_core::{ConfidenceLevel, ReturnSeries};
use tailrisk_math::normal::standard_normal_quantile;
use tailrisk_math::stats::{mean, sample_std};

use crate::error::VarError;
use crate::result::{VaRMethod, VaRResult};

/// Calculate parametric VaR from a series of returns.
///
/// Fits a normal distribution to the returns (sample mean and unbiased
/// sample standard deviation) and reads the loss threshold off the fitted
/// quantile:
///
/// ```text
/// threshold = mu + z(alpha) * sigma
/// ```
///
/// where `z(alpha)` is the standard normal quantile of the tail
/// probability (≈ −1.645 at 95% confidence, ≈ −2.326 at 99%).
///
/// # Arguments
///
/// * `returns` - Historical log returns (as decimals, e.g., -0.01 for -1%)
/// * `confidence_level` - Confidence level of the estimate
///
/// # Errors
///
/// Returns [`VarError::InsufficientData`] for fewer than 2 returns; the
/// sample standard deviation is undefined below that.
pub fn parametric_var(
    returns: &ReturnSeries,
    confidence_level: ConfidenceLevel,
) -> Result<VaRResult, VarError> {
    if returns.len() < 2 {
        return Err(VarError::InsufficientData {
            required: 2,
            actual: returns.len(),
        });
    }

    let mu = mean(returns.as_slice())?;
    let sigma = sample_std(returns.as_slice())?;
    let z = standard_normal_quantile(confidence_level.alpha())?;

    let threshold = mu + z * sigma;

    Ok(VaRResult::from_threshold(
        VaRMethod::Parametric,
        confidence_level,
        threshold,
    ))
}
