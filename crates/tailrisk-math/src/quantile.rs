//! Empirical quantiles with a fixed interpolation convention.

use crate::error::{MathError, MathResult};

/// Empirical quantile of a sample at probability `p`.
///
/// Uses the Hyndman–Fan type 7 convention: the quantile position is
/// `h = (n - 1) * p` and the result interpolates linearly between the
/// order statistics at `floor(h)` and `floor(h) + 1`. This is the default
/// convention of NumPy, pandas, and R, and is stated here explicitly so
/// that quantile-based risk figures are reproducible bit-for-bit across
/// implementations.
///
/// The input does not need to be sorted. The result always lies within
/// the observed `[min, max]` range.
///
/// # Errors
///
/// Returns [`MathError::InsufficientData`] for an empty sample and
/// [`MathError::InvalidProbability`] if `p` is outside `[0, 1]` or
/// non-finite.
///
/// # Example
///
/// ```rust
/// use tailrisk_math::quantile::quantile;
///
/// let q = quantile(&[1.0, 2.0, 3.0, 4.0], 0.5)?;
/// assert!((q - 2.5).abs() < 1e-12);
/// # Ok::<(), tailrisk_math::MathError>(())
/// ```
pub fn quantile(values: &[f64], p: f64) -> MathResult<f64> {
    if values.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    if !p.is_finite() || p < 0.0 || p > 1.0 {
        return Err(MathError::InvalidProbability {
            value: p,
            min: 0.0,
            max: 1.0,
        });
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let h = (sorted.len() - 1) as f64 * p;
    let lower = h.floor() as usize;
    let fraction = h - h.floor();

    if lower + 1 >= sorted.len() {
        return Ok(sorted[sorted.len() - 1]);
    }

    Ok(sorted[lower] + fraction * (sorted[lower + 1] - sorted[lower]))
}
