//! Stepped sampling of a half-open parameter interval.
//!
//! Samples are `start + i * step` for `i = 0, 1, ...` while they stay on the
//! `start` side of `stop`, so `stop` itself is never produced.

use crate::error::{Result, SamplingError};

/// Largest number of samples a single range may produce.
pub const MAX_SAMPLES: usize = 100_000_000;

/// Returns `ceil((stop - start) / step)` evenly stepped samples starting at
/// `start`.
///
/// A negative `step` counts down from `start` towards `stop`. When the step
/// points away from `stop` (or `start == stop`) the result is empty.
///
/// # Errors
///
/// Returns [`SamplingError::ZeroStep`] if `step` is zero,
/// [`SamplingError::NonFinite`] if any argument is NaN or infinite, and
/// [`SamplingError::TooManySamples`] if the range holds more than
/// [`MAX_SAMPLES`] samples.
pub fn arange(start: f64, stop: f64, step: f64) -> Result<Vec<f64>> {
    if !(start.is_finite() && stop.is_finite() && step.is_finite()) {
        return Err(SamplingError::NonFinite { start, stop, step }.into());
    }
    if step == 0.0 {
        return Err(SamplingError::ZeroStep.into());
    }

    let count = sample_count(start, stop, step)?;
    Ok((0..count).map(|i| start + index_to_f64(i) * step).collect())
}

/// Number of samples in `[start, stop)` for a finite, non-zero `step`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn sample_count(start: f64, stop: f64, step: f64) -> Result<usize> {
    let span = ((stop - start) / step).ceil();
    if span.is_nan() || span <= 0.0 {
        return Ok(0);
    }
    if !span.is_finite() || span > MAX_SAMPLES as f64 {
        return Err(SamplingError::TooManySamples {
            span,
            max: MAX_SAMPLES,
        }
        .into());
    }
    Ok(span as usize)
}

#[allow(clippy::cast_precision_loss)]
fn index_to_f64(i: usize) -> f64 {
    i as f64
}
