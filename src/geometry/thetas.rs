use std::ops::Deref;
use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::math::sampling::arange;

/// Step used by [`ThetaRange::new`] when none is given.
pub const DEFAULT_THETA_STEP: f64 = 0.1;

/// An immutable, ordered sequence of rolling angles in radians.
///
/// The values are copied on construction, so the caller may reuse or mutate
/// its own buffer afterwards. Cloning shares the underlying storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Thetas {
    values: Arc<[f64]>,
}

impl Thetas {
    /// Creates a theta sequence by copying `values` in order.
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        Self {
            values: Arc::from(values),
        }
    }

    /// Creates a theta sequence by sampling a [`ThetaRange`].
    ///
    /// # Errors
    ///
    /// Returns an error if the range step is zero or any bound is not finite.
    pub fn from_range(range: ThetaRange) -> Result<Self> {
        let values = arange(range.start, range.stop, range.step)?;
        debug!(
            start = range.start,
            stop = range.stop,
            step = range.step,
            samples = values.len(),
            "sampled theta range"
        );
        Ok(values.into())
    }

    /// Returns the angles as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

impl Deref for Thetas {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl From<Vec<f64>> for Thetas {
    fn from(values: Vec<f64>) -> Self {
        Self {
            values: values.into(),
        }
    }
}

impl From<&[f64]> for Thetas {
    fn from(values: &[f64]) -> Self {
        Self::new(values)
    }
}

impl<const N: usize> From<[f64; N]> for Thetas {
    fn from(values: [f64; N]) -> Self {
        Self::new(&values)
    }
}

/// A half-open range of angles `[start, stop)` sampled every `step` radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThetaRange {
    /// First sampled angle.
    pub start: f64,
    /// Excluded upper (or lower, for negative steps) bound.
    pub stop: f64,
    /// Increment between consecutive samples.
    pub step: f64,
}

impl ThetaRange {
    /// Creates a range using [`DEFAULT_THETA_STEP`].
    #[must_use]
    pub fn new(start: f64, stop: f64) -> Self {
        Self {
            start,
            stop,
            step: DEFAULT_THETA_STEP,
        }
    }

    /// Returns the range with a different step.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }
}

/// The two ways a curve can be given its angles: an explicit list or a
/// stepped range.
#[derive(Debug, Clone, PartialEq)]
pub enum ThetaInput {
    /// Angles supplied one by one.
    Explicit(Thetas),
    /// Angles generated from a stepped range.
    Range(ThetaRange),
}

impl ThetaInput {
    /// Resolves the input into a concrete theta sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if a range input cannot be sampled.
    pub fn resolve(self) -> Result<Thetas> {
        match self {
            Self::Explicit(thetas) => Ok(thetas),
            Self::Range(range) => Thetas::from_range(range),
        }
    }
}

impl From<Thetas> for ThetaInput {
    fn from(thetas: Thetas) -> Self {
        Self::Explicit(thetas)
    }
}

impl From<Vec<f64>> for ThetaInput {
    fn from(values: Vec<f64>) -> Self {
        Self::Explicit(values.into())
    }
}

impl From<&[f64]> for ThetaInput {
    fn from(values: &[f64]) -> Self {
        Self::Explicit(values.into())
    }
}

impl<const N: usize> From<[f64; N]> for ThetaInput {
    fn from(values: [f64; N]) -> Self {
        Self::Explicit(values.into())
    }
}

impl From<ThetaRange> for ThetaInput {
    fn from(range: ThetaRange) -> Self {
        Self::Range(range)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn copies_caller_buffer() {
        let mut buffer = vec![0.0, 1.0, 2.0];
        let thetas = Thetas::new(&buffer);
        buffer[0] = 42.0;
        buffer.push(3.0);
        assert_eq!(thetas.as_slice(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn preserves_order() {
        let thetas = Thetas::from(vec![3.0, -1.0, 2.0, 0.0]);
        assert_eq!(&*thetas, &[3.0, -1.0, 2.0, 0.0]);
    }

    #[test]
    fn clones_share_storage() {
        let thetas = Thetas::from([0.5, 1.5]);
        let other = thetas.clone();
        assert!(Arc::ptr_eq(&thetas.values, &other.values));
    }

    #[test]
    fn empty_sequence() {
        let thetas = Thetas::from(Vec::<f64>::new());
        assert!(thetas.is_empty());
        assert_eq!(thetas.len(), 0);
    }

    #[test]
    fn range_uses_default_step() {
        let range = ThetaRange::new(0.0, 1.0);
        assert_eq!(range.step, DEFAULT_THETA_STEP);
        let thetas = Thetas::from_range(range).unwrap();
        // ceil(1.0 / 0.1) samples
        assert_eq!(thetas.len(), 10);
        assert_eq!(thetas[0], 0.0);
    }

    #[test]
    fn range_with_custom_step() {
        let thetas = Thetas::from_range(ThetaRange::new(0.0, 2.0).with_step(0.5)).unwrap();
        assert_eq!(thetas.as_slice(), &[0.0, 0.5, 1.0, 1.5]);
    }

    #[test]
    fn explicit_input_resolves_unchanged() {
        let input = ThetaInput::from(vec![0.25, 0.75]);
        let thetas = input.resolve().unwrap();
        assert_eq!(thetas.as_slice(), &[0.25, 0.75]);
    }

    #[test]
    fn invalid_range_input_fails_to_resolve() {
        let input = ThetaInput::from(ThetaRange::new(0.0, 1.0).with_step(0.0));
        assert!(input.resolve().is_err());
    }
}
