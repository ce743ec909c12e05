use thiserror::Error;

/// Top-level error type for the trochoid crate.
#[derive(Debug, Error)]
pub enum TrochoidError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while evaluating a curve.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("division by zero: {parameter} is zero")]
    DivisionByZero { parameter: &'static str },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised while generating theta samples.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("theta step must be non-zero")]
    ZeroStep,

    #[error("theta range is not finite: start = {start}, stop = {stop}, step = {step}")]
    NonFinite { start: f64, stop: f64, step: f64 },

    #[error("theta range spans {span} samples, at most {max} are allowed")]
    TooManySamples { span: f64, max: usize },
}

/// Errors related to curve-building operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("{count} parameters were varied, at most one may take several values")]
    MultipleVaried { count: usize },
}

/// Convenience type alias for results using [`TrochoidError`].
pub type Result<T> = std::result::Result<T, TrochoidError>;
