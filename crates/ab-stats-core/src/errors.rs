use thiserror::Error;

/// Errors that can occur during statistical computations
#[derive(Error, Debug)]
pub enum StatsError {
    /// Significance level outside the open interval (0, 1)
    #[error("Invalid significance level: {0} (must be in (0, 1))")]
    InvalidAlpha(f64),

    /// Sample too small for the requested test. Always surfaced to the
    /// caller; a silent `false` verdict would mask a data-quality problem.
    #[error("{test} requires at least {required} observations (got {actual})")]
    InsufficientData {
        test: &'static str,
        required: usize,
        actual: usize,
    },

    /// Numerically degenerate input (zero variance, all observations tied).
    /// The pipeline catches this variant, logs it, and fails safe to a
    /// `false` verdict.
    #[error("{test}: degenerate input: {reason}")]
    DegenerateInput {
        test: &'static str,
        reason: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;
