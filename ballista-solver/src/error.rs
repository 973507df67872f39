//! Error types for the intercept solver.

use ballista_math::MathError;
use thiserror::Error;

/// Error type for intercept-solver operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// A motion state needs at least one derivative vector.
    #[error("motion requires at least one derivative vector")]
    EmptyMotion,
    /// Derivative vectors must share one spatial dimension.
    #[error("derivative vectors have mismatched dimensions ({expected} vs {found})")]
    DimensionMismatch {
        /// Dimension of the first derivative vector.
        expected: usize,
        /// Offending dimension.
        found: usize,
    },
    /// A derivative component was NaN.
    #[error("derivative vector contains NaN")]
    NanComponent,
    /// An error surfaced from the polynomial engine.
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Result type for intercept-solver operations.
pub type SolverResult<T> = Result<T, SolverError>;
