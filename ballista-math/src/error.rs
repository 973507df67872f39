//! Error types for the polynomial engine.

use thiserror::Error;

/// Error type for polynomial-engine operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// A polynomial was constructed from an empty coefficient vector.
    #[error("empty coefficient vector")]
    EmptyCoefficients,
    /// A NaN coefficient was found, either on input or produced by a
    /// transformation mid-recursion.
    #[error("NaN coefficient encountered")]
    NanCoefficient,
    /// Polynomial division by the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZero,
    /// A bracket refiner was handed endpoints that do not bracket a sign
    /// change.
    #[error("endpoints ({left}, {right}) do not bracket a sign change")]
    InvalidBracket {
        /// Left endpoint of the rejected bracket.
        left: f64,
        /// Right endpoint of the rejected bracket.
        right: f64,
    },
}

/// Result type for polynomial-engine operations.
pub type MathResult<T> = Result<T, MathError>;
