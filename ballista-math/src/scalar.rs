//! Scalar abstraction for the root engine.
//!
//! The engine needs a floating-point field with sign, absolute value,
//! square root, powers, and NaN detection. [`Float`] covers all of that;
//! [`FromPrimitive`] supplies the small integer casts (degree indices,
//! binomial entries) the transformation formulas consume.

use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// Coefficient scalar for the polynomial engine.
///
/// Blanket-implemented, so `f32` and `f64` work out of the box.
pub trait Scalar: Float + FromPrimitive + Debug + Display {
    /// Cast a small unsigned count (degree index, iteration number).
    ///
    /// Counts in this crate stay far below the scalar's exact-integer
    /// range. A failed conversion poisons the value with NaN, which the
    /// engine's NaN detection then reports as a fatal input error.
    fn from_count(n: usize) -> Self {
        Self::from_usize(n).unwrap_or_else(Self::nan)
    }

    /// Cast an `f64` constant (binomial table entries, tuning defaults).
    fn approx(x: f64) -> Self {
        Self::from_f64(x).unwrap_or_else(Self::nan)
    }

    /// The value two.
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl<T: Float + FromPrimitive + Debug + Display> Scalar for T {}
