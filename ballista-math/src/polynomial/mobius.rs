//! Möbius transformations tracking the isolator's coordinate changes.
//!
//! The isolation recursion rewrites the working polynomial through shifts,
//! scalings, and lower-interval maps; the matching Möbius transformation
//! `M(x) = (a*x + b) / (c*x + d)` is composed in lockstep so that
//! `(c*x + d)^n * P_input(M(x)) = P_current(x)` holds at every step. The
//! image of the open half-line `(0, ∞)` under `M` is then exactly the
//! original-coordinate interval a branch of the recursion covers.
//!
//! `Mobius` is a plain value: every composition returns a new one, and the
//! determinant invariant `a*d != b*c` is preserved by all of them.

use crate::scalar::Scalar;

/// A Möbius transformation `x -> (a*x + b) / (c*x + d)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mobius<T> {
    /// Numerator slope.
    pub a: T,
    /// Numerator offset.
    pub b: T,
    /// Denominator slope.
    pub c: T,
    /// Denominator offset.
    pub d: T,
}

impl<T: Scalar> Mobius<T> {
    /// The identity transformation.
    pub fn identity() -> Self {
        Self {
            a: T::one(),
            b: T::zero(),
            c: T::zero(),
            d: T::one(),
        }
    }

    /// Build from the four coefficients.
    pub fn new(a: T, b: T, c: T, d: T) -> Self {
        Self { a, b, c, d }
    }

    /// The determinant `a*d - b*c`; nonzero for a valid transformation.
    pub fn determinant(&self) -> T {
        self.a * self.d - self.b * self.c
    }

    /// Compose with the substitution `x <- x + s`.
    pub fn shift(self, s: T) -> Self {
        Self {
            a: self.a,
            b: self.b + s * self.a,
            c: self.c,
            d: self.d + s * self.c,
        }
    }

    /// Compose with the substitution `x <- s * x`.
    pub fn scale_input(self, s: T) -> Self {
        Self {
            a: s * self.a,
            b: self.b,
            c: s * self.c,
            d: self.d,
        }
    }

    /// Compose with the substitution `x <- s / (x + 1)`.
    pub fn lower_interval(self, s: T) -> Self {
        Self {
            a: self.b,
            b: s * self.a + self.b,
            c: self.d,
            d: s * self.c + self.d,
        }
    }

    /// Compose with the substitution `x <- 1 / x`.
    pub fn invert(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
            c: self.d,
            d: self.c,
        }
    }

    /// Evaluate `(a*x + b) / (c*x + d)`, mapping a vanishing denominator to
    /// a signed infinity.
    pub fn eval(&self, x: T) -> T {
        let num = self.a * x + self.b;
        let den = self.c * x + self.d;
        if den.is_zero() {
            return if num >= T::zero() {
                T::infinity()
            } else {
                T::neg_infinity()
            };
        }
        num / den
    }

    /// Endpoints of the image of the open half-line `(0, ∞)`, sorted.
    ///
    /// The endpoints are `b/d` (the image of 0) and `a/c` (the image of
    /// infinity); when `c` is zero the upper endpoint is `+∞`.
    pub fn positive_image(&self) -> (T, T) {
        let at_zero = if self.d.is_zero() {
            T::infinity()
        } else {
            self.b / self.d
        };
        let at_infinity = if self.c.is_zero() {
            T::infinity()
        } else {
            self.a / self.c
        };
        if at_zero <= at_infinity {
            (at_zero, at_infinity)
        } else {
            (at_infinity, at_zero)
        }
    }
}
