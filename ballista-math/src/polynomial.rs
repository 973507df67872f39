//! Univariate polynomial value type.
//!
//! Coefficients are stored in ascending-degree order: `[c0, c1, ..., cd]`
//! represents `c0 + c1*x + ... + cd*x^d`. The vector is never empty and
//! never carries trailing zeros; the zero polynomial is `[0]`.
//!
//! All operations return fresh polynomials; a `Polynomial` is an immutable
//! value.

pub mod algebra;
pub mod bounds;
pub mod eval;
pub mod mobius;
pub mod refine;
pub mod root_counting;
pub mod root_isolation;
pub mod transform;

use crate::error::{MathError, MathResult};
use crate::scalar::Scalar;
use std::fmt;
use std::ops::Mul;

/// A univariate polynomial over a floating-point scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T> {
    /// Coefficients in ascending-degree order, trailing zeros trimmed.
    coeffs: Vec<T>,
}

impl<T: Scalar> Polynomial<T> {
    /// Create a polynomial from ascending-order coefficients.
    ///
    /// Rejects the empty vector and NaN coefficients; trailing zeros are
    /// trimmed.
    pub fn new(coeffs: Vec<T>) -> MathResult<Self> {
        if coeffs.is_empty() {
            return Err(MathError::EmptyCoefficients);
        }
        if coeffs.iter().any(|c| c.is_nan()) {
            return Err(MathError::NanCoefficient);
        }
        Ok(Self::from_raw(coeffs))
    }

    /// Construct from a coefficient vector produced inside the engine.
    pub(crate) fn from_raw(mut coeffs: Vec<T>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(|c| c.is_zero()) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(T::zero());
        }
        Self { coeffs }
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self {
            coeffs: vec![T::zero()],
        }
    }

    /// A constant polynomial.
    pub fn constant(c: T) -> Self {
        Self { coeffs: vec![c] }
    }

    /// Monic polynomial with the given roots, `(x - r0)(x - r1)...`.
    pub fn from_roots(roots: &[T]) -> Self {
        let mut coeffs = vec![T::one()];
        for &r in roots {
            let mut next = vec![T::zero(); coeffs.len() + 1];
            for (i, &c) in coeffs.iter().enumerate() {
                next[i] = next[i] - c * r;
                next[i + 1] = next[i + 1] + c;
            }
            coeffs = next;
        }
        Self::from_raw(coeffs)
    }

    /// Coefficients in ascending-degree order.
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Degree: index of the largest nonzero coefficient (0 for the zero
    /// polynomial).
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// The leading (highest-degree) coefficient.
    pub fn leading(&self) -> T {
        self.coeffs[self.coeffs.len() - 1]
    }

    /// The constant term.
    pub fn constant_term(&self) -> T {
        self.coeffs[0]
    }

    /// Whether this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Whether any coefficient is NaN.
    pub fn has_nan(&self) -> bool {
        self.coeffs.iter().any(|c| c.is_nan())
    }

    /// Evaluate at `x` by Horner's recurrence.
    pub fn eval(&self, x: T) -> T {
        let mut acc = T::zero();
        for &c in self.coeffs.iter().rev() {
            acc = acc * x + c;
        }
        acc
    }

    /// Formal derivative. Degree-zero input maps to the zero polynomial.
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero();
        }
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| c * T::from_count(i))
            .collect();
        Self::from_raw(coeffs)
    }

    /// Normalize the leading coefficient to one. The zero polynomial is
    /// returned unchanged.
    pub fn monic(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        let lead = self.leading();
        Self::from_raw(self.coeffs.iter().map(|&c| c / lead).collect())
    }
}

impl<T: Scalar> Mul for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }
        let mut out = vec![T::zero(); self.degree() + rhs.degree() + 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                out[i + j] = out[i + j] + a * b;
            }
        }
        Polynomial::from_raw(out)
    }
}

impl<T: Scalar> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (i, &c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            match i {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}*x")?,
                _ => write!(f, "{c}*x^{i}")?,
            }
            first = false;
        }
        Ok(())
    }
}
