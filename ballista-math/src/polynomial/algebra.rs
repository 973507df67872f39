//! Polynomial long division, GCD, and squarefree reduction.
//!
//! ## Algorithms
//!
//! - **Long division**: classical ascending-order schoolbook division
//! - **Euclidean GCD**: repeated division until the remainder vanishes,
//!   result normalized monic
//! - **Squarefree reduction**: `p / gcd(p, p')`, collapsing every root to
//!   multiplicity one
//!
//! ## References
//!
//! - Knuth: "The Art of Computer Programming Vol. 2" (GCD algorithms)
//! - Z3's `math/polynomial/polynomial.cpp`

use crate::error::{MathError, MathResult};
use crate::polynomial::Polynomial;
use crate::scalar::Scalar;

impl<T: Scalar> Polynomial<T> {
    /// Long division: `(quotient, remainder)` with
    /// `self = quotient * divisor + remainder` and
    /// `deg(remainder) < deg(divisor)`.
    ///
    /// Division by the zero polynomial is an error.
    pub fn div_rem(&self, divisor: &Self) -> MathResult<(Self, Self)> {
        if divisor.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        let dd = divisor.degree();
        if self.is_zero() || self.degree() < dd {
            return Ok((Self::zero(), self.clone()));
        }
        let dn = self.degree();
        let lead = divisor.leading();
        let mut rem: Vec<T> = self.coeffs().to_vec();
        let mut quot = vec![T::zero(); dn - dd + 1];
        for k in (0..=dn - dd).rev() {
            let q = rem[k + dd] / lead;
            quot[k] = q;
            for (j, &dc) in divisor.coeffs().iter().enumerate() {
                rem[k + j] = rem[k + j] - q * dc;
            }
            // the eliminated coefficient must vanish exactly
            rem[k + dd] = T::zero();
        }
        rem.truncate(dd);
        Ok((Self::from_raw(quot), Self::from_raw(rem)))
    }

    /// Euclidean GCD, normalized to leading coefficient one. A zero
    /// argument returns the other argument, normalized.
    pub fn gcd(&self, other: &Self) -> MathResult<Self> {
        if self.is_zero() {
            return Ok(other.monic());
        }
        if other.is_zero() {
            return Ok(self.monic());
        }
        let mut r0 = self.clone();
        let mut r1 = other.clone();
        while !r1.is_zero() {
            let (_, r) = r0.div_rem(&r1)?;
            r0 = r1;
            r1 = r;
        }
        Ok(r0.monic())
    }

    /// Squarefree reduction: `p / gcd(p, p')`, a polynomial with the same
    /// root set but every multiplicity collapsed to one. A constant GCD
    /// returns `p` unchanged.
    ///
    /// Float GCDs are not always stable: nearly-repeated roots can survive
    /// with multiplicity or merge, so callers able to supply inputs that
    /// are already squarefree should do so (a Yun factorization would be
    /// the robust upgrade if that ever stops being enough).
    pub fn square_free(&self) -> MathResult<Self> {
        let g = self.gcd(&self.derivative())?;
        if g.degree() == 0 {
            return Ok(self.clone());
        }
        let (q, _) = self.div_rem(&g)?;
        Ok(q)
    }
}
