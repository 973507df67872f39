//! Sign variation counting (Descartes' rule of signs).
//!
//! The number of sign changes between consecutive nonzero coefficients is
//! an upper bound on the count of positive real roots, and matches it in
//! parity. The isolator leans on the exact cases: zero variations means no
//! positive roots, one variation means exactly one.

use crate::error::{MathError, MathResult};
use crate::polynomial::Polynomial;
use crate::scalar::Scalar;

/// Descartes sign variation count of the coefficient sequence.
///
/// Zero coefficients are skipped. A NaN coefficient is a fatal input
/// error: the transformations feeding the isolator can manufacture NaN
/// from overflowed intermediates, and a silent wrong count would corrupt
/// the recursion.
pub fn sign_variations<T: Scalar>(p: &Polynomial<T>) -> MathResult<usize> {
    let mut last = 0i8;
    let mut variations = 0;
    for &c in p.coeffs() {
        if c.is_nan() {
            return Err(MathError::NanCoefficient);
        }
        let sign = if c > T::zero() {
            1
        } else if c < T::zero() {
            -1
        } else {
            0
        };
        if sign != 0 {
            if last != 0 && sign != last {
                variations += 1;
            }
            last = sign;
        }
    }
    Ok(variations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_transitions() {
        // x^2 - 4x + 3: two variations, two positive roots
        let p = Polynomial::new(vec![3.0, -4.0, 1.0]).unwrap();
        assert_eq!(sign_variations(&p).unwrap(), 2);
    }

    #[test]
    fn skips_zeros() {
        // x^3 + x + 1: no variations
        let p = Polynomial::new(vec![1.0, 1.0, 0.0, 1.0]).unwrap();
        assert_eq!(sign_variations(&p).unwrap(), 0);
        // x^2 - 1: one variation through the zero gap
        let q = Polynomial::new(vec![-1.0, 0.0, 1.0]).unwrap();
        assert_eq!(sign_variations(&q).unwrap(), 1);
    }

    #[test]
    fn constant_has_none() {
        assert_eq!(sign_variations(&Polynomial::constant(5.0)).unwrap(), 0);
        assert_eq!(sign_variations(&Polynomial::<f64>::zero()).unwrap(), 0);
    }
}
