//! Analytic bounds on positive real roots (Local-Max-Quadratic).
//!
//! For every negative coefficient the LMQ rule pairs it against each
//! preceding positive coefficient with a doubling penalty, takes the
//! minimum over the pairings, and bounds the positive roots by the maximum
//! over the negative coefficients. The bound is never below any positive
//! real root, costs `O(d^2)`, and is markedly tighter than the classical
//! Cauchy bound on the kinds of polynomials the isolator sees.
//!
//! ## References
//!
//! - Akritas, Strzeboński, Vigklas: "Implementations of a New Theorem for
//!   Computing Bounds for Positive Roots of Polynomials" (2006)

use crate::polynomial::Polynomial;
use crate::scalar::Scalar;

/// LMQ upper bound on the positive real roots of `p`.
///
/// Returns zero when no coefficient is negative after normalizing the
/// leading sign: by Descartes there are no positive roots to bound.
pub fn lmq_upper<T: Scalar>(p: &Polynomial<T>) -> T {
    if p.is_zero() {
        return T::zero();
    }
    let mut c: Vec<T> = p.coeffs().to_vec();
    if p.leading() < T::zero() {
        for v in &mut c {
            *v = -*v;
        }
    }
    let d = c.len() - 1;
    let mut best = T::zero();
    for i in 0..d {
        if c[i] >= T::zero() {
            continue;
        }
        let mut t: i32 = 1;
        let mut m = T::infinity();
        for j in (i + 1..=d).rev() {
            if c[j] <= T::zero() {
                continue;
            }
            let num = T::two().powi(t) * (-c[i]);
            let r = (num / c[j]).powf(T::one() / T::from_count(j - i));
            if r < m {
                m = r;
            }
            t += 1;
        }
        if m > best {
            best = m;
        }
    }
    best
}

/// LMQ lower bound on the positive real roots of `p`.
///
/// The reversed polynomial has the reciprocal root set, so the reciprocal
/// of its upper bound bounds the original's positive roots from below.
/// Returns zero when no bound exists.
pub fn lmq_lower<T: Scalar>(p: &Polynomial<T>) -> T {
    let ub = lmq_upper(&p.reversed());
    if ub.is_zero() {
        T::zero()
    } else {
        ub.recip()
    }
}
