//! Bracket refinement: bisection and ITP.
//!
//! Both refiners share one contract: given a closed bracket `[L, R]` where
//! the polynomial changes sign (exact zeros at the endpoints count), and a
//! tolerance `τ`, drive the bracket width below `2τ` and return a point
//! inside it, or report that the iteration cap ran out. Endpoints that do
//! not bracket a sign change are a fatal argument error.
//!
//! Bisection is the classical halving loop. ITP (Interpolate–Truncate–
//! Project) keeps bisection's worst case while converging superlinearly on
//! average: a regula-falsi estimate is truncated toward the midpoint and
//! projected into a shrinking trust region around it.
//!
//! Evaluations go through the compensated Horner scheme by default; close
//! to a root the naive recurrence can report the wrong sign and stall the
//! bracket.
//!
//! ## References
//!
//! - Oliveira, Takahashi: "An Enhancement of the Bisection Method Average
//!   Performance Preserving Minmax Optimality" (2020)

use crate::error::{MathError, MathResult};
use crate::polynomial::eval::EvalMode;
use crate::polynomial::Polynomial;
use crate::scalar::Scalar;

/// Outcome of a bracket refinement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RefineOutcome<T> {
    /// The bracket converged; the contained value approximates the root to
    /// the requested tolerance.
    Converged(T),
    /// The iteration cap ran out before the bracket was tight enough.
    MaxIterations,
}

impl<T> RefineOutcome<T> {
    /// The refined value, if the refinement converged.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Converged(x) => Some(x),
            Self::MaxIterations => None,
        }
    }
}

/// Tuning parameters for the ITP refiner.
#[derive(Debug, Clone)]
pub struct ItpParams<T> {
    /// Truncation gain; `None` uses `0.2 / (R - L)` of the initial
    /// bracket.
    pub k1: Option<T>,
    /// Truncation exponent.
    pub k2: i32,
    /// Slack iterations granted beyond bisection's worst case.
    pub n0: u32,
}

impl<T> Default for ItpParams<T> {
    fn default() -> Self {
        Self {
            k1: None,
            k2: 2,
            n0: 1,
        }
    }
}

/// Overflow-proof midpoint of two same-sign or mixed-sign values.
fn midpoint<T: Scalar>(x: T, y: T) -> T {
    if (x > T::zero()) == (y > T::zero()) {
        x + (y - x) / T::two()
    } else {
        (x + y) / T::two()
    }
}

fn invalid_bracket<T: Scalar>(left: T, right: T) -> MathError {
    MathError::InvalidBracket {
        left: left.to_f64().unwrap_or(f64::NAN),
        right: right.to_f64().unwrap_or(f64::NAN),
    }
}

/// Endpoint evaluation of a candidate bracket.
enum Endpoints<T> {
    /// The endpoints straddle a sign change.
    Bracketing(T, T),
    /// One endpoint is an exact root.
    RootAt(T),
}

/// Validate a bracket and evaluate its endpoints.
fn bracket_values<T: Scalar>(
    p: &Polynomial<T>,
    left: T,
    right: T,
    mode: EvalMode,
) -> MathResult<Endpoints<T>> {
    if !(left <= right) || !left.is_finite() || !right.is_finite() {
        return Err(invalid_bracket(left, right));
    }
    let yl = p.eval_mode(left, mode);
    let yr = p.eval_mode(right, mode);
    if yl.is_zero() {
        return Ok(Endpoints::RootAt(left));
    }
    if yr.is_zero() {
        return Ok(Endpoints::RootAt(right));
    }
    if (yl > T::zero()) == (yr > T::zero()) {
        return Err(invalid_bracket(left, right));
    }
    Ok(Endpoints::Bracketing(yl, yr))
}

/// Classical bisection to tolerance `tol`, capped at `max_iter` halvings.
pub fn bisect<T: Scalar>(
    p: &Polynomial<T>,
    bracket: (T, T),
    tol: T,
    max_iter: usize,
    mode: EvalMode,
) -> MathResult<RefineOutcome<T>> {
    let (mut left, mut right) = bracket;
    let mut yl = match bracket_values(p, left, right, mode)? {
        Endpoints::Bracketing(yl, _) => yl,
        Endpoints::RootAt(x) => return Ok(RefineOutcome::Converged(x)),
    };
    for _ in 0..max_iter {
        let mid = midpoint(left, right);
        if right - left <= tol + tol {
            return Ok(RefineOutcome::Converged(mid));
        }
        let ym = p.eval_mode(mid, mode);
        if ym.is_zero() {
            return Ok(RefineOutcome::Converged(mid));
        }
        if (ym > T::zero()) == (yl > T::zero()) {
            left = mid;
            yl = ym;
        } else {
            right = mid;
        }
    }
    Ok(RefineOutcome::MaxIterations)
}

/// ITP refinement to tolerance `tol`, capped at `max_iter` evaluations.
///
/// Per iteration the regula-falsi estimate `x_F` is truncated toward the
/// midpoint by `δ = k1 * (R - L)^k2` and projected into the radius
/// `τ * 2^(n_max - k) - (R - L)/2` around it, so every step stays inside
/// the minmax-optimal envelope of bisection.
pub fn itp<T: Scalar>(
    p: &Polynomial<T>,
    bracket: (T, T),
    tol: T,
    max_iter: usize,
    params: &ItpParams<T>,
    mode: EvalMode,
) -> MathResult<RefineOutcome<T>> {
    let (mut left, mut right) = bracket;
    let (mut yl, mut yr) = match bracket_values(p, left, right, mode)? {
        Endpoints::Bracketing(yl, yr) => (yl, yr),
        Endpoints::RootAt(x) => return Ok(RefineOutcome::Converged(x)),
    };
    let k1 = params
        .k1
        .unwrap_or_else(|| T::approx(0.2) / (right - left));
    let n_bisect = ((right - left) / (tol + tol)).log2().ceil().max(T::zero());
    let n_max = n_bisect + T::from_count(params.n0 as usize);
    let mut scaled_eps = tol * T::two().powf(n_max);
    let mut iterations = 0;
    while right - left > tol + tol {
        if iterations >= max_iter {
            return Ok(RefineOutcome::MaxIterations);
        }
        iterations += 1;
        let x_half = midpoint(left, right);
        let radius = scaled_eps - (right - left) / T::two();
        let x_falsi = (yr * left - yl * right) / (yr - yl);
        let sigma = x_half - x_falsi;
        let delta = k1 * (right - left).powi(params.k2);
        let x_trunc = if delta <= sigma.abs() {
            x_falsi + delta.copysign(sigma)
        } else {
            x_half
        };
        let x_itp = if (x_trunc - x_half).abs() <= radius {
            x_trunc
        } else {
            x_half - radius.copysign(sigma)
        };
        let y = p.eval_mode(x_itp, mode);
        if y.is_zero() {
            return Ok(RefineOutcome::Converged(x_itp));
        }
        if (y > T::zero()) == (yl > T::zero()) {
            left = x_itp;
            yl = y;
        } else {
            right = x_itp;
            yr = y;
        }
        scaled_eps = scaled_eps / T::two();
    }
    Ok(RefineOutcome::Converged(midpoint(left, right)))
}
