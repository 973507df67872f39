//! Minimal-added-velocity intercept solving.
//!
//! A projectile launched at the shooter with added velocity `v` meets the
//! target after a flight time `T` exactly when `v = Δ(T) / T`, where
//! `Δ(t)` is the relative target-minus-shooter Taylor motion. The squared
//! launch speed `f(T) = ‖Δ(T)‖² / T²` is stationary where
//! `Δ(T) · (Δ(T) - T·Δ'(T))` vanishes, and since the dot product of two
//! vector polynomials is a scalar polynomial, the candidate flight times
//! are exactly its positive real roots. The polynomial engine isolates
//! them, a bracket refiner polishes each one, and a direct objective
//! comparison picks the winner.

use crate::error::SolverResult;
use crate::motion::{dot, factorial, Coords, Motion};
use ballista_math::{
    bisect, itp, EvalMode, Interval, IsolationConfig, ItpParams, Polynomial, RefineOutcome,
    RootIsolator, Scalar,
};

/// Which bracket refiner polishes the isolated root intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefinerKind {
    /// Interpolate–Truncate–Project; superlinear on average.
    #[default]
    Itp,
    /// Classical bisection.
    Bisection,
}

/// Tuning for the intercept solve. `Default` matches the recommended
/// operating point.
#[derive(Debug, Clone)]
pub struct InterceptConfig<T> {
    /// Refinement tolerance on the returned flight time.
    pub tolerance: T,
    /// Refiner iteration cap; `None` uses the per-refiner default
    /// (50 for ITP, 100 for bisection).
    pub max_iterations: Option<usize>,
    /// Bracket refiner choice.
    pub refiner: RefinerKind,
    /// ITP tuning parameters.
    pub itp: ItpParams<T>,
    /// Evaluation scheme for refinement and sign checks.
    pub eval: EvalMode,
    /// Assert that the critical polynomial is squarefree, skipping the
    /// float GCD reduction.
    pub assume_square_free: bool,
    /// Isolator recursion depth cap.
    pub max_depth: usize,
}

impl<T: Scalar> Default for InterceptConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: T::approx(1e-5),
            max_iterations: None,
            refiner: RefinerKind::default(),
            itp: ItpParams::default(),
            eval: EvalMode::default(),
            assume_square_free: false,
            max_depth: IsolationConfig::default().max_depth,
        }
    }
}

/// An intercept solution.
#[derive(Debug, Clone, PartialEq)]
pub struct InterceptSolution<T> {
    /// Optimal flight time `T*`.
    pub time: T,
    /// Minimized squared launch speed `‖v(T*)‖²`.
    pub speed_squared: T,
    /// Added launch velocity `v(T*) = Δ(T*) / T*`.
    pub velocity: Coords<T>,
}

/// Critical-point polynomial of the squared-speed objective.
///
/// The coefficient at `T^k` is
/// `sum_j (Δ_j · Δ_{k-j}) * (1 - k + j) / (j! * (k-j)!)`, the expansion of
/// `Δ·Δ - T·(Δ·Δ')` over the Taylor coefficients of the relative motion.
pub fn critical_polynomial<T: Scalar>(relative: &Motion<T>) -> SolverResult<Polynomial<T>> {
    let derivs = relative.derivatives();
    let order = derivs.len() - 1;
    let mut coeffs = vec![T::zero(); 2 * order + 1];
    for (k, slot) in coeffs.iter_mut().enumerate() {
        let mut acc = T::zero();
        for j in k.saturating_sub(order)..=k.min(order) {
            let product = dot(&derivs[j], &derivs[k - j]);
            let scale = (T::one() - T::from_count(k) + T::from_count(j))
                / (factorial::<T>(j) * factorial::<T>(k - j));
            acc = acc + product * scale;
        }
        *slot = acc;
    }
    Ok(Polynomial::new(coeffs)?)
}

/// Solve the intercept for explicit target and shooter motion states.
pub fn solve<T: Scalar>(
    target: &Motion<T>,
    shooter: &Motion<T>,
    config: &InterceptConfig<T>,
) -> SolverResult<Option<InterceptSolution<T>>> {
    let relative = Motion::relative(target, shooter)?;
    solve_relative(&relative, config)
}

/// Solve the intercept from the relative motion `Δ = target - shooter`.
///
/// Returns `Ok(None)` when no positive flight time is a candidate: the
/// squared-speed objective has no interior stationary point, or the
/// relative motion is degenerate.
pub fn solve_relative<T: Scalar>(
    relative: &Motion<T>,
    config: &InterceptConfig<T>,
) -> SolverResult<Option<InterceptSolution<T>>> {
    if relative.is_stationary() {
        // the target rides the shooter trajectory; every flight time
        // coincides and none is distinguished
        return Ok(None);
    }
    let critical = critical_polynomial(relative)?;
    if critical.degree() == 0 {
        tracing::debug!("constant critical polynomial, no interior optimum");
        return Ok(None);
    }
    let mut isolator = RootIsolator::with_config(IsolationConfig {
        assume_square_free: config.assume_square_free,
        max_depth: config.max_depth,
    });
    let intervals = isolator.isolate(&critical)?;
    tracing::debug!(candidates = intervals.len(), "isolated critical points");

    let mut best: Option<InterceptSolution<T>> = None;
    for interval in &intervals {
        let Some(time) = refine_candidate(&critical, interval, config) else {
            continue;
        };
        if time <= T::zero() || !time.is_finite() {
            continue;
        }
        let reach = relative.position_at(time);
        let velocity: Coords<T> = reach.iter().map(|&c| c / time).collect();
        let speed_squared = dot(&velocity, &velocity);
        tracing::debug!(time = %time, speed_squared = %speed_squared, "candidate");
        if best
            .as_ref()
            .is_none_or(|sol| speed_squared < sol.speed_squared)
        {
            best = Some(InterceptSolution {
                time,
                speed_squared,
                velocity,
            });
        }
    }
    Ok(best)
}

/// Refine one isolation interval into a candidate flight time.
fn refine_candidate<T: Scalar>(
    critical: &Polynomial<T>,
    interval: &Interval<T>,
    config: &InterceptConfig<T>,
) -> Option<T> {
    if interval.is_point() {
        return Some(interval.left);
    }
    let (mut left, mut right) = (interval.left, interval.right);
    if !right.is_finite() {
        return None;
    }
    // an isolation endpoint can itself be a root the recursion found
    // exactly; step inside the open interval so refinement converges to
    // the interior root instead
    let nudge = (right - left) * T::approx(1e-9);
    if critical.eval_mode(left, config.eval).is_zero() {
        left = left + nudge;
    }
    if critical.eval_mode(right, config.eval).is_zero() {
        right = right - nudge;
    }
    let max_iter = config.max_iterations.unwrap_or(match config.refiner {
        RefinerKind::Itp => 50,
        RefinerKind::Bisection => 100,
    });
    let refined = match config.refiner {
        RefinerKind::Itp => itp(
            critical,
            (left, right),
            config.tolerance,
            max_iter,
            &config.itp,
            config.eval,
        ),
        RefinerKind::Bisection => bisect(
            critical,
            (left, right),
            config.tolerance,
            max_iter,
            config.eval,
        ),
    };
    match refined {
        Ok(RefineOutcome::Converged(x)) => Some(x),
        Ok(RefineOutcome::MaxIterations) => {
            tracing::debug!("refinement hit the iteration cap, candidate dropped");
            None
        }
        Err(err) => {
            tracing::warn!(%err, "degenerate bracket from isolation, candidate dropped");
            None
        }
    }
}
