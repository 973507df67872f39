//! Positive real root isolation via the continued-fraction method.
//!
//! Implements the Vincent–Akritas–Strzeboński recursion: a Möbius change
//! of coordinates is tracked alongside the transformed polynomial,
//! Descartes' rule decides when a branch holds exactly one root, and
//! branches with more variations split at `x = 1`. Termination on a
//! squarefree input follows from Vincent's theorem; a depth cap defends
//! against float-induced near-duplicate roots.
//!
//! ## Algorithm
//!
//! Each task carries `(P, M)` with the loop invariant
//! `(c*x + d)^n * P_input(M(x)) = P(x)`. Per task: explicit roots at the
//! origin are emitted as point intervals and stripped; an LMQ lower bound
//! of at least one fast-forwards past the rootless prefix of the
//! half-line; zero sign variations discards the branch; one variation
//! emits the Möbius image of `(0, ∞)`; otherwise the branch splits into
//! `(1, ∞)` (Taylor shift) and `(0, 1)` (lower-interval map), with the
//! root exactly at 1 handled as its own point interval.
//!
//! ## References
//!
//! - Akritas, Strzeboński: "A Comparative Study of Two Real Root
//!   Isolation Methods" (2005)
//! - "Algorithms in Real Algebraic Geometry" (Basu, Pollack, Roy, 2006)

use crate::error::{MathError, MathResult};
use crate::polynomial::bounds::{lmq_lower, lmq_upper};
use crate::polynomial::mobius::Mobius;
use crate::polynomial::root_counting::sign_variations;
use crate::polynomial::Polynomial;
use crate::scalar::Scalar;
use smallvec::{smallvec, SmallVec};

/// Isolating interval for a positive real root.
///
/// Open at each finite endpoint. A point interval (both endpoints equal)
/// records an exact rational root the recursion landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T> {
    /// Left endpoint.
    pub left: T,
    /// Right endpoint; may be positive infinity.
    pub right: T,
}

impl<T: Scalar> Interval<T> {
    /// Create an interval; endpoints must be ordered.
    pub fn new(left: T, right: T) -> Self {
        debug_assert!(left <= right);
        Self { left, right }
    }

    /// A degenerate interval holding the exact root `x`.
    pub fn point(x: T) -> Self {
        Self { left: x, right: x }
    }

    /// Whether both endpoints coincide.
    pub fn is_point(&self) -> bool {
        self.left == self.right
    }

    /// Interval width.
    pub fn width(&self) -> T {
        self.right - self.left
    }

    /// Interval midpoint.
    pub fn midpoint(&self) -> T {
        (self.left + self.right) / T::two()
    }

    /// Whether `x` lies in the interval (open at each side; a point
    /// interval contains exactly its endpoint).
    pub fn contains(&self, x: T) -> bool {
        if self.is_point() {
            x == self.left
        } else {
            self.left < x && x < self.right
        }
    }

    /// Whether `self` strictly contains `other` as a sub-range.
    ///
    /// A point interval sitting on an open endpoint is not enclosed: the
    /// open interval excludes it.
    fn encloses(&self, other: &Self) -> bool {
        if self == other || self.is_point() {
            return false;
        }
        if other.is_point() {
            return self.left < other.left && other.right < self.right;
        }
        self.left <= other.left && other.right <= self.right
    }
}

/// Configuration for the isolator.
#[derive(Debug, Clone)]
pub struct IsolationConfig {
    /// Skip the squarefree reduction; set by callers that already know
    /// their input is squarefree.
    pub assume_square_free: bool,
    /// Safety cap on recursion depth. Vincent's theorem bounds the honest
    /// depth; the cap defends against numerically-induced non-termination
    /// when the float squarefree reduction leaves near-duplicate roots.
    pub max_depth: usize,
}

impl Default for IsolationConfig {
    fn default() -> Self {
        Self {
            assume_square_free: false,
            max_depth: 64,
        }
    }
}

/// Statistics for root isolation.
#[derive(Debug, Clone, Default)]
pub struct IsolationStats {
    /// Tasks taken off the work stack.
    pub tasks_processed: u64,
    /// Exact rational roots emitted as point intervals.
    pub point_roots: u64,
    /// Intervals emitted (including point intervals).
    pub intervals_emitted: u64,
    /// Branches abandoned at the depth cap.
    pub depth_cap_hits: u64,
}

/// A branch of the recursion: the transformed polynomial with its Möbius
/// coordinate map.
#[derive(Debug, Clone)]
struct Task<T> {
    poly: Polynomial<T>,
    map: Mobius<T>,
    depth: usize,
}

/// Positive-root isolation engine.
#[derive(Debug, Default)]
pub struct RootIsolator {
    config: IsolationConfig,
    stats: IsolationStats,
}

impl RootIsolator {
    /// Create an isolator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(IsolationConfig::default())
    }

    /// Create an isolator with the given configuration.
    pub fn with_config(config: IsolationConfig) -> Self {
        Self {
            config,
            stats: IsolationStats::default(),
        }
    }

    /// Get statistics.
    pub fn stats(&self) -> &IsolationStats {
        &self.stats
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.stats = IsolationStats::default();
    }

    /// Isolate every positive real root of `input` into a disjoint
    /// interval.
    ///
    /// Roots at exact rationals the recursion lands on (0, images of 1)
    /// come back as point intervals. The zero polynomial degenerates to
    /// the single interval `(0, ∞)`: every non-negative real is a root.
    pub fn isolate<T: Scalar>(&mut self, input: &Polynomial<T>) -> MathResult<Vec<Interval<T>>> {
        if input.has_nan() {
            return Err(MathError::NanCoefficient);
        }
        let mut intervals = Vec::new();
        if input.is_zero() {
            self.push_interval(&mut intervals, Interval::new(T::zero(), T::infinity()));
            return Ok(intervals);
        }
        if input.coeffs().iter().all(|&c| c > T::zero()) {
            return Ok(intervals);
        }
        let seed = if self.config.assume_square_free {
            input.clone()
        } else {
            input.square_free()?
        };
        let input_upper = lmq_upper(&seed);
        let mut stack: SmallVec<[Task<T>; 8]> = smallvec![Task {
            poly: seed,
            map: Mobius::identity(),
            depth: 0,
        }];
        while let Some(task) = stack.pop() {
            self.stats.tasks_processed += 1;
            if task.depth > self.config.max_depth {
                self.stats.depth_cap_hits += 1;
                continue;
            }
            self.process(task, input_upper, &mut intervals, &mut stack)?;
        }
        Ok(intervals)
    }

    /// Drive one task to resolution: emit, discard, or split and enqueue.
    fn process<T: Scalar>(
        &mut self,
        task: Task<T>,
        input_upper: T,
        intervals: &mut Vec<Interval<T>>,
        stack: &mut SmallVec<[Task<T>; 8]>,
    ) -> MathResult<()> {
        let Task {
            mut poly,
            mut map,
            depth,
        } = task;
        let mut steps = 0usize;
        loop {
            if poly.is_zero() {
                self.push_interval(intervals, Interval::new(T::zero(), T::infinity()));
                return Ok(());
            }
            if poly.degree() == 0 {
                return Ok(());
            }
            steps += 1;
            if steps > self.config.max_depth {
                self.stats.depth_cap_hits += 1;
                return Ok(());
            }
            if poly.constant_term().is_zero() {
                self.emit_point(map.eval(T::zero()), intervals);
                poly = poly.strip_zero_root();
                continue;
            }
            let lb = lmq_lower(&poly);
            if lb >= T::one() {
                // fast-forward past the rootless prefix of the half-line
                poly = poly.scale_input(lb).shift(T::one());
                map = map.scale_input(lb).shift(T::one());
                continue;
            }
            match sign_variations(&poly)? {
                0 => return Ok(()),
                1 => {
                    self.emit_image(&map, input_upper, intervals);
                    return Ok(());
                }
                v => return self.split(poly, map, depth, v, input_upper, intervals, stack),
            }
        }
    }

    /// Split a multi-variation branch at `x = 1`.
    #[allow(clippy::too_many_arguments)]
    fn split<T: Scalar>(
        &mut self,
        poly: Polynomial<T>,
        map: Mobius<T>,
        depth: usize,
        variations: usize,
        input_upper: T,
        intervals: &mut Vec<Interval<T>>,
        stack: &mut SmallVec<[Task<T>; 8]>,
    ) -> MathResult<()> {
        // right half, x > 1
        let mut right = poly.shift(T::one());
        let right_map = map.shift(T::one());
        let value_at_one = right.constant_term();
        let root_at_one = value_at_one.is_zero();
        if root_at_one {
            self.emit_point(right_map.eval(T::zero()), intervals);
            right = right.strip_zero_root();
        }
        let v_right = sign_variations(&right)?;
        match v_right {
            0 => {}
            1 => self.emit_image(&right_map, input_upper, intervals),
            _ => stack.push(Task {
                poly: right,
                map: right_map,
                depth: depth + 1,
            }),
        }

        // left half, 0 < x < 1; the variation budget is an upper bound on
        // the left count (Budan), so a zero budget prunes without
        // transforming
        let budget = variations.saturating_sub(v_right + usize::from(root_at_one));
        if budget == 0 {
            return Ok(());
        }
        if budget == 1 && !root_at_one {
            // at most one root in (0, 1): the endpoint signs decide
            // exactly, with no transformation and no variation pass
            let at_zero = poly.constant_term();
            if (at_zero > T::zero()) != (value_at_one > T::zero()) {
                let e0 = map.eval(T::zero());
                let e1 = map.eval(T::one());
                let interval = if e0 <= e1 {
                    Interval::new(e0, e1)
                } else {
                    Interval::new(e1, e0)
                };
                self.push_interval(intervals, interval);
            }
            return Ok(());
        }
        let mut left = poly.lower_interval(T::one());
        let left_map = map.lower_interval(T::one());
        if left.constant_term().is_zero() {
            // the x = 1 root reappears at the mapped origin; it was already
            // emitted by the right branch
            left = left.strip_zero_root();
        }
        match sign_variations(&left)? {
            0 => {}
            1 => self.emit_image(&left_map, input_upper, intervals),
            _ => stack.push(Task {
                poly: left,
                map: left_map,
                depth: depth + 1,
            }),
        }
        Ok(())
    }

    /// Emit the Möbius image of `(0, ∞)`, tightening an unbounded right
    /// endpoint with the input's LMQ upper bound.
    fn emit_image<T: Scalar>(
        &mut self,
        map: &Mobius<T>,
        input_upper: T,
        intervals: &mut Vec<Interval<T>>,
    ) {
        let (left, mut right) = map.positive_image();
        if right.is_infinite() && input_upper > left {
            right = input_upper;
        }
        self.push_interval(intervals, Interval::new(left, right));
    }

    /// Emit an exact rational root as a point interval.
    fn emit_point<T: Scalar>(&mut self, x: T, intervals: &mut Vec<Interval<T>>) {
        self.stats.point_roots += 1;
        self.push_interval(intervals, Interval::point(x));
    }

    /// Insert with output hygiene: exact duplicates are dropped, and of a
    /// strict sub/super-range pair only the tighter interval survives.
    fn push_interval<T: Scalar>(&mut self, intervals: &mut Vec<Interval<T>>, interval: Interval<T>) {
        for existing in intervals.iter_mut() {
            if *existing == interval {
                return;
            }
            if existing.encloses(&interval) {
                *existing = interval;
                return;
            }
            if interval.encloses(existing) {
                return;
            }
        }
        intervals.push(interval);
        self.stats.intervals_emitted += 1;
    }
}

/// Isolate the positive real roots of `p` with the default configuration.
pub fn isolate_positive_roots<T: Scalar>(p: &Polynomial<T>) -> MathResult<Vec<Interval<T>>> {
    RootIsolator::new().isolate(p)
}
