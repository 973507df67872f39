//! Vector-valued motion as position derivatives at `t = 0`.
//!
//! A motion state is an ordered list of spatial vectors: entry `k` is the
//! k-th time-derivative of position at the launch instant (position,
//! velocity, acceleration, jerk, ...). Positions along the trajectory come
//! from the Taylor polynomial `x(t) = sum_k (t^k / k!) * d_k`, evaluated
//! with a vector-coefficient Horner scheme.

use crate::error::{SolverError, SolverResult};
use ballista_math::Scalar;
use smallvec::SmallVec;

/// Spatial vector with inline storage for the common 2-D/3-D cases.
pub type Coords<T> = SmallVec<[T; 3]>;

/// Motion state: position derivatives at `t = 0`, uniform dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Motion<T> {
    derivatives: Vec<Coords<T>>,
    dim: usize,
}

impl<T: Scalar> Motion<T> {
    /// Build a motion state, validating shape: at least one derivative,
    /// all of one dimension, no NaN components.
    pub fn new(derivatives: Vec<Coords<T>>) -> SolverResult<Self> {
        let Some(first) = derivatives.first() else {
            return Err(SolverError::EmptyMotion);
        };
        let dim = first.len();
        for row in &derivatives {
            if row.len() != dim {
                return Err(SolverError::DimensionMismatch {
                    expected: dim,
                    found: row.len(),
                });
            }
            if row.iter().any(|c| c.is_nan()) {
                return Err(SolverError::NanComponent);
            }
        }
        Ok(Self { derivatives, dim })
    }

    /// Build from plain slices, one per derivative order.
    pub fn from_rows(rows: &[&[T]]) -> SolverResult<Self> {
        Self::new(rows.iter().map(|r| Coords::from_slice(r)).collect())
    }

    /// Spatial dimension.
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// The derivative vectors, lowest order first.
    pub fn derivatives(&self) -> &[Coords<T>] {
        &self.derivatives
    }

    /// Highest derivative order carried.
    pub fn order(&self) -> usize {
        self.derivatives.len() - 1
    }

    /// Whether every derivative component is zero.
    pub fn is_stationary(&self) -> bool {
        self.derivatives
            .iter()
            .all(|row| row.iter().all(|c| c.is_zero()))
    }

    /// Relative motion `target - shooter`, zero-padding the shorter
    /// derivative list.
    pub fn relative(target: &Self, shooter: &Self) -> SolverResult<Self> {
        if target.dim != shooter.dim {
            return Err(SolverError::DimensionMismatch {
                expected: target.dim,
                found: shooter.dim,
            });
        }
        let orders = target.derivatives.len().max(shooter.derivatives.len());
        let mut derivatives = Vec::with_capacity(orders);
        for k in 0..orders {
            let mut row: Coords<T> = SmallVec::with_capacity(target.dim);
            for i in 0..target.dim {
                let t = target.derivatives.get(k).map_or(T::zero(), |r| r[i]);
                let s = shooter.derivatives.get(k).map_or(T::zero(), |r| r[i]);
                row.push(t - s);
            }
            derivatives.push(row);
        }
        Ok(Self {
            derivatives,
            dim: target.dim,
        })
    }

    /// Taylor position at time `t`: `sum_k (t^k / k!) * d_k`, evaluated as
    /// a vector-coefficient Horner recurrence.
    pub fn position_at(&self, t: T) -> Coords<T> {
        let mut acc: Coords<T> = SmallVec::from_elem(T::zero(), self.dim);
        for k in (0..self.derivatives.len()).rev() {
            let weight = factorial::<T>(k).recip();
            for (slot, &d) in acc.iter_mut().zip(self.derivatives[k].iter()) {
                *slot = *slot * t + d * weight;
            }
        }
        acc
    }
}

/// `n!` as a scalar; exact for every order the solver meets in practice.
pub(crate) fn factorial<T: Scalar>(n: usize) -> T {
    let mut f = 1.0f64;
    for i in 2..=n {
        f *= i as f64;
    }
    T::approx(f)
}

/// Dot product of two equal-length spatial vectors.
pub(crate) fn dot<T: Scalar>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b)
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}
