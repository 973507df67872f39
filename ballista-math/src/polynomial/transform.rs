//! Coordinate transformations on polynomials.
//!
//! The isolator's Möbius recursion is assembled from four maps: Taylor
//! shift `p(x + s)`, input scaling `p(s*x)`, coefficient reversal
//! `x^d * p(1/x)`, and the composite lower-interval map
//! `(x + 1)^d * p(s / (x + 1))` that carries the half-line into the image
//! of `(0, s)`. Each returns a fresh polynomial.
//!
//! Taylor shifts expand through the binomial identity
//! `c'_k = sum_{i >= k} c_i * C(i, k) * s^(i - k)`; binomial coefficients
//! come from a dense table up to order 10 and a process-wide write-once
//! memoized Pascal recurrence above that.

use crate::polynomial::Polynomial;
use crate::scalar::Scalar;
use rustc_hash::FxHashMap;
use std::sync::{LazyLock, Mutex, PoisonError};

/// Pascal-triangle rows 0..=10, zero-padded. Covers every shift the engine
/// performs on low-degree polynomials without touching the shared cache.
const SMALL_BINOMIALS: [[f64; 11]; 11] = [
    [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [1.0, 2.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [1.0, 3.0, 3.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [1.0, 4.0, 6.0, 4.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [1.0, 5.0, 10.0, 10.0, 5.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [1.0, 6.0, 15.0, 20.0, 15.0, 6.0, 1.0, 0.0, 0.0, 0.0, 0.0],
    [1.0, 7.0, 21.0, 35.0, 35.0, 21.0, 7.0, 1.0, 0.0, 0.0, 0.0],
    [1.0, 8.0, 28.0, 56.0, 70.0, 56.0, 28.0, 8.0, 1.0, 0.0, 0.0],
    [1.0, 9.0, 36.0, 84.0, 126.0, 126.0, 84.0, 36.0, 9.0, 1.0, 0.0],
    [1.0, 10.0, 45.0, 120.0, 210.0, 252.0, 210.0, 120.0, 45.0, 10.0, 1.0],
];

/// Memoized rows above order 10. Entries are written once and never
/// invalidated, so concurrent readers only contend on the lock.
static BINOMIAL_CACHE: LazyLock<Mutex<FxHashMap<(usize, usize), f64>>> =
    LazyLock::new(|| Mutex::new(FxHashMap::default()));

/// Binomial coefficient `C(n, k)` as a scalar.
pub fn binomial<T: Scalar>(n: usize, k: usize) -> T {
    if k > n {
        return T::zero();
    }
    if n < SMALL_BINOMIALS.len() {
        return T::approx(SMALL_BINOMIALS[n][k]);
    }
    let mut cache = BINOMIAL_CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(&v) = cache.get(&(n, k)) {
        return T::approx(v);
    }
    let mut row: Vec<f64> = SMALL_BINOMIALS[SMALL_BINOMIALS.len() - 1].to_vec();
    for m in SMALL_BINOMIALS.len()..=n {
        let mut next = vec![1.0; m + 1];
        for j in 1..m {
            next[j] = row[j - 1] + row[j];
        }
        row = next;
    }
    for (j, &v) in row.iter().enumerate() {
        cache.insert((n, j), v);
    }
    T::approx(row[k])
}

impl<T: Scalar> Polynomial<T> {
    /// Taylor shift: the polynomial `q` with `q(x) = p(x + s)`.
    pub fn shift(&self, s: T) -> Self {
        if s.is_zero() {
            return self.clone();
        }
        let d = self.degree();
        let c = self.coeffs();
        let mut out = vec![T::zero(); d + 1];
        for (k, slot) in out.iter_mut().enumerate() {
            let mut acc = T::zero();
            let mut pow = T::one();
            for i in k..=d {
                acc = acc + c[i] * binomial::<T>(i, k) * pow;
                pow = pow * s;
            }
            *slot = acc;
        }
        Self::from_raw(out)
    }

    /// Input scaling: `q(x) = p(s * x)`.
    pub fn scale_input(&self, s: T) -> Self {
        let mut pow = T::one();
        let out = self
            .coeffs()
            .iter()
            .map(|&c| {
                let v = c * pow;
                pow = pow * s;
                v
            })
            .collect();
        Self::from_raw(out)
    }

    /// Coefficient reversal: `q(x) = x^d * p(1/x)`.
    pub fn reversed(&self) -> Self {
        let mut out: Vec<T> = self.coeffs().to_vec();
        out.reverse();
        Self::from_raw(out)
    }

    /// Lower-interval map: `q(x) = (x + 1)^d * p(s / (x + 1))`, realized as
    /// scale, reverse, then shift by one. Maps the positive half-line into
    /// the image of `(0, s)`.
    pub fn lower_interval(&self, s: T) -> Self {
        self.scale_input(s).reversed().shift(T::one())
    }

    /// Strip an explicit root at zero: divide by `x` when the constant term
    /// vanishes. Returns the polynomial unchanged otherwise.
    pub fn strip_zero_root(&self) -> Self {
        if !self.constant_term().is_zero() || self.degree() == 0 {
            return self.clone();
        }
        Self::from_raw(self.coeffs()[1..].to_vec())
    }
}
