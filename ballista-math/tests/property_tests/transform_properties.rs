//! Transformation identities and the Möbius/polynomial coupling.

use ballista_math::{Mobius, Polynomial};
use proptest::prelude::*;

/// Strategy for small integer coefficients: every identity below is exact
/// in doubles on these inputs.
fn coeff() -> impl Strategy<Value = f64> {
    (-5i64..=5).prop_map(|c| c as f64)
}

/// Coefficient vectors with nonzero leading and constant terms, so no
/// transformation trims a degree away mid-identity.
fn anchored_poly() -> impl Strategy<Value = Polynomial<f64>> {
    (
        prop_oneof![(-5i64..=-1), (1i64..=5)],
        proptest::collection::vec(coeff(), 0..4),
        prop_oneof![(-5i64..=-1), (1i64..=5)],
    )
        .prop_map(|(c0, mid, lead)| {
            let mut coeffs = vec![c0 as f64];
            coeffs.extend(mid);
            coeffs.push(lead as f64);
            Polynomial::new(coeffs).expect("nonzero anchors")
        })
}

/// Polynomials with strictly positive coefficients: closed under every
/// transformation the coupling test applies, so degrees never drop.
fn positive_poly() -> impl Strategy<Value = Polynomial<f64>> {
    proptest::collection::vec((1i64..=5).prop_map(|c| c as f64), 2..6)
        .prop_map(|coeffs| Polynomial::new(coeffs).expect("positive"))
}

proptest! {
    #[test]
    fn shift_composes_additively(p in anchored_poly(), a in -3i64..=3, b in -3i64..=3) {
        let (a, b) = (a as f64, b as f64);
        let twice = p.shift(a).shift(b);
        let once = p.shift(a + b);
        prop_assert_eq!(twice.coeffs(), once.coeffs());
    }

    #[test]
    fn shift_by_zero_is_identity(p in anchored_poly()) {
        let shifted = p.shift(0.0);
        prop_assert_eq!(shifted.coeffs(), p.coeffs());
    }

    #[test]
    fn scale_composes_multiplicatively(p in anchored_poly(), a in 1i64..=2, b in -2i64..=2) {
        prop_assume!(b != 0);
        let (a, b) = (a as f64, b as f64);
        let twice = p.scale_input(a).scale_input(b);
        let once = p.scale_input(a * b);
        prop_assert_eq!(twice.coeffs(), once.coeffs());
    }

    #[test]
    fn scale_by_one_is_identity(p in anchored_poly()) {
        let scaled = p.scale_input(1.0);
        prop_assert_eq!(scaled.coeffs(), p.coeffs());
    }

    #[test]
    fn reverse_is_an_involution(p in anchored_poly()) {
        let reversed_twice = p.reversed().reversed();
        prop_assert_eq!(reversed_twice.coeffs(), p.coeffs());
    }

    #[test]
    fn derivative_commutes_with_shift(p in anchored_poly(), s in -3i64..=3) {
        let s = s as f64;
        let left = p.shift(s).derivative();
        let right = p.derivative().shift(s);
        prop_assert_eq!(left.coeffs(), right.coeffs());
    }

    /// For a chain of recursion steps, the tracked Möbius transformation
    /// reproduces the transformed polynomial:
    /// `(c*x + d)^n * p(M(x)) = p_current(x)`.
    #[test]
    fn mobius_tracks_polynomial_transforms(
        p in positive_poly(),
        ops in proptest::collection::vec(0u8..3, 1..4),
        x in 0.3f64..1.8,
    ) {
        let degree = p.degree();
        let mut current = p.clone();
        let mut map = Mobius::identity();
        for op in ops {
            match op {
                0 => {
                    current = current.shift(1.0);
                    map = map.shift(1.0);
                }
                1 => {
                    current = current.scale_input(2.0);
                    map = map.scale_input(2.0);
                }
                _ => {
                    current = current.lower_interval(1.0);
                    map = map.lower_interval(1.0);
                }
            }
        }
        let den = map.c * x + map.d;
        let lhs = den.powi(degree as i32) * p.eval(map.eval(x));
        let rhs = current.eval(x);
        let scale = 1.0 + lhs.abs().max(rhs.abs());
        prop_assert!(((lhs - rhs) / scale).abs() < 1e-9, "lhs = {}, rhs = {}", lhs, rhs);
    }

    #[test]
    fn strip_zero_root_inverts_mul_by_x(p in anchored_poly()) {
        let shifted_up = &p * &Polynomial::new(vec![0.0, 1.0]).expect("x");
        let stripped = shifted_up.strip_zero_root();
        prop_assert_eq!(stripped.coeffs(), p.coeffs());
    }
}
