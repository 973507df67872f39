//! Division, GCD, and normalization laws.

use ballista_math::Polynomial;
use proptest::prelude::*;

fn coeff() -> impl Strategy<Value = f64> {
    (-5i64..=5).prop_map(|c| c as f64)
}

fn nonzero_poly() -> impl Strategy<Value = Polynomial<f64>> {
    (
        proptest::collection::vec(coeff(), 1..5),
        prop_oneof![(-5i64..=-1), (1i64..=5)],
    )
        .prop_map(|(mut coeffs, lead)| {
            coeffs.push(lead as f64);
            Polynomial::new(coeffs).expect("nonzero leading coefficient")
        })
}

proptest! {
    /// Division reconstructs the dividend: `p = q*d + r` with
    /// `deg(r) < deg(d)`.
    #[test]
    fn div_rem_reconstructs_dividend(p in nonzero_poly(), d in nonzero_poly()) {
        let (q, r) = p.div_rem(&d).expect("nonzero divisor");
        if !r.is_zero() {
            prop_assert!(r.degree() < d.degree());
        }
        for x in [0.5f64, 1.3, 2.7] {
            let lhs = p.eval(x);
            let rhs = q.eval(x) * d.eval(x) + r.eval(x);
            // quotient coefficients can grow well past the inputs, so the
            // comparison tolerance is loose relative to the working values
            let scale = 1.0 + lhs.abs().max(rhs.abs());
            prop_assert!(((lhs - rhs) / scale).abs() < 1e-6, "lhs {} rhs {}", lhs, rhs);
        }
    }

    /// `gcd(p, p)` is `p` up to leading-coefficient normalization.
    #[test]
    fn gcd_with_self_is_monic_self(p in nonzero_poly()) {
        let g = p.gcd(&p).expect("divisions succeed");
        let m = p.monic();
        prop_assert_eq!(g.degree(), m.degree());
        for (a, b) in g.coeffs().iter().zip(m.coeffs()) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }

    /// `gcd(p, 0)` is `p` normalized; in either argument order.
    #[test]
    fn gcd_with_zero_normalizes(p in nonzero_poly()) {
        let m = p.monic();
        let g1 = p.gcd(&Polynomial::zero()).expect("no division");
        prop_assert_eq!(g1.coeffs(), m.coeffs());
        let g2 = Polynomial::zero().gcd(&p).expect("no division");
        prop_assert_eq!(g2.coeffs(), m.coeffs());
    }

    /// The monic normalization is idempotent and preserves evaluation up
    /// to the leading coefficient.
    #[test]
    fn monic_is_idempotent(p in nonzero_poly()) {
        let m = p.monic();
        let mm = m.monic();
        prop_assert_eq!(mm.coeffs(), m.coeffs());
        prop_assert_eq!(m.leading(), 1.0);
    }
}
