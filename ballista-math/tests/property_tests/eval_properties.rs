//! Evaluator consistency properties.

use ballista_math::{EvalMode, Polynomial};
use proptest::prelude::*;

fn coeff() -> impl Strategy<Value = f64> {
    (-8i64..=8).prop_map(|c| c as f64)
}

fn small_poly() -> impl Strategy<Value = Polynomial<f64>> {
    proptest::collection::vec(coeff(), 1..6)
        .prop_map(|coeffs| Polynomial::new(coeffs).expect("non-empty"))
}

proptest! {
    /// On integer-valued polynomials at integer points both schemes are
    /// exact, so they agree bit-for-bit.
    #[test]
    fn horner_and_compensated_agree_exactly(p in small_poly(), x in -4i64..=4) {
        let x = x as f64;
        prop_assert_eq!(p.eval(x), p.eval_compensated(x));
        prop_assert_eq!(p.eval_mode(x, EvalMode::Horner), p.eval(x));
        prop_assert_eq!(p.eval_mode(x, EvalMode::Compensated), p.eval_compensated(x));
    }

    /// At dyadic points every term is exactly representable, so the
    /// compensated scheme must reproduce the exact sum.
    #[test]
    fn compensated_is_exact_on_dyadics(p in small_poly(), num in -16i64..=16) {
        let x = num as f64 / 8.0;
        let mut exact = 0.0f64;
        for (i, &c) in p.coeffs().iter().enumerate() {
            exact += c * x.powi(i as i32);
        }
        prop_assert_eq!(p.eval_compensated(x), exact);
    }

    /// Leading-term behavior: far from the origin both schemes agree in
    /// sign with the leading coefficient.
    #[test]
    fn leading_term_dominates(p in small_poly()) {
        prop_assume!(!p.is_zero());
        let x = 1e6;
        let expected = p.leading().signum();
        if p.degree() > 0 {
            prop_assert_eq!(p.eval(x).signum(), expected);
            prop_assert_eq!(p.eval_compensated(x).signum(), expected);
        }
    }
}
