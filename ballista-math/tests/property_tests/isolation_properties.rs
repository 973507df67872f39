//! Bound soundness, Descartes counts, isolation totality, refinement.

use ballista_math::{
    bisect, isolate_positive_roots, itp, lmq_lower, lmq_upper, sign_variations, EvalMode,
    Interval, ItpParams, Polynomial,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Distinct positive quarter-integer roots; small and well separated so
/// every product of linear factors stays exact in doubles.
fn distinct_roots() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::btree_set(1u32..=30, 1..5)
        .prop_map(|set: BTreeSet<u32>| set.into_iter().map(|k| k as f64 / 4.0).collect())
}

fn covered_once(intervals: &[Interval<f64>], root: f64) -> bool {
    intervals.iter().filter(|iv| iv.contains(root)).count() == 1
}

proptest! {
    /// Every positive real root lies between the LMQ bounds.
    #[test]
    fn lmq_bounds_are_sound(roots in distinct_roots()) {
        let p = Polynomial::from_roots(&roots);
        let ub = lmq_upper(&p);
        let lb = lmq_lower(&p);
        for &r in &roots {
            prop_assert!(ub >= r * (1.0 - 1e-9), "ub {} vs root {}", ub, r);
            prop_assert!(lb <= r * (1.0 + 1e-9), "lb {} vs root {}", lb, r);
        }
    }

    /// The variation count bounds the positive-root count from above and
    /// matches its parity.
    #[test]
    fn descartes_bounds_root_count(roots in distinct_roots()) {
        let p = Polynomial::from_roots(&roots);
        let v = sign_variations(&p).expect("finite coefficients");
        prop_assert!(v >= roots.len());
        prop_assert_eq!((v - roots.len()) % 2, 0);
    }

    /// Totality: every positive root lands in exactly one emitted
    /// interval, and emitted intervals are pairwise disjoint.
    #[test]
    fn isolation_is_total_and_disjoint(roots in distinct_roots()) {
        let p = Polynomial::from_roots(&roots);
        let intervals = isolate_positive_roots(&p).expect("isolation succeeds");
        prop_assert_eq!(intervals.len(), roots.len());
        for &r in &roots {
            prop_assert!(covered_once(&intervals, r), "root {} in {:?}", r, intervals);
        }
        for (i, a) in intervals.iter().enumerate() {
            for b in intervals.iter().skip(i + 1) {
                let separated = a.right <= b.left || b.right <= a.left;
                prop_assert!(
                    separated || a.is_point() || b.is_point(),
                    "{:?} overlaps {:?}", a, b
                );
            }
        }
    }

    /// Negative roots never surface.
    #[test]
    fn negative_mirror_roots_stay_hidden(roots in distinct_roots()) {
        let mirrored: Vec<f64> = roots.iter().map(|r| -r).collect();
        let all: Vec<f64> = roots.iter().copied().chain(mirrored).collect();
        let p = Polynomial::from_roots(&all);
        let intervals = isolate_positive_roots(&p).expect("isolation succeeds");
        prop_assert_eq!(intervals.len(), roots.len());
    }

    /// Both refiners converge on a valid bracket around a known root.
    #[test]
    fn refiners_converge_on_known_root(k in 2u32..=30) {
        let root = k as f64 / 4.0;
        // (x - root)(x + root + 1): one positive root, bracketed by
        // (0, root + 1)
        let p = Polynomial::from_roots(&[root, -root - 1.0]);
        let bracket = (0.0, root + 1.0);

        let by_bisect = bisect(&p, bracket, 1e-8, 100, EvalMode::Compensated)
            .expect("valid bracket")
            .value()
            .expect("enough iterations");
        prop_assert!((by_bisect - root).abs() < 1e-6);

        let by_itp = itp(&p, bracket, 1e-8, 60, &ItpParams::default(), EvalMode::Compensated)
            .expect("valid bracket")
            .value()
            .expect("enough iterations");
        prop_assert!((by_itp - root).abs() < 1e-6);
    }

    /// End to end: isolate then refine recovers every root of a random
    /// squarefree polynomial to tolerance.
    #[test]
    fn isolate_then_refine_recovers_roots(roots in distinct_roots()) {
        let p = Polynomial::from_roots(&roots);
        let intervals = isolate_positive_roots(&p).expect("isolation succeeds");
        let mut recovered: Vec<f64> = Vec::new();
        for iv in &intervals {
            if iv.is_point() {
                recovered.push(iv.left);
                continue;
            }
            // an isolation endpoint can itself be an exact root found by a
            // neighboring branch; step inside the open interval first
            let (mut left, mut right) = (iv.left, iv.right);
            let nudge = iv.width() * 1e-9;
            if p.eval_compensated(left) == 0.0 {
                left += nudge;
            }
            if p.eval_compensated(right) == 0.0 {
                right -= nudge;
            }
            let outcome = itp(
                &p,
                (left, right),
                5e-10,
                80,
                &ItpParams::default(),
                EvalMode::Compensated,
            );
            if let Ok(refined) = outcome {
                if let Some(x) = refined.value() {
                    recovered.push(x);
                }
            }
        }
        recovered.sort_by(|a, b| a.partial_cmp(b).expect("finite"));
        prop_assert_eq!(recovered.len(), roots.len());
        for (x, r) in recovered.iter().zip(roots.iter()) {
            prop_assert!((x - r).abs() < 1e-6, "recovered {} for root {}", x, r);
        }
    }
}
