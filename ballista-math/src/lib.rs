//! Univariate real polynomial root engine.
//!
//! Finds every positive real root of a machine-float polynomial:
//! squarefree reduction, analytic (LMQ) root bounds, continued-fraction
//! isolation into disjoint intervals driven by Descartes' rule and a
//! tracked Möbius change of coordinates, and high-precision bracket
//! refinement by bisection or the ITP method.
//!
//! # Examples
//!
//! ```
//! use ballista_math::{
//!     isolate_positive_roots, itp, EvalMode, ItpParams, Polynomial,
//! };
//!
//! // x^2 - 4x + 3 = (x - 1)(x - 3)
//! let p = Polynomial::new(vec![3.0, -4.0, 1.0]).unwrap();
//! let intervals = isolate_positive_roots(&p).unwrap();
//! assert_eq!(intervals.len(), 2);
//!
//! for interval in &intervals {
//!     if interval.is_point() {
//!         assert!(p.eval(interval.left).abs() < 1e-12);
//!         continue;
//!     }
//!     let outcome = itp(
//!         &p,
//!         (interval.left, interval.right),
//!         1e-9,
//!         50,
//!         &ItpParams::default(),
//!         EvalMode::Compensated,
//!     )
//!     .unwrap();
//!     let root = outcome.value().unwrap();
//!     assert!(p.eval_compensated(root).abs() < 1e-6);
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod polynomial;
pub mod scalar;

pub use error::{MathError, MathResult};
pub use polynomial::bounds::{lmq_lower, lmq_upper};
pub use polynomial::eval::{two_product, two_sum, EvalMode};
pub use polynomial::mobius::Mobius;
pub use polynomial::refine::{bisect, itp, ItpParams, RefineOutcome};
pub use polynomial::root_counting::sign_variations;
pub use polynomial::root_isolation::{
    isolate_positive_roots, Interval, IsolationConfig, IsolationStats, RootIsolator,
};
pub use polynomial::transform::binomial;
pub use polynomial::Polynomial;
pub use scalar::Scalar;
