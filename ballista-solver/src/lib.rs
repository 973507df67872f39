//! Minimal-added-velocity intercept solver.
//!
//! Given the position derivatives of a moving target and a moving shooter
//! in a frictionless model, finds the flight time `T > 0` at which a
//! projectile needs the least added launch speed to meet the target, by
//! reducing the optimization to positive-root isolation of a scalar
//! polynomial (see [`ballista_math`]).
//!
//! # Examples
//!
//! ```
//! use ballista_solver::{solve, InterceptConfig, Motion};
//!
//! // target 45 m up, drifting 7 m/s sideways, under 10 m/s^2 gravity;
//! // shooter at rest at the origin
//! let target = Motion::from_rows(&[
//!     &[0.0f64, 45.0],
//!     &[7.0, 0.0],
//!     &[0.0, -10.0],
//! ])
//! .unwrap();
//! let shooter = Motion::from_rows(&[&[0.0, 0.0]]).unwrap();
//!
//! let solution = solve(&target, &shooter, &InterceptConfig::default())
//!     .unwrap()
//!     .expect("an interior optimum exists");
//! assert!((solution.time - 3.0).abs() < 1e-4);
//! assert!((solution.speed_squared - 49.0).abs() < 1e-3);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod intercept;
pub mod motion;

pub use error::{SolverError, SolverResult};
pub use intercept::{
    critical_polynomial, solve, solve_relative, InterceptConfig, InterceptSolution, RefinerKind,
};
pub use motion::{Coords, Motion};
