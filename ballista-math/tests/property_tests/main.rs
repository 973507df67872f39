//! Property-based tests for the polynomial root engine.
//!
//! This harness contains property tests for:
//! - Evaluator consistency (Horner vs compensated Horner)
//! - Transformation identities and the Möbius/polynomial coupling
//! - Root bounds, Descartes counts, isolation totality, and refinement

mod algebra_properties;
mod eval_properties;
mod isolation_properties;
mod transform_properties;
