//! Polynomial Resultant Algorithms
//!
//! MOVED TO ALGEBRA LAYER
//!
//! All resultant and discriminant operations are Expression-based
//! and belong in the algebra layer, not the pure polynomial algorithms layer.
//!
//! Use `crate::algebra::polynomial_advanced::AdvancedPolynomial` instead:
//! - `polynomial_resultant()`
//! - `polynomial_discriminant()`
//!
//! This file remains only for backward compatibility exports.

pub use crate::algebra::polynomial_advanced::AdvancedPolynomial;
