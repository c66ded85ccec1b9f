//! Bisection method for root finding
//!
//! Implements the bisection method which guarantees convergence
//! for continuous functions with a sign change in the interval.
//! Uses interval halving to iteratively narrow down the root location.
//!
//! # Algorithm
//!
//! Given f(a) and f(b) with opposite signs:
//! 1. Compute midpoint: c = (a + b) / 2
//! 2. If f(c) has same sign as f(a), replace a with c
//! 3. Otherwise, replace b with c
//! 4. Repeat until |b - a| < tolerance
//!
//! # Convergence
//!
//! - Guaranteed convergence if f is continuous and f(a)*f(b) < 0
//! - Linear convergence rate: error halves each iteration
//! - Requires O(log2((b-a)/tolerance)) iterations

use super::{RootFinder, RootFindingConfig, RootResult};
use crate::error::MathError;

/// Bisection method root finder
///
/// Guaranteed convergence method that requires an initial bracket [a, b]
/// where f(a) and f(b) have opposite signs.
pub struct BisectionMethod {
    /// Lower bound of initial bracket
    pub a: f64,
    /// Upper bound of initial bracket
    pub b: f64,
}

impl BisectionMethod {
    /// Create a new bisection method with initial bracket
    ///
    /// # Arguments
    ///
    /// * `a` - Lower bound of bracket
    /// * `b` - Upper bound of bracket
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathhook_core::algebra::root_finding::BisectionMethod;
    ///
    /// let method = BisectionMethod::new(0.0, 2.0);
    /// ```
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Check if the bracket is valid (function values have opposite signs)
    fn validate_bracket<F>(&self, f: &F) -> Result<(), MathError>
    where
        F: Fn(f64) -> f64,
    {
        let fa = f(self.a);
        let fb = f(self.b);

        if fa.is_nan() || fb.is_nan() {
            return Err(MathError::DomainError {
                operation: "bisection".to_string(),
                value: crate::core::Expression::symbol(crate::core::Symbol::scalar("x")),
                reason: "Function evaluates to NaN at bracket endpoints".to_string(),
            });
        }

        if fa * fb > 0.0 {
            return Err(MathError::ConvergenceFailed {
                reason: format!(
                    "Function values at bracket endpoints must have opposite signs: f({}) = {}, f({}) = {}",
                    self.a, fa, self.b, fb
                ),
            });
        }

        Ok(())
    }
}

impl RootFinder for BisectionMethod {
    fn find_root<F>(
        &self,
        f: F,
        config: &RootFindingConfig,
    ) -> Result<RootResult, MathError>
    where
        F: Fn(f64) -> f64,
    {
        self.validate_bracket(&f)?;

        let mut a = self.a;
        let mut b = self.b;
        let mut fa = f(a);
        let mut fb = f(b);

        for iteration in 0..config.max_iterations {
            let c = (a + b) / 2.0;
            let fc = f(c);

            if fc.abs() < config.tolerance || (b - a).abs() / 2.0 < config.tolerance {
                return Ok(RootResult {
                    root: c,
                    iterations: iteration + 1,
                    function_value: fc,
                    converged: true,
                });
            }

            if fa * fc < 0.0 {
                b = c;
                fb = fc;
            } else {
                a = c;
                fa = fc;
            }
        }

        let final_c = (a + b) / 2.0;
        Err(MathError::MaxIterationsReached {
            max_iterations: config.max_iterations,
        })
    }
}
