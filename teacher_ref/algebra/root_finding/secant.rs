//! Secant method for root finding
//!
//! Implements the secant method which approximates the derivative
//! using two function evaluations. No analytical or numerical derivative required.
//!
//! # Algorithm
//!
//! Given two initial guesses x0 and x1:
//! x(n+1) = x(n) - f(x(n)) * (x(n) - x(n-1)) / (f(x(n)) - f(x(n-1)))
//!
//! # Convergence
//!
//! - Superlinear convergence rate: â‰ˆ 1.618 (golden ratio)
//! - Faster than bisection, slower than Newton-Raphson
//! - No derivative calculation required
//! - Requires two initial guesses (not necessarily a bracket)

use super::{RootFinder, RootFindingConfig, RootResult};
use crate::error::MathError;

/// Secant method for root finding
pub struct SecantMethod {
    /// First initial guess
    pub x0: f64,
    /// Second initial guess
    pub x1: f64,
}

impl SecantMethod {
    /// Create a new secant method with two initial guesses
    ///
    /// # Arguments
    ///
    /// * `x0` - First initial guess
    /// * `x1` - Second initial guess (should be close to but different from x0)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathhook_core::algebra::root_finding::SecantMethod;
    ///
    /// let method = SecantMethod::new(1.0, 2.0);
    /// ```
    pub fn new(x0: f64, x1: f64) -> Self {
        Self { x0, x1 }
    }
}

impl RootFinder for SecantMethod {
    fn find_root<F>(&self, f: F, config: &RootFindingConfig) -> Result<RootResult, MathError>
    where
        F: Fn(f64) -> f64,
    {
        let mut x_prev = self.x0;
        let mut x_curr = self.x1;
        let mut f_prev = f(x_prev);
        let mut f_curr = f(x_curr);

        for iteration in 0..config.max_iterations {
            if f_curr.abs() < config.tolerance {
                return Ok(RootResult {
                    root: x_curr,
                    iterations: iteration + 1,
                    function_value: f_curr,
                    converged: true,
                });
            }

            let denominator = f_curr - f_prev;
            if denominator.abs() < 1e-14 {
                return Err(MathError::ConvergenceFailed {
                    reason: format!(
                        "Denominator too small: f({}) - f({}) = {}",
                        x_curr, x_prev, denominator
                    ),
                });
            }

            let x_new = x_curr - f_curr * (x_curr - x_prev) / denominator;

            if x_new.is_nan() || x_new.is_infinite() {
                return Err(MathError::ConvergenceFailed {
                    reason: format!("Iteration produced invalid value: {}", x_new),
                });
            }

            let f_new = f(x_new);

            if (x_new - x_curr).abs() < config.tolerance * x_new.abs().max(1.0)
                && f_new.abs() < config.tolerance
            {
                return Ok(RootResult {
                    root: x_new,
                    iterations: iteration + 1,
                    function_value: f_new,
                    converged: true,
                });
            }

            x_prev = x_curr;
            f_prev = f_curr;
            x_curr = x_new;
            f_curr = f_new;
        }

        Err(MathError::MaxIterationsReached {
            max_iterations: config.max_iterations,
        })
    }
}
