//! Polynomial representations.
//!
//! `multivariate` is the sparse, monomial-pool-backed representation;
//! `univariate` is the dense, single-main-variable view, reached from a
//! multivariate polynomial by *promotion* about a chosen variable.

pub mod multivariate;
pub mod univariate;

pub use multivariate::MultivariatePolynomial;
pub use univariate::UnivariatePolynomial;
