//! Polynomial-algebra functions.
//!
//! One submodule per algorithm family: exact
//! multivariate division and GCD/LCM, resultant/discriminant and
//! square-free decomposition on the univariate view, the factorization
//! hook and its sign-sanitizing wrapper, Gröbner-basis scaffolding
//! (S-polynomial, leading-term reduction), sum-of-squares decomposition,
//! and Sturm-sequence-driven real-root isolation.

pub mod division;
pub mod factor;
pub mod gcd;
pub mod groebner;
pub mod resultant;
pub mod roots;
pub mod sos;
pub mod squarefree;
