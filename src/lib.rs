//! Core algebraic kernel: hash-consed monomials, multivariate/univariate
//! polynomials, interval arithmetic, and the polynomial-algebra functions
//! (GCD, resultant, square-free decomposition, factorization hook, real-root
//! isolation) built on top of them.
//!
//! `variable` holds the process-wide variable registry, `monomial` the
//! hash-consed monomial pool, `term` the coefficient/monomial pair, `ordering`
//! the monomial total orders, `term_manager` the scratch buckets used during
//! sum/product accumulation, `polynomial::{multivariate, univariate}` the two
//! polynomial representations, `ring` the coefficient capability traits,
//! `algebra` the GCD/resultant/factorization/root-isolation functions,
//! `interval` the real interval arithmetic, `context` the variable-ordering
//! façade, and `bitset` the reason-set bit vector.

pub mod algebra;
pub mod bitset;
pub mod context;
pub mod error;
pub mod interval;
pub mod monomial;
pub mod ordering;
pub mod polynomial;
pub mod ring;
pub mod term;
pub mod term_manager;
pub mod variable;

pub use bitset::ReasonSet;
pub use context::{Context, ContextPolynomial};
pub use error::{KernelError, KernelResult};
pub use interval::{Bound, Interval};
pub use monomial::{Monomial, MonomialPool};
pub use ordering::MonomialOrder;
pub use polynomial::{MultivariatePolynomial, UnivariatePolynomial};
pub use ring::{CoefficientRing, EuclideanRing, FieldRing, OrderedRing, RingScratchPool};
pub use term::Term;
pub use term_manager::TermAdditionManager;
pub use variable::{Variable, VariableKind, VariableRegistry};
