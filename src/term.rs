//! A single polynomial term: a coefficient paired with an optional monomial.

use std::fmt;

use crate::monomial::Monomial;
use crate::ring::CoefficientRing;

/// A single polynomial term. `monomial = None` represents a constant term
/// whose value is `coefficient`.
///
/// The canonical zero term (`coefficient.is_zero()`) must never appear
/// inside a well-formed polynomial; `Term` itself does not enforce this — it
/// is a bare data pair, and the invariant is owned by `MultivariatePolynomial`.
#[derive(Clone, Debug)]
pub struct Term<R: CoefficientRing> {
    pub coefficient: R,
    pub monomial: Option<Monomial>,
}

impl<R: CoefficientRing> Term<R> {
    pub fn new(coefficient: R, monomial: Option<Monomial>) -> Self {
        Self { coefficient, monomial }
    }

    pub fn constant(coefficient: R) -> Self {
        Self { coefficient, monomial: None }
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    pub fn is_constant(&self) -> bool {
        self.monomial.is_none()
    }

    pub fn total_degree(&self) -> u64 {
        self.monomial.as_ref().map(Monomial::total_degree).unwrap_or(0)
    }
}

impl<R: CoefficientRing> PartialEq for Term<R> {
    fn eq(&self, other: &Self) -> bool {
        self.coefficient == other.coefficient && self.monomial == other.monomial
    }
}

impl<R: CoefficientRing + fmt::Display> fmt::Display for Term<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.monomial {
            None => write!(f, "{}", self.coefficient),
            Some(m) => {
                if self.coefficient.is_one() {
                    write!(f, "{m}")
                } else {
                    write!(f, "{}\u{b7}{m}", self.coefficient)
                }
            }
        }
    }
}

#[cfg(all(test, feature = "bigint"))]
mod tests {
    use super::*;
    use crate::monomial::MonomialPool;
    use crate::variable::{VariableKind, VariableRegistry};
    use num_bigint::BigInt;

    #[test]
    fn constant_term_has_no_monomial() {
        let t = Term::constant(BigInt::from(5));
        assert!(t.is_constant());
        assert_eq!(t.total_degree(), 0);
    }

    #[test]
    fn term_display_omits_coefficient_one() {
        let x = VariableRegistry::global().intern("term_test_display_x", VariableKind::Real);
        let m = MonomialPool::global().create(x, 1);
        let t = Term::new(BigInt::from(1), Some(m));
        assert_eq!(format!("{t}"), "term_test_display_x");
    }
}
