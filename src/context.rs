//! A thin façade pairing a polynomial with a fixed variable ordering.
//! `Context` itself carries no algorithm logic; it only decides which
//! variable a promotion-to-univariate step (`polynomial::multivariate`'s
//! `to_univariate`) should pick when more than one is available.

use std::sync::Arc;

use crate::polynomial::MultivariatePolynomial;
use crate::ring::{CoefficientRing, RingScratchPool};
use crate::variable::Variable;

/// A shared, immutable ordered list of variables specifying the preferred
/// main-variable order when converting between multivariate and univariate
/// views.
#[derive(Clone, Debug)]
pub struct Context {
    variables: Arc<[Variable]>,
}

impl Context {
    pub fn new(variables: Vec<Variable>) -> Self {
        Self { variables: variables.into() }
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The most-preferred variable, i.e. the one a univariate promotion
    /// should choose as main variable absent any other constraint.
    pub fn preferred(&self) -> Option<&Variable> {
        self.variables.first()
    }

    /// The most-preferred variable that `p` actually contains, or `None` if
    /// `p` mentions none of this context's variables.
    pub fn main_variable_for<R: CoefficientRing + RingScratchPool>(
        &self,
        p: &MultivariatePolynomial<R>,
    ) -> Option<Variable> {
        self.variables.iter().find(|v| p.has(v)).cloned()
    }
}

impl PartialEq for Context {
    fn eq(&self, other: &Self) -> bool {
        self.variables.len() == other.variables.len()
            && self.variables.iter().zip(other.variables.iter()).all(|(a, b)| a == b)
    }
}

/// Pairs a multivariate polynomial with the context that determines its
/// main-variable preference.
#[derive(Clone, Debug)]
pub struct ContextPolynomial<R: CoefficientRing + RingScratchPool> {
    polynomial: MultivariatePolynomial<R>,
    context: Context,
}

impl<R: CoefficientRing + RingScratchPool> ContextPolynomial<R> {
    pub fn new(polynomial: MultivariatePolynomial<R>, context: Context) -> Self {
        Self { polynomial, context }
    }

    pub fn polynomial(&self) -> &MultivariatePolynomial<R> {
        &self.polynomial
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn main_variable(&self) -> Option<Variable> {
        self.context.main_variable_for(&self.polynomial)
    }
}

#[cfg(all(test, feature = "bigint"))]
mod tests {
    use super::*;
    use crate::ordering::MonomialOrder;
    use crate::variable::{VariableKind, VariableRegistry};
    use num_bigint::BigInt;

    fn var(name: &str) -> Variable {
        VariableRegistry::global().intern(name, VariableKind::Real)
    }

    #[test]
    fn preferred_picks_first_variable_present_in_the_polynomial() {
        let x = var("context_test_x");
        let y = var("context_test_y");
        let ctx = Context::new(vec![x.clone(), y.clone()]);
        let p = MultivariatePolynomial::<BigInt>::variable(y.clone(), MonomialOrder::Lex);
        assert_eq!(ctx.main_variable_for(&p), Some(y));
    }

    #[test]
    fn context_polynomial_exposes_main_variable() {
        let x = var("context_test_wrap_x");
        let ctx = Context::new(vec![x.clone()]);
        let p = MultivariatePolynomial::<BigInt>::variable(x.clone(), MonomialOrder::Lex);
        let cp = ContextPolynomial::new(p, ctx);
        assert_eq!(cp.main_variable(), Some(x));
    }

    #[test]
    fn no_shared_variable_returns_none() {
        let x = var("context_test_none_x");
        let y = var("context_test_none_y");
        let ctx = Context::new(vec![x]);
        let p = MultivariatePolynomial::<BigInt>::variable(y, MonomialOrder::Lex);
        assert_eq!(ctx.main_variable_for(&p), None);
    }
}
