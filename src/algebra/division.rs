//! Exact multivariate polynomial division.
//!
//! A classical "reduce by the divisor's leading term" loop, restricted to the
//! single-divisor, exact-quotient case — a remainder never escapes this
//! function, it either divides evenly or the caller gets
//! [`KernelError::NotDivisible`].

use crate::error::{KernelError, KernelResult};
use crate::polynomial::MultivariatePolynomial;
use crate::ring::{EuclideanRing, RingScratchPool};
use crate::term::Term;

/// `dividend / divisor`, succeeding only if the division is exact — this
/// fails rather than returning a remainder when the division is inexact.
/// Division by the zero polynomial is [`KernelError::DivisionByZero`]; an
/// inexact division is [`KernelError::NotDivisible`].
pub fn divide<R>(
    dividend: &MultivariatePolynomial<R>,
    divisor: &MultivariatePolynomial<R>,
) -> KernelResult<MultivariatePolynomial<R>>
where
    R: EuclideanRing + RingScratchPool,
{
    if divisor.is_zero() {
        return Err(KernelError::DivisionByZero);
    }
    let order = dividend.order();
    if dividend.is_zero() {
        return Ok(MultivariatePolynomial::zero(order));
    }
    if divisor.is_constant() {
        let c = divisor.constant_term();
        let mut out = Vec::with_capacity(dividend.terms().len());
        for t in dividend.terms() {
            let (q, r) = t.coefficient.div_rem(&c);
            if !r.is_zero() {
                return Err(KernelError::NotDivisible);
            }
            out.push(Term::new(q, t.monomial.clone()));
        }
        return Ok(MultivariatePolynomial::from_terms(out, order, true));
    }

    let lt_divisor = divisor.leading_term().clone();
    let divisor_monomial = lt_divisor.monomial.clone().expect("non-constant divisor has a monomial leading term");

    let mut remainder = dividend.clone();
    let mut quotient = MultivariatePolynomial::zero(order);
    while !remainder.is_zero() {
        let lt_r = remainder.leading_term().clone();
        let rm = match &lt_r.monomial {
            Some(m) => m.clone(),
            None => return Err(KernelError::NotDivisible),
        };
        let q_monomial = match rm.checked_div(&divisor_monomial) {
            Some(m) => m,
            None => return Err(KernelError::NotDivisible),
        };
        let (q_coeff, rem_coeff) = lt_r.coefficient.div_rem(&lt_divisor.coefficient);
        if !rem_coeff.is_zero() {
            return Err(KernelError::NotDivisible);
        }
        let q_monomial = if q_monomial.is_one() { None } else { Some(q_monomial) };
        let q_term = MultivariatePolynomial::from_terms(vec![Term::new(q_coeff, q_monomial)], order, true);
        quotient = quotient.add(&q_term);
        remainder = remainder.sub(&q_term.mul(divisor));
    }
    Ok(quotient)
}

#[cfg(all(test, feature = "bigint"))]
mod tests {
    use super::*;
    use crate::ordering::MonomialOrder;
    use crate::variable::{VariableKind, VariableRegistry};
    use num_bigint::BigInt;

    fn var(name: &str) -> crate::variable::Variable {
        VariableRegistry::global().intern(name, VariableKind::Real)
    }

    #[test]
    fn exact_division_recovers_cofactor() {
        let x = var("division_test_exact_x");
        let y = var("division_test_exact_y");
        let order = MonomialOrder::GradedLex;
        // (x + y) * (x - y) = x^2 - y^2
        let xpy = MultivariatePolynomial::variable(x.clone(), order)
            .add(&MultivariatePolynomial::variable(y.clone(), order));
        let xmy = MultivariatePolynomial::variable(x.clone(), order)
            .sub(&MultivariatePolynomial::variable(y.clone(), order));
        let product = xpy.mul(&xmy);

        let quotient = divide(&product, &xpy).expect("division is exact");
        assert_eq!(quotient, xmy);
    }

    #[test]
    fn division_by_constant_scales_every_term() {
        let x = var("division_test_const_x");
        let order = MonomialOrder::Lex;
        let p = MultivariatePolynomial::monomial_term(BigInt::from(6), x, 1, order);
        let two = MultivariatePolynomial::constant(BigInt::from(2), order);
        let quotient = divide(&p, &two).expect("6 divides by 2");
        assert_eq!(quotient.leading_coefficient(), BigInt::from(3));
    }

    #[test]
    fn inexact_division_fails() {
        let x = var("division_test_inexact_x");
        let y = var("division_test_inexact_y");
        let order = MonomialOrder::GradedLex;
        let p = MultivariatePolynomial::variable(x, order);
        let q = MultivariatePolynomial::variable(y, order);
        assert_eq!(divide(&p, &q), Err(KernelError::NotDivisible));
    }

    #[test]
    fn division_by_zero_is_rejected() {
        let x = var("division_test_zero_x");
        let order = MonomialOrder::Lex;
        let p = MultivariatePolynomial::variable(x, order);
        let zero = MultivariatePolynomial::<BigInt>::zero(order);
        assert_eq!(divide(&p, &zero), Err(KernelError::DivisionByZero));
    }
}
