//! Sum-of-squares decomposition.
//!
//! Scoped to quadratic forms (`total_degree() == 2`) via repeated
//! "complete-the-square" steps on the univariate view (`to_univariate`)
//! about each surviving variable's leading term.

use crate::polynomial::MultivariatePolynomial;
use crate::ring::{FieldRing, RingScratchPool};

/// A decomposition `p = sum(c_i * q_i^2)` with every `c_i` non-negative, or
/// `None` when `p` is not a quadratic form expressible this way — this is
/// restricted to `total_degree() == 2` rather than attempting a general
/// positive-semidefinite SOS solver.
pub fn sos_decomposition<R>(p: &MultivariatePolynomial<R>) -> Option<Vec<(R, MultivariatePolynomial<R>)>>
where
    R: FieldRing + RingScratchPool,
{
    if p.is_zero() {
        return Some(Vec::new());
    }
    if p.leading_coefficient().signum() < 0 {
        return None;
    }
    if p.total_degree() != 2 {
        return None;
    }

    let order = p.order();
    let mut result = Vec::new();
    let mut rem = p.clone();
    let two = R::one().add(&R::one());

    while !rem.is_constant() {
        let var = rem
            .leading_term()
            .monomial
            .as_ref()
            .expect("non-constant polynomial has a monomial leading term")
            .pairs()[0]
            .0
            .clone();
        let u = rem.to_univariate(&var);
        let lc2_poly = u.coeff(2);
        if !lc2_poly.is_constant() {
            return None;
        }
        let lc2 = lc2_poly.constant_term();
        if lc2.signum() < 0 || lc2.is_zero() {
            return None;
        }
        let c1 = u.coeff(1);
        rem = u.coeff(0);
        if !c1.is_zero() {
            let denom = lc2.mul(&two);
            let inv_denom = denom.inv().expect("non-zero leading coefficient doubled stays non-zero");
            let qr = c1.scalar_mul(&inv_denom);
            let linear = MultivariatePolynomial::variable(var, order).add(&qr);
            rem = rem.sub(&qr.mul(&qr).scalar_mul(&lc2));
            result.push((lc2, linear));
        } else {
            result.push((lc2, MultivariatePolynomial::variable(var, order)));
        }
    }

    let constant = rem.constant_term();
    if constant.signum() < 0 {
        return None;
    }
    if !constant.is_zero() {
        result.push((constant, MultivariatePolynomial::constant(R::one(), order)));
    }
    Some(result)
}

#[cfg(all(test, feature = "bigint"))]
mod tests {
    use super::*;
    use crate::ordering::MonomialOrder;
    use crate::variable::{VariableKind, VariableRegistry};
    use num_bigint::BigInt;
    use num_rational::BigRational;

    fn var(name: &str) -> crate::variable::Variable {
        VariableRegistry::global().intern(name, VariableKind::Real)
    }

    fn rat(n: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(n))
    }

    fn eval_decomposition(decomp: &[(BigRational, MultivariatePolynomial<BigRational>)], order: MonomialOrder) -> MultivariatePolynomial<BigRational> {
        let mut acc = MultivariatePolynomial::zero(order);
        for (c, q) in decomp {
            acc = acc.add(&q.mul(q).scalar_mul(c));
        }
        acc
    }

    #[test]
    fn sum_of_two_squares_decomposes_exactly() {
        // p = x^2 + y^2: already a sum of two squares with coefficient 1 each.
        let x = var("sos_test_xy_x");
        let y = var("sos_test_xy_y");
        let order = MonomialOrder::GradedLex;
        let p = MultivariatePolynomial::<BigRational>::monomial_term(rat(1), x, 2, order)
            .add(&MultivariatePolynomial::monomial_term(rat(1), y, 2, order));

        let decomp = sos_decomposition(&p).expect("x^2 + y^2 is a quadratic form with non-negative leading coefficient");
        assert!(!decomp.is_empty());
        assert_eq!(eval_decomposition(&decomp, order), p);
    }

    #[test]
    fn completed_square_cross_term_decomposes_exactly() {
        // p = x^2 + 2xy + 2y^2 = (x+y)^2 + y^2.
        let x = var("sos_test_cross_x");
        let y = var("sos_test_cross_y");
        let order = MonomialOrder::GradedLex;
        let xy = MultivariatePolynomial::<BigRational>::variable(x.clone(), order).mul(&MultivariatePolynomial::variable(y.clone(), order));
        let p = MultivariatePolynomial::monomial_term(rat(1), x, 2, order)
            .add(&xy.scalar_mul(&rat(2)))
            .add(&MultivariatePolynomial::monomial_term(rat(2), y, 2, order));

        let decomp = sos_decomposition(&p).expect("positive-definite quadratic form decomposes");
        assert_eq!(eval_decomposition(&decomp, order), p);
    }

    #[test]
    fn cubic_form_is_not_a_sum_of_squares() {
        // p = x^3 is not a quadratic form.
        let x = var("sos_test_cubic_x");
        let order = MonomialOrder::GradedLex;
        let p = MultivariatePolynomial::<BigRational>::monomial_term(rat(1), x, 3, order);
        assert!(sos_decomposition(&p).is_none());
    }

    #[test]
    fn indefinite_quadratic_form_is_rejected() {
        // p = x^2 - y^2 is not positive semidefinite.
        let x = var("sos_test_indefinite_x");
        let y = var("sos_test_indefinite_y");
        let order = MonomialOrder::GradedLex;
        let p = MultivariatePolynomial::<BigRational>::monomial_term(rat(1), x, 2, order)
            .sub(&MultivariatePolynomial::monomial_term(rat(1), y, 2, order));
        assert!(sos_decomposition(&p).is_none());
    }
}
