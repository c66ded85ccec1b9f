//! S-polynomial and leading-term reduction — the core moves of Buchberger's
//! algorithm, built on pool-backed `Monomial` operations (`lcm`,
//! `checked_div`) and `MultivariatePolynomial::leading_term`.
//! `reduce_completely`'s termination needs no artificial iteration cap:
//! each step strictly cancels the remainder's leading monomial under a
//! well-founded monomial order.

use crate::monomial::Monomial;
use crate::polynomial::MultivariatePolynomial;
use crate::ring::{FieldRing, RingScratchPool};
use crate::term::Term;

/// `(lcm(LM(f), LM(g)) / LM(f)) / LC(f)`, the single-term cofactor that
/// scales `f` so its leading term becomes exactly `lcm(LM(f), LM(g))`.
fn leading_cofactor<R: FieldRing + RingScratchPool>(
    lcm: &Option<Monomial>,
    own: &Option<Monomial>,
    lc: R,
    order: crate::ordering::MonomialOrder,
) -> MultivariatePolynomial<R> {
    let cofactor_monomial = match (lcm, own) {
        (None, _) => None,
        (Some(l), None) => Some(l.clone()),
        (Some(l), Some(o)) => Some(l.checked_div(o).expect("lcm is divisible by each of its factors")),
    };
    let inv_lc = lc.inv().expect("leading coefficient of a non-zero polynomial is non-zero, hence invertible");
    MultivariatePolynomial::from_terms(vec![Term::new(inv_lc, cofactor_monomial)], order, true)
}

/// `S(f, g) = (lcm(LM(f), LM(g)) / LT(f)) * f - (lcm(LM(f), LM(g)) / LT(g)) * g`.
/// Designed so the leading terms of `f` and `g` cancel exactly — the
/// generator of new basis elements in Buchberger's algorithm. Zero if
/// either operand is zero.
pub fn s_polynomial<R>(f: &MultivariatePolynomial<R>, g: &MultivariatePolynomial<R>) -> MultivariatePolynomial<R>
where
    R: FieldRing + RingScratchPool,
{
    let order = f.order();
    if f.is_zero() || g.is_zero() {
        return MultivariatePolynomial::zero(order);
    }
    let lt_f = f.leading_term().clone();
    let lt_g = g.leading_term().clone();
    let lcm = match (&lt_f.monomial, &lt_g.monomial) {
        (None, None) => None,
        (Some(m), None) | (None, Some(m)) => Some(m.clone()),
        (Some(a), Some(b)) => Some(a.lcm(b)),
    };
    let coeff_f = leading_cofactor(&lcm, &lt_f.monomial, lt_f.coefficient, order);
    let coeff_g = leading_cofactor(&lcm, &lt_g.monomial, lt_g.coefficient, order);
    coeff_f.mul(f).sub(&coeff_g.mul(g))
}

/// One reduction step of `p` modulo `basis`: if
/// some non-zero element of `basis` has a leading monomial dividing `p`'s
/// leading monomial, subtracts the multiple of that element that cancels
/// `p`'s leading term. Returns the reduced polynomial and whether a
/// reduction actually happened.
pub fn reduce<R>(
    p: &MultivariatePolynomial<R>,
    basis: &[MultivariatePolynomial<R>],
) -> (MultivariatePolynomial<R>, bool)
where
    R: FieldRing + RingScratchPool,
{
    if p.is_zero() {
        return (p.clone(), false);
    }
    let lt_p = p.leading_term().clone();
    for g in basis {
        if g.is_zero() {
            continue;
        }
        let lt_g = g.leading_term();
        let quotient_monomial = match (&lt_p.monomial, &lt_g.monomial) {
            (m, None) => m.clone(),
            (Some(mp), Some(mg)) => match mp.checked_div(mg) {
                Some(q) => Some(q),
                None => continue,
            },
            (None, Some(_)) => continue,
        };
        let inv_lc_g = lt_g.coefficient.inv().expect("leading coefficient of a non-zero polynomial is invertible");
        let factor_coeff = lt_p.coefficient.mul(&inv_lc_g);
        let factor = MultivariatePolynomial::from_terms(vec![Term::new(factor_coeff, quotient_monomial)], p.order(), true);
        return (p.sub(&factor.mul(g)), true);
    }
    (p.clone(), false)
}

/// The normal form of `p` modulo `basis`: repeated [`reduce`] until no
/// basis element's leading monomial divides the remainder's leading
/// monomial.
pub fn reduce_completely<R>(p: &MultivariatePolynomial<R>, basis: &[MultivariatePolynomial<R>]) -> MultivariatePolynomial<R>
where
    R: FieldRing + RingScratchPool,
{
    let mut current = p.clone();
    loop {
        let (reduced, changed) = reduce(&current, basis);
        if !changed {
            return reduced;
        }
        current = reduced;
    }
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

    #[test]
    fn s_polynomial_cancels_leading_terms() {
        // f = x^2 + y, g = x*y + 1, lex order with x > y.
        let x = var("groebner_test_s_poly_x");
        let y = var("groebner_test_s_poly_y");
        let order = MonomialOrder::Lex;
        let f = MultivariatePolynomial::<BigRational>::monomial_term(rat(1), x.clone(), 2, order)
            .add(&MultivariatePolynomial::variable(y.clone(), order));
        let g = MultivariatePolynomial::monomial_term(rat(1), x.clone(), 1, order).mul(&MultivariatePolynomial::variable(y.clone(), order))
            .add(&MultivariatePolynomial::constant(rat(1), order));

        let s = s_polynomial(&f, &g);
        // S(f,g) = y*f - x*g = (x^2*y + y^2) - (x^2*y + x) = y^2 - x.
        let expected = MultivariatePolynomial::monomial_term(rat(1), y, 2, order)
            .sub(&MultivariatePolynomial::variable(x, order));
        assert_eq!(s, expected);
    }

    #[test]
    fn reduce_cancels_leading_term_when_divisible() {
        // p = x^2 + x, basis = [x - 1]: reducing by (x-1) should eliminate x^2.
        let x = var("groebner_test_reduce_x");
        let order = MonomialOrder::Lex;
        let p = MultivariatePolynomial::monomial_term(rat(1), x.clone(), 2, order).add(&MultivariatePolynomial::variable(x.clone(), order));
        let divisor = MultivariatePolynomial::variable(x.clone(), order).sub(&MultivariatePolynomial::constant(rat(1), order));
        let normal_form = reduce_completely(&p, std::slice::from_ref(&divisor));
        // p = (x-1)(x+2) + 2, so the remainder modulo (x-1) is the constant 2.
        assert!(normal_form.is_constant());
    }

    #[test]
    fn reduce_is_a_no_op_when_nothing_divides() {
        let x = var("groebner_test_noop_x");
        let y = var("groebner_test_noop_y");
        let order = MonomialOrder::Lex;
        let p = MultivariatePolynomial::<BigRational>::variable(y, order);
        let basis = vec![MultivariatePolynomial::variable(x, order)];
        let (reduced, changed) = reduce(&p, &basis);
        assert!(!changed);
        assert_eq!(reduced, p);
    }
}
