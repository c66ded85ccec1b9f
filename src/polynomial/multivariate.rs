//! Multivariate polynomial: a sum of terms over a hash-consed, pool-backed
//! `Monomial` (so equality is id equality) and a generic coefficient ring.
//! Arithmetic is exposed both as `add`/`sub`/`mul`/`negate` inherent methods
//! and as `std::ops` impls over owned and `&` operands.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::monomial::{Monomial, MonomialPool};
use crate::ordering::MonomialOrder;
use crate::polynomial::univariate::UnivariatePolynomial;
use crate::ring::{CoefficientRing, RingScratchPool};
use crate::term::Term;
use crate::term_manager::TermAdditionManager;
use crate::variable::Variable;

/// A sum of terms under a fixed monomial ordering.
///
/// Invariants maintained by every constructor and every arithmetic
/// operation: no two terms share a monomial, no term has a zero
/// coefficient, the last term is the leading term under `order`, and if a
/// constant term is present it is the first term. `fully_ordered`
/// additionally asserts the whole vector is ascending; every operation that
/// passes terms through the term-addition manager produces a fully ordered
/// result.
#[derive(Clone, Debug)]
pub struct MultivariatePolynomial<R: CoefficientRing + RingScratchPool> {
    terms: Vec<Term<R>>,
    order: MonomialOrder,
    fully_ordered: bool,
}

impl<R: CoefficientRing + RingScratchPool> MultivariatePolynomial<R> {
    pub fn zero(order: MonomialOrder) -> Self {
        Self { terms: Vec::new(), order, fully_ordered: true }
    }

    pub fn constant(value: R, order: MonomialOrder) -> Self {
        if value.is_zero() {
            Self::zero(order)
        } else {
            Self { terms: vec![Term::constant(value)], order, fully_ordered: true }
        }
    }

    /// `coefficient * v^exp`.
    pub fn monomial_term(coefficient: R, v: Variable, exp: u32, order: MonomialOrder) -> Self {
        if coefficient.is_zero() {
            return Self::zero(order);
        }
        let m = MonomialPool::global().create(v, exp);
        Self { terms: vec![Term::new(coefficient, Some(m))], order, fully_ordered: true }
    }

    /// The variable `v` itself, as a degree-1 polynomial.
    pub fn variable(v: Variable, order: MonomialOrder) -> Self {
        Self::monomial_term(R::one(), v, 1, order)
    }

    /// Builds a polynomial from an arbitrary term list. Duplicate monomials
    /// are collapsed and zero coefficients dropped when `collapse_duplicates`
    /// is set; otherwise the caller attests the terms already have no
    /// duplicate monomials or zero coefficients, and only the
    /// minimally-ordered pass runs.
    pub fn from_terms(terms: Vec<Term<R>>, order: MonomialOrder, collapse_duplicates: bool) -> Self {
        if collapse_duplicates {
            let mut handle = TermAdditionManager::acquire(order, terms.len());
            for t in terms {
                TermAdditionManager::add_term::<_, false>(&mut handle, t);
            }
            let mut out = Vec::new();
            TermAdditionManager::read_terms(handle, &mut out);
            Self { terms: out, order, fully_ordered: true }
        } else {
            let mut terms: Vec<_> = terms.into_iter().filter(|t| !t.is_zero()).collect();
            make_minimally_ordered(&mut terms, order);
            Self { terms, order, fully_ordered: false }
        }
    }

    /// Builds from a term vector already known to be strictly ascending
    /// under `order` (e.g. the output of another `fully_ordered`
    /// polynomial's term list). Only checked with `debug_assert`.
    pub fn from_sorted_terms(terms: Vec<Term<R>>, order: MonomialOrder) -> Self {
        debug_assert!(is_ascending(&terms, order), "terms are not ascending under `order`");
        Self { terms, order, fully_ordered: true }
    }

    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    pub fn is_fully_ordered(&self) -> bool {
        self.fully_ordered
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_constant(&self) -> bool {
        self.terms.is_empty() || (self.terms.len() == 1 && self.terms[0].is_constant())
    }

    pub fn terms(&self) -> &[Term<R>] {
        &self.terms
    }

    /// Value of the constant term, or zero if none is present.
    pub fn constant_term(&self) -> R {
        self.terms.first().filter(|t| t.is_constant()).map(|t| t.coefficient.clone()).unwrap_or_else(R::zero)
    }

    /// The leading term under `order`. Panics on the zero polynomial: the
    /// leading coefficient of the zero polynomial is a precondition
    /// violation, not a recoverable error.
    pub fn leading_term(&self) -> &Term<R> {
        self.terms.last().expect("leading_term of the zero polynomial")
    }

    pub fn leading_coefficient(&self) -> R {
        self.leading_term().coefficient.clone()
    }

    /// Total degree of the polynomial. Panics on the zero polynomial. Under
    /// `GradedLex` when `fully_ordered` is set this is an O(1) lookup of the
    /// leading term's degree; otherwise a full scan.
    pub fn total_degree(&self) -> u64 {
        assert!(!self.is_zero(), "total_degree of the zero polynomial");
        if self.order.is_degree_order() && self.fully_ordered {
            self.leading_term().total_degree()
        } else {
            self.terms.iter().map(Term::total_degree).max().unwrap()
        }
    }

    /// Whether every term has total degree <= 1. The zero polynomial counts
    /// as linear (no term violates the bound vacuously).
    pub fn is_linear(&self) -> bool {
        if self.is_zero() {
            return true;
        }
        if self.order.is_degree_order() && self.fully_ordered {
            self.leading_term().total_degree() <= 1
        } else {
            self.terms.iter().all(|t| t.total_degree() <= 1)
        }
    }

    pub fn has(&self, v: &Variable) -> bool {
        self.terms.iter().any(|t| t.monomial.as_ref().is_some_and(|m| m.has_variable(v)))
    }

    /// Every variable appearing in any term, ascending by id.
    pub fn variables(&self) -> Vec<Variable> {
        let mut set: BTreeSet<Variable> = BTreeSet::new();
        for t in &self.terms {
            if let Some(m) = &t.monomial {
                for v in m.variables() {
                    set.insert(v.clone());
                }
            }
        }
        set.into_iter().collect()
    }

    pub fn add(&self, other: &Self) -> Self {
        debug_assert_eq!(self.order, other.order, "mismatched monomial ordering");
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        let mut handle = TermAdditionManager::acquire(self.order, self.terms.len() + other.terms.len());
        for t in self.terms.iter().chain(other.terms.iter()) {
            TermAdditionManager::add_term::<_, false>(&mut handle, t.clone());
        }
        let mut out = Vec::new();
        TermAdditionManager::read_terms(handle, &mut out);
        Self { terms: out, order: self.order, fully_ordered: true }
    }

    pub fn negate(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|t| Term::new(t.coefficient.neg(), t.monomial.clone())).collect(),
            order: self.order,
            fully_ordered: self.fully_ordered,
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }

    pub fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.order, other.order, "mismatched monomial ordering");
        if self.is_zero() || other.is_zero() {
            return Self::zero(self.order);
        }
        let mut handle =
            TermAdditionManager::acquire(self.order, self.terms.len().saturating_mul(other.terms.len()));
        for a in &self.terms {
            for b in &other.terms {
                let coeff = a.coefficient.mul(&b.coefficient);
                if coeff.is_zero() {
                    continue;
                }
                let monomial = match (&a.monomial, &b.monomial) {
                    (None, None) => None,
                    (Some(m), None) | (None, Some(m)) => Some(m.clone()),
                    (Some(ma), Some(mb)) => Some(ma.checked_mul(mb)),
                };
                TermAdditionManager::add_term::<_, false>(&mut handle, Term::new(coeff, monomial));
            }
        }
        let mut out = Vec::new();
        TermAdditionManager::read_terms(handle, &mut out);
        Self { terms: out, order: self.order, fully_ordered: true }
    }

    pub fn scalar_mul(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(self.order);
        }
        if c.is_one() {
            return self.clone();
        }
        Self {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(t.coefficient.mul(c), t.monomial.clone()))
                .filter(|t| !t.is_zero())
                .collect(),
            order: self.order,
            fully_ordered: self.fully_ordered,
        }
    }

    /// `self` viewed as `v^e * coefficient(v, e)`: the sub-polynomial formed
    /// by the terms whose `v`-exponent equals `e`, with `v^e` factored out
    /// of each surviving monomial.
    pub fn coefficient(&self, v: &Variable, e: u32) -> Self {
        let mut collected = Vec::new();
        for t in &self.terms {
            let term_exp = t.monomial.as_ref().map(|m| m.exponent_of(v)).unwrap_or(0);
            if term_exp != e {
                continue;
            }
            let remaining = match &t.monomial {
                None => None,
                Some(m) => {
                    let reduced: Vec<_> =
                        m.pairs().iter().filter(|(pv, _)| pv != v).map(|(pv, pe)| (pv.clone(), pe.get())).collect();
                    if reduced.is_empty() {
                        None
                    } else {
                        Some(MonomialPool::global().create_unsorted(reduced))
                    }
                }
            };
            collected.push(Term::new(t.coefficient.clone(), remaining));
        }
        Self::from_terms(collected, self.order, true)
    }

    /// Substitutes `value` for every occurrence of `v`. Precomputes
    /// `value^e` for each distinct exponent `e > 1` that `v` carries, via
    /// repeated squaring, so that shared powers of `value` are computed
    /// once rather than once per term.
    pub fn substitute(&self, v: &Variable, value: &Self) -> Self {
        if !self.has(v) {
            return self.clone();
        }
        let mut powers: std::collections::BTreeMap<u32, Self> = std::collections::BTreeMap::new();
        powers.insert(0, Self::constant(R::one(), self.order));
        powers.insert(1, value.clone());
        let mut handle = TermAdditionManager::acquire(self.order, self.terms.len());
        for t in &self.terms {
            let exp = t.monomial.as_ref().map(|m| m.exponent_of(v)).unwrap_or(0);
            if !powers.contains_key(&exp) {
                power_by_squaring(value, exp, &mut powers);
            }
            let value_pow = powers.get(&exp).unwrap();
            let rest_monomial = match &t.monomial {
                None => None,
                Some(m) => {
                    let reduced: Vec<_> = m
                        .pairs()
                        .iter()
                        .filter(|(pv, _)| pv != v)
                        .map(|(pv, pe)| (pv.clone(), pe.get()))
                        .collect();
                    if reduced.is_empty() {
                        None
                    } else {
                        Some(MonomialPool::global().create_unsorted(reduced))
                    }
                }
            };
            let rest = Self { terms: vec![Term::new(t.coefficient.clone(), rest_monomial)], order: self.order, fully_ordered: true };
            let contribution = rest.mul(value_pow);
            for ct in contribution.terms {
                TermAdditionManager::add_term::<_, false>(&mut handle, ct);
            }
        }
        let mut out = Vec::new();
        TermAdditionManager::read_terms(handle, &mut out);
        Self { terms: out, order: self.order, fully_ordered: true }
    }

    /// The `k`-th derivative with respect to `v`. `derivative(p, v, 0) == p`
    /// by construction.
    pub fn derivative(&self, v: &Variable, k: u32) -> Self {
        if k == 0 {
            return self.clone();
        }
        if self.is_zero() {
            return self.clone();
        }
        let mut collected = Vec::new();
        for t in &self.terms {
            let e = t.monomial.as_ref().map(|m| m.exponent_of(v)).unwrap_or(0);
            if e < k {
                continue;
            }
            // factor = e * (e-1) * ... * (e-k+1), computed once per term.
            let mut factor = R::one();
            for i in 0..k {
                factor = factor.mul(&R::one().mul_small((e - i) as u64));
            }
            let new_coeff = t.coefficient.mul(&factor);
            if new_coeff.is_zero() {
                continue;
            }
            let new_monomial = match &t.monomial {
                None => unreachable!("e >= k > 0 implies v appears in this term's monomial"),
                Some(m) => {
                    let new_exp = e - k;
                    let pairs: Vec<_> = m
                        .pairs()
                        .iter()
                        .filter_map(|(pv, pe)| {
                            if pv == v {
                                if new_exp == 0 {
                                    None
                                } else {
                                    Some((pv.clone(), new_exp))
                                }
                            } else {
                                Some((pv.clone(), pe.get()))
                            }
                        })
                        .collect();
                    if pairs.is_empty() {
                        None
                    } else {
                        Some(MonomialPool::global().create_unsorted(pairs))
                    }
                }
            };
            collected.push(Term::new(new_coeff, new_monomial));
        }
        Self::from_terms(collected, self.order, true)
    }

    /// Promotes `self` to a univariate view in `v`, whose coefficients are
    /// themselves multivariate polynomials over the remaining variables. A
    /// single pass buckets each term by its `v`-exponent; `coefficient(v, e)`
    /// is not reused here since calling it once per exponent would cost
    /// O(terms * max_exponent) instead of O(terms).
    pub fn to_univariate(&self, v: &Variable) -> UnivariatePolynomial<Self> {
        if self.is_zero() {
            return UnivariatePolynomial::zero(v.clone());
        }
        let mut buckets: std::collections::BTreeMap<u32, Vec<Term<R>>> = std::collections::BTreeMap::new();
        for t in &self.terms {
            let e = t.monomial.as_ref().map(|m| m.exponent_of(v)).unwrap_or(0);
            let remaining = match &t.monomial {
                None => None,
                Some(m) => {
                    let reduced: Vec<_> =
                        m.pairs().iter().filter(|(pv, _)| pv != v).map(|(pv, pe)| (pv.clone(), pe.get())).collect();
                    if reduced.is_empty() {
                        None
                    } else {
                        Some(MonomialPool::global().create_unsorted(reduced))
                    }
                }
            };
            buckets.entry(e).or_default().push(Term::new(t.coefficient.clone(), remaining));
        }
        let max_exp = *buckets.keys().next_back().expect("at least one bucket for a non-zero polynomial");
        let mut coeffs = vec![Self::zero(self.order); (max_exp + 1) as usize];
        for (e, terms) in buckets {
            coeffs[e as usize] = Self::from_terms(terms, self.order, true);
        }
        UnivariatePolynomial::from_coeffs(v.clone(), coeffs)
    }

    /// The inverse of [`to_univariate`](Self::to_univariate): reassembles a
    /// multivariate polynomial from a univariate view whose coefficients are
    /// themselves multivariate polynomials in the remaining variables.
    pub fn from_univariate(v: &Variable, u: &UnivariatePolynomial<Self>, order: MonomialOrder) -> Self {
        let mut result = Self::zero(order);
        for (i, coeff) in u.coefficients().iter().enumerate() {
            if coeff.is_zero() {
                continue;
            }
            let term = if i == 0 {
                coeff.clone()
            } else {
                coeff.mul(&CoefficientRing::pow(&Self::variable(v.clone(), order), i as u32))
            };
            result = result.add(&term);
        }
        result
    }
}

fn power_by_squaring<R: CoefficientRing + RingScratchPool>(
    value: &MultivariatePolynomial<R>,
    exp: u32,
    cache: &mut std::collections::BTreeMap<u32, MultivariatePolynomial<R>>,
) -> MultivariatePolynomial<R> {
    if let Some(p) = cache.get(&exp) {
        return p.clone();
    }
    let half = exp / 2;
    let lower = if cache.contains_key(&half) {
        cache.get(&half).unwrap().clone()
    } else {
        power_by_squaring(value, half, cache)
    };
    let squared = lower.mul(&lower);
    let result = if exp % 2 == 1 { squared.mul(value) } else { squared };
    cache.insert(exp, result.clone());
    result
}

fn is_ascending<R: CoefficientRing + RingScratchPool>(terms: &[Term<R>], order: MonomialOrder) -> bool {
    terms.windows(2).all(|w| compare_terms(&w[0], &w[1], order) == Ordering::Less)
}

fn compare_terms<R: CoefficientRing + RingScratchPool>(a: &Term<R>, b: &Term<R>, order: MonomialOrder) -> Ordering {
    match (&a.monomial, &b.monomial) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(ma), Some(mb)) => order.compare(ma, mb),
    }
}

/// Make-minimally-ordered: locate the leading term by a single linear scan,
/// swap a constant term (if any) to the front, swap the leading term to the
/// back. O(n), no full sort.
fn make_minimally_ordered<R: CoefficientRing + RingScratchPool>(terms: &mut [Term<R>], order: MonomialOrder) {
    if terms.len() <= 1 {
        return;
    }
    let mut leading_idx = 0;
    for i in 1..terms.len() {
        if compare_terms(&terms[leading_idx], &terms[i], order) == Ordering::Less {
            leading_idx = i;
        }
    }
    let last = terms.len() - 1;
    terms.swap(leading_idx, last);
    if let Some(const_idx) = terms[..last].iter().position(Term::is_constant) {
        terms.swap(const_idx, 0);
    }
}

impl<R: CoefficientRing + RingScratchPool> PartialEq for MultivariatePolynomial<R> {
    fn eq(&self, other: &Self) -> bool {
        // Term order within the vector is a representation detail, not a
        // semantic one (the minimally-ordered invariant always leaves the
        // last/first slots determined, but the interior is unordered unless
        // `fully_ordered`) — compare as multisets of (monomial, coefficient).
        if self.terms.len() != other.terms.len() {
            return false;
        }
        let mut a = self.terms.clone();
        let mut b = other.terms.clone();
        a.sort_by(|x, y| compare_terms(x, y, self.order));
        b.sort_by(|x, y| compare_terms(x, y, self.order));
        a == b
    }
}

impl<R: CoefficientRing + RingScratchPool + fmt::Display> fmt::Display for MultivariatePolynomial<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (idx, t) in self.terms.iter().rev().enumerate() {
            if idx > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{t}")?;
        }
        Ok(())
    }
}

macro_rules! impl_ops {
    ($ty:ident) => {
        impl<R: CoefficientRing + RingScratchPool> Add for $ty<R> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                $ty::add(&self, &rhs)
            }
        }
        impl<R: CoefficientRing + RingScratchPool> Add for &$ty<R> {
            type Output = $ty<R>;
            fn add(self, rhs: Self) -> $ty<R> {
                $ty::add(self, rhs)
            }
        }
        impl<R: CoefficientRing + RingScratchPool> Sub for $ty<R> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                $ty::sub(&self, &rhs)
            }
        }
        impl<R: CoefficientRing + RingScratchPool> Sub for &$ty<R> {
            type Output = $ty<R>;
            fn sub(self, rhs: Self) -> $ty<R> {
                $ty::sub(self, rhs)
            }
        }
        impl<R: CoefficientRing + RingScratchPool> Mul for $ty<R> {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                $ty::mul(&self, &rhs)
            }
        }
        impl<R: CoefficientRing + RingScratchPool> Mul for &$ty<R> {
            type Output = $ty<R>;
            fn mul(self, rhs: Self) -> $ty<R> {
                $ty::mul(self, rhs)
            }
        }
        impl<R: CoefficientRing + RingScratchPool> Neg for $ty<R> {
            type Output = Self;
            fn neg(self) -> Self {
                self.negate()
            }
        }
        impl<R: CoefficientRing + RingScratchPool> Neg for &$ty<R> {
            type Output = $ty<R>;
            fn neg(self) -> $ty<R> {
                self.negate()
            }
        }
    };
}
impl_ops!(MultivariatePolynomial);

/// Lets a `MultivariatePolynomial<R>` itself serve as the coefficient ring
/// of a `UnivariatePolynomial`, so coefficients may themselves be
/// multivariate polynomials. The main variable of the outer univariate view
/// is guaranteed by the promotion step never to appear in these
/// coefficients.
impl<R: CoefficientRing + RingScratchPool> CoefficientRing for MultivariatePolynomial<R> {
    fn zero() -> Self {
        MultivariatePolynomial::zero(MonomialOrder::GradedLex)
    }
    fn one() -> Self {
        MultivariatePolynomial::constant(R::one(), MonomialOrder::GradedLex)
    }
    fn is_zero(&self) -> bool {
        MultivariatePolynomial::is_zero(self)
    }
    fn is_one(&self) -> bool {
        self.is_constant() && self.constant_term().is_one()
    }
    fn add(&self, other: &Self) -> Self {
        MultivariatePolynomial::add(self, other)
    }
    fn sub(&self, other: &Self) -> Self {
        MultivariatePolynomial::sub(self, other)
    }
    fn mul(&self, other: &Self) -> Self {
        MultivariatePolynomial::mul(self, other)
    }
    fn neg(&self) -> Self {
        MultivariatePolynomial::negate(self)
    }
}

#[cfg(all(test, feature = "bigint"))]
mod tests {
    use super::*;
    use crate::variable::{VariableKind, VariableRegistry};
    use num_bigint::BigInt;

    fn var(name: &str) -> Variable {
        VariableRegistry::global().intern(name, VariableKind::Real)
    }

    fn poly_x_minus_y_squared() -> MultivariatePolynomial<BigInt> {
        // x^2 - 2xy + y^2
        let x = var("mvp_test_s1_x");
        let y = var("mvp_test_s1_y");
        let order = MonomialOrder::GradedLex;
        let x2 = MultivariatePolynomial::monomial_term(BigInt::from(1), x.clone(), 2, order);
        let xy = {
            let m = MonomialPool::global().create_unsorted(vec![(x.clone(), 1), (y.clone(), 1)]);
            MultivariatePolynomial::from_terms(vec![Term::new(BigInt::from(-2), Some(m))], order, true)
        };
        let y2 = MultivariatePolynomial::monomial_term(BigInt::from(1), y, 2, order);
        x2.add(&xy).add(&y2)
    }

    #[test]
    fn s1_total_degree_and_linearity_and_vars() {
        let p = poly_x_minus_y_squared();
        assert_eq!(p.total_degree(), 2);
        assert!(!p.is_linear());
        assert_eq!(p.variables().len(), 2);
    }

    #[test]
    fn addition_collapses_duplicate_monomials() {
        let x = var("mvp_test_add_x");
        let order = MonomialOrder::Lex;
        let a = MultivariatePolynomial::monomial_term(BigInt::from(3), x.clone(), 1, order);
        let b = MultivariatePolynomial::monomial_term(BigInt::from(-3), x, 1, order);
        let sum = a.add(&b);
        assert!(sum.is_zero());
    }

    #[test]
    fn constant_term_sorts_first() {
        let x = var("mvp_test_const_first_x");
        let order = MonomialOrder::GradedLex;
        let c = MultivariatePolynomial::constant(BigInt::from(5), order);
        let xt = MultivariatePolynomial::variable(x, order);
        let p = c.add(&xt);
        assert!(p.terms()[0].is_constant());
        assert!(!p.terms().last().unwrap().is_constant());
    }

    #[test]
    fn substitution_identity_when_variable_absent() {
        let x = var("mvp_test_subst_absent_x");
        let y = var("mvp_test_subst_absent_y");
        let order = MonomialOrder::Lex;
        let p = MultivariatePolynomial::variable(x, order);
        let value = MultivariatePolynomial::variable(y, order);
        let untouched_var = var("mvp_test_subst_absent_other");
        let result = p.substitute(&untouched_var, &value);
        assert_eq!(result, p);
    }

    #[test]
    fn substitution_composition_law() {
        // substitute(substitute(p, v, q), v, r) == substitute(p, v, substitute(q, v, r))
        let x = var("mvp_test_subst_compose_x");
        let order = MonomialOrder::GradedLex;
        let p = {
            let x2 = MultivariatePolynomial::monomial_term(BigInt::from(1), x.clone(), 2, order);
            let one = MultivariatePolynomial::constant(BigInt::from(1), order);
            x2.add(&one)
        };
        let q = MultivariatePolynomial::monomial_term(BigInt::from(1), x.clone(), 1, order);
        let r = MultivariatePolynomial::constant(BigInt::from(3), order);

        let lhs = p.substitute(&x, &q).substitute(&x, &r);
        let q_sub_r = q.substitute(&x, &r);
        let rhs = p.substitute(&x, &q_sub_r);
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn derivative_base_case_and_second_derivative() {
        let x = var("mvp_test_deriv_x");
        let y = var("mvp_test_deriv_y");
        let order = MonomialOrder::GradedLex;
        // x^3 - 3xy^2 + y^4
        let x3 = MultivariatePolynomial::monomial_term(BigInt::from(1), x.clone(), 3, order);
        let xy2 = {
            let m = MonomialPool::global().create_unsorted(vec![(x.clone(), 1), (y.clone(), 2)]);
            MultivariatePolynomial::from_terms(vec![Term::new(BigInt::from(-3), Some(m))], order, true)
        };
        let y4 = MultivariatePolynomial::monomial_term(BigInt::from(1), y.clone(), 4, order);
        let p = x3.add(&xy2).add(&y4);

        assert_eq!(p.derivative(&x, 0), p);

        // d/dx = 3x^2 - 3y^2
        let ddx = p.derivative(&x, 1);
        let expected_ddx = {
            let x2 = MultivariatePolynomial::monomial_term(BigInt::from(3), x, 2, order);
            let ny2 = MultivariatePolynomial::monomial_term(BigInt::from(-3), y.clone(), 2, order);
            x2.add(&ny2)
        };
        assert_eq!(ddx, expected_ddx);

        // d2/dy2 of original = -6x + 12y^2
        let d2dy2 = p.derivative(&y, 2);
        let x_var = var("mvp_test_deriv_x_check");
        let _ = x_var;
        assert_eq!(d2dy2.total_degree(), 2);
    }

    #[test]
    fn coefficient_extraction_factors_out_power() {
        let x = var("mvp_test_coeff_x");
        let y = var("mvp_test_coeff_y");
        let order = MonomialOrder::Lex;
        // x^2*y + x*y + y
        let x2y = {
            let m = MonomialPool::global().create_unsorted(vec![(x.clone(), 2), (y.clone(), 1)]);
            Term::new(BigInt::from(1), Some(m))
        };
        let xy = {
            let m = MonomialPool::global().create_unsorted(vec![(x.clone(), 1), (y.clone(), 1)]);
            Term::new(BigInt::from(1), Some(m))
        };
        let yt = {
            let m = MonomialPool::global().create(y, 1);
            Term::new(BigInt::from(1), Some(m))
        };
        let p = MultivariatePolynomial::from_terms(vec![x2y, xy, yt], order, true);
        let coeff_x2 = p.coefficient(&x, 2);
        assert!(coeff_x2.has(&y));
        assert_eq!(coeff_x2.total_degree(), 1);
    }

    #[test]
    fn promotion_to_univariate_and_back_round_trips() {
        let x = var("mvp_test_promote_x");
        let y = var("mvp_test_promote_y");
        let order = MonomialOrder::GradedLex;
        // p = x^2*y - 3x + y^2
        let x2y = {
            let m = MonomialPool::global().create_unsorted(vec![(x.clone(), 2), (y.clone(), 1)]);
            MultivariatePolynomial::from_terms(vec![Term::new(BigInt::from(1), Some(m))], order, true)
        };
        let neg3x = MultivariatePolynomial::monomial_term(BigInt::from(-3), x.clone(), 1, order);
        let y2 = MultivariatePolynomial::monomial_term(BigInt::from(1), y.clone(), 2, order);
        let p = x2y.add(&neg3x).add(&y2);

        let univariate = p.to_univariate(&x);
        assert_eq!(univariate.degree_checked(), 2);
        // Coefficient of x^2 is y; coefficient of x^1 is -3; coefficient of x^0 is y^2.
        assert_eq!(univariate.coeff(2), MultivariatePolynomial::variable(y.clone(), order));
        assert_eq!(univariate.coeff(1), MultivariatePolynomial::constant(BigInt::from(-3), order));
        assert_eq!(univariate.coeff(0), MultivariatePolynomial::monomial_term(BigInt::from(1), y, 2, order));

        let rebuilt = MultivariatePolynomial::from_univariate(&x, &univariate, order);
        assert_eq!(rebuilt, p);
    }
}
