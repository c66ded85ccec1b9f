//! Property tests for monomial total orders and the invariants they impose
//! on `MultivariatePolynomial`'s term storage.

use algebra_kernel::monomial::MonomialPool;
use algebra_kernel::ordering::MonomialOrder;
use algebra_kernel::polynomial::MultivariatePolynomial;
use algebra_kernel::variable::{VariableKind, VariableRegistry};
use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;
use std::cmp::Ordering;

fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn small_exponents() -> impl Strategy<Value = (u32, u32)> {
    (0u32..6, 0u32..6)
}

proptest! {
    /// Both orders are antisymmetric: swapping operands negates the comparison.
    #[test]
    fn order_is_antisymmetric((ex, ey) in small_exponents(), (fx, fy) in small_exponents()) {
        let x = VariableRegistry::global().intern("monord_prop_antisym_x", VariableKind::Real);
        let y = VariableRegistry::global().intern("monord_prop_antisym_y", VariableKind::Real);
        let a = MonomialPool::global().create_unsorted(vec![(x.clone(), ex), (y.clone(), ey)]);
        let b = MonomialPool::global().create_unsorted(vec![(x, fx), (y, fy)]);

        for order in [MonomialOrder::Lex, MonomialOrder::GradedLex] {
            prop_assert_eq!(order.compare(&a, &b), order.compare(&b, &a).reverse());
        }
    }

    /// `GradedLex` never ranks a lower-total-degree monomial above a
    /// strictly higher-total-degree one.
    #[test]
    fn graded_lex_respects_total_degree((ex, ey) in small_exponents(), (fx, fy) in small_exponents()) {
        let x = VariableRegistry::global().intern("monord_prop_grlex_x", VariableKind::Real);
        let y = VariableRegistry::global().intern("monord_prop_grlex_y", VariableKind::Real);
        let a = MonomialPool::global().create_unsorted(vec![(x.clone(), ex), (y.clone(), ey)]);
        let b = MonomialPool::global().create_unsorted(vec![(x, fx), (y, fy)]);

        let cmp = MonomialOrder::GradedLex.compare(&a, &b);
        match a.total_degree().cmp(&b.total_degree()) {
            Ordering::Less => prop_assert_eq!(cmp, Ordering::Less),
            Ordering::Greater => prop_assert_eq!(cmp, Ordering::Greater),
            Ordering::Equal => {}
        }
    }

    /// Building a polynomial from arbitrary unsorted terms always leaves it
    /// with distinct monomials, stored in ascending order, and the last
    /// stored term is the leading term under the polynomial's own order.
    #[test]
    fn from_terms_collapses_duplicates_and_sorts(coeffs in prop::collection::vec(-5i64..6, 0..8)) {
        let x = VariableRegistry::global().intern("monord_prop_fromterms_x", VariableKind::Real);
        let order = MonomialOrder::GradedLex;
        let mut p = MultivariatePolynomial::<BigRational>::zero(order);
        for (exp, c) in coeffs.iter().enumerate() {
            p = p.add(&MultivariatePolynomial::monomial_term(rat(*c), x.clone(), exp as u32, order));
        }

        let terms = p.terms();
        for w in terms.windows(2) {
            let cmp = match (&w[0].monomial, &w[1].monomial) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(a), Some(b)) => order.compare(a, b),
            };
            prop_assert_ne!(cmp, Ordering::Greater);
        }
        // Every stored coefficient is non-zero (duplicates collapsed to zero are dropped).
        for t in terms {
            prop_assert!(!t.coefficient.is_zero());
        }
        if let Some(last) = terms.last() {
            prop_assert_eq!(last, p.leading_term());
        }
    }
}
