//! Monomial total orders: lexicographic and graded-lexicographic.
//!
//! Monomials are compared by variable id ascending (the order variables were
//! registered in), with a missing variable treated as exponent zero.

use std::cmp::Ordering;

use crate::monomial::Monomial;

/// A total order over monomials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MonomialOrder {
    /// Pure lexicographic: compare exponents variable-by-variable, lowest
    /// variable id first, first mismatch decides.
    Lex,
    /// Graded lexicographic: total degree first, ties broken by `Lex`.
    GradedLex,
}

impl MonomialOrder {
    /// Whether this ordering is a degree order: only `GradedLex` enables the
    /// fast path that inspects just the leading term's total degree.
    pub fn is_degree_order(&self) -> bool {
        matches!(self, MonomialOrder::GradedLex)
    }

    pub fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        match self {
            MonomialOrder::Lex => lex_compare(a, b),
            MonomialOrder::GradedLex => match a.total_degree().cmp(&b.total_degree()) {
                Ordering::Equal => lex_compare(a, b),
                other => other,
            },
        }
    }
}

fn lex_compare(a: &Monomial, b: &Monomial) -> Ordering {
    let (pa, pb) = (a.pairs(), b.pairs());
    let (mut i, mut j) = (0, 0);
    while i < pa.len() || j < pb.len() {
        let next_id = match (pa.get(i), pb.get(j)) {
            (Some((va, _)), Some((vb, _))) => va.id().min(vb.id()),
            (Some((va, _)), None) => va.id(),
            (None, Some((vb, _))) => vb.id(),
            (None, None) => unreachable!(),
        };
        let ae = pa.get(i).filter(|(v, _)| v.id() == next_id).map(|(_, e)| e.get()).unwrap_or(0);
        let be = pb.get(j).filter(|(v, _)| v.id() == next_id).map(|(_, e)| e.get()).unwrap_or(0);
        match ae.cmp(&be) {
            Ordering::Equal => {}
            other => return other,
        }
        if pa.get(i).map(|(v, _)| v.id()) == Some(next_id) {
            i += 1;
        }
        if pb.get(j).map(|(v, _)| v.id()) == Some(next_id) {
            j += 1;
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monomial::MonomialPool;
    use crate::variable::{VariableKind, VariableRegistry};

    #[test]
    fn lex_orders_by_first_variable_first() {
        let x = VariableRegistry::global().intern("ordering_test_lex_x", VariableKind::Real);
        let y = VariableRegistry::global().intern("ordering_test_lex_y", VariableKind::Real);
        let x2 = MonomialPool::global().create(x.clone(), 2);
        let xy = MonomialPool::global().create_unsorted(vec![(x, 1), (y, 5)]);
        assert_eq!(MonomialOrder::Lex.compare(&x2, &xy), Ordering::Greater);
    }

    #[test]
    fn graded_lex_prefers_total_degree() {
        let x = VariableRegistry::global().intern("ordering_test_grlex_x", VariableKind::Real);
        let y = VariableRegistry::global().intern("ordering_test_grlex_y", VariableKind::Real);
        let x2 = MonomialPool::global().create(x.clone(), 2);
        let xy = MonomialPool::global().create_unsorted(vec![(x, 1), (y, 5)]);
        assert_eq!(MonomialOrder::GradedLex.compare(&x2, &xy), Ordering::Less);
        assert!(MonomialOrder::GradedLex.is_degree_order());
        assert!(!MonomialOrder::Lex.is_degree_order());
    }

    #[test]
    fn equal_monomials_compare_equal() {
        let x = VariableRegistry::global().intern("ordering_test_eq_x", VariableKind::Real);
        let a = MonomialPool::global().create(x.clone(), 3);
        let b = MonomialPool::global().create(x, 3);
        assert_eq!(MonomialOrder::Lex.compare(&a, &b), Ordering::Equal);
        assert_eq!(MonomialOrder::GradedLex.compare(&a, &b), Ordering::Equal);
    }
}
