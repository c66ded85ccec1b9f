//! Term-addition manager: a process-wide free list of reusable scratch
//! buckets, one per coefficient ring type (`RingScratchPool`, `ring.rs`).
//! Multiplying and summing many terms that collide on the same monomial id
//! is the hot path for dense polynomial products; this manager collapses
//! that into O(1) per term instead of the O(n^2) naive scan a plain
//! `Vec<Term<R>>` merge would cost.

use crate::monomial::{Monomial, MonomialPool};
use crate::ordering::MonomialOrder;
use crate::ring::{CoefficientRing, RingScratchPool};
use crate::term::Term;

/// A scratch slot acquired from the process-wide free list. Exclusive to the
/// caller that acquired it until `TermAdditionManager::release` is called.
pub struct ScratchHandle<R: RingScratchPool> {
    /// Indexed by monomial pool id; `None` means "not yet touched".
    buckets: Vec<Option<R>>,
    /// Monomials touched since acquisition, so `max_term`/`read_terms` never
    /// need to scan the (potentially huge) full bucket vector.
    dirty: Vec<Monomial>,
    constant: Option<R>,
    order: MonomialOrder,
}

impl<R: RingScratchPool> ScratchHandle<R> {
    fn ensure_capacity(&mut self, id: usize) {
        if id >= self.buckets.len() {
            self.buckets.resize(id + 1, None);
        }
    }
}

/// Process-wide term-addition manager. Holds no state of its own beyond the
/// per-ring free lists declared by `RingScratchPool`; `acquire`/`release` are
/// the only synchronized points.
pub struct TermAdditionManager;

impl TermAdditionManager {
    /// Reserves a scratch slot sized by the monomial pool's largest live id,
    /// with a private dirty-tracking vector pre-sized to `expected_size`.
    pub fn acquire<R: RingScratchPool>(order: MonomialOrder, expected_size: usize) -> ScratchHandle<R> {
        let largest = MonomialPool::global().largest_id() as usize;
        let mut buckets = R::scratch_free_list()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .pop()
            .unwrap_or_default();
        if buckets.len() <= largest {
            buckets.resize(largest + 1, None);
        }
        ScratchHandle {
            buckets,
            dirty: Vec::with_capacity(expected_size),
            constant: None,
            order,
        }
    }

    /// Accumulates `term` into the bucket keyed by its monomial id (or the
    /// dedicated constant slot when the term is constant), replacing or
    /// adding to any prior accumulation there.
    ///
    /// `ASSUME_DISTINCT` lets a caller that already knows its input terms
    /// never repeat a monomial (e.g. a freshly `make_minimally_ordered`
    /// vector being re-summed) skip the "does this bucket already hold a
    /// value" branch.
    pub fn add_term<R: RingScratchPool, const ASSUME_DISTINCT: bool>(
        handle: &mut ScratchHandle<R>,
        term: Term<R>,
    ) {
        if term.coefficient.is_zero() {
            return;
        }
        match term.monomial {
            None => {
                let updated = match handle.constant.take() {
                    Some(existing) => existing.add(&term.coefficient),
                    None => term.coefficient,
                };
                handle.constant = Some(updated);
            }
            Some(m) => {
                let id = m.id() as usize;
                handle.ensure_capacity(id);
                match &mut handle.buckets[id] {
                    Some(existing) if !ASSUME_DISTINCT => {
                        *existing = existing.add(&term.coefficient);
                    }
                    slot @ None => {
                        *slot = Some(term.coefficient);
                        handle.dirty.push(m);
                    }
                    // ASSUME_DISTINCT && slot already occupied: caller's
                    // contract says this cannot happen; last write wins.
                    slot => *slot = Some(term.coefficient),
                }
            }
        }
    }

    /// Extracts and removes the bucket currently holding the leading term
    /// under the handle's active ordering.
    pub fn max_term<R: RingScratchPool>(handle: &mut ScratchHandle<R>) -> Option<Term<R>> {
        let mut best_idx: Option<usize> = None;
        for (idx, m) in handle.dirty.iter().enumerate() {
            let id = m.id() as usize;
            if handle.buckets[id].as_ref().is_some_and(|c| !c.is_zero()) {
                let better = match best_idx {
                    None => true,
                    Some(b) => {
                        handle.order.compare(m, &handle.dirty[b]) == std::cmp::Ordering::Greater
                    }
                };
                if better {
                    best_idx = Some(idx);
                }
            }
        }
        match best_idx {
            Some(idx) => {
                let m = handle.dirty.swap_remove(idx);
                let c = handle.buckets[m.id() as usize].take()?;
                Some(Term::new(c, Some(m)))
            }
            None => {
                if let Some(c) = handle.constant.take() {
                    if !c.is_zero() {
                        return Some(Term::constant(c));
                    }
                }
                None
            }
        }
    }

    /// Drains every accumulated non-zero term into `out`, sorted ascending
    /// under the handle's ordering (the constant term, if present, sorts
    /// least under both orders and lands first; the overall leading term
    /// lands last), then releases the slot back to the free list.
    pub fn read_terms<R: RingScratchPool>(mut handle: ScratchHandle<R>, out: &mut Vec<Term<R>>) {
        out.clear();
        if let Some(c) = handle.constant.take() {
            if !c.is_zero() {
                out.push(Term::constant(c));
            }
        }
        let mut dirty = std::mem::take(&mut handle.dirty);
        dirty.sort_by(|a, b| handle.order.compare(a, b));
        for m in dirty {
            if let Some(c) = handle.buckets[m.id() as usize].take() {
                if !c.is_zero() {
                    out.push(Term::new(c, Some(m)));
                }
            }
        }
        Self::release(handle);
    }

    fn release<R: RingScratchPool>(mut handle: ScratchHandle<R>) {
        // Buckets touched by `max_term` are already cleared; any left over
        // (shouldn't happen after `read_terms`, but `max_term`-only callers
        // may stop early) are cleared here so the slot is clean on reuse.
        for m in handle.dirty.drain(..) {
            handle.buckets[m.id() as usize] = None;
        }
        handle.constant = None;
        R::scratch_free_list()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(handle.buckets);
    }
}

#[cfg(all(test, feature = "bigint"))]
mod tests {
    use super::*;
    use crate::variable::{VariableKind, VariableRegistry};
    use num_bigint::BigInt;

    fn var(name: &str) -> crate::variable::Variable {
        VariableRegistry::global().intern(name, VariableKind::Real)
    }

    #[test]
    fn colliding_monomials_accumulate() {
        let x = var("term_manager_test_x");
        let mx = MonomialPool::global().create(x, 1);
        let mut handle: ScratchHandle<BigInt> = TermAdditionManager::acquire(MonomialOrder::Lex, 4);
        TermAdditionManager::add_term::<_, false>(
            &mut handle,
            Term::new(BigInt::from(2), Some(mx.clone())),
        );
        TermAdditionManager::add_term::<_, false>(
            &mut handle,
            Term::new(BigInt::from(3), Some(mx.clone())),
        );
        let mut out = Vec::new();
        TermAdditionManager::read_terms(handle, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].coefficient, BigInt::from(5));
    }

    #[test]
    fn zero_sum_is_dropped() {
        let x = var("term_manager_test_cancel_x");
        let mx = MonomialPool::global().create(x, 1);
        let mut handle: ScratchHandle<BigInt> = TermAdditionManager::acquire(MonomialOrder::Lex, 4);
        TermAdditionManager::add_term::<_, false>(
            &mut handle,
            Term::new(BigInt::from(5), Some(mx.clone())),
        );
        TermAdditionManager::add_term::<_, false>(
            &mut handle,
            Term::new(BigInt::from(-5), Some(mx)),
        );
        let mut out = Vec::new();
        TermAdditionManager::read_terms(handle, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn constant_sorts_first_and_leading_sorts_last() {
        let x = var("term_manager_test_order_x");
        let y = var("term_manager_test_order_y");
        let mx = MonomialPool::global().create(x, 1);
        let mxy = MonomialPool::global().create_unsorted(vec![(mx.pairs()[0].0.clone(), 1), (y, 1)]);
        let mut handle: ScratchHandle<BigInt> = TermAdditionManager::acquire(MonomialOrder::GradedLex, 4);
        TermAdditionManager::add_term::<_, false>(&mut handle, Term::constant(BigInt::from(7)));
        TermAdditionManager::add_term::<_, false>(
            &mut handle,
            Term::new(BigInt::from(1), Some(mx)),
        );
        TermAdditionManager::add_term::<_, false>(
            &mut handle,
            Term::new(BigInt::from(1), Some(mxy)),
        );
        let mut out = Vec::new();
        TermAdditionManager::read_terms(handle, &mut out);
        assert!(out[0].is_constant());
        assert!(out.last().unwrap().total_degree() == 2);
    }

    #[test]
    fn max_term_extracts_leading_and_removes_it() {
        let x = var("term_manager_test_max_x");
        let mx2 = MonomialPool::global().create(x.clone(), 2);
        let mx1 = MonomialPool::global().create(x, 1);
        let mut handle: ScratchHandle<BigInt> = TermAdditionManager::acquire(MonomialOrder::Lex, 4);
        TermAdditionManager::add_term::<_, false>(
            &mut handle,
            Term::new(BigInt::from(1), Some(mx1)),
        );
        TermAdditionManager::add_term::<_, false>(
            &mut handle,
            Term::new(BigInt::from(1), Some(mx2)),
        );
        let leading = TermAdditionManager::max_term(&mut handle).unwrap();
        assert_eq!(leading.total_degree(), 2);
        let mut out = Vec::new();
        TermAdditionManager::read_terms(handle, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].total_degree(), 1);
    }
}
