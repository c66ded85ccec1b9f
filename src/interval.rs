//! Real interval arithmetic: a bound-tagged, exact-coefficient interval type
//! used to enclose real quantities during root isolation and
//! contractor-based propagation.
//!
//! Endpoint arithmetic is generalized to `±infinity` via an internal
//! `Corner` helper rather than `f64::INFINITY`, since this kernel's
//! intervals are built over exact rings (`BigRational`), not floats.

use std::collections::HashMap;
use std::fmt;

use crate::polynomial::MultivariatePolynomial;
use crate::ring::{CoefficientRing, FieldRing, OrderedRing, RingScratchPool};
use crate::variable::Variable;

/// How an endpoint binds: the set includes points strictly less/greater
/// (`Strict` excludes the endpoint itself, i.e. an open bound), `Weak`
/// includes it (a closed bound), or `Infty` means the endpoint is
/// unbounded in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bound {
    Strict,
    Weak,
    Infty,
}

impl Bound {
    /// Bound-type lattice join used when propagating through arithmetic:
    /// `Infty` absorbs, `Strict` dominates `Weak` among the finite bound
    /// types.
    fn propagate(a: Bound, b: Bound) -> Bound {
        if a == Bound::Infty || b == Bound::Infty {
            Bound::Infty
        } else if a == Bound::Strict || b == Bound::Strict {
            Bound::Strict
        } else {
            Bound::Weak
        }
    }

    /// The opposite bound type of the same finite endpoint, used by
    /// set-difference to complement a removed interval's edge.
    fn complement(self) -> Bound {
        match self {
            Bound::Strict => Bound::Weak,
            Bound::Weak => Bound::Strict,
            Bound::Infty => Bound::Infty,
        }
    }

    /// The "more permissive" (set-union / logical-OR) choice between two
    /// bound types touching the same point: `Weak` wins over `Strict` (two
    /// bounds are adjacent unless both are strict).
    fn weaker(a: Bound, b: Bound) -> Bound {
        if a == Bound::Infty || b == Bound::Infty {
            Bound::Infty
        } else if a == Bound::Weak || b == Bound::Weak {
            Bound::Weak
        } else {
            Bound::Strict
        }
    }
}

/// An extended value used internally to reason about endpoints that may be
/// unbounded, so arithmetic involving `Bound::Infty` endpoints doesn't
/// require a placeholder finite value to participate in comparisons.
#[derive(Clone, Debug)]
enum Corner<R> {
    NegInf,
    Finite(R),
    PosInf,
}

impl<R: OrderedRing> Corner<R> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering::*;
        match (self, other) {
            (Corner::NegInf, Corner::NegInf) => Equal,
            (Corner::PosInf, Corner::PosInf) => Equal,
            (Corner::NegInf, _) => Less,
            (_, Corner::NegInf) => Greater,
            (Corner::PosInf, _) => Greater,
            (_, Corner::PosInf) => Less,
            (Corner::Finite(a), Corner::Finite(b)) => {
                a.partial_cmp(b).expect("ordered ring must be totally ordered")
            }
        }
    }
}

/// `a * b` for extended values. A finite zero pins the product at zero
/// regardless of the other (possibly infinite) operand — the conventional
/// treatment of `0 * infinity` used by interval-arithmetic libraries, since
/// the zero side's own bound type (not the infinite side's) decides whether
/// that pinned zero is actually achieved.
fn corner_mul<R: OrderedRing>(
    a: (&Corner<R>, Bound),
    b: (&Corner<R>, Bound),
) -> (Corner<R>, Bound) {
    let (av, ab) = a;
    let (bv, bb) = b;
    match (av, bv) {
        (Corner::Finite(x), Corner::Finite(y)) => (Corner::Finite(x.mul(y)), Bound::propagate(ab, bb)),
        (Corner::Finite(x), _) if x.is_zero() => (Corner::Finite(R::zero()), ab),
        (_, Corner::Finite(y)) if y.is_zero() => (Corner::Finite(R::zero()), bb),
        (Corner::Finite(x), Corner::NegInf) | (Corner::NegInf, Corner::Finite(x)) => {
            (if x.signum() > 0 { Corner::NegInf } else { Corner::PosInf }, Bound::Infty)
        }
        (Corner::Finite(x), Corner::PosInf) | (Corner::PosInf, Corner::Finite(x)) => {
            (if x.signum() > 0 { Corner::PosInf } else { Corner::NegInf }, Bound::Infty)
        }
        (Corner::NegInf, Corner::NegInf) => (Corner::PosInf, Bound::Infty),
        (Corner::PosInf, Corner::PosInf) => (Corner::PosInf, Bound::Infty),
        (Corner::NegInf, Corner::PosInf) | (Corner::PosInf, Corner::NegInf) => (Corner::NegInf, Bound::Infty),
    }
}

/// A real interval `{x | x relates-to lower, upper}` with independently
/// tagged bound types on each endpoint.
///
/// Every constructor canonicalizes: an empty result collapses to the
/// canonical empty value (equal endpoints, both strict); an infinite-bound
/// endpoint's stored value is irrelevant but kept as `R::zero()` for a
/// stable `Debug`/`Eq` representation.
#[derive(Clone, Debug)]
pub struct Interval<R: CoefficientRing> {
    lower: R,
    lower_bound: Bound,
    upper: R,
    upper_bound: Bound,
}

impl<R: OrderedRing> Interval<R> {
    /// Constructs and canonicalizes an interval.
    pub fn new(lower: R, lower_bound: Bound, upper: R, upper_bound: Bound) -> Self {
        let lower = if lower_bound == Bound::Infty { R::zero() } else { lower };
        let upper = if upper_bound == Bound::Infty { R::zero() } else { upper };
        let mut interval = Self { lower, lower_bound, upper, upper_bound };
        if interval.lower_bound != Bound::Infty && interval.upper_bound != Bound::Infty {
            let empties = interval.lower > interval.upper
                || (interval.lower == interval.upper
                    && (interval.lower_bound == Bound::Strict || interval.upper_bound == Bound::Strict));
            if empties {
                interval = Self::empty();
            }
        }
        interval
    }

    pub fn empty() -> Self {
        Self { lower: R::zero(), lower_bound: Bound::Strict, upper: R::zero(), upper_bound: Bound::Strict }
    }

    pub fn unbounded() -> Self {
        Self { lower: R::zero(), lower_bound: Bound::Infty, upper: R::zero(), upper_bound: Bound::Infty }
    }

    pub fn zero() -> Self {
        Self::point(R::zero())
    }

    pub fn point(value: R) -> Self {
        Self { lower: value.clone(), lower_bound: Bound::Weak, upper: value, upper_bound: Bound::Weak }
    }

    pub fn closed(lower: R, upper: R) -> Self {
        Self::new(lower, Bound::Weak, upper, Bound::Weak)
    }

    pub fn is_empty(&self) -> bool {
        self.lower_bound != Bound::Infty
            && self.upper_bound != Bound::Infty
            && self.lower == self.upper
            && (self.lower_bound == Bound::Strict || self.upper_bound == Bound::Strict)
    }

    pub fn lower(&self) -> &R {
        &self.lower
    }
    pub fn upper(&self) -> &R {
        &self.upper
    }
    pub fn lower_bound(&self) -> Bound {
        self.lower_bound
    }
    pub fn upper_bound(&self) -> Bound {
        self.upper_bound
    }

    fn lower_corner(&self) -> Corner<R> {
        if self.lower_bound == Bound::Infty {
            Corner::NegInf
        } else {
            Corner::Finite(self.lower.clone())
        }
    }

    fn upper_corner(&self) -> Corner<R> {
        if self.upper_bound == Bound::Infty {
            Corner::PosInf
        } else {
            Corner::Finite(self.upper.clone())
        }
    }

    pub fn contains(&self, x: &R) -> bool {
        if self.is_empty() {
            return false;
        }
        let lower_ok = match self.lower_bound {
            Bound::Infty => true,
            Bound::Weak => self.lower <= *x,
            Bound::Strict => self.lower < *x,
        };
        let upper_ok = match self.upper_bound {
            Bound::Infty => true,
            Bound::Weak => *x <= self.upper,
            Bound::Strict => *x < self.upper,
        };
        lower_ok && upper_ok
    }

    pub fn neg(&self) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        Self::new(self.upper.neg(), self.upper_bound, self.lower.neg(), self.lower_bound)
    }

    pub fn add(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::empty();
        }
        let lower_bound = Bound::propagate(self.lower_bound, other.lower_bound);
        let upper_bound = Bound::propagate(self.upper_bound, other.upper_bound);
        let lower = if lower_bound == Bound::Infty { R::zero() } else { self.lower.add(&other.lower) };
        let upper = if upper_bound == Bound::Infty { R::zero() } else { self.upper.add(&other.upper) };
        Self::new(lower, lower_bound, upper, upper_bound)
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// General multiplication via the four corner products: a nine-case
    /// sign/containment split collapses to this, since the sign-based
    /// shortcuts other implementations use are special cases of taking the
    /// min/max of all four corner products, which is always correct —
    /// including when an operand is unbounded, handled by `corner_mul`.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::empty();
        }
        let (al, au) = (self.lower_corner(), self.upper_corner());
        let (bl, bu) = (other.lower_corner(), other.upper_corner());
        let candidates = [
            corner_mul((&al, self.lower_bound), (&bl, other.lower_bound)),
            corner_mul((&al, self.lower_bound), (&bu, other.upper_bound)),
            corner_mul((&au, self.upper_bound), (&bl, other.lower_bound)),
            corner_mul((&au, self.upper_bound), (&bu, other.upper_bound)),
        ];
        let (min_corner, min_bound) = pick_extreme(&candidates, false);
        let (max_corner, max_bound) = pick_extreme(&candidates, true);
        let lower_bound = if matches!(min_corner, Corner::NegInf) { Bound::Infty } else { min_bound };
        let upper_bound = if matches!(max_corner, Corner::PosInf) { Bound::Infty } else { max_bound };
        let lower = match min_corner {
            Corner::Finite(v) => v,
            _ => R::zero(),
        };
        let upper = match max_corner {
            Corner::Finite(v) => v,
            _ => R::zero(),
        };
        Self::new(lower, lower_bound, upper, upper_bound)
    }

    /// `self * self`, tightened for the zero-straddling case: since `x^2 >=
    /// 0` whenever the interval contains zero, the general four-corner
    /// product (which would report a negative lower bound, e.g. `lo*hi` for
    /// `lo<0<hi`) is replaced with an exact `0` lower endpoint.
    pub fn square(&self) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        let straddles = self.lower < R::zero() && self.upper > R::zero();
        if !straddles {
            return self.mul(self);
        }
        let lo2 = self.lower.mul(&self.lower);
        let hi2 = self.upper.mul(&self.upper);
        let (upper, upper_bound) =
            if lo2 > hi2 { (lo2, self.lower_bound) } else { (hi2, self.upper_bound) };
        Self::new(R::zero(), Bound::Weak, upper, upper_bound)
    }
}

/// Picks the min (`want_max = false`) or max (`want_max = true`) of the
/// four corner candidates, joining the bound types of every candidate that
/// ties for the extreme.
fn pick_extreme<R: OrderedRing>(candidates: &[(Corner<R>, Bound); 4], want_max: bool) -> (Corner<R>, Bound) {
    let mut best = 0;
    for i in 1..4 {
        let better = if want_max {
            candidates[i].0.cmp(&candidates[best].0) == std::cmp::Ordering::Greater
        } else {
            candidates[i].0.cmp(&candidates[best].0) == std::cmp::Ordering::Less
        };
        if better {
            best = i;
        }
    }
    let mut bound = candidates[best].1;
    for (v, b) in candidates {
        if v.cmp(&candidates[best].0) == std::cmp::Ordering::Equal {
            bound = Bound::propagate(bound, *b);
        }
    }
    (candidates[best].0.clone(), bound)
}

impl<R: FieldRing + OrderedRing> Interval<R> {
    fn half_line_below(value: R, bound: Bound) -> Self {
        Self { lower: R::zero(), lower_bound: Bound::Infty, upper: value, upper_bound: bound }
    }

    fn half_line_above(value: R, bound: Bound) -> Self {
        Self { lower: value, lower_bound: bound, upper: R::zero(), upper_bound: Bound::Infty }
    }

    /// Extended reciprocal: `1/b` when `b` does not contain zero is the
    /// ordinary endpoint-swapping reciprocal; when `b` straddles zero the
    /// reciprocal of each zero-avoiding half is computed separately and
    /// returned as up to two disjoint pieces.
    pub fn reciprocal(&self) -> Vec<Self> {
        if self.is_empty() {
            return vec![];
        }
        let has_neg = self.lower < R::zero() || self.lower_bound == Bound::Infty;
        let has_pos = self.upper > R::zero() || self.upper_bound == Bound::Infty;
        match (has_neg, has_pos) {
            (true, true) => {
                let negative_part = if self.lower_bound == Bound::Infty {
                    Self::half_line_below(R::zero(), Bound::Strict)
                } else {
                    Self::half_line_below(self.lower.inv().expect("non-zero"), self.lower_bound)
                };
                let positive_part = if self.upper_bound == Bound::Infty {
                    Self::half_line_above(R::zero(), Bound::Strict)
                } else {
                    Self::half_line_above(self.upper.inv().expect("non-zero"), self.upper_bound)
                };
                vec![negative_part, positive_part]
            }
            (true, false) => {
                // Entirely <= 0: 1/x is order-reversing on the negatives, so
                // the result's upper endpoint comes from self's lower
                // endpoint and vice versa.
                let (upper, upper_bound) = if self.lower_bound == Bound::Infty {
                    (R::zero(), Bound::Strict)
                } else {
                    (self.lower.inv().expect("non-zero"), self.lower_bound)
                };
                let (lower, lower_bound) = if self.upper.is_zero() {
                    (R::zero(), Bound::Infty)
                } else {
                    (self.upper.inv().expect("non-zero"), self.upper_bound)
                };
                vec![Self::new(lower, lower_bound, upper, upper_bound)]
            }
            (false, true) => {
                // Entirely >= 0: same order-reversal, mirrored.
                let (lower, lower_bound) = if self.upper_bound == Bound::Infty {
                    (R::zero(), Bound::Strict)
                } else {
                    (self.upper.inv().expect("non-zero"), self.upper_bound)
                };
                let (upper, upper_bound) = if self.lower.is_zero() {
                    (R::zero(), Bound::Infty)
                } else {
                    (self.lower.inv().expect("non-zero"), self.lower_bound)
                };
                vec![Self::new(lower, lower_bound, upper, upper_bound)]
            }
            (false, false) => {
                // self is exactly {0} (or empty, already handled above).
                vec![]
            }
        }
    }

    /// `self / other`, producing one or two disjoint result intervals when
    /// `other` straddles zero.
    pub fn div(&self, other: &Self) -> Vec<Self> {
        if self.is_empty() || other.is_empty() {
            return vec![];
        }
        other.reciprocal().into_iter().map(|piece| self.mul(&piece)).collect()
    }
}

impl<R: OrderedRing> Interval<R> {
    /// Complement helper for set-difference: all `x` with `x < value` (or
    /// `<= value` when `bound` is `Weak`).
    fn below(value: R, bound: Bound) -> Self {
        Self { lower: R::zero(), lower_bound: Bound::Infty, upper: value, upper_bound: bound }
    }

    fn above(value: R, bound: Bound) -> Self {
        Self { lower: value, lower_bound: bound, upper: R::zero(), upper_bound: Bound::Infty }
    }

    /// Intersection: at most one resulting interval (possibly empty).
    pub fn intersection(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::empty();
        }
        let (lower, lower_bound) = combine_extreme(
            self.lower_corner(),
            self.lower_bound,
            other.lower_corner(),
            other.lower_bound,
            true,
        );
        let (upper, upper_bound) = combine_extreme(
            self.upper_corner(),
            self.upper_bound,
            other.upper_corner(),
            other.upper_bound,
            false,
        );
        let lower_val = match lower {
            Corner::Finite(v) => v,
            _ => R::zero(),
        };
        let upper_val = match upper {
            Corner::Finite(v) => v,
            _ => R::zero(),
        };
        Self::new(lower_val, lower_bound, upper_val, upper_bound)
    }

    /// Union: one interval if the operands overlap or are adjacent
    /// (touching endpoints equal and not both strict), otherwise the two
    /// disjoint operands unchanged.
    pub fn union(&self, other: &Self) -> Vec<Self> {
        if self.is_empty() {
            return vec![other.clone()];
        }
        if other.is_empty() {
            return vec![self.clone()];
        }
        let (first, second) = if self.lower_corner().cmp(&other.lower_corner()) != std::cmp::Ordering::Greater {
            (self, other)
        } else {
            (other, self)
        };
        let touching = first.upper_corner().cmp(&second.lower_corner());
        let mergeable = touching == std::cmp::Ordering::Greater
            || (touching == std::cmp::Ordering::Equal
                && !(first.upper_bound == Bound::Strict && second.lower_bound == Bound::Strict));
        if !mergeable {
            return vec![first.clone(), second.clone()];
        }
        let (lower, lower_bound) = combine_extreme_or(
            first.lower_corner(),
            first.lower_bound,
            second.lower_corner(),
            second.lower_bound,
            true,
        );
        let (upper, upper_bound) = combine_extreme_or(
            first.upper_corner(),
            first.upper_bound,
            second.upper_corner(),
            second.upper_bound,
            false,
        );
        let lower_val = match lower {
            Corner::Finite(v) => v,
            _ => R::zero(),
        };
        let upper_val = match upper {
            Corner::Finite(v) => v,
            _ => R::zero(),
        };
        vec![Self::new(lower_val, lower_bound, upper_val, upper_bound)]
    }

    /// Set difference `self \ other`: at most two pieces.
    pub fn difference(&self, other: &Self) -> Vec<Self> {
        if self.is_empty() {
            return vec![];
        }
        if other.is_empty() {
            return vec![self.clone()];
        }
        let mut result = Vec::new();
        if other.lower_bound != Bound::Infty {
            let left = self.intersection(&Self::below(other.lower.clone(), other.lower_bound.complement()));
            if !left.is_empty() {
                result.push(left);
            }
        }
        if other.upper_bound != Bound::Infty {
            let right = self.intersection(&Self::above(other.upper.clone(), other.upper_bound.complement()));
            if !right.is_empty() {
                result.push(right);
            }
        }
        result
    }

}

impl<R: FieldRing + OrderedRing> Interval<R> {
    /// Splits a bounded interval into `n` equal pieces, left-closed /
    /// right-open except the last, which inherits `self`'s own upper bound.
    pub fn split(&self, n: usize) -> Vec<Self> {
        assert!(n > 0, "split count must be positive");
        assert!(
            self.lower_bound != Bound::Infty && self.upper_bound != Bound::Infty,
            "cannot split an unbounded interval"
        );
        if self.is_empty() {
            return vec![];
        }
        let width = self.upper.sub(&self.lower);
        let n_inv = R::from_i64(n as i64).inv().expect("split count is non-zero");
        let step = width.mul(&n_inv);
        let mut pieces = Vec::with_capacity(n);
        let mut start = self.lower.clone();
        for i in 0..n {
            let end = if i + 1 == n {
                self.upper.clone()
            } else {
                self.lower.add(&step.mul(&R::from_i64((i + 1) as i64)))
            };
            let upper_bound = if i + 1 == n { self.upper_bound } else { Bound::Strict };
            pieces.push(Self::new(start.clone(), Bound::Weak, end.clone(), upper_bound));
            start = end;
        }
        pieces
    }
}

fn combine_extreme<R: OrderedRing>(
    a_corner: Corner<R>,
    a_bound: Bound,
    b_corner: Corner<R>,
    b_bound: Bound,
    want_max: bool,
) -> (Corner<R>, Bound) {
    let ord = a_corner.cmp(&b_corner);
    let a_wins = if want_max { ord == std::cmp::Ordering::Greater } else { ord == std::cmp::Ordering::Less };
    if ord == std::cmp::Ordering::Equal {
        let bound = Bound::propagate(a_bound, b_bound);
        (a_corner, bound)
    } else if a_wins {
        (a_corner, a_bound)
    } else {
        (b_corner, b_bound)
    }
}

fn combine_extreme_or<R: OrderedRing>(
    a_corner: Corner<R>,
    a_bound: Bound,
    b_corner: Corner<R>,
    b_bound: Bound,
    want_min: bool,
) -> (Corner<R>, Bound) {
    let ord = a_corner.cmp(&b_corner);
    let a_wins = if want_min { ord == std::cmp::Ordering::Less } else { ord == std::cmp::Ordering::Greater };
    if ord == std::cmp::Ordering::Equal {
        let bound = Bound::weaker(a_bound, b_bound);
        (a_corner, bound)
    } else if a_wins {
        (a_corner, a_bound)
    } else {
        (b_corner, b_bound)
    }
}

impl<R: CoefficientRing + PartialEq> PartialEq for Interval<R> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() && other.is_empty() {
            return true;
        }
        self.lower_bound == other.lower_bound
            && self.upper_bound == other.upper_bound
            && (self.lower_bound == Bound::Infty || self.lower == other.lower)
            && (self.upper_bound == Bound::Infty || self.upper == other.upper)
    }
}

impl<R: CoefficientRing + fmt::Display> fmt::Display for Interval<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(){{}}");
        }
        let open = match self.lower_bound {
            Bound::Strict => "(",
            Bound::Weak => "[",
            Bound::Infty => "(",
        };
        let close = match self.upper_bound {
            Bound::Strict => ")",
            Bound::Weak => "]",
            Bound::Infty => ")",
        };
        write!(f, "{open}")?;
        match self.lower_bound {
            Bound::Infty => write!(f, "-INF")?,
            _ => write!(f, "{}", self.lower)?,
        }
        write!(f, ", ")?;
        match self.upper_bound {
            Bound::Infty => write!(f, "INF")?,
            _ => write!(f, "{}", self.upper)?,
        }
        write!(f, "{close}")
    }
}

/// Interval evaluation of a multivariate polynomial: `sum c_i *
/// prod map[v_j]^e_j`, short-circuiting to the unbounded interval as soon as
/// the running sum becomes unbounded in both directions (further additions
/// cannot narrow it).
pub fn evaluate<R>(
    p: &MultivariatePolynomial<R>,
    map: &HashMap<Variable, Interval<R>>,
) -> Interval<R>
where
    R: CoefficientRing + RingScratchPool + OrderedRing,
{
    let mut acc = Interval::zero();
    for term in p.terms() {
        let mut factor = Interval::point(term.coefficient.clone());
        if let Some(m) = &term.monomial {
            for (v, e) in m.pairs() {
                let base = map.get(v).cloned().unwrap_or_else(Interval::zero);
                let mut power = Interval::point(R::one());
                for _ in 0..e.get() {
                    power = power.mul(&base);
                }
                factor = factor.mul(&power);
            }
        }
        acc = acc.add(&factor);
        if acc.lower_bound() == Bound::Infty && acc.upper_bound() == Bound::Infty {
            break;
        }
    }
    acc
}

/// Simple-Newton contractor step: `N(x; I) = mid(I) -
/// p(mid(I)) / (dp/dx)(I)`, intersected with `I`. If the derivative's
/// enclosure straddles zero, division splits into two candidate refinements;
/// each is intersected with the caller's interval and the surviving
/// piece(s) returned. When both survive, the convex hull (their union's
/// enclosing interval) collapses the pair to a single enclosure.
pub fn newton_contract<R>(
    p: &MultivariatePolynomial<R>,
    x: &Variable,
    assignment: &HashMap<Variable, Interval<R>>,
) -> Interval<R>
where
    R: CoefficientRing + RingScratchPool + OrderedRing + FieldRing,
{
    let current = assignment.get(x).cloned().unwrap_or_else(Interval::unbounded);
    if current.is_empty() {
        return Interval::empty();
    }
    if current.lower_bound() == Bound::Infty || current.upper_bound() == Bound::Infty {
        return current;
    }
    let two = R::one().add(&R::one());
    let mid = current.lower().add(current.upper()).div(&two).unwrap_or_else(|| current.lower().clone());
    let mid_interval = Interval::point(mid.clone());

    let mut mid_map = assignment.clone();
    mid_map.insert(x.clone(), mid_interval.clone());
    let p_at_mid = evaluate(p, &mid_map);

    let derivative = p.derivative(x, 1);
    let derivative_at_box = evaluate(&derivative, assignment);

    let candidates = p_at_mid.div(&derivative_at_box);
    let mut survivors: Vec<Interval<R>> = Vec::new();
    for cand in candidates {
        let step = mid_interval.sub(&cand);
        let refined = step.intersection(&current);
        if !refined.is_empty() {
            survivors.push(refined);
        }
    }
    match survivors.len() {
        0 => Interval::empty(),
        1 => survivors.into_iter().next().unwrap(),
        _ => {
            // Zero-crossing derivative split the candidate in two; enclose
            // both surviving pieces in their convex hull rather than
            // reporting a disjoint pair, so the contractor returns a single
            // refined interval per variable.
            let mut hull = survivors[0].clone();
            for piece in &survivors[1..] {
                let (lo, lo_b) = if hull.lower_corner().cmp(&piece.lower_corner()) != std::cmp::Ordering::Greater {
                    (hull.lower.clone(), hull.lower_bound)
                } else {
                    (piece.lower().clone(), piece.lower_bound())
                };
                let (hi, hi_b) = if hull.upper_corner().cmp(&piece.upper_corner()) != std::cmp::Ordering::Less {
                    (hull.upper.clone(), hull.upper_bound)
                } else {
                    (piece.upper().clone(), piece.upper_bound())
                };
                hull = Interval::new(lo, lo_b, hi, hi_b);
            }
            hull
        }
    }
}
