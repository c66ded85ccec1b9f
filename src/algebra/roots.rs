//! Real-root isolation.
//!
//! Builds exact-rational isolating intervals over a square-free polynomial:
//! square-free the input, peel off `x` as a recorded zero root, shrink the
//! search window with Cauchy's bound, peel off any root sitting exactly on
//! a window endpoint, then bisect, driven by exact Sturm-sequence
//! sign-variation counting rather than a floating-point approximation.

use crate::error::KernelResult;
use crate::interval::{Bound, Interval};
use crate::polynomial::univariate::UnivariatePolynomial;
use crate::ring::FieldRing;

use super::squarefree;

/// Isolating intervals for every real root of `p`: each returned interval
/// contains exactly one root, and the union of all returned intervals
/// contains every real root of `p`. `p` need not
/// itself be square-free — each square-free factor is isolated
/// independently since repeated factors share the same root set.
pub fn isolate_real_roots<C: FieldRing>(p: &UnivariatePolynomial<C>) -> KernelResult<Vec<Interval<C>>> {
    if p.is_zero() || p.is_constant() {
        return Ok(Vec::new());
    }
    let factors = squarefree::squarefree_decomposition(p)?;
    let mut roots = Vec::new();
    for (factor, _multiplicity) in factors {
        if factor.is_constant() {
            continue;
        }
        roots.extend(isolate_squarefree(&factor));
    }
    roots.sort_by(|a, b| a.lower().partial_cmp(b.lower()).expect("ordered ring is totally ordered"));
    Ok(roots)
}

/// The Sturm sequence `p_0 = p, p_1 = p', p_{i+1} = -rem(p_{i-1}, p_i)`,
/// terminated once a remainder is zero.
fn sturm_sequence<C: FieldRing>(p: &UnivariatePolynomial<C>) -> Vec<UnivariatePolynomial<C>> {
    let mut seq = vec![p.clone(), p.derivative()];
    loop {
        let n = seq.len();
        if seq[n - 1].is_zero() {
            break;
        }
        let (_, r) = seq[n - 2].div_rem(&seq[n - 1]).expect("field coefficients always divide");
        if r.is_zero() {
            break;
        }
        seq.push(r.negate());
    }
    seq
}

/// Number of sign changes in the Sturm sequence evaluated at `x`, ignoring
/// zeros.
fn sign_variations_at<C: FieldRing>(seq: &[UnivariatePolynomial<C>], x: &C) -> usize {
    let mut last_sign = 0;
    let mut count = 0;
    for p in seq {
        let s = p.evaluate(x).signum();
        if s == 0 {
            continue;
        }
        if last_sign != 0 && s != last_sign {
            count += 1;
        }
        last_sign = s;
    }
    count
}

/// Isolates the roots of a single square-free, non-constant univariate
/// polynomial.
fn isolate_squarefree<C: FieldRing>(p: &UnivariatePolynomial<C>) -> Vec<Interval<C>> {
    let mut roots = Vec::new();
    let mut q = p.clone();
    while !q.is_zero() && q.coeff(0).is_zero() {
        roots.push(Interval::point(C::zero()));
        q = UnivariatePolynomial::from_coeffs(q.main_var().clone(), q.coefficients()[1..].to_vec());
    }
    if q.is_zero() || q.is_constant() {
        return roots;
    }

    let bound = q.cauchy_bound();
    let lo0 = bound.neg();
    let hi0 = bound;
    if q.evaluate(&lo0).is_zero() {
        roots.push(Interval::point(lo0.clone()));
    }
    if q.evaluate(&hi0).is_zero() {
        roots.push(Interval::point(hi0.clone()));
    }

    let seq = sturm_sequence(&q);
    let two = C::one().add(&C::one());
    let mut stack = vec![(lo0, hi0)];
    while let Some((lo, hi)) = stack.pop() {
        let count = sign_variations_at(&seq, &lo).saturating_sub(sign_variations_at(&seq, &hi));
        match count {
            0 => {}
            1 => roots.push(Interval::new(lo, Bound::Strict, hi, Bound::Strict)),
            _ => {
                let mid = lo.add(&hi).div(&two).expect("2 is non-zero in a field");
                if q.evaluate(&mid).is_zero() {
                    roots.push(Interval::point(mid.clone()));
                }
                stack.push((lo, mid.clone()));
                stack.push((mid, hi));
            }
        }
    }
    roots
}

#[cfg(all(test, feature = "bigint"))]
mod tests {
    use super::*;
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
    fn cubic_isolates_three_roots_with_zero_as_a_point() {
        // p = x^3 - x = x(x-1)(x+1): roots -1, 0, 1.
        let x = var("roots_test_cubic_x");
        let p = UnivariatePolynomial::from_coeffs(x, vec![rat(0), rat(-1), rat(0), rat(1)]);
        let roots = isolate_real_roots(&p).unwrap();
        assert_eq!(roots.len(), 3);
        assert!(roots.iter().any(|i| i.lower() == i.upper() && *i.lower() == rat(0)));
        let contains = |target: &BigRational| roots.iter().any(|i| i.contains(target));
        assert!(contains(&rat(-1)));
        assert!(contains(&rat(0)));
        assert!(contains(&rat(1)));
    }

    #[test]
    fn quadratic_with_no_real_roots_isolates_nothing() {
        // p = x^2 + 1 has no real roots.
        let x = var("roots_test_no_real_x");
        let p = UnivariatePolynomial::from_coeffs(x, vec![rat(1), rat(0), rat(1)]);
        let roots = isolate_real_roots(&p).unwrap();
        assert!(roots.is_empty());
    }

    #[test]
    fn repeated_factor_still_isolates_each_distinct_root_once() {
        // p = (x-1)^2 * (x+2) = x^3 - 3x + 2: distinct roots 1 and -2.
        let x = var("roots_test_repeated_x");
        let p = UnivariatePolynomial::from_coeffs(x, vec![rat(2), rat(-3), rat(0), rat(1)]);
        let roots = isolate_real_roots(&p).unwrap();
        assert_eq!(roots.len(), 2);
        let contains = |target: &BigRational| roots.iter().any(|i| i.contains(target));
        assert!(contains(&rat(1)));
        assert!(contains(&rat(-2)));
    }
}
