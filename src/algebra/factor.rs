//! Factorization hook.
//!
//! The core ships no complete factorizer — that is left to external
//! backends — only the plug-in contract and a sign-sanitizing wrapper the
//! core itself enforces on any implementation. [`TrivialFactorizer`] is the
//! always-available fallback that reports the input as its own sole factor.

use crate::ordering::MonomialOrder;
use crate::polynomial::MultivariatePolynomial;
use crate::ring::{CoefficientRing, RingScratchPool};
use crate::error::{KernelError, KernelResult};

/// A pluggable factorization backend: given a polynomial, reports a list of
/// `(factor, multiplicity)` pairs. No claim about the factors being
/// irreducible or even multiplying back out to the input is trusted by the
/// core — [`verify_and_sanitize`] is the only correctness guarantee it makes.
pub trait Factorizer<R: CoefficientRing + RingScratchPool> {
    fn factorize(&self, p: &MultivariatePolynomial<R>) -> Vec<(MultivariatePolynomial<R>, u32)>;
}

/// The always-available fallback: reports `p` as a single factor of
/// multiplicity 1. Used directly when no richer plug-in is wired up, and as
/// the landing spot [`verify_and_sanitize`] falls back to when a plug-in's
/// factors don't reconstruct the input.
pub struct TrivialFactorizer;

impl<R: CoefficientRing + RingScratchPool> Factorizer<R> for TrivialFactorizer {
    fn factorize(&self, p: &MultivariatePolynomial<R>) -> Vec<(MultivariatePolynomial<R>, u32)> {
        if p.is_zero() {
            Vec::new()
        } else {
            vec![(p.clone(), 1)]
        }
    }
}

fn reconstruct<R: CoefficientRing + RingScratchPool>(
    factors: &[(MultivariatePolynomial<R>, u32)],
    order: MonomialOrder,
) -> MultivariatePolynomial<R> {
    let mut product = MultivariatePolynomial::constant(R::one(), order);
    for (f, e) in factors {
        product = product.mul(&CoefficientRing::pow(f, *e));
    }
    product
}

/// Runs `factorizer` on `p` and sanitizes its answer: if `prod(fᵢ^eᵢ) == p`,
/// the factors are returned unchanged; if it equals `-p` instead, the sign
/// is re-absorbed as an extra constant `-1` factor; any other mismatch falls
/// back to the trivial factorization. The core makes no stronger
/// correctness claim than this about a plugged-in factorizer.
pub fn verify_and_sanitize<R>(
    p: &MultivariatePolynomial<R>,
    factorizer: &dyn Factorizer<R>,
) -> Vec<(MultivariatePolynomial<R>, u32)>
where
    R: CoefficientRing + RingScratchPool,
{
    if p.is_zero() {
        return Vec::new();
    }
    let order = p.order();
    let factors = factorizer.factorize(p);
    let product = reconstruct(&factors, order);
    if product == *p {
        return factors;
    }
    if product.negate() == *p {
        let mut sanitized = factors;
        sanitized.push((MultivariatePolynomial::constant(R::one().neg(), order), 1));
        return sanitized;
    }
    vec![(p.clone(), 1)]
}

/// Strict counterpart of [`verify_and_sanitize`] for a caller that wants the
/// raw mismatch surfaced instead of silently recovered.
pub fn verify<R>(p: &MultivariatePolynomial<R>, factors: &[(MultivariatePolynomial<R>, u32)]) -> KernelResult<()>
where
    R: CoefficientRing + RingScratchPool,
{
    let order = p.order();
    let product = reconstruct(factors, order);
    if product == *p || product.negate() == *p {
        Ok(())
    } else {
        Err(KernelError::FactorizationMismatch {
            reason: "product of reported factors does not match the input, even up to sign".to_string(),
        })
    }
}
