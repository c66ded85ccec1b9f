//! Square-free factorization.
//!
//! Yun's algorithm on the univariate view. Needs field coefficients: every
//! step divides by `gcd(b_i, d_i)`, which must be exact and always
//! defined — only guaranteed once classical division is backed by
//! `FieldRing`. Characteristic-zero only: the algorithm's correctness rests
//! on `gcd(p, p') = 1` characterizing a square-free `p`, which fails once
//! `p' = 0` for a non-constant `p` (every exponent a multiple of the
//! characteristic).

use crate::error::{KernelError, KernelResult};
use crate::polynomial::univariate::UnivariatePolynomial;
use crate::ring::FieldRing;

/// `p`'s square-free factorization: pairwise-coprime, square-free `(f_i,
/// e_i)` pairs with `p = lc(p) * prod(f_i^e_i)` up to the unit ambiguity
/// inherent to GCD over a field. The zero polynomial factors as
/// the empty product; a non-zero constant as itself with multiplicity 1.
pub fn squarefree_decomposition<C: FieldRing>(
    p: &UnivariatePolynomial<C>,
) -> KernelResult<Vec<(UnivariatePolynomial<C>, u32)>> {
    if !C::is_characteristic_zero() {
        return Err(KernelError::NonZeroCharacteristic { operation: "square-free factorization" });
    }
    if p.is_zero() {
        return Ok(Vec::new());
    }
    if p.is_constant() {
        return Ok(vec![(p.clone(), 1)]);
    }

    let p_prime = p.derivative();
    let a0 = p.gcd(&p_prime).unit_normalize();
    let mut b = p.div_rem(&a0).expect("a0 divides p exactly").0;
    let mut c = p_prime.div_rem(&a0).expect("a0 divides p' exactly").0;
    let mut d = c.sub(&b.derivative());

    let mut factors = Vec::new();
    let mut i = 1u32;
    while !b.is_constant() {
        let a_i = b.gcd(&d).unit_normalize();
        let next_b = b.div_rem(&a_i).expect("a_i divides b_i exactly").0;
        if !a_i.is_constant() {
            factors.push((a_i.clone(), i));
        }
        c = d.div_rem(&a_i).expect("a_i divides d_i exactly").0;
        b = next_b;
        d = c.sub(&b.derivative());
        i += 1;
    }
    Ok(factors)
}

/// Whether `p` has no repeated irreducible factor, i.e. `gcd(p, p')` is a
/// unit. A non-zero constant is vacuously square-free; the zero
/// polynomial is not (it is divisible by the square of every polynomial).
pub fn is_squarefree<C: FieldRing>(p: &UnivariatePolynomial<C>) -> KernelResult<bool> {
    if !C::is_characteristic_zero() {
        return Err(KernelError::NonZeroCharacteristic { operation: "square-free test" });
    }
    if p.is_zero() {
        return Ok(false);
    }
    if p.is_constant() {
        return Ok(true);
    }
    Ok(p.gcd(&p.derivative()).is_constant())
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
    fn squarefree_polynomial_factors_as_itself() {
        // x^2 - 1 = (x-1)(x+1), already square-free.
        let x = var("squarefree_test_plain_x");
        let p = UnivariatePolynomial::from_coeffs(x, vec![rat(-1), rat(0), rat(1)]);
        assert!(is_squarefree(&p).unwrap());
        let factors = squarefree_decomposition(&p).unwrap();
        assert_eq!(factors.len(), 1);
        assert_eq!(factors[0].1, 1);
    }

    #[test]
    fn repeated_factor_is_detected_with_correct_multiplicity() {
        // p = (x-1)^2 * (x-2) = x^3 - 4x^2 + 5x - 2
        let x = var("squarefree_test_repeated_x");
        let p = UnivariatePolynomial::from_coeffs(x.clone(), vec![rat(-2), rat(5), rat(-4), rat(1)]);
        assert!(!is_squarefree(&p).unwrap());

        let factors = squarefree_decomposition(&p).unwrap();
        let total_multiplicity: u32 = factors.iter().map(|(_, e)| *e).sum();
        assert_eq!(total_multiplicity, 3);

        let mut reconstructed = UnivariatePolynomial::constant(x, BigRational::from_integer(BigInt::from(1)));
        for (f, e) in &factors {
            for _ in 0..*e {
                reconstructed = reconstructed.mul(f);
            }
        }
        // Reconstructed factors are each monic; rescale by the leading-coefficient
        // ratio to compare against `p` exactly rather than only up to a unit.
        let scale = p.leading_coeff().div(&reconstructed.leading_coeff()).unwrap();
        assert_eq!(reconstructed.scalar_mul(&scale), p);
    }

    #[test]
    fn constant_polynomial_has_trivial_factorization() {
        let x = var("squarefree_test_const_x");
        let p = UnivariatePolynomial::constant(x, rat(7));
        let factors = squarefree_decomposition(&p).unwrap();
        assert_eq!(factors, vec![(p, 1)]);
    }
}
