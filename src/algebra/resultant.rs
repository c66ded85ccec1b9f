//! Resultant and discriminant.
//!
//! Operates on the univariate view over a field of coefficients, via the
//! determinant of the Sylvester matrix — the textbook method. Gaussian
//! elimination needs to divide by a pivot, so this requires `FieldRing`
//! coefficients rather than the weaker `EuclideanRing` the GCD/division
//! modules get by with.

use crate::polynomial::univariate::UnivariatePolynomial;
use crate::ring::FieldRing;

/// `resultant(p, q)`: the determinant of their `(deg(p)+deg(q)) x
/// (deg(p)+deg(q))` Sylvester matrix. Zero if either polynomial
/// is zero; `one()` if both are non-zero constants (the 0x0 Sylvester
/// matrix's determinant by convention).
pub fn resultant<C: FieldRing>(p: &UnivariatePolynomial<C>, q: &UnivariatePolynomial<C>) -> C {
    if p.is_zero() || q.is_zero() {
        return C::zero();
    }
    let m = p.degree_checked();
    let n = q.degree_checked();
    let size = m + n;
    if size == 0 {
        return C::one();
    }
    let p_desc: Vec<C> = p.coefficients().iter().rev().cloned().collect();
    let q_desc: Vec<C> = q.coefficients().iter().rev().cloned().collect();

    let mut matrix = vec![vec![C::zero(); size]; size];
    for i in 0..n {
        for (k, c) in p_desc.iter().enumerate() {
            matrix[i][i + k] = c.clone();
        }
    }
    for i in 0..m {
        for (k, c) in q_desc.iter().enumerate() {
            matrix[n + i][i + k] = c.clone();
        }
    }
    determinant(matrix)
}

/// `disc(p) = (-1)^(d(d-1)/2) * resultant(p, p') / lc(p)`, `d = deg(p)`.
/// `1` for a non-zero constant, matching the vacuous case
/// where no pair of roots exists to be discriminated.
pub fn discriminant<C: FieldRing>(p: &UnivariatePolynomial<C>) -> C {
    assert!(!p.is_zero(), "discriminant of the zero polynomial");
    let d = p.degree_checked();
    if d == 0 {
        return C::one();
    }
    let derivative = p.derivative();
    let res = resultant(p, &derivative);
    let sign_exponent = (d * (d - 1)) / 2;
    let signed = if sign_exponent % 2 == 0 { res } else { res.neg() };
    let lc = p.leading_coeff();
    signed.div(&lc).expect("non-zero leading coefficient is invertible in a field")
}

/// Gaussian elimination with partial pivoting; swapping rows flips the
/// accumulated determinant's sign, matching the textbook expansion.
fn determinant<C: FieldRing>(mut matrix: Vec<Vec<C>>) -> C {
    let size = matrix.len();
    let mut det = C::one();
    for col in 0..size {
        let pivot_row = (col..size).find(|&r| !matrix[r][col].is_zero());
        let pivot_row = match pivot_row {
            Some(r) => r,
            None => return C::zero(),
        };
        if pivot_row != col {
            matrix.swap(pivot_row, col);
            det = det.neg();
        }
        let pivot = matrix[col][col].clone();
        det = det.mul(&pivot);
        let pivot_inv = pivot.inv().expect("pivot is non-zero by construction");
        for r in (col + 1)..size {
            if matrix[r][col].is_zero() {
                continue;
            }
            let factor = matrix[r][col].mul(&pivot_inv);
            for c in col..size {
                let sub = factor.mul(&matrix[col][c]);
                matrix[r][c] = matrix[r][c].sub(&sub);
            }
        }
    }
    det
}
