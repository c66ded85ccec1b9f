//! Univariate polynomial over a fixed main variable, with a
//! capability-escalating set of operations: construction, arithmetic, and
//! pseudo-remainder need only `CoefficientRing`; division,
//! content/primitive-part, and primitive-Euclidean GCD need `EuclideanRing`;
//! extended GCD, unit-normalization, and root bounds need `FieldRing`.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::ring::{CoefficientRing, EuclideanRing, FieldRing, OrderedRing};
use crate::variable::Variable;

/// A dense univariate polynomial `a_0 + a_1*v + ... + a_d*v^d` over a fixed
/// main variable `v`. Coefficients are stored ascending; the zero
/// polynomial is the empty vector, otherwise the last coefficient is
/// non-zero.
#[derive(Debug, Clone)]
pub struct UnivariatePolynomial<C: CoefficientRing> {
    main_var: Variable,
    coeffs: Vec<C>,
}

impl<C: CoefficientRing> UnivariatePolynomial<C> {
    pub fn zero(main_var: Variable) -> Self {
        Self { main_var, coeffs: Vec::new() }
    }

    pub fn constant(main_var: Variable, c: C) -> Self {
        if c.is_zero() {
            Self::zero(main_var)
        } else {
            Self { main_var, coeffs: vec![c] }
        }
    }

    pub fn monomial(main_var: Variable, coeff: C, power: usize) -> Self {
        if coeff.is_zero() {
            return Self::zero(main_var);
        }
        let mut coeffs = vec![C::zero(); power + 1];
        coeffs[power] = coeff;
        Self { main_var, coeffs }
    }

    /// `coeffs[i]` is the coefficient of `v^i`; trailing zero coefficients
    /// are trimmed to maintain the "no trailing zero" invariant.
    pub fn from_coeffs(main_var: Variable, mut coeffs: Vec<C>) -> Self {
        while coeffs.last().is_some_and(C::is_zero) {
            coeffs.pop();
        }
        Self { main_var, coeffs }
    }

    pub fn main_var(&self) -> &Variable {
        &self.main_var
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    /// `None` for the zero polynomial — degree of the zero polynomial is a
    /// precondition violation at the call site, not here; callers that need
    /// a hard degree use `degree_checked`.
    pub fn degree(&self) -> Option<usize> {
        if self.coeffs.is_empty() {
            None
        } else {
            Some(self.coeffs.len() - 1)
        }
    }

    pub fn degree_checked(&self) -> usize {
        self.degree().expect("degree of the zero polynomial")
    }

    pub fn leading_coeff(&self) -> C {
        self.coeffs.last().cloned().unwrap_or_else(C::zero)
    }

    pub fn trailing_coeff(&self) -> C {
        self.coeffs.first().cloned().unwrap_or_else(C::zero)
    }

    pub fn coeff(&self, i: usize) -> C {
        self.coeffs.get(i).cloned().unwrap_or_else(C::zero)
    }

    pub fn coefficients(&self) -> &[C] {
        &self.coeffs
    }

    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..len).map(|i| self.coeff(i).add(&other.coeff(i))).collect();
        Self::from_coeffs(self.main_var.clone(), coeffs)
    }

    pub fn negate(&self) -> Self {
        Self { main_var: self.main_var.clone(), coeffs: self.coeffs.iter().map(C::neg).collect() }
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }

    pub fn scalar_mul(&self, c: &C) -> Self {
        if c.is_zero() {
            return Self::zero(self.main_var.clone());
        }
        Self::from_coeffs(self.main_var.clone(), self.coeffs.iter().map(|x| x.mul(c)).collect())
    }

    /// `self * v^shift`.
    fn shift(&self, shift: usize) -> Self {
        if self.is_zero() || shift == 0 {
            return self.clone();
        }
        let mut coeffs = vec![C::zero(); shift];
        coeffs.extend(self.coeffs.iter().cloned());
        Self { main_var: self.main_var.clone(), coeffs }
    }

    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero(self.main_var.clone());
        }
        let mut coeffs = vec![C::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j].add(&a.mul(b));
            }
        }
        Self::from_coeffs(self.main_var.clone(), coeffs)
    }

    /// Horner evaluation at a point drawn from the same ring as the
    /// coefficients.
    pub fn evaluate(&self, x: &C) -> C {
        let mut result = C::zero();
        for c in self.coeffs.iter().rev() {
            result = result.mul(x).add(c);
        }
        result
    }

    /// `derivative(p, 0) == p`; iterating `derivative` once per level
    /// matches `derivative(derivative(p, 1), k) == derivative(p, k+1)`.
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() <= 1 {
            return Self::zero(self.main_var.clone());
        }
        let coeffs = self.coeffs[1..]
            .iter()
            .enumerate()
            .map(|(i, c)| c.mul(&C::one().mul_small((i + 1) as u64)))
            .collect();
        Self::from_coeffs(self.main_var.clone(), coeffs)
    }

    pub fn nth_derivative(&self, n: u32) -> Self {
        let mut p = self.clone();
        for _ in 0..n {
            p = p.derivative();
        }
        p
    }

    /// Pseudo-remainder `prem(self, divisor)`: `lc(divisor)^(deg(self) -
    /// deg(divisor) + 1) * self = q * divisor + prem`, `deg(prem) <
    /// deg(divisor)` or `prem = 0`. Needs only ring multiplication/
    /// subtraction — no division in `C` at all, which is the entire point
    /// of pseudo-remainder over a ring that may not support exact division
    /// (e.g. `C` itself a multivariate polynomial).
    pub fn pseudo_rem(&self, divisor: &Self) -> Self {
        assert!(!divisor.is_zero(), "pseudo-remainder by the zero polynomial");
        let dg = divisor.degree_checked();
        let df = match self.degree() {
            Some(d) => d,
            None => return self.clone(),
        };
        if df < dg {
            return self.clone();
        }
        let lc_g = divisor.leading_coeff();
        let mut r = self.clone();
        let mut remaining: u32 = (df - dg + 1) as u32;
        loop {
            let dr = match r.degree() {
                Some(d) if d >= dg => d,
                _ => break,
            };
            let lc_r = r.leading_coeff();
            let scaled_r = r.scalar_mul(&lc_g);
            let shifted = divisor.scalar_mul(&lc_r).shift(dr - dg);
            r = scaled_r.sub(&shifted);
            remaining -= 1;
        }
        if remaining > 0 {
            r = r.scalar_mul(&lc_g.pow(remaining));
        }
        r
    }

    /// `(quotient, multiplier)` such that `multiplier * self = quotient *
    /// divisor + pseudo_rem(self, divisor)`.
    pub fn pseudo_div(&self, divisor: &Self) -> (Self, C) {
        assert!(!divisor.is_zero(), "pseudo-division by the zero polynomial");
        let dg = divisor.degree_checked();
        let df = match self.degree() {
            Some(d) => d,
            None => return (Self::zero(self.main_var.clone()), C::one()),
        };
        if df < dg {
            return (Self::zero(self.main_var.clone()), C::one());
        }
        let lc_g = divisor.leading_coeff();
        let mut r = self.clone();
        let mut quotient = vec![C::zero(); df - dg + 1];
        let mut multiplier = C::one();
        loop {
            let dr = match r.degree() {
                Some(d) if d >= dg => d,
                _ => break,
            };
            let lc_r = r.leading_coeff();
            quotient = quotient.iter().map(|q| q.mul(&lc_g)).collect();
            quotient[dr - dg] = quotient[dr - dg].add(&lc_r);
            multiplier = multiplier.mul(&lc_g);
            let scaled_r = r.scalar_mul(&lc_g);
            let shifted = divisor.scalar_mul(&lc_r).shift(dr - dg);
            r = scaled_r.sub(&shifted);
        }
        (Self::from_coeffs(self.main_var.clone(), quotient), multiplier)
    }

    /// Number of sign changes between adjacent non-zero coefficients,
    /// ignoring zeros (Descartes'/Sturm-style sign-variation count).
    pub fn sign_variation_count(&self) -> usize
    where
        C: OrderedRing,
    {
        let mut last_sign = 0;
        let mut count = 0;
        for c in &self.coeffs {
            let s = c.signum();
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
}

impl<C: EuclideanRing> UnivariatePolynomial<C> {
    /// Classical division with remainder. For field coefficients this
    /// always terminates with `deg(remainder) < deg(divisor)`; for integral
    /// coefficients it stops as soon as a leading-coefficient division is
    /// inexact, leaving a possibly-larger-degree remainder that the caller
    /// is responsible for interpreting.
    pub fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        if divisor.is_zero() {
            return None;
        }
        if self.is_zero() {
            return Some((Self::zero(self.main_var.clone()), Self::zero(self.main_var.clone())));
        }
        let df = self.degree_checked();
        let dg = divisor.degree_checked();
        if df < dg {
            return Some((Self::zero(self.main_var.clone()), self.clone()));
        }
        let lc_g = divisor.leading_coeff();
        let mut remainder = self.coeffs.clone();
        let mut quotient = vec![C::zero(); df - dg + 1];
        for i in (0..=(df - dg)).rev() {
            let idx = i + dg;
            let rem_coeff = remainder[idx].clone();
            let (q, r) = rem_coeff.div_rem(&lc_g);
            if !r.is_zero() {
                break;
            }
            quotient[i] = q.clone();
            for (j, d) in divisor.coeffs.iter().enumerate() {
                remainder[i + j] = remainder[i + j].sub(&q.mul(d));
            }
        }
        Some((Self::from_coeffs(self.main_var.clone(), quotient), Self::from_coeffs(self.main_var.clone(), remainder)))
    }

    /// GCD of coefficients (1 for a field realized as an `EuclideanRing`
    /// where `gcd` of any non-zero pair is a unit).
    pub fn content(&self) -> C {
        if self.coeffs.is_empty() {
            return C::zero();
        }
        let mut g = self.coeffs[0].abs();
        for c in &self.coeffs[1..] {
            g = g.gcd(&c.abs());
            if g.is_one() {
                break;
            }
        }
        g
    }

    pub fn primitive_part(&self) -> Self {
        let c = self.content();
        if c.is_zero() || c.is_one() {
            return self.clone();
        }
        Self::from_coeffs(self.main_var.clone(), self.coeffs.iter().map(|x| x.div_rem(&c).0).collect())
    }

    /// Primitive-Euclidean GCD: strip contents, run the pseudo-remainder
    /// sequence taking primitive parts at each step, then reintroduce
    /// `gcd(content(a), content(b))`.
    pub fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.primitive_part();
        }
        if other.is_zero() {
            return self.primitive_part();
        }
        let content_gcd = self.content().gcd(&other.content());
        let mut a = self.primitive_part();
        let mut b = other.primitive_part();
        while !b.is_zero() {
            let r = a.pseudo_rem(&b);
            a = b;
            b = if r.is_zero() { r } else { r.primitive_part() };
        }
        a.scalar_mul(&content_gcd)
    }
}

impl<C: FieldRing> UnivariatePolynomial<C> {
    pub fn is_monic(&self) -> bool {
        self.leading_coeff().is_one()
    }

    /// Scales by the reciprocal of the leading coefficient.
    pub fn unit_normalize(&self) -> Self {
        if self.is_zero() || self.is_monic() {
            return self.clone();
        }
        let inv = self.leading_coeff().inv().expect("non-zero leading coefficient is invertible in a field");
        self.scalar_mul(&inv)
    }

    /// Bezout recurrence: `g = s*a + t*b`, `g` monic.
    pub fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let mut old_r = self.clone();
        let mut r = other.clone();
        let mut old_s = Self::constant(self.main_var.clone(), C::one());
        let mut s = Self::zero(self.main_var.clone());
        let mut old_t = Self::zero(self.main_var.clone());
        let mut t = Self::constant(self.main_var.clone(), C::one());

        while !r.is_zero() {
            let (q, _) = old_r.div_rem(&r).expect("field division never has a zero divisor here");
            let new_r = old_r.sub(&q.mul(&r));
            old_r = std::mem::replace(&mut r, new_r);
            let new_s = old_s.sub(&q.mul(&s));
            old_s = std::mem::replace(&mut s, new_s);
            let new_t = old_t.sub(&q.mul(&t));
            old_t = std::mem::replace(&mut t, new_t);
        }
        if old_r.is_zero() {
            return (old_r, old_s, old_t);
        }
        let lc = old_r.leading_coeff();
        let inv = lc.inv().expect("non-zero leading coefficient is invertible in a field");
        (old_r.scalar_mul(&inv), old_s.scalar_mul(&inv), old_t.scalar_mul(&inv))
    }
}

impl<C: FieldRing> UnivariatePolynomial<C> {
    /// Cauchy's bound: `1 + max(|a_i|) / |a_d|`, `i < d`.
    pub fn cauchy_bound(&self) -> C {
        assert!(!self.is_zero(), "root bound of the zero polynomial");
        let d = self.degree_checked();
        let lc = self.leading_coeff();
        let max_ratio = self.coeffs[..d]
            .iter()
            .map(|c| c.abs().div(&lc.abs()).expect("non-zero leading coefficient"))
            .fold(C::zero(), |acc, v| if v > acc { v } else { acc });
        C::one().add(&max_ratio)
    }

    /// Hirst-Macey's bound: `max(1, (sum|a_i|) / |a_d|)`, `i < d`.
    pub fn hirst_macey_bound(&self) -> C {
        assert!(!self.is_zero(), "root bound of the zero polynomial");
        let d = self.degree_checked();
        let lc = self.leading_coeff();
        let sum = self.coeffs[..d].iter().fold(C::zero(), |acc, c| acc.add(&c.abs()));
        let ratio = sum.div(&lc.abs()).expect("non-zero leading coefficient");
        if ratio > C::one() {
            ratio
        } else {
            C::one()
        }
    }

    /// Lagrange's bound: `max(|a_{d-1}/a_d|, |a_{d-2}/a_d|^(1/2), ...,
    /// |a_0/a_d|^(1/d))`, doubled. Since a field's `to_i64`-based integer
    /// root extraction isn't generally available, each `k`-th root is
    /// approximated from above by doubling a starting guess of `1` until
    /// its `k`-th power no longer exceeds the term, which is exact whenever
    /// the true root is a ring element expressible by doubling (the
    /// doubling search is a standard way to get a valid --- if not tight
    /// --- upper bound without a general `k`-th-root operation on `C`).
    pub fn lagrange_bound(&self) -> C {
        assert!(!self.is_zero(), "root bound of the zero polynomial");
        let d = self.degree_checked();
        if d == 0 {
            return C::one();
        }
        let lc = self.leading_coeff();
        let mut max_term = C::zero();
        for (i, a) in self.coeffs[..d].iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            let ratio = a.abs().div(&lc.abs()).expect("non-zero leading coefficient");
            let k = (d - i) as u32;
            let root_bound = kth_root_upper_bound(&ratio, k);
            if root_bound > max_term {
                max_term = root_bound;
            }
        }
        max_term.add(&max_term)
    }
}

/// Smallest power-of-two-scaled `C` value `b` with `b^k >= value`, found by
/// doubling from `1`. Used only by [`lagrange_bound`](UnivariatePolynomial::lagrange_bound),
/// where any valid upper bound on the `k`-th root suffices.
fn kth_root_upper_bound<C: FieldRing>(value: &C, k: u32) -> C {
    if value.is_zero() || k == 0 {
        return C::zero();
    }
    let mut bound = C::one();
    while bound.pow(k) < *value {
        bound = bound.add(&bound);
    }
    bound
}

impl<C: CoefficientRing + PartialEq> PartialEq for UnivariatePolynomial<C> {
    fn eq(&self, other: &Self) -> bool {
        self.main_var == other.main_var && self.coeffs == other.coeffs
    }
}

impl<C: CoefficientRing + fmt::Display> fmt::Display for UnivariatePolynomial<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeffs.is_empty() {
            return write!(f, "0");
        }
        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match i {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}\u{b7}{}", self.main_var)?,
                _ => write!(f, "{c}\u{b7}{}^{i}", self.main_var)?,
            }
        }
        Ok(())
    }
}

macro_rules! impl_ops {
    ($ty:ident) => {
        impl<C: CoefficientRing> Add for $ty<C> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                $ty::add(&self, &rhs)
            }
        }
        impl<C: CoefficientRing> Add for &$ty<C> {
            type Output = $ty<C>;
            fn add(self, rhs: Self) -> $ty<C> {
                $ty::add(self, rhs)
            }
        }
        impl<C: CoefficientRing> Sub for $ty<C> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                $ty::sub(&self, &rhs)
            }
        }
        impl<C: CoefficientRing> Sub for &$ty<C> {
            type Output = $ty<C>;
            fn sub(self, rhs: Self) -> $ty<C> {
                $ty::sub(self, rhs)
            }
        }
        impl<C: CoefficientRing> Mul for $ty<C> {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                $ty::mul(&self, &rhs)
            }
        }
        impl<C: CoefficientRing> Mul for &$ty<C> {
            type Output = $ty<C>;
            fn mul(self, rhs: Self) -> $ty<C> {
                $ty::mul(self, rhs)
            }
        }
        impl<C: CoefficientRing> Neg for $ty<C> {
            type Output = Self;
            fn neg(self) -> Self {
                self.negate()
            }
        }
        impl<C: CoefficientRing> Neg for &$ty<C> {
            type Output = $ty<C>;
            fn neg(self) -> $ty<C> {
                self.negate()
            }
        }
    };
}
impl_ops!(UnivariatePolynomial);
