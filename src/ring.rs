//! Coefficient-ring capability traits: the operations a polynomial
//! coefficient type must support, layered from a bare commutative ring up
//! through ordered rings, Euclidean domains, and fields. Algorithms that
//! need more than the base `CoefficientRing` capability (exact division, a
//! total order, denominator extraction) state that requirement in their own
//! bound rather than this module inventing a kitchen-sink trait.

use std::fmt::Debug;
use std::sync::Mutex;

#[cfg(feature = "bigint")]
use num_bigint::BigInt;
#[cfg(feature = "bigint")]
use num_rational::BigRational;
#[cfg(feature = "bigint")]
use num_traits::{One, Signed, Zero};

/// A commutative ring with identity: the minimal capability every polynomial
/// coefficient type must provide.
pub trait CoefficientRing: Sized + Clone + PartialEq + Debug {
    fn zero() -> Self;
    fn one() -> Self;
    fn is_zero(&self) -> bool;
    fn is_one(&self) -> bool;

    fn add(&self, other: &Self) -> Self;
    fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }
    fn mul(&self, other: &Self) -> Self;
    fn neg(&self) -> Self;

    /// Raise to a non-negative integer power by repeated squaring.
    fn pow(&self, mut exp: u32) -> Self {
        let mut base = self.clone();
        let mut acc = Self::one();
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc.mul(&base);
            }
            base = base.mul(&base);
            exp >>= 1;
        }
        acc
    }

    /// Multiply by a small non-negative integer (used by derivation, which
    /// multiplies a coefficient by an exponent).
    fn mul_small(&self, n: u64) -> Self {
        let mut acc = Self::zero();
        let mut base = self.clone();
        let mut n = n;
        while n > 0 {
            if n & 1 == 1 {
                acc = acc.add(&base);
            }
            base = base.add(&base);
            n >>= 1;
        }
        acc
    }

    /// Whether this ring has characteristic zero. Yun's square-free
    /// factorization algorithm relies on `gcd(p, p') == 1` for a square-free
    /// `p`, which breaks down in positive characteristic (`p' = 0` whenever
    /// every exponent is a multiple of the characteristic); every ring this
    /// kernel instantiates (`BigInt`, `BigRational`) is characteristic zero,
    /// so the default is `true`. A finite-field coefficient type plugged in
    /// later would override this to `false`.
    fn is_characteristic_zero() -> bool {
        true
    }
}

/// A ring with a total order, needed by interval arithmetic and sign-based
/// algorithms (Descartes' rule, real-root isolation).
pub trait OrderedRing: CoefficientRing + PartialOrd {
    /// -1, 0, or 1.
    fn signum(&self) -> i32 {
        if self.is_zero() {
            0
        } else if *self < Self::zero() {
            -1
        } else {
            1
        }
    }
    fn abs(&self) -> Self {
        if self.signum() < 0 {
            self.neg()
        } else {
            self.clone()
        }
    }
}

/// A Euclidean domain: a ring with a division algorithm and a derived GCD.
/// The primitive-Euclidean GCD machinery is built on top of this.
pub trait EuclideanRing: OrderedRing {
    /// `(quotient, remainder)` such that `self == quotient*other + remainder`
    /// and `remainder` is "smaller" than `other` in the domain's Euclidean
    /// function (absolute value for integers).
    fn div_rem(&self, other: &Self) -> (Self, Self);

    fn gcd(&self, other: &Self) -> Self {
        let mut a = self.abs();
        let mut b = other.abs();
        while !b.is_zero() {
            let (_, r) = a.div_rem(&b);
            a = b;
            b = r.abs();
        }
        a
    }

    fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        let (q, _) = self.abs().div_rem(&g);
        q.mul(&other.abs())
    }

    /// Best-effort conversion to a machine integer, used by algorithms that
    /// only need small exponents/bounds (Cauchy's bound, sign-variation
    /// counting never needs this, but degree bookkeeping does).
    fn to_i64(&self) -> Option<i64>;

    fn from_i64(n: i64) -> Self;
}

/// A field: every non-zero element is invertible. Division-based algorithms
/// (classical long division, Bezout's identity, unit-normalization) require
/// this capability explicitly rather than relying on `EuclideanRing` alone —
/// integral coefficients only support division without remainder.
pub trait FieldRing: EuclideanRing {
    fn inv(&self) -> Option<Self>;

    fn div(&self, other: &Self) -> Option<Self> {
        other.inv().map(|i| self.mul(&i))
    }

    /// The denominator of this element when viewed as a fraction in lowest
    /// terms (1 for a field that is "secretly" an integral domain presented
    /// as a field, the rational's actual denominator for `BigRational`).
    /// Used by content/primitive-part extraction over rationals (clearing
    /// denominators to work over the underlying integer ring).
    fn denominator(&self) -> Self {
        Self::one()
    }
}

#[cfg(feature = "bigint")]
impl CoefficientRing for BigInt {
    fn zero() -> Self {
        <BigInt as Zero>::zero()
    }
    fn one() -> Self {
        <BigInt as One>::one()
    }
    fn is_zero(&self) -> bool {
        <BigInt as Zero>::is_zero(self)
    }
    fn is_one(&self) -> bool {
        <BigInt as One>::is_one(self)
    }
    fn add(&self, other: &Self) -> Self {
        self + other
    }
    fn sub(&self, other: &Self) -> Self {
        self - other
    }
    fn mul(&self, other: &Self) -> Self {
        self * other
    }
    fn neg(&self) -> Self {
        -self.clone()
    }
}

#[cfg(feature = "bigint")]
impl OrderedRing for BigInt {
    fn signum(&self) -> i32 {
        use num_bigint::Sign;
        match self.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }
    fn abs(&self) -> Self {
        Signed::abs(self)
    }
}

#[cfg(feature = "bigint")]
impl EuclideanRing for BigInt {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        use num_integer::Integer;
        self.div_rem(other)
    }
    fn to_i64(&self) -> Option<i64> {
        use num_traits::ToPrimitive;
        self.to_i64()
    }
    fn from_i64(n: i64) -> Self {
        BigInt::from(n)
    }
}

#[cfg(feature = "bigint")]
impl CoefficientRing for BigRational {
    fn zero() -> Self {
        <BigRational as Zero>::zero()
    }
    fn one() -> Self {
        <BigRational as One>::one()
    }
    fn is_zero(&self) -> bool {
        <BigRational as Zero>::is_zero(self)
    }
    fn is_one(&self) -> bool {
        <BigRational as One>::is_one(self)
    }
    fn add(&self, other: &Self) -> Self {
        self + other
    }
    fn sub(&self, other: &Self) -> Self {
        self - other
    }
    fn mul(&self, other: &Self) -> Self {
        self * other
    }
    fn neg(&self) -> Self {
        -self.clone()
    }
}

#[cfg(feature = "bigint")]
impl OrderedRing for BigRational {
    fn abs(&self) -> Self {
        Signed::abs(self)
    }
}

#[cfg(feature = "bigint")]
impl EuclideanRing for BigRational {
    /// A field trivially satisfies the Euclidean-domain contract: every
    /// non-zero divisor divides exactly, so the remainder is always zero.
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        (self / other, <BigRational as Zero>::zero())
    }
    fn to_i64(&self) -> Option<i64> {
        use num_traits::ToPrimitive;
        if self.is_integer() {
            self.to_integer().to_i64()
        } else {
            None
        }
    }
    fn from_i64(n: i64) -> Self {
        BigRational::from_integer(BigInt::from(n))
    }
}

#[cfg(feature = "bigint")]
impl FieldRing for BigRational {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.recip())
        }
    }
    fn denominator(&self) -> Self {
        BigRational::from_integer(self.denom().clone())
    }
}

/// Per-ring-type scratch-slot storage for the term-addition manager.
///
/// Rust cannot declare a single `static` generic over `R`, so each concrete
/// coefficient type registers its own process-wide free list here: one
/// instance per ring rather than one global instance.
pub trait RingScratchPool: CoefficientRing + 'static {
    #[doc(hidden)]
    fn scratch_free_list() -> &'static Mutex<Vec<Vec<Option<Self>>>>;
}

/// Declares the process-wide scratch free list for one concrete coefficient
/// type. Invoked once per ring instantiated by this crate (`BigInt`,
/// `BigRational`); additional coefficient types plugging into the kernel
/// must do the same to use the term-addition manager.
#[macro_export]
macro_rules! impl_ring_scratch_pool {
    ($ty:ty) => {
        impl $crate::ring::RingScratchPool for $ty {
            fn scratch_free_list() -> &'static std::sync::Mutex<Vec<Vec<Option<$ty>>>> {
                static POOL: std::sync::OnceLock<std::sync::Mutex<Vec<Vec<Option<$ty>>>>> =
                    std::sync::OnceLock::new();
                POOL.get_or_init(|| std::sync::Mutex::new(Vec::new()))
            }
        }
    };
}

#[cfg(feature = "bigint")]
impl_ring_scratch_pool!(BigInt);
#[cfg(feature = "bigint")]
impl_ring_scratch_pool!(BigRational);
