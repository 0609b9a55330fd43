//! Arbitrary precision rational numbers.
//!
//! This module provides exact rational arithmetic. Conversions from
//! floating point are exact (every finite `f64` denotes a binary
//! rational); rounding only happens through the explicit
//! [`Rational::limit_denominator`] operation.

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{Float, One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::Integer;

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// A negative denominator moves its sign onto the numerator, so
    /// `new(1, -2)` equals `new(-1, 2)`.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        let numerator = if denominator.is_negative() {
            -numerator
        } else {
            numerator
        };
        Self(RBig::from_parts(
            numerator.into_inner(),
            denominator.into_inner().unsigned_abs(),
        ))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Converts a finite `f64` to the exact rational it denotes.
    ///
    /// Every finite float is a binary rational, so this conversion is
    /// exact: `from_f64(0.5)` is 1/2, while `from_f64(0.1)` is the
    /// dyadic 3602879701896397/36028797018963968 rather than 1/10.
    /// Pair with [`Rational::limit_denominator`] to recover a short
    /// decimal-friendly fraction for display.
    ///
    /// Returns `None` if the value is NaN or infinite.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let (mantissa, exponent, sign) = value.integer_decode();
        let mut mantissa = IBig::from(mantissa);
        if sign < 0 {
            mantissa = -mantissa;
        }
        let rational = if exponent >= 0 {
            RBig::from(mantissa * IBig::from(2).pow(exponent as usize))
        } else {
            RBig::from_parts(mantissa, UBig::from(2u32).pow((-exponent) as usize))
        };
        Some(Self(rational))
    }

    /// Returns the closest rational whose denominator is at most
    /// `max_denominator`, preferring the smaller-denominator candidate
    /// on ties.
    ///
    /// Values already within the bound are returned unchanged. This is
    /// a display aid: `from_f64(6.3)` carries a 2^50 denominator, and
    /// limiting it to 100 recovers 63/10.
    ///
    /// # Panics
    ///
    /// Panics if `max_denominator` is zero.
    #[must_use]
    pub fn limit_denominator(&self, max_denominator: u64) -> Self {
        assert!(max_denominator >= 1, "max_denominator must be at least 1");
        let cap = IBig::from(max_denominator);
        if IBig::from(self.0.denominator().clone()) <= cap {
            return self.clone();
        }

        // Walk the continued fraction of |self| until the next
        // convergent's denominator would pass the cap, then pick the
        // closer of the last convergent and the best semiconvergent.
        let value = self.0.clone().abs();
        let mut n = value.numerator().clone();
        let mut d = IBig::from(value.denominator().clone());
        let (mut p0, mut q0) = (IBig::ZERO, IBig::ONE);
        let (mut p1, mut q1) = (IBig::ONE, IBig::ZERO);
        loop {
            let a = &n / &d;
            let q2 = &q0 + &a * &q1;
            if q2 > cap {
                break;
            }
            let p2 = &p0 + &a * &p1;
            p0 = p1;
            p1 = p2;
            q0 = q1;
            q1 = q2;
            let r = &n - &a * &d;
            n = d;
            d = r;
        }

        let k = (&cap - &q0) / &q1;
        let semiconvergent = RBig::from_parts(
            &p0 + &k * &p1,
            (&q0 + &k * &q1).unsigned_abs(),
        );
        let convergent = RBig::from_parts(p1, q1.unsigned_abs());
        let best = if (&convergent - &value).abs() <= (&semiconvergent - &value).abs() {
            convergent
        } else {
            semiconvergent
        };
        if self.is_negative() {
            Self(-best)
        } else {
            Self(best)
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "cannot take reciprocal of zero");
        Self(self.0.clone().inv())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns the inner `dashu::RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational(&self.0 * &rhs.0)
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Div<&Rational> for Rational {
    type Output = Self;

    fn div(self, rhs: &Rational) -> Self::Output {
        Self(self.0 / &rhs.0)
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Self::Output {
        Rational(&self.0 / &rhs.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-&self.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::new(n as i64))
    }
}
