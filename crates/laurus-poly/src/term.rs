//! The atomic term of a sparse polynomial.

use laurus_rationals::Rational;
use num_traits::Zero;

/// A single `coefficient · X^exponent` contribution.
///
/// Both halves are exact rationals; the exponent may be negative, zero,
/// or fractional. Inside a canonical [`Polynomial`](crate::Polynomial)
/// no term carries a zero coefficient except the identity term of the
/// zero polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Term {
    /// The coefficient.
    pub coefficient: Rational,
    /// The exponent.
    pub exponent: Rational,
}

impl Term {
    /// Creates a term.
    #[must_use]
    pub fn new(coefficient: Rational, exponent: Rational) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// The identity term `0·X^0`, the sole representation of the zero
    /// polynomial.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(Rational::zero(), Rational::zero())
    }

    /// Returns true if the coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }
}
