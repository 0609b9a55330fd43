//! Derivative and antiderivative.
//!
//! Both operators work term by term. Differentiation shifts every
//! exponent down by one, which keeps an already-sorted sequence sorted;
//! integration shifts up by one and then places the integration
//! constant at its sorted position with a lower-bound search instead of
//! re-sorting.

use laurus_rationals::Rational;
use num_traits::{One, Zero};

use crate::error::IntegrationError;
use crate::polynomial::Polynomial;
use crate::term::Term;

impl Polynomial {
    /// Returns the derivative.
    ///
    /// Each term `(c, e)` with `e ≠ 0` becomes `(c·e, e-1)`; constants
    /// vanish. Differentiating a constant (or the zero polynomial)
    /// gives the zero polynomial.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let one = Rational::one();
        let terms: Vec<Term> = self
            .terms()
            .iter()
            .filter(|t| !t.exponent.is_zero())
            .map(|t| {
                let coefficient = &t.coefficient * &t.exponent;
                let exponent = &t.exponent - &one;
                Term::new(coefficient, exponent)
            })
            .collect();
        Self::from_collected(terms)
    }

    /// Differentiates in place.
    pub fn differentiate(&mut self) {
        *self = self.derivative();
    }

    /// Returns the antiderivative with the given integration constant.
    ///
    /// Each term `(c, e)` becomes `(c/(e+1), e+1)`, then a non-zero
    /// constant is inserted at the lower bound for exponent `0`
    /// (summed into an existing exponent-zero term rather than
    /// duplicated). Integrating the zero polynomial gives the constant
    /// polynomial.
    ///
    /// # Errors
    ///
    /// `InverseTerm` if any term has exponent exactly `-1`. Every
    /// exponent is checked before anything is built, so nothing is
    /// committed on failure.
    pub fn integral(&self, constant: &Rational) -> Result<Self, IntegrationError> {
        let minus_one = -Rational::one();
        if self.terms().iter().any(|t| t.exponent == minus_one) {
            return Err(IntegrationError::InverseTerm);
        }
        if self.is_zero() {
            return Ok(Self::constant(constant.clone()));
        }

        let one = Rational::one();
        let mut terms: Vec<Term> = self
            .terms()
            .iter()
            .map(|t| {
                let raised = &t.exponent + &one;
                let coefficient = &t.coefficient / &raised;
                Term::new(coefficient, raised)
            })
            .collect();

        if !constant.is_zero() {
            let zero = Rational::zero();
            let index = terms.partition_point(|t| t.exponent < zero);
            if index < terms.len() && terms[index].exponent.is_zero() {
                let sum = &terms[index].coefficient + constant;
                if sum.is_zero() {
                    terms.remove(index);
                } else {
                    terms[index].coefficient = sum;
                }
            } else {
                terms.insert(index, Term::new(constant.clone(), zero));
            }
        }
        Ok(Self::from_collected(terms))
    }

    /// Integrates in place; on failure the receiver is unchanged.
    ///
    /// # Errors
    ///
    /// `InverseTerm` if any term has exponent exactly `-1`.
    pub fn integrate(&mut self, constant: &Rational) -> Result<(), IntegrationError> {
        *self = self.integral(constant)?;
        Ok(())
    }
}
