//! Sparse univariate polynomials with rational exponents.
//!
//! A polynomial is a finite sum of `c·X^e` terms where coefficient and
//! exponent are both exact rationals. Exponents may be negative or
//! fractional, so the representation is a sorted sparse term sequence
//! rather than a dense coefficient vector.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use laurus_rationals::Rational;
use num_traits::Zero;

use crate::error::ValidationError;
use crate::term::Term;

/// A sparse polynomial in one variable, with exact rational
/// coefficients and exponents.
///
/// The term sequence is canonical after every public call:
/// - strictly ascending by exponent,
/// - no two terms share an exponent,
/// - no zero coefficients,
/// - never empty — the zero polynomial is the single term `0·X^0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    /// Canonical term sequence.
    terms: Vec<Term>,
}

impl Polynomial {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: vec![Term::identity()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(value: Rational) -> Self {
        Self::monomial(value, Rational::zero())
    }

    /// Creates the polynomial `coefficient·X^exponent`, or zero if the
    /// coefficient is zero.
    #[must_use]
    pub fn monomial(coefficient: Rational, exponent: Rational) -> Self {
        if coefficient.is_zero() {
            Self::zero()
        } else {
            Self {
                terms: vec![Term::new(coefficient, exponent)],
            }
        }
    }

    /// Builds a polynomial from raw `(coefficient, exponent)` pairs.
    ///
    /// Same-exponent pairs are collected, zero sums dropped, and the
    /// result sorted. An empty list and the lone pair `(0, 0)` both
    /// give the zero polynomial.
    ///
    /// # Errors
    ///
    /// `MalformedTerm` if a pair contains a NaN or infinite value;
    /// `NoNonZeroCoefficient` if the list is non-empty but every
    /// coefficient is explicitly zero.
    pub fn from_terms(raw: &[(f64, f64)]) -> Result<Self, ValidationError> {
        let mut pairs = Vec::with_capacity(raw.len());
        for (index, &(coefficient, exponent)) in raw.iter().enumerate() {
            let coefficient = Rational::from_f64(coefficient)
                .ok_or(ValidationError::MalformedTerm { index })?;
            let exponent = Rational::from_f64(exponent)
                .ok_or(ValidationError::MalformedTerm { index })?;
            pairs.push((coefficient, exponent));
        }
        Self::from_rational_terms(pairs)
    }

    /// Builds a polynomial from exact `(coefficient, exponent)` pairs.
    ///
    /// # Errors
    ///
    /// `NoNonZeroCoefficient` if the input is non-empty but every
    /// coefficient is explicitly zero (the lone identity pair `(0, 0)`
    /// is accepted as the zero polynomial).
    pub fn from_rational_terms(
        raw: impl IntoIterator<Item = (Rational, Rational)>,
    ) -> Result<Self, ValidationError> {
        let raw: Vec<(Rational, Rational)> = raw.into_iter().collect();
        if raw.is_empty() {
            return Ok(Self::zero());
        }
        if raw.iter().all(|(coefficient, _)| coefficient.is_zero()) {
            // a lone 0·X^0 names the zero polynomial; any other
            // all-zero list is a caller mistake
            if raw.len() == 1 && raw[0].1.is_zero() {
                return Ok(Self::zero());
            }
            return Err(ValidationError::NoNonZeroCoefficient);
        }
        Ok(Self::seal(raw))
    }

    /// Builds a polynomial from a dense coefficient list, entry `i`
    /// becoming the term `(value, i)`. Zero entries are dropped; an
    /// all-zero or empty list gives the zero polynomial.
    ///
    /// # Errors
    ///
    /// `NonNumericEntry` if an entry is NaN or infinite.
    pub fn from_dense(entries: &[f64]) -> Result<Self, ValidationError> {
        let mut terms = Vec::new();
        for (index, &entry) in entries.iter().enumerate() {
            let coefficient = Rational::from_f64(entry)
                .ok_or(ValidationError::NonNumericEntry { index })?;
            if coefficient.is_zero() {
                continue;
            }
            terms.push(Term::new(coefficient, Rational::from(index as i64)));
        }
        Ok(Self::from_collected(terms))
    }

    // The canonicalization funnel: collect by exponent, drop zero
    // coefficients and zero sums, sort ascending, collapse to the
    // identity when nothing survives.
    fn seal(raw: Vec<(Rational, Rational)>) -> Self {
        let mut collected: BTreeMap<Rational, Rational> = BTreeMap::new();
        for (coefficient, exponent) in raw {
            if coefficient.is_zero() {
                continue;
            }
            collected
                .entry(exponent)
                .and_modify(|sum: &mut Rational| *sum = sum.clone() + coefficient.clone())
                .or_insert(coefficient);
        }

        let terms: Vec<Term> = collected
            .into_iter()
            .filter(|(_, sum)| !sum.is_zero())
            .map(|(exponent, coefficient)| Term::new(coefficient, exponent))
            .collect();
        Self::from_collected(terms)
    }

    // Fast path for sequences that are already collected, sorted, and
    // free of zero coefficients.
    pub(crate) fn from_collected(terms: Vec<Term>) -> Self {
        debug_assert!(terms.windows(2).all(|w| w[0].exponent < w[1].exponent));
        debug_assert!(terms.iter().all(|t| !t.is_zero()));
        if terms.is_empty() {
            Self::zero()
        } else {
            Self { terms }
        }
    }

    /// Returns the canonical term sequence, ascending by exponent.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the number of terms (the zero polynomial has one).
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.len() == 1 && self.terms[0].is_zero()
    }

    /// Returns the dominant exponent: of the lowest and highest
    /// exponents present, the one with the larger absolute value, ties
    /// going to the highest.
    ///
    /// With negative exponents in play the dominant term can sit at
    /// the low end: the degree of `X^-13 + X^9` is `-13`.
    #[must_use]
    pub fn degree(&self) -> Rational {
        let lowest = &self.terms[0].exponent;
        let highest = &self.terms[self.terms.len() - 1].exponent;
        if highest.abs() >= lowest.abs() {
            highest.clone()
        } else {
            lowest.clone()
        }
    }

    /// Adds two polynomials with a linear-time sorted merge.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        Self::from_collected(merge(&self.terms, &other.terms))
    }

    /// Subtracts `other`: a linear negation pre-pass on the right
    /// operand followed by the same merge as addition.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return other.neg();
        }
        let negated: Vec<Term> = other
            .terms
            .iter()
            .map(|t| Term::new(-&t.coefficient, t.exponent.clone()))
            .collect();
        Self::from_collected(merge(&self.terms, &negated))
    }

    /// Negates every coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        Self {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(-&t.coefficient, t.exponent.clone()))
                .collect(),
        }
    }

    /// Multiplies two polynomials: every pairwise term product
    /// `(c1·c2, e1+e2)` is formed and same-exponent products are
    /// collected, O(|a|·|b|) products in total.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut collected: BTreeMap<Rational, Rational> = BTreeMap::new();
        for a in &self.terms {
            for b in &other.terms {
                let exponent = &a.exponent + &b.exponent;
                let product = &a.coefficient * &b.coefficient;
                collected
                    .entry(exponent)
                    .and_modify(|sum: &mut Rational| *sum = sum.clone() + product.clone())
                    .or_insert(product);
            }
        }

        let terms: Vec<Term> = collected
            .into_iter()
            .filter(|(_, sum)| !sum.is_zero())
            .map(|(exponent, coefficient)| Term::new(coefficient, exponent))
            .collect();
        Self::from_collected(terms)
    }

    /// Multiplies every coefficient by `factor`; scaling by zero gives
    /// the zero polynomial.
    #[must_use]
    pub fn scale(&self, factor: &Rational) -> Self {
        if self.is_zero() || factor.is_zero() {
            return Self::zero();
        }
        Self {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(&t.coefficient * factor, t.exponent.clone()))
                .collect(),
        }
    }
}

// Two-pointer merge of two canonical term sequences over ascending
// exponents. Equal exponents sum, zero sums are dropped, so the output
// can be empty and callers must identity-collapse it.
fn merge(left: &[Term], right: &[Term]) -> Vec<Term> {
    let mut output = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;
    while i < left.len() && j < right.len() {
        let a = &left[i];
        let b = &right[j];
        match a.exponent.cmp(&b.exponent) {
            Ordering::Equal => {
                let sum = &a.coefficient + &b.coefficient;
                if !sum.is_zero() {
                    output.push(Term::new(sum, a.exponent.clone()));
                }
                i += 1;
                j += 1;
            }
            Ordering::Less => {
                output.push(a.clone());
                i += 1;
            }
            Ordering::Greater => {
                output.push(b.clone());
                j += 1;
            }
        }
    }
    output.extend_from_slice(&left[i..]);
    output.extend_from_slice(&right[j..]);
    output
}

// Arithmetic operators. The borrowed forms are the primitives; owned
// forms delegate to them.
impl Add for Polynomial {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(&self, &rhs)
    }
}

impl Add<&Polynomial> for Polynomial {
    type Output = Self;

    fn add(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::add(&self, rhs)
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl Sub for Polynomial {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(&self, &rhs)
    }
}

impl Sub<&Polynomial> for Polynomial {
    type Output = Self;

    fn sub(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::sub(&self, rhs)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(self, rhs)
    }
}

impl Mul for Polynomial {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(&self, &rhs)
    }
}

impl Mul<&Polynomial> for Polynomial {
    type Output = Self;

    fn mul(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::mul(&self, rhs)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(self, rhs)
    }
}

impl Mul<Rational> for Polynomial {
    type Output = Self;

    fn mul(self, factor: Rational) -> Self::Output {
        self.scale(&factor)
    }
}

impl Mul<&Rational> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, factor: &Rational) -> Self::Output {
        self.scale(factor)
    }
}

impl Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Polynomial::neg(&self)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}

// In-place forms replace the owned term sequence wholesale.
impl AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) {
        *self = Polynomial::add(self, rhs);
    }
}

impl AddAssign for Polynomial {
    fn add_assign(&mut self, rhs: Polynomial) {
        *self += &rhs;
    }
}

impl SubAssign<&Polynomial> for Polynomial {
    fn sub_assign(&mut self, rhs: &Polynomial) {
        *self = Polynomial::sub(self, rhs);
    }
}

impl SubAssign for Polynomial {
    fn sub_assign(&mut self, rhs: Polynomial) {
        *self -= &rhs;
    }
}

impl MulAssign<&Polynomial> for Polynomial {
    fn mul_assign(&mut self, rhs: &Polynomial) {
        *self = Polynomial::mul(self, rhs);
    }
}

impl MulAssign for Polynomial {
    fn mul_assign(&mut self, rhs: Polynomial) {
        *self *= &rhs;
    }
}

impl MulAssign<&Rational> for Polynomial {
    fn mul_assign(&mut self, factor: &Rational) {
        *self = self.scale(factor);
    }
}

impl MulAssign<Rational> for Polynomial {
    fn mul_assign(&mut self, factor: Rational) {
        *self *= &factor;
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
