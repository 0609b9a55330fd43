//! Error types for polynomial construction and calculus.

use thiserror::Error;

/// Errors from turning raw input into a canonical polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A raw `(coefficient, exponent)` pair contained a non-finite
    /// number.
    #[error("term {index} is not a pair of finite numbers")]
    MalformedTerm {
        /// Position of the offending pair in the input.
        index: usize,
    },

    /// A dense coefficient entry was not a finite number.
    #[error("entry {index} of the coefficient list is not a finite number")]
    NonNumericEntry {
        /// Position of the offending entry in the input.
        index: usize,
    },

    /// Every supplied coefficient was zero.
    #[error("at least one non-zero coefficient is required")]
    NoNonZeroCoefficient,
}

/// Errors from the calculus operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IntegrationError {
    /// The antiderivative of `c·X^-1` is logarithmic and has no
    /// polynomial form.
    #[error("cannot integrate a term with exponent -1")]
    InverseTerm,
}
