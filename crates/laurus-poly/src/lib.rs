//! # laurus-poly
//!
//! Sparse univariate polynomials with exact rational coefficients and
//! rational exponents.
//!
//! Unlike a dense coefficient vector, a polynomial here is a canonical
//! sparse sequence of `(coefficient, exponent)` terms, and exponents
//! may be negative or fractional: `5X^-3 + X^1/2 + 2` is a value, not
//! an error. The crate provides:
//!
//! - Construction from raw term pairs or dense coefficient lists, with
//!   collection of same-exponent terms and validation
//! - Linear-time addition/subtraction by sorted merge
//! - Multiplication by pairwise term products with collection
//! - Exact derivative and antiderivative (with `X^-1` rejection)
//! - Degree by dominant absolute exponent
//! - Deterministic outside-in display (`8X^3 + 5X^-2 + 1/2X`)
//!
//! All arithmetic is exact; coefficients only get rounded to a bounded
//! denominator when rendered.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod calculus;
mod display;

pub mod error;
pub mod polynomial;
pub mod random;
pub mod term;

#[cfg(test)]
mod proptests;

pub use error::{IntegrationError, ValidationError};
pub use polynomial::Polynomial;
pub use random::random_polynomial;
pub use term::Term;
