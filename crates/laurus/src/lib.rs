//! # Laurus
//!
//! Exact Laurent-style polynomial arithmetic in Rust.
//!
//! Laurus models a univariate polynomial as a canonical sparse sequence
//! of `(coefficient, exponent)` terms over arbitrary precision
//! rationals. Exponents may be negative or fractional, so values like
//! `5X^-2 + 1/2X` are first-class.
//!
//! ## Features
//!
//! - **Exact arithmetic**: arbitrary precision rational coefficients
//!   and exponents, no floating point drift
//! - **Canonical form**: collected, sorted, zero-free term sequences
//!   after every operation
//! - **Laurent exponents**: negative and fractional powers
//! - **Calculus**: exact derivative and antiderivative
//! - **Deterministic display**: outside-in rendering by dominant power
//!
//! ## Quick Start
//!
//! ```rust
//! use laurus::prelude::*;
//!
//! let p = Polynomial::from_terms(&[(2.0, 3.0), (5.0, -2.0), (0.5, 1.0), (6.0, 3.0)])?;
//! assert_eq!(p.to_string(), "8X^3 + 5X^-2 + 1/2X");
//! assert_eq!(p.degree(), Rational::from(3));
//! # Ok::<(), laurus::poly::error::ValidationError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use laurus_poly as poly;
pub use laurus_rationals as rationals;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use laurus_poly::{random_polynomial, Polynomial, Term};
    pub use laurus_rationals::{Integer, Rational};
}
