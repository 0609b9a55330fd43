//! # laurus-rationals
//!
//! Arbitrary precision integer and rational arithmetic for Laurus.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`)
//!
//! `Rational` is the coefficient and exponent type of the polynomial
//! crates: every value is stored in lowest terms, arithmetic is exact,
//! and lossy rounding exists only as the explicit
//! [`Rational::limit_denominator`] operation used for display.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
