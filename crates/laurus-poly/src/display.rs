//! Canonical string rendering.
//!
//! Terms are rendered outside-in by absolute exponent: two pointers
//! start at both ends of the ascending sequence and the side with the
//! larger `|exponent|` is emitted first; on ties the high end precedes
//! the low end and both pointers move inward. The rendering is
//! deterministic and meant for display and tests, not for parsing back.

use std::cmp::Ordering;
use std::fmt;

use num_traits::{One, Zero};

use laurus_rationals::Rational;

use crate::polynomial::Polynomial;
use crate::term::Term;

// Denominator cap for displayed values. Arithmetic stays exact; only
// the rendering is rounded, which turns float-derived coefficients
// like 7093169413108531/2^50 back into 63/10.
const DISPLAY_DENOMINATOR_CAP: u64 = 100;

fn fraction(value: &Rational) -> String {
    value.limit_denominator(DISPLAY_DENOMINATOR_CAP).to_string()
}

// Renders one term: a sign token, then the coefficient magnitude and
// the power. The first emitted term folds " + " away entirely and
// " - " down to a bare "-".
fn push_term(out: &mut String, term: &Term) {
    let first = out.is_empty();
    let negative = term.coefficient.is_negative();
    out.push_str(match (first, negative) {
        (true, false) => "",
        (true, true) => "-",
        (false, false) => " + ",
        (false, true) => " - ",
    });

    let magnitude = term.coefficient.abs();
    if term.exponent.is_zero() {
        out.push_str(&fraction(&magnitude));
    } else if term.exponent.is_one() {
        // only an exact coefficient of 1 is elided at power one; -1
        // keeps its digit and renders as 1X
        if term.coefficient.is_one() {
            out.push('X');
        } else {
            out.push_str(&fraction(&magnitude));
            out.push('X');
        }
    } else {
        if !magnitude.is_one() {
            out.push_str(&fraction(&magnitude));
        }
        out.push_str("X^");
        out.push_str(&fraction(&term.exponent));
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let terms = self.terms();
        let mut out = String::new();
        let mut low = 0;
        let mut high = terms.len() - 1;
        while low <= high {
            if low == high {
                push_term(&mut out, &terms[low]);
                break;
            }
            let low_magnitude = terms[low].exponent.abs();
            let high_magnitude = terms[high].exponent.abs();
            match low_magnitude.cmp(&high_magnitude) {
                Ordering::Greater => {
                    push_term(&mut out, &terms[low]);
                    low += 1;
                }
                Ordering::Less => {
                    push_term(&mut out, &terms[high]);
                    high -= 1;
                }
                Ordering::Equal => {
                    push_term(&mut out, &terms[high]);
                    push_term(&mut out, &terms[low]);
                    low += 1;
                    high -= 1;
                }
            }
        }
        f.write_str(&out)
    }
}
