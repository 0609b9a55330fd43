//! Random polynomial generation for tests and benchmarks.

use laurus_rationals::Rational;
use rand::seq::index;
use rand::Rng;

use crate::polynomial::Polynomial;

/// Generates a polynomial with small positive integer coefficients and
/// distinct non-negative integer exponents.
///
/// `term_count` fixes the number of terms; `None` draws it from
/// `1..=10`. Exponents are sampled without replacement below a bound
/// drawn from `term_count..=20`, so the raw pairs are collision-free
/// and the generated polynomial has exactly `term_count` terms.
/// Coefficients are drawn from `1..=10`.
///
/// Pass a seeded generator (e.g. `ChaCha8Rng::seed_from_u64`) for
/// reproducible fixtures.
///
/// # Panics
///
/// Panics if `term_count` is outside `1..=20`.
#[must_use]
pub fn random_polynomial<R: Rng>(rng: &mut R, term_count: Option<usize>) -> Polynomial {
    let count = match term_count {
        Some(n) => {
            assert!(
                (1..=20).contains(&n),
                "term count must be between 1 and 20"
            );
            n
        }
        None => rng.gen_range(1..=10),
    };
    let span = rng.gen_range(count..=20);

    let mut pairs = Vec::with_capacity(count);
    for exponent in index::sample(rng, span, count) {
        let coefficient = rng.gen_range(1i64..=10);
        pairs.push((Rational::from(coefficient), Rational::from(exponent as i64)));
    }
    Polynomial::from_rational_terms(pairs).expect("generated coefficients are non-zero")
}
