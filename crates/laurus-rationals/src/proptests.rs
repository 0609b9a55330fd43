//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        }

        #[test]
        fn integer_add_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                (a.clone() + b.clone()) + c.clone(),
                a.clone() + (b.clone() + c.clone())
            );
        }

        #[test]
        fn integer_mul_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() * b.clone(), b.clone() * a.clone());
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b.clone() + a.clone() * c.clone()
            );
        }

        #[test]
        fn integer_add_identity(a in small_int()) {
            let a = Integer::new(a);
            let zero = Integer::new(0);
            prop_assert_eq!(a.clone() + zero.clone(), a.clone());
            prop_assert_eq!(zero + a.clone(), a);
        }

        #[test]
        fn integer_additive_inverse(a in small_int()) {
            let a = Integer::new(a);
            let neg_a = -a.clone();
            let zero = Integer::new(0);
            prop_assert_eq!(a + neg_a, zero);
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            prop_assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        }

        #[test]
        fn rational_mul_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            prop_assert_eq!(a.clone() * b.clone(), b.clone() * a.clone());
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            let c = Rational::from_i64(num_c, den_c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b.clone() + a.clone() * c.clone()
            );
        }

        #[test]
        fn rational_additive_inverse(
            num in small_int(),
            den in non_zero_int()
        ) {
            let a = Rational::from_i64(num, den);
            prop_assert!((a.clone() + (-a)).is_zero());
        }

        #[test]
        fn rational_multiplicative_inverse(
            num in non_zero_int(),
            den in non_zero_int()
        ) {
            let a = Rational::from_i64(num, den);
            let inv = a.recip();
            let product = a * inv;
            prop_assert!(product.is_one());
        }

        #[test]
        fn rational_negative_denominator_normalizes(
            num in small_int(),
            den in non_zero_int()
        ) {
            let a = Rational::from_i64(num, den);
            let b = Rational::from_i64(-num, -den);
            prop_assert_eq!(a.clone(), b);
            prop_assert!(!a.denominator().is_negative());
        }

        // Float conversion

        #[test]
        fn from_f64_dyadic_exact(mantissa in -10_000i64..10_000i64, shift in 0u32..20u32) {
            // every m / 2^k in this range is exactly representable
            let float = mantissa as f64 / f64::from(1u32 << shift);
            let expected = Rational::from_i64(mantissa, 1i64 << shift);
            prop_assert_eq!(Rational::from_f64(float), Some(expected));
        }

        // Denominator limiting

        #[test]
        fn limit_denominator_respects_bound(
            num in small_int(),
            den in non_zero_int(),
            cap in 1u64..200u64
        ) {
            let a = Rational::from_i64(num, den);
            let limited = a.limit_denominator(cap);
            let den = limited
                .denominator()
                .to_i64()
                .expect("limited denominator fits in i64");
            prop_assert!(den <= cap as i64);
        }

        #[test]
        fn limit_denominator_within_bound_is_identity(
            num in small_int(),
            den in 1i64..=100i64
        ) {
            let a = Rational::from_i64(num, den);
            prop_assert_eq!(a.limit_denominator(1000), a);
        }

        #[test]
        fn limit_denominator_is_closest(
            num in -50i64..50i64,
            den in 1i64..50i64,
            cap in 1u64..=12u64
        ) {
            let a = Rational::from_i64(num, den);
            let limited = a.limit_denominator(cap);
            let err = (&limited - &a).abs();

            // brute force over all denominators within the cap; the best
            // numerator for a fixed q is within one of num * q / den
            for q in 1..=cap as i64 {
                let base = num * q / den;
                for p in [base - 1, base, base + 1] {
                    let candidate = Rational::from_i64(p, q);
                    prop_assert!(err <= (&candidate - &a).abs());
                }
            }
        }
    }
}
