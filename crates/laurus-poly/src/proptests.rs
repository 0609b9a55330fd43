//! Property-based tests for polynomial arithmetic and calculus.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use laurus_rationals::Rational;

    use crate::polynomial::Polynomial;
    use crate::random::random_polynomial;

    // Strategy for non-zero coefficients
    fn non_zero_coeff() -> impl Strategy<Value = i64> {
        prop_oneof![(-9i64..=-1i64), (1i64..=9i64)]
    }

    fn build(pairs: Vec<(i64, i64)>) -> Polynomial {
        let terms = pairs
            .into_iter()
            .map(|(c, e)| (Rational::from(c), Rational::from(e)));
        Polynomial::from_rational_terms(terms).expect("explicitly non-zero coefficients")
    }

    // Raw pairs with possibly colliding exponents; collection resolves
    // the collisions and cancellation can legitimately produce zero
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        prop::collection::vec((non_zero_coeff(), -12i64..=12i64), 1..=8).prop_map(build)
    }

    // Exponent -1 excluded, so the polynomial is always integrable
    fn integrable_poly() -> impl Strategy<Value = Polynomial> {
        let exponent = prop_oneof![(-12i64..=-2i64), (0i64..=12i64)];
        prop::collection::vec((non_zero_coeff(), exponent), 1..=8).prop_map(build)
    }

    fn constant() -> impl Strategy<Value = Rational> {
        (-10i64..=10i64, 1i64..=6i64).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn is_canonical(p: &Polynomial) -> bool {
        let terms = p.terms();
        let sorted = terms.windows(2).all(|w| w[0].exponent < w[1].exponent);
        let no_zeros = p.is_zero() || terms.iter().all(|t| !t.is_zero());
        sorted && no_zeros && !terms.is_empty()
    }

    proptest! {
        // Construction

        #[test]
        fn construction_idempotent(p in small_poly()) {
            let pairs: Vec<(Rational, Rational)> = p
                .terms()
                .iter()
                .map(|t| (t.coefficient.clone(), t.exponent.clone()))
                .collect();
            let rebuilt = Polynomial::from_rational_terms(pairs).expect("canonical terms");
            prop_assert_eq!(rebuilt, p);
        }

        // Ring identities

        #[test]
        fn add_zero_is_identity(p in small_poly()) {
            let zero = Polynomial::zero();
            prop_assert_eq!(&p + &zero, p.clone());
            prop_assert_eq!(&zero + &p, p);
        }

        #[test]
        fn sub_self_is_zero(p in small_poly()) {
            prop_assert!((&p - &p).is_zero());
        }

        #[test]
        fn mul_zero_is_zero(p in small_poly()) {
            prop_assert!((&p * &Polynomial::zero()).is_zero());
            prop_assert!(p.scale(&Rational::zero()).is_zero());
        }

        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn mul_distributes_over_add(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn scale_matches_constant_mul(p in small_poly(), k in constant()) {
            let as_poly = Polynomial::constant(k.clone());
            prop_assert_eq!(p.scale(&k), &p * &as_poly);
        }

        // Calculus

        #[test]
        fn derivative_inverts_integral(p in integrable_poly(), k in constant()) {
            let integral = p.integral(&k).expect("no inverse terms generated");
            prop_assert_eq!(integral.derivative(), p);
        }

        #[test]
        fn integral_rejects_inverse_exponent(
            p in integrable_poly(),
            c in non_zero_coeff(),
            k in constant()
        ) {
            let with_inverse = &p + &Polynomial::monomial(Rational::from(c), Rational::from(-1));
            prop_assert!(with_inverse.integral(&k).is_err());
        }

        // Invariants

        #[test]
        fn operations_stay_canonical(a in small_poly(), b in small_poly()) {
            prop_assert!(is_canonical(&(&a + &b)));
            prop_assert!(is_canonical(&(&a - &b)));
            prop_assert!(is_canonical(&(&a * &b)));
            prop_assert!(is_canonical(&a.derivative()));
        }

        #[test]
        fn integral_stays_canonical(p in integrable_poly(), k in constant()) {
            let integral = p.integral(&k).expect("no inverse terms generated");
            prop_assert!(is_canonical(&integral));
        }

        #[test]
        fn degree_endpoint_rule_matches_full_scan(p in small_poly()) {
            let by_scan = p
                .terms()
                .iter()
                .map(|t| &t.exponent)
                .max_by(|a, b| a.abs().cmp(&b.abs()).then(a.cmp(b)))
                .expect("canonical polynomials are never empty");
            prop_assert_eq!(p.degree(), by_scan.clone());
        }

        // Fixture generator

        #[test]
        fn generated_polynomials_are_canonical(seed in any::<u64>(), n in 1usize..=20) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let p = random_polynomial(&mut rng, Some(n));
            prop_assert_eq!(p.term_count(), n);
            prop_assert!(is_canonical(&p));
            prop_assert!(p
                .terms()
                .iter()
                .all(|t| !t.coefficient.is_negative() && !t.exponent.is_negative()));
        }
    }
}
