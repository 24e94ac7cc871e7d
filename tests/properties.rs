use longint::{BigInt, BASE};
use proptest::prelude::*;
use std::cmp::Ordering;

/// Property tests for the arithmetic laws a BigInt must satisfy.
mod generators {
    use super::*;

    /// Decimal literals up to 40 digits, with leading zeros and an optional sign.
    pub fn arb_literal() -> impl Strategy<Value = String> {
        "[+-]?[0-9]{1,40}".prop_map(|s| s.to_string())
    }

    pub fn arb_big() -> impl Strategy<Value = BigInt> {
        arb_literal().prop_map(|s| s.parse::<BigInt>().unwrap())
    }

    pub fn arb_nonzero_big() -> impl Strategy<Value = BigInt> {
        arb_big().prop_filter("divisor must be non-zero", |b| !b.is_zero())
    }
}

use generators::*;

fn assert_normalized(n: &BigInt) {
    let digits = n.digits();
    assert!(!digits.is_empty());
    assert!(digits.iter().all(|d| *d < BASE));
    if digits.len() > 1 {
        assert_ne!(digits[digits.len() - 1], 0, "leading zero in {:?}", n);
    }
    if n.is_zero() {
        assert!(!n.is_negative(), "negative zero");
    }
}

proptest! {
    #[test]
    fn results_are_normalized(a in arb_big(), b in arb_nonzero_big()) {
        assert_normalized(&a);
        assert_normalized(&(&a + &b));
        assert_normalized(&(&a - &b));
        assert_normalized(&(&a * &b));
        assert_normalized(&(&a / &b));
        assert_normalized(&(&a - &a));
        assert_normalized(&(&a * &BigInt::zero()));
    }

    #[test]
    fn additive_identity_and_inverse(a in arb_big()) {
        prop_assert_eq!(&a + &BigInt::zero(), a.clone());
        prop_assert_eq!(&a + &(-&a), BigInt::zero());
    }

    #[test]
    fn addition_commutes_and_associates(a in arb_big(), b in arb_big(), c in arb_big()) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!((&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn multiplication_commutes_and_associates(a in arb_big(), b in arb_big(), c in arb_big()) {
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!((&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn multiplication_distributes(a in arb_big(), b in arb_big(), c in arb_big()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn subtraction_undoes_addition(a in arb_big(), b in arb_big()) {
        prop_assert_eq!((&a + &b) - &b, a);
    }

    #[test]
    fn division_truncates_toward_zero(a in arb_big(), b in arb_nonzero_big()) {
        let q = &a / &b;
        let r = &a - &(&q * &b);
        prop_assert_eq!(&(&q * &b) + &r, a.clone());
        prop_assert_eq!(r.compare_mag(&b), Ordering::Less);
        if !r.is_zero() {
            prop_assert_eq!(r.is_negative(), a.is_negative());
        }
    }

    #[test]
    fn compare_mag_is_a_total_order(a in arb_big(), b in arb_big(), c in arb_big()) {
        prop_assert_eq!(a.compare_mag(&a), Ordering::Equal);
        prop_assert_eq!(a.compare_mag(&b), b.compare_mag(&a).reverse());
        if a.compare_mag(&b) != Ordering::Greater && b.compare_mag(&c) != Ordering::Greater {
            prop_assert_ne!(a.compare_mag(&c), Ordering::Greater);
        }
    }

    #[test]
    fn format_round_trips(a in arb_big()) {
        let s = a.to_string();
        prop_assert_eq!(s.parse::<BigInt>().unwrap(), a);
    }

    #[test]
    fn parse_strips_redundant_zeros(s in "[1-9][0-9]{0,30}", zeros in 0usize..5) {
        let padded = format!("-{}{}", "0".repeat(zeros), s);
        prop_assert_eq!(padded.parse::<BigInt>().unwrap().to_string(), format!("-{}", s));
    }

    #[test]
    fn agrees_with_machine_integers(x in any::<i64>(), y in any::<i64>()) {
        let (a, b) = (BigInt::from(x), BigInt::from(y));
        let (x, y) = (x as i128, y as i128);
        prop_assert_eq!((&a + &b).to_string(), (x + y).to_string());
        prop_assert_eq!((&a - &b).to_string(), (x - y).to_string());
        prop_assert_eq!((&a * &b).to_string(), (x * y).to_string());
        prop_assert_eq!(a.cmp(&b), x.cmp(&y));
        if y != 0 {
            prop_assert_eq!((&a / &b).to_string(), (x / y).to_string());
        }
    }
}
