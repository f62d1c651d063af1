#![allow(clippy::arithmetic_side_effects)]

use super::divide;
use base::prelude::*;
use base::w16;

#[test]
fn test_division_by_zero_is_flagged_not_fatal() {
    for mode in [Mode::Unsigned, Mode::Signed] {
        let result = divide(w16!(0x1234), Word::ZERO, mode);
        assert!(result.division_by_zero);
        assert!(!result.overflow);
        // The record still holds deterministic (zeroed) fields.
        assert_eq!(result.quotient, Word::ZERO);
        assert_eq!(result.remainder, Word::ZERO);
    }
}

#[test]
fn test_unsigned_division_basics() {
    let result = divide(w16!(42), w16!(5), Mode::Unsigned);
    assert_eq!(result.quotient, w16!(8));
    assert_eq!(result.remainder, w16!(2));
    assert!(!result.division_by_zero);
    assert!(!result.overflow);

    let result = divide(Word::MAX, Word::ONE, Mode::Unsigned);
    assert_eq!(result.quotient, Word::MAX);
    assert_eq!(result.remainder, Word::ZERO);

    // A divisor larger than the dividend gives quotient zero.
    let result = divide(Word::ONE, Word::MAX, Mode::Unsigned);
    assert_eq!(result.quotient, Word::ZERO);
    assert_eq!(result.remainder, Word::ONE);
}

#[test]
fn test_unsigned_division_top_bit_divisor() {
    // Exercises the 17-bit working remainder: every shifted remainder
    // here is compared against a divisor with bit 15 set.
    let result = divide(w16!(0xffff), w16!(0x8000), Mode::Unsigned);
    assert_eq!(result.quotient, Word::ONE);
    assert_eq!(result.remainder, w16!(0x7fff));
}

#[test]
fn test_signed_division_truncates_toward_zero() {
    // All four sign combinations of 7 / 2: the quotient rounds toward
    // zero and the remainder takes the dividend's sign.
    let result = divide(w16!(7), w16!(2), Mode::Signed);
    assert_eq!(i16::from(result.quotient), 3);
    assert_eq!(i16::from(result.remainder), 1);

    let result = divide(Word::from(-7_i16), w16!(2), Mode::Signed);
    assert_eq!(i16::from(result.quotient), -3);
    assert_eq!(i16::from(result.remainder), -1);

    let result = divide(w16!(7), Word::from(-2_i16), Mode::Signed);
    assert_eq!(i16::from(result.quotient), -3);
    assert_eq!(i16::from(result.remainder), 1);

    let result = divide(Word::from(-7_i16), Word::from(-2_i16), Mode::Signed);
    assert_eq!(i16::from(result.quotient), 3);
    assert_eq!(i16::from(result.remainder), -1);
}

#[test]
fn test_signed_division_exact() {
    let result = divide(Word::from(-6_i16), w16!(3), Mode::Signed);
    assert_eq!(i16::from(result.quotient), -2);
    assert_eq!(result.remainder, Word::ZERO);
}

#[test]
fn test_signed_most_negative_by_one_is_exact() {
    let result = divide(Word::SIGNED_MIN, Word::ONE, Mode::Signed);
    assert_eq!(i16::from(result.quotient), i16::MIN);
    assert_eq!(result.remainder, Word::ZERO);
    assert!(!result.overflow);
}

#[test]
fn test_signed_most_negative_by_minus_one_overflows() {
    // The exact quotient, +32768, has no 16-bit signed home; the
    // wrapped pattern comes back with the flag set.
    let result = divide(Word::SIGNED_MIN, Word::from(-1_i16), Mode::Signed);
    assert!(result.overflow);
    assert!(!result.division_by_zero);
    assert_eq!(result.quotient, Word::SIGNED_MIN);
    assert_eq!(result.remainder, Word::ZERO);
}

#[cfg(test)]
mod divider_proptests {
    #![allow(clippy::arithmetic_side_effects)]

    use super::super::divide;
    use base::prelude::*;
    use test_strategy::proptest;

    #[proptest]
    fn unsigned_division_matches_native(a: u16, d: u16) {
        let result = divide(Word::from(a), Word::from(d), Mode::Unsigned);
        if d == 0 {
            assert!(result.division_by_zero);
        } else {
            assert!(!result.division_by_zero);
            assert!(!result.overflow);
            assert_eq!(u16::from(result.quotient), a / d);
            assert_eq!(u16::from(result.remainder), a % d);
        }
    }

    #[proptest]
    fn unsigned_division_reconstructs_the_dividend(a: u16, #[strategy(1..=u16::MAX)] d: u16) {
        let result = divide(Word::from(a), Word::from(d), Mode::Unsigned);
        let q = u32::from(result.quotient);
        let r = u32::from(result.remainder);
        assert!(r < u32::from(d));
        assert_eq!(q * u32::from(d) + r, u32::from(a));
    }

    #[proptest]
    fn signed_division_matches_native(a: i16, d: i16) {
        let result = divide(Word::from(a), Word::from(d), Mode::Signed);
        if d == 0 {
            assert!(result.division_by_zero);
        } else if a == i16::MIN && d == -1 {
            assert!(result.overflow);
            assert_eq!(result.quotient, Word::SIGNED_MIN);
        } else {
            assert!(!result.division_by_zero);
            assert!(!result.overflow);
            assert_eq!(i16::from(result.quotient), a / d);
            assert_eq!(i16::from(result.remainder), a % d);
        }
    }

    #[proptest]
    fn signed_remainder_is_zero_or_takes_the_dividend_sign(a: i16, #[strategy(1..=i16::MAX)] d: i16) {
        let result = divide(Word::from(a), Word::from(d), Mode::Signed);
        let r = i16::from(result.remainder);
        assert!(r == 0 || (r < 0) == (a < 0));
    }
}
