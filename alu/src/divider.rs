//! Restoring long division.

use serde::Serialize;
use tracing::{event, Level};

use base::prelude::*;

use crate::ripple;

#[cfg(test)]
mod tests;

/// The outcome of a division.
///
/// When `division_by_zero` is set the quotient and remainder carry no
/// information (they are left zeroed) and must not be read.
/// `overflow` can be set only in signed mode, and only for the one
/// quotient with no 16-bit representation: the most negative value
/// divided by minus one, which returns the wrapped pattern 0x8000.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DivisionResult {
    pub quotient: Word,
    pub remainder: Word,
    pub overflow: bool,
    pub division_by_zero: bool,
}

/// Divide `dividend` by `divisor` under the given interpretation,
/// truncating toward zero.  The remainder is zero or takes the
/// dividend's sign.
pub fn divide(dividend: Word, divisor: Word, mode: Mode) -> DivisionResult {
    if divisor.is_zero() {
        event!(
            Level::DEBUG,
            "divide: {:?} / 0 is a division by zero",
            dividend
        );
        return DivisionResult {
            quotient: Word::ZERO,
            remainder: Word::ZERO,
            overflow: false,
            division_by_zero: true,
        };
    }

    // Record the signs, then work on unsigned magnitudes.
    let negative_quotient = mode.is_signed() && (dividend.sign_bit() != divisor.sign_bit());
    let negative_remainder = mode.is_signed() && dividend.sign_bit();
    let (n, d) = if mode.is_signed() {
        (dividend.magnitude(), divisor.magnitude())
    } else {
        (dividend, divisor)
    };

    // Standard restoring division, most significant dividend bit
    // first.  The working remainder lives in a 32-bit register
    // because the shift step needs a 17th bit before the trial
    // subtraction decides.
    let n: u16 = u16::from(n);
    let d: u32 = u32::from(d);
    let mut remainder: u32 = 0;
    let mut quotient: u16 = 0;
    for i in (0..16_u32).rev() {
        // Shift the remainder left and bring down dividend bit i.
        remainder = (remainder << 1) | u32::from((n >> i) & 1);
        // Trial-subtract the divisor; a carry out means no borrow,
        // i.e. the remainder was at least as large as the divisor.
        let trial = ripple::add32(remainder, !d, true);
        if trial.carry_out {
            remainder = trial.bits;
            quotient |= 1 << i;
        }
    }

    let magnitude_quotient = Word::from(quotient);
    // The final remainder is smaller than the 16-bit divisor, so only
    // the low half of the register is populated.
    let magnitude_remainder = low_half(DoubleWord::from(remainder));

    // A positive quotient of 32768 has no signed representation; the
    // magnitudes can only produce it for 0x8000 / 0xffff.
    let overflow = mode.is_signed() && !negative_quotient && magnitude_quotient.sign_bit();

    let quotient = if negative_quotient {
        magnitude_quotient.negated()
    } else {
        magnitude_quotient
    };
    let remainder = if negative_remainder {
        magnitude_remainder.negated()
    } else {
        magnitude_remainder
    };
    let outcome = DivisionResult {
        quotient,
        remainder,
        overflow,
        division_by_zero: false,
    };
    event!(
        Level::TRACE,
        "divide: {:?} / {:?} ({:?}) -> {:?}",
        dividend,
        divisor,
        mode,
        outcome
    );
    outcome
}
