//! Shift-and-add multiplication.

use serde::Serialize;
use tracing::{event, Level};

use base::prelude::*;

use crate::ripple;


/// The outcome of a multiplication.
///
/// `full_product` is the untruncated double-width product under the
/// mode's sign convention; `product` is its low half.  `overflow`
/// reports that the exact product needs more than 16 bits
/// (considering sign) to represent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MultiplicationResult {
    pub product: Word,
    pub overflow: bool,
    pub full_product: DoubleWord,
}

/// Multiply two words under the given interpretation.
pub fn multiply(multiplicand: Word, multiplier: Word, mode: Mode) -> MultiplicationResult {
    // Record the signs, then work on unsigned magnitudes.
    let negative = mode.is_signed() && (multiplicand.sign_bit() != multiplier.sign_bit());
    let (cand, plier) = if mode.is_signed() {
        (multiplicand.magnitude(), multiplier.magnitude())
    } else {
        (multiplicand, multiplier)
    };

    // For each set bit of the multiplier, fold a shifted copy of the
    // multiplicand into a double-width accumulator.  The largest
    // magnitude product, 0xffff * 0xffff, still fits in 32 bits, so
    // the accumulation is exact.
    let cand: u32 = u32::from(cand);
    let plier: u16 = u16::from(plier);
    let mut acc: u32 = 0;
    for i in 0..16_u32 {
        if (plier >> i) & 1 != 0 {
            acc = ripple::add32(acc, cand << i, false).bits;
        }
    }

    let full_product = if negative {
        DoubleWord::from(acc).negated()
    } else {
        DoubleWord::from(acc)
    };
    let (high, low) = split_halves(full_product);
    let overflow = match mode {
        // Any high bit set means the product wrapped past 16 bits.
        Mode::Unsigned => !high.is_zero(),
        // The product fits 16 signed bits only if bits 31..15 are all
        // copies of one another, i.e. the high half is a pure sign
        // extension of the low half.
        Mode::Signed => {
            let extension = if low.sign_bit() { Word::MAX } else { Word::ZERO };
            high != extension
        }
    };
    let outcome = MultiplicationResult {
        product: low,
        overflow,
        full_product,
    };
    event!(
        Level::TRACE,
        "multiply: {:?} * {:?} ({:?}) -> {:?}",
        multiplicand,
        multiplier,
        mode,
        outcome
    );
    outcome
}
