//! Addition, and subtraction by way of the same circuit.

use serde::Serialize;
use tracing::{event, Level};

use base::prelude::*;

use crate::ripple;


/// The outcome of an addition or subtraction.
///
/// `result` always holds the wrapped 16-bit pattern, even when
/// `overflow` is set; the flag reports that the mathematically exact
/// answer does not fit the 16-bit range implied by the mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AdditionResult {
    pub result: Word,
    pub overflow: bool,
}

/// Add two words under the given interpretation.
pub fn add(augend: Word, addend: Word, mode: Mode) -> AdditionResult {
    let sum = ripple::add16(u16::from(augend), u16::from(addend), false);
    let overflow = match mode {
        // The sum wrapped past 2^16 - 1.
        Mode::Unsigned => sum.carry_out,
        // Classic two's-complement rule: the carry into bit 15
        // disagrees with the carry out of it.
        Mode::Signed => sum.carry_into_sign != sum.carry_out,
    };
    let outcome = AdditionResult {
        result: Word::from(sum.bits),
        overflow,
    };
    event!(
        Level::TRACE,
        "add: {:?} + {:?} ({:?}) -> {:?}",
        augend,
        addend,
        mode,
        outcome
    );
    outcome
}

/// Subtract `subtrahend` from `minuend` under the given
/// interpretation.
///
/// The difference is formed as `minuend + !subtrahend` with the
/// carry-in set: the `+1` of the two's-complement negation rides the
/// carry chain, so the overflow tests see the exact 17-bit truth even
/// for the two subtrahends whose negation the transformed operand
/// cannot express, 0x0000 and 0x8000.
pub fn subtract(minuend: Word, subtrahend: Word, mode: Mode) -> AdditionResult {
    let diff = ripple::add16(u16::from(minuend), !u16::from(subtrahend), true);
    let overflow = match mode {
        // No carry out means the subtraction borrowed: the exact
        // difference is negative and no unsigned word can hold it.
        Mode::Unsigned => !diff.carry_out,
        Mode::Signed => diff.carry_into_sign != diff.carry_out,
    };
    let outcome = AdditionResult {
        result: Word::from(diff.bits),
        overflow,
    };
    event!(
        Level::TRACE,
        "subtract: {:?} - {:?} ({:?}) -> {:?}",
        minuend,
        subtrahend,
        mode,
        outcome
    );
    outcome
}
