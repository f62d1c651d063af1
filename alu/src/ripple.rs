//! The ripple-carry adder that every other unit is built on.
//!
//! For each bit position the circuit computes
//! `sum = a ^ b ^ carry` and `carry' = (a & b) | (carry & (a ^ b))`,
//! propagating the carry from bit 0 upward.  Subtraction rides the
//! same circuit: `a - b` is `a + !b` with the carry-in set, which
//! folds the `+1` of the two's-complement negation into the carry
//! chain.

/// The output of one pass through the 16-bit adder.
///
/// `carry_out` is the carry out of bit 15; `carry_into_sign` is the
/// carry out of bit 14 into bit 15.  Disagreement between the two is
/// the signed overflow condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Sum16 {
    pub(crate) bits: u16,
    pub(crate) carry_out: bool,
    pub(crate) carry_into_sign: bool,
}

pub(crate) fn add16(a: u16, b: u16, carry_in: bool) -> Sum16 {
    let mut sum: u16 = 0;
    let mut carry: u16 = if carry_in { 1 } else { 0 };
    let mut carry_into_sign = false;
    for i in 0..16_u32 {
        if i == 15 {
            carry_into_sign = carry != 0;
        }
        let abit = (a >> i) & 1;
        let bbit = (b >> i) & 1;
        sum |= (abit ^ bbit ^ carry) << i;
        carry = (abit & bbit) | (carry & (abit ^ bbit));
    }
    Sum16 {
        bits: sum,
        carry_out: carry != 0,
        carry_into_sign,
    }
}

/// The output of one pass through the 32-bit widening of the circuit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Sum32 {
    pub(crate) bits: u32,
    pub(crate) carry_out: bool,
}

pub(crate) fn add32(a: u32, b: u32, carry_in: bool) -> Sum32 {
    let mut sum: u32 = 0;
    let mut carry: u32 = if carry_in { 1 } else { 0 };
    for i in 0..32_u32 {
        let abit = (a >> i) & 1;
        let bbit = (b >> i) & 1;
        sum |= (abit ^ bbit ^ carry) << i;
        carry = (abit & bbit) | (carry & (abit ^ bbit));
    }
    Sum32 {
        bits: sum,
        carry_out: carry != 0,
    }
}
