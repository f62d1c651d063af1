//! The `alu` crate emulates 16-bit integer arithmetic (addition,
//! subtraction, multiplication and division) using only the bitwise
//! primitives AND, OR, XOR, complement and shifts, for both unsigned
//! and two's-complement signed interpretations of the operands.
//!
//! Every operation is a pure function from two
//! [`Word`](base::Word)s and a [`Mode`](base::Mode) to a result
//! record.  There is no shared state and no suspension point, so the
//! operations may be called concurrently without coordination.  No
//! operation panics or returns an error: anomalies (overflow,
//! division by zero) are reported as flags on the result record and
//! a deterministic wrapped value is returned alongside them.

// The whole point of this crate is that the arithmetic is built from
// bitwise primitives; deny the native operators so one cannot sneak
// in.  Test modules re-allow the lint for their native oracles.
#![deny(clippy::arithmetic_side_effects)]

mod ripple;

pub mod adder;
pub mod divider;
pub mod multiplier;

pub use crate::adder::{add, subtract, AdditionResult};
pub use crate::divider::{divide, DivisionResult};
pub use crate::multiplier::{multiply, MultiplicationResult};
