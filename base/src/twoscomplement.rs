//! This module implements the two's complement fixed-width word used
//! in emulating 16-bit integer arithmetic, plus the double-width
//! pattern that a 16-by-16-bit multiplication produces.
//!
//! A pattern here carries no sign of its own.  Signedness is a matter
//! of interpretation, selected by [`Mode`](crate::Mode) at the
//! boundaries (conversion, display, overflow checks) and nowhere
//! else; every intermediate bitwise step works modulo the pattern
//! width.

pub mod double;
pub mod error;
pub mod word;
