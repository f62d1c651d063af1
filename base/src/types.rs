//! Shared scalar types.

use serde::Serialize;

/// Selects the interpretation applied to 16-bit patterns in a
/// computation: unsigned magnitude, or two's-complement signed.
///
/// The mode is fixed for the lifetime of a computation session but it
/// is never a property of a [`Word`](crate::Word) itself, so it is
/// passed explicitly into every operation that needs to know it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Mode {
    Unsigned,
    Signed,
}

impl Mode {
    pub const fn is_signed(&self) -> bool {
        matches!(self, Mode::Signed)
    }
}
