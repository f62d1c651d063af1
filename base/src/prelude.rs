//! The prelude exports the types which are useful in working with
//! 16-bit words and the double-width patterns they multiply into.
//! Providing this prelude is the main purpose of the base crate.
pub use super::subword::{high_half, join_halves, low_half, split_halves};
pub use super::twoscomplement::double::DoubleWord;
pub use super::twoscomplement::error::ConversionFailed;
pub use super::twoscomplement::word::Word;
pub use super::types::Mode;
pub use super::{w16, w32};
