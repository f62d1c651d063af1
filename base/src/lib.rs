//! The `base` crate defines the 16-bit word model which is useful in
//! both the arithmetic engine and other associated tools.  The idea
//! is that if you wanted to write, say, a disassembler for a 16-bit
//! machine, it could depend on the base crate but would not need to
//! depend on the arithmetic engine itself.

// Arithmetic in this workspace is emulated out of bitwise primitives
// only; a stray native `+` would defeat the point.  Test modules
// re-allow this lint so that their oracles can use native arithmetic.
#![deny(clippy::arithmetic_side_effects)]

mod twoscomplement;
mod types;

pub mod prelude;
pub mod subword;

pub use crate::twoscomplement::double::DoubleWord;
pub use crate::twoscomplement::error::ConversionFailed;
pub use crate::twoscomplement::word::Word;
pub use crate::types::Mode;

#[macro_export]
macro_rules! w16 {
    ($n:expr) => {
        $crate::prelude::Word::new($n)
    };
}

#[macro_export]
macro_rules! w32 {
    ($n:expr) => {
        $crate::prelude::DoubleWord::new($n)
    };
}

#[test]
fn test_w16() {
    use prelude::Word;
    let m: Word = w16!(40);
    let n: Word = Word::from(40_u16);
    assert_eq!(m, n);

    let p: Word = w16!(1_u16 << 14);
    let q: Word = Word::try_from(1_u32 << 14).expect("test data should be in range");
    assert_eq!(p, q);
}

#[test]
fn test_w32() {
    use prelude::DoubleWord;
    let p: DoubleWord = w32!(1_u32 << 30);
    let q: DoubleWord = DoubleWord::from(1_u32 << 30);
    assert_eq!(p, q);
}
