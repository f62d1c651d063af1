//! Writing answer lines and anomaly messages to stdout.
//!
//! Answer lines follow the expression's decimal-or-hex choice and the
//! session mode's signedness.  Anomaly lines (overflow, division by
//! zero, operand warnings) are shown in red when stdout is a
//! terminal and plainly when it is a pipe.

use std::io::{self, Write};

use termcolor::{self, ColorChoice, ColorSpec, StandardStream, WriteColor};

use base::prelude::*;

use crate::expr::Expression;

fn get_colour_choice() -> ColorChoice {
    if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Render one word the way the answer line wants it: hex pattern,
/// signed decimal, or unsigned decimal.
fn format_word(w: Word, hex: bool, mode: Mode) -> String {
    if hex {
        format!("{w:#x}")
    } else if mode.is_signed() {
        format!("{}", i16::from(w))
    } else {
        format!("{}", u16::from(w))
    }
}

pub struct ResultWriter {
    stream: StandardStream,
}

impl ResultWriter {
    pub fn new() -> ResultWriter {
        ResultWriter {
            stream: StandardStream::stdout(get_colour_choice()),
        }
    }

    /// Print the `lhs op rhs = result` line.
    pub fn result_line(
        &mut self,
        expression: &Expression,
        result: Word,
        mode: Mode,
    ) -> io::Result<()> {
        let hex = expression.hex_output;
        writeln!(
            self.stream,
            "{} {} {} = {}",
            format_word(expression.operand1, hex, mode),
            expression.operator.symbol(),
            format_word(expression.operand2, hex, mode),
            format_word(result, hex, mode),
        )
    }

    /// Print the fuller division answer shown when the remainder is
    /// not zero.
    pub fn remainder_line(
        &mut self,
        expression: &Expression,
        quotient: Word,
        remainder: Word,
        mode: Mode,
    ) -> io::Result<()> {
        let hex = expression.hex_output;
        writeln!(
            self.stream,
            "Full answer: {}, remainder {}",
            format_word(quotient, hex, mode),
            format_word(remainder, hex, mode),
        )
    }

    /// Print a message about a reported condition: an overflow, a
    /// division by zero, or an operand warning.
    pub fn anomaly(&mut self, message: &str) -> io::Result<()> {
        let mut colour = ColorSpec::new();
        colour.set_fg(Some(termcolor::Color::Red));
        self.stream.set_color(&colour)?;
        writeln!(self.stream, "{message}")?;
        self.stream.reset()
    }
}
