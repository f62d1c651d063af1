//! A 16-bit integer calculator built on the bit-level ALU.
//!
//! Reads simple two-operand expressions (`7+2`, `-0x3 * 5`) from
//! stdin, one per line, until a blank line or end of input, and
//! prints each answer.  Operands may be decimal or hexadecimal; if
//! either operand is hexadecimal the answer is printed in hexadecimal
//! too.  Whether patterns are read as signed or unsigned is fixed for
//! the whole session by the command-line mode argument.
//!
//! Several inputs can be run by piping a text file of expressions
//! (one per line) to stdin and comparing stdout with expected output:
//!
//! ```text
//! integerlab unsigned --no-prompt < input.txt > output.txt
//! diff output.txt oracle.txt
//! ```

use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use tracing::{event, Level};
use tracing_subscriber::prelude::*;

use base::prelude::*;

use crate::expr::{Expression, Operator};
use crate::output::ResultWriter;

mod expr;
mod output;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    /// Two's-complement signed arithmetic.
    Signed,
    /// Unsigned arithmetic.
    Unsigned,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Mode {
        match arg {
            ModeArg::Signed => Mode::Signed,
            ModeArg::Unsigned => Mode::Unsigned,
        }
    }
}

/// Evaluate simple two-operand 16-bit expressions read from stdin.
#[derive(Debug, Parser)]
#[command(name = "integerlab")]
struct Cli {
    /// Whether operands and results are signed or unsigned.
    #[arg(value_enum)]
    mode: ModeArg,

    /// Suppress the prompt otherwise printed before each expression
    /// is read (it is already suppressed when stdin is not a tty).
    #[arg(long)]
    no_prompt: bool,
}

fn evaluate(expression: &Expression, mode: Mode, writer: &mut ResultWriter) -> io::Result<()> {
    for warning in &expression.warnings {
        writer.anomaly(&warning.to_string())?;
    }
    match expression.operator {
        Operator::Add => {
            let sum = alu::add(expression.operand1, expression.operand2, mode);
            writer.result_line(expression, sum.result, mode)?;
            if sum.overflow {
                writer.anomaly("Overflow!")?;
            }
        }
        Operator::Subtract => {
            let difference = alu::subtract(expression.operand1, expression.operand2, mode);
            writer.result_line(expression, difference.result, mode)?;
            if difference.overflow {
                writer.anomaly("Overflow!")?;
            }
        }
        Operator::Multiply => {
            let product = alu::multiply(expression.operand1, expression.operand2, mode);
            writer.result_line(expression, product.product, mode)?;
            if product.overflow {
                writer.anomaly(&format!(
                    "Overflow!  Full answer: {:#x}",
                    product.full_product
                ))?;
            }
        }
        Operator::Divide => {
            let division = alu::divide(expression.operand1, expression.operand2, mode);
            if division.division_by_zero {
                writer.anomaly("Division by zero!")?;
            } else {
                writer.result_line(expression, division.quotient, mode)?;
                if division.overflow {
                    writer.anomaly("Overflow!")?;
                }
                if !division.remainder.is_zero() {
                    writer.remainder_line(
                        expression,
                        division.quotient,
                        division.remainder,
                        mode,
                    )?;
                }
            }
        }
    }
    Ok(())
}

fn run_calculator() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // See
    // https://docs.rs/tracing-subscriber/latest/tracing_subscriber/fmt/index.html#filtering-events-with-environment-variables
    // for instructions on how to select which trace messages get
    // printed.
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("warn"))
    {
        Err(e) => {
            return Err(Box::new(e));
        }
        Ok(layer) => layer,
    };
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let mode = Mode::from(cli.mode);
    let prompt = !cli.no_prompt && atty::is(atty::Stream::Stdin);
    event!(Level::DEBUG, "session mode is {:?}, prompt={}", mode, prompt);

    let mut writer = ResultWriter::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        if prompt {
            print!("Input a simple two-operator arithmetic expression: ");
            io::stdout().flush()?;
        }
        let mut raw = String::new();
        if input.read_line(&mut raw)? == 0 {
            break; // end of input
        }
        if raw.trim().is_empty() {
            break; // a blank line ends the session
        }
        match expr::parse(&raw, mode) {
            Ok(expression) => evaluate(&expression, mode, &mut writer)?,
            Err(e) => writer.anomaly(&e.to_string())?,
        }
    }
    Ok(())
}

fn main() {
    match run_calculator() {
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}
