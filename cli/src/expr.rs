//! Parsing of the simple two-operand expressions the calculator
//! accepts, such as `7+2`, `-0x3 * 5` or `3--4`.
//!
//! There is no operator precedence and there are never more than two
//! operands; the only subtlety is telling a `-` that negates an
//! operand apart from a `-` that subtracts.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use base::prelude::*;

/// The operator of a two-operand expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

/// A condition noticed during parsing that does not stop evaluation.
/// The original teaching program printed these and carried on, and so
/// do we.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Warning {
    /// A negative operand was supplied in unsigned mode; the operand
    /// is used as its two's-complement bit pattern.
    NegativeOperandCast,
    /// An operand did not fit in 16 bits; its low 16 bits are used.
    OperandTruncated,
    /// No operator was found; the input is treated as `operand + 0`.
    MissingOperator,
}

impl Display for Warning {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            Warning::NegativeOperandCast => {
                "ERROR: CANNOT USE NEGATIVE OPERANDS FOR UNSIGNED ARITHMETIC.  Casting."
            }
            Warning::OperandTruncated => "ERROR: OPERAND CANNOT FIT IN 16 BITS.  Truncating.",
            Warning::MissingOperator => "ERROR: ONLY ONE OPERAND FOUND.  Recovering.",
        })
    }
}

/// Why an expression could not be parsed at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    EmptyExpression,
    BadOperand(String),
}

impl Error for ParseError {}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            ParseError::EmptyExpression => f.write_str("empty expression"),
            ParseError::BadOperand(text) => write!(f, "cannot parse operand '{text}'"),
        }
    }
}

/// A parsed two-operand expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expression {
    pub operand1: Word,
    pub operand2: Word,
    pub operator: Operator,
    /// True when either operand was written in hexadecimal, in which
    /// case the whole answer line is printed in hexadecimal too.
    pub hex_output: bool,
    pub warnings: Vec<Warning>,
}

struct Operand {
    word: Word,
    hex: bool,
    warnings: Vec<Warning>,
}

pub fn parse(raw: &str, mode: Mode) -> Result<Expression, ParseError> {
    // Strip all whitespace so that "7 + 2" and "7+2" parse the same.
    let expression: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if expression.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    // A leading '-' negates the first operand; it must not be
    // mistaken for the operator.
    let (negate_first, rest) = match expression.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, expression.as_str()),
    };

    // Look for '-' last so that a negative second operand ("3--4",
    // "7*-2") stays attached to its operand.
    let split = ['+', '*', '/', '-']
        .into_iter()
        .find_map(|symbol| rest.find(symbol).map(|at| (symbol, at)));

    let mut warnings = Vec::new();
    let (operator, first, second) = match split {
        Some((symbol, at)) => {
            let operator = match symbol {
                '+' => Operator::Add,
                '*' => Operator::Multiply,
                '/' => Operator::Divide,
                _ => Operator::Subtract,
            };
            (operator, &rest[..at], &rest[at + 1..])
        }
        None => {
            // Only one operand; recover as "x + 0" like the original.
            warnings.push(Warning::MissingOperator);
            (Operator::Add, rest, "0")
        }
    };

    let operand1 = parse_operand(first, negate_first, mode)?;
    let operand2 = parse_operand(second, false, mode)?;
    warnings.extend(&operand1.warnings);
    warnings.extend(&operand2.warnings);

    Ok(Expression {
        operand1: operand1.word,
        operand2: operand2.word,
        operator,
        hex_output: operand1.hex || operand2.hex,
        warnings,
    })
}

fn parse_operand(text: &str, negated: bool, mode: Mode) -> Result<Operand, ParseError> {
    // The operand may carry its own sign ("3--4" subtracts -4); it
    // combines with an outer negation ("--3" is 3).
    let (inner_minus, body) = match text.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, text),
    };
    let negative = negated ^ inner_minus;

    let (radix, digits, hex) = match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        Some(digits) => (16, digits, true),
        None => (10, body, false),
    };
    let bad = || ParseError::BadOperand(text.to_string());
    if digits.is_empty() {
        return Err(bad());
    }
    let magnitude = u32::from_str_radix(digits, radix).map_err(|_| bad())?;
    let value: i64 = if negative {
        -i64::from(magnitude)
    } else {
        i64::from(magnitude)
    };

    let mut warnings = Vec::new();
    if negative && !mode.is_signed() {
        warnings.push(Warning::NegativeOperandCast);
    }

    // Decimal operands in signed mode are held to the signed range;
    // hex operands name bit patterns and get the whole 16-bit space,
    // as the original's limit selection did.
    let max: i64 = if mode.is_signed() && !hex {
        i64::from(i16::MAX)
    } else {
        i64::from(u16::MAX)
    };
    if value > max || value < i64::from(i16::MIN) {
        warnings.push(Warning::OperandTruncated);
    }

    Ok(Operand {
        word: Word::from(value as u16),
        hex,
        warnings,
    })
}
