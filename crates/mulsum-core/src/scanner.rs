//! # Token Scanner
//!
//! Finds `mul(A,B)`, `do()` and `don't()` tokens in arbitrary text.
//!
//! ## Matching Policy
//!
//! - `mul(` must be followed by 1 to 3 ASCII digits, a comma, 1 to 3 ASCII
//!   digits and `)`, with nothing in between. Anything else (`mul(1000,2)`,
//!   `mul(4*`, `mul ( 2 , 4 )`) is not a token and is skipped.
//! - Control tokens are the literal strings `do()` and `don't()`, found at any
//!   byte position. They are not word-bounded: the tail of `undo()` is a
//!   `do()` token.
//! - Matches are non-overlapping and reported leftmost-first, so tokens come
//!   out in text order.
//!
//! Both patterns are compiled once per process.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::instruction::{Instruction, MulOperands, Token};

/// Literal text of the enable control token.
pub const ENABLE_TOKEN: &str = "do()";

/// Literal text of the disable control token.
pub const DISABLE_TOKEN: &str = "don't()";

/// `[0-9]` rather than `\d`: the regex crate's `\d` also matches non-ASCII
/// decimal digits.
const MUL_PATTERN: &str = r"mul\(([0-9]{1,3}),([0-9]{1,3})\)";

const INSTRUCTION_PATTERN: &str = r"do\(\)|don't\(\)|mul\(([0-9]{1,3}),([0-9]{1,3})\)";

fn mul_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MUL_PATTERN).expect("MUL_PATTERN is a valid regex"))
}

fn instruction_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(INSTRUCTION_PATTERN).expect("INSTRUCTION_PATTERN is a valid regex")
    })
}

/// Yield every `mul`, `do()` and `don't()` token in `text`, in text order.
pub fn scan(text: &str) -> impl Iterator<Item = Token> + '_ {
    instruction_regex()
        .captures_iter(text)
        .filter_map(|caps| token_from_captures(&caps))
}

/// Yield the operands of every `mul(A,B)` token in `text`, ignoring control
/// tokens.
pub fn mul_operands(text: &str) -> impl Iterator<Item = MulOperands> + '_ {
    mul_regex()
        .captures_iter(text)
        .filter_map(|caps| operands_from_captures(&caps))
}

fn token_from_captures(caps: &Captures<'_>) -> Option<Token> {
    let whole = caps.get(0)?;
    let instruction = match whole.as_str() {
        ENABLE_TOKEN => Instruction::Enable,
        DISABLE_TOKEN => Instruction::Disable,
        _ => Instruction::Mul(operands_from_captures(caps)?),
    };
    tracing::trace!(offset = whole.start(), ?instruction, "token");
    Some(Token {
        offset: whole.start(),
        len: whole.len(),
        instruction,
    })
}

// Groups 1 and 2 are always present on a `mul` match.
fn operands_from_captures(caps: &Captures<'_>) -> Option<MulOperands> {
    let lhs = caps.get(1)?;
    let rhs = caps.get(2)?;
    Some(MulOperands::new(
        parse_operand(lhs.as_str()),
        parse_operand(rhs.as_str()),
    ))
}

/// Decode 1 to 3 ASCII digits. The pattern guarantees the shape.
fn parse_operand(digits: &str) -> u16 {
    digits
        .bytes()
        .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'))
}
