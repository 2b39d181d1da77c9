//! # Instructions
//!
//! The three token kinds the scanner recognizes in corrupted text, and the
//! located form the scanner yields them in.

use serde::Serialize;

/// Largest value an operand can take. Operands are 1 to 3 decimal digits.
pub const MAX_OPERAND: u16 = 999;

/// The two operands of a `mul(A,B)` instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MulOperands {
    /// Left operand, `A`.
    pub lhs: u16,
    /// Right operand, `B`.
    pub rhs: u16,
}

impl MulOperands {
    /// Pair two operands. Both must be at most [`MAX_OPERAND`].
    pub fn new(lhs: u16, rhs: u16) -> Self {
        debug_assert!(lhs <= MAX_OPERAND && rhs <= MAX_OPERAND);
        Self { lhs, rhs }
    }

    /// `lhs * rhs`, widened so the sum of any number of products fits.
    pub fn product(self) -> u64 {
        u64::from(self.lhs) * u64::from(self.rhs)
    }
}

/// A recognized token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Instruction {
    /// `mul(A,B)`.
    Mul(MulOperands),
    /// `do()`: subsequent `mul` instructions count.
    Enable,
    /// `don't()`: subsequent `mul` instructions are skipped.
    Disable,
}

impl Instruction {
    /// The operands if this is a `mul`.
    pub fn operands(&self) -> Option<MulOperands> {
        match self {
            Self::Mul(ops) => Some(*ops),
            Self::Enable | Self::Disable => None,
        }
    }

    /// True for `do()` and `don't()`.
    pub fn is_control(&self) -> bool {
        matches!(self, Self::Enable | Self::Disable)
    }
}

/// An instruction together with where it sits in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    /// Byte offset of the first character of the token.
    pub offset: usize,
    /// Length of the token in bytes.
    pub len: usize,
    /// What was recognized.
    pub instruction: Instruction,
}

impl Token {
    /// Byte offset one past the last character of the token.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}
