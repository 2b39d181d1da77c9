//! # mulsum-core — Instruction Scanner and Accumulators
//!
//! Recovers `mul(A,B)` instructions from corrupted text and sums their
//! products, optionally honoring `do()`/`don't()` control tokens.
//!
//! ## Pipeline
//!
//! 1. [`InputText`] holds the whole input in memory.
//! 2. [`scanner`] yields located [`Token`]s in text order. Malformed
//!    instructions are not tokens; there is no error path.
//! 3. [`accumulate`] folds the tokens into a sum, threading a [`Gate`] left to
//!    right for the enabled-only total.
//! 4. [`Report`] gathers both totals and token counts in one pass.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests. The constant patterns are
//!   compiled with `expect`.
//! - Only input loading can fail; see [`MulsumError`].

pub mod accumulate;
pub mod error;
pub mod input;
pub mod instruction;
pub mod report;
pub mod scanner;

// Re-export primary types for ergonomic imports.
pub use accumulate::{enabled_operands, sum_all_products, sum_enabled_products, Gate};
pub use error::{MulsumError, MulsumResult};
pub use input::InputText;
pub use instruction::{Instruction, MulOperands, Token, MAX_OPERAND};
pub use report::Report;
pub use scanner::{mul_operands, scan, DISABLE_TOKEN, ENABLE_TOKEN};
