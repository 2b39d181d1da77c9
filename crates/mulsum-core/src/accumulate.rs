//! # Accumulators
//!
//! Folds scanned `mul` tokens into sums. [`sum_all_products`] counts every
//! `mul(A,B)`; [`sum_enabled_products`] counts only those whose [`Gate`] is
//! open at their position, where the gate follows the most recent `do()` or
//! `don't()` to the left.

use crate::instruction::{Instruction, MulOperands};
use crate::scanner;

/// The enabled/disabled state threaded left to right through a scan.
///
/// Starts enabled. Only control tokens change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    enabled: bool,
}

impl Default for Gate {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Gate {
    /// Whether a `mul` seen now would count.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Feed the next instruction in text order.
    ///
    /// Control tokens update the state and yield `None`. A `mul` yields its
    /// operands if the gate is open, `None` otherwise.
    pub fn admit(&mut self, instruction: Instruction) -> Option<MulOperands> {
        match instruction {
            Instruction::Enable => {
                self.enabled = true;
                None
            }
            Instruction::Disable => {
                self.enabled = false;
                None
            }
            Instruction::Mul(ops) => self.enabled.then_some(ops),
        }
    }
}

/// Operands of the `mul` tokens that are enabled at their position.
pub fn enabled_operands(text: &str) -> impl Iterator<Item = MulOperands> + '_ {
    let mut gate = Gate::default();
    scanner::scan(text).filter_map(move |token| gate.admit(token.instruction))
}

/// Sum of `A * B` over every `mul(A,B)` token in `text`. Zero if there are none.
pub fn sum_all_products(text: &str) -> u64 {
    let total: u64 = scanner::mul_operands(text).map(MulOperands::product).sum();
    tracing::debug!(input_len = text.len(), total, "summed all products");
    total
}

/// Sum of `A * B` over the `mul(A,B)` tokens not switched off by a preceding
/// `don't()`. Zero if there are none.
pub fn sum_enabled_products(text: &str) -> u64 {
    let total: u64 = enabled_operands(text).map(MulOperands::product).sum();
    tracing::debug!(input_len = text.len(), total, "summed enabled products");
    total
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Filler that can never form or break a token: no parentheses, no digits.
    fn filler() -> impl Strategy<Value = String> {
        "[a-z !?%&^\\[\\]_]{0,6}"
    }

    /// Text drawn from the token alphabet, so partial and complete tokens
    /// of every kind show up often.
    fn noisy_text() -> impl Strategy<Value = String> {
        "[mul(),0-9don't ]{0,200}"
    }

    proptest! {
        /// Text without `mul(` sums to zero under both rules.
        #[test]
        fn no_mul_sums_to_zero(text in "[a-z(),0-9' ]{0,120}") {
            prop_assume!(!text.contains("mul("));
            prop_assert_eq!(sum_all_products(&text), 0);
            prop_assert_eq!(sum_enabled_products(&text), 0);
        }

        /// Well-formed `mul` tokens separated by filler sum to the sum of
        /// their products, and without control tokens both rules agree.
        #[test]
        fn well_formed_muls_sum_to_products(
            parts in prop::collection::vec((filler(), 0u16..=999, 0u16..=999), 0..20),
            tail in filler(),
        ) {
            let mut text = String::new();
            let mut expected = 0u64;
            for (junk, a, b) in &parts {
                text.push_str(junk);
                text.push_str(&format!("mul({a},{b})"));
                expected += u64::from(*a) * u64::from(*b);
            }
            text.push_str(&tail);

            prop_assert_eq!(sum_all_products(&text), expected);
            prop_assert_eq!(sum_enabled_products(&text), expected);
        }

        /// Gating can only remove products.
        #[test]
        fn enabled_never_exceeds_all(text in noisy_text()) {
            prop_assert!(sum_enabled_products(&text) <= sum_all_products(&text));
        }

        /// The single-pass report agrees with the two accumulators.
        #[test]
        fn report_agrees_with_accumulators(text in noisy_text()) {
            let report = crate::Report::from_text(&text);
            prop_assert_eq!(report.all_products, sum_all_products(&text));
            prop_assert_eq!(report.enabled_products, sum_enabled_products(&text));
            prop_assert!(report.enabled_count <= report.mul_count);
        }

        /// Prefixing `don't()` with no later `do()` disables everything.
        #[test]
        fn leading_disable_without_enable_zeroes(
            parts in prop::collection::vec((filler(), 0u16..=999, 0u16..=999), 0..10),
        ) {
            let mut text = String::from("don't()");
            for (junk, a, b) in &parts {
                text.push_str(junk);
                text.push_str(&format!("mul({a},{b})"));
            }
            prop_assert_eq!(sum_enabled_products(&text), 0);
        }
    }
}
