//! # Report
//!
//! Both totals plus token counts, computed in one ordered pass over
//! [`scan`](crate::scanner::scan). Serializes to the JSON the CLI prints with
//! `--format json`.

use serde::Serialize;

use crate::accumulate::Gate;
use crate::scanner;

/// Totals and counts for one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Sum of every `mul(A,B)` product.
    pub all_products: u64,
    /// Sum of the products not switched off by `don't()`.
    pub enabled_products: u64,
    /// Number of `mul(A,B)` tokens.
    pub mul_count: usize,
    /// Number of `mul(A,B)` tokens that were enabled.
    pub enabled_count: usize,
    /// Number of `do()` and `don't()` tokens.
    pub control_count: usize,
}

impl Report {
    /// Scan `text` once and fill in every field.
    pub fn from_text(text: &str) -> Self {
        let span = tracing::debug_span!("report", input_len = text.len());
        let _enter = span.enter();

        let mut report = Self::default();
        let mut gate = Gate::default();

        for token in scanner::scan(text) {
            let instruction = token.instruction;
            if instruction.is_control() {
                report.control_count += 1;
            }
            if let Some(ops) = instruction.operands() {
                report.mul_count += 1;
                report.all_products += ops.product();
            }
            if let Some(ops) = gate.admit(instruction) {
                report.enabled_count += 1;
                report.enabled_products += ops.product();
            }
        }

        tracing::debug!(
            all = report.all_products,
            enabled = report.enabled_products,
            muls = report.mul_count,
            controls = report.control_count,
            "report complete"
        );
        report
    }
}
