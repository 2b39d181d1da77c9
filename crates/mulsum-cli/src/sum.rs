//! # Sum Command
//!
//! Loads the input, computes both totals and writes them out.
//!
//! The default text output is the stable contract: the all-products total and
//! the enabled-products total, one integer per line, nothing else on stdout.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use mulsum_core::{InputText, Report};

/// Input path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Arguments for computing the totals.
#[derive(Args, Debug)]
pub struct SumArgs {
    /// Input file. `-` reads standard input.
    #[arg(value_name = "INPUT", default_value = "input.txt")]
    pub input: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Which totals the text format prints.
    #[arg(long, value_enum, default_value_t = Part::Both)]
    pub part: Part,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bare integers, one per line.
    Text,
    /// The full report as a JSON object.
    Json,
}

/// Totals selectable for text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Part {
    /// Sum of every `mul(A,B)` product.
    All,
    /// Sum of the products enabled by `do()`/`don't()`.
    Enabled,
    /// Both, all-products first.
    Both,
}

/// Execute the sum command, writing results to `out`.
///
/// Returns exit code 0 on success. Unreadable input is an error.
pub fn run_sum(args: &SumArgs, out: &mut impl Write) -> Result<u8> {
    let input = load_input(&args.input)?;
    tracing::info!(bytes = input.len(), "scanning input");

    let report = Report::from_text(input.as_str());
    tracing::info!(
        muls = report.mul_count,
        enabled = report.enabled_count,
        controls = report.control_count,
        "scan complete"
    );

    write_report(&report, args.format, args.part, out).context("failed to write output")?;
    Ok(0)
}

fn load_input(path: &Path) -> Result<InputText> {
    if path.as_os_str() == STDIN_PATH {
        return InputText::from_reader(std::io::stdin().lock())
            .context("failed to load input");
    }
    InputText::from_path(path).context("failed to load input")
}

/// Render `report` in the requested format.
pub fn write_report(
    report: &Report,
    format: OutputFormat,
    part: Part,
    out: &mut impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if matches!(part, Part::All | Part::Both) {
                writeln!(out, "{}", report.all_products)?;
            }
            if matches!(part, Part::Enabled | Part::Both) {
                writeln!(out, "{}", report.enabled_products)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
