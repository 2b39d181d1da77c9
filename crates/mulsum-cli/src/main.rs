//! # mulsum CLI Entry Point
//!
//! Parses arguments, installs logging, and runs the sum command.

use std::process::ExitCode;

use clap::Parser;

use mulsum_cli::logging::{self, LogFormat};
use mulsum_cli::sum::{run_sum, SumArgs};

/// Sum the mul(A,B) instructions hidden in corrupted memory.
///
/// Prints the sum of every product, then the sum of the products left
/// enabled by do()/don't() control tokens, one per line.
#[derive(Parser, Debug)]
#[command(name = "mulsum", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log line format.
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(flatten)]
    sum: SumArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_format);

    tracing::debug!(input = %cli.sum.input.display(), "mulsum starting");

    let stdout = std::io::stdout();
    match run_sum(&cli.sum, &mut stdout.lock()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
