//! # mulsum-cli — Command-Line Interface
//!
//! Provides the `mulsum` binary. Argument parsing and output rendering live
//! here; scanning and summing are delegated to `mulsum-core`.
//!
//! ```bash
//! mulsum                   # reads ./input.txt, prints two totals
//! mulsum memory.txt
//! cat memory.txt | mulsum -
//! mulsum --format json -v memory.txt
//! ```

pub mod logging;
pub mod sum;
