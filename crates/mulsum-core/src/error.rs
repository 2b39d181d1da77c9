//! # Error Types
//!
//! Scanning and accumulation cannot fail: a malformed token is simply not a
//! match. The only failures in this crate come from loading the input text,
//! and they carry enough context to be reported without further wrapping.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for mulsum.
#[derive(Error, Debug)]
pub enum MulsumError {
    /// The input file could not be read.
    #[error("failed to read input {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid UTF-8.
    #[error("input {} is not valid UTF-8: {source}", .path.display())]
    Encoding {
        /// Path that was being read.
        path: PathBuf,
        /// Decoding failure, including the offending byte offset.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Standard input could not be read, or was not valid UTF-8.
    #[error("failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),
}

/// Convenience alias for results in this crate.
pub type MulsumResult<T> = Result<T, MulsumError>;
