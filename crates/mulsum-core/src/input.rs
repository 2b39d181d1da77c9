//! # Input Loading
//!
//! Reads the whole input into memory before any scanning starts. A leading
//! UTF-8 byte-order mark is dropped; everything else is kept verbatim.

use std::io::Read;
use std::path::Path;

use crate::error::{MulsumError, MulsumResult};

const BOM: char = '\u{feff}';

/// The text to scan, owned for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputText(String);

impl InputText {
    /// Wrap text that is already in memory.
    pub fn new(text: impl Into<String>) -> Self {
        let mut text = text.into();
        if text.starts_with(BOM) {
            text.replace_range(..BOM.len_utf8(), "");
        }
        Self(text)
    }

    /// Read a whole file.
    ///
    /// # Errors
    ///
    /// [`MulsumError::Io`] if the file cannot be read, [`MulsumError::Encoding`]
    /// if it is not UTF-8.
    pub fn from_path(path: &Path) -> MulsumResult<Self> {
        let bytes = std::fs::read(path).map_err(|source| MulsumError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|source| MulsumError::Encoding {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded input");
        Ok(Self::new(text))
    }

    /// Read everything from `reader`, typically standard input.
    ///
    /// # Errors
    ///
    /// [`MulsumError::Stdin`] on a read failure or non-UTF-8 content.
    pub fn from_reader(mut reader: impl Read) -> MulsumResult<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(MulsumError::Stdin)?;
        tracing::debug!(bytes = text.len(), "loaded input from reader");
        Ok(Self::new(text))
    }

    /// The text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there is no text at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for InputText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
