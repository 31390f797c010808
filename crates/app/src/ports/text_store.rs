//! Text store port — whole-file reads and writes.

use std::path::Path;

use ahkb_domain::error::BuilderError;

/// Reads and writes complete text files (project documents and scripts).
pub trait TextStore: Send + Sync {
    /// Read the whole file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Storage`] when the file cannot be read.
    fn read_text(&self, path: &Path) -> Result<String, BuilderError>;

    /// Replace the file at `path` with `contents`.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Storage`] when the file cannot be written.
    fn write_text(&self, path: &Path, contents: &str) -> Result<(), BuilderError>;
}
