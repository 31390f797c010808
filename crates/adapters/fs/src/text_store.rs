use std::path::Path;

use ahkb_app::ports::TextStore;
use ahkb_domain::error::BuilderError;

use crate::error::FsError;

/// [`TextStore`] over local files.
///
/// Reads decode invalid UTF-8 lossily so scripts saved in another encoding
/// still yield their ASCII metadata lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTextStore;

impl TextStore for FsTextStore {
    fn read_text(&self, path: &Path) -> Result<String, BuilderError> {
        let bytes = std::fs::read(path).map_err(|source| FsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "file read");
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write_text(&self, path: &Path, contents: &str) -> Result<(), BuilderError> {
        std::fs::write(path, contents).map_err(|source| FsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "file written");
        Ok(())
    }
}
