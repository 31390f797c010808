use std::path::Path;

use ahkb_app::ports::PathProbe;

/// [`PathProbe`] that asks the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPathProbe;

impl PathProbe for FsPathProbe {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }
}
