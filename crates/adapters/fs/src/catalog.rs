//! Start Menu program catalog.
//!
//! Installed programs are the `.lnk` shortcuts found anywhere below the
//! machine-wide and per-user Start Menu `Programs` folders. The shortcut
//! file stem is the display name; `Run` resolves such names itself.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use walkdir::WalkDir;

use ahkb_app::ports::ProgramCatalog;
use ahkb_domain::error::BuilderError;

use crate::error::FsError;

const PROGRAMS_SUBDIR: [&str; 4] = ["Microsoft", "Windows", "Start Menu", "Programs"];

/// Configuration for the Start Menu catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directories scanned recursively for shortcuts.
    ///
    /// Defaults to the `Programs` folders under `%PROGRAMDATA%` and
    /// `%APPDATA%` when those variables are set.
    pub start_menu_dirs: Vec<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let start_menu_dirs = ["PROGRAMDATA", "APPDATA"]
            .into_iter()
            .filter_map(std::env::var_os)
            .map(|base| PROGRAMS_SUBDIR.iter().fold(PathBuf::from(base), |p, c| p.join(c)))
            .collect();
        Self { start_menu_dirs }
    }
}

/// [`ProgramCatalog`] that scans Start Menu folders for `.lnk` shortcuts.
#[derive(Debug, Clone)]
pub struct StartMenuCatalog {
    config: CatalogConfig,
}

impl StartMenuCatalog {
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    fn scan(root: &Path, programs: &mut BTreeSet<String>) -> Result<(), FsError> {
        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) if source.depth() == 0 => {
                    return Err(FsError::Scan {
                        root: root.to_path_buf(),
                        source,
                    });
                }
                Err(err) => {
                    tracing::warn!(%err, root = %root.display(), "skipping unreadable start menu entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let is_shortcut = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("lnk"));
            if let (true, Some(stem)) = (is_shortcut, path.file_stem()) {
                programs.insert(stem.to_string_lossy().into_owned());
            }
        }
        Ok(())
    }
}

impl ProgramCatalog for StartMenuCatalog {
    fn installed_programs(&self) -> Result<BTreeSet<String>, BuilderError> {
        let mut programs = BTreeSet::new();
        for root in &self.config.start_menu_dirs {
            if !root.is_dir() {
                tracing::debug!(root = %root.display(), "start menu folder not found");
                continue;
            }
            Self::scan(root, &mut programs)?;
        }
        tracing::debug!(count = programs.len(), "start menu scan complete");
        Ok(programs)
    }
}
