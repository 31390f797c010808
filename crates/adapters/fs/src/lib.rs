//! # ahkb-adapter-fs
//!
//! Filesystem adapter for the ports defined in `ahkb-app::ports`.
//!
//! ## Responsibilities
//! - `FsPathProbe` — `PathProbe` backed by [`std::path::Path::exists`]
//! - `FsTextStore` — `TextStore` reading and writing whole files
//! - `StartMenuCatalog` — `ProgramCatalog` listing Start Menu shortcuts
//!
//! ## Dependency rule
//! Depends on `ahkb-app` (for port traits) and `ahkb-domain` (for error types).
//! The `app` and `domain` crates must never reference this adapter.

mod catalog;
mod error;
mod path_probe;
mod text_store;

pub use catalog::{CatalogConfig, StartMenuCatalog};
pub use error::FsError;
pub use path_probe::FsPathProbe;
pub use text_store::FsTextStore;
