//! # ahkb-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `PathProbe` — does a filesystem path exist (decides `Run` quoting)
//!   - `TextStore` — read and write whole text files
//!   - `ProgramCatalog` — names of installed programs
//! - Generate AHK command lines and whole scripts (`script_generator`)
//! - Recover actions from a script's metadata comments (`importer`)
//! - Orchestrate open / save / export through `ProjectService`
//!
//! ## Dependency rule
//! Depends on `ahkb-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod importer;
pub mod ports;
pub mod script_generator;
pub mod services;
