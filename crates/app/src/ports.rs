//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! Every port is synchronous: each call is a short, user-initiated file
//! operation.

pub mod path_probe;
pub mod program_catalog;
pub mod text_store;

pub use path_probe::PathProbe;
pub use program_catalog::ProgramCatalog;
pub use text_store::TextStore;
