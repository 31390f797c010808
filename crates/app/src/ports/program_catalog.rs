//! Program catalog port — installed applications a `Run` action can name.

use std::collections::BTreeSet;

use ahkb_domain::error::BuilderError;

/// Lists the display names of installed programs.
pub trait ProgramCatalog: Send + Sync {
    /// Sorted, de-duplicated program names.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Storage`] when the catalog cannot be read.
    fn installed_programs(&self) -> Result<BTreeSet<String>, BuilderError>;
}
