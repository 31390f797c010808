//! Filesystem adapter error types.

use std::path::PathBuf;

use ahkb_domain::error::BuilderError;

/// Errors specific to the filesystem adapter.
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Walking a start-menu directory failed part way.
    #[error("failed to scan {}", root.display())]
    Scan {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl FsError {
    /// Convert into a [`BuilderError::Storage`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> BuilderError {
        BuilderError::Storage(Box::new(self))
    }
}

impl From<FsError> for BuilderError {
    fn from(err: FsError) -> Self {
        err.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn not_found() -> std::io::Error {
        std::io::Error::from(std::io::ErrorKind::NotFound)
    }

    #[test]
    fn should_display_path_of_failed_read() {
        let err = FsError::Read {
            path: PathBuf::from("project.json"),
            source: not_found(),
        };
        assert_eq!(err.to_string(), "failed to read project.json");
    }

    #[test]
    fn should_convert_into_storage_error() {
        let err: BuilderError = FsError::Write {
            path: PathBuf::from("out.ahk"),
            source: not_found(),
        }
        .into();
        assert!(matches!(err, BuilderError::Storage(_)));
    }

    #[test]
    fn should_keep_io_error_in_source_chain() {
        let err: BuilderError = FsError::Read {
            path: PathBuf::from("x"),
            source: not_found(),
        }
        .into();
        let fs_err = err.source().expect("storage error has a source");
        let io_err = fs_err.source().expect("fs error has a source");
        let io_err = io_err
            .downcast_ref::<std::io::Error>()
            .expect("source is an io error");
        assert_eq!(io_err.kind(), std::io::ErrorKind::NotFound);
    }
}
