//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`BuilderError`] via `#[from]`. Adapters box their own error types into
//! [`BuilderError::Storage`].

/// Top-level error for every ahkb operation.
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    /// The persisted project document is structurally unusable.
    #[error("invalid project document")]
    InvalidProjectDocument(#[from] DocumentError),

    /// A single action could not be decoded.
    #[error("failed to decode action")]
    Decode(#[from] DecodeError),

    /// An editing operation referenced a position outside the action list.
    #[error("action index {index} out of range for {len} actions")]
    IndexOutOfRange { index: usize, len: usize },

    /// The file extension is neither a project document nor a script.
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// An adapter failed to read or write its backing store.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Failures that abort loading a whole project document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The text is not JSON, or not shaped like a project document.
    #[error("failed to parse project document")]
    Parse(#[source] serde_json::Error),

    /// An action record has no `type` discriminator.
    #[error("action record {index} has no type")]
    MissingKind { index: usize },

    /// Serializing the document failed.
    #[error("failed to encode project document")]
    Encode(#[source] serde_json::Error),
}

/// Failures local to one metadata line or one action record.
///
/// The offending entry is dropped; the surrounding load carries on.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("unknown action kind {0:?}")]
    UnknownActionKind(String),

    #[error("unknown run mode {0:?}")]
    UnknownRunMode(String),

    #[error("malformed metadata line")]
    MalformedMetadataLine(#[from] MalformedLine),

    #[error("malformed action record")]
    MalformedRecord(#[source] serde_json::Error),
}

/// Why a metadata line could not be split into usable fields.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MalformedLine {
    #[error("line does not start with the ;ACTION: marker")]
    MissingMarker,

    #[error("{key} is not a non-negative integer: {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}
