//! Project document — the persisted JSON form of a [`Project`].
//!
//! ```json
//! {
//!   "applicationName": "Demo",
//!   "hotkeyExpression": "^!z",
//!   "actions": [
//!     { "type": "Click", "name": "Start", "x": 100, "y": 200, "ms": 0,
//!       "command": "", "mode": "Normal", "params": "" }
//!   ]
//! }
//! ```
//!
//! Every record field except `type` is optional on read so documents
//! written before a field existed still load. The header also accepts the
//! `app_name` / `hotkey` keys of the first document format.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionKind, RunMode};
use crate::error::{DecodeError, DocumentError};
use crate::project::{DEFAULT_APPLICATION_NAME, DEFAULT_HOTKEY, Project};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectDocument<R> {
    #[serde(default = "default_application_name", alias = "app_name")]
    application_name: String,
    #[serde(default = "default_hotkey", alias = "hotkey")]
    hotkey_expression: String,
    #[serde(default = "Vec::new")]
    actions: Vec<R>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ActionRecord {
    #[serde(rename = "type", alias = "kind")]
    kind: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    x: u32,
    #[serde(default)]
    y: u32,
    #[serde(default)]
    ms: u64,
    #[serde(default)]
    command: String,
    #[serde(default)]
    mode: String,
    #[serde(default)]
    params: String,
}

fn default_application_name() -> String {
    DEFAULT_APPLICATION_NAME.to_string()
}

fn default_hotkey() -> String {
    DEFAULT_HOTKEY.to_string()
}

impl From<&Action> for ActionRecord {
    fn from(action: &Action) -> Self {
        Self {
            kind: action.kind.to_string(),
            name: Some(action.name.clone()),
            x: action.x,
            y: action.y,
            ms: action.milliseconds,
            command: action.command.clone(),
            mode: action.mode.to_string(),
            params: action.parameters.clone(),
        }
    }
}

impl TryFrom<ActionRecord> for Action {
    type Error = DecodeError;

    fn try_from(record: ActionRecord) -> Result<Self, Self::Error> {
        let kind = ActionKind::from_str(&record.kind)?;
        let mode = RunMode::from_str(&record.mode)?;
        Ok(Action::builder(kind)
            .name(record.name.unwrap_or(record.kind))
            .position(record.x, record.y)
            .milliseconds(record.ms)
            .command(record.command)
            .mode(mode)
            .parameters(record.params)
            .build())
    }
}

/// An action record dropped while loading a document.
#[derive(Debug)]
pub struct RejectedRecord {
    /// Zero-based position in the document's `actions` array.
    pub index: usize,
    pub error: DecodeError,
}

/// Outcome of [`from_json`]: the project plus any records that were dropped.
#[derive(Debug)]
pub struct DocumentLoad {
    pub project: Project,
    pub rejected: Vec<RejectedRecord>,
}

/// Serialize a project to pretty-printed JSON.
///
/// # Errors
///
/// Returns [`DocumentError::Encode`] if serialization fails.
pub fn to_json(project: &Project) -> Result<String, DocumentError> {
    let document = ProjectDocument {
        application_name: project.application_name.clone(),
        hotkey_expression: project.hotkey_expression.clone(),
        actions: project
            .actions()
            .iter()
            .map(ActionRecord::from)
            .collect::<Vec<_>>(),
    };
    serde_json::to_string_pretty(&document).map_err(DocumentError::Encode)
}

/// Parse a project document.
///
/// Records with an unknown kind, an unknown mode, or a wrongly typed field
/// are dropped and listed in [`DocumentLoad::rejected`].
///
/// # Errors
///
/// - [`DocumentError::Parse`] when the text is not a JSON project document
/// - [`DocumentError::MissingKind`] when any record lacks its `type`
pub fn from_json(text: &str) -> Result<DocumentLoad, DocumentError> {
    let document: ProjectDocument<serde_json::Value> =
        serde_json::from_str(text).map_err(DocumentError::Parse)?;

    let mut actions = Vec::with_capacity(document.actions.len());
    let mut rejected = Vec::new();
    for (index, raw) in document.actions.into_iter().enumerate() {
        if !has_kind(&raw) {
            return Err(DocumentError::MissingKind { index });
        }
        let decoded = serde_json::from_value::<ActionRecord>(raw)
            .map_err(DecodeError::MalformedRecord)
            .and_then(Action::try_from);
        match decoded {
            Ok(action) => actions.push(action),
            Err(error) => rejected.push(RejectedRecord { index, error }),
        }
    }

    let project = Project::new()
        .with_application_name(document.application_name)
        .with_hotkey(document.hotkey_expression)
        .with_actions(actions);
    Ok(DocumentLoad { project, rejected })
}

fn has_kind(raw: &serde_json::Value) -> bool {
    ["type", "kind"]
        .into_iter()
        .any(|key| raw.get(key).is_some_and(|value| !value.is_null()))
}
