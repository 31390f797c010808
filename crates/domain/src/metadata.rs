//! Metadata comment line — one action encoded as an AHK comment.
//!
//! Format: `;ACTION:<Kind>;Key1=Val1;Key2=Val2;...`
//!
//! | Kind | Keys |
//! |------|------|
//! | Click | `Name`, `X`, `Y` |
//! | Sleep | `Name`, `MS` |
//! | Run | `Name`, `Cmd`, `Params`, `Mode` |
//! | KeyPress | `Name`, `Key` |
//! | WaitWindow | `Name`, `Title` |
//!
//! `;` separates fields, so every `;` inside `Params` is written as `,`.
//! That substitution is lossy and is kept so previously exported scripts
//! keep loading the same way. Other values are written verbatim apart
//! from line breaks, which become spaces.

use std::collections::HashMap;
use std::str::FromStr;

use crate::action::{Action, ActionKind, RunMode};
use crate::error::{DecodeError, MalformedLine};

/// Prefix shared by every metadata line.
pub const MARKER: &str = ";ACTION:";

/// Whether a raw script line is a metadata line candidate.
#[must_use]
pub fn is_metadata_line(line: &str) -> bool {
    line.trim().starts_with(MARKER)
}

/// Encode an action as a single metadata comment line.
#[must_use]
pub fn encode(action: &Action) -> String {
    let mut line = format!("{MARKER}{}", action.kind);
    push_field(&mut line, "Name", &single_line(&action.name));
    match action.kind {
        ActionKind::Click => {
            push_field(&mut line, "X", &action.x.to_string());
            push_field(&mut line, "Y", &action.y.to_string());
        }
        ActionKind::Sleep => {
            push_field(&mut line, "MS", &action.milliseconds.to_string());
        }
        ActionKind::Run => {
            push_field(&mut line, "Cmd", &single_line(&action.command));
            push_field(
                &mut line,
                "Params",
                &single_line(&action.parameters).replace(';', ","),
            );
            push_field(&mut line, "Mode", action.mode.as_str());
        }
        ActionKind::KeyPress => push_field(&mut line, "Key", &single_line(&action.command)),
        ActionKind::WaitWindow => {
            push_field(&mut line, "Title", &single_line(&action.command));
        }
    }
    line
}

/// Decode a metadata comment line back into an action.
///
/// Leading indentation and a trailing line terminator are ignored; trailing
/// spaces belong to the last value. Tokens without `=` are skipped and
/// absent keys take their defaults: `Name` falls back to the kind's
/// display name, numbers to `0`, strings to empty.
///
/// # Errors
///
/// - [`DecodeError::MalformedMetadataLine`] when the marker is missing or
///   a numeric field does not parse
/// - [`DecodeError::UnknownActionKind`] for a kind outside the closed set
/// - [`DecodeError::UnknownRunMode`] for an unrecognised `Mode`
pub fn decode(line: &str) -> Result<Action, DecodeError> {
    let rest = line
        .trim_start()
        .trim_end_matches(['\r', '\n'])
        .strip_prefix(MARKER)
        .ok_or(MalformedLine::MissingMarker)?;
    let mut tokens = rest.split(';');
    let kind = ActionKind::from_str(tokens.next().unwrap_or_default())?;
    let fields: HashMap<&str, &str> = tokens.filter_map(|token| token.split_once('=')).collect();

    let mut builder = Action::builder(kind);
    if let Some(name) = fields.get("Name") {
        builder = builder.name(*name);
    }
    let action = match kind {
        ActionKind::Click => builder
            .position(number(&fields, "X")?, number(&fields, "Y")?)
            .build(),
        ActionKind::Sleep => builder.milliseconds(number(&fields, "MS")?).build(),
        ActionKind::Run => builder
            .command(text(&fields, "Cmd"))
            .parameters(text(&fields, "Params"))
            .mode(RunMode::from_str(text(&fields, "Mode"))?)
            .build(),
        ActionKind::KeyPress => builder.command(text(&fields, "Key")).build(),
        ActionKind::WaitWindow => builder.command(text(&fields, "Title")).build(),
    };
    Ok(action)
}

fn push_field(line: &mut String, key: &str, value: &str) {
    line.push(';');
    line.push_str(key);
    line.push('=');
    line.push_str(value);
}

fn single_line(value: &str) -> String {
    value.replace(['\r', '\n'], " ")
}

fn text<'a>(fields: &HashMap<&str, &'a str>, key: &str) -> &'a str {
    fields.get(key).copied().unwrap_or_default()
}

fn number<T: FromStr + Default>(
    fields: &HashMap<&str, &str>,
    key: &'static str,
) -> Result<T, MalformedLine> {
    match fields.get(key) {
        None => Ok(T::default()),
        Some(value) => value.trim().parse().map_err(|_| MalformedLine::InvalidNumber {
            key,
            value: (*value).to_string(),
        }),
    }
}
