//! Script importer — recovers actions from an exported script.
//!
//! Only `;ACTION:` metadata comments are read. Command lines, headers and
//! the hotkey block are ignored, so a hand-edited script still loads as
//! long as its comments survive.

use std::path::Path;

use ahkb_domain::error::DecodeError;
use ahkb_domain::metadata;
use ahkb_domain::project::Project;

/// A metadata line that could not be decoded.
#[derive(Debug)]
pub struct SkippedLine {
    /// One-based line number in the script.
    pub line_number: usize,
    pub error: DecodeError,
}

/// Outcome of [`import_script`].
#[derive(Debug)]
pub struct ScriptImport {
    pub project: Project,
    pub skipped: Vec<SkippedLine>,
}

/// Rebuild a project from script text.
///
/// The application name is the file stem of `source`; the hotkey keeps the
/// project default. Undecodable metadata lines are logged and listed in
/// [`ScriptImport::skipped`]; they never stop the import.
#[must_use]
pub fn import_script(text: &str, source: Option<&Path>) -> ScriptImport {
    let mut project = Project::new();
    if let Some(stem) = source.and_then(Path::file_stem) {
        project.application_name = stem.to_string_lossy().into_owned();
    }

    let mut skipped = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if !metadata::is_metadata_line(line) {
            continue;
        }
        let line_number = index + 1;
        match metadata::decode(line) {
            Ok(action) => project.push(action),
            Err(error) => {
                tracing::warn!(line_number, %error, "skipping undecodable ACTION line");
                skipped.push(SkippedLine { line_number, error });
            }
        }
    }

    tracing::debug!(
        actions = project.len(),
        skipped = skipped.len(),
        "script import complete"
    );
    ScriptImport { project, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahkb_domain::action::{Action, ActionKind, RunMode};

    use crate::script_generator::ScriptGenerator;

    #[test]
    fn should_recover_demo_actions_in_order() {
        let project = Project::new()
            .with_application_name("Demo")
            .with_actions(vec![Action::click("Start", 100, 200), Action::sleep("", 500)]);
        let script = ScriptGenerator::new(|_: &str| false).render(&project);

        let import = import_script(&script, Some(Path::new("scripts/Demo.ahk")));
        assert!(import.skipped.is_empty());
        assert_eq!(import.project.application_name, "Demo");
        assert_eq!(import.project.actions(), project.actions());
    }

    #[test]
    fn should_roundtrip_every_kind_through_a_script() {
        let actions = vec![
            Action::click("Open menu", 12, 34),
            Action::sleep("Settle", 250),
            Action::builder(ActionKind::Run)
                .name("Browser")
                .command("C:\\Program Files\\Browser\\browser.exe")
                .parameters("--incognito")
                .mode(RunMode::Maximized)
                .build(),
            Action::key_press("Search", "^l"),
            Action::wait_window("Browser window", "Browser"),
        ];
        let project = Project::new().with_actions(actions.clone());
        let script = ScriptGenerator::new(|_: &str| true).render(&project);

        let import = import_script(&script, None);
        assert_eq!(import.project.actions(), actions.as_slice());
    }

    #[test]
    fn should_skip_malformed_line_and_keep_going() {
        let script = "\
^!z::
;ACTION:Click;Name=Broken;X=left;Y=1
    MouseMove, left, 1
;ACTION:Sleep;Name=Nap;MS=100
    Sleep, 100
return";
        let import = import_script(script, None);
        assert_eq!(import.project.actions(), [Action::sleep("Nap", 100)]);
        assert_eq!(import.skipped.len(), 1);
        assert_eq!(import.skipped[0].line_number, 2);
    }

    #[test]
    fn should_skip_unknown_kind() {
        let script = ";ACTION:Scroll;Name=x\n;ACTION:KeyPress;Key=a";
        let import = import_script(script, None);
        assert_eq!(import.project.len(), 1);
        assert!(matches!(
            import.skipped[0].error,
            DecodeError::UnknownActionKind(_)
        ));
    }

    #[test]
    fn should_accept_indented_metadata_lines() {
        let import = import_script("    ;ACTION:Sleep;MS=5\r\n", None);
        assert_eq!(import.project.actions(), [Action::sleep("Sleep", 5)]);
    }

    #[test]
    fn should_ignore_script_without_metadata() {
        let import = import_script("#z::Run, notepad\nSleep, 100\n; plain comment", None);
        assert!(import.project.is_empty());
        assert!(import.skipped.is_empty());
    }

    #[test]
    fn should_keep_default_name_and_hotkey_without_source() {
        let import = import_script("", None);
        assert_eq!(import.project, Project::new());
    }
}
