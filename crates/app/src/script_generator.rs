//! Script generator — turns actions into AHK v1 command lines.
//!
//! [`ScriptGenerator::command_lines`] covers a single action;
//! [`ScriptGenerator::render`] wraps a whole project in the script layout
//! below, putting each action's metadata comment before its commands.
//!
//! ```text
//! ; Generated by AHK Script Builder - <application name>
//! ; Keep the ACTION comments if you want to reload this script into the builder.
//! CoordMode, Mouse, Screen
//! SetTitleMatchMode, 2
//!
//! ; Hotkey to run the sequence: <hotkey>
//! <hotkey>::
//! ;ACTION:...
//!     <command lines>
//! return
//! ```

use std::borrow::Cow;

use ahkb_domain::action::{Action, ActionKind, RunMode};
use ahkb_domain::metadata;
use ahkb_domain::project::Project;

use crate::ports::PathProbe;

/// Hotkey written when the project's hotkey is blank.
pub const FALLBACK_HOTKEY: &str = "F9";

/// Seconds `WinWait` waits for a window before giving up.
pub const WINDOW_WAIT_TIMEOUT: u32 = 10;

const INDENT: &str = "    ";

/// Generates AHK script text, asking a [`PathProbe`] how to quote `Run` targets.
pub struct ScriptGenerator<P> {
    probe: P,
}

impl<P: PathProbe> ScriptGenerator<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// AHK command lines for one action, without indentation or comment.
    #[must_use]
    pub fn command_lines(&self, action: &Action) -> Vec<String> {
        match action.kind {
            ActionKind::Click => vec![
                format!("MouseMove, {}, {}", action.x, action.y),
                "Click".to_string(),
            ],
            ActionKind::Sleep => vec![format!("Sleep, {}", action.milliseconds)],
            ActionKind::Run => vec![self.run_line(action)],
            ActionKind::KeyPress => vec![format!("Send, {}", action.command)],
            ActionKind::WaitWindow => vec![
                format!("WinWait, {}, , {WINDOW_WAIT_TIMEOUT}", action.command),
                format!("WinActivate, {}", action.command),
            ],
        }
    }

    /// Full script for a project, lines joined with `\n`.
    #[must_use]
    pub fn render(&self, project: &Project) -> String {
        let hotkey = match project.hotkey_expression.trim() {
            "" => FALLBACK_HOTKEY,
            hotkey => hotkey,
        };
        tracing::debug!(actions = project.len(), %hotkey, "rendering script");

        let mut lines = vec![
            format!(
                "; Generated by AHK Script Builder - {}",
                project.application_name
            ),
            "; Keep the ACTION comments if you want to reload this script into the builder."
                .to_string(),
            "CoordMode, Mouse, Screen".to_string(),
            "SetTitleMatchMode, 2".to_string(),
            String::new(),
            format!("; Hotkey to run the sequence: {hotkey}"),
            format!("{hotkey}::"),
        ];
        for action in project.actions() {
            lines.push(metadata::encode(action));
            lines.extend(
                self.command_lines(action)
                    .into_iter()
                    .map(|line| format!("{INDENT}{line}")),
            );
        }
        lines.push("return".to_string());
        lines.join("\n")
    }

    fn run_line(&self, action: &Action) -> String {
        let target = self.run_target(&action.command);
        let parameters = if action.parameters.is_empty() {
            String::new()
        } else {
            format!(" {}", action.parameters)
        };
        match launch_option(action.mode) {
            Some(option) => format!("Run, {target}{parameters}, , {option}"),
            None => format!("Run, {target}{parameters}"),
        }
    }

    /// Existing paths with spaces are quoted; registered application names
    /// and already-quoted commands pass through.
    fn run_target<'a>(&self, command: &'a str) -> Cow<'a, str> {
        if command.contains(' ') && !command.contains('"') && self.probe.exists(command) {
            Cow::Owned(format!("\"{command}\""))
        } else {
            Cow::Borrowed(command)
        }
    }
}

/// AHK `Run` window option for a mode; `Normal` takes none.
fn launch_option(mode: RunMode) -> Option<&'static str> {
    match mode {
        RunMode::Normal => None,
        RunMode::Minimized => Some("Min"),
        RunMode::Maximized => Some("Max"),
        RunMode::Hidden => Some("Hide"),
    }
}
