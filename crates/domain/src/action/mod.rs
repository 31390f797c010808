//! Action — one step of an automation sequence.
//!
//! An [`Action`] is a flat record: every field exists for every
//! [`ActionKind`], and the kind decides which of them the codecs read.
//! Fields a kind does not use keep their defaults.

mod kind;
mod mode;

pub use kind::ActionKind;
pub use mode::RunMode;

/// A single click, pause, launch, key send, or window wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub name: String,
    /// Absolute screen coordinates, used by [`ActionKind::Click`].
    pub x: u32,
    pub y: u32,
    /// Pause length, used by [`ActionKind::Sleep`].
    pub milliseconds: u64,
    /// Executable or application name for `Run`, send syntax for
    /// `KeyPress`, title pattern for `WaitWindow`.
    pub command: String,
    /// Used by [`ActionKind::Run`] only.
    pub mode: RunMode,
    /// Extra command-line arguments, used by [`ActionKind::Run`] only.
    pub parameters: String,
}

impl Action {
    /// Create a builder for an action of the given kind.
    #[must_use]
    pub fn builder(kind: ActionKind) -> ActionBuilder {
        ActionBuilder::new(kind)
    }

    /// Start a builder pre-filled with this action's fields.
    #[must_use]
    pub fn into_builder(self) -> ActionBuilder {
        ActionBuilder {
            kind: self.kind,
            name: Some(self.name),
            x: self.x,
            y: self.y,
            milliseconds: self.milliseconds,
            command: self.command,
            mode: self.mode,
            parameters: self.parameters,
        }
    }

    #[must_use]
    pub fn click(name: impl Into<String>, x: u32, y: u32) -> Self {
        Self::builder(ActionKind::Click)
            .name(name)
            .position(x, y)
            .build()
    }

    #[must_use]
    pub fn sleep(name: impl Into<String>, milliseconds: u64) -> Self {
        Self::builder(ActionKind::Sleep)
            .name(name)
            .milliseconds(milliseconds)
            .build()
    }

    #[must_use]
    pub fn run(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self::builder(ActionKind::Run)
            .name(name)
            .command(command)
            .build()
    }

    #[must_use]
    pub fn key_press(name: impl Into<String>, keys: impl Into<String>) -> Self {
        Self::builder(ActionKind::KeyPress)
            .name(name)
            .command(keys)
            .build()
    }

    #[must_use]
    pub fn wait_window(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self::builder(ActionKind::WaitWindow)
            .name(name)
            .command(title)
            .build()
    }
}

/// One-line summary of the fields the kind actually uses.
impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ActionKind::Click => write!(f, "X={}, Y={}", self.x, self.y),
            ActionKind::Sleep => write!(f, "MS={}", self.milliseconds),
            ActionKind::Run => write!(
                f,
                "Cmd={} Params={} Mode={}",
                self.command, self.parameters, self.mode
            ),
            ActionKind::KeyPress => write!(f, "Key={}", self.command),
            ActionKind::WaitWindow => write!(f, "Title={}", self.command),
        }
    }
}

/// Step-by-step builder for [`Action`].
///
/// An empty or missing name is replaced by the kind's display name.
#[derive(Debug)]
pub struct ActionBuilder {
    kind: ActionKind,
    name: Option<String>,
    x: u32,
    y: u32,
    milliseconds: u64,
    command: String,
    mode: RunMode,
    parameters: String,
}

impl ActionBuilder {
    fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            name: None,
            x: 0,
            y: 0,
            milliseconds: 0,
            command: String::new(),
            mode: RunMode::default(),
            parameters: String::new(),
        }
    }

    #[must_use]
    pub fn kind(mut self, kind: ActionKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn position(mut self, x: u32, y: u32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    #[must_use]
    pub fn milliseconds(mut self, milliseconds: u64) -> Self {
        self.milliseconds = milliseconds;
        self
    }

    #[must_use]
    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn parameters(mut self, parameters: impl Into<String>) -> Self {
        self.parameters = parameters.into();
        self
    }

    /// Consume the builder and return the [`Action`].
    #[must_use]
    pub fn build(self) -> Action {
        let name = self
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.kind.as_str().to_string());
        Action {
            kind: self.kind,
            name,
            x: self.x,
            y: self.y,
            milliseconds: self.milliseconds,
            command: self.command,
            mode: self.mode,
            parameters: self.parameters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fill_defaults_when_only_kind_given() {
        let action = Action::builder(ActionKind::Run).build();
        assert_eq!(action.kind, ActionKind::Run);
        assert_eq!(action.name, "Run");
        assert_eq!((action.x, action.y, action.milliseconds), (0, 0, 0));
        assert!(action.command.is_empty());
        assert_eq!(action.mode, RunMode::Normal);
        assert!(action.parameters.is_empty());
    }

    #[test]
    fn should_replace_empty_name_with_kind_name() {
        let action = Action::sleep("", 250);
        assert_eq!(action.name, "Sleep");
        assert_eq!(action.milliseconds, 250);
    }

    #[test]
    fn should_keep_explicit_name() {
        let action = Action::click("Start", 100, 200);
        assert_eq!(action.name, "Start");
        assert_eq!((action.x, action.y), (100, 200));
    }

    #[test]
    fn should_build_run_with_mode_and_parameters() {
        let action = Action::builder(ActionKind::Run)
            .command("notepad")
            .parameters("C:\\notes.txt")
            .mode(RunMode::Maximized)
            .build();
        assert_eq!(action.command, "notepad");
        assert_eq!(action.parameters, "C:\\notes.txt");
        assert_eq!(action.mode, RunMode::Maximized);
    }

    #[test]
    fn should_rebuild_from_existing_action() {
        let original = Action::builder(ActionKind::Run)
            .name("Pad")
            .command("notepad")
            .mode(RunMode::Minimized)
            .build();
        let edited = original.clone().into_builder().parameters("todo.txt").build();
        assert_eq!(edited.name, "Pad");
        assert_eq!(edited.mode, RunMode::Minimized);
        assert_eq!(edited.parameters, "todo.txt");

        let retyped = original.into_builder().kind(ActionKind::KeyPress).build();
        assert_eq!(retyped.kind, ActionKind::KeyPress);
        assert_eq!(retyped.command, "notepad");
    }

    #[test]
    fn should_summarize_kind_relevant_fields() {
        assert_eq!(Action::click("c", 3, 4).to_string(), "X=3, Y=4");
        assert_eq!(Action::sleep("s", 500).to_string(), "MS=500");
        assert_eq!(Action::key_press("k", "^c").to_string(), "Key=^c");
        assert_eq!(
            Action::wait_window("w", "Notepad").to_string(),
            "Title=Notepad"
        );
        let run = Action::builder(ActionKind::Run)
            .command("calc")
            .parameters("/x")
            .mode(RunMode::Hidden)
            .build();
        assert_eq!(run.to_string(), "Cmd=calc Params=/x Mode=Hidden");
    }
}
