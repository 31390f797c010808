//! Action kind — the closed set of steps a script can perform.

use std::str::FromStr;

use crate::error::DecodeError;

/// Discriminator of an [`Action`](super::Action).
///
/// The set is closed: every codec matches on it exhaustively, so a new
/// variant does not compile until each of them handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Move the pointer to absolute screen coordinates and click.
    Click,
    /// Pause for a number of milliseconds.
    Sleep,
    /// Launch a program or registered application.
    Run,
    /// Send a key sequence.
    KeyPress,
    /// Wait for a window whose title matches, then activate it.
    WaitWindow,
}

impl ActionKind {
    /// Every kind, in display order.
    pub const ALL: [Self; 5] = [
        Self::Click,
        Self::Sleep,
        Self::Run,
        Self::KeyPress,
        Self::WaitWindow,
    ];

    /// Name used in metadata lines, project documents, and as the default
    /// action name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "Click",
            Self::Sleep => "Sleep",
            Self::Run => "Run",
            Self::KeyPress => "KeyPress",
            Self::WaitWindow => "WaitWindow",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DecodeError::UnknownActionKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_every_display_name() {
        for kind in ActionKind::ALL {
            assert_eq!(kind.to_string().parse::<ActionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn should_reject_unknown_kind() {
        let result = "DoubleClick".parse::<ActionKind>();
        assert!(matches!(
            result,
            Err(DecodeError::UnknownActionKind(ref kind)) if kind == "DoubleClick"
        ));
    }

    #[test]
    fn should_match_kind_names_case_sensitively() {
        assert!("click".parse::<ActionKind>().is_err());
    }
}
