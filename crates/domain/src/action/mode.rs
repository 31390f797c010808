//! Run mode — the window state a launched program starts in.

use std::str::FromStr;

use crate::error::DecodeError;

/// Start-up window state for a [`Run`](super::ActionKind::Run) action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunMode {
    #[default]
    Normal,
    Minimized,
    Maximized,
    Hidden,
}

impl RunMode {
    pub const ALL: [Self; 4] = [Self::Normal, Self::Minimized, Self::Maximized, Self::Hidden];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Minimized => "Minimized",
            Self::Maximized => "Maximized",
            Self::Hidden => "Hidden",
        }
    }
}

impl std::fmt::Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunMode {
    type Err = DecodeError;

    /// Case-insensitive and whitespace-tolerant; a blank string means
    /// [`RunMode::Normal`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::Normal);
        }
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DecodeError::UnknownRunMode(s.to_string()))
    }
}
