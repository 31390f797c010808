//! Project — the named, ordered action list the builder edits.

use crate::action::Action;
use crate::error::BuilderError;

/// Application name given to a fresh project.
pub const DEFAULT_APPLICATION_NAME: &str = "MyScript";

/// Hotkey given to a fresh project.
pub const DEFAULT_HOTKEY: &str = "^!z";

/// Header fields plus the actions, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub application_name: String,
    /// AHK hotkey syntax, e.g. `^!z` or `#+F12`.
    pub hotkey_expression: String,
    actions: Vec<Action>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            application_name: DEFAULT_APPLICATION_NAME.to_string(),
            hotkey_expression: DEFAULT_HOTKEY.to_string(),
            actions: Vec::new(),
        }
    }
}

impl Project {
    /// Create an empty project with the default name and hotkey.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = name.into();
        self
    }

    #[must_use]
    pub fn with_hotkey(mut self, hotkey: impl Into<String>) -> Self {
        self.hotkey_expression = hotkey.into();
        self
    }

    #[must_use]
    pub fn with_actions(mut self, actions: Vec<Action>) -> Self {
        self.actions = actions;
        self
    }

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Append an action at the end of the sequence.
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Insert an action at `index`, shifting later actions down.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::IndexOutOfRange`] when `index > len`.
    pub fn insert(&mut self, index: usize, action: Action) -> Result<(), BuilderError> {
        if index > self.actions.len() {
            return Err(self.out_of_range(index));
        }
        self.actions.insert(index, action);
        Ok(())
    }

    /// Replace the action at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::IndexOutOfRange`] when `index >= len`.
    pub fn replace(&mut self, index: usize, action: Action) -> Result<Action, BuilderError> {
        let len = self.actions.len();
        let slot = self
            .actions
            .get_mut(index)
            .ok_or(BuilderError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, action))
    }

    /// Remove and return the action at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::IndexOutOfRange`] when `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<Action, BuilderError> {
        if index >= self.actions.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.actions.remove(index))
    }

    /// Swap the action at `index` with its predecessor.
    ///
    /// Returns the action's new position; the first action stays put.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::IndexOutOfRange`] when `index >= len`.
    pub fn move_up(&mut self, index: usize) -> Result<usize, BuilderError> {
        if index >= self.actions.len() {
            return Err(self.out_of_range(index));
        }
        if index == 0 {
            return Ok(0);
        }
        self.actions.swap(index - 1, index);
        Ok(index - 1)
    }

    /// Swap the action at `index` with its successor.
    ///
    /// Returns the action's new position; the last action stays put.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::IndexOutOfRange`] when `index >= len`.
    pub fn move_down(&mut self, index: usize) -> Result<usize, BuilderError> {
        let len = self.actions.len();
        if index >= len {
            return Err(self.out_of_range(index));
        }
        if index + 1 == len {
            return Ok(index);
        }
        self.actions.swap(index, index + 1);
        Ok(index + 1)
    }

    fn out_of_range(&self, index: usize) -> BuilderError {
        BuilderError::IndexOutOfRange {
            index,
            len: self.actions.len(),
        }
    }
}
