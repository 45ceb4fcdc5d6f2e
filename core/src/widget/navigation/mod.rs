//! Dropdown navigation state machine.

use std::str::FromStr;
use thiserror::Error;

/// Keys the dropdown reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    /// Enter.
    Commit,
    /// Escape.
    Cancel,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported key: {0}")]
pub struct UnsupportedKey(pub String);

impl FromStr for NavKey {
    type Err = UnsupportedKey;

    /// Accepts DOM-style key names as well as the short forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowDown" | "Down" => Ok(NavKey::Down),
            "ArrowUp" | "Up" => Ok(NavKey::Up),
            "Enter" => Ok(NavKey::Commit),
            "Escape" | "Esc" => Ok(NavKey::Cancel),
            other => Err(UnsupportedKey(other.to_string())),
        }
    }
}

/// Named states of the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Closed,
    /// Visible with nothing to pick: loading, or zero matches.
    OpenEmpty,
    /// Results visible, nothing highlighted.
    OpenBrowsing,
    OpenHighlighted(usize),
}

/// Open flag plus keyboard highlight.
///
/// Invariant: `highlighted` is `None` whenever the dropdown is closed.
/// Callers keep it below the item count by resetting it when items change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dropdown {
    open: bool,
    highlighted: Option<usize>,
}

impl Dropdown {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn state(&self, item_count: usize) -> NavState {
        match (self.open, self.highlighted) {
            (false, _) => NavState::Closed,
            (true, _) if item_count == 0 => NavState::OpenEmpty,
            (true, None) => NavState::OpenBrowsing,
            (true, Some(index)) => NavState::OpenHighlighted(index),
        }
    }

    pub(crate) fn open(&mut self) {
        self.open = true;
    }

    pub(crate) fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    pub(crate) fn reset_highlight(&mut self) {
        self.highlighted = None;
    }

    /// `None` moves to the first row; otherwise one row down, stopping at the last.
    pub(crate) fn move_down(&mut self, item_count: usize) {
        if !self.open || item_count == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(index) => (index + 1).min(item_count - 1),
        });
    }

    /// One row up, stopping at the first. Does nothing without a highlight.
    pub(crate) fn move_up(&mut self) {
        if let Some(index) = self.highlighted {
            self.highlighted = Some(index.saturating_sub(1));
        }
    }
}
