//! Deck modes: named pages of tiles.

use serde::{Deserialize, Serialize};

use super::button::ButtonEntry;

/// A named page of tiles. The deck shows one mode at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mode {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub buttons: Vec<ButtonEntry>,
}

impl Mode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            buttons: Vec::new(),
        }
    }
}

/// Which neighbor `switch_mode` moves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchDirection {
    /// Advance to the following mode, wrapping past the end.
    Next,
    /// Retreat to the preceding mode, wrapping past the start.
    Previous,
}
