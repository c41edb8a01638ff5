//! The mutation protocol: every way the deck contents can change.
//!
//! Mutations validate before touching state and return typed errors.
//! Persistence is the caller's decision; these methods only mutate the
//! in-memory value.

use super::Config;
use crate::error::ConfigError;
use crate::types::{ButtonEntry, Mode, SwitchDirection};

impl Config {
    /// Move to the neighboring mode with wraparound.
    ///
    /// A no-op returning `false` with fewer than two modes; otherwise the
    /// index advances or retreats modulo the mode count and `true` is
    /// returned.
    pub fn switch_mode(&mut self, direction: SwitchDirection) -> bool {
        let count = self.modes.len();
        if count < 2 {
            return false;
        }
        self.current_mode_index = match direction {
            SwitchDirection::Next => (self.current_mode_index + 1) % count,
            SwitchDirection::Previous => (self.current_mode_index + count - 1) % count,
        };
        log::debug!(
            "Switched to mode {} '{}'",
            self.current_mode_index,
            self.current_mode().name
        );
        true
    }

    /// Append a new empty mode and make it current.
    ///
    /// A blank name becomes "Mode N" where N is the new mode count.
    /// Returns the new mode's index.
    pub fn add_mode(&mut self, name: &str) -> usize {
        let name = name.trim();
        let name = if name.is_empty() {
            format!("Mode {}", self.modes.len() + 1)
        } else {
            name.to_string()
        };
        self.modes.push(Mode::new(name));
        self.current_mode_index = self.modes.len() - 1;
        self.current_mode_index
    }

    /// Insert or replace a tile in a mode.
    ///
    /// `button_index: None` appends; `Some(i)` replaces the tile at `i`.
    /// The entry is validated before any state changes.
    pub fn upsert_button(
        &mut self,
        mode_index: usize,
        button_index: Option<usize>,
        entry: ButtonEntry,
    ) -> Result<(), ConfigError> {
        entry.validate()?;
        let mode = self.mode_mut(mode_index)?;
        match button_index {
            None => mode.buttons.push(entry),
            Some(i) => {
                let len = mode.buttons.len();
                let slot = mode.buttons.get_mut(i).ok_or_else(|| {
                    ConfigError::IndexOutOfRange(format!(
                        "button index {i} not in 0..{len}"
                    ))
                })?;
                *slot = entry;
            }
        }
        Ok(())
    }

    /// Remove a tile from a mode. Later tiles shift down one index, so
    /// callers holding index-keyed bindings must rebuild them.
    pub fn delete_button(
        &mut self,
        mode_index: usize,
        button_index: usize,
    ) -> Result<(), ConfigError> {
        let mode = self.mode_mut(mode_index)?;
        if button_index >= mode.buttons.len() {
            return Err(ConfigError::IndexOutOfRange(format!(
                "button index {button_index} not in 0..{}",
                mode.buttons.len()
            )));
        }
        mode.buttons.remove(button_index);
        Ok(())
    }

    fn mode_mut(&mut self, mode_index: usize) -> Result<&mut Mode, ConfigError> {
        let len = self.modes.len();
        self.modes.get_mut(mode_index).ok_or_else(|| {
            ConfigError::IndexOutOfRange(format!("mode index {mode_index} not in 0..{len}"))
        })
    }
}
