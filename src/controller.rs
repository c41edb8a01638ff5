//! Deck controller: the stateful core the presentation layer talks to.
//!
//! Owns the configuration, the edit-mode flag, the pending press
//! position, and the index-keyed shortcut bindings for the visible mode.
//! Bindings are rebuilt after every change that can reorder or replace
//! tiles, since button indices are the only identity tiles have.

use std::path::{Path, PathBuf};

use touchdeck_config::{Config, ConfigError, EditForm, Mode, SwitchDirection};
use touchdeck_keybindings::ShortcutSpec;

use crate::gesture::{Gesture, classify};

/// A resolved shortcut attached to a tile of the visible mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutBinding {
    pub button_index: usize,
    pub spec: ShortcutSpec,
}

/// What a release event amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// A swipe was recognized; the underlying tap is suppressed whether or
    /// not the mode actually changed.
    Swiped { mode_changed: bool },
    /// A plain tap; the presentation layer resolves the tile under the
    /// release point.
    Tap,
}

/// What the edit dialog decided about a tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Save the form as a new or replacement entry.
    Save(EditForm),
    /// Delete the tile outright.
    Delete,
}

/// The deck's stateful core.
pub struct DeckController {
    config: Config,
    config_path: PathBuf,
    edit_mode: bool,
    press: Option<(f64, f64)>,
    bindings: Vec<ShortcutBinding>,
}

impl DeckController {
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        let mut controller = Self {
            config,
            config_path,
            edit_mode: false,
            press: None,
            bindings: Vec::new(),
        };
        controller.rebuild_bindings();
        controller
    }

    /// Load the configuration file and wrap it.
    pub fn load(config_path: &Path) -> Result<Self, ConfigError> {
        let config = Config::load_from(config_path)?;
        Ok(Self::new(config, config_path.to_path_buf()))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn current_mode(&self) -> &Mode {
        self.config.current_mode()
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Flip edit mode. Tile shortcuts go quiet while editing.
    pub fn toggle_edit_mode(&mut self) -> bool {
        self.edit_mode = !self.edit_mode;
        self.edit_mode
    }

    /// Shortcut bindings for the visible mode, keyed by button index.
    pub fn bindings(&self) -> &[ShortcutBinding] {
        &self.bindings
    }

    /// Find the tile bound to a captured shortcut, if any.
    ///
    /// Returns `None` while edit mode is active so captured chords reach
    /// the dialog instead of firing tiles.
    pub fn match_shortcut(&self, spec: &ShortcutSpec) -> Option<usize> {
        if self.edit_mode {
            return None;
        }
        self.bindings
            .iter()
            .find(|b| &b.spec == spec)
            .map(|b| b.button_index)
    }

    /// Record the press position of a touch.
    pub fn on_press(&mut self, pos: (f64, f64)) {
        self.press = Some(pos);
    }

    /// Classify the release against the recorded press.
    ///
    /// Swipes switch modes (left advances, right retreats). A release
    /// with no recorded press is a tap.
    pub fn on_release(&mut self, pos: (f64, f64)) -> ReleaseOutcome {
        let Some(press) = self.press.take() else {
            return ReleaseOutcome::Tap;
        };
        let gesture = classify(
            press,
            pos,
            self.config.swipe_threshold,
            self.config.swipe_vertical_tolerance,
        );
        match gesture {
            Gesture::SwipeLeft => ReleaseOutcome::Swiped {
                mode_changed: self.switch_mode(SwitchDirection::Next),
            },
            Gesture::SwipeRight => ReleaseOutcome::Swiped {
                mode_changed: self.switch_mode(SwitchDirection::Previous),
            },
            Gesture::Tap => ReleaseOutcome::Tap,
        }
    }

    /// Switch to a neighboring mode and rebuild bindings.
    ///
    /// The active mode is session state; it is not persisted here.
    pub fn switch_mode(&mut self, direction: SwitchDirection) -> bool {
        let changed = self.config.switch_mode(direction);
        if changed {
            self.rebuild_bindings();
        }
        changed
    }

    /// Append a new mode, make it current, and persist.
    pub fn add_mode(&mut self, name: &str) -> Result<usize, ConfigError> {
        let index = self.config.add_mode(name);
        self.rebuild_bindings();
        self.save()?;
        Ok(index)
    }

    /// Apply the edit dialog's decision to a tile of the visible mode.
    ///
    /// `button_index: None` with a save appends a new tile. Every accepted
    /// change persists immediately; a persistence failure propagates while
    /// the in-memory state keeps the change.
    pub fn apply_edit(
        &mut self,
        button_index: Option<usize>,
        outcome: EditOutcome,
    ) -> Result<(), ConfigError> {
        let mode_index = self.config.current_mode_index;
        match outcome {
            EditOutcome::Save(form) => {
                let entry = form.finish()?;
                self.config.upsert_button(mode_index, button_index, entry)?;
            }
            EditOutcome::Delete => {
                let index = button_index.ok_or_else(|| {
                    ConfigError::Validation("cannot delete a button that does not exist yet".into())
                })?;
                self.config.delete_button(mode_index, index)?;
            }
        }
        self.rebuild_bindings();
        self.save()
    }

    /// Persist the configuration to its file.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.config.save_to(&self.config_path)
    }

    fn rebuild_bindings(&mut self) {
        self.bindings = self
            .config
            .current_buttons()
            .iter()
            .enumerate()
            .filter_map(|(i, button)| {
                let text = button.shortcut_text()?;
                let spec = touchdeck_keybindings::parse(text);
                spec.is_resolved().then_some(ShortcutBinding {
                    button_index: i,
                    spec,
                })
            })
            .collect();
    }
}
