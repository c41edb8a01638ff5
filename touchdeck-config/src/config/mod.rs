//! The `Config` struct: deck contents plus presentation settings.
//!
//! Submodules split the implementation:
//! - `persistence` — file I/O and path resolution
//! - `mutations` — the mutation protocol (modes and buttons)

mod mutations;
mod persistence;

pub use persistence::CONFIG_FILE_NAME;

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{ButtonEntry, Mode};

fn default_background() -> String {
    "#0E1014".to_string()
}
fn default_button_color() -> String {
    "#1B2230".to_string()
}
fn default_button_active_color() -> String {
    "#2B364A".to_string()
}
fn default_button_text_color() -> String {
    "#F4F7FA".to_string()
}
fn default_header_background() -> String {
    "#0B0E14".to_string()
}
fn default_header_text_color() -> String {
    "#E7EBF0".to_string()
}
fn default_header_text() -> String {
    "TouchDeck".to_string()
}
fn default_header_font() -> String {
    "Segoe UI".to_string()
}
fn default_font() -> String {
    "Segoe UI 18 bold".to_string()
}
fn default_true() -> bool {
    true
}
fn default_window_width() -> u32 {
    1000
}
fn default_window_height() -> u32 {
    650
}
fn default_grid_columns() -> u32 {
    4
}
fn default_button_width() -> u32 {
    220
}
fn default_button_height() -> u32 {
    130
}
fn default_swipe_threshold() -> f64 {
    80.0
}
fn default_swipe_vertical_tolerance() -> f64 {
    60.0
}
fn default_prev_mode_shortcut() -> String {
    "Ctrl+Left".to_string()
}
fn default_next_mode_shortcut() -> String {
    "Ctrl+Right".to_string()
}

/// A negative index in the file is treated as 0 rather than a parse error.
fn deserialize_mode_index<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(usize::try_from(raw).unwrap_or(0))
}

/// The whole deck configuration: modes of tiles, the active mode, and the
/// presentation settings the rendering layer consumes.
///
/// Presentation fields are opaque to the core but round-tripped so hand
/// edits survive a save. Single-threaded store; no interior locking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Pages of tiles. Never empty after a successful load or `Default`;
    /// direct mutation must keep at least one mode.
    #[serde(default)]
    pub modes: Vec<Mode>,

    /// Index of the active mode, clamped to the mode list on load.
    #[serde(default, deserialize_with = "deserialize_mode_index")]
    pub current_mode_index: usize,

    /// Legacy flat tile list from pre-modes config files. Migrated into a
    /// single mode on load and never written back.
    #[serde(default, skip_serializing)]
    pub(crate) buttons: Vec<ButtonEntry>,

    /// Legacy name for the mode synthesized from `buttons`.
    #[serde(default, skip_serializing)]
    pub(crate) default_mode: Option<String>,

    // Presentation settings, carried verbatim for the rendering layer.
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_button_color")]
    pub button_color: String,
    #[serde(default = "default_button_active_color")]
    pub button_active_color: String,
    #[serde(default = "default_button_text_color")]
    pub button_text_color: String,
    #[serde(default = "default_header_background")]
    pub header_background: String,
    #[serde(default = "default_header_text_color")]
    pub header_text_color: String,
    #[serde(default = "default_header_text")]
    pub header_text: String,
    #[serde(default = "default_header_font")]
    pub header_font: String,
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default = "default_true")]
    pub fullscreen: bool,
    #[serde(default = "default_true")]
    pub show_header: bool,
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    #[serde(default = "default_grid_columns", alias = "columns")]
    pub grid_columns: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_rows: Option<u32>,
    #[serde(default = "default_button_width")]
    pub button_width: u32,
    #[serde(default = "default_button_height")]
    pub button_height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<u32>,
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,
    #[serde(default = "default_swipe_vertical_tolerance")]
    pub swipe_vertical_tolerance: f64,
    #[serde(default = "default_prev_mode_shortcut")]
    pub prev_mode_shortcut: String,
    #[serde(default = "default_next_mode_shortcut")]
    pub next_mode_shortcut: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modes: vec![Mode::new("Default")],
            current_mode_index: 0,
            buttons: Vec::new(),
            default_mode: None,
            background: default_background(),
            button_color: default_button_color(),
            button_active_color: default_button_active_color(),
            button_text_color: default_button_text_color(),
            header_background: default_header_background(),
            header_text_color: default_header_text_color(),
            header_text: default_header_text(),
            header_font: default_header_font(),
            font: default_font(),
            fullscreen: true,
            show_header: true,
            window_width: default_window_width(),
            window_height: default_window_height(),
            grid_columns: default_grid_columns(),
            grid_rows: None,
            button_width: default_button_width(),
            button_height: default_button_height(),
            icon_size: None,
            swipe_threshold: default_swipe_threshold(),
            swipe_vertical_tolerance: default_swipe_vertical_tolerance(),
            prev_mode_shortcut: default_prev_mode_shortcut(),
            next_mode_shortcut: default_next_mode_shortcut(),
        }
    }
}

impl Config {
    /// Fold pre-modes config shapes into the modes list.
    ///
    /// An empty `modes` list becomes one mode built from the legacy flat
    /// `buttons` list (possibly empty), named after `default_mode`. When
    /// `modes` is already populated the legacy fields are discarded.
    pub(crate) fn migrate_legacy(&mut self) {
        if self.modes.is_empty() {
            let name = self.default_mode.take().unwrap_or_else(|| "Default".to_string());
            let buttons = std::mem::take(&mut self.buttons);
            if !buttons.is_empty() {
                log::info!("Migrating {} legacy buttons into mode '{name}'", buttons.len());
            }
            self.modes.push(Mode { name, buttons });
        } else {
            self.buttons.clear();
            self.default_mode = None;
        }
        self.clamp_mode_index();
    }

    /// An out-of-range index resets to 0 rather than snapping to a
    /// neighboring mode.
    pub(crate) fn clamp_mode_index(&mut self) {
        if self.current_mode_index >= self.modes.len() {
            self.current_mode_index = 0;
        }
    }

    /// The active mode.
    ///
    /// `modes` is never empty after `load_from` or `Default`; callers
    /// mutating the field directly must keep at least one mode.
    pub fn current_mode(&self) -> &Mode {
        debug_assert!(!self.modes.is_empty(), "modes must never be empty");
        &self.modes[self.current_mode_index]
    }

    /// Tiles of the active mode.
    pub fn current_buttons(&self) -> &[ButtonEntry] {
        &self.current_mode().buttons
    }
}
