//! Shortcut parsing for the TouchDeck launcher.
//!
//! This crate turns human-readable key-combo strings like "Ctrl+Shift+F5"
//! into a [`ShortcutSpec`]: an ordered list of modifier key codes plus one
//! resolved primary virtual-key code, ready for synthetic injection.
//!
//! Features:
//! - Standard-shortcut aliases ("Undo" is parsed as "Ctrl+Z")
//! - Named keys (Enter, Esc, PgUp, arrows, ...), F1-F24, alphanumerics
//! - Locale-aware fallback translation for other single characters

pub mod parser;
pub mod platform;

pub use parser::{ModifierKey, ShortcutSpec, VirtualKey, parse, resolve_key};

/// Familiar command names mapped to their canonical combo strings.
///
/// Lookup is case-sensitive: "Undo" matches, "undo" is treated as an
/// ordinary key token.
pub const STANDARD_SHORTCUTS: &[(&str, &str)] = &[
    ("Undo", "Ctrl+Z"),
    ("Redo", "Ctrl+Y"),
    ("Copy", "Ctrl+C"),
    ("Paste", "Ctrl+V"),
    ("Cut", "Ctrl+X"),
    ("SelectAll", "Ctrl+A"),
];

/// Resolve a standard-shortcut name to its combo string.
///
/// Unmatched text passes through unchanged (trimmed).
pub fn normalize_shortcut(text: &str) -> &str {
    let text = text.trim();
    STANDARD_SHORTCUTS
        .iter()
        .find(|(name, _)| *name == text)
        .map(|(_, combo)| *combo)
        .unwrap_or(text)
}
