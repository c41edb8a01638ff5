//! Platform key tables and locale-aware character translation.
//!
//! Contains:
//! - Named key alias table (string → virtual-key code)
//! - Canonical key names for rendering a parsed spec back to text
//! - `char_key_code`: locale-aware character-to-keycode translation
//!   (`VkKeyScanW` on Windows; a stub returning `None` elsewhere)

use crate::parser::VirtualKey;

// Fixed virtual-key codes for named keys.
pub const VK_BACK: VirtualKey = VirtualKey(0x08);
pub const VK_TAB: VirtualKey = VirtualKey(0x09);
pub const VK_RETURN: VirtualKey = VirtualKey(0x0D);
pub const VK_ESCAPE: VirtualKey = VirtualKey(0x1B);
pub const VK_SPACE: VirtualKey = VirtualKey(0x20);
pub const VK_PAGE_UP: VirtualKey = VirtualKey(0x21);
pub const VK_PAGE_DOWN: VirtualKey = VirtualKey(0x22);
pub const VK_END: VirtualKey = VirtualKey(0x23);
pub const VK_HOME: VirtualKey = VirtualKey(0x24);
pub const VK_LEFT: VirtualKey = VirtualKey(0x25);
pub const VK_UP: VirtualKey = VirtualKey(0x26);
pub const VK_RIGHT: VirtualKey = VirtualKey(0x27);
pub const VK_DOWN: VirtualKey = VirtualKey(0x28);
pub const VK_INSERT: VirtualKey = VirtualKey(0x2D);
pub const VK_DELETE: VirtualKey = VirtualKey(0x2E);
pub const VK_F1: VirtualKey = VirtualKey(0x70);

/// Parse a named key string into its virtual-key code.
///
/// Accepts human-readable aliases such as `"Enter"`, `"Return"`, `"Esc"`,
/// `"PgUp"`, and the arrow keys. Matching is case-insensitive. Returns
/// `None` for unrecognized strings.
pub fn named_key_code(s: &str) -> Option<VirtualKey> {
    match s.to_ascii_lowercase().as_str() {
        "tab" => Some(VK_TAB),
        "enter" | "return" => Some(VK_RETURN),
        "esc" | "escape" => Some(VK_ESCAPE),
        "space" | "spacebar" => Some(VK_SPACE),
        "backspace" | "back" => Some(VK_BACK),
        "delete" | "del" => Some(VK_DELETE),
        "insert" | "ins" => Some(VK_INSERT),
        "home" => Some(VK_HOME),
        "end" => Some(VK_END),
        "pageup" | "pgup" => Some(VK_PAGE_UP),
        "pagedown" | "pgdown" => Some(VK_PAGE_DOWN),
        "left" => Some(VK_LEFT),
        "up" => Some(VK_UP),
        "right" => Some(VK_RIGHT),
        "down" => Some(VK_DOWN),
        _ => None,
    }
}

/// Canonical display name for a virtual-key code.
///
/// Named keys, function keys, and alphanumerics render to their names;
/// anything else falls back to a hex rendering. Every form re-parses to
/// the same code, so rendering stays lossless even for locale-translated
/// punctuation keys.
pub fn key_name(key: VirtualKey) -> String {
    let named = match key {
        VK_BACK => Some("Backspace"),
        VK_TAB => Some("Tab"),
        VK_RETURN => Some("Enter"),
        VK_ESCAPE => Some("Esc"),
        VK_SPACE => Some("Space"),
        VK_PAGE_UP => Some("PageUp"),
        VK_PAGE_DOWN => Some("PageDown"),
        VK_END => Some("End"),
        VK_HOME => Some("Home"),
        VK_LEFT => Some("Left"),
        VK_UP => Some("Up"),
        VK_RIGHT => Some("Right"),
        VK_DOWN => Some("Down"),
        VK_INSERT => Some("Insert"),
        VK_DELETE => Some("Delete"),
        _ => None,
    };
    if let Some(name) = named {
        return name.to_string();
    }
    match key.0 {
        0x70..=0x87 => format!("F{}", key.0 - 0x70 + 1),
        0x30..=0x39 | 0x41..=0x5A => char::from(key.0 as u8).to_string(),
        code => format!("0x{code:02X}"),
    }
}

/// Translate a character to a virtual-key code using the active keyboard
/// layout.
///
/// Only the low byte of the scan result is kept; the shift-state bits are
/// discarded because the combo string already names its modifiers.
#[cfg(windows)]
pub fn char_key_code(ch: char) -> Option<VirtualKey> {
    use windows::Win32::UI::Input::KeyboardAndMouse::VkKeyScanW;

    let unit = u16::try_from(ch as u32).ok()?;
    let scan = unsafe { VkKeyScanW(unit) };
    if scan == -1 {
        return None;
    }
    Some(VirtualKey((scan as u16) & 0xFF))
}

/// Character translation needs an OS keyboard layout; without a backend the
/// key is permanently unresolvable.
#[cfg(not(windows))]
pub fn char_key_code(_ch: char) -> Option<VirtualKey> {
    None
}
