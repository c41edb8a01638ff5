//! Shortcut combination parser.
//!
//! Parses human-readable combo strings like "Ctrl+Shift+F5" into a
//! [`ShortcutSpec`]. Parsing is total: a primary key token that does not
//! resolve yields `key: None`, which downstream treats as "cannot
//! synthesize this shortcut" rather than an error.

use std::fmt;

use crate::platform;

/// A platform virtual-key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VirtualKey(pub u16);

/// Keyboard modifier recognized in shortcut strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKey {
    /// Control key (aliases: ctrl, control, ctl)
    Ctrl,
    /// Shift key
    Shift,
    /// Alt key
    Alt,
    /// Meta/Windows key (aliases: meta, win, windows)
    Meta,
}

impl ModifierKey {
    /// Virtual-key code issued when this modifier is pressed.
    pub fn code(self) -> VirtualKey {
        match self {
            ModifierKey::Ctrl => VirtualKey(0x11),
            ModifierKey::Shift => VirtualKey(0x10),
            ModifierKey::Alt => VirtualKey(0x12),
            ModifierKey::Meta => VirtualKey(0x5B),
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "ctrl" | "control" | "ctl" => Some(ModifierKey::Ctrl),
            "shift" => Some(ModifierKey::Shift),
            "alt" => Some(ModifierKey::Alt),
            "meta" | "win" | "windows" => Some(ModifierKey::Meta),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ModifierKey::Ctrl => "Ctrl",
            ModifierKey::Shift => "Shift",
            ModifierKey::Alt => "Alt",
            ModifierKey::Meta => "Meta",
        }
    }
}

/// A parsed shortcut: ordered modifiers plus at most one primary key.
///
/// Modifier order is preserved from the input (it determines press order
/// during synthesis); duplicates are allowed but meaningless. `key: None`
/// means the string was empty or its key token did not resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutSpec {
    pub modifiers: Vec<ModifierKey>,
    pub key: Option<VirtualKey>,
}

impl ShortcutSpec {
    /// Whether the primary key resolved and the spec can be synthesized.
    pub fn is_resolved(&self) -> bool {
        self.key.is_some()
    }
}

impl fmt::Display for ShortcutSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self
            .modifiers
            .iter()
            .map(|m| m.label().to_string())
            .collect();
        if let Some(key) = self.key {
            parts.push(platform::key_name(key));
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// Parse a shortcut string into a [`ShortcutSpec`].
///
/// The text is trimmed and normalized against the standard-shortcut alias
/// table, then split on `+` (stray delimiters produce empty segments, which
/// are discarded). Every segment except the last is a modifier token;
/// unrecognized modifier tokens are silently dropped — a deliberate
/// leniency carried over from the config format. The last segment is the
/// primary key, resolved by [`resolve_key`].
///
/// Empty or whitespace-only text yields `([], None)`: "no shortcut".
pub fn parse(text: &str) -> ShortcutSpec {
    let text = crate::normalize_shortcut(text);
    if text.is_empty() {
        return ShortcutSpec::default();
    }

    let parts: Vec<&str> = text
        .split('+')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    let Some((key_token, modifier_tokens)) = parts.split_last() else {
        return ShortcutSpec::default();
    };

    let mut modifiers = Vec::with_capacity(modifier_tokens.len());
    for token in modifier_tokens {
        match ModifierKey::from_token(token) {
            Some(modifier) => modifiers.push(modifier),
            None => log::debug!("Ignoring unrecognized modifier token '{token}'"),
        }
    }

    let key = resolve_key(key_token);
    if key.is_none() {
        log::debug!("Shortcut key token '{key_token}' did not resolve");
    }

    ShortcutSpec { modifiers, key }
}

/// Resolve a primary key token to its virtual-key code.
///
/// Resolution order:
/// 1. Named keys (case-insensitive): Tab, Enter/Return, Esc/Escape, ...
/// 2. `F` followed by digits, value in 1..=24
/// 3. `0x` followed by a hex virtual-key code (the canonical rendering of
///    keys with no name of their own)
/// 4. A single ASCII alphanumeric character (uppercased)
/// 5. Any other single character: locale-aware platform translation
///
/// Everything else is unresolvable and yields `None`.
pub fn resolve_key(token: &str) -> Option<VirtualKey> {
    if token.is_empty() {
        return None;
    }
    if let Some(key) = platform::named_key_code(token) {
        return Some(key);
    }
    if let Some(key) = function_key_code(token) {
        return Some(key);
    }
    if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        return u16::from_str_radix(hex, 16).ok().map(VirtualKey);
    }

    let mut chars = token.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        if ch.is_ascii_alphanumeric() {
            return Some(VirtualKey(ch.to_ascii_uppercase() as u16));
        }
        return platform::char_key_code(ch);
    }
    None
}

fn function_key_code(token: &str) -> Option<VirtualKey> {
    let digits = token.strip_prefix(['f', 'F'])?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: u16 = digits.parse().ok()?;
    if (1..=24).contains(&n) {
        Some(VirtualKey(platform::VK_F1.0 + n - 1))
    } else {
        None
    }
}
