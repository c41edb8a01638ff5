//! Synthetic keyboard-event injection.
//!
//! Takes a parsed [`ShortcutSpec`] and replays it as OS key events:
//! modifiers pressed in their listed order, the primary key tapped, then
//! the modifiers released in reverse order. Injection is fire-and-forget:
//! events are handed to the OS and nothing is verified about how the
//! focused application reacts.
//!
//! The backend lives behind the [`KeyInjector`] trait so the sequencing
//! logic can be tested with a recording fake.

pub mod platform;

pub use platform::SystemInjector;
use touchdeck_keybindings::{ShortcutSpec, VirtualKey};

/// Low-level key event sink.
///
/// Implementations report capability through [`is_supported`]; an
/// unsupported injector is a permanent condition for the process lifetime,
/// not a transient failure.
///
/// [`is_supported`]: KeyInjector::is_supported
pub trait KeyInjector {
    /// Whether this injector can deliver key events at all.
    fn is_supported(&self) -> bool;

    /// Press a key.
    fn key_down(&self, key: VirtualKey);

    /// Release a key.
    fn key_up(&self, key: VirtualKey);
}

/// Replay a shortcut as synthetic key events.
///
/// Event order: modifiers down (listed order), primary key down, primary
/// key up, modifiers up (reverse order). Returns `false` without emitting
/// any event when the spec has no resolved primary key or the injector is
/// unsupported; returns `true` once the full sequence has been handed off.
pub fn synthesize(injector: &dyn KeyInjector, spec: &ShortcutSpec) -> bool {
    let Some(key) = spec.key else {
        log::debug!("Not synthesizing: shortcut has no resolved key");
        return false;
    };
    if !injector.is_supported() {
        log::warn!("Key injection is not available on this platform");
        return false;
    }

    for modifier in &spec.modifiers {
        injector.key_down(modifier.code());
    }
    injector.key_down(key);
    injector.key_up(key);
    for modifier in spec.modifiers.iter().rev() {
        injector.key_up(modifier.code());
    }
    log::debug!("Synthesized shortcut {spec}");
    true
}
