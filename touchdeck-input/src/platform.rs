//! OS key injection backends.

use touchdeck_keybindings::VirtualKey;

use crate::KeyInjector;

/// Injector backed by the operating system's event queue.
///
/// On Windows this posts events with `SendInput`; elsewhere it reports
/// itself unsupported and drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInjector;

impl SystemInjector {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(windows)]
mod imp {
    use std::mem;

    use touchdeck_keybindings::VirtualKey;
    use windows::Win32::UI::Input::KeyboardAndMouse::{
        INPUT, INPUT_0, INPUT_KEYBOARD, KEYBD_EVENT_FLAGS, KEYBDINPUT, KEYEVENTF_EXTENDEDKEY,
        KEYEVENTF_KEYUP, SendInput, VIRTUAL_KEY,
    };

    /// Navigation-cluster and arrow keys carry the extended-key flag so the
    /// OS distinguishes them from their numpad twins.
    fn is_extended(key: VirtualKey) -> bool {
        matches!(key.0, 0x21..=0x28 | 0x2D | 0x2E)
    }

    fn send(key: VirtualKey, up: bool) {
        let mut flags = if is_extended(key) {
            KEYEVENTF_EXTENDEDKEY
        } else {
            KEYBD_EVENT_FLAGS(0)
        };
        if up {
            flags |= KEYEVENTF_KEYUP;
        }
        let input = [INPUT {
            r#type: INPUT_KEYBOARD,
            Anonymous: INPUT_0 {
                ki: KEYBDINPUT {
                    wVk: VIRTUAL_KEY(key.0),
                    wScan: 0,
                    dwFlags: flags,
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        }];
        let sent = unsafe { SendInput(&input, mem::size_of::<INPUT>() as i32) };
        if sent == 0 {
            log::warn!("SendInput dropped key event for 0x{:02X}", key.0);
        }
    }

    pub fn key_down(key: VirtualKey) {
        send(key, false);
    }

    pub fn key_up(key: VirtualKey) {
        send(key, true);
    }
}

#[cfg(windows)]
impl KeyInjector for SystemInjector {
    fn is_supported(&self) -> bool {
        true
    }

    fn key_down(&self, key: VirtualKey) {
        imp::key_down(key);
    }

    fn key_up(&self, key: VirtualKey) {
        imp::key_up(key);
    }
}

#[cfg(not(windows))]
impl KeyInjector for SystemInjector {
    fn is_supported(&self) -> bool {
        false
    }

    fn key_down(&self, _key: VirtualKey) {}

    fn key_up(&self, _key: VirtualKey) {}
}
