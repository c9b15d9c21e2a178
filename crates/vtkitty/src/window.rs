//! Bridge from decoded key events to the windowing backend's
//! representation.
//!
//! The backend identifies keys by number (functional number or Unicode
//! code point) and uses its own action and modifier constants. Note the
//! backend's CONTROL and ALT bits trade places relative to the wire mod
//! mask, so conversion maps bit by bit.

use crate::csi;
use crate::decode::decode_key_event;
use crate::event::{KeyEvent, KeyEventKind};
use crate::tables;

/// Key release action.
pub const ACTION_RELEASE: u32 = 0;
/// Key press action.
pub const ACTION_PRESS: u32 = 1;
/// Key autorepeat action.
pub const ACTION_REPEAT: u32 = 2;

/// Shift modifier bit.
pub const MOD_SHIFT: u32 = 1;
/// Control modifier bit.
pub const MOD_CONTROL: u32 = 2;
/// Alt modifier bit.
pub const MOD_ALT: u32 = 4;
/// Super modifier bit.
pub const MOD_SUPER: u32 = 8;

/// A key event in the windowing backend's representation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSystemKeyEvent {
    pub key: u32,
    pub shifted_key: u32,
    pub alternate_key: u32,
    pub mods: u32,
    pub action: u32,
    pub text: String,
}

/// Numeric form of a canonical key name: the functional number if the
/// name is functional, otherwise the code point of its character; an
/// empty name is 0.
fn key_number(name: &str) -> u32 {
    if name.is_empty() {
        return 0;
    }
    tables::name_to_functional_number(name)
        .unwrap_or_else(|| name.chars().next().map_or(0, u32::from))
}

impl KeyEvent {
    /// Convert to the windowing backend's representation.
    #[must_use]
    pub fn as_window_system_event(&self) -> WindowSystemKeyEvent {
        let action = match self.kind {
            KeyEventKind::Press => ACTION_PRESS,
            KeyEventKind::Repeat => ACTION_REPEAT,
            KeyEventKind::Release => ACTION_RELEASE,
        };
        let mut mods = 0;
        if self.shift() {
            mods |= MOD_SHIFT;
        }
        if self.alt() {
            mods |= MOD_ALT;
        }
        if self.ctrl() {
            mods |= MOD_CONTROL;
        }
        if self.super_key() {
            mods |= MOD_SUPER;
        }
        WindowSystemKeyEvent {
            key: key_number(&self.key),
            shifted_key: key_number(&self.shifted_key),
            alternate_key: key_number(&self.alternate_key),
            mods,
            action,
            text: self.text.clone(),
        }
    }
}

/// Decode a complete escape sequence into a window-system key event.
///
/// Strips the leading `ESC [` and the trailer, then decodes; any
/// failure (missing introducer, empty sequence, malformed payload)
/// yields `None`.
#[must_use]
pub fn decode_key_event_as_window_system_key(seq: &str) -> Option<WindowSystemKeyEvent> {
    let rest = seq.strip_prefix(csi!())?;
    let trailer = rest.chars().next_back()?;
    let payload = &rest[..rest.len() - trailer.len_utf8()];
    let event = decode_key_event(payload, trailer).ok()?;
    Some(event.as_window_system_event())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyModifiers;

    #[test]
    fn test_functional_key_number() {
        let event = KeyEvent::enter().as_window_system_event();
        assert_eq!(event.key, 57345);
        assert_eq!(event.action, ACTION_PRESS);
        assert_eq!(event.mods, 0);
    }

    #[test]
    fn test_character_key_number() {
        let event = KeyEvent::new("a").as_window_system_event();
        assert_eq!(event.key, 97);
    }

    #[test]
    fn test_mod_bits_are_remapped() {
        let event = KeyEvent {
            mods: KeyModifiers::ALT | KeyModifiers::CTRL,
            ..KeyEvent::new("a")
        };
        let converted = event.as_window_system_event();
        // Wire: alt=2, ctrl=4. Backend: control=2, alt=4.
        assert_eq!(converted.mods, MOD_CONTROL | MOD_ALT);
    }

    #[test]
    fn test_actions() {
        let mut event = KeyEvent::new("a");
        event.kind = KeyEventKind::Release;
        assert_eq!(event.as_window_system_event().action, ACTION_RELEASE);
        event.kind = KeyEventKind::Repeat;
        assert_eq!(event.as_window_system_event().action, ACTION_REPEAT);
    }

    #[test]
    fn test_shifted_and_alternate_numbers_and_text() {
        let event = KeyEvent {
            shifted_key: "A".into(),
            alternate_key: "UP".into(),
            text: "x".into(),
            ..KeyEvent::new("a")
        };
        let converted = event.as_window_system_event();
        assert_eq!(converted.shifted_key, 65);
        assert_eq!(converted.alternate_key, 57352);
        assert_eq!(converted.text, "x");
    }

    #[test]
    fn test_decode_full_sequence() {
        let event = decode_key_event_as_window_system_key("\x1b[97;5u").unwrap();
        assert_eq!(event.key, 97);
        assert_eq!(event.mods, MOD_CONTROL);

        let up = decode_key_event_as_window_system_key("\x1b[A").unwrap();
        assert_eq!(up.key, 57352);
    }

    #[test]
    fn test_decode_full_sequence_failures() {
        // No CSI introducer.
        assert!(decode_key_event_as_window_system_key("97;5u").is_none());
        // Nothing after the introducer.
        assert!(decode_key_event_as_window_system_key("\x1b[").is_none());
        // Malformed payload.
        assert!(decode_key_event_as_window_system_key("\x1b[no;pe u").is_none());
    }
}
