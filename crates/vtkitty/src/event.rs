//! Key event types and shortcut matching.

use std::fmt::{self, Display};

use bitflags::bitflags;

use crate::shortcut::ParsedShortcut;

bitflags! {
    /// Modifier bits as they appear in the wire mod mask.
    ///
    /// The low eight bits belong to the protocol (bits above `SUPER` are
    /// reserved and carried through unchanged by the decoder).
    /// [`KeyModifiers::UNKNOWN`] is produced only by the shortcut parser
    /// for unrecognized modifier tokens; no live event ever carries it,
    /// so a misconfigured spec can never match.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
    #[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
    pub struct KeyModifiers: u16 {
        const SHIFT = 1;
        const ALT = 2;
        const CTRL = 4;
        const SUPER = 8;
        const UNKNOWN = 8 << 8;
    }
}

impl Display for KeyModifiers {
    /// Format the modifiers in config-spec style, joined by `+`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, flag) in [
            ("ctrl", KeyModifiers::CTRL),
            ("alt", KeyModifiers::ALT),
            ("shift", KeyModifiers::SHIFT),
            ("super", KeyModifiers::SUPER),
            ("unknown", KeyModifiers::UNKNOWN),
        ] {
            if self.contains(flag) {
                if !first {
                    f.write_str("+")?;
                }
                first = false;
                f.write_str(name)?;
            }
        }
        Ok(())
    }
}

bitflags! {
    /// Mask of event kinds, used to filter which kinds a shortcut
    /// matches against.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
    #[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
    pub struct KeyEventKinds: u8 {
        const PRESS = 1;
        const REPEAT = 2;
        const RELEASE = 4;
    }
}

/// Kind of a keyboard event.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeyEventKind {
    #[default]
    Press,
    Repeat,
    Release,
}

impl KeyEventKind {
    /// The kind as a single-bit [`KeyEventKinds`] mask.
    #[must_use]
    pub const fn as_kinds(self) -> KeyEventKinds {
        match self {
            KeyEventKind::Press => KeyEventKinds::PRESS,
            KeyEventKind::Repeat => KeyEventKinds::REPEAT,
            KeyEventKind::Release => KeyEventKinds::RELEASE,
        }
    }
}

/// A single keyboard event.
///
/// Key names are canonical: upper-case functional names such as
/// `"ENTER"` or `"KP_0"`, otherwise a single character. `mods` is the
/// single source of truth for modifier state; the boolean accessors
/// ([`KeyEvent::shift`] and friends) derive from it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct KeyEvent {
    /// Press, repeat or release.
    pub kind: KeyEventKind,
    /// Held modifiers.
    pub mods: KeyModifiers,
    /// Canonical name of the key.
    pub key: String,
    /// Text produced by the press, if any.
    pub text: String,
    /// Canonical name of the key produced with Shift held, or empty.
    pub shifted_key: String,
    /// Canonical name of the key on the alternate layout, or empty.
    pub alternate_key: String,
}

impl Default for KeyEvent {
    fn default() -> Self {
        KeyEvent {
            kind: KeyEventKind::Press,
            mods: KeyModifiers::empty(),
            key: String::new(),
            text: String::new(),
            shifted_key: String::new(),
            alternate_key: String::new(),
        }
    }
}

impl KeyEvent {
    /// A press of `key` with no modifiers.
    #[must_use]
    pub fn new(key: impl Into<String>) -> KeyEvent {
        KeyEvent {
            key: key.into(),
            ..KeyEvent::default()
        }
    }

    /// A plain Enter press.
    #[must_use]
    pub fn enter() -> KeyEvent {
        KeyEvent::new("ENTER")
    }

    /// A plain Backspace press.
    #[must_use]
    pub fn backspace() -> KeyEvent {
        KeyEvent::new("BACKSPACE")
    }

    #[must_use]
    pub const fn shift(&self) -> bool {
        self.mods.contains(KeyModifiers::SHIFT)
    }

    #[must_use]
    pub const fn alt(&self) -> bool {
        self.mods.contains(KeyModifiers::ALT)
    }

    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.mods.contains(KeyModifiers::CTRL)
    }

    #[must_use]
    pub const fn super_key(&self) -> bool {
        self.mods.contains(KeyModifiers::SUPER)
    }

    /// Match this event against a parsed shortcut, accepting press and
    /// repeat events.
    #[must_use]
    pub fn matches(&self, shortcut: &ParsedShortcut) -> bool {
        self.matches_with_kinds(shortcut, KeyEventKinds::PRESS | KeyEventKinds::REPEAT)
    }

    /// Match this event against a parsed shortcut, accepting only the
    /// given event kinds.
    ///
    /// When the event carries a shifted key and Shift is held, the
    /// comparison uses the shifted key with the SHIFT bit stripped:
    /// `shift+3` on a US layout produces `#`, and a configured `#`
    /// (without modifiers) is what should match it.
    #[must_use]
    pub fn matches_with_kinds(&self, shortcut: &ParsedShortcut, kinds: KeyEventKinds) -> bool {
        if !kinds.contains(self.kind.as_kinds()) {
            return false;
        }
        let (mods, key) = if !self.shifted_key.is_empty() && self.shift() {
            (
                self.mods.difference(KeyModifiers::SHIFT),
                self.shifted_key.as_str(),
            )
        } else {
            (self.mods, self.key.as_str())
        };
        mods == shortcut.mods && key == shortcut.key_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shortcut(mods: KeyModifiers, key_name: &str) -> ParsedShortcut {
        ParsedShortcut::new(mods, key_name)
    }

    #[test]
    fn test_modifier_accessors_follow_mods() {
        let event = KeyEvent {
            mods: KeyModifiers::CTRL | KeyModifiers::SUPER,
            ..KeyEvent::new("a")
        };
        assert!(event.ctrl());
        assert!(event.super_key());
        assert!(!event.shift());
        assert!(!event.alt());
    }

    #[test]
    fn test_matches_key_and_mods() {
        let event = KeyEvent {
            mods: KeyModifiers::CTRL,
            ..KeyEvent::new("a")
        };
        assert!(event.matches(&shortcut(KeyModifiers::CTRL, "a")));
        assert!(!event.matches(&shortcut(KeyModifiers::CTRL, "b")));
        assert!(!event.matches(&shortcut(KeyModifiers::empty(), "a")));
        assert!(!event.matches(&shortcut(KeyModifiers::CTRL | KeyModifiers::SHIFT, "a")));
    }

    #[test]
    fn test_matches_kind_filter() {
        let release = KeyEvent {
            kind: KeyEventKind::Release,
            ..KeyEvent::new("a")
        };
        assert!(!release.matches(&shortcut(KeyModifiers::empty(), "a")));
        assert!(release.matches_with_kinds(
            &shortcut(KeyModifiers::empty(), "a"),
            KeyEventKinds::RELEASE
        ));

        let repeat = KeyEvent {
            kind: KeyEventKind::Repeat,
            ..KeyEvent::new("a")
        };
        assert!(repeat.matches(&shortcut(KeyModifiers::empty(), "a")));
    }

    #[test]
    fn test_matches_shifted_variant() {
        // shift+3 on a US layout.
        let event = KeyEvent {
            mods: KeyModifiers::SHIFT,
            shifted_key: "#".into(),
            ..KeyEvent::new("3")
        };
        assert!(event.matches(&shortcut(KeyModifiers::empty(), "#")));
        assert!(!event.matches(&shortcut(KeyModifiers::SHIFT, "3")));
    }

    #[test]
    fn test_matches_shifted_variant_keeps_other_mods() {
        let event = KeyEvent {
            mods: KeyModifiers::CTRL | KeyModifiers::SHIFT,
            shifted_key: "#".into(),
            ..KeyEvent::new("3")
        };
        assert!(event.matches(&shortcut(KeyModifiers::CTRL, "#")));
        assert!(!event.matches(&shortcut(KeyModifiers::CTRL | KeyModifiers::SHIFT, "3")));
    }

    #[test]
    fn test_shifted_key_without_shift_is_ignored() {
        let event = KeyEvent {
            shifted_key: "#".into(),
            ..KeyEvent::new("3")
        };
        assert!(event.matches(&shortcut(KeyModifiers::empty(), "3")));
        assert!(!event.matches(&shortcut(KeyModifiers::empty(), "#")));
    }

    #[test]
    fn test_unknown_modifier_never_matches() {
        let event = KeyEvent {
            mods: KeyModifiers::SUPER,
            ..KeyEvent::new("a")
        };
        assert!(!event.matches(&shortcut(KeyModifiers::UNKNOWN, "a")));
    }

    #[test]
    fn test_modifiers_display() {
        let mods = KeyModifiers::CTRL | KeyModifiers::SHIFT;
        assert_eq!(mods.to_string(), "ctrl+shift");
        assert_eq!(KeyModifiers::empty().to_string(), "");
    }
}
