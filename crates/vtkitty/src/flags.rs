//! Progressive enhancement negotiation for the keyboard protocol.
//!
//! Terminals keep a stack of enhancement flags per screen buffer;
//! clients push a flag set on entry, pop it on exit, and may query the
//! current set. These builders produce the corresponding `CSI > u`,
//! `CSI < u` and `CSI ? u` sequences.

use bitflags::bitflags;

use crate::csi;

bitflags! {
    /// Flags that tell a terminal to add extra information to keyboard
    /// events.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
    #[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
    pub struct KeyboardEnhancementFlags: u8 {
        /// Represent Escape and modified keys unambiguously as CSI-u
        /// sequences.
        const DISAMBIGUATE_ESCAPE_CODES = 0b0000_0001;
        /// Report repeat and release events, not just presses.
        const REPORT_EVENT_TYPES = 0b0000_0010;
        /// Report shifted and alternate-layout keycodes alongside the
        /// base keycode.
        const REPORT_ALTERNATE_KEYS = 0b0000_0100;
        /// Report all keys, including plain text, as escape codes.
        const REPORT_ALL_KEYS_AS_ESCAPE_CODES = 0b0000_1000;
        /// Report the text associated with a key press.
        const REPORT_ASSOCIATED_TEXT = 0b0001_0000;
    }
}

impl KeyboardEnhancementFlags {
    /// `CSI > flags u`: push this flag set onto the terminal's stack.
    #[must_use]
    pub fn push_sequence(self) -> String {
        format!("{}{}u", csi!(">"), self.bits())
    }

    /// `CSI < n u`: pop `n` entries off the terminal's stack.
    #[must_use]
    pub fn pop_sequence(count: u16) -> String {
        format!("{}{}u", csi!("<"), count.max(1))
    }

    /// `CSI ? u`: ask the terminal for the current flag set.
    #[must_use]
    pub const fn query_sequence() -> &'static str {
        csi!("?u")
    }
}
