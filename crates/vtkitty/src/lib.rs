#![warn(clippy::pedantic)]

//! Codec for the [kitty keyboard protocol](https://sw.kovidgoyal.net/kitty/keyboard-protocol/).
//!
//! Translates between structured [`KeyEvent`]s and the protocol's CSI
//! escape sequences, parses human-readable shortcut specs such as
//! `ctrl+shift+a`, and matches live events against them.

mod cache;
mod decode;
mod encode;
mod event;
mod flags;
mod macros;
mod shortcut;
pub mod tables;
pub mod window;

pub use decode::{DecodeError, decode_key_event};
pub use encode::{csi_number_for_name, encode_key_event};
pub use event::{KeyEvent, KeyEventKind, KeyEventKinds, KeyModifiers};
pub use flags::KeyboardEnhancementFlags;
pub use shortcut::{ParsedShortcut, ShortcutParser};
pub use window::{WindowSystemKeyEvent, decode_key_event_as_window_system_key};
