//! Canonical encoding of [`KeyEvent`]s into escape sequences.
//!
//! The encoder always picks one canonical wire shape for a given event,
//! so its output is byte-identical across runs. Sections whose content
//! is all-default are omitted, except that a bare `;` keeps a text-only
//! section in third position.

use std::fmt::Write as _;

use crate::csi;
use crate::event::{KeyEvent, KeyEventKind, KeyModifiers};
use crate::tables;

/// The number that stands for a canonical key name on the wire.
///
/// Functional keys use their legacy short CSI number when one exists,
/// otherwise their functional number; character keys use their code
/// point; an empty name is 0.
#[must_use]
pub fn csi_number_for_name(key_name: &str) -> u32 {
    if key_name.is_empty() {
        return 0;
    }
    match tables::name_to_functional_number(key_name) {
        Some(func) => tables::functional_to_csi_number(func).unwrap_or(func),
        None => key_name.chars().next().map_or(0, u32::from),
    }
}

/// Encode a [`KeyEvent`] as a complete `ESC [ ... trailer` sequence.
///
/// The caller must supply canonical key names (see [`KeyEvent`]); for a
/// multi-character name that is not functional, the first character
/// decides the wire number.
#[must_use]
pub fn encode_key_event(event: &KeyEvent) -> String {
    let key = csi_number_for_name(&event.key);
    let shifted = csi_number_for_name(&event.shifted_key);
    let alternate = csi_number_for_name(&event.alternate_key);

    // Enter keeps the `u` trailer: its CSI number 13 would otherwise
    // pick the F3 letter trailer.
    let mut trailer = if event.key == "ENTER" {
        'u'
    } else {
        tables::csi_number_to_letter_trailer(key).unwrap_or('u')
    };

    let action = match event.kind {
        KeyEventKind::Press => 1,
        KeyEventKind::Repeat => 2,
        KeyEventKind::Release => 3,
    };
    let wire_mods = u32::from(
        (event.mods
            & (KeyModifiers::SHIFT | KeyModifiers::ALT | KeyModifiers::CTRL | KeyModifiers::SUPER))
            .bits(),
    );

    let mut out = String::from(csi!());
    if key != 1 || !event.mods.is_empty() || shifted != 0 || alternate != 0 || !event.text.is_empty()
    {
        // Letter trailers carry the traditional `CSI 1;mods X` shape.
        let first = if trailer == 'u' { key } else { 1 };
        let _ = write!(out, "{first}");
    }
    if shifted != 0 || alternate != 0 {
        out.push(':');
        if shifted != 0 {
            let _ = write!(out, "{shifted}");
        }
        if alternate != 0 {
            let _ = write!(out, ":{alternate}");
        }
    }
    if !event.mods.is_empty() || action > 1 || !event.text.is_empty() {
        if action > 1 || wire_mods != 0 {
            let _ = write!(out, ";{}", wire_mods + 1);
            if action > 1 {
                let _ = write!(out, ":{action}");
            }
        } else {
            // Mods are all-default but text follows; hold its position.
            out.push(';');
        }
    }
    if !event.text.is_empty() {
        out.push(';');
        let mut first = true;
        for ch in event.text.chars() {
            if !first {
                out.push(':');
            }
            first = false;
            let _ = write!(out, "{}", u32::from(ch));
        }
    }
    if let Some(func) = tables::name_to_functional_number(&event.key) {
        if tables::has_tilde_trailer(func) {
            trailer = '~';
        }
    }
    out.push(trailer);
    out
}
