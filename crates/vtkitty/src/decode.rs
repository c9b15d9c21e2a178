//! Decoding of kitty keyboard protocol sequences into [`KeyEvent`]s.
//!
//! The input is the CSI payload (the bytes strictly between `ESC [` and
//! the trailer) plus the trailer character. The payload is a list of
//! `;`-separated sections, each a `:`-separated list of optional decimal
//! integers:
//!
//! ```text
//! keynum:shifted:alternate ; mods_plus_1:action ; codepoint:codepoint:...
//! ```
//!
//! Empty sub-values default to 0, except the first sub-value of the
//! second section which defaults to 1 so that an absent modifier field
//! yields no modifiers after the `-1` adjustment.

use core::fmt;

use crate::event::{KeyEvent, KeyEventKind, KeyModifiers};
use crate::tables;

/// Error type for key event decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A subfield is not a decimal integer.
    InvalidNum(String),
    /// A section has more subfields than the grammar allows.
    TooManyValues {
        section: &'static str,
        max: usize,
        got: usize,
    },
    /// The event action is outside 1..=3.
    InvalidAction(u32),
    /// A numeric value is not a Unicode scalar value.
    InvalidCodepoint(u32),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidNum(value) => {
                write!(f, "invalid number: {value:?}")
            }
            DecodeError::TooManyValues { section, max, got } => {
                write!(f, "too many values in {section} section: expected at most {max}, got {got}")
            }
            DecodeError::InvalidAction(action) => {
                write!(f, "invalid event action: {action}")
            }
            DecodeError::InvalidCodepoint(num) => {
                write!(f, "not a Unicode scalar value: {num}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Split a section into its integer sub-values, applying `missing` for
/// empty sub-values.
fn sub_values(section: &str, missing: u32) -> Result<Vec<u32>, DecodeError> {
    section
        .split(':')
        .map(|value| {
            if value.is_empty() {
                Ok(missing)
            } else {
                atoi_simd::parse::<u32>(value.as_bytes())
                    .map_err(|_| DecodeError::InvalidNum(value.to_string()))
            }
        })
        .collect()
}

/// Resolve a wire key number to its canonical name.
///
/// Legacy CSI 13 is ambiguous: Enter with the `u` trailer, F3 with any
/// other.
fn key_name(num: u32, trailer: char) -> Result<String, DecodeError> {
    if num == 0 {
        return Ok(String::new());
    }
    if num == 13 {
        return Ok(if trailer == 'u' { "ENTER" } else { "F3" }.into());
    }
    let func = tables::csi_to_functional_number(num).unwrap_or(num);
    if let Some(name) = tables::functional_number_to_name(func) {
        return Ok(name.into());
    }
    char::from_u32(func)
        .map(String::from)
        .ok_or(DecodeError::InvalidCodepoint(func))
}

/// Decode a CSI payload and trailer into a [`KeyEvent`].
///
/// Letter trailers (`A B C D H F P Q R S`) override the payload's key
/// number with the key they traditionally stand for; any other trailer
/// is accepted as-is.
///
/// # Errors
///
/// Return an error if a subfield is not numeric, a section is overlong,
/// the action is outside 1..=3, or a value is not a Unicode scalar.
pub fn decode_key_event(csi: &str, trailer: char) -> Result<KeyEvent, DecodeError> {
    let mut sections = csi.split(';');
    let first = sub_values(sections.next().unwrap_or(""), 0)?;
    let second = match sections.next() {
        Some(section) => sub_values(section, 1)?,
        None => Vec::new(),
    };
    let third = match sections.next() {
        Some(section) => sub_values(section, 0)?,
        None => Vec::new(),
    };

    if first.len() > 3 {
        return Err(DecodeError::TooManyValues {
            section: "key",
            max: 3,
            got: first.len(),
        });
    }
    if second.len() > 2 {
        return Err(DecodeError::TooManyValues {
            section: "modifier",
            max: 2,
            got: second.len(),
        });
    }

    let mods = second.first().map_or(0, |&raw| raw.saturating_sub(1));
    let kind = match second.get(1).copied().unwrap_or(1) {
        1 => KeyEventKind::Press,
        2 => KeyEventKind::Repeat,
        3 => KeyEventKind::Release,
        action => return Err(DecodeError::InvalidAction(action)),
    };

    let mut keynum = first.first().copied().unwrap_or(0);
    if let Some(num) = tables::letter_trailer_to_csi_number(trailer) {
        keynum = num;
    }

    let mut text = String::new();
    for &codepoint in &third {
        // An empty sub-value defaulted to 0; it contributes no text.
        if codepoint == 0 {
            continue;
        }
        text.push(char::from_u32(codepoint).ok_or(DecodeError::InvalidCodepoint(codepoint))?);
    }

    Ok(KeyEvent {
        kind,
        mods: KeyModifiers::from_bits_retain((mods & 0xFF) as u16),
        key: key_name(keynum, trailer)?,
        shifted_key: key_name(first.get(1).copied().unwrap_or(0), trailer)?,
        alternate_key: key_name(first.get(2).copied().unwrap_or(0), trailer)?,
        text,
    })
}
