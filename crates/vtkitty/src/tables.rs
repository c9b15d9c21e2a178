//! Static number/name tables of the kitty keyboard protocol.
//!
//! Functional keys (arrows, the function row, keypad, media and modifier
//! keys) live in the Unicode private use area starting at
//! [`FUNCTIONAL_KEY_BASE`]. A handful of legacy CSI numbers and the ten
//! letter trailers stand in for some of them on the wire. The forward
//! lookups here are plain array/`match` reads; the inverse maps are built
//! once on first use and shared lock-free afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

/// First number of the functional key range.
pub const FUNCTIONAL_KEY_BASE: u32 = 0xE000;

/// Canonical functional key names, indexed by
/// `number - FUNCTIONAL_KEY_BASE`. The number range is contiguous.
static FUNCTIONAL_KEY_NAMES: [&str; 108] = [
    "ESCAPE",
    "ENTER",
    "TAB",
    "BACKSPACE",
    "INSERT",
    "DELETE",
    "LEFT",
    "RIGHT",
    "UP",
    "DOWN",
    "PAGE_UP",
    "PAGE_DOWN",
    "HOME",
    "END",
    "CAPS_LOCK",
    "SCROLL_LOCK",
    "NUM_LOCK",
    "PRINT_SCREEN",
    "PAUSE",
    "MENU",
    "F1",
    "F2",
    "F3",
    "F4",
    "F5",
    "F6",
    "F7",
    "F8",
    "F9",
    "F10",
    "F11",
    "F12",
    "F13",
    "F14",
    "F15",
    "F16",
    "F17",
    "F18",
    "F19",
    "F20",
    "F21",
    "F22",
    "F23",
    "F24",
    "F25",
    "F26",
    "F27",
    "F28",
    "F29",
    "F30",
    "F31",
    "F32",
    "F33",
    "F34",
    "F35",
    "KP_0",
    "KP_1",
    "KP_2",
    "KP_3",
    "KP_4",
    "KP_5",
    "KP_6",
    "KP_7",
    "KP_8",
    "KP_9",
    "KP_DECIMAL",
    "KP_DIVIDE",
    "KP_MULTIPLY",
    "KP_SUBTRACT",
    "KP_ADD",
    "KP_ENTER",
    "KP_EQUAL",
    "KP_SEPARATOR",
    "KP_LEFT",
    "KP_RIGHT",
    "KP_UP",
    "KP_DOWN",
    "KP_PAGE_UP",
    "KP_PAGE_DOWN",
    "KP_HOME",
    "KP_END",
    "KP_INSERT",
    "KP_DELETE",
    "MEDIA_PLAY",
    "MEDIA_PAUSE",
    "MEDIA_PLAY_PAUSE",
    "MEDIA_REVERSE",
    "MEDIA_STOP",
    "MEDIA_FAST_FORWARD",
    "MEDIA_REWIND",
    "MEDIA_TRACK_NEXT",
    "MEDIA_TRACK_PREVIOUS",
    "MEDIA_RECORD",
    "LOWER_VOLUME",
    "RAISE_VOLUME",
    "MUTE_VOLUME",
    "LEFT_SHIFT",
    "LEFT_CONTROL",
    "LEFT_ALT",
    "LEFT_SUPER",
    "LEFT_HYPER",
    "RIGHT_SHIFT",
    "RIGHT_CONTROL",
    "RIGHT_ALT",
    "RIGHT_SUPER",
    "RIGHT_HYPER",
    "ISO_LEVEL3_SHIFT",
    "ISO_LEVEL5_SHIFT",
];

/// Legacy short CSI numbers and the functional numbers they stand for,
/// sorted by CSI number.
static CSI_TO_FUNCTIONAL: [(u32, u32); 21] = [
    (2, 57348),
    (3, 57349),
    (5, 57354),
    (6, 57355),
    (7, 57356),
    (8, 57357),
    (9, 57346),
    (11, 57364),
    (12, 57365),
    (13, 57345),
    (14, 57367),
    (15, 57368),
    (17, 57369),
    (18, 57370),
    (19, 57371),
    (20, 57372),
    (21, 57373),
    (23, 57374),
    (24, 57375),
    (27, 57344),
    (127, 57347),
];

static NAME_TO_FUNCTIONAL: LazyLock<HashMap<&'static str, u32>> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(FUNCTIONAL_KEY_NAMES.len());
    let mut num = FUNCTIONAL_KEY_BASE;
    for name in FUNCTIONAL_KEY_NAMES {
        map.insert(name, num);
        num += 1;
    }
    map
});

static FUNCTIONAL_TO_CSI: LazyLock<HashMap<u32, u32>> =
    LazyLock::new(|| CSI_TO_FUNCTIONAL.iter().map(|&(csi, func)| (func, csi)).collect());

/// Look up the canonical name of a functional key number.
#[must_use]
pub fn functional_number_to_name(num: u32) -> Option<&'static str> {
    let idx = num.checked_sub(FUNCTIONAL_KEY_BASE)?;
    FUNCTIONAL_KEY_NAMES.get(idx as usize).copied()
}

/// Look up the functional key number of a canonical name.
#[must_use]
pub fn name_to_functional_number(name: &str) -> Option<u32> {
    NAME_TO_FUNCTIONAL.get(name).copied()
}

/// Translate a legacy short CSI number to its functional number.
#[must_use]
pub fn csi_to_functional_number(csi: u32) -> Option<u32> {
    CSI_TO_FUNCTIONAL
        .binary_search_by_key(&csi, |&(num, _)| num)
        .ok()
        .map(|idx| CSI_TO_FUNCTIONAL[idx].1)
}

/// Translate a functional number to its legacy short CSI number, if one
/// exists.
#[must_use]
pub fn functional_to_csi_number(func: u32) -> Option<u32> {
    FUNCTIONAL_TO_CSI.get(&func).copied()
}

/// CSI number stood for by one of the ten letter trailers.
#[must_use]
pub fn letter_trailer_to_csi_number(trailer: char) -> Option<u32> {
    match trailer {
        'A' => Some(57352),
        'B' => Some(57353),
        'C' => Some(57351),
        'D' => Some(57350),
        'F' => Some(8),
        'H' => Some(7),
        'P' => Some(11),
        'Q' => Some(12),
        'R' => Some(13),
        'S' => Some(14),
        _ => None,
    }
}

/// Letter trailer that stands for a CSI number, if one exists.
#[must_use]
pub fn csi_number_to_letter_trailer(csi: u32) -> Option<char> {
    match csi {
        57352 => Some('A'),
        57353 => Some('B'),
        57351 => Some('C'),
        57350 => Some('D'),
        8 => Some('F'),
        7 => Some('H'),
        11 => Some('P'),
        12 => Some('Q'),
        13 => Some('R'),
        14 => Some('S'),
        _ => None,
    }
}

/// Whether a functional key's canonical encoding must end in `~`.
#[must_use]
pub fn has_tilde_trailer(func: u32) -> bool {
    matches!(func, 57348 | 57349 | 57354 | 57355 | 57368..=57375)
}
