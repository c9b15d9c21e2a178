//! Human-readable shortcut specs and their parser.
//!
//! A spec looks like `ctrl+shift+a` or `cmd+plus`: any number of
//! modifier tokens followed by a key token, joined by `+`. A spec
//! ending in a literal `+` (such as `ctrl++`) means the `plus` key.
//!
//! Key tokens resolve through two alias maps supplied by the key-name
//! layer at construction; the parser itself ships no alias data. Parse
//! results are kept in a bounded LRU so repeated lookups of configured
//! shortcuts stay cheap.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::{self, Display};

use parking_lot::Mutex;

use crate::cache::LruCache;
use crate::event::{KeyEvent, KeyEventKinds, KeyModifiers};
use crate::tables;

/// Default capacity of the parse cache.
const PARSE_CACHE_CAPACITY: usize = 128;

/// A parsed shortcut spec: modifier set plus canonical key name.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedShortcut {
    pub mods: KeyModifiers,
    pub key_name: String,
}

impl ParsedShortcut {
    #[must_use]
    pub fn new(mods: KeyModifiers, key_name: impl Into<String>) -> ParsedShortcut {
        ParsedShortcut {
            mods,
            key_name: key_name.into(),
        }
    }
}

impl Display for ParsedShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.mods.is_empty() {
            write!(f, "{}+", self.mods)?;
        }
        f.write_str(&self.key_name)
    }
}

/// Resolve a single modifier token.
///
/// Unknown tokens get a bit no live event can carry, so a misspelled
/// modifier disables the shortcut instead of silently colliding with a
/// real one.
fn modifier_for_token(token: &str) -> KeyModifiers {
    match token.to_uppercase().as_str() {
        "SHIFT" => KeyModifiers::SHIFT,
        "ALT" | "OPTION" | "\u{2325}" => KeyModifiers::ALT,
        "CTRL" | "CONTROL" => KeyModifiers::CTRL,
        "SUPER" | "CMD" | "\u{2318}" => KeyModifiers::SUPER,
        _ => KeyModifiers::UNKNOWN,
    }
}

/// Parser for shortcut specs.
///
/// Holds the externally supplied key-name alias maps: `functional`
/// aliases map upper-cased tokens to canonical functional names
/// (`"ESC"` to `"ESCAPE"`), `character` aliases map upper-cased tokens
/// to canonical character names (`"PLUS"` to `"+"`).
///
/// The parser is cheap to share: all lookups take `&self` and the parse
/// cache is internally synchronized.
#[derive(Debug)]
pub struct ShortcutParser {
    functional_aliases: HashMap<String, String>,
    character_aliases: HashMap<String, String>,
    cache: Mutex<LruCache<String, ParsedShortcut>>,
}

impl Default for ShortcutParser {
    /// A parser with no aliases; only canonical names resolve.
    fn default() -> ShortcutParser {
        ShortcutParser::new(HashMap::new(), HashMap::new())
    }
}

impl ShortcutParser {
    #[must_use]
    pub fn new(
        functional_aliases: HashMap<String, String>,
        character_aliases: HashMap<String, String>,
    ) -> ShortcutParser {
        ShortcutParser::with_cache_capacity(
            functional_aliases,
            character_aliases,
            PARSE_CACHE_CAPACITY,
        )
    }

    #[must_use]
    pub fn with_cache_capacity(
        functional_aliases: HashMap<String, String>,
        character_aliases: HashMap<String, String>,
        capacity: usize,
    ) -> ShortcutParser {
        ShortcutParser {
            functional_aliases,
            character_aliases,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Parse a shortcut spec.
    ///
    /// Never fails: unknown key tokens are returned as-is and unknown
    /// modifier tokens map to [`KeyModifiers::UNKNOWN`]; either way the
    /// resulting shortcut simply matches no event.
    #[must_use]
    pub fn parse(&self, spec: &str) -> ParsedShortcut {
        if let Some(hit) = self.cache.lock().get(spec) {
            return hit;
        }
        let parsed = self.parse_uncached(spec);
        self.cache.lock().insert(spec.to_string(), parsed.clone());
        parsed
    }

    fn parse_uncached(&self, spec: &str) -> ParsedShortcut {
        // A trailing `+` is the plus key itself.
        let spec: Cow<'_, str> = match spec.strip_suffix('+') {
            Some(head) => Cow::Owned(format!("{head}plus")),
            None => Cow::Borrowed(spec),
        };
        let mut tokens: Vec<&str> = spec.split('+').collect();
        let key_token = tokens.pop().unwrap_or("");
        let mut mods = KeyModifiers::empty();
        for token in tokens {
            mods |= modifier_for_token(token);
        }
        ParsedShortcut {
            mods,
            key_name: self.resolve_key_name(key_token),
        }
    }

    fn resolve_key_name(&self, token: &str) -> String {
        let upper_token = token.to_uppercase();
        let name = self
            .functional_aliases
            .get(&upper_token)
            .map_or(token, String::as_str);
        let upper_name = name.to_uppercase();
        if tables::name_to_functional_number(&upper_name).is_some() {
            return upper_name;
        }
        self.character_aliases
            .get(&upper_name)
            .map_or(name, String::as_str)
            .to_string()
    }

    /// Parse `spec` and match `event` against it.
    #[must_use]
    pub fn matches(&self, event: &KeyEvent, spec: &str, kinds: KeyEventKinds) -> bool {
        event.matches_with_kinds(&self.parse(spec), kinds)
    }
}
