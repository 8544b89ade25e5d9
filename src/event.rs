//! Key event record
//!
//! A keysym plus modifier word, the unit the engine consumes.
//! Text form is `Modifier+...+key`, e.g. `Control+a` or `Shift+Release+Return`.
//! Keys without a character or name are written as `0x` hex keysyms.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::keysyms;
use crate::modifiers::Modifiers;
use crate::names;

/// Key event sent to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// X11 keysym
    pub keycode: u32,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub const fn new(keycode: u32, modifiers: Modifiers) -> Self {
        Self { keycode, modifiers }
    }

    /// Build from an xkb/fcitx style key event.
    ///
    /// Core xkb bits 0-7 and fcitx bits 24-28 share the engine layout,
    /// so the state word is taken as-is minus unknown bits.
    pub const fn from_state(keysym: u32, state: u32, is_release: bool) -> Self {
        let mut modifiers = Modifiers::from_state(state);
        if is_release {
            modifiers = modifiers.union(Modifiers::RELEASE);
        }
        Self::new(keysym, modifiers)
    }

    /// Raw modifier word
    #[inline]
    pub const fn mask(&self) -> u32 {
        self.modifiers.bits()
    }

    #[inline]
    pub const fn is_release(&self) -> bool {
        self.modifiers.is_release()
    }

    /// Same key with RELEASE set
    pub const fn with_release(self) -> Self {
        Self::new(self.keycode, self.modifiers.union(Modifiers::RELEASE))
    }

    /// Same key with `mods` cleared
    pub const fn without(self, mods: Modifiers) -> Self {
        Self::new(self.keycode, self.modifiers.difference(mods))
    }

    /// Same keysym and modifiers, press and release treated alike
    pub fn matches(&self, other: &KeyEvent) -> bool {
        self.keycode == other.keycode
            && self.modifiers.key_state() == other.modifiers.key_state()
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.modifiers.is_empty() {
            write!(f, "{}+", names::format_modifiers(self.modifiers))?;
        }
        if keysyms::is_printable_ascii(self.keycode) {
            return write!(f, "{}", self.keycode as u8 as char);
        }
        match keysyms::keysym_name(self.keycode) {
            Some(name) => f.write_str(name),
            None => write!(f, "{:#x}", self.keycode),
        }
    }
}

impl FromStr for KeyEvent {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        // A trailing "++" means the key itself is '+'
        let (mods_part, key_part) = if s == "+" {
            ("", "+")
        } else if let Some(rest) = s.strip_suffix("++") {
            (rest, "+")
        } else {
            s.rsplit_once('+').unwrap_or(("", s))
        };

        if key_part.trim().is_empty() {
            return Err(ParseError::MissingKey(s.to_string()));
        }

        let modifiers = names::parse_modifiers(mods_part)?;
        let keycode = parse_keysym(key_part.trim())?;
        Ok(Self::new(keycode, modifiers))
    }
}

/// `0x` hex keysym, single printable ASCII char, or keysym name
fn parse_keysym(key: &str) -> Result<u32, ParseError> {
    if let Some(hex) = key.strip_prefix("0x").or_else(|| key.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16).map_err(|_| ParseError::InvalidKey(key.to_string()));
    }
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_graphic() {
            return Ok(c as u32);
        }
    }
    keysyms::keysym_from_name(key).ok_or_else(|| ParseError::InvalidKey(key.to_string()))
}
