//! X11 keysym names
//!
//! Names used by the engine's key sequences (`Control+Return`, `Shift+space`).
//! Values are from <X11/keysymdef.h>. Only the common non-printing keys and
//! the ASCII punctuation names are listed; other keys are written as hex.

/// (name, keysym). The first entry for a value is its canonical name.
const KEYSYM_NAMES: &[(&str, u32)] = &[
    // ========================================================================
    // TTY Function Keys
    // ========================================================================
    ("BackSpace", 0xff08),
    ("Tab", 0xff09),
    ("Linefeed", 0xff0a),
    ("Clear", 0xff0b),
    ("Return", 0xff0d),
    ("Pause", 0xff13),
    ("Scroll_Lock", 0xff14),
    ("Sys_Req", 0xff15),
    ("Escape", 0xff1b),
    ("Delete", 0xffff),
    // ========================================================================
    // Japanese / Korean Input
    // ========================================================================
    ("Multi_key", 0xff20),
    ("Kanji", 0xff21),
    ("Muhenkan", 0xff22),
    ("Henkan", 0xff23),
    ("Romaji", 0xff24),
    ("Hiragana", 0xff25),
    ("Katakana", 0xff26),
    ("Hiragana_Katakana", 0xff27),
    ("Zenkaku", 0xff28),
    ("Hankaku", 0xff29),
    ("Zenkaku_Hankaku", 0xff2a),
    ("Eisu_toggle", 0xff30),
    ("Hangul", 0xff31),
    ("Hangul_Hanja", 0xff34),
    // ========================================================================
    // Cursor Control
    // ========================================================================
    ("Home", 0xff50),
    ("Left", 0xff51),
    ("Up", 0xff52),
    ("Right", 0xff53),
    ("Down", 0xff54),
    ("Page_Up", 0xff55),
    ("Page_Down", 0xff56),
    ("End", 0xff57),
    ("Begin", 0xff58),
    ("Prior", 0xff55),
    ("Next", 0xff56),
    // ========================================================================
    // Misc Functions
    // ========================================================================
    ("Select", 0xff60),
    ("Print", 0xff61),
    ("Execute", 0xff62),
    ("Insert", 0xff63),
    ("Undo", 0xff65),
    ("Redo", 0xff66),
    ("Menu", 0xff67),
    ("Find", 0xff68),
    ("Cancel", 0xff69),
    ("Help", 0xff6a),
    ("Break", 0xff6b),
    ("Mode_switch", 0xff7e),
    ("Num_Lock", 0xff7f),
    ("ISO_Left_Tab", 0xfe20),
    // ========================================================================
    // Keypad
    // ========================================================================
    ("KP_Space", 0xff80),
    ("KP_Tab", 0xff89),
    ("KP_Enter", 0xff8d),
    ("KP_Home", 0xff95),
    ("KP_Left", 0xff96),
    ("KP_Up", 0xff97),
    ("KP_Right", 0xff98),
    ("KP_Down", 0xff99),
    ("KP_Page_Up", 0xff9a),
    ("KP_Page_Down", 0xff9b),
    ("KP_End", 0xff9c),
    ("KP_Begin", 0xff9d),
    ("KP_Insert", 0xff9e),
    ("KP_Delete", 0xff9f),
    ("KP_Equal", 0xffbd),
    ("KP_Multiply", 0xffaa),
    ("KP_Add", 0xffab),
    ("KP_Separator", 0xffac),
    ("KP_Subtract", 0xffad),
    ("KP_Decimal", 0xffae),
    ("KP_Divide", 0xffaf),
    ("KP_0", 0xffb0),
    ("KP_1", 0xffb1),
    ("KP_2", 0xffb2),
    ("KP_3", 0xffb3),
    ("KP_4", 0xffb4),
    ("KP_5", 0xffb5),
    ("KP_6", 0xffb6),
    ("KP_7", 0xffb7),
    ("KP_8", 0xffb8),
    ("KP_9", 0xffb9),
    // ========================================================================
    // Function Keys
    // ========================================================================
    ("F1", 0xffbe),
    ("F2", 0xffbf),
    ("F3", 0xffc0),
    ("F4", 0xffc1),
    ("F5", 0xffc2),
    ("F6", 0xffc3),
    ("F7", 0xffc4),
    ("F8", 0xffc5),
    ("F9", 0xffc6),
    ("F10", 0xffc7),
    ("F11", 0xffc8),
    ("F12", 0xffc9),
    // ========================================================================
    // Modifier Keys
    // ========================================================================
    ("Shift_L", 0xffe1),
    ("Shift_R", 0xffe2),
    ("Control_L", 0xffe3),
    ("Control_R", 0xffe4),
    ("Caps_Lock", 0xffe5),
    ("Shift_Lock", 0xffe6),
    ("Meta_L", 0xffe7),
    ("Meta_R", 0xffe8),
    ("Alt_L", 0xffe9),
    ("Alt_R", 0xffea),
    ("Super_L", 0xffeb),
    ("Super_R", 0xffec),
    ("Hyper_L", 0xffed),
    ("Hyper_R", 0xffee),
    // ========================================================================
    // Latin 1 (space and punctuation)
    // ========================================================================
    ("space", 0x0020),
    ("exclam", 0x0021),
    ("quotedbl", 0x0022),
    ("numbersign", 0x0023),
    ("dollar", 0x0024),
    ("percent", 0x0025),
    ("ampersand", 0x0026),
    ("apostrophe", 0x0027),
    ("parenleft", 0x0028),
    ("parenright", 0x0029),
    ("asterisk", 0x002a),
    ("plus", 0x002b),
    ("comma", 0x002c),
    ("minus", 0x002d),
    ("period", 0x002e),
    ("slash", 0x002f),
    ("colon", 0x003a),
    ("semicolon", 0x003b),
    ("less", 0x003c),
    ("equal", 0x003d),
    ("greater", 0x003e),
    ("question", 0x003f),
    ("at", 0x0040),
    ("bracketleft", 0x005b),
    ("backslash", 0x005c),
    ("bracketright", 0x005d),
    ("asciicircum", 0x005e),
    ("underscore", 0x005f),
    ("grave", 0x0060),
    ("braceleft", 0x007b),
    ("bar", 0x007c),
    ("braceright", 0x007d),
    ("asciitilde", 0x007e),
];

/// Canonical name of a keysym
pub fn keysym_name(keysym: u32) -> Option<&'static str> {
    KEYSYM_NAMES
        .iter()
        .find(|(_, value)| *value == keysym)
        .map(|(name, _)| *name)
}

/// Keysym for a name. Exact match first, then case-insensitive.
pub fn keysym_from_name(name: &str) -> Option<u32> {
    KEYSYM_NAMES
        .iter()
        .find(|(n, _)| *n == name)
        .or_else(|| KEYSYM_NAMES.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)))
        .map(|(_, value)| *value)
}

/// Printable ASCII keysyms are their own character
#[inline]
pub const fn is_printable_ascii(keysym: u32) -> bool {
    keysym >= 0x21 && keysym <= 0x7e
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keysym_from_name() {
        assert_eq!(keysym_from_name("Return"), Some(0xff0d));
        assert_eq!(keysym_from_name("space"), Some(0x20));
        assert_eq!(keysym_from_name("Escape"), Some(0xff1b));
        assert_eq!(keysym_from_name("BackSpace"), Some(0xff08));
        assert_eq!(keysym_from_name("Prior"), Some(0xff55));
        assert_eq!(keysym_from_name("escape"), Some(0xff1b));
        assert_eq!(keysym_from_name("Enter"), None);
    }

    #[test]
    fn test_keysym_name_is_canonical() {
        assert_eq!(keysym_name(0xff55), Some("Page_Up"));
        assert_eq!(keysym_name(0xff0d), Some("Return"));
        assert_eq!(keysym_name(0x20), Some("space"));
        assert_eq!(keysym_name(0x61), None);
    }

    #[test]
    fn test_canonical_names_resolve_back() {
        for (name, value) in KEYSYM_NAMES {
            let canonical = keysym_name(*value).unwrap();
            assert_eq!(keysym_from_name(canonical), Some(*value), "{}", name);
        }
    }
}
