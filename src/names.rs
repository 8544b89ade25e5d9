//! Modifier names
//!
//! Textual names used in key representations such as `Control+Shift+a`.
//! Names follow the engine's key table; reserved bits have no name and
//! are written as a `0x` hex component instead.

use crate::error::ParseError;
use crate::modifiers::Modifiers;

/// Name of each bit position (index = bit)
const MODIFIER_NAMES: [Option<&str>; 31] = [
    Some("Shift"),   // 0
    Some("Lock"),    // 1
    Some("Control"), // 2
    Some("Alt"),     // 3
    Some("Mod2"),    // 4
    Some("Mod3"),    // 5
    Some("Mod4"),    // 6
    Some("Mod5"),    // 7
    Some("Button1"), // 8
    Some("Button2"), // 9
    Some("Button3"), // 10
    Some("Button4"), // 11
    Some("Button5"), // 12
    // 13-23: unassigned (15-23 left to XKB)
    None, None, None, None, None, None, None, None, None, None, None,
    Some("Handled"), // 24
    Some("Forward"), // 25
    Some("Super"),   // 26
    Some("Hyper"),   // 27
    Some("Meta"),    // 28
    None,            // 29 engine internal
    Some("Release"), // 30
];

/// Name of the flag at `bit`, if any
pub fn modifier_name(bit: u32) -> Option<&'static str> {
    MODIFIER_NAMES.get(bit as usize).copied().flatten()
}

/// Parse a single modifier name (case-insensitive) or a `0x` hex word
pub fn parse_modifier(name: &str) -> Result<Modifiers, ParseError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    if let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16)
            .map(Modifiers::from_bits_retain)
            .map_err(|_| ParseError::UnknownModifier(trimmed.to_string()));
    }
    let lowercase = trimmed.to_lowercase();
    let mods = match lowercase.as_str() {
        "shift" => Modifiers::SHIFT,
        "lock" => Modifiers::LOCK,
        "control" | "ctrl" => Modifiers::CONTROL,
        "alt" | "mod1" => Modifiers::ALT,
        "mod2" => Modifiers::MOD2,
        "mod3" => Modifiers::MOD3,
        "mod4" => Modifiers::MOD4,
        "mod5" => Modifiers::MOD5,
        "button1" => Modifiers::BUTTON1,
        "button2" => Modifiers::BUTTON2,
        "button3" => Modifiers::BUTTON3,
        "button4" => Modifiers::BUTTON4,
        "button5" => Modifiers::BUTTON5,
        "handled" => Modifiers::HANDLED,
        "forward" | "ignored" => Modifiers::FORWARD,
        "super" => Modifiers::SUPER,
        "hyper" => Modifiers::HYPER,
        "meta" => Modifiers::META,
        "release" => Modifiers::RELEASE,
        _ => return Err(ParseError::UnknownModifier(trimmed.to_string())),
    };
    Ok(mods)
}

/// Parse a `+`-separated modifier list
///
/// Example: "Shift+Control" -> SHIFT | CONTROL. Empty input -> no modifiers.
pub fn parse_modifiers(s: &str) -> Result<Modifiers, ParseError> {
    if s.trim().is_empty() {
        return Ok(Modifiers::empty());
    }
    let mut mods = Modifiers::empty();
    for part in s.split('+') {
        mods |= parse_modifier(part)?;
    }
    Ok(mods)
}

/// Join modifier names in bit order: SHIFT | CONTROL -> "Shift+Control"
///
/// Bits without a name are appended as one hex component, so the result
/// always parses back to the same word.
pub fn format_modifiers(mods: Modifiers) -> String {
    let mut parts: Vec<String> = modifier_names(mods).map(str::to_string).collect();
    let unnamed = unnamed_bits(mods);
    if unnamed != 0 {
        parts.push(format!("{:#x}", unnamed));
    }
    parts.join("+")
}

/// Set bits that have no modifier name
pub fn unnamed_bits(mods: Modifiers) -> u32 {
    let bits = mods.bits();
    (0..32)
        .filter(|&bit| bits & (1 << bit) != 0 && modifier_name(bit).is_none())
        .fold(0, |acc, bit| acc | (1 << bit))
}

/// Names of the set bits, ascending bit order
pub fn modifier_names(mods: Modifiers) -> impl Iterator<Item = &'static str> {
    let bits = mods.bits();
    (0..32)
        .filter(move |bit| bits & (1 << bit) != 0)
        .filter_map(modifier_name)
}
