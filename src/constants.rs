//! Raw modifier bit constants
//!
//! Bit assignments of the Rime engine's modifier word (`RimeModifier`,
//! from librime `key_table.h`). Values are part of the engine ABI and
//! must not change.
//!
//! Bits 15-23 are left free for XKB, bit 29 is used internally by the engine.

// ============================================================================
// Keyboard Modifiers
// ============================================================================

/// Shift key
pub const SHIFT_MASK: u32 = 1 << 0;

/// Caps Lock
pub const LOCK_MASK: u32 = 1 << 1;

/// Control key
pub const CONTROL_MASK: u32 = 1 << 2;

/// Mod1 (Alt on most layouts)
pub const MOD1_MASK: u32 = 1 << 3;

/// Alt key (same bit as MOD1_MASK)
pub const ALT_MASK: u32 = MOD1_MASK;

/// Mod2 (usually Num Lock)
pub const MOD2_MASK: u32 = 1 << 4;

/// Mod3
pub const MOD3_MASK: u32 = 1 << 5;

/// Mod4 (usually the logo key)
pub const MOD4_MASK: u32 = 1 << 6;

/// Mod5
pub const MOD5_MASK: u32 = 1 << 7;

// ============================================================================
// Pointer Buttons
// ============================================================================

pub const BUTTON1_MASK: u32 = 1 << 8;
pub const BUTTON2_MASK: u32 = 1 << 9;
pub const BUTTON3_MASK: u32 = 1 << 10;
pub const BUTTON4_MASK: u32 = 1 << 11;
pub const BUTTON5_MASK: u32 = 1 << 12;

// ============================================================================
// Input Method Flags (ibus layout)
// ============================================================================

/// Event was consumed by the input method
pub const HANDLED_MASK: u32 = 1 << 24;

/// Event is forwarded back to the client
pub const FORWARD_MASK: u32 = 1 << 25;

/// Same bit as FORWARD_MASK
pub const IGNORED_MASK: u32 = FORWARD_MASK;

// ============================================================================
// Virtual Modifiers
// ============================================================================

pub const SUPER_MASK: u32 = 1 << 26;
pub const HYPER_MASK: u32 = 1 << 27;
pub const META_MASK: u32 = 1 << 28;

/// Key release
pub const RELEASE_MASK: u32 = 1 << 30;

// ============================================================================
// Aggregate
// ============================================================================

/// Every assigned bit, RELEASE_MASK included.
/// Excludes only the reserved bits.
pub const MODIFIER_MASK: u32 = 0x5f00_1fff;

/// Bits with no assigned flag (15-23 and 29)
pub const RESERVED_BITS: u32 = 0x00ff_8000 | (1 << 29);

const _: () = assert!(
    MODIFIER_MASK
        == SHIFT_MASK
            | LOCK_MASK
            | CONTROL_MASK
            | MOD1_MASK
            | MOD2_MASK
            | MOD3_MASK
            | MOD4_MASK
            | MOD5_MASK
            | BUTTON1_MASK
            | BUTTON2_MASK
            | BUTTON3_MASK
            | BUTTON4_MASK
            | BUTTON5_MASK
            | HANDLED_MASK
            | FORWARD_MASK
            | SUPER_MASK
            | HYPER_MASK
            | META_MASK
            | RELEASE_MASK
);

#[cfg(test)]
mod tests {
    use super::*;

    /// Every independently named flag, aliases excluded
    const FLAGS: [u32; 19] = [
        SHIFT_MASK,
        LOCK_MASK,
        CONTROL_MASK,
        MOD1_MASK,
        MOD2_MASK,
        MOD3_MASK,
        MOD4_MASK,
        MOD5_MASK,
        BUTTON1_MASK,
        BUTTON2_MASK,
        BUTTON3_MASK,
        BUTTON4_MASK,
        BUTTON5_MASK,
        HANDLED_MASK,
        FORWARD_MASK,
        SUPER_MASK,
        HYPER_MASK,
        META_MASK,
        RELEASE_MASK,
    ];

    #[test]
    fn test_exact_values() {
        assert_eq!(SHIFT_MASK, 0x0000_0001);
        assert_eq!(LOCK_MASK, 0x0000_0002);
        assert_eq!(CONTROL_MASK, 0x0000_0004);
        assert_eq!(MOD1_MASK, 0x0000_0008);
        assert_eq!(MOD2_MASK, 0x0000_0010);
        assert_eq!(MOD3_MASK, 0x0000_0020);
        assert_eq!(MOD4_MASK, 0x0000_0040);
        assert_eq!(MOD5_MASK, 0x0000_0080);
        assert_eq!(BUTTON1_MASK, 0x0000_0100);
        assert_eq!(BUTTON2_MASK, 0x0000_0200);
        assert_eq!(BUTTON3_MASK, 0x0000_0400);
        assert_eq!(BUTTON4_MASK, 0x0000_0800);
        assert_eq!(BUTTON5_MASK, 0x0000_1000);
        assert_eq!(HANDLED_MASK, 0x0100_0000);
        assert_eq!(FORWARD_MASK, 0x0200_0000);
        assert_eq!(SUPER_MASK, 0x0400_0000);
        assert_eq!(HYPER_MASK, 0x0800_0000);
        assert_eq!(META_MASK, 0x1000_0000);
        assert_eq!(RELEASE_MASK, 0x4000_0000);
        assert_eq!(MODIFIER_MASK, 0x5f00_1fff);
    }

    #[test]
    fn test_single_distinct_bits() {
        for (i, a) in FLAGS.iter().enumerate() {
            assert!(a.is_power_of_two(), "{:#x} is not a single bit", a);
            for b in &FLAGS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(ALT_MASK, MOD1_MASK);
        assert_eq!(IGNORED_MASK, FORWARD_MASK);
    }

    #[test]
    fn test_modifier_mask_is_union() {
        let union = FLAGS.iter().fold(0, |acc, f| acc | f);
        assert_eq!(union, MODIFIER_MASK);
        assert_eq!(union & !RELEASE_MASK, 0x1f00_1fff);
    }

    #[test]
    fn test_mask_application() {
        assert_eq!((SHIFT_MASK | CONTROL_MASK) & MODIFIER_MASK, 0x5);
        assert_eq!(RELEASE_MASK & MODIFIER_MASK, RELEASE_MASK);
        assert_eq!(MODIFIER_MASK >> 28, 0x5);
    }

    #[test]
    fn test_reserved_bits_unassigned() {
        assert_eq!(RESERVED_BITS & MODIFIER_MASK, 0);
        for flag in FLAGS {
            assert_eq!(flag & RESERVED_BITS, 0);
        }
        for bit in (15..=23).chain([29]) {
            assert_ne!(RESERVED_BITS & (1 << bit), 0);
        }
    }
}
