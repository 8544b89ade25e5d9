//! Typed modifier word
//!
//! `Modifiers` wraps the engine's 32-bit modifier word as a bit set.
//! It is `repr(transparent)` over `u32`, so `bits()` is the exact value
//! the engine expects in a key event.

use bitflags::bitflags;

use crate::constants;

bitflags! {
    /// Modifier state of a key event
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u32 {
        const SHIFT    = constants::SHIFT_MASK;
        const LOCK     = constants::LOCK_MASK;
        const CONTROL  = constants::CONTROL_MASK;
        const MOD1     = constants::MOD1_MASK;
        const ALT      = constants::ALT_MASK;  // Alias of MOD1
        const MOD2     = constants::MOD2_MASK;
        const MOD3     = constants::MOD3_MASK;
        const MOD4     = constants::MOD4_MASK;
        const MOD5     = constants::MOD5_MASK;
        const BUTTON1  = constants::BUTTON1_MASK;
        const BUTTON2  = constants::BUTTON2_MASK;
        const BUTTON3  = constants::BUTTON3_MASK;
        const BUTTON4  = constants::BUTTON4_MASK;
        const BUTTON5  = constants::BUTTON5_MASK;
        const HANDLED  = constants::HANDLED_MASK;
        const FORWARD  = constants::FORWARD_MASK;
        const IGNORED  = constants::IGNORED_MASK;  // Alias of FORWARD
        const SUPER    = constants::SUPER_MASK;
        const HYPER    = constants::HYPER_MASK;
        const META     = constants::META_MASK;
        const RELEASE  = constants::RELEASE_MASK;

        /// Every flag, RELEASE included
        const MODIFIER_MASK = Self::SHIFT.bits()
            | Self::LOCK.bits()
            | Self::CONTROL.bits()
            | Self::MOD1.bits()
            | Self::MOD2.bits()
            | Self::MOD3.bits()
            | Self::MOD4.bits()
            | Self::MOD5.bits()
            | Self::BUTTON1.bits()
            | Self::BUTTON2.bits()
            | Self::BUTTON3.bits()
            | Self::BUTTON4.bits()
            | Self::BUTTON5.bits()
            | Self::HANDLED.bits()
            | Self::FORWARD.bits()
            | Self::SUPER.bits()
            | Self::HYPER.bits()
            | Self::META.bits()
            | Self::RELEASE.bits();
    }
}

const _: () = assert!(Modifiers::MODIFIER_MASK.bits() == constants::MODIFIER_MASK);

impl Modifiers {
    /// Build from a raw state word (engine, xkb or fcitx).
    ///
    /// Unassigned bits (13-23, 29, 31) are dropped.
    #[inline]
    pub const fn from_state(state: u32) -> Self {
        Self::from_bits_truncate(state)
    }

    /// Intersection with MODIFIER_MASK.
    ///
    /// RELEASE is part of the mask and survives; use `key_state()`
    /// to compare a press against its release.
    #[inline]
    pub const fn significant(self) -> Self {
        self.intersection(Self::MODIFIER_MASK)
    }

    /// Significant bits without RELEASE
    #[inline]
    pub const fn key_state(self) -> Self {
        self.significant().without_release()
    }

    #[inline]
    pub const fn without_release(self) -> Self {
        self.difference(Self::RELEASE)
    }

    #[inline]
    pub const fn is_release(self) -> bool {
        self.contains(Self::RELEASE)
    }

    #[inline]
    pub const fn is_handled(self) -> bool {
        self.contains(Self::HANDLED)
    }

    /// FORWARD (a.k.a. IGNORED) is set
    #[inline]
    pub const fn is_forwarded(self) -> bool {
        self.contains(Self::FORWARD)
    }
}

impl From<Modifiers> for u32 {
    fn from(mods: Modifiers) -> u32 {
        mods.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_raw_constants() {
        assert_eq!(Modifiers::SHIFT.bits(), constants::SHIFT_MASK);
        assert_eq!(Modifiers::CONTROL.bits(), constants::CONTROL_MASK);
        assert_eq!(Modifiers::RELEASE.bits(), 0x4000_0000);
        assert_eq!(Modifiers::MODIFIER_MASK.bits(), 0x5f00_1fff);
    }

    #[test]
    fn test_aliases() {
        assert_eq!(Modifiers::ALT, Modifiers::MOD1);
        assert_eq!(Modifiers::IGNORED, Modifiers::FORWARD);
    }

    #[test]
    fn test_significant() {
        let mods = Modifiers::SHIFT | Modifiers::CONTROL;
        assert_eq!(mods.significant().bits(), 0x5);
        assert_eq!(Modifiers::RELEASE.significant(), Modifiers::RELEASE);
        assert!(Modifiers::MODIFIER_MASK.contains(Modifiers::RELEASE));

        let released = mods | Modifiers::RELEASE;
        assert_eq!(released.significant(), released);
        assert_eq!(released.without_release(), mods);
        assert_eq!(released.key_state(), mods);
        assert!(Modifiers::RELEASE.key_state().is_empty());
    }

    #[test]
    fn test_from_state_drops_reserved() {
        let state = constants::SHIFT_MASK | (1 << 29) | (1 << 31) | (1 << 16);
        assert_eq!(Modifiers::from_state(state), Modifiers::SHIFT);
        assert_eq!(
            Modifiers::from_state(constants::RELEASE_MASK | constants::META_MASK),
            Modifiers::RELEASE | Modifiers::META
        );
    }

    #[test]
    fn test_queries() {
        assert!(Modifiers::RELEASE.is_release());
        assert!(!Modifiers::SHIFT.is_release());
        assert!(Modifiers::HANDLED.is_handled());
        assert!(Modifiers::IGNORED.is_forwarded());
        assert!(Modifiers::default().is_empty());
        assert_eq!(u32::from(Modifiers::ALT | Modifiers::SUPER), 0x0400_0008);
    }
}
