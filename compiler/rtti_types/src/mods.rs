//! Type qualifiers.

use bitflags::bitflags;

bitflags! {
    /// Qualifier set of a canonical type.
    ///
    /// The empty set is plain mutable. `IMMUTABLE` never combines with
    /// anything else; `SHARED` combines with `CONST` and `WILD`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
    pub struct Mods: u8 {
        /// Read-only view (`const`).
        const CONST = 1 << 0;
        /// Deeply immutable (`immutable`).
        const IMMUTABLE = 1 << 1;
        /// Visible across threads (`shared`).
        const SHARED = 1 << 2;
        /// Mutability wildcard (`inout`).
        const WILD = 1 << 3;
    }
}

impl Mods {
    /// Plain mutable.
    pub const MUTABLE: Self = Self::empty();

    /// Apply `outer` on top of `self`.
    ///
    /// `immutable` absorbs every other qualifier.
    #[must_use]
    pub fn merge(self, outer: Mods) -> Mods {
        let merged = self | outer;
        if merged.contains(Mods::IMMUTABLE) {
            Mods::IMMUTABLE
        } else {
            merged
        }
    }

    #[inline]
    pub const fn is_shared(self) -> bool {
        self.contains(Mods::SHARED)
    }

    #[inline]
    pub const fn is_const(self) -> bool {
        self.contains(Mods::CONST)
    }

    #[inline]
    pub const fn is_immutable(self) -> bool {
        self.contains(Mods::IMMUTABLE)
    }

    #[inline]
    pub const fn is_wild(self) -> bool {
        self.contains(Mods::WILD)
    }
}
