//! Pre-computed type metadata flags.
//!
//! `TypeFlags` are computed once when a type is interned so descriptor
//! generation can answer "could this type reach a generic instance?"
//! without walking it.

use bitflags::bitflags;

bitflags! {
    /// Pre-computed type properties.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TypeFlags: u16 {
        // === Category flags ===

        /// Primitive scalar (`int`, `char`, ...).
        const IS_PRIMITIVE = 1 << 0;
        /// Pointer, slice, static array, map or vector.
        const IS_CONTAINER = 1 << 1;
        /// Function or delegate.
        const IS_FUNCTION = 1 << 2;
        /// Tuple.
        const IS_COMPOSITE = 1 << 3;
        /// Struct, class or interface.
        const IS_AGGREGATE = 1 << 4;
        /// Carries at least one qualifier.
        const IS_QUALIFIED = 1 << 5;

        // === Presence flags (propagate to parents) ===

        /// The type is, or structurally contains, a generic aggregate instance.
        const HAS_INSTANCE = 1 << 8;
    }
}

impl TypeFlags {
    /// Flags inherited from child types.
    pub const PROPAGATE_MASK: Self = Self::HAS_INSTANCE;

    /// Keep only the flags a parent inherits from `child`.
    #[inline]
    pub const fn propagate_from(child: Self) -> Self {
        Self::from_bits_truncate(child.bits() & Self::PROPAGATE_MASK.bits())
    }

    /// Combine propagated flags from several children.
    pub fn propagate_all(children: impl IntoIterator<Item = Self>) -> Self {
        children
            .into_iter()
            .fold(Self::empty(), |acc, child| acc | Self::propagate_from(child))
    }

    /// Check if a generic instance is reachable from this type.
    #[inline]
    pub const fn has_instance(self) -> bool {
        self.contains(Self::HAS_INSTANCE)
    }
}
