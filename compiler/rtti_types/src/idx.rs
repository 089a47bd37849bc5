//! Canonical type handle.
//!
//! `Idx` is the only way to refer to a canonical type. Unqualified
//! primitives and `typeof(null)` are pre-interned at fixed indices so the
//! hot checks (builtin coverage, string slices) never touch the pool maps.

use std::fmt;

/// A 32-bit index into the type pool.
///
/// Types are compared by index equality, not structurally.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Pre-interned types (indices 0-16) ===
    pub const VOID: Self = Self(0);
    pub const BOOL: Self = Self(1);
    pub const BYTE: Self = Self(2);
    pub const UBYTE: Self = Self(3);
    pub const SHORT: Self = Self(4);
    pub const USHORT: Self = Self(5);
    pub const INT: Self = Self(6);
    pub const UINT: Self = Self(7);
    pub const LONG: Self = Self(8);
    pub const ULONG: Self = Self(9);
    pub const FLOAT: Self = Self(10);
    pub const DOUBLE: Self = Self(11);
    pub const REAL: Self = Self(12);
    /// UTF-8 code unit.
    pub const CHAR: Self = Self(13);
    /// UTF-16 code unit.
    pub const WCHAR: Self = Self(14);
    /// UTF-32 code unit.
    pub const DCHAR: Self = Self(15);
    /// `typeof(null)`.
    pub const NULL: Self = Self(16);

    /// Number of pre-interned types; the first dynamic index.
    pub const PRE_INTERNED: u32 = 17;

    /// Create an index from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is one of the pre-interned unqualified types.
    #[inline]
    pub const fn is_pre_interned(self) -> bool {
        self.0 < Self::PRE_INTERNED
    }

    /// Source spelling of pre-interned types, `None` for everything else.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("void"),
            1 => Some("bool"),
            2 => Some("byte"),
            3 => Some("ubyte"),
            4 => Some("short"),
            5 => Some("ushort"),
            6 => Some("int"),
            7 => Some("uint"),
            8 => Some("long"),
            9 => Some("ulong"),
            10 => Some("float"),
            11 => Some("double"),
            12 => Some("real"),
            13 => Some("char"),
            14 => Some("wchar"),
            15 => Some("dchar"),
            16 => Some("typeof(null)"),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            write!(f, "Idx({name})")
        } else {
            write!(f, "Idx({})", self.0)
        }
    }
}
