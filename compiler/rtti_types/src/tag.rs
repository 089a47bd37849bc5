//! Structural category of a pool entry.

/// Structural category of a canonical type.
///
/// Values are grouped in ranges so category checks are a single compare:
/// - 0-15: primitive scalars
/// - 16-31: special leaf types
/// - 32-47: single-child types (child stored inline)
/// - 48-63: two-child types (stored in extra)
/// - 64-79: variable-arity types (stored in extra)
/// - 80-95: nominal types
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Tag {
    // === Primitive scalars (0-15) ===
    Void = 0,
    Bool = 1,
    Byte = 2,
    UByte = 3,
    Short = 4,
    UShort = 5,
    Int = 6,
    UInt = 7,
    Long = 8,
    ULong = 9,
    Float = 10,
    Double = 11,
    Real = 12,
    Char = 13,
    WChar = 14,
    DChar = 15,

    // === Special leaves (16-31) ===
    /// `typeof(null)`.
    Null = 16,

    // === Single child (32-47) ===
    /// `T*`
    Pointer = 32,
    /// `T[]`
    Slice = 33,
    /// `R delegate(P...)`; the child is the underlying function type.
    Delegate = 34,

    // === Two children (48-63) ===
    /// `T[N]`: element and length.
    StaticArray = 48,
    /// `V[K]`: key and value.
    Map = 49,
    /// `__vector(T[N])`: element and lane count.
    Vector = 50,

    // === Variable arity (64-79) ===
    /// `R function(P...)`: return type then parameters.
    Function = 64,
    /// `(T, U, ...)`
    Tuple = 65,

    // === Nominal (80-95) ===
    /// Value aggregate; payload is an `AggregateId`.
    Struct = 80,
    /// Class or interface reference; payload is an `AggregateId`.
    Class = 81,
    /// Enumeration: name and base type.
    Enum = 82,
}

impl Tag {
    /// Check if this tag is a primitive scalar.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        (self as u8) < 16
    }

    /// Check if the payload lives in the pool's extra array.
    #[inline]
    pub const fn uses_extra(self) -> bool {
        matches!(
            self,
            Tag::StaticArray | Tag::Map | Tag::Vector | Tag::Function | Tag::Tuple | Tag::Enum
        )
    }

    /// Check if this tag names a user aggregate (struct, class or interface).
    #[inline]
    pub const fn is_aggregate(self) -> bool {
        matches!(self, Tag::Struct | Tag::Class)
    }

    /// Human-readable category name.
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Void => "void",
            Tag::Bool => "bool",
            Tag::Byte => "byte",
            Tag::UByte => "ubyte",
            Tag::Short => "short",
            Tag::UShort => "ushort",
            Tag::Int => "int",
            Tag::UInt => "uint",
            Tag::Long => "long",
            Tag::ULong => "ulong",
            Tag::Float => "float",
            Tag::Double => "double",
            Tag::Real => "real",
            Tag::Char => "char",
            Tag::WChar => "wchar",
            Tag::DChar => "dchar",
            Tag::Null => "typeof(null)",
            Tag::Pointer => "pointer",
            Tag::Slice => "slice",
            Tag::Delegate => "delegate",
            Tag::StaticArray => "static array",
            Tag::Map => "associative array",
            Tag::Vector => "vector",
            Tag::Function => "function",
            Tag::Tuple => "tuple",
            Tag::Struct => "struct",
            Tag::Class => "class",
            Tag::Enum => "enum",
        }
    }

    /// The pre-interned primitive tags in `Idx` order.
    pub(crate) const PRE_INTERNED: [Tag; 17] = [
        Tag::Void,
        Tag::Bool,
        Tag::Byte,
        Tag::UByte,
        Tag::Short,
        Tag::UShort,
        Tag::Int,
        Tag::UInt,
        Tag::Long,
        Tag::ULong,
        Tag::Float,
        Tag::Double,
        Tag::Real,
        Tag::Char,
        Tag::WChar,
        Tag::DChar,
        Tag::Null,
    ];
}
