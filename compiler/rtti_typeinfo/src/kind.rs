//! Descriptor kinds and generated descriptors.

use std::fmt;

use rtti_types::Idx;

use crate::services::ModuleId;

/// Index of a descriptor in the [`DescriptorTable`](crate::DescriptorTable).
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct DescriptorId(u32);

impl DescriptorId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        DescriptorId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for DescriptorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DescriptorId({})", self.0)
    }
}

/// What a descriptor describes.
///
/// Structural kinds read their payload from the pool through
/// [`Descriptor::ty`]. The four qualifier wrappers hold the descriptor of
/// the fully unqualified type and carry nothing else.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DescriptorKind {
    /// Identity and size only: primitives, `typeof(null)`.
    Base,
    Pointer,
    Slice,
    StaticArray,
    Map,
    Struct,
    Vector,
    Enum,
    Function,
    Delegate,
    Tuple,
    Interface,
    Class,

    // === Qualifier wrappers ===
    Shared(DescriptorId),
    Const(DescriptorId),
    Immutable(DescriptorId),
    Wild(DescriptorId),
}

impl DescriptorKind {
    /// The wrapped descriptor, if this is a qualifier wrapper.
    pub fn wrapped(self) -> Option<DescriptorId> {
        match self {
            DescriptorKind::Shared(inner)
            | DescriptorKind::Const(inner)
            | DescriptorKind::Immutable(inner)
            | DescriptorKind::Wild(inner) => Some(inner),
            _ => None,
        }
    }

    #[inline]
    pub fn is_wrapper(self) -> bool {
        self.wrapped().is_some()
    }

    /// The runtime class instantiated for this kind; `None` for the base
    /// descriptor class itself.
    pub fn runtime_class(self) -> Option<RuntimeClass> {
        let class = match self {
            DescriptorKind::Base => return None,
            DescriptorKind::Pointer => RuntimeClass::Pointer,
            DescriptorKind::Slice => RuntimeClass::Array,
            DescriptorKind::StaticArray => RuntimeClass::StaticArray,
            DescriptorKind::Map => RuntimeClass::AssociativeArray,
            DescriptorKind::Struct => RuntimeClass::Struct,
            DescriptorKind::Vector => RuntimeClass::Vector,
            DescriptorKind::Enum => RuntimeClass::Enum,
            DescriptorKind::Function => RuntimeClass::Function,
            DescriptorKind::Delegate => RuntimeClass::Delegate,
            DescriptorKind::Tuple => RuntimeClass::Tuple,
            DescriptorKind::Interface => RuntimeClass::Interface,
            DescriptorKind::Class => RuntimeClass::Class,
            DescriptorKind::Shared(_) => RuntimeClass::Shared,
            DescriptorKind::Const(_) => RuntimeClass::Const,
            DescriptorKind::Immutable(_) => RuntimeClass::Invariant,
            DescriptorKind::Wild(_) => RuntimeClass::Inout,
        };
        Some(class)
    }
}

/// Runtime library classes a descriptor can be an instance of.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RuntimeClass {
    Pointer,
    Array,
    StaticArray,
    AssociativeArray,
    Struct,
    Vector,
    Enum,
    Function,
    Delegate,
    Tuple,
    Interface,
    Class,
    Shared,
    Const,
    Invariant,
    Inout,
}

impl RuntimeClass {
    pub const COUNT: usize = 16;

    pub const ALL: [RuntimeClass; Self::COUNT] = [
        RuntimeClass::Pointer,
        RuntimeClass::Array,
        RuntimeClass::StaticArray,
        RuntimeClass::AssociativeArray,
        RuntimeClass::Struct,
        RuntimeClass::Vector,
        RuntimeClass::Enum,
        RuntimeClass::Function,
        RuntimeClass::Delegate,
        RuntimeClass::Tuple,
        RuntimeClass::Interface,
        RuntimeClass::Class,
        RuntimeClass::Shared,
        RuntimeClass::Const,
        RuntimeClass::Invariant,
        RuntimeClass::Inout,
    ];

    /// Declaration name in the runtime's `object` module.
    pub const fn decl_name(self) -> &'static str {
        match self {
            RuntimeClass::Pointer => "TypeInfo_Pointer",
            RuntimeClass::Array => "TypeInfo_Array",
            RuntimeClass::StaticArray => "TypeInfo_StaticArray",
            RuntimeClass::AssociativeArray => "TypeInfo_AssociativeArray",
            RuntimeClass::Struct => "TypeInfo_Struct",
            RuntimeClass::Vector => "TypeInfo_Vector",
            RuntimeClass::Enum => "TypeInfo_Enum",
            RuntimeClass::Function => "TypeInfo_Function",
            RuntimeClass::Delegate => "TypeInfo_Delegate",
            RuntimeClass::Tuple => "TypeInfo_Tuple",
            RuntimeClass::Interface => "TypeInfo_Interface",
            RuntimeClass::Class => "TypeInfo_Class",
            RuntimeClass::Shared => "TypeInfo_Shared",
            RuntimeClass::Const => "TypeInfo_Const",
            RuntimeClass::Invariant => "TypeInfo_Invariant",
            RuntimeClass::Inout => "TypeInfo_Inout",
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Where a descriptor ends up in object code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Emission {
    /// Supplied by the prebuilt runtime library; never emitted.
    Builtin,
    /// Queued on the owning module for serialization with its members.
    Pending(ModuleId),
    /// Handed straight to the object writer.
    Serialized,
}

impl Emission {
    /// Check if this descriptor is emitted by the current compilation.
    #[inline]
    pub fn is_emitted(self) -> bool {
        !matches!(self, Emission::Builtin)
    }
}

/// A generated type descriptor.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Descriptor {
    /// The canonical type described.
    pub ty: Idx,
    pub kind: DescriptorKind,
    pub emission: Emission,
}
