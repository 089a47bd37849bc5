//! User-declared aggregates referenced by nominal types.

use rtti_ir::Name;

/// Index of an aggregate declaration in the pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateId(u32);

impl AggregateId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        AggregateId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Handle of a generic instantiation, owned by the instantiation tracker.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceId(u32);

impl InstanceId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        InstanceId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// What kind of aggregate a declaration is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum AggregateKind {
    /// Value aggregate.
    Struct,
    /// Reference type with a class hierarchy.
    Class,
    /// Reference type with no state.
    Interface,
}

/// An aggregate declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Aggregate {
    pub name: Name,
    pub kind: AggregateKind,
    /// The generic instantiation this aggregate was produced by, if any.
    pub instance: Option<InstanceId>,
}

impl Aggregate {
    pub fn new(name: Name, kind: AggregateKind) -> Self {
        Aggregate {
            name,
            kind,
            instance: None,
        }
    }

    /// Mark this aggregate as produced by a generic instantiation.
    #[must_use]
    pub fn instantiated_by(mut self, instance: InstanceId) -> Self {
        self.instance = Some(instance);
        self
    }

    #[inline]
    pub fn is_interface(&self) -> bool {
        self.kind == AggregateKind::Interface
    }

    #[inline]
    pub fn is_reference(&self) -> bool {
        matches!(self.kind, AggregateKind::Class | AggregateKind::Interface)
    }
}
