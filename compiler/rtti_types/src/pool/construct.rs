//! Type construction helpers for the Pool.

use rtti_ir::Name;

use crate::{Aggregate, AggregateId, AggregateKind, Idx, Mods, Pool, Tag};

impl Pool {
    // === Aggregates ===

    /// Register an aggregate declaration.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "aggregate ids are 32-bit by layout"
    )]
    pub fn declare_aggregate(&mut self, aggregate: Aggregate) -> AggregateId {
        let id = AggregateId::from_raw(self.aggregates.len() as u32);
        self.aggregates.push(aggregate);
        id
    }

    /// The value type of a struct declaration.
    pub fn struct_type(&mut self, agg: AggregateId) -> Idx {
        debug_assert_eq!(self.aggregate(agg).kind, AggregateKind::Struct);
        self.intern(Tag::Struct, Mods::MUTABLE, &[agg.raw()])
    }

    /// The reference type of a class or interface declaration.
    pub fn class_type(&mut self, agg: AggregateId) -> Idx {
        debug_assert!(self.aggregate(agg).is_reference());
        self.intern(Tag::Class, Mods::MUTABLE, &[agg.raw()])
    }

    /// Create an enumeration type over `base`.
    pub fn enum_type(&mut self, name: Name, base: Idx) -> Idx {
        self.intern(Tag::Enum, Mods::MUTABLE, &[name.raw(), base.raw()])
    }

    // === Single child ===

    /// Create a pointer type `T*`.
    pub fn pointer(&mut self, target: Idx) -> Idx {
        self.intern(Tag::Pointer, Mods::MUTABLE, &[target.raw()])
    }

    /// Create a slice type `T[]`.
    pub fn slice(&mut self, elem: Idx) -> Idx {
        self.intern(Tag::Slice, Mods::MUTABLE, &[elem.raw()])
    }

    /// Create a delegate over a function type.
    pub fn delegate(&mut self, function: Idx) -> Idx {
        debug_assert_eq!(self.tag(function), Tag::Function);
        self.intern(Tag::Delegate, Mods::MUTABLE, &[function.raw()])
    }

    // === Two children ===

    /// Create a static array type `T[len]`.
    pub fn static_array(&mut self, elem: Idx, len: u32) -> Idx {
        self.intern(Tag::StaticArray, Mods::MUTABLE, &[elem.raw(), len])
    }

    /// Create an associative array type `V[K]`.
    pub fn map(&mut self, key: Idx, value: Idx) -> Idx {
        self.intern(Tag::Map, Mods::MUTABLE, &[key.raw(), value.raw()])
    }

    /// Create a SIMD vector type `__vector(T[lanes])`.
    pub fn vector(&mut self, elem: Idx, lanes: u32) -> Idx {
        self.intern(Tag::Vector, Mods::MUTABLE, &[elem.raw(), lanes])
    }

    // === Variable arity ===

    /// Create a function type `ret function(params...)`.
    pub fn function(&mut self, params: &[Idx], ret: Idx) -> Idx {
        // Layout: [return_type, param0, param1, ...]
        let mut payload = Vec::with_capacity(params.len() + 1);
        payload.push(ret.raw());
        payload.extend(params.iter().map(|p| p.raw()));
        self.intern(Tag::Function, Mods::MUTABLE, &payload)
    }

    /// Create a tuple type `(elems...)`.
    pub fn tuple(&mut self, elems: &[Idx]) -> Idx {
        let payload: Vec<u32> = elems.iter().map(|e| e.raw()).collect();
        self.intern(Tag::Tuple, Mods::MUTABLE, &payload)
    }

    // === Qualifiers ===

    /// Apply `mods` on top of the qualifiers `ty` already has.
    pub fn qualified(&mut self, ty: Idx, mods: Mods) -> Idx {
        let merged = self.mods(ty).merge(mods);
        self.with_mods(ty, merged)
    }

    /// `const(ty)`.
    pub fn const_of(&mut self, ty: Idx) -> Idx {
        self.qualified(ty, Mods::CONST)
    }

    /// `immutable(ty)`.
    pub fn immutable_of(&mut self, ty: Idx) -> Idx {
        self.qualified(ty, Mods::IMMUTABLE)
    }

    /// `shared(ty)`.
    pub fn shared_of(&mut self, ty: Idx) -> Idx {
        self.qualified(ty, Mods::SHARED)
    }

    /// `inout(ty)`.
    pub fn wild_of(&mut self, ty: Idx) -> Idx {
        self.qualified(ty, Mods::WILD)
    }

    /// `immutable(char)[]`, the common string type.
    pub fn string(&mut self) -> Idx {
        let elem = self.immutable_of(Idx::CHAR);
        self.slice(elem)
    }
}
