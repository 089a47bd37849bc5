//! Interning store for canonical types.
//!
//! Each entry is a (tag, qualifiers, payload) triple. Interning the same
//! triple twice returns the same [`Idx`], which is what makes pool types
//! canonical. Payloads of single-child and nominal types live inline in the
//! entry; everything else is stored in `extra` as `[len, items...]`.

mod construct;
mod format;

use rustc_hash::FxHashMap;
use smallvec::{smallvec, SmallVec};

use rtti_ir::Name;

use crate::{Aggregate, AggregateId, Idx, Mods, Tag, TypeFlags};

type Payload = SmallVec<[u32; 4]>;

#[derive(Clone, Eq, PartialEq, Hash)]
struct InternKey {
    tag: Tag,
    mods: Mods,
    payload: Payload,
}

#[derive(Copy, Clone, Debug)]
struct Item {
    tag: Tag,
    mods: Mods,
    /// Inline child / aggregate id, or offset into `extra`.
    data: u32,
}

/// Canonical type store.
pub struct Pool {
    items: Vec<Item>,
    flags: Vec<TypeFlags>,
    /// Unqualified form of each entry (itself when already unqualified).
    unqualified: Vec<Idx>,
    extra: Vec<u32>,
    intern_map: FxHashMap<InternKey, Idx>,
    aggregates: Vec<Aggregate>,
}

impl Pool {
    /// Create a pool with the primitive scalars and `typeof(null)` pre-interned.
    pub fn new() -> Self {
        let mut pool = Pool {
            items: Vec::with_capacity(256),
            flags: Vec::with_capacity(256),
            unqualified: Vec::with_capacity(256),
            extra: Vec::with_capacity(1024),
            intern_map: FxHashMap::default(),
            aggregates: Vec::new(),
        };

        for tag in Tag::PRE_INTERNED {
            pool.intern(tag, Mods::MUTABLE, &[]);
        }
        debug_assert_eq!(pool.items.len(), Idx::PRE_INTERNED as usize);

        pool
    }

    /// Number of interned types.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: the pre-interned types are present from creation.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Intern a (tag, mods, payload) triple.
    ///
    /// Qualified entries intern their unqualified twin first so that
    /// `unqualified()` never has to allocate.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "pool indices and payload lengths are 32-bit by layout"
    )]
    pub(crate) fn intern(&mut self, tag: Tag, mods: Mods, payload: &[u32]) -> Idx {
        let key = InternKey {
            tag,
            mods,
            payload: SmallVec::from_slice(payload),
        };
        if let Some(&idx) = self.intern_map.get(&key) {
            return idx;
        }

        let unqualified = if mods.is_empty() {
            None
        } else {
            Some(self.intern(tag, Mods::MUTABLE, payload))
        };

        let flags = match unqualified {
            Some(base) => self.flags(base) | TypeFlags::IS_QUALIFIED,
            None => self.compute_flags(tag, payload),
        };

        let data = if tag.uses_extra() {
            let start = self.extra.len() as u32;
            self.extra.push(payload.len() as u32);
            self.extra.extend_from_slice(payload);
            start
        } else {
            payload.first().copied().unwrap_or(0)
        };

        let idx = Idx::from_raw(self.items.len() as u32);
        self.items.push(Item { tag, mods, data });
        self.flags.push(flags);
        self.unqualified.push(unqualified.unwrap_or(idx));
        self.intern_map.insert(key, idx);
        idx
    }

    fn compute_flags(&self, tag: Tag, payload: &[u32]) -> TypeFlags {
        let children = |ids: &[u32]| {
            TypeFlags::propagate_all(ids.iter().map(|&raw| self.flags(Idx::from_raw(raw))))
        };

        match tag {
            _ if tag.is_primitive() => TypeFlags::IS_PRIMITIVE,
            Tag::Null => TypeFlags::empty(),
            Tag::Pointer | Tag::Slice => TypeFlags::IS_CONTAINER | children(payload),
            Tag::StaticArray | Tag::Vector => TypeFlags::IS_CONTAINER | children(&payload[..1]),
            Tag::Map => TypeFlags::IS_CONTAINER | children(payload),
            Tag::Function | Tag::Delegate => TypeFlags::IS_FUNCTION | children(payload),
            Tag::Tuple => TypeFlags::IS_COMPOSITE | children(payload),
            Tag::Struct | Tag::Class => {
                let agg = &self.aggregates[payload[0] as usize];
                if agg.instance.is_some() {
                    TypeFlags::IS_AGGREGATE | TypeFlags::HAS_INSTANCE
                } else {
                    TypeFlags::IS_AGGREGATE
                }
            }
            // Enumerations are never parameterized; their base does not leak.
            _ => TypeFlags::empty(),
        }
    }

    // === Entry queries ===

    #[inline]
    fn item(&self, idx: Idx) -> Item {
        self.items[idx.index()]
    }

    /// Structural category.
    #[inline]
    pub fn tag(&self, idx: Idx) -> Tag {
        self.item(idx).tag
    }

    /// Qualifier set.
    #[inline]
    pub fn mods(&self, idx: Idx) -> Mods {
        self.item(idx).mods
    }

    /// Pre-computed flags.
    #[inline]
    pub fn flags(&self, idx: Idx) -> TypeFlags {
        self.flags[idx.index()]
    }

    /// The same type with every qualifier removed.
    #[inline]
    pub fn unqualified(&self, idx: Idx) -> Idx {
        self.unqualified[idx.index()]
    }

    /// Check if the type carries any qualifier.
    #[inline]
    pub fn is_qualified(&self, idx: Idx) -> bool {
        !self.mods(idx).is_empty()
    }

    fn extra(&self, idx: Idx) -> &[u32] {
        let start = self.item(idx).data as usize;
        let len = self.extra[start] as usize;
        &self.extra[start + 1..start + 1 + len]
    }

    fn payload(&self, idx: Idx) -> Payload {
        let item = self.item(idx);
        match item.tag {
            tag if tag.uses_extra() => SmallVec::from_slice(self.extra(idx)),
            Tag::Pointer | Tag::Slice | Tag::Delegate | Tag::Struct | Tag::Class => {
                smallvec![item.data]
            }
            _ => SmallVec::new(),
        }
    }

    /// The type with its qualifiers replaced by exactly `mods`.
    pub fn with_mods(&mut self, idx: Idx, mods: Mods) -> Idx {
        if self.mods(idx) == mods {
            return idx;
        }
        let payload = self.payload(idx);
        self.intern(self.tag(idx), mods, &payload)
    }

    // === Structural accessors ===

    /// The single structurally-contained type: pointer target, slice,
    /// static array or vector element, function return type, or the
    /// function type behind a delegate.
    pub fn next(&self, idx: Idx) -> Option<Idx> {
        match self.tag(idx) {
            Tag::Pointer | Tag::Slice | Tag::Delegate => Some(Idx::from_raw(self.item(idx).data)),
            Tag::StaticArray | Tag::Vector | Tag::Function => Some(Idx::from_raw(self.extra(idx)[0])),
            _ => None,
        }
    }

    /// Length of a static array.
    pub fn static_array_len(&self, idx: Idx) -> u32 {
        debug_assert_eq!(self.tag(idx), Tag::StaticArray);
        self.extra(idx)[1]
    }

    /// Lane count of a vector.
    pub fn vector_lanes(&self, idx: Idx) -> u32 {
        debug_assert_eq!(self.tag(idx), Tag::Vector);
        self.extra(idx)[1]
    }

    /// Key type of an associative array.
    pub fn map_key(&self, idx: Idx) -> Idx {
        debug_assert_eq!(self.tag(idx), Tag::Map);
        Idx::from_raw(self.extra(idx)[0])
    }

    /// Value type of an associative array.
    pub fn map_value(&self, idx: Idx) -> Idx {
        debug_assert_eq!(self.tag(idx), Tag::Map);
        Idx::from_raw(self.extra(idx)[1])
    }

    /// Parameter types of a function type.
    pub fn function_params(&self, idx: Idx) -> Vec<Idx> {
        debug_assert_eq!(self.tag(idx), Tag::Function);
        self.extra(idx)[1..].iter().map(|&raw| Idx::from_raw(raw)).collect()
    }

    /// Element types of a tuple.
    pub fn tuple_elems(&self, idx: Idx) -> Vec<Idx> {
        debug_assert_eq!(self.tag(idx), Tag::Tuple);
        self.extra(idx).iter().map(|&raw| Idx::from_raw(raw)).collect()
    }

    /// Aggregate behind a struct or class type.
    pub fn aggregate_of(&self, idx: Idx) -> AggregateId {
        debug_assert!(self.tag(idx).is_aggregate());
        AggregateId::from_raw(self.item(idx).data)
    }

    /// Look up an aggregate declaration.
    pub fn aggregate(&self, id: AggregateId) -> &Aggregate {
        &self.aggregates[id.raw() as usize]
    }

    /// Name of an enumeration.
    pub fn enum_name(&self, idx: Idx) -> Name {
        debug_assert_eq!(self.tag(idx), Tag::Enum);
        Name::from_raw(self.extra(idx)[0])
    }

    /// Base type of an enumeration.
    pub fn enum_base(&self, idx: Idx) -> Idx {
        debug_assert_eq!(self.tag(idx), Tag::Enum);
        Idx::from_raw(self.extra(idx)[1])
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}
