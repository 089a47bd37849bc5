//! Descriptor storage keyed by canonical type.
//!
//! Descriptors live in an arena. Each canonical type has at most one slot
//! in `by_type`, written once and never replaced; as-written type
//! expressions get an alias entry pointing at the same descriptor rather
//! than storage of their own.

use rustc_hash::FxHashMap;

use rtti_types::{Idx, TypeExprId};

use crate::{Descriptor, DescriptorId};

/// Session-owned table of generated descriptors.
///
/// Single writer: slots are published with a check-then-insert, which is
/// only sound while one thread generates descriptors.
#[derive(Clone, Debug, Default)]
pub struct DescriptorTable {
    descriptors: Vec<Descriptor>,
    by_type: FxHashMap<Idx, DescriptorId>,
    aliases: FxHashMap<TypeExprId, DescriptorId>,
}

impl DescriptorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptor cached for a canonical type.
    #[inline]
    pub fn get(&self, ty: Idx) -> Option<DescriptorId> {
        self.by_type.get(&ty).copied()
    }

    /// Descriptor a type expression was resolved to.
    #[inline]
    pub fn get_alias(&self, expr: TypeExprId) -> Option<DescriptorId> {
        self.aliases.get(&expr).copied()
    }

    #[inline]
    pub fn descriptor(&self, id: DescriptorId) -> &Descriptor {
        &self.descriptors[id.index()]
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// All descriptors in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (DescriptorId, &Descriptor)> {
        (0u32..)
            .zip(&self.descriptors)
            .map(|(raw, d)| (DescriptorId::from_raw(raw), d))
    }

    /// Store a descriptor in its type's empty slot.
    ///
    /// If the slot is already filled the existing descriptor is kept and
    /// returned; a second descriptor for one type is never created.
    ///
    /// # Panics
    /// Panics if the table outgrows the 32-bit id space.
    pub(crate) fn publish(&mut self, descriptor: Descriptor) -> DescriptorId {
        let existing = self.get(descriptor.ty);
        debug_assert!(
            existing.is_none(),
            "descriptor slot for {:?} published twice",
            descriptor.ty
        );
        if let Some(existing) = existing {
            return existing;
        }
        let Ok(raw) = u32::try_from(self.descriptors.len()) else {
            panic!("descriptor table exceeded {} entries", u32::MAX);
        };
        let id = DescriptorId::from_raw(raw);
        self.descriptors.push(descriptor);
        self.by_type.insert(descriptor.ty, id);
        id
    }

    /// Point an as-written expression at a descriptor, unless it already
    /// points somewhere.
    pub(crate) fn alias(&mut self, expr: TypeExprId, id: DescriptorId) {
        self.aliases.entry(expr).or_insert(id);
    }
}
