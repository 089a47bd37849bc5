//! Structural classification and qualifier wrapping.

use rtti_types::{Idx, Mods, Pool, Tag};

use crate::{DescriptorId, DescriptorKind};

/// Map an unqualified type's category to the descriptor kind describing it.
///
/// Total: categories with no dedicated runtime class (primitives,
/// `typeof(null)`) get [`DescriptorKind::Base`]. Qualifiers on `ty` are
/// ignored; see [`wrapper_for`].
pub fn classify(pool: &Pool, ty: Idx) -> DescriptorKind {
    match pool.tag(ty) {
        Tag::Pointer => DescriptorKind::Pointer,
        Tag::Slice => DescriptorKind::Slice,
        Tag::StaticArray => DescriptorKind::StaticArray,
        Tag::Map => DescriptorKind::Map,
        Tag::Struct => DescriptorKind::Struct,
        Tag::Vector => DescriptorKind::Vector,
        Tag::Enum => DescriptorKind::Enum,
        Tag::Function => DescriptorKind::Function,
        Tag::Delegate => DescriptorKind::Delegate,
        Tag::Tuple => DescriptorKind::Tuple,
        Tag::Class => {
            if pool.aggregate(pool.aggregate_of(ty)).is_interface() {
                DescriptorKind::Interface
            } else {
                DescriptorKind::Class
            }
        }
        _ => DescriptorKind::Base,
    }
}

/// Qualifier wrapper kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Wrapper {
    Shared,
    Const,
    Immutable,
    Wild,
}

impl Wrapper {
    /// Build the wrapper descriptor kind around `inner`.
    pub fn wrap(self, inner: DescriptorId) -> DescriptorKind {
        match self {
            Wrapper::Shared => DescriptorKind::Shared(inner),
            Wrapper::Const => DescriptorKind::Const(inner),
            Wrapper::Immutable => DescriptorKind::Immutable(inner),
            Wrapper::Wild => DescriptorKind::Wild(inner),
        }
    }
}

/// Pick the wrapper for a qualifier set, or `None` when unqualified.
///
/// Precedence is shared, then const, then immutable, then wild:
/// `shared(const(T))` is a shared wrapper and `const(inout(T))` a const
/// wrapper.
pub fn wrapper_for(mods: Mods) -> Option<Wrapper> {
    if mods.is_shared() {
        Some(Wrapper::Shared)
    } else if mods.is_const() {
        Some(Wrapper::Const)
    } else if mods.is_immutable() {
        Some(Wrapper::Immutable)
    } else if mods.is_wild() {
        Some(Wrapper::Wild)
    } else {
        None
    }
}
