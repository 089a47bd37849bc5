//! Canonical type pool for runtime type-descriptor generation.
//!
//! Every source type is interned into a [`Pool`] and referenced by a 32-bit
//! [`Idx`]. Interning is what makes a type *canonical*: two type
//! expressions that denote the same type (through aliases, redundant
//! qualifiers, ...) resolve to the same `Idx`, so identity comparison is
//! type equality.
//!
//! # Layout
//!
//! Each pool entry stores a [`Tag`] (structural category), a [`Mods`]
//! qualifier set, pre-computed [`TypeFlags`], and the `Idx` of its
//! unqualified form. Qualified types share their payload with the
//! unqualified entry, which is interned first.
//!
//! As-written types live in a [`TypeExprArena`] and are merged into the
//! pool with [`TypeExprArena::canonicalize`].

mod aggregate;
mod expr;
mod flags;
mod idx;
mod mods;
mod pool;
mod stack;
mod tag;

pub use aggregate::{Aggregate, AggregateId, AggregateKind, InstanceId};
pub use expr::{TypeExpr, TypeExprArena, TypeExprId};
pub use flags::TypeFlags;
pub use idx::Idx;
pub use mods::Mods;
pub use pool::Pool;
pub use stack::ensure_sufficient_stack;
pub use tag::Tag;

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Idx, Mods, Tag};
    rtti_ir::static_assert_size!(Idx, 4);
    rtti_ir::static_assert_size!(Tag, 1);
    rtti_ir::static_assert_size!(Mods, 1);
}
