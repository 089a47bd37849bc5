//! Descriptors already supplied by the prebuilt runtime library.
//!
//! The runtime ships descriptors for the unqualified leaf types and the two
//! common string representations. Emitting them again wastes space and
//! produces duplicate definitions at link time.

use rtti_types::{Idx, Mods, Pool, Tag};

/// Check if the runtime library already defines the descriptor for `ty`.
///
/// Coverage depends on the final qualifier state, so `ty` must be the
/// canonical type as requested, not its unqualified form.
pub fn is_builtin_covered(pool: &Pool, ty: Idx) -> bool {
    if pool.is_qualified(ty) {
        return false;
    }
    match pool.tag(ty) {
        tag if tag.is_primitive() => true,
        Tag::Class | Tag::Null => true,
        Tag::Slice => pool.next(ty).is_some_and(|elem| is_builtin_element(pool, elem)),
        _ => false,
    }
}

/// Unqualified primitive, `immutable(char)` or `const(char)`.
fn is_builtin_element(pool: &Pool, elem: Idx) -> bool {
    let mods = pool.mods(elem);
    let tag = pool.tag(elem);
    if tag.is_primitive() && mods.is_empty() {
        return true;
    }
    tag == Tag::Char && (mods == Mods::IMMUTABLE || mods == Mods::CONST)
}
