//! Speculative-instantiation reachability.
//!
//! A template instantiation created while probing (`__traits(compiles)`,
//! constraint checks, ...) may never reach object code. A descriptor that
//! references such an instance points at members that are never emitted,
//! so callers ask [`is_speculative`] before requesting one in contexts
//! where instantiation completeness is uncertain.

use rtti_types::{ensure_sufficient_stack, Idx, Pool, Tag};

use crate::services::Instantiations;

/// Check if `ty` reaches an aggregate instance that will not be emitted.
///
/// `None` is never speculative. Qualifiers are stripped before
/// dispatching on the category.
pub fn is_speculative(pool: &Pool, inst: &dyn Instantiations, ty: Option<Idx>) -> bool {
    let Some(ty) = ty else {
        return false;
    };
    // Only types that contain an instance can be speculative.
    if !pool.flags(ty).has_instance() {
        return false;
    }

    ensure_sufficient_stack(|| {
        let ty = pool.unqualified(ty);
        match pool.tag(ty) {
            Tag::Map => {
                is_speculative(pool, inst, Some(pool.map_key(ty)))
                    || is_speculative(pool, inst, Some(pool.map_value(ty)))
            }
            Tag::Struct => {
                let id = pool.aggregate_of(ty);
                let Some(instance) = pool.aggregate(id).instance else {
                    return false;
                };
                if inst.needs_codegen(instance) {
                    return false;
                }
                let anchored =
                    inst.requiring_module(instance).is_some() || inst.descriptor_requested(id);
                !anchored
            }
            // Classes are anchored by their requiring module alone.
            Tag::Class => pool
                .aggregate(pool.aggregate_of(ty))
                .instance
                .is_some_and(|i| !inst.needs_codegen(i) && inst.requiring_module(i).is_none()),
            Tag::Tuple => pool
                .tuple_elems(ty)
                .into_iter()
                .any(|elem| is_speculative(pool, inst, Some(elem))),
            Tag::Enum => false,
            // Vector element, pointer target, slice or array element,
            // function return type, delegate function type.
            _ => is_speculative(pool, inst, pool.next(ty)),
        }
    })
}
