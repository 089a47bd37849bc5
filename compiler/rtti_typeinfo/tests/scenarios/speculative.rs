use rtti_typeinfo::{is_speculative, ModuleId};
use rtti_types::{AggregateKind, Idx, InstanceId};

use crate::common::{Instances, Session};

#[test]
fn map_of_unanchored_instance_is_speculative() {
    let mut s = Session::new();
    let agg = s.declare_instance("Pair!(int, int)", AggregateKind::Struct, 1);
    let pair = s.pool.struct_type(agg);
    let map = s.pool.map(Idx::INT, pair);

    let mut inst = Instances::default();
    assert!(is_speculative(&s.pool, &inst, Some(map)));

    // Anchoring the instance makes the whole map safe.
    inst.requiring.insert(InstanceId::from_raw(1), ModuleId::from_raw(0));
    assert!(!is_speculative(&s.pool, &inst, Some(map)));
}

#[test]
fn tuple_is_speculative_through_one_member() {
    let mut s = Session::new();
    let agg = s.declare_instance("Box!char", AggregateKind::Struct, 2);
    let boxed = s.pool.struct_type(agg);
    let ptr = s.pool.pointer(boxed);
    let tup = s.pool.tuple(&[Idx::INT, ptr, Idx::BOOL]);

    assert!(is_speculative(&s.pool, &Instances::default(), Some(tup)));
}

#[test]
fn enum_over_speculative_base_is_not() {
    let mut s = Session::new();
    let agg = s.declare_instance("Box!char", AggregateKind::Struct, 2);
    let boxed = s.pool.struct_type(agg);
    let name = s.interner.intern("Wrapped");
    let e = s.pool.enum_type(name, boxed);

    assert!(!is_speculative(&s.pool, &Instances::default(), Some(e)));
}

#[test]
fn struct_and_class_anchoring_differ() {
    // A descriptor request anchors a struct instance but not a class
    // instance; only a requiring module anchors both.
    let mut s = Session::new();
    let st = s.declare_instance("S!int", AggregateKind::Struct, 5);
    let cl = s.declare_instance("C!int", AggregateKind::Class, 6);
    let st_ty = s.pool.struct_type(st);
    let cl_ty = s.pool.class_type(cl);

    let mut inst = Instances::default();
    inst.requested.insert(st);
    inst.requested.insert(cl);
    assert!(!is_speculative(&s.pool, &inst, Some(st_ty)));
    assert!(is_speculative(&s.pool, &inst, Some(cl_ty)));

    inst.requiring.insert(InstanceId::from_raw(6), ModuleId::from_raw(1));
    assert!(!is_speculative(&s.pool, &inst, Some(cl_ty)));
}

#[test]
fn speculative_check_guards_generation() {
    let mut s = Session::new();
    let agg = s.declare_instance("Vec!float", AggregateKind::Struct, 9);
    let v = s.pool.struct_type(agg);
    let slice = s.pool.slice(v);
    let inst = Instances::default();
    let scope = Session::scope();

    if !is_speculative(&s.pool, &inst, Some(slice)) {
        s.ensure(slice, Some(&scope)).unwrap();
    }
    assert_eq!(s.gen.descriptor_of(slice), None);
    assert!(s.modules.pending.is_empty());
}
