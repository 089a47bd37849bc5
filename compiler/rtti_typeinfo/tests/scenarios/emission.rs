use pretty_assertions::assert_eq;
use rtti_diagnostic::ErrorCode;
use rtti_ir::Span;
use rtti_typeinfo::{DescriptorKind, Emission, TypeInfoConfig};
use rtti_types::{AggregateKind, Idx, Mods, TypeExpr};

use crate::common::Session;

#[test]
fn map_keyed_by_string_is_registered() {
    let mut s = Session::new();
    let string = s.pool.string();
    let map = s.pool.map(string, Idx::INT);
    assert_eq!(s.render(map), "int[immutable(char)[]]");

    let id = s.ensure(map, Some(&Session::scope())).unwrap();
    let d = *s.gen.table().descriptor(id);

    assert_eq!(d.kind, DescriptorKind::Map);
    assert!(d.emission.is_emitted());
    assert_eq!(s.emit_count(id), 1);
}

#[test]
fn string_slice_is_builtin() {
    let mut s = Session::new();
    let string = s.pool.string();

    let id = s.ensure(string, Some(&Session::scope())).unwrap();
    assert_eq!(s.gen.table().descriptor(id).kind, DescriptorKind::Slice);
    assert_eq!(s.gen.table().descriptor(id).emission, Emission::Builtin);
    assert_eq!(s.emit_count(id), 0);
}

#[test]
fn shared_struct_registers_wrapper_and_struct_once() {
    let mut s = Session::new();
    let agg = s.declare("MyStruct", AggregateKind::Struct);
    let my_struct = s.pool.struct_type(agg);
    let shared = s.pool.shared_of(my_struct);
    let scope = Session::scope();

    let wrapper = s.ensure(shared, Some(&scope)).unwrap();
    let plain = s.ensure(my_struct, Some(&scope)).unwrap();

    assert_eq!(
        s.gen.table().descriptor(wrapper).kind,
        DescriptorKind::Shared(plain)
    );
    assert_eq!(s.gen.table().descriptor(plain).kind, DescriptorKind::Struct);
    assert_eq!(s.emit_count(wrapper), 1);
    assert_eq!(s.emit_count(plain), 1);
    assert_eq!(s.modules.pending.len(), 2);
}

#[test]
fn spellings_of_one_type_share_a_descriptor() {
    let mut s = Session::new();

    let ch = s.arena.alloc(TypeExpr::Resolved(Idx::CHAR), Span::new(0, 4));
    let imm = s.arena.alloc(
        TypeExpr::Qualified {
            mods: Mods::IMMUTABLE,
            inner: ch,
        },
        Span::new(0, 15),
    );
    let spelled = s.arena.alloc(TypeExpr::Slice(imm), Span::new(0, 17));
    let string = s.interner.intern("string");
    let aliased = s.arena.alloc(
        TypeExpr::Alias {
            name: string,
            target: spelled,
        },
        Span::new(20, 26),
    );

    let a = s.ensure_written(spelled, None).unwrap();
    let b = s.ensure_written(aliased, None).unwrap();
    let canonical = s.pool.string();

    assert_eq!(a, b);
    assert_eq!(s.gen.descriptor_of(canonical), Some(a));
    assert_eq!(s.gen.descriptor_of_expr(spelled), Some(a));
    assert_eq!(s.gen.descriptor_of_expr(aliased), Some(a));
}

#[test]
fn qualifier_variants_share_one_structural_descriptor() {
    let mut s = Session::new();
    let t = s.pool.slice(Idx::DOUBLE);
    let t = s.pool.pointer(t);
    let const_t = s.pool.const_of(t);
    let shared_const_t = s.pool.shared_of(const_t);
    let scope = Session::scope();

    let plain = s.ensure(t, Some(&scope)).unwrap();
    let c = s.ensure(const_t, Some(&scope)).unwrap();
    let sc = s.ensure(shared_const_t, Some(&scope)).unwrap();

    let table = s.gen.table();
    assert_eq!(table.len(), 3);
    assert_eq!(table.descriptor(c).kind, DescriptorKind::Const(plain));
    assert_eq!(table.descriptor(sc).kind, DescriptorKind::Shared(plain));
    let structural = table.iter().filter(|(_, d)| !d.kind.is_wrapper()).count();
    assert_eq!(structural, 1);
}

#[test]
fn shared_primitive_is_registered() {
    let mut s = Session::new();
    let shared_int = s.pool.shared_of(Idx::INT);

    let int = s.ensure(Idx::INT, Some(&Session::scope())).unwrap();
    let shared = s.ensure(shared_int, Some(&Session::scope())).unwrap();

    assert_eq!(s.emit_count(int), 0);
    assert_eq!(s.emit_count(shared), 1);
}

#[test]
fn object_pass_honours_multi_object() {
    let mut s = Session::with_config(TypeInfoConfig::default().with_multi_object(true));
    let e = s.interner.intern("Color");
    let color = s.pool.enum_type(e, Idx::UBYTE);

    let id = s.ensure(color, None).unwrap();
    assert_eq!(s.gen.table().descriptor(id).kind, DescriptorKind::Enum);
    assert_eq!(s.objects.written, vec![(id, true)]);
    assert!(s.modules.pending.is_empty());
}

#[test]
fn reduced_runtime_gates_on_ctfe() {
    let mut s = Session::with_config(TypeInfoConfig::reduced_runtime());
    let ty = s.pool.map(Idx::INT, Idx::INT);

    assert!(s.ensure(ty, Some(&Session::scope())).is_err());
    assert_eq!(s.diagnostics.error_count(), 1);
    assert!(s.gen.table().is_empty());

    let id = s.ensure(ty, Some(&Session::scope().in_ctfe())).unwrap();
    assert_eq!(s.gen.descriptor_of(ty), Some(id));
    assert_eq!(s.diagnostics.error_count(), 1);

    let diags = s.diagnostics.flush();
    assert_eq!(diags[0].code, ErrorCode::E7001);
}

#[test]
fn stats_track_routing() {
    let mut s = Session::new();
    let agg = s.declare("Node", AggregateKind::Class);
    let node = s.pool.class_type(agg);
    let const_node = s.pool.const_of(node);
    let scope = Session::scope();

    s.ensure(const_node, Some(&scope)).unwrap();
    s.ensure(node, Some(&scope)).unwrap();
    let ptr = s.pool.pointer(Idx::INT);
    s.ensure(ptr, None).unwrap();

    let stats = *s.gen.stats();
    assert_eq!(stats.created, 3);
    assert_eq!(stats.wrappers, 1);
    assert_eq!(stats.builtin, 1);
    assert_eq!(stats.registered, 1);
    assert_eq!(stats.serialized, 1);
    assert_eq!(stats.cache_hits, 1);
    assert_eq!(stats.emitted(), 2);
}

#[test]
fn inout_wraps_the_builtin_slice() {
    let mut s = Session::new();
    let ints = s.pool.slice(Idx::INT);
    let inout = s.pool.wild_of(ints);
    let shared_inout = s.pool.shared_of(inout);
    assert_eq!(s.render(shared_inout), "shared(inout(int[]))");
    let scope = Session::scope();

    let wild = s.ensure(inout, Some(&scope)).unwrap();
    let shared = s.ensure(shared_inout, Some(&scope)).unwrap();
    let inner = s.gen.descriptor_of(ints).unwrap();

    let table = s.gen.table();
    assert_eq!(table.descriptor(wild).kind, DescriptorKind::Wild(inner));
    assert_eq!(table.descriptor(shared).kind, DescriptorKind::Shared(inner));
    assert_eq!(table.descriptor(inner).emission, Emission::Builtin);
    assert_eq!(s.emit_count(wild), 1);
    assert_eq!(s.emit_count(shared), 1);
    assert_eq!(s.emit_count(inner), 0);
}
