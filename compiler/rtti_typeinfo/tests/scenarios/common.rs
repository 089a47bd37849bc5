//! Shared harness for descriptor-generation integration tests.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use rustc_hash::{FxHashMap, FxHashSet};

use rtti_diagnostic::{DiagnosticQueue, ErrorGuaranteed};
use rtti_ir::{Span, StringInterner};
use rtti_typeinfo::{
    Descriptor, DescriptorId, Host, Instantiations, Location, ModuleId, ModuleOwnership,
    ObjectWriter, Request, RuntimeDecls, ScopeContext, TypeInfoConfig, TypeInfoGen,
};
use rtti_types::{Aggregate, AggregateId, AggregateKind, Idx, InstanceId, Pool, TypeExprArena, TypeExprId};

#[derive(Default)]
pub struct Instances {
    pub codegen: FxHashSet<InstanceId>,
    pub requiring: FxHashMap<InstanceId, ModuleId>,
    pub requested: FxHashSet<AggregateId>,
}

impl Instantiations for Instances {
    fn needs_codegen(&self, instance: InstanceId) -> bool {
        self.codegen.contains(&instance)
    }

    fn requiring_module(&self, instance: InstanceId) -> Option<ModuleId> {
        self.requiring.get(&instance).copied()
    }

    fn descriptor_requested(&self, aggregate: AggregateId) -> bool {
        self.requested.contains(&aggregate)
    }
}

/// Module service that owns everything in the root module.
#[derive(Default)]
pub struct Modules {
    pub pending: Vec<(ModuleId, DescriptorId, Descriptor)>,
}

impl ModuleOwnership for Modules {
    fn furthest_importing_module(&self, _scope: &ScopeContext) -> ModuleId {
        ModuleId::from_raw(0)
    }

    fn register_pending(&mut self, module: ModuleId, id: DescriptorId, descriptor: &Descriptor) {
        self.pending.push((module, id, *descriptor));
    }
}

#[derive(Default)]
pub struct Objects {
    pub written: Vec<(DescriptorId, bool)>,
}

impl ObjectWriter for Objects {
    fn serialize(&mut self, id: DescriptorId, _descriptor: &Descriptor, multi_object: bool) {
        self.written.push((id, multi_object));
    }
}

/// A whole compilation session: pool, services and generator.
pub struct Session {
    pub interner: StringInterner,
    pub pool: Pool,
    pub arena: TypeExprArena,
    pub modules: Modules,
    pub objects: Objects,
    pub diagnostics: DiagnosticQueue,
    pub gen: TypeInfoGen,
}

impl Session {
    pub fn new() -> Self {
        Self::with_config(TypeInfoConfig::default())
    }

    pub fn with_config(config: TypeInfoConfig) -> Self {
        rtti_typeinfo::init_tracing();
        let interner = StringInterner::new();
        let mut next = 10_000;
        let runtime = RuntimeDecls::resolve(&interner, |_| {
            next += 1;
            Some(Idx::from_raw(next))
        });
        Session {
            interner,
            pool: Pool::new(),
            arena: TypeExprArena::new(),
            modules: Modules::default(),
            objects: Objects::default(),
            diagnostics: DiagnosticQueue::new(),
            gen: TypeInfoGen::new(config, runtime),
        }
    }

    pub fn scope() -> ScopeContext {
        ScopeContext::new(ModuleId::from_raw(3))
    }

    pub fn declare(&mut self, name: &str, kind: AggregateKind) -> AggregateId {
        let name = self.interner.intern(name);
        self.pool.declare_aggregate(Aggregate::new(name, kind))
    }

    pub fn declare_instance(&mut self, name: &str, kind: AggregateKind, instance: u32) -> AggregateId {
        let name = self.interner.intern(name);
        self.pool
            .declare_aggregate(Aggregate::new(name, kind).instantiated_by(InstanceId::from_raw(instance)))
    }

    pub fn ensure(&mut self, ty: Idx, scope: Option<&ScopeContext>) -> Result<DescriptorId, ErrorGuaranteed> {
        let request = Request::canonical(Location::from_span(Span::DUMMY), ty);
        let mut host = Host {
            interner: &self.interner,
            modules: &mut self.modules,
            objects: &mut self.objects,
            diagnostics: &mut self.diagnostics,
        };
        self.gen.ensure_descriptor(&mut self.pool, &mut host, &request, scope)
    }

    pub fn ensure_written(
        &mut self,
        expr: TypeExprId,
        scope: Option<&ScopeContext>,
    ) -> Result<DescriptorId, ErrorGuaranteed> {
        let request = Request::written(&self.arena, expr);
        let mut host = Host {
            interner: &self.interner,
            modules: &mut self.modules,
            objects: &mut self.objects,
            diagnostics: &mut self.diagnostics,
        };
        self.gen.ensure_descriptor(&mut self.pool, &mut host, &request, scope)
    }

    /// How many times `id` was handed to a module or the object writer.
    pub fn emit_count(&self, id: DescriptorId) -> usize {
        self.modules.pending.iter().filter(|(_, p, _)| *p == id).count()
            + self.objects.written.iter().filter(|(w, _)| *w == id).count()
    }

    pub fn render(&self, ty: Idx) -> String {
        self.pool.display(ty, &self.interner)
    }
}
