//! Shared test utilities: recording collaborators and a small type
//! fixture. Only compiled in test builds.

use rustc_hash::{FxHashMap, FxHashSet};

use rtti_diagnostic::{DiagnosticQueue, ErrorGuaranteed};
use rtti_ir::{Span, StringInterner};
use rtti_types::{Aggregate, AggregateId, AggregateKind, Idx, InstanceId, Pool};

use crate::services::{Instantiations, ModuleId, ModuleOwnership, ObjectWriter, ScopeContext};
use crate::{
    Descriptor, DescriptorId, Host, Location, Request, RuntimeDecls, TypeInfoConfig, TypeInfoGen,
};

/// Instantiation state keyed by instance.
#[derive(Default)]
pub(crate) struct MockInstantiations {
    pub codegen: FxHashSet<InstanceId>,
    pub requiring: FxHashMap<InstanceId, ModuleId>,
    pub requested: FxHashSet<AggregateId>,
}

impl Instantiations for MockInstantiations {
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

/// Records every pending registration.
pub(crate) struct RecordingModules {
    pub furthest: ModuleId,
    pub pending: Vec<(ModuleId, DescriptorId)>,
}

impl Default for RecordingModules {
    fn default() -> Self {
        RecordingModules {
            furthest: ModuleId::from_raw(0),
            pending: Vec::new(),
        }
    }
}

impl ModuleOwnership for RecordingModules {
    fn furthest_importing_module(&self, _scope: &ScopeContext) -> ModuleId {
        self.furthest
    }

    fn register_pending(&mut self, module: ModuleId, id: DescriptorId, _descriptor: &Descriptor) {
        self.pending.push((module, id));
    }
}

/// Records every serialized descriptor with its multi-object flag.
#[derive(Default)]
pub(crate) struct RecordingWriter {
    pub written: Vec<(DescriptorId, bool)>,
}

impl ObjectWriter for RecordingWriter {
    fn serialize(&mut self, id: DescriptorId, _descriptor: &Descriptor, multi_object: bool) {
        self.written.push((id, multi_object));
    }
}

/// Runtime declarations with every class present.
pub(crate) fn full_runtime() -> RuntimeDecls {
    let interner = StringInterner::new();
    let mut next = 1000;
    RuntimeDecls::resolve(&interner, |_| {
        next += 1;
        Some(Idx::from_raw(next))
    })
}

/// Everything one descriptor request needs.
pub(crate) struct Fixture {
    pub interner: StringInterner,
    pub pool: Pool,
    pub modules: RecordingModules,
    pub writer: RecordingWriter,
    pub diagnostics: DiagnosticQueue,
}

impl Fixture {
    pub fn new() -> Self {
        Fixture {
            interner: StringInterner::new(),
            pool: Pool::new(),
            modules: RecordingModules::default(),
            writer: RecordingWriter::default(),
            diagnostics: DiagnosticQueue::new(),
        }
    }

    pub fn declare(&mut self, name: &str, kind: AggregateKind) -> AggregateId {
        let name = self.interner.intern(name);
        self.pool.declare_aggregate(Aggregate::new(name, kind))
    }

    pub fn declare_instance(&mut self, name: &str, instance: u32) -> AggregateId {
        let name = self.interner.intern(name);
        self.pool.declare_aggregate(
            Aggregate::new(name, AggregateKind::Struct)
                .instantiated_by(InstanceId::from_raw(instance)),
        )
    }

    /// Borrow the pool and a host over the recording services.
    pub fn split(&mut self) -> (&mut Pool, Host<'_>) {
        let host = Host {
            interner: &self.interner,
            modules: &mut self.modules,
            objects: &mut self.writer,
            diagnostics: &mut self.diagnostics,
        };
        (&mut self.pool, host)
    }

    pub fn ensure(
        &mut self,
        gen: &mut TypeInfoGen,
        ty: Idx,
        scope: Option<&ScopeContext>,
    ) -> Result<DescriptorId, ErrorGuaranteed> {
        let request = Request::canonical(Location::from_span(Span::new(0, 1)), ty);
        let (pool, mut host) = self.split();
        gen.ensure_descriptor(pool, &mut host, &request, scope)
    }

    pub fn descriptor_type(
        &mut self,
        gen: &mut TypeInfoGen,
        ty: Idx,
        scope: Option<&ScopeContext>,
    ) -> Result<Idx, ErrorGuaranteed> {
        let request = Request::canonical(Location::from_span(Span::new(0, 1)), ty);
        let (pool, mut host) = self.split();
        gen.descriptor_type(pool, &mut host, &request, scope)
    }
}

pub(crate) fn generator() -> TypeInfoGen {
    TypeInfoGen::new(TypeInfoConfig::default(), full_runtime())
}
