//! Collaborators consulted during descriptor generation.
//!
//! Descriptor generation only *queries* instantiation state and *hands off*
//! finished descriptors; module bookkeeping and object writing belong to
//! the driver. Each concern is a trait so the driver can supply its real
//! services and tests can supply recording mocks.

use rtti_ir::Span;
use rtti_types::{AggregateId, InstanceId};

use crate::{Descriptor, DescriptorId};

/// A translation unit of the current compilation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct ModuleId(u32);

impl ModuleId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        ModuleId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// The semantic-analysis scope a descriptor request comes from.
///
/// Requests made while writing object files have no scope.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScopeContext {
    /// Module being analyzed.
    pub module: ModuleId,
    /// Evaluating for compile-time function execution only.
    pub ctfe: bool,
    /// Spans of the template instantiations that led to this scope,
    /// innermost first.
    pub instantiation_trace: Vec<Span>,
}

impl ScopeContext {
    pub fn new(module: ModuleId) -> Self {
        ScopeContext {
            module,
            ctfe: false,
            instantiation_trace: Vec::new(),
        }
    }

    #[must_use]
    pub fn in_ctfe(mut self) -> Self {
        self.ctfe = true;
        self
    }

    #[must_use]
    pub fn instantiated_at(mut self, span: Span) -> Self {
        self.instantiation_trace.push(span);
        self
    }
}

/// Generic instantiation tracking.
pub trait Instantiations {
    /// Check if the instantiation will have code generated for it.
    fn needs_codegen(&self, instance: InstanceId) -> bool;

    /// The non-speculative module that first required the instantiation.
    fn requiring_module(&self, instance: InstanceId) -> Option<ModuleId>;

    /// Check if some other part of the compiler explicitly asked for the
    /// aggregate's descriptor.
    fn descriptor_requested(&self, aggregate: AggregateId) -> bool;
}

/// Module ownership of emitted declarations.
pub trait ModuleOwnership {
    /// The importing module furthest from the scope's module. Descriptors
    /// are owned there so that one copy sits with broadly reachable code.
    fn furthest_importing_module(&self, scope: &ScopeContext) -> ModuleId;

    /// Queue a descriptor for serialization with `module`'s members.
    fn register_pending(&mut self, module: ModuleId, id: DescriptorId, descriptor: &Descriptor);
}

/// Object-file writer used during the standalone object-emission pass.
pub trait ObjectWriter {
    /// Write the descriptor declaration now. `multi_object` requests one
    /// object file per declaration.
    fn serialize(&mut self, id: DescriptorId, descriptor: &Descriptor, multi_object: bool);
}
