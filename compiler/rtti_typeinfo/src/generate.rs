//! The emission coordinator.
//!
//! [`TypeInfoGen::ensure_descriptor`] is the only way descriptors come
//! into existence. It checks the two global preconditions, returns the
//! cached descriptor when there is one, and otherwise creates it: a
//! qualified type becomes a wrapper around the descriptor of its
//! unqualified form (created first if needed), anything else is
//! classified. New descriptors the runtime library does not already
//! supply are routed to the owning module during semantic analysis, or
//! straight to the object writer during the object-emission pass.

use rtti_diagnostic::{DiagnosticQueue, ErrorGuaranteed};
use rtti_ir::StringInterner;
use rtti_types::{Idx, Pool, TypeExprId};

use crate::builtin::is_builtin_covered;
use crate::classify::{classify, wrapper_for};
use crate::services::{ModuleOwnership, ObjectWriter, ScopeContext};
use crate::{
    Descriptor, DescriptorId, DescriptorTable, Emission, Location, Request, RuntimeDecls,
    TypeInfoConfig, TypeInfoError, TypeInfoStats,
};

/// Driver-owned services a request reports into.
pub struct Host<'a> {
    pub interner: &'a StringInterner,
    pub modules: &'a mut dyn ModuleOwnership,
    pub objects: &'a mut dyn ObjectWriter,
    pub diagnostics: &'a mut DiagnosticQueue,
}

/// Descriptor generation state for one compilation session.
pub struct TypeInfoGen {
    config: TypeInfoConfig,
    runtime: RuntimeDecls,
    table: DescriptorTable,
    stats: TypeInfoStats,
}

impl TypeInfoGen {
    pub fn new(config: TypeInfoConfig, runtime: RuntimeDecls) -> Self {
        TypeInfoGen {
            config,
            runtime,
            table: DescriptorTable::new(),
            stats: TypeInfoStats::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &TypeInfoConfig {
        &self.config
    }

    #[inline]
    pub fn runtime(&self) -> &RuntimeDecls {
        &self.runtime
    }

    #[inline]
    pub fn table(&self) -> &DescriptorTable {
        &self.table
    }

    #[inline]
    pub fn stats(&self) -> &TypeInfoStats {
        &self.stats
    }

    /// Descriptor of a canonical type, if one was generated.
    pub fn descriptor_of(&self, ty: Idx) -> Option<DescriptorId> {
        self.table.get(ty)
    }

    /// Descriptor an as-written expression was resolved to.
    pub fn descriptor_of_expr(&self, expr: TypeExprId) -> Option<DescriptorId> {
        self.table.get_alias(expr)
    }

    /// Finish the session, handing the table to the driver.
    pub fn finish(self) -> (DescriptorTable, TypeInfoStats) {
        tracing::debug!(stats = %self.stats, "descriptor generation finished");
        (self.table, self.stats)
    }

    /// Make sure the requested type has a descriptor.
    ///
    /// Idempotent: a second request for the same canonical type returns
    /// the cached descriptor without registering anything. `scope` is
    /// `None` during the object-emission pass.
    ///
    /// # Errors
    ///
    /// Reports a diagnostic and returns its guarantee when runtime type
    /// information is disabled and the request is not from compile-time
    /// evaluation, or when the runtime's base descriptor class is missing.
    /// Either way the compilation must stop.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(line = request.loc.line, column = request.loc.column)
    )]
    pub fn ensure_descriptor(
        &mut self,
        pool: &mut Pool,
        host: &mut Host<'_>,
        request: &Request<'_>,
        scope: Option<&ScopeContext>,
    ) -> Result<DescriptorId, ErrorGuaranteed> {
        let ty = request.ty.canonicalize(pool);
        self.check_allowed(pool, host, request, ty, scope)?;

        let id = if let Some(id) = self.table.get(ty) {
            self.stats.cache_hits += 1;
            tracing::trace!(?ty, ?id, "descriptor cache hit");
            id
        } else {
            self.create(pool, host, ty, scope)
        };

        if let Some(expr) = request.ty.expr() {
            self.table.alias(expr, id);
        }
        Ok(id)
    }

    /// The runtime class the requested type's descriptor is an instance of.
    ///
    /// Ensures the descriptor first. Kinds whose class the runtime does
    /// not declare are typed as the base class.
    ///
    /// # Errors
    ///
    /// The same fatal conditions as [`Self::ensure_descriptor`].
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(line = request.loc.line, column = request.loc.column)
    )]
    pub fn descriptor_type(
        &mut self,
        pool: &mut Pool,
        host: &mut Host<'_>,
        request: &Request<'_>,
        scope: Option<&ScopeContext>,
    ) -> Result<Idx, ErrorGuaranteed> {
        let id = self.ensure_descriptor(pool, host, request, scope)?;
        let class = self.table.descriptor(id).kind.runtime_class();
        match self.runtime.class_or_base(class) {
            Some(ty) => Ok(ty),
            None => Err(report(
                host,
                request.loc,
                &TypeInfoError::MissingRuntime {
                    span: request.loc.span,
                },
            )),
        }
    }

    fn check_allowed(
        &self,
        pool: &Pool,
        host: &mut Host<'_>,
        request: &Request<'_>,
        ty: Idx,
        scope: Option<&ScopeContext>,
    ) -> Result<(), ErrorGuaranteed> {
        let ctfe = scope.is_some_and(|s| s.ctfe);
        if !self.config.use_type_info && !ctfe {
            let err = TypeInfoError::Disabled {
                span: request.loc.span,
                ty: pool.display(ty, host.interner),
                origin: request
                    .origin
                    .map(|name| host.interner.lookup(name).to_string()),
                trace: scope
                    .map(|s| s.instantiation_trace.clone())
                    .unwrap_or_default(),
            };
            return Err(report(host, request.loc, &err));
        }

        if self.runtime.base().is_none() {
            let err = TypeInfoError::MissingRuntime {
                span: request.loc.span,
            };
            return Err(report(host, request.loc, &err));
        }

        Ok(())
    }

    fn create(
        &mut self,
        pool: &Pool,
        host: &mut Host<'_>,
        ty: Idx,
        scope: Option<&ScopeContext>,
    ) -> DescriptorId {
        let kind = match wrapper_for(pool.mods(ty)) {
            Some(wrapper) => {
                let base = pool.unqualified(ty);
                let inner = match self.table.get(base) {
                    Some(id) => id,
                    None => self.create(pool, host, base, scope),
                };
                self.stats.wrappers += 1;
                wrapper.wrap(inner)
            }
            None => classify(pool, ty),
        };

        let emission = if is_builtin_covered(pool, ty) {
            Emission::Builtin
        } else if let Some(scope) = scope {
            Emission::Pending(host.modules.furthest_importing_module(scope))
        } else {
            Emission::Serialized
        };

        let descriptor = Descriptor {
            ty,
            kind,
            emission,
        };
        let id = self.table.publish(descriptor);
        self.stats.created += 1;
        tracing::debug!(
            ty = %pool.display(ty, host.interner),
            ?id,
            ?kind,
            ?emission,
            "created descriptor"
        );

        match emission {
            Emission::Builtin => {
                self.stats.builtin += 1;
                tracing::trace!(?id, "supplied by runtime library");
            }
            Emission::Pending(module) => {
                self.stats.registered += 1;
                host.modules.register_pending(module, id, &descriptor);
            }
            Emission::Serialized => {
                self.stats.serialized += 1;
                host.objects
                    .serialize(id, &descriptor, self.config.multi_object);
            }
        }
        id
    }
}

fn report(host: &mut Host<'_>, loc: Location, err: &TypeInfoError) -> ErrorGuaranteed {
    tracing::debug!(code = %err.code(), "fatal descriptor error");
    host.diagnostics
        .emit_error(err.to_diagnostic(), loc.line, loc.column)
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
