//! Runtime type-descriptor generation.
//!
//! Given a type, produce at most one runtime descriptor for it and decide
//! who emits that descriptor. Three constraints shape the design:
//!
//! - **Uniqueness**: one descriptor per canonical type, shared by every
//!   request. Descriptors live in a [`DescriptorTable`] keyed by pool
//!   [`Idx`](rtti_types::Idx); as-written type expressions alias the
//!   canonical entry.
//! - **Builtin suppression**: descriptors the runtime library already
//!   ships ([`is_builtin_covered`]) are never emitted.
//! - **Speculative safety**: [`is_speculative`] tells callers when a type
//!   reaches a template instance that will never be emitted.
//!
//! Qualified types get wrapper descriptors ([`DescriptorKind::Shared`],
//! `Const`, `Immutable`, `Wild`) around the descriptor of the unqualified
//! type, so structural information is never duplicated.
//!
//! # Usage
//!
//! ```text
//! let mut gen = TypeInfoGen::new(config, RuntimeDecls::resolve(&interner, lookup));
//! let id = gen.ensure_descriptor(&mut pool, &mut host, &request, Some(&scope))?;
//! ```
//!
//! # Tracing
//!
//! Enable with `RUST_LOG=rtti_typeinfo=debug` after calling
//! [`init_tracing`].

mod builtin;
mod classify;
mod config;
mod error;
mod generate;
mod kind;
mod request;
pub mod services;
mod speculative;
mod stats;
mod table;

#[cfg(test)]
mod test_helpers;

use std::sync::Once;

pub use builtin::is_builtin_covered;
pub use classify::{classify, wrapper_for, Wrapper};
pub use config::{RuntimeDecls, TypeInfoConfig, BASE_DECL_NAME};
pub use error::TypeInfoError;
pub use generate::{Host, TypeInfoGen};
pub use kind::{Descriptor, DescriptorId, DescriptorKind, Emission, RuntimeClass};
pub use request::{Location, Request, TypeRef};
pub use services::{Instantiations, ModuleId, ModuleOwnership, ObjectWriter, ScopeContext};
pub use speculative::is_speculative;
pub use stats::TypeInfoStats;
pub use table::DescriptorTable;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
