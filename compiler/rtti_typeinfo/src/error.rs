//! Fatal descriptor-generation errors.
//!
//! Error code range: E7xxx. Both conditions stop the compilation; the
//! coordinator reports them through the diagnostic queue and returns the
//! resulting `ErrorGuaranteed`.

use rtti_diagnostic::{Diagnostic, ErrorCode};
use rtti_ir::Span;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TypeInfoError {
    /// Runtime type information was requested in a build that disables it,
    /// outside compile-time evaluation.
    #[error("`TypeInfo` for `{ty}` cannot be used when runtime type information is disabled")]
    Disabled {
        span: Span,
        /// Rendered type the descriptor was requested for.
        ty: String,
        /// The construct that needed the descriptor (`typeid`, `new`, ...).
        origin: Option<String>,
        /// Instantiation sites leading to the request, innermost first.
        trace: Vec<Span>,
    },

    /// The standard environment does not declare the descriptor base class.
    #[error("`object.TypeInfo` could not be found, but is implicitly used")]
    MissingRuntime { span: Span },
}

impl TypeInfoError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TypeInfoError::Disabled { .. } => ErrorCode::E7001,
            TypeInfoError::MissingRuntime { .. } => ErrorCode::E7002,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            TypeInfoError::Disabled { span, .. } | TypeInfoError::MissingRuntime { span } => *span,
        }
    }

    /// Convert to a diagnostic for the queue.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            TypeInfoError::Disabled {
                span, origin, trace, ..
            } => {
                let label = match origin {
                    Some(origin) => format!("`{origin}` requires runtime type information"),
                    None => "runtime type information required here".to_string(),
                };
                // Synthesized instantiations have no site worth pointing at.
                let diag = trace
                    .iter()
                    .filter(|site| !site.is_dummy())
                    .fold(diag.with_label(*span, label), |d, &site| {
                        d.with_secondary_label(site, "instantiated from here")
                    });
                diag.with_note("only compile-time evaluation may use `TypeInfo` in this build")
            }
            TypeInfoError::MissingRuntime { span } => diag
                .with_label(*span, "type information needed here")
                .with_note("the runtime library's `object` module is missing or malformed"),
        }
    }
}
