//! Diagnostics for runtime type-descriptor generation.
//!
//! Descriptor generation has exactly two fatal conditions. Both are turned
//! into a [`Diagnostic`] and pushed into a [`DiagnosticQueue`]; the
//! [`ErrorGuaranteed`] the queue hands back is what the coordinator returns
//! to unwind the compilation.
//!
//! ```text
//! let guarantee = queue.emit_error(err.to_diagnostic(), line, column);
//! return Err(guarantee);
//! ```

mod diagnostic;
mod error_code;
mod guarantee;
pub mod queue;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::DiagnosticQueue;
