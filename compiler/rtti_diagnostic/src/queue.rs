//! Diagnostic queue for collecting and sorting diagnostics.
//!
//! Descriptor requests can arrive from anywhere in a module, so the queue
//! keeps them in emission order and sorts by position on flush.

use crate::{Diagnostic, ErrorGuaranteed};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct QueuedDiagnostic {
    diagnostic: Diagnostic,
    line: u32,
    column: u32,
}

/// Queue for collecting diagnostics.
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// let guarantee = queue.emit_error(diagnostic, line, column);
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<QueuedDiagnostic>,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit an error diagnostic and get proof it was emitted.
    pub fn emit_error(&mut self, diag: Diagnostic, line: u32, column: u32) -> ErrorGuaranteed {
        self.diagnostics.push(QueuedDiagnostic {
            diagnostic: diag,
            line,
            column,
        });
        ErrorGuaranteed::new()
    }

    /// Number of errors waiting to be flushed.
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Sort diagnostics by position and return them, clearing the queue.
    ///
    /// The sort is stable, so errors at one position keep emission order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.sort_by_key(|d| (d.line, d.column));
        self.diagnostics.drain(..).map(|d| d.diagnostic).collect()
    }
}
