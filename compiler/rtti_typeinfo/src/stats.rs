//! Descriptor generation counters.

use std::fmt;

/// Counters maintained by [`TypeInfoGen`](crate::TypeInfoGen).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct TypeInfoStats {
    /// Descriptors created, wrappers included.
    pub created: usize,
    /// Qualifier wrappers among `created`.
    pub wrappers: usize,
    /// Descriptors left to the runtime library.
    pub builtin: usize,
    /// Descriptors queued on an owning module.
    pub registered: usize,
    /// Descriptors serialized directly.
    pub serialized: usize,
    /// Requests answered from the table.
    pub cache_hits: usize,
}

impl TypeInfoStats {
    /// Descriptors this compilation emits.
    pub fn emitted(&self) -> usize {
        self.registered + self.serialized
    }
}

impl fmt::Display for TypeInfoStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} descriptors ({} wrappers, {} builtin, {} registered, {} serialized), {} cache hits",
            self.created,
            self.wrappers,
            self.builtin,
            self.registered,
            self.serialized,
            self.cache_hits
        )
    }
}
