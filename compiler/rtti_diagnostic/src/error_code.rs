//! Error codes for descriptor-generation diagnostics.

use std::fmt;

/// Error codes in the E7xxx (runtime type information) range.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Runtime type information requested while it is disabled
    E7001,
    /// Runtime descriptor declaration missing from the standard environment
    E7002,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E7001 => "E7001",
            ErrorCode::E7002 => "E7002",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
