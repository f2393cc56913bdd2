//! Capture-time source locations for failure construction sites.

use serde::Serialize;
use std::fmt;
use std::panic::Location;

/// The source file, line, and column where a failure was constructed.
///
/// Captured once via [`SourceLocation::capture`] at the moment the failure
/// object is created and never mutated afterward. The capture rides on
/// `#[track_caller]`, so a constructor annotated with it reports the call
/// site of its own caller, not the constructor body.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
    column: u32,
}

impl SourceLocation {
    /// Captures the caller's source location.
    #[track_caller]
    pub fn capture() -> Self {
        let loc = Location::caller();
        Self {
            file: loc.file(),
            line: loc.line(),
            column: loc.column(),
        }
    }

    /// The source file path as the compiler recorded it.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// The 1-based source line.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The 1-based source column.
    pub fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
