// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

/// Source location where a [`Failure`](crate::Failure) was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// File where the failure was created
    pub file: &'static str,
    /// Line number where the failure was created
    pub line: u32,
    /// Column where the failure was created
    pub column: u32,
}

impl Location {
    /// Creates a new location with file, line and column information.
    #[must_use]
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    /// Returns the location of the caller, following `#[track_caller]` frames.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self::new(location.file(), location.line(), location.column())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
