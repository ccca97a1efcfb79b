// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use crate::Failure;

/// Human-readable rendering of a [`Failure`].
///
/// ```text
/// Error: <message>
/// Caused by:
///     0: <first cause>
///     1: <second cause>
///
/// Backtrace:
/// <backtrace>
/// ```
///
/// The cause section is left out when there are no causes and the backtrace section is left
/// out when no backtrace was captured.
///
/// Created by [`Failure::report`].
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    failure: &'a Failure,
}

impl<'a> Report<'a> {
    pub(crate) const fn new(failure: &'a Failure) -> Self {
        Self { failure }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.failure)?;

        for (index, cause) in self.failure.chain().skip(1).enumerate() {
            if index == 0 {
                f.write_str("\nCaused by:")?;
            }
            write!(f, "\n    {index}: {cause}")?;
        }

        if self.failure.has_backtrace() {
            write!(f, "\n\nBacktrace:\n{}", self.failure.backtrace())?;
        }

        Ok(())
    }
}
