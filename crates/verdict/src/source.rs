// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;
use std::sync::Arc;

/// What a failure wraps: nothing, an error standing in for the failure itself, or a cause.
#[derive(Debug, Clone)]
pub(crate) enum Source {
    /// No wrapped error (the failure carries its own message)
    None,
    /// An error that provides the failure's message and whose own source continues the chain
    Transparent(Arc<dyn StdError + Send + Sync>),
    /// A wrapped cause, one link further down the chain
    Cause(Arc<dyn StdError + Send + Sync>),
}

impl Source {
    /// Returns the next link of the cause chain.
    pub(crate) fn next(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::None => None,
            Self::Transparent(error) => error.source(),
            Self::Cause(error) => Some(error.as_ref()),
        }
    }
}
