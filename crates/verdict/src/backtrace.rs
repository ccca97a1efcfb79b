// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! A lightweight, clonable wrapper around [`Backtrace`](StdBacktrace).

use std::backtrace::{Backtrace as StdBacktrace, BacktraceStatus};
use std::sync::Arc;

use crate::BacktracePolicy;

/// A clonable backtrace snapshot.
///
/// Captured backtraces are shared through an [`Arc`] so cloning a failure never walks the
/// stack again. Disabled and unsupported backtraces need no allocation.
#[derive(Debug, Clone)]
pub(crate) enum Backtrace {
    Captured(Arc<StdBacktrace>),
    Disabled,
    Unsupported,
}

impl Backtrace {
    #[cfg_attr(coverage_nightly, coverage(off))] // we can't create Unsupported backtraces in tests
    #[cfg_attr(test, mutants::skip)] // we can't create Unsupported backtraces in tests
    fn from_backtrace(bt: StdBacktrace) -> Self {
        match bt.status() {
            BacktraceStatus::Disabled => Self::Disabled,
            BacktraceStatus::Unsupported => Self::Unsupported,
            _ => Self::Captured(Arc::new(bt)),
        }
    }

    /// Takes a snapshot of the current stack according to `policy`.
    pub(crate) fn with_policy(policy: BacktracePolicy) -> Self {
        match policy {
            BacktracePolicy::Auto => Self::from_backtrace(StdBacktrace::capture()),
            BacktracePolicy::Forced => Self::from_backtrace(StdBacktrace::force_capture()),
            BacktracePolicy::Never => Self::Disabled,
        }
    }

    pub(crate) fn status(&self) -> BacktraceStatus {
        match self {
            Self::Captured(bt) => bt.status(),
            Self::Disabled => BacktraceStatus::Disabled,
            Self::Unsupported => BacktraceStatus::Unsupported,
        }
    }

    pub(crate) fn as_backtrace(&self) -> &StdBacktrace {
        static DISABLED_BACKTRACE: StdBacktrace = StdBacktrace::disabled();
        match self {
            Self::Captured(bt) => bt.as_ref(),
            _ => &DISABLED_BACKTRACE,
        }
    }
}
