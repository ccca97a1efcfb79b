// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Test utilities for the verdict crate.
//!
//! This module is only available when the `test-util` feature is enabled.

/// Assert that a failure renders with the expected message, accounting for causes and backtraces.
///
/// The rendered [`report`](crate::Failure::report) must be exactly `Error: <expected>`, or start
/// with it followed by a cause section or a backtrace section.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "test-util")]
/// # {
/// use verdict::{Failure, assert_failure_message};
///
/// let failure = Failure::caused_by("something went wrong", std::io::Error::other("disk full"));
/// assert_failure_message!(failure, "something went wrong");
/// # }
/// ```
#[macro_export]
#[cfg_attr(coverage_nightly, coverage(off))] // coverage doesn't handle panics well
macro_rules! assert_failure_message {
    ($failure:expr, $expected:expr) => {{
        let rendered = $failure.report().to_string();
        let expected = ::std::format!("Error: {}", $expected);

        let test = move || {
            if rendered == expected {
                return;
            }
            if let Some(remainder) = rendered.strip_prefix(expected.as_str()) {
                if remainder.starts_with("\nCaused by:") || remainder.starts_with("\n\nBacktrace:\n") {
                    return;
                }
            }
            panic!("left : {expected}\nright: {rendered}");
        };
        test();
    }};
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use crate::{BacktracePolicy, Failure};

    #[test]
    fn exact_match() {
        let failure = Failure::builder().message("test message").backtrace_policy(BacktracePolicy::Never).build();
        assert_failure_message!(failure, "test message");
    }

    #[test]
    fn with_cause() {
        let failure = Failure::caused_by("outer", std::io::Error::other("inner"));
        assert_failure_message!(failure, "outer");
    }

    #[test]
    #[cfg_attr(miri, ignore)] // unsupported operation: `GetCurrentDirectoryW` not available when isolation is enabled
    fn with_backtrace() {
        let failure = Failure::builder().message("traced").backtrace_policy(BacktracePolicy::Forced).build();
        assert_failure_message!(failure, "traced");
    }

    #[test]
    #[should_panic(expected = "left : Error: expected message\nright: Error: actual message")]
    fn mismatch() {
        let failure = Failure::builder().message("actual message").backtrace_policy(BacktracePolicy::Never).build();
        assert_failure_message!(failure, "expected message");
    }

    #[test]
    #[should_panic(expected = "left : Error: prefix")]
    fn prefix_without_separator() {
        let failure = Failure::builder().message("prefix and more").backtrace_policy(BacktracePolicy::Never).build();
        assert_failure_message!(failure, "prefix");
    }
}
