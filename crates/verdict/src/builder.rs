// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::any::Any;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::sync::Arc;

use crate::backtrace::Backtrace;
use crate::source::Source;
use crate::tag::Tag;
use crate::{Failure, Location};

/// Policy for capturing backtraces in failures.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BacktracePolicy {
    /// Capture only when the `RUST_BACKTRACE` or `RUST_LIB_BACKTRACE` environment variable asks for it.
    #[default]
    Auto,
    /// Capture even if the environment variables are not set or set to 0.
    Forced,
    /// Never capture, regardless of the environment variables.
    Never,
}

/// Builder for [`Failure`] instances that need more than a message and a cause.
///
/// # Examples
///
/// ```rust
/// use verdict::{BacktracePolicy, Failure};
///
/// #[derive(Debug)]
/// struct RetryLater;
///
/// let failure = Failure::builder()
///     .message("service unavailable")
///     .cause(std::io::Error::other("connection reset"))
///     .tag(RetryLater)
///     .backtrace_policy(BacktracePolicy::Never)
///     .build();
///
/// assert_eq!(failure.to_string(), "service unavailable");
/// assert!(failure.has_tag::<RetryLater>());
/// assert!(!failure.has_backtrace());
/// ```
#[derive(Debug)]
pub struct FailureBuilder {
    backtrace_policy: BacktracePolicy,
    message: Option<Cow<'static, str>>,
    cause: Option<Arc<dyn StdError + Send + Sync>>,
    tag: Option<Tag>,
}

impl Default for FailureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FailureBuilder {
    /// Creates a new [`FailureBuilder`] with no message, no cause and the [`Auto`](BacktracePolicy::Auto) policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            backtrace_policy: BacktracePolicy::Auto,
            message: None,
            cause: None,
            tag: None,
        }
    }

    /// Sets the backtrace capture policy.
    #[must_use]
    pub fn backtrace_policy(mut self, policy: BacktracePolicy) -> Self {
        self.backtrace_policy = policy;
        self
    }

    /// Sets the human-readable message.
    #[must_use]
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the cause this failure was raised in response to.
    #[must_use]
    pub fn cause<E>(mut self, cause: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        self.cause = Some(cause.into().into());
        self
    }

    /// Attaches a tag for programmatic matching. A later call replaces the earlier tag.
    #[must_use]
    pub fn tag<K>(mut self, tag: K) -> Self
    where
        K: Any + Send + Sync,
    {
        self.tag = Some(Tag::new(tag));
        self
    }

    /// Builds the [`Failure`], recording the caller as its creation location.
    ///
    /// Without a message the cause becomes transparent: it provides the message, and its own
    /// source continues the chain.
    #[must_use]
    #[track_caller]
    pub fn build(self) -> Failure {
        let source = match (&self.message, self.cause) {
            (_, None) => Source::None,
            (Some(_), Some(cause)) => Source::Cause(cause),
            (None, Some(cause)) => Source::Transparent(cause),
        };

        Failure::from_parts(
            self.message,
            source,
            self.tag,
            Backtrace::with_policy(self.backtrace_policy),
            Location::caller(),
        )
    }
}

const STR_TYPE_IDS: [typeid::ConstTypeId; 3] = [
    typeid::ConstTypeId::of::<&str>(),
    typeid::ConstTypeId::of::<String>(),
    typeid::ConstTypeId::of::<Cow<'_, str>>(),
];

/// Returns `true` when `T` is one of the string types that should become a message rather
/// than a cause.
pub(crate) fn is_string_error<T>(_: &T) -> bool {
    let typeid_of_t = typeid::of::<T>();
    STR_TYPE_IDS.iter().any(|&id| id == typeid_of_t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_string_error_test() {
        assert!(is_string_error(&"a string slice"));
        assert!(is_string_error(&String::from("a string")));
        assert!(is_string_error(&Cow::Borrowed("a string slice")));
        assert!(is_string_error(&Cow::<'static, str>::Owned(String::from("a string"))));
        assert!(!is_string_error(&std::io::Error::other("an io error")));
    }

    #[test]
    fn message_only() {
        let failure = FailureBuilder::new().message("boom").backtrace_policy(BacktracePolicy::Never).build();
        assert_eq!(failure.to_string(), "boom");
        assert!(failure.source().is_none());
        assert!(!failure.has_backtrace());
    }

    #[test]
    fn message_and_cause() {
        let failure = Failure::builder()
            .message("outer")
            .cause(std::io::Error::other("inner"))
            .build();
        assert_eq!(failure.to_string(), "outer");
        assert_eq!(failure.source().unwrap().to_string(), "inner");
    }

    #[test]
    fn cause_without_message_is_transparent() {
        let failure = Failure::builder().cause(std::io::Error::other("inner")).build();
        assert_eq!(failure.to_string(), "inner");
        assert!(failure.source().is_none());
    }

    #[test]
    fn empty_builder_uses_default_message() {
        let failure = FailureBuilder::default().build();
        assert_eq!(failure.to_string(), "unspecified failure");
    }

    #[test]
    fn later_tag_replaces_earlier() {
        let failure = Failure::builder().message("m").tag(1_u8).tag("second").build();
        assert!(!failure.has_tag::<u8>());
        assert_eq!(failure.tag::<&str>(), Some(&"second"));
    }

    #[test]
    fn build_records_caller() {
        let failure = Failure::builder().message("here").build();
        assert!(failure.location().file.ends_with("builder.rs"));
    }
}
