// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::any::Any;
use std::backtrace::BacktraceStatus;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use crate::backtrace::Backtrace;
use crate::builder::is_string_error;
use crate::source::Source;
use crate::tag::Tag;
use crate::{FailureBuilder, Location, Report};

const DEFAULT_MESSAGE: &str = "unspecified failure";

/// Failure data, boxed to keep `Failure` one pointer wide.
#[derive(Debug, Clone)]
struct Inner {
    message: Option<Cow<'static, str>>,
    source: Source,
    tag: Option<Tag>,
    backtrace: Backtrace,
    location: Location,
}

/// Describes something that went wrong.
///
/// A `Failure` holds a message, an optional cause (any error, including another `Failure`),
/// an optional tag for programmatic matching, an optional backtrace and the location where it
/// was created. It is immutable once built: adding context produces a new `Failure` that wraps
/// the old one as its cause.
///
/// The internal data is boxed so that [`Outcome::Failure`](crate::Outcome::Failure) does not
/// inflate the carrier beyond a pointer. Clones share the cause, tag and backtrace.
///
/// # Examples
///
/// ```rust
/// use verdict::Failure;
///
/// let failure = Failure::new("x must be positive");
/// assert_eq!(failure.to_string(), "x must be positive");
/// assert!(failure.report().to_string().starts_with("Error: x must be positive"));
/// ```
#[derive(Clone)]
pub struct Failure {
    data: Box<Inner>,
}

impl Failure {
    pub(crate) fn from_parts(
        message: Option<Cow<'static, str>>,
        source: Source,
        tag: Option<Tag>,
        backtrace: Backtrace,
        location: Location,
    ) -> Self {
        Self {
            data: Box::new(Inner {
                message,
                source,
                tag,
                backtrace,
                location,
            }),
        }
    }

    /// Creates a failure from a message. A backtrace is captured per [`BacktracePolicy::Auto`](crate::BacktracePolicy::Auto).
    #[must_use]
    #[track_caller]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self::builder().message(message).build()
    }

    /// Creates a failure that stands in for `error`.
    ///
    /// String types become the message. A `Failure` passed through a box is returned as is,
    /// so its tag and location survive. Any other error becomes transparent: it provides the
    /// message, and its sources form the cause chain.
    #[must_use]
    #[track_caller]
    pub fn from_error<E>(error: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        let is_message = is_string_error(&error);
        let error: Box<dyn StdError + Send + Sync + 'static> = error.into();
        if is_message {
            return Self::new(error.to_string());
        }

        match error.downcast::<Self>() {
            Ok(failure) => *failure,
            Err(other) => Self::builder().cause(other).build(),
        }
    }

    /// Creates a failure with `message` that was raised in response to `cause`.
    #[must_use]
    #[track_caller]
    pub fn caused_by<E>(message: impl Into<Cow<'static, str>>, cause: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Self::builder().message(message).cause(cause).build()
    }

    /// Creates a new [`FailureBuilder`].
    #[must_use]
    pub fn builder() -> FailureBuilder {
        FailureBuilder::new()
    }

    /// Wraps this failure as the cause of a new failure carrying `message`.
    #[must_use]
    #[track_caller]
    pub fn wrap(self, message: impl Into<Cow<'static, str>>) -> Self {
        Self::caused_by(message, self)
    }

    /// Returns this failure with `tag` attached, replacing any previous tag.
    #[must_use]
    pub fn with_tag<K>(mut self, tag: K) -> Self
    where
        K: Any + Send + Sync,
    {
        self.data.tag = Some(Tag::new(tag));
        self
    }

    /// Returns the message of this failure, without causes or backtrace.
    #[must_use]
    pub fn message(&self) -> Cow<'_, str> {
        match &self.data.message {
            Some(message) => Cow::Borrowed(&**message),
            None => Cow::Owned(self.to_string()),
        }
    }

    /// Returns the cause of this failure, if any.
    #[must_use]
    pub fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.data.source.next()
    }

    /// Returns an iterator over this failure followed by every cause, outermost first.
    #[must_use]
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// Returns the innermost cause, or this failure if it has no cause.
    #[must_use]
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        self.chain().last().unwrap_or(self)
    }

    /// Finds the first cause of type `E`. Only the cause chain is searched, not this failure.
    #[must_use]
    pub fn find_source<E: StdError + 'static>(&self) -> Option<&E> {
        self.chain().skip(1).find_map(|error| error.downcast_ref::<E>())
    }

    /// Returns the tag of this failure if it is of type `K`.
    #[must_use]
    pub fn tag<K: Any>(&self) -> Option<&K> {
        if let Some(tag) = self.data.tag.as_ref().and_then(Tag::downcast_ref::<K>) {
            return Some(tag);
        }

        // a transparent failure speaks for the one it wraps
        match &self.data.source {
            Source::Transparent(error) => error.downcast_ref::<Self>().and_then(Self::tag::<K>),
            _ => None,
        }
    }

    /// Returns `true` if this failure is tagged with a value of type `K`.
    #[must_use]
    pub fn has_tag<K: Any>(&self) -> bool {
        self.tag::<K>().is_some()
    }

    /// Returns the type name of this failure's tag, if it has one.
    ///
    /// Like [`tag`](Self::tag), this looks through a transparent wrapper.
    #[must_use]
    pub fn tag_name(&self) -> Option<&'static str> {
        if let Some(tag) = &self.data.tag {
            return Some(tag.type_name());
        }

        match &self.data.source {
            Source::Transparent(error) => error.downcast_ref::<Self>().and_then(Self::tag_name),
            _ => None,
        }
    }

    /// Finds the first tag of type `K` on this failure or on any `Failure` in its cause chain.
    ///
    /// Unknown tag types and foreign errors in the chain are skipped; the result is `None` when
    /// nothing matches.
    #[must_use]
    pub fn find_tag<K: Any>(&self) -> Option<&K> {
        self.chain()
            .filter_map(|error| error.downcast_ref::<Self>())
            .find_map(Self::tag::<K>)
    }

    /// Returns where this failure was created.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.data.location
    }

    /// Returns whether a backtrace was captured.
    #[must_use]
    pub fn has_backtrace(&self) -> bool {
        matches!(self.data.backtrace.status(), BacktraceStatus::Captured)
    }

    /// Returns the backtrace, which is disabled if none was captured.
    #[must_use]
    pub fn backtrace(&self) -> &std::backtrace::Backtrace {
        self.data.backtrace.as_backtrace()
    }

    /// Returns a display adapter rendering the message, the cause chain and the backtrace.
    #[must_use]
    pub fn report(&self) -> Report<'_> {
        Report::new(self)
    }

    /// Emits this failure as a single `ERROR` event named `verdict.failure`.
    pub fn log(&self) {
        tracing::event!(
            name: "verdict.failure",
            tracing::Level::ERROR,
            failure.message = %self,
            failure.tag = self.tag_name().unwrap_or_default(),
            failure.chain_len = self.chain().count(),
            failure.location = %self.location(),
            "{}",
            self.report(),
        );
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("message", &self.data.message)
            .field("source", &self.data.source)
            .field("tag", &self.data.tag)
            .field("location", &self.data.location)
            .field("backtrace", &self.data.backtrace)
            .finish()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.data.message, &self.data.source) {
            (Some(message), _) => f.write_str(message),
            (None, Source::Transparent(error) | Source::Cause(error)) => fmt::Display::fmt(error, f),
            (None, Source::None) => f.write_str(DEFAULT_MESSAGE),
        }
    }
}

impl StdError for Failure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Self::source(self)
    }
}

impl From<&'static str> for Failure {
    #[track_caller]
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Failure {
    #[track_caller]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Iterator over a failure and its causes, outermost first.
///
/// Created by [`Failure::chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}
