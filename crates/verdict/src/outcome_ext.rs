// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::error::Error as StdError;

use crate::{Failure, Outcome};

/// Turns `Result`, `Option` and `Outcome` values into an [`Outcome`], wrapping any failure
/// with a context message.
///
/// The original error becomes the cause of the new [`Failure`], so nothing is lost from the
/// chain. The failure's location is the call site of `context` / `context_with`.
///
/// # Examples
///
/// ```rust
/// use verdict::{Outcome, OutcomeExt};
///
/// fn read_settings(path: &str) -> Outcome<String> {
///     std::fs::read_to_string(path).context(format!("failed to read {path}"))
/// }
///
/// let outcome = read_settings("/definitely/not/here.toml");
/// assert!(outcome.is_error());
/// assert!(outcome.unwrap_failure().to_string().starts_with("failed to read"));
/// ```
pub trait OutcomeExt<T> {
    /// Wraps the failure, if any, with `message`.
    fn context(self, message: impl Into<Cow<'static, str>>) -> Outcome<T>;

    /// Wraps the failure, if any, with a message computed only when there is a failure.
    fn context_with<F, M>(self, message: F) -> Outcome<T>
    where
        F: FnOnce() -> M,
        M: Into<Cow<'static, str>>;
}

impl<T, E> OutcomeExt<T> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    #[track_caller]
    fn context(self, message: impl Into<Cow<'static, str>>) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::Value(value),
            Err(error) => Outcome::Failure(Failure::caused_by(message, error)),
        }
    }

    #[track_caller]
    fn context_with<F, M>(self, message: F) -> Outcome<T>
    where
        F: FnOnce() -> M,
        M: Into<Cow<'static, str>>,
    {
        match self {
            Ok(value) => Outcome::Value(value),
            Err(error) => Outcome::Failure(Failure::caused_by(message(), error)),
        }
    }
}

impl<T> OutcomeExt<T> for Option<T> {
    #[track_caller]
    fn context(self, message: impl Into<Cow<'static, str>>) -> Outcome<T> {
        match self {
            Some(value) => Outcome::Value(value),
            None => Outcome::Failure(Failure::new(message)),
        }
    }

    #[track_caller]
    fn context_with<F, M>(self, message: F) -> Outcome<T>
    where
        F: FnOnce() -> M,
        M: Into<Cow<'static, str>>,
    {
        match self {
            Some(value) => Outcome::Value(value),
            None => Outcome::Failure(Failure::new(message())),
        }
    }
}

impl<T> OutcomeExt<T> for Outcome<T> {
    #[track_caller]
    fn context(self, message: impl Into<Cow<'static, str>>) -> Self {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Failure(failure) => Self::Failure(failure.wrap(message)),
        }
    }

    #[track_caller]
    fn context_with<F, M>(self, message: F) -> Self
    where
        F: FnOnce() -> M,
        M: Into<Cow<'static, str>>,
    {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Failure(failure) => Self::Failure(failure.wrap(message())),
        }
    }
}
