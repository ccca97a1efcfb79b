// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;
use std::mem;

use crate::Failure;

/// Holds either a value of type `T` or a [`Failure`].
///
/// Exactly one variant is present at every point: [`is_value`](Self::is_value) and
/// [`is_error`](Self::is_error) never agree. The carrier owns its payload, and replacing the
/// state through [`set_value`](Self::set_value), [`set_failure`](Self::set_failure) or plain
/// assignment drops the previous payload exactly once.
///
/// Any payload shape is a choice of `T`: scalars, text, [`Complex`](crate::Complex) numbers or
/// [`Array`](crate::Array)s of any rank.
///
/// # Examples
///
/// ```rust
/// use verdict::{Failure, Outcome};
///
/// let mut outcome = Outcome::from_value(String::from("Hello world"));
/// assert!(outcome.is_value());
///
/// outcome.set_failure(Failure::new("greeting withdrawn"));
/// assert!(outcome.is_error());
/// assert_eq!(outcome.failure().map(ToString::to_string).as_deref(), Some("greeting withdrawn"));
/// ```
///
/// Converting into a [`Result`] gives the compiler-checked path and `?`:
///
/// ```rust
/// use verdict::{Failure, Outcome};
///
/// fn double(outcome: Outcome<i32>) -> Result<i32, Failure> {
///     Ok(outcome.into_result()? * 2)
/// }
///
/// assert_eq!(double(Outcome::from_value(21)).unwrap(), 42);
/// ```
#[must_use = "this `Outcome` may hold a failure, which should be handled"]
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    /// The operation produced a value.
    Value(T),
    /// The operation failed.
    Failure(Failure),
}

impl<T> Outcome<T> {
    /// Creates an outcome holding `value`.
    pub const fn from_value(value: T) -> Self {
        Self::Value(value)
    }

    /// Creates an outcome holding `failure`.
    pub const fn from_failure(failure: Failure) -> Self {
        Self::Failure(failure)
    }

    /// Returns `true` if this outcome holds a value.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if this outcome holds a failure. Always the opposite of [`is_value`](Self::is_value).
    #[must_use]
    pub const fn is_error(&self) -> bool {
        !self.is_value()
    }

    /// Returns a reference to the value, if present.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure, if present.
    #[must_use]
    pub const fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Value(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Replaces the whole state with `value`, dropping the previous payload.
    pub fn set_value(&mut self, value: T) {
        *self = Self::Value(value);
    }

    /// Replaces the whole state with `failure`, dropping the previous payload.
    pub fn set_failure(&mut self, failure: Failure) {
        *self = Self::Failure(failure);
    }

    /// Replaces the whole state with `other` and hands the previous state back to the caller.
    pub fn replace(&mut self, other: Self) -> Self {
        mem::replace(self, other)
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with the rendered [`report`](Failure::report) if this outcome holds a failure.
    /// Use [`into_result`](Self::into_result) or a `match` where a failure is possible.
    #[track_caller]
    #[expect(clippy::panic, reason = "unwrapping the wrong variant is a contract violation")]
    pub fn unwrap_value(self) -> T {
        match self {
            Self::Value(value) => value,
            Self::Failure(failure) => panic!("called `Outcome::unwrap_value()` on a failure:\n{}", failure.report()),
        }
    }

    /// Returns the failure.
    ///
    /// # Panics
    ///
    /// Panics if this outcome holds a value.
    #[track_caller]
    #[expect(clippy::panic, reason = "unwrapping the wrong variant is a contract violation")]
    pub fn unwrap_failure(self) -> Failure {
        match self {
            Self::Value(_) => panic!("called `Outcome::unwrap_failure()` on a value"),
            Self::Failure(failure) => failure,
        }
    }

    /// Returns the value, or `default` if this outcome holds a failure.
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Value(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the value, or computes one from the failure.
    pub fn unwrap_or_else(self, f: impl FnOnce(Failure) -> T) -> T {
        match self {
            Self::Value(value) => value,
            Self::Failure(failure) => f(failure),
        }
    }

    /// Converts into a [`Result`], which enables `?`.
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }

    /// Returns the value as an [`Option`], discarding any failure.
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the value, cloning the failure if there is one.
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Value(value) => Outcome::Value(value),
            Self::Failure(failure) => Outcome::Failure(failure.clone()),
        }
    }

    /// Transforms the value, leaving a failure untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Value(value) => Outcome::Value(f(value)),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Chains another fallible step, leaving a failure untouched.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Self::Value(value) => f(value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Transforms the failure, leaving a value untouched.
    pub fn map_failure(self, f: impl FnOnce(Failure) -> Failure) -> Self {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Failure(failure) => Self::Failure(f(failure)),
        }
    }

    /// Logs the failure, if any, through [`Failure::log`] and returns `self` unchanged.
    pub fn log_failure(self) -> Self {
        if let Self::Failure(failure) = &self {
            failure.log();
        }
        self
    }
}

impl<T> From<Failure> for Outcome<T> {
    fn from(failure: Failure) -> Self {
        Self::Failure(failure)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: StdError + Send + Sync + 'static,
{
    #[track_caller]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(error) => Self::Failure(Failure::from_error(error)),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Failure> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

/// Lets [`bail!`](crate::bail) return from functions whose return type is `Result<T, Failure>`.
impl<T> From<Failure> for Result<T, Failure> {
    fn from(failure: Failure) -> Self {
        Err(failure)
    }
}

impl<T, V> FromIterator<Outcome<T>> for Outcome<V>
where
    V: FromIterator<T>,
{
    /// Collects values until the first failure, which becomes the result.
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        match iter.into_iter().map(Outcome::into_result).collect::<Result<V, Failure>>() {
            Ok(values) => Self::Value(values),
            Err(failure) => Self::Failure(failure),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_value_is_value() {
        let outcome = Outcome::from_value(5_u8);
        assert!(outcome.is_value());
        assert!(!outcome.is_error());
        assert_eq!(outcome.value(), Some(&5));
        assert!(outcome.failure().is_none());
    }

    #[test]
    fn from_failure_is_error() {
        let outcome = Outcome::<u8>::from_failure(Failure::new("nope"));
        assert!(outcome.is_error());
        assert!(!outcome.is_value());
        assert!(outcome.value().is_none());
        assert_eq!(outcome.failure().unwrap().to_string(), "nope");
    }

    #[test]
    fn replace_returns_previous_state() {
        let mut outcome = Outcome::from_value(1);
        let previous = outcome.replace(Outcome::from_failure(Failure::new("gone")));
        assert_eq!(previous.unwrap_value(), 1);
        assert!(outcome.is_error());

        let previous = outcome.replace(Outcome::from_value(2));
        assert_eq!(previous.unwrap_failure().to_string(), "gone");
        assert_eq!(outcome.unwrap_value(), 2);
    }

    #[test]
    #[should_panic(expected = "called `Outcome::unwrap_value()` on a failure:\nError: x must be positive")]
    fn unwrap_value_on_failure_panics() {
        let outcome = Outcome::<f64>::from_failure(
            Failure::builder()
                .message("x must be positive")
                .backtrace_policy(crate::BacktracePolicy::Never)
                .build(),
        );
        let _ = outcome.unwrap_value();
    }

    #[test]
    #[should_panic(expected = "called `Outcome::unwrap_failure()` on a value")]
    fn unwrap_failure_on_value_panics() {
        let _ = Outcome::from_value("fine").unwrap_failure();
    }

    #[test]
    fn unwrap_or_variants() {
        assert_eq!(Outcome::from_value(3).unwrap_or(0), 3);
        assert_eq!(Outcome::<i32>::from_failure(Failure::new("x")).unwrap_or(0), 0);
        let len = Outcome::<usize>::from_failure(Failure::new("four")).unwrap_or_else(|f| f.to_string().len());
        assert_eq!(len, 4);
    }

    #[test]
    fn combinators() {
        let doubled = Outcome::from_value(4).map(|v| v * 2);
        assert_eq!(doubled.value(), Some(&8));

        let chained = doubled.and_then(|v| {
            if v > 5 {
                Outcome::from_failure(Failure::new("too big"))
            } else {
                Outcome::from_value(v)
            }
        });
        assert!(chained.is_error());

        let renamed = chained.map_failure(|f| f.wrap("check failed"));
        assert_eq!(renamed.failure().unwrap().to_string(), "check failed");
        assert!(renamed.as_ref().is_error());
        assert!(renamed.ok().is_none());
    }

    #[test]
    fn result_conversions() {
        let ok: Result<i32, std::io::Error> = Ok(1);
        assert_eq!(Outcome::from(ok).unwrap_value(), 1);

        let err: Result<i32, std::io::Error> = Err(std::io::Error::other("io"));
        let outcome = Outcome::from(err);
        assert_eq!(outcome.failure().unwrap().to_string(), "io");

        let result: Result<i32, Failure> = outcome.into();
        assert!(result.is_err());

        let result: Result<i32, Failure> = Failure::new("direct").into();
        assert_eq!(result.unwrap_err().to_string(), "direct");
    }

    #[test]
    fn collect_stops_at_first_failure() {
        let all: Outcome<Vec<i32>> = (1..=3).map(Outcome::from_value).collect();
        assert_eq!(all.unwrap_value(), vec![1, 2, 3]);

        let some: Outcome<Vec<i32>> = [
            Outcome::from_value(1),
            Outcome::from_failure(Failure::new("second")),
            Outcome::from_failure(Failure::new("third")),
        ]
        .into_iter()
        .collect();
        assert_eq!(some.unwrap_failure().to_string(), "second");
    }
}
