// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// Construct a [`Failure`](crate::Failure) in place.
///
/// The macro accepts:
/// - A string literal: `failure!("failure message")`
/// - A format string literal with arguments: `failure!("bad value: {}", value)`
/// - An error expression: `failure!(io_error)`, which goes through [`Failure::from_error`](crate::Failure::from_error)
///
/// # Examples
///
/// ```rust
/// use verdict::failure;
///
/// let code = 42;
/// let failure = failure!("failed with code {code}");
/// assert_eq!(failure.to_string(), "failed with code 42");
///
/// let failure = failure!(std::io::Error::other("disk full"));
/// assert_eq!(failure.to_string(), "disk full");
/// ```
#[macro_export]
macro_rules! failure {
    ($msg:literal $(,)?) => {
        $crate::Failure::new(::std::format!($msg))
    };
    ($fmt:literal, $($arg:tt)+) => {
        $crate::Failure::new(::std::format!($fmt, $($arg)+))
    };
    ($err:expr $(,)?) => {
        $crate::Failure::from_error($err)
    };
}

/// Return early with a [`Failure`](crate::Failure).
///
/// Works in functions returning [`Outcome<T>`](crate::Outcome) as well as `Result<T, Failure>`.
/// Accepts the same arguments as [`failure!`].
///
/// # Examples
///
/// ```rust
/// use verdict::{Failure, Outcome, bail};
///
/// fn check(x: i32) -> Outcome<i32> {
///     if x < 0 {
///         bail!("value must be non-negative, got {x}");
///     }
///     Outcome::from_value(x)
/// }
///
/// fn check_result(x: i32) -> Result<i32, Failure> {
///     if x < 0 {
///         bail!("value must be non-negative, got {x}");
///     }
///     Ok(x)
/// }
///
/// assert!(check(-1).is_error());
/// assert!(check_result(-1).is_err());
/// ```
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return ::core::convert::From::from($crate::failure!($($arg)*))
    };
}

/// Return early with a [`Failure`](crate::Failure) if a condition does not hold.
///
/// Without a message, the failure names the condition that did not hold.
///
/// # Examples
///
/// ```rust
/// use verdict::{Outcome, ensure};
///
/// fn half(x: u32) -> Outcome<u32> {
///     ensure!(x % 2 == 0, "{x} is odd");
///     Outcome::from_value(x / 2)
/// }
///
/// assert_eq!(half(8).unwrap_value(), 4);
/// assert_eq!(half(7).unwrap_failure().to_string(), "7 is odd");
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::bail!(::core::concat!("condition failed: ", ::core::stringify!($cond)));
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::bail!($($arg)+);
        }
    };
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use crate::{Failure, Outcome};

    #[test]
    fn failure_from_literal() {
        let failure = failure!("plain");
        assert_eq!(failure.to_string(), "plain");
        assert!(failure.location().file.ends_with("macros.rs"));
    }

    #[test]
    fn failure_from_format() {
        let value = 3;
        assert_eq!(failure!("value {}", value).to_string(), "value 3");
        assert_eq!(failure!("value {value}").to_string(), "value 3");
    }

    #[test]
    fn failure_from_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
        let failure = failure!(io);
        assert_eq!(failure.to_string(), "config.toml");
    }

    #[test]
    fn error_expression_with_trailing_comma() {
        fn load() -> Outcome<u8> {
            let error = std::io::Error::other("not loaded");
            bail!(error,);
        }

        let failure = failure!(std::io::Error::other("disk full"),);
        assert_eq!(failure.to_string(), "disk full");
        assert_eq!(load().unwrap_failure().to_string(), "not loaded");
    }

    #[test]
    fn bail_in_outcome_and_result() {
        fn outcome(fail: bool) -> Outcome<u8> {
            if fail {
                bail!("outcome failed");
            }
            Outcome::from_value(1)
        }

        fn result(fail: bool) -> Result<u8, Failure> {
            if fail {
                bail!("result failed: {}", fail);
            }
            Ok(1)
        }

        assert_eq!(outcome(true).unwrap_failure().to_string(), "outcome failed");
        assert_eq!(outcome(false).unwrap_value(), 1);
        assert_eq!(result(true).unwrap_err().to_string(), "result failed: true");
        assert_eq!(result(false).unwrap(), 1);
    }

    #[test]
    fn ensure_without_message_names_condition() {
        fn positive(x: i32) -> Outcome<i32> {
            ensure!(x > 0);
            Outcome::from_value(x)
        }

        assert_eq!(positive(-1).unwrap_failure().to_string(), "condition failed: x > 0");
        assert_eq!(positive(1).unwrap_value(), 1);
    }
}
