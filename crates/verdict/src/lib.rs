// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Value-or-failure carrier with structured failure descriptors.
//!
//! Verdict is built around two types:
//!
//! - [`Outcome<T>`]: holds either a [`Value`](Outcome::Value) of type `T` or a
//!   [`Failure`](Outcome::Failure), never both and never neither.
//! - [`Failure`]: an owned descriptor with a message, an optional cause chain, an optional
//!   typed tag for programmatic matching, an optional backtrace and the location where it
//!   was created.
//!
//! `Outcome<T>` is a single generic definition. Scalar payloads (`bool`, integers, `f32`,
//! `f64`, [`Complex32`], [`Complex64`], `String`) and multi-dimensional payloads
//! ([`Array<T>`] of any rank) are all just choices of `T`.
//!
//! # Quick Start
//!
//! ```rust
//! use verdict::{Array, Failure, Outcome};
//!
//! fn scale(x: f64) -> Outcome<Array<f64>> {
//!     if x < 0.0 {
//!         return Outcome::from_failure(Failure::new("x must be positive"));
//!     }
//!     Outcome::from_value(Array::from_vec(vec![1.0, 2.0, 3.0]) * x)
//! }
//!
//! let ok = scale(12.0);
//! assert!(ok.is_value());
//! assert_eq!(ok.unwrap_value().as_slice(), &[12.0, 24.0, 36.0]);
//!
//! let err = scale(-12.0);
//! assert!(err.is_error());
//! assert!(err.unwrap_failure().report().to_string().starts_with("Error: x must be positive"));
//! ```
//!
//! # Cause Chains
//!
//! A failure can wrap any error, including another [`Failure`], as its cause. The
//! [`report`](Failure::report) rendering lists the chain with the outermost context first.
//!
//! ```rust
//! use verdict::Failure;
//!
//! let io = std::io::Error::new(std::io::ErrorKind::NotFound, "settings.toml");
//! let failure = Failure::caused_by("failed to load settings", io).wrap("startup aborted");
//!
//! assert_eq!(failure.to_string(), "startup aborted");
//! assert_eq!(failure.root_cause().to_string(), "settings.toml");
//! ```
//!
//! # Tags
//!
//! Tags replace class hierarchies for programmatic matching. Any `'static + Send + Sync`
//! value can be attached; lookups for a tag type that is not present return `None`.
//!
//! ```rust
//! use verdict::Failure;
//!
//! #[derive(Debug, PartialEq)]
//! struct NotFound {
//!     key: String,
//! }
//!
//! let failure = Failure::new("lookup failed")
//!     .with_tag(NotFound { key: "alpha".into() })
//!     .wrap("request failed");
//!
//! assert_eq!(failure.find_tag::<NotFound>().map(|t| t.key.as_str()), Some("alpha"));
//! assert!(failure.find_tag::<std::io::ErrorKind>().is_none());
//! ```
//!
//! # Early Returns
//!
//! [`bail!`] and [`ensure!`] return a failure from functions returning either
//! `Outcome<T>` or `Result<T, Failure>`.
//!
//! ```rust
//! use verdict::{Outcome, ensure};
//!
//! fn checked_sqrt(x: f64) -> Outcome<f64> {
//!     ensure!(x >= 0.0, "cannot take the square root of {x}");
//!     Outcome::from_value(x.sqrt())
//! }
//!
//! assert!(checked_sqrt(-1.0).is_error());
//! ```

mod backtrace;
mod builder;
mod failure;
mod location;
mod macros;
mod outcome;
mod outcome_ext;
mod payload;
mod report;
mod source;
mod tag;

#[cfg(any(feature = "test-util", test))]
pub mod test_util;

pub use builder::{BacktracePolicy, FailureBuilder};
pub use failure::{Chain, Failure};
pub use location::Location;
pub use outcome::Outcome;
pub use outcome_ext::OutcomeExt;
pub use payload::{Array, Complex, Complex32, Complex64, ShapeMismatch};
pub use report::Report;
