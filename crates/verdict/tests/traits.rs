// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![expect(missing_docs, reason = "Test code")]

use std::mem;
use std::rc::Rc;

use static_assertions::{assert_impl_all, assert_not_impl_any};
use verdict::{Array, Complex32, Complex64, Failure, Outcome};

assert_impl_all!(Failure: Send, Sync, Clone, std::fmt::Debug, std::fmt::Display, std::error::Error);
assert_impl_all!(Outcome<String>: Send, Sync, Clone, std::fmt::Debug);
assert_impl_all!(Outcome<Array<Complex64>>: Send, Sync, Clone);
assert_impl_all!(Complex32: Copy, Default, PartialEq);
assert_not_impl_any!(Outcome<Rc<u8>>: Send, Sync);

#[test]
fn failure_is_one_pointer() {
    assert_eq!(mem::size_of::<Failure>(), mem::size_of::<usize>());
}

#[test]
fn failure_does_not_inflate_payloads() {
    // the failure variant is a single pointer, so it never dominates the carrier size
    let word = mem::size_of::<usize>();
    assert!(mem::size_of::<Outcome<u8>>() <= 2 * word);
    assert!(mem::size_of::<Outcome<f64>>() <= 2 * word);
    assert!(mem::size_of::<Outcome<String>>() <= mem::size_of::<String>() + word);
    assert!(mem::size_of::<Outcome<Array<f32>>>() <= mem::size_of::<Array<f32>>() + word);
}
