// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Payload shapes that have no counterpart in the standard library.

mod array;
mod complex;

pub use array::{Array, ShapeMismatch};
pub use complex::{Complex, Complex32, Complex64};
