// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! An unpublished crate containing testing utilities for use within this repo.

mod drop_tracker;
mod log;
mod macros;

pub use drop_tracker::*;
pub use log::*;
pub use macros::panic_message;
