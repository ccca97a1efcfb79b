// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::ops::Deref;
use std::sync::{Arc, Mutex};

/// Counts how often tracked values are created and dropped.
///
/// Wrap payloads with [`track`](Self::track) and inspect the tracker afterwards to prove that
/// every value was released exactly once: a leak shows up as a live value, a double release as
/// an id that was dropped twice.
#[derive(Debug, Clone, Default)]
pub struct DropTracker {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    created: usize,
    dropped: Vec<usize>,
}

impl DropTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `value` so that its drop is recorded by this tracker.
    ///
    /// # Panics
    ///
    /// Panics if the tracker lock is poisoned.
    #[must_use]
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        let mut state = self.state.lock().unwrap();
        let id = state.created;
        state.created += 1;

        Tracked {
            value,
            id,
            state: Arc::clone(&self.state),
        }
    }

    /// Returns how many values have been tracked so far.
    ///
    /// # Panics
    ///
    /// Panics if the tracker lock is poisoned.
    #[must_use]
    pub fn created(&self) -> usize {
        self.state.lock().unwrap().created
    }

    /// Returns how many drops have been recorded.
    ///
    /// # Panics
    ///
    /// Panics if the tracker lock is poisoned.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.state.lock().unwrap().dropped.len()
    }

    /// Returns how many tracked values are still alive.
    #[must_use]
    pub fn live(&self) -> usize {
        self.created().saturating_sub(self.dropped())
    }

    /// Asserts that no tracked value was dropped more than once.
    ///
    /// # Panics
    ///
    /// Panics if some value was dropped twice.
    pub fn assert_no_double_drop(&self) {
        let mut dropped = self.state.lock().unwrap().dropped.clone();
        dropped.sort_unstable();
        let before = dropped.len();
        dropped.dedup();
        assert_eq!(before, dropped.len(), "some tracked values were dropped more than once");
    }

    /// Asserts that every tracked value has been dropped exactly once.
    ///
    /// # Panics
    ///
    /// Panics if a value is still alive or was dropped twice.
    pub fn assert_all_dropped_once(&self) {
        self.assert_no_double_drop();
        assert_eq!(self.live(), 0, "{} tracked values are still alive", self.live());
    }
}

/// A value whose drop is recorded by a [`DropTracker`].
#[derive(Debug)]
pub struct Tracked<T> {
    value: T,
    id: usize,
    state: Arc<Mutex<State>>,
}

impl<T> Tracked<T> {
    /// Returns the id assigned when the value was tracked, in creation order from zero.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }
}

impl<T> Deref for Tracked<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        // a poisoned lock means a test already failed; do not panic again during unwinding
        if let Ok(mut state) = self.state.lock() {
            state.dropped.push(self.id);
        }
    }
}
