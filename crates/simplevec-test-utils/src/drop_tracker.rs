// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Instance accounting for ownership tests.

use std::cell::Cell;
use std::rc::Rc;

/// Counts live [`Tracked`] values created through it.
///
/// Every construction or clone increments the count and every drop decrements
/// it, so a leak leaves it positive and a double drop drives it negative.
#[derive(Debug, Default, Clone)]
pub struct DropTracker {
    live: Rc<Cell<isize>>,
}

impl DropTracker {
    /// Creates a tracker with no live values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracked value.
    pub fn track(&self, value: u32) -> Tracked {
        self.live.set(self.live.get() + 1);
        Tracked {
            value,
            live: Some(Rc::clone(&self.live)),
        }
    }

    /// Number of tracked values currently alive.
    pub fn live(&self) -> isize {
        self.live.get()
    }
}

/// A value whose lifetime is counted by a [`DropTracker`].
///
/// `Tracked::default()` is untracked, so containers may create and drop
/// default fillers freely without affecting the count.
#[derive(Debug, Default)]
pub struct Tracked {
    value: u32,
    live: Option<Rc<Cell<isize>>>,
}

impl Tracked {
    /// Returns the payload.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Returns `true` if the value is counted by a tracker.
    pub fn is_tracked(&self) -> bool {
        self.live.is_some()
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if let Some(live) = &self.live {
            live.set(live.get() + 1);
        }

        Self {
            value: self.value,
            live: self.live.clone(),
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(live) = &self.live {
            live.set(live.get() - 1);
        }
    }
}
