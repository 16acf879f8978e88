// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Capacity hint used to build an empty [`SimpleVec`](crate::SimpleVec) with
/// pre-allocated storage.
///
/// Usually created with [`reserve`].
///
/// # Example
///
/// ```rust
/// use simplevec_alloc::{reserve, SimpleVec, SimpleVecError};
///
/// fn example() -> Result<(), SimpleVecError> {
///     let vec = SimpleVec::<u32>::try_from(reserve(16))?;
///     assert_eq!(vec.len(), 0);
///     assert_eq!(vec.capacity(), 16);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReserveProxy {
    capacity: usize,
}

impl ReserveProxy {
    /// Creates a hint for `capacity` slots.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Returns the capacity to reserve.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl From<usize> for ReserveProxy {
    fn from(capacity: usize) -> Self {
        Self::new(capacity)
    }
}

/// Returns a [`ReserveProxy`] carrying `capacity`.
pub const fn reserve(capacity: usize) -> ReserveProxy {
    ReserveProxy::new(capacity)
}
