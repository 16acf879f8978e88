// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for simplevec-alloc.

use simplevec_buffer::BufferError;
use thiserror::Error;

/// Error type for `SimpleVec` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum SimpleVecError {
    /// Storage for `capacity` slots could not be allocated.
    ///
    /// The vector on which the operation was invoked is left unchanged.
    #[error("allocation of {capacity} slots failed")]
    AllocationFailed {
        /// Capacity that was requested.
        capacity: usize,
    },

    /// Checked access at an index not below `len()`.
    #[error("index out of range")]
    OutOfRange,

    /// Integer overflow when computing the new length.
    ///
    /// Only reachable with zero-sized element types, since any other
    /// allocation would fail long before `len` approaches `usize::MAX`.
    #[error("integer overflow: length would exceed usize::MAX")]
    CapacityOverflow,
}

impl From<BufferError> for SimpleVecError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::AllocationFailed { slots } => {
                SimpleVecError::AllocationFailed { capacity: slots }
            }
        }
    }
}
