// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for simplevec-buffer.
use thiserror::Error;

/// Errors that can occur when allocating an [`ArrayBuffer`](crate::ArrayBuffer).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// The allocator could not provide storage for `slots` elements.
    ///
    /// Also returned when the byte size of `slots` elements does not fit
    /// in `isize::MAX`.
    #[error("allocation of {slots} slots failed")]
    AllocationFailed {
        /// Number of slots that were requested.
        slots: usize,
    },
}
