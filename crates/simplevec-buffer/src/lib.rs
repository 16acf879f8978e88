// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Single-owner heap buffer used as the storage layer of `SimpleVec`.
//!
//! `ArrayBuffer<T>` owns exactly one heap slice of `T`. It knows nothing about
//! "live" elements or growth: every slot is an initialized `T`, and the buffer
//! only allocates, frees and hands ownership around.
//!
//! # Ownership
//!
//! - An empty buffer holds no allocation (the "null" state).
//! - The allocation is freed exactly once, when the owning buffer is dropped.
//! - Ownership moves out through [`ArrayBuffer::take`], [`ArrayBuffer::release`]
//!   or [`ArrayBuffer::into_raw`]; the source is left empty.
//! - `ArrayBuffer` is not `Clone`. Callers that need a copy allocate a fresh
//!   buffer and copy elements into it themselves.
//!
//! # Example
//!
//! ```rust
//! use simplevec_buffer::{ArrayBuffer, BufferError};
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut buffer = ArrayBuffer::<u32>::try_new(4)?;
//!     assert_eq!(buffer.slots(), 4);
//!     assert_eq!(buffer.as_slice(), &[0, 0, 0, 0]);
//!
//!     buffer[1] = 7;
//!
//!     // Ownership leaves the buffer, which is now empty.
//!     let released = buffer.release();
//!     assert_eq!(&*released, &[0, 7, 0, 0]);
//!     assert!(!buffer.is_allocated());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod array_buffer;
mod error;

pub use array_buffer::ArrayBuffer;
pub use error::BufferError;
