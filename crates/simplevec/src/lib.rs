// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous array built on a single-owner heap buffer.
//!
//! SimpleVec is split in two layers:
//!
//! - [`buffer`]: `ArrayBuffer<T>`, the sole owner of one heap-allocated slice.
//!   It is moved and swapped, never copied.
//! - [`alloc`]: `SimpleVec<T>`, which tracks how many of the buffer's slots are
//!   live and grows by doubling.
//!
//! # Quick Start
//!
//! ```rust
//! use simplevec::{simple_vec, SimpleVec, SimpleVecError};
//!
//! fn main() -> Result<(), SimpleVecError> {
//!     let mut vec = SimpleVec::new();
//!
//!     vec.push_back(1u32)?; // capacity 1
//!     vec.push_back(2u32)?; // capacity 2
//!     vec.push_back(3u32)?; // capacity 4
//!
//!     assert_eq!(vec.capacity(), 4);
//!     assert_eq!(vec, simple_vec![1, 2, 3]?);
//!
//!     // Removal never gives memory back
//!     vec.clear();
//!     assert_eq!(vec.capacity(), 4);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Guarantees
//!
//! | Operation | On allocation failure |
//! |-----------|-----------------------|
//! | `push_back`, `insert`, `extend_from_slice` | vector unchanged |
//! | `resize`, `reserve_exact` | vector unchanged |
//! | `try_clone`, `assign` | source and target unchanged |
//! | `Clone::clone` | panics |
//!
//! Contract violations (`insert` past `len()`, `erase` at or past `len()`,
//! indexing past `len()`) panic, like `Vec`. Use [`SimpleVec::at`] for a
//! checked lookup.
//!
//! # Testing
//!
//! Enable `test_utils` to inject allocation failures through
//! `SimpleVecBehaviour`:
//!
//! ```rust,ignore
//! let mut vec = SimpleVec::<u8>::new();
//! vec.change_behaviour(SimpleVecBehaviour::FailAtAlloc);
//!
//! assert!(vec.push_back(1).is_err());
//! ```
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub use simplevec_alloc as alloc;
pub use simplevec_buffer as buffer;

pub use simplevec_alloc::{ReserveProxy, SimpleVec, SimpleVecError, reserve, simple_vec};
pub use simplevec_buffer::{ArrayBuffer, BufferError};

#[cfg(feature = "test_utils")]
pub use simplevec_alloc::SimpleVecBehaviour;
