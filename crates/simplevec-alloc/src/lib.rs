// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous array with doubling growth and strong error safety.
//!
//! `SimpleVec<T>` owns a single [`ArrayBuffer`](simplevec_buffer::ArrayBuffer)
//! and tracks how many of its slots are live. It never touches raw memory
//! itself: every growth asks for a fresh buffer, moves the live elements into
//! it and swaps it in.
//!
//! # Core Guarantees
//!
//! - **Doubling growth**: when more room is needed the capacity becomes
//!   `max(requested, 2 * capacity)`, or 1 from empty.
//! - **Fallible allocation**: every growing operation returns
//!   [`SimpleVecError::AllocationFailed`] instead of aborting, and leaves the
//!   vector untouched when it does.
//! - **Capacity is sticky**: `pop_back()`, `erase()`, `clear()` and shrinking
//!   `resize()` never deallocate.
//! - **Deep copies preserve capacity**: `try_clone()` produces an independent
//!   buffer of the same capacity.
//! - **Moves leave an empty vector**: `take()` leaves zero length and zero
//!   capacity behind.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use simplevec_alloc::{simple_vec, SimpleVec, SimpleVecError};
//!
//! fn example() -> Result<(), SimpleVecError> {
//!     let mut vec = simple_vec![1, 2, 3]?;
//!
//!     vec.insert(1, 9)?;
//!     assert_eq!(vec.as_slice(), &[1, 9, 2, 3]);
//!
//!     vec.erase(1);
//!     assert_eq!(vec.as_slice(), &[1, 2, 3]);
//!
//!     // Checked access fails instead of panicking
//!     assert!(vec.at(3).is_err());
//!
//!     // Lexicographic ordering, shorter prefix first
//!     assert!(vec < simple_vec![1, 2, 4]?);
//!     assert!(simple_vec![1, 2]? < vec);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Reserving Up Front
//!
//! ```rust
//! use simplevec_alloc::{reserve, SimpleVec, SimpleVecError};
//!
//! fn example() -> Result<(), SimpleVecError> {
//!     let mut vec = SimpleVec::try_from(reserve(4))?;
//!
//!     for i in 0u32..4 {
//!         vec.push_back(i)?;
//!     }
//!
//!     // No reallocation was needed
//!     assert_eq!(vec.capacity(), 4);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! simplevec-alloc = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`SimpleVecBehaviour`] to exercise error paths:
//!
//! ```rust
//! // test_utils feature required in dev-dependencies
//! #[cfg(test)]
//! mod tests {
//!     use simplevec_alloc::{SimpleVec, SimpleVecBehaviour};
//!
//!     #[test]
//!     fn test_handles_allocation_failure() {
//!         let mut vec = SimpleVec::<u8>::new();
//!         vec.change_behaviour(SimpleVecBehaviour::FailAtAlloc);
//!
//!         assert!(vec.push_back(1).is_err());
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod macros;
mod reserve;
mod simple_vec;

#[cfg(test)]
mod tests;

pub use error::SimpleVecError;
pub use reserve::{ReserveProxy, reserve};
pub use simple_vec::SimpleVec;

#[cfg(any(test, feature = "test_utils"))]
pub use simple_vec::SimpleVecBehaviour;
