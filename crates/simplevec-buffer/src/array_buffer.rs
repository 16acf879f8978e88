// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::BufferError;

/// Exclusive owner of one heap-allocated slice of `T`.
///
/// Every slot of the buffer holds an initialized `T`. An empty buffer owns no
/// allocation; this is the state left behind by every ownership transfer, so
/// dropping a source after [`take`](Self::take) or [`release`](Self::release)
/// never frees the transferred storage twice.
///
/// `ArrayBuffer` intentionally does not implement `Clone`. To copy, allocate a
/// new buffer with [`try_new_with`](Self::try_new_with) and clone the elements
/// into it.
///
/// # Example
///
/// ```rust
/// use simplevec_buffer::{ArrayBuffer, BufferError};
///
/// fn example() -> Result<(), BufferError> {
///     let mut a = ArrayBuffer::<u8>::try_new(2)?;
///     let mut b = ArrayBuffer::<u8>::new();
///
///     a.swap(&mut b);
///
///     assert!(!a.is_allocated());
///     assert_eq!(b.slots(), 2);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct ArrayBuffer<T> {
    inner: Box<[T]>,
}

impl<T> ArrayBuffer<T> {
    /// Creates an empty buffer that owns no allocation.
    pub fn new() -> Self {
        Self {
            inner: Box::default(),
        }
    }

    /// Allocates `slots` default-initialized elements.
    ///
    /// `slots == 0` returns an empty buffer without touching the allocator.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailed`] if the storage cannot be
    /// obtained. Nothing is allocated in that case.
    pub fn try_new(slots: usize) -> Result<Self, BufferError>
    where
        T: Default,
    {
        Self::try_new_with(slots, |_| T::default())
    }

    /// Allocates `slots` elements, initializing slot `i` with `init(i)`.
    ///
    /// If `init` panics, the elements constructed so far are dropped and the
    /// allocation is freed before the panic propagates.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailed`] if the storage cannot be
    /// obtained. `init` is never called in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simplevec_buffer::{ArrayBuffer, BufferError};
    ///
    /// fn example() -> Result<(), BufferError> {
    ///     let buffer = ArrayBuffer::try_new_with(3, |i| i * 10)?;
    ///     assert_eq!(buffer.as_slice(), &[0, 10, 20]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn try_new_with<F>(slots: usize, init: F) -> Result<Self, BufferError>
    where
        F: FnMut(usize) -> T,
    {
        if slots == 0 {
            return Ok(Self::new());
        }

        let mut items = Vec::new();
        items
            .try_reserve_exact(slots)
            .map_err(|_| BufferError::AllocationFailed { slots })?;
        items.extend((0..slots).map(init));

        debug_assert_eq!(items.len(), slots);

        Ok(Self {
            inner: items.into_boxed_slice(),
        })
    }

    /// Allocates exactly `iter.len()` slots and moves the iterator's items into them.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailed`] if the storage cannot be
    /// obtained. The iterator is dropped unconsumed in that case.
    pub fn try_from_exact_iter<I>(iter: I) -> Result<Self, BufferError>
    where
        I: ExactSizeIterator<Item = T>,
    {
        let slots = iter.len();
        if slots == 0 {
            return Ok(Self::new());
        }

        let mut items = Vec::new();
        items
            .try_reserve_exact(slots)
            .map_err(|_| BufferError::AllocationFailed { slots })?;
        items.extend(iter);

        Ok(Self {
            inner: items.into_boxed_slice(),
        })
    }

    /// Adopts an allocation previously produced by [`into_raw`](Self::into_raw).
    ///
    /// # Safety
    ///
    /// `raw` must come from `ArrayBuffer::into_raw` or `Box::<[T]>::into_raw`,
    /// and must not be owned by anyone else. After this call the buffer is the
    /// sole owner and frees the allocation on drop.
    pub unsafe fn from_raw(raw: *mut [T]) -> Self {
        Self {
            // SAFETY: the caller guarantees `raw` is a uniquely owned Box<[T]> allocation.
            inner: unsafe { Box::from_raw(raw) },
        }
    }

    /// Consumes the buffer and returns its allocation as a raw slice pointer.
    ///
    /// The caller becomes responsible for freeing it, typically by handing it
    /// back to [`from_raw`](Self::from_raw).
    #[must_use = "the returned pointer owns the allocation and leaks it if dropped"]
    pub fn into_raw(self) -> *mut [T] {
        Box::into_raw(self.inner)
    }

    /// Relinquishes ownership of the allocation, leaving this buffer empty.
    #[must_use = "dropping the released allocation frees it immediately"]
    pub fn release(&mut self) -> Box<[T]> {
        core::mem::take(&mut self.inner)
    }

    /// Moves the allocation into a new buffer, leaving this one empty.
    pub fn take(&mut self) -> Self {
        Self {
            inner: self.release(),
        }
    }

    /// Installs `other` as this buffer's allocation and returns the previous one.
    pub fn replace(&mut self, other: Self) -> Self {
        core::mem::replace(self, other)
    }

    /// Exchanges the allocations of two buffers. Never allocates.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.inner, &mut other.inner);
    }

    /// Returns `true` if the buffer holds at least one slot.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        !self.inner.is_empty()
    }

    /// Returns the number of slots in the buffer.
    #[inline]
    pub fn slots(&self) -> usize {
        self.inner.len()
    }

    /// Returns all slots as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// Returns all slots as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.inner
    }

    /// Returns a raw pointer to the first slot.
    ///
    /// The pointer is dangling (but non-null and aligned) for an empty buffer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.inner.as_ptr()
    }

    /// Returns a raw mutable pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.inner.as_mut_ptr()
    }

    /// Returns a reference to slot `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`slots`](Self::slots).
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.slots(), "ArrayBuffer::get_unchecked: index out of range");
        // SAFETY: the caller guarantees index < slots.
        unsafe { self.inner.get_unchecked(index) }
    }

    /// Returns a mutable reference to slot `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`slots`](Self::slots).
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.slots(), "ArrayBuffer::get_unchecked_mut: index out of range");
        // SAFETY: the caller guarantees index < slots.
        unsafe { self.inner.get_unchecked_mut(index) }
    }
}

impl<T> Default for ArrayBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Box<[T]>> for ArrayBuffer<T> {
    fn from(inner: Box<[T]>) -> Self {
        Self { inner }
    }
}

impl<T> core::fmt::Debug for ArrayBuffer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ArrayBuffer")
            .field("slots", &self.slots())
            .finish_non_exhaustive()
    }
}

impl<T> Index<usize> for ArrayBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl<T> IndexMut<usize> for ArrayBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.inner[index]
    }
}
