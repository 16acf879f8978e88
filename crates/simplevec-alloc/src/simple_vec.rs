// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut};

use simplevec_buffer::ArrayBuffer;

use crate::error::SimpleVecError;
use crate::reserve::ReserveProxy;

/// Test behaviour for injecting failures in `SimpleVec` operations.
///
/// This is only available with the `test_utils` feature and allows users
/// to test error handling paths in their code by injecting failures.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// use simplevec_alloc::{SimpleVec, SimpleVecBehaviour, SimpleVecError};
///
/// fn example() -> Result<(), SimpleVecError> {
///     let mut vec = SimpleVec::<u8>::new();
///
///     // Inject failure
///     vec.change_behaviour(SimpleVecBehaviour::FailAtAlloc);
///
///     // Growing needs an allocation, so it fails
///     assert!(vec.push_back(1).is_err());
///     assert_eq!(vec.capacity(), 0);
///
///     // Reset to normal behaviour
///     vec.change_behaviour(SimpleVecBehaviour::None);
///     vec.push_back(1)?;
///     Ok(())
/// }
/// # example().unwrap();
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleVecBehaviour {
    /// Normal behaviour - no injected failures.
    None,
    /// Every allocation made on behalf of this vector fails with `AllocationFailed`.
    FailAtAlloc,
}

#[cfg(any(test, feature = "test_utils"))]
impl Default for SimpleVecBehaviour {
    fn default() -> Self {
        Self::None
    }
}

/// Growable contiguous array built on a single [`ArrayBuffer`].
///
/// The buffer's slots are split in two: `[0, len)` holds the live elements
/// exposed through indexing, iteration and [`Deref`] to `[T]`; `[len, capacity)`
/// holds default or stale values and is never exposed.
///
/// Growth follows a doubling policy: whenever more room is needed the new
/// capacity is `max(requested, 2 * capacity)`, or at least 1 from empty.
/// Every growth builds a complete replacement buffer before swapping it in, so
/// a failed allocation leaves the vector exactly as it was.
///
/// Capacity never shrinks: [`pop_back`](Self::pop_back), [`erase`](Self::erase),
/// [`clear`](Self::clear) and shrinking [`resize`](Self::resize) only move `len`.
///
/// # Example
///
/// ```rust
/// use simplevec_alloc::{SimpleVec, SimpleVecError};
///
/// fn example() -> Result<(), SimpleVecError> {
///     let mut vec = SimpleVec::new();
///     vec.push_back(1u8)?;
///     vec.push_back(3u8)?;
///     vec.insert(1, 2u8)?;
///
///     assert_eq!(vec.as_slice(), &[1, 2, 3]);
///     assert_eq!(vec.capacity(), 4);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct SimpleVec<T> {
    buffer: ArrayBuffer<T>,
    len: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: SimpleVecBehaviour,
}

impl<T> SimpleVec<T> {
    fn from_parts(buffer: ArrayBuffer<T>, len: usize) -> Self {
        debug_assert!(len <= buffer.slots());

        Self {
            buffer,
            len,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: SimpleVecBehaviour::default(),
        }
    }

    /// Creates a new empty `SimpleVec` with zero capacity.
    ///
    /// Does not allocate.
    pub fn new() -> Self {
        Self::from_parts(ArrayBuffer::new(), 0)
    }

    /// Creates a vector of `len` default-valued elements. `capacity() == len`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::AllocationFailed`] if storage cannot be obtained.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simplevec_alloc::{SimpleVec, SimpleVecError};
    ///
    /// fn example() -> Result<(), SimpleVecError> {
    ///     let vec = SimpleVec::<u16>::with_len(3)?;
    ///     assert_eq!(vec.as_slice(), &[0, 0, 0]);
    ///     assert_eq!(vec.capacity(), 3);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn with_len(len: usize) -> Result<Self, SimpleVecError>
    where
        T: Default,
    {
        let buffer = ArrayBuffer::try_new(len)?;
        Ok(Self::from_parts(buffer, len))
    }

    /// Creates a vector of `len` clones of `value`. `capacity() == len`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::AllocationFailed`] if storage cannot be obtained.
    pub fn from_elem(len: usize, value: T) -> Result<Self, SimpleVecError>
    where
        T: Clone,
    {
        let buffer = ArrayBuffer::try_new_with(len, |_| value.clone())?;
        Ok(Self::from_parts(buffer, len))
    }

    /// Creates an empty vector with exactly `capacity` pre-allocated slots.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::AllocationFailed`] if storage cannot be obtained.
    pub fn with_capacity(capacity: usize) -> Result<Self, SimpleVecError>
    where
        T: Default,
    {
        let buffer = ArrayBuffer::try_new(capacity)?;
        Ok(Self::from_parts(buffer, 0))
    }

    /// Creates a vector holding clones of `items`, in order. `capacity() == items.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::AllocationFailed`] if storage cannot be obtained.
    pub fn try_from_slice(items: &[T]) -> Result<Self, SimpleVecError>
    where
        T: Clone,
    {
        let buffer = ArrayBuffer::try_new_with(items.len(), |i| items[i].clone())?;
        Ok(Self::from_parts(buffer, items.len()))
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.slots()
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.as_slice()[..self.len]
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buffer.as_mut_slice()[..len]
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Checked counterpart of `vec[index]`, which panics instead.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::OutOfRange`] if `index >= len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simplevec_alloc::{simple_vec, SimpleVecError};
    ///
    /// fn example() -> Result<(), SimpleVecError> {
    ///     let vec = simple_vec![10, 20, 30]?;
    ///
    ///     assert_eq!(*vec.at(1)?, 20);
    ///     assert_eq!(vec.at(3), Err(SimpleVecError::OutOfRange));
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, SimpleVecError> {
        self.as_slice().get(index).ok_or(SimpleVecError::OutOfRange)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, SimpleVecError> {
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(SimpleVecError::OutOfRange)
    }

    /// Sets `len()` to zero. Capacity is retained and nothing is deallocated.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Removes the element at `index`, shifting every following element one
    /// slot toward the front.
    ///
    /// Returns `index`, which now refers to the element that followed the
    /// erased one, or equals `len()` if the last element was erased. Indices
    /// at or after `index` refer to shifted elements afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simplevec_alloc::{simple_vec, SimpleVecError};
    ///
    /// fn example() -> Result<(), SimpleVecError> {
    ///     let mut vec = simple_vec![1, 9, 2, 3]?;
    ///
    ///     let next = vec.erase(1);
    ///
    ///     assert_eq!(next, 1);
    ///     assert_eq!(vec.as_slice(), &[1, 2, 3]);
    ///     assert_eq!(vec.capacity(), 4);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn erase(&mut self, index: usize) -> usize {
        assert!(
            index < self.len,
            "SimpleVec::erase: index {} out of range for length {}",
            index,
            self.len
        );

        // The erased element rotates into slot len - 1, which leaves the live range.
        self.as_mut_slice()[index..].rotate_left(1);
        self.len -= 1;

        index
    }

    /// Exchanges the contents of two vectors in O(1). Never allocates.
    ///
    /// Only the storage and length move; test behaviour stays with each vector.
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buffer.swap(&mut other.buffer);
        core::mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out into a new vector, leaving `self` empty with
    /// zero capacity and ready for reuse.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simplevec_alloc::{simple_vec, SimpleVecError};
    ///
    /// fn example() -> Result<(), SimpleVecError> {
    ///     let mut source = simple_vec![1, 2, 3]?;
    ///     let target = source.take();
    ///
    ///     assert_eq!(target.as_slice(), &[1, 2, 3]);
    ///     assert!(source.is_empty());
    ///     assert_eq!(source.capacity(), 0);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn take(&mut self) -> Self {
        let len = core::mem::replace(&mut self.len, 0);
        Self::from_parts(self.buffer.take(), len)
    }

    /// Move-assigns `source` into `self` through a temporary.
    ///
    /// `self`'s previous contents are dropped; `source` is left empty with
    /// zero capacity.
    pub fn assign_move(&mut self, source: &mut Self) {
        let mut tmp = source.take();
        self.swap_with(&mut tmp);
    }

    /// Changes the test behaviour for this vector.
    ///
    /// This is only available with the `test_utils` feature and allows injecting
    /// failures for testing error handling paths.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: SimpleVecBehaviour) {
        self.behaviour = behaviour;
    }

    /// Slots beyond `len()`, which hold default or stale values.
    #[cfg(test)]
    pub(crate) fn spare_slots(&self) -> &[T] {
        &self.buffer.as_slice()[self.len..]
    }
}

impl<T> SimpleVec<T> {
    /// Capacity to grow to when at least `min_len` slots are needed.
    #[inline(always)]
    fn grown_capacity(&self, min_len: usize) -> usize {
        let doubled = match self.capacity() {
            0 => 1,
            capacity => capacity.saturating_mul(2),
        };

        core::cmp::max(min_len, doubled)
    }

    /// Fails with `AllocationFailed` when this vector has `FailAtAlloc` set.
    #[inline(always)]
    fn check_behaviour(&self, capacity: usize) -> Result<(), SimpleVecError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, SimpleVecBehaviour::FailAtAlloc) {
            return Err(SimpleVecError::AllocationFailed { capacity });
        }

        #[cfg(not(any(test, feature = "test_utils")))]
        let _ = capacity;

        Ok(())
    }

    fn allocate_with<F>(&self, capacity: usize, init: F) -> Result<ArrayBuffer<T>, SimpleVecError>
    where
        F: FnMut(usize) -> T,
    {
        self.check_behaviour(capacity)?;

        ArrayBuffer::try_new_with(capacity, init).map_err(|err| {
            log::debug!(
                "SimpleVec: failed to allocate {} slots (len={}, capacity={})",
                capacity,
                self.len,
                self.capacity()
            );
            SimpleVecError::from(err)
        })
    }

    /// Moves the live elements into a fresh buffer of `new_capacity` slots and
    /// swaps it in. `self` is untouched if the allocation fails.
    #[cold]
    #[inline(never)]
    fn relocate(&mut self, new_capacity: usize) -> Result<(), SimpleVecError>
    where
        T: Default,
    {
        debug_assert!(new_capacity >= self.len);

        let mut fresh = self.allocate_with(new_capacity, |_| T::default())?;

        let len = self.len;
        let live = &mut self.buffer.as_mut_slice()[..len];
        for (dst, src) in fresh.as_mut_slice()[..len].iter_mut().zip(live) {
            core::mem::swap(dst, src);
        }

        log::trace!(
            "SimpleVec: relocated {} elements, capacity {} -> {}",
            len,
            self.capacity(),
            new_capacity
        );

        // The old buffer, now holding only defaults and stale values, drops here.
        self.buffer.swap(&mut fresh);

        Ok(())
    }

    /// Makes room for one more element at the back and returns its index.
    fn grow_by_one(&mut self) -> Result<usize, SimpleVecError>
    where
        T: Default,
    {
        let new_len = self
            .len
            .checked_add(1)
            .ok_or(SimpleVecError::CapacityOverflow)?;

        if new_len > self.capacity() {
            self.relocate(self.grown_capacity(new_len))?;
        }

        self.len = new_len;
        Ok(self.len - 1)
    }

    /// Deep-copies the vector into a buffer of the same capacity.
    ///
    /// The copy holds clones of the live elements followed by default values
    /// up to `capacity()`, so `copy.capacity() == self.capacity()`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::AllocationFailed`] if storage cannot be obtained.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simplevec_alloc::{SimpleVec, SimpleVecError};
    ///
    /// fn example() -> Result<(), SimpleVecError> {
    ///     let mut source = SimpleVec::with_capacity(8)?;
    ///     source.push_back(1u32)?;
    ///
    ///     let mut copy = source.try_clone()?;
    ///     copy[0] = 2;
    ///
    ///     assert_eq!(source.as_slice(), &[1]);
    ///     assert_eq!(copy.as_slice(), &[2]);
    ///     assert_eq!(copy.capacity(), 8);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn try_clone(&self) -> Result<Self, SimpleVecError>
    where
        T: Clone + Default,
    {
        let live = self.as_slice();
        let buffer = self.allocate_with(self.capacity(), |i| match live.get(i) {
            Some(item) => item.clone(),
            None => T::default(),
        })?;

        Ok(Self::from_parts(buffer, self.len))
    }

    /// Copy-assigns `source` into `self` (copy-and-swap).
    ///
    /// The copy is built first; `self` only changes once it fully exists.
    /// The copy's allocation is made on behalf of both vectors, so injected
    /// failures on either side apply.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::AllocationFailed`] if the copy cannot be
    /// allocated. `self` is unchanged in that case.
    pub fn assign(&mut self, source: &Self) -> Result<(), SimpleVecError>
    where
        T: Clone + Default,
    {
        self.check_behaviour(source.capacity())?;

        let mut tmp = source.try_clone()?;
        self.swap_with(&mut tmp);
        Ok(())
    }

    /// Ensures `capacity() >= new_capacity`, allocating exactly `new_capacity`
    /// slots when growth is needed. `len()` is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::AllocationFailed`] if storage cannot be
    /// obtained. The vector is unchanged in that case.
    pub fn reserve_exact(&mut self, new_capacity: usize) -> Result<(), SimpleVecError>
    where
        T: Default,
    {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        self.relocate(new_capacity)
    }

    /// Sets `len()` to `new_len`.
    ///
    /// - Above capacity: grows to `max(new_len, 2 * capacity)` (1 from empty);
    ///   the new elements are default-valued.
    /// - Within capacity: the newly exposed slots are reset to `T::default()`.
    /// - Shrinking: only `len()` changes; nothing is dropped or deallocated.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::AllocationFailed`] if storage cannot be
    /// obtained. The vector is unchanged in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simplevec_alloc::{simple_vec, SimpleVecError};
    ///
    /// fn example() -> Result<(), SimpleVecError> {
    ///     let mut vec = simple_vec![1, 2, 3]?;
    ///
    ///     vec.resize(1)?;
    ///     assert_eq!(vec.as_slice(), &[1]);
    ///
    ///     vec.resize(4)?;
    ///     assert_eq!(vec.as_slice(), &[1, 0, 0, 0]);
    ///     assert_eq!(vec.capacity(), 6);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn resize(&mut self, new_len: usize) -> Result<(), SimpleVecError>
    where
        T: Default,
    {
        if new_len > self.capacity() {
            self.relocate(self.grown_capacity(new_len))?;
        } else if new_len > self.len {
            self.buffer.as_mut_slice()[self.len..new_len]
                .iter_mut()
                .for_each(|slot| *slot = T::default());
        }

        self.len = new_len;
        Ok(())
    }

    /// Appends `value` to the back, doubling the capacity when full.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::AllocationFailed`] if growth is needed and
    /// storage cannot be obtained. The vector is unchanged and `value` is
    /// dropped in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simplevec_alloc::{SimpleVec, SimpleVecError};
    ///
    /// fn example() -> Result<(), SimpleVecError> {
    ///     let mut vec = SimpleVec::new();
    ///
    ///     vec.push_back(1u8)?;
    ///     assert_eq!(vec.capacity(), 1);
    ///     vec.push_back(2u8)?;
    ///     assert_eq!(vec.capacity(), 2);
    ///     vec.push_back(3u8)?;
    ///     assert_eq!(vec.capacity(), 4);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn push_back(&mut self, value: T) -> Result<(), SimpleVecError>
    where
        T: Default,
    {
        let index = self.grow_by_one()?;
        self.buffer[index] = value;
        Ok(())
    }

    /// Removes the last element and returns it, or `None` if the vector is empty.
    ///
    /// The vacated slot is left holding `T::default()`. Capacity is unchanged.
    pub fn pop_back(&mut self) -> Option<T>
    where
        T: Default,
    {
        if self.is_empty() {
            return None;
        }

        self.len -= 1;
        Some(core::mem::take(&mut self.buffer[self.len]))
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot toward the back.
    ///
    /// `index == len()` appends. Returns `index`, where `value` now lives.
    /// Indices at or after `index` refer to shifted elements afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::AllocationFailed`] if growth is needed and
    /// storage cannot be obtained. The vector is unchanged in that case.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simplevec_alloc::{simple_vec, SimpleVecError};
    ///
    /// fn example() -> Result<(), SimpleVecError> {
    ///     let mut vec = simple_vec![1, 2, 3]?;
    ///
    ///     assert_eq!(vec.insert(1, 9)?, 1);
    ///     assert_eq!(vec.as_slice(), &[1, 9, 2, 3]);
    ///
    ///     assert_eq!(vec.insert(4, 4)?, 4);
    ///     assert_eq!(vec.as_slice(), &[1, 9, 2, 3, 4]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, SimpleVecError>
    where
        T: Default,
    {
        assert!(
            index <= self.len,
            "SimpleVec::insert: index {} out of range for length {}",
            index,
            self.len
        );

        if index == self.len {
            self.push_back(value)?;
            return Ok(index);
        }

        let last = self.grow_by_one()?;
        self.buffer[last] = value;

        // Shift [index, last) back by one, starting from the back; the value
        // written at `last` wraps around into `index`.
        self.as_mut_slice()[index..].rotate_right(1);

        Ok(index)
    }

    /// Appends clones of `items`, growing at most once.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::AllocationFailed`] if growth is needed and
    /// storage cannot be obtained, or [`SimpleVecError::CapacityOverflow`] if
    /// the resulting length does not fit in `usize`. The vector is unchanged
    /// in both cases.
    pub fn extend_from_slice(&mut self, items: &[T]) -> Result<(), SimpleVecError>
    where
        T: Clone + Default,
    {
        let new_len = self
            .len
            .checked_add(items.len())
            .ok_or(SimpleVecError::CapacityOverflow)?;

        if new_len > self.capacity() {
            self.relocate(self.grown_capacity(new_len))?;
        }

        self.buffer.as_mut_slice()[self.len..new_len].clone_from_slice(items);
        self.len = new_len;

        Ok(())
    }
}

impl<T> Default for SimpleVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SimpleVec<T>
where
    T: Clone + Default,
{
    /// Deep-copies the vector, preserving capacity.
    ///
    /// # Panics
    ///
    /// Panics if the copy cannot be allocated. Use
    /// [`try_clone`](SimpleVec::try_clone) to handle that case.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(cloned) => cloned,
            Err(err) => panic!("SimpleVec::clone: {}", err),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.assign(source) {
            panic!("SimpleVec::clone_from: {}", err);
        }
    }
}

impl<T> core::fmt::Debug for SimpleVec<T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SimpleVec")
            .field("data", &self.as_slice())
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T> Deref for SimpleVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// =============================================================================
// Construction from literals and capacity hints
// =============================================================================

impl<T, const N: usize> TryFrom<[T; N]> for SimpleVec<T> {
    type Error = SimpleVecError;

    fn try_from(items: [T; N]) -> Result<Self, Self::Error> {
        let buffer = ArrayBuffer::try_from_exact_iter(items.into_iter())?;
        Ok(Self::from_parts(buffer, N))
    }
}

impl<T> TryFrom<ReserveProxy> for SimpleVec<T>
where
    T: Default,
{
    type Error = SimpleVecError;

    fn try_from(proxy: ReserveProxy) -> Result<Self, Self::Error> {
        Self::with_capacity(proxy.capacity())
    }
}

// =============================================================================
// Comparison
// =============================================================================

impl<T: PartialEq> PartialEq for SimpleVec<T> {
    fn eq(&self, other: &Self) -> bool {
        // Spare slots and capacity do not participate.
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVec<T> {}

impl<T: PartialOrd> PartialOrd for SimpleVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<'a, T> IntoIterator for &'a SimpleVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> IntoIterator for SimpleVec<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    /// Yields the live elements by value. Spare slots are dropped up front.
    fn into_iter(mut self) -> Self::IntoIter {
        let mut items = self.buffer.release().into_vec();
        items.truncate(self.len);
        items.into_iter()
    }
}
