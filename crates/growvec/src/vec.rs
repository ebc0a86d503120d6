//! The growable contiguous sequence container.
//!
//! [`GrowVec`] owns exactly one [`SlotBuffer`] and a live-element
//! count. Live elements occupy the prefix `[0, len)` of the buffer;
//! slots beyond `len` are allocated but logically absent, holding
//! unspecified leftover values that are never exposed as live data.
//! Capacity is the buffer's slot count, so the `capacity == buffer
//! length` invariant holds by construction.
//!
//! Capacity never grows in place. Whenever it must increase, a fresh
//! buffer is built to full size, the live prefix is moved across, and
//! the buffers exchange ownership ([`SlotBuffer::swap`]). A failure
//! mid-construction therefore never leaves the container partially
//! modified.

use std::fmt;
use std::mem;
use std::slice;

use growvec_buf::SlotBuffer;

use crate::error::AccessError;
use crate::growth;

/// A dynamically-resizable, contiguous-storage sequence container.
///
/// Elements live in a single owned allocation, with amortized-O(1)
/// [`push`](Self::push) via capacity doubling. Two instances never
/// share storage: [`Clone`] deep-copies, and moves (or
/// [`take`](Self::take)) transfer the buffer exclusively.
///
/// Element types must implement [`Default`] for the operations that
/// allocate or expose new slots, mirroring the buffer's
/// default-initialized storage model.
///
/// # Example
///
/// ```rust
/// use growvec::GrowVec;
///
/// let mut v = GrowVec::new();
/// v.push(1);
/// v.push(2);
/// v.push(3);
/// v.insert(1, 9);
/// assert_eq!(v.as_slice(), &[1, 9, 2, 3]);
/// v.erase(1);
/// v.pop();
/// assert_eq!(v.as_slice(), &[1, 2]);
/// ```
pub struct GrowVec<T> {
    slots: SlotBuffer<T>,
    len: usize,
}

impl<T> GrowVec<T> {
    /// Create an empty container: length 0, capacity 0, no allocation.
    pub fn new() -> Self {
        Self {
            slots: SlotBuffer::default(),
            len: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots. Always `>= len()`.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// True iff the container holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// View of the live range `[0, len)`.
    pub fn as_slice(&self) -> &[T] {
        &self.slots.as_slice()[..self.len]
    }

    /// Mutable view of the live range `[0, len)`.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots.as_mut_slice()[..self.len]
    }

    /// Iterator over the live range. Empty containers yield an empty
    /// iterator.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Mutable iterator over the live range.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Checked access to element `index`.
    ///
    /// Returns [`AccessError::OutOfRange`] when `index >= len()`; the
    /// error propagates to the caller rather than being clamped or
    /// defaulted.
    pub fn at(&self, index: usize) -> Result<&T, AccessError> {
        if index >= self.len {
            return Err(AccessError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.slots.get(index))
    }

    /// Checked mutable access to element `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, AccessError> {
        if index >= self.len {
            return Err(AccessError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.slots.get_mut(index))
    }

    /// Drop the logical contents: length becomes 0.
    ///
    /// Capacity and the underlying storage are retained; slots beyond
    /// the new length become leftover values.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Remove the last element, if any.
    ///
    /// A no-op on an empty container; never fails. The popped slot
    /// becomes a leftover value within the retained capacity.
    pub fn pop(&mut self) {
        if self.len > 0 {
            self.len -= 1;
        }
    }

    /// Remove the element at `index`, shifting everything after it one
    /// slot toward the front.
    ///
    /// Returns `index`, which now refers to the element that followed
    /// the erased one (or to the new end if the last element was
    /// erased).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        assert!(
            index < self.len,
            "erase index {index} out of bounds for length {}",
            self.len
        );
        self.slots.as_mut_slice()[index..self.len].rotate_left(1);
        self.len -= 1;
        index
    }

    /// Exchange buffer ownership, length, and capacity with `other` in
    /// O(1). Never fails; both instances' states update together.
    pub fn swap(&mut self, other: &mut Self) {
        self.slots.swap(&mut other.slots);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Move the contents out, leaving `self` in the empty state
    /// (length 0, capacity 0).
    ///
    /// This is the in-place ownership-transfer form for contexts that
    /// only hold a `&mut`; by-value moves transfer ownership natively.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Write each live element followed by a `,` separator into `out`,
    /// in iteration order.
    ///
    /// Diagnostics only; the output is not a stable format.
    pub fn dump<W: fmt::Write>(&self, out: &mut W) -> fmt::Result
    where
        T: fmt::Debug,
    {
        for item in self {
            write!(out, "{item:?},")?;
        }
        Ok(())
    }
}

impl<T: Default> GrowVec<T> {
    /// Create a container of `len` default-valued elements, with
    /// capacity equal to its length.
    pub fn with_len(len: usize) -> Self {
        Self {
            slots: SlotBuffer::new(len),
            len,
        }
    }

    /// Create an empty container with `capacity` slots pre-allocated.
    ///
    /// Length stays 0; the first `capacity` pushes cause no
    /// reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: SlotBuffer::new(capacity),
            len: 0,
        }
    }

    /// Create a container of `len` clones of `value`, with capacity
    /// equal to its length.
    pub fn filled(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut vec = Self::with_len(len);
        for slot in vec.as_mut_slice() {
            *slot = value.clone();
        }
        vec
    }

    /// Append `item` at the end, growing capacity per
    /// [`growth::grow`] when full.
    pub fn push(&mut self, item: T) {
        self.insert(self.len, item);
    }

    /// Insert `item` at `index`, shifting elements at or after it one
    /// slot toward the end.
    ///
    /// Valid positions run from 0 (prepend) through `len()` (append).
    /// If the container is full, capacity first grows to
    /// [`growth::grow`]`(len)` by wholesale reallocation. Returns the
    /// position of the inserted element, always equal to `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, item: T) -> usize {
        assert!(
            index <= self.len,
            "insert index {index} out of bounds for length {}",
            self.len
        );
        if self.len == self.capacity() {
            self.reallocate(growth::grow(self.len));
        }
        // Shift [index, len) one slot up; the leftover value from the
        // vacated tail slot rotates into `index` and is overwritten.
        self.slots.as_mut_slice()[index..=self.len].rotate_right(1);
        self.slots.set(index, item);
        self.len += 1;
        index
    }

    /// Set the live length to `new_len`.
    ///
    /// Growth beyond capacity reallocates to exactly `new_len` (no
    /// doubling) and default-initializes the exposed tail. Growth
    /// within capacity default-initializes the exposed slots in place.
    /// Shrinking only lowers the length; storage is retained for
    /// future growth.
    pub fn resize(&mut self, new_len: usize) {
        if new_len > self.capacity() {
            // The fresh buffer's tail slots are already default-valued.
            self.reallocate(new_len);
            self.len = new_len;
        } else if new_len > self.len {
            for slot in &mut self.slots.as_mut_slice()[self.len..new_len] {
                *slot = T::default();
            }
            self.len = new_len;
        } else {
            self.len = new_len;
        }
    }

    /// Ensure capacity is at least `new_capacity`.
    ///
    /// Reallocates to exactly `new_capacity` when it exceeds the
    /// current capacity, moving the live prefix across; length is
    /// unchanged. A no-op otherwise.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.reallocate(new_capacity);
        }
    }

    /// Replace the buffer with a fresh one of `new_capacity` slots and
    /// move the live prefix into it.
    ///
    /// The new buffer is built in full before ownership is exchanged,
    /// so the container is never observed partially moved. Callers
    /// guarantee `new_capacity >= len`.
    fn reallocate(&mut self, new_capacity: usize) {
        let mut fresh: SlotBuffer<T> = SlotBuffer::new(new_capacity);
        let live = &mut self.slots.as_mut_slice()[..self.len];
        for (dst, src) in fresh.as_mut_slice().iter_mut().zip(live) {
            mem::swap(dst, src);
        }
        self.slots.swap(&mut fresh);
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Clone for GrowVec<T> {
    /// Deep copy: a fresh buffer of exactly `self.len()` slots with
    /// every live element cloned in order. The clone's storage is
    /// fully independent of the original's.
    fn clone(&self) -> Self {
        let mut fresh = Self::with_len(self.len);
        for (dst, src) in fresh.as_mut_slice().iter_mut().zip(self.as_slice()) {
            *dst = src.clone();
        }
        fresh
    }

    /// Build the copy as a temporary first, then swap it in, so the
    /// destination is untouched if an element clone panics.
    fn clone_from(&mut self, source: &Self) {
        let mut fresh = source.clone();
        self.swap(&mut fresh);
    }
}

impl<T: Default> FromIterator<T> for GrowVec<T> {
    /// Collect elements in order, pre-reserving from the iterator's
    /// size hint. Exact-size sources yield `len() == capacity()`.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut vec = Self::with_capacity(lower);
        for item in iter {
            vec.push(item);
        }
        vec
    }
}

impl<T: Default, const N: usize> From<[T; N]> for GrowVec<T> {
    /// Move the array's elements in order; `len() == capacity() == N`.
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T> std::ops::Index<usize> for GrowVec<T> {
    type Output = T;

    /// Unchecked-contract access: callers guarantee `index < len()`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`; leftover slots beyond the live
    /// range are never readable through this path.
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> std::ops::IndexMut<usize> for GrowVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    /// Same length and element-wise equal in order. Capacity does not
    /// participate.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T: PartialOrd> PartialOrd for GrowVec<T> {
    /// Lexicographic over the live ranges.
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for GrowVec<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.dump(f)
    }
}
