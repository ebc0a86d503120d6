//! Fixed-size owned buffer primitive backing the growvec container.
//!
//! This is the leaf crate with zero internal dependencies. A
//! [`SlotBuffer`] owns a single contiguous allocation of
//! default-initialized slots. It never grows in place: the container
//! above it replaces buffers wholesale and exchanges ownership with
//! [`SlotBuffer::swap`]. Exactly one owner exists per allocation;
//! dropping the buffer releases all of its storage.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt;
use std::ops::{Index, IndexMut};

/// A fixed-size, exclusively owned block of element slots.
///
/// The slot count is chosen at construction and never changes for the
/// lifetime of the buffer. Slot access is unchecked in the contract
/// sense: callers guarantee `index < len()`, and a violation is a
/// bounds panic rather than a recoverable error.
pub struct SlotBuffer<T> {
    slots: Box<[T]>,
}

impl<T: Default> SlotBuffer<T> {
    /// Allocate a buffer of exactly `len` default-initialized slots.
    ///
    /// `new(0)` is valid and allocation-free: it yields a usable,
    /// indexable zero-length buffer.
    pub fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| T::default()).collect(),
        }
    }
}

impl<T> SlotBuffer<T> {
    /// Number of slots in the allocation.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True iff the buffer holds zero slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Shared access to slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn get(&self, index: usize) -> &T {
        &self.slots[index]
    }

    /// Mutable access to slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }

    /// Overwrite slot `index` with `value`, dropping the previous
    /// occupant.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) {
        self.slots[index] = value;
    }

    /// View of the whole allocation.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Mutable view of the whole allocation.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Exchange storage ownership with another buffer in O(1).
    ///
    /// Both buffers' states update together; there is no observable
    /// partially-transferred state. Never fails.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.slots, &mut other.slots);
    }
}

impl<T> Default for SlotBuffer<T> {
    fn default() -> Self {
        Self { slots: Box::new([]) }
    }
}

impl<T> Index<usize> for SlotBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for SlotBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index)
    }
}

impl<T: fmt::Debug> fmt::Debug for SlotBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotBuffer")
            .field("len", &self.slots.len())
            .finish()
    }
}
