//! Capacity growth policy.
//!
//! A single decision point so the amortized-growth schedule can be
//! tuned and tested independently of the insert/erase logic. Only
//! [`GrowVec::insert`](crate::GrowVec::insert) consults it, and only
//! when the container is full; explicit `resize`/`reserve` calls
//! reallocate to the exact requested amount instead.

/// Next capacity for a full container currently holding `len` elements.
///
/// Doubles the element count, with a floor of 1 for the empty
/// container, yielding the 1, 2, 4, 8, … envelope.
pub fn grow(len: usize) -> usize {
    if len == 0 {
        1
    } else {
        len * 2
    }
}
