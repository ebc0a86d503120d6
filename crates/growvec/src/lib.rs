//! Growable contiguous sequence container over an owned fixed-size
//! buffer.
//!
//! The crate provides one container, [`GrowVec`], layered on the
//! [`growvec_buf::SlotBuffer`] storage primitive:
//!
//! ```text
//! GrowVec<T>            (length bookkeeping, growth, insert/erase,
//! └── SlotBuffer<T>      ownership transfer, comparisons, iteration)
//!                       (one contiguous allocation, unchecked slot
//!                        access, O(1) ownership swap)
//! ```
//!
//! Capacity grows by wholesale buffer replacement: a full-size fresh
//! buffer is built, live elements are moved across, and ownership is
//! swapped. Incremental insertion doubles capacity
//! ([`growth::grow`]); explicit [`GrowVec::resize`] and
//! [`GrowVec::reserve`] reallocate to the exact requested amount.
//!
//! # Quick start
//!
//! ```rust
//! use growvec::GrowVec;
//!
//! let mut v: GrowVec<i32> = (1..=3).collect();
//! v.push(4);
//! assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
//! assert!(v.at(9).is_err());
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod growth;
pub mod vec;

// Public re-exports for the primary API surface.
pub use error::AccessError;
pub use vec::GrowVec;
