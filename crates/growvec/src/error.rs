//! Container-specific error types.

use std::error::Error;
use std::fmt;

/// Errors from checked element access.
///
/// Only the checked accessors ([`GrowVec::at`] and [`GrowVec::at_mut`])
/// report failures this way; the indexed path treats an out-of-range
/// index as a contract violation and panics instead.
///
/// [`GrowVec::at`]: crate::GrowVec::at
/// [`GrowVec::at_mut`]: crate::GrowVec::at_mut
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessError {
    /// The requested index is at or beyond the live range.
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of live elements at the time of the request.
        len: usize,
    },
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl Error for AccessError {}
