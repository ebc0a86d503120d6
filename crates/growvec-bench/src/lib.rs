//! Benchmark fixtures for the growvec container.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use growvec::GrowVec;

/// Build a container of `len` sequential integers via repeated push,
/// exercising the amortized growth path.
pub fn sequential(len: usize) -> GrowVec<u64> {
    let mut v = GrowVec::new();
    for i in 0..len {
        v.push(i as u64);
    }
    v
}

/// Build a container of `len` sequential integers with capacity
/// reserved up front, so no reallocation occurs while filling.
pub fn sequential_reserved(len: usize) -> GrowVec<u64> {
    let mut v = GrowVec::with_capacity(len);
    for i in 0..len {
        v.push(i as u64);
    }
    v
}
