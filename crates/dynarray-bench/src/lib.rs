//! Benchmark workloads for dynarray.
//!
//! Shared setup so benchmarks and ad-hoc profiling runs exercise the same
//! shapes of array:
//!
//! - [`filled`]: an array of `len` sequential integers at exact capacity
//! - [`push_n`]: `n` appends starting from an empty array

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarray::DynamicArray;

/// Array holding `0..len` with `capacity == len`.
pub fn filled(len: usize) -> DynamicArray<u64> {
    DynamicArray::builder()
        .with_values(0..len as u64)
        .build()
}

/// Append `n` sequential values to a fresh array and return it.
pub fn push_n(n: usize) -> DynamicArray<u64> {
    let mut arr = DynamicArray::new();
    for i in 0..n as u64 {
        arr.push_back(i);
    }
    arr
}
