//! Capacity growth policy.
//!
//! Appending into a full array doubles its capacity (an empty allocation
//! grows to a single slot). Starting from zero, `N` appends therefore
//! reallocate `O(log N)` times: `0 → 1 → 2 → 4 → 8 → …`.

/// Capacity to grow to when an array with `current` slots is full.
///
/// # Panics
///
/// Panics if doubling overflows `usize`. Such a capacity could never be
/// allocated, so this is treated like allocation failure.
pub fn grow_capacity(current: usize) -> usize {
    if current == 0 {
        return 1;
    }
    current.checked_mul(2).expect("dynamic array capacity overflow")
}
