//! Conversions, indexing and comparison for [`DynamicArray`].
//!
//! Equality looks at the logical elements only; two arrays holding the
//! same values compare equal whatever their capacities.

use std::ops::{Index, IndexMut};

use crate::array::DynamicArray;

// ── Conversions ────────────────────────────────────────────────────

/// Adopts the vector's elements; capacity is set to their count.
impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(values: Vec<T>) -> Self {
        let mut arr = Self::new();
        arr.set_contents(values);
        arr
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(values: [T; N]) -> Self {
        Self::from(Vec::from(values))
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(values: &[T]) -> Self {
        Self::from(values.to_vec())
    }
}

impl<T> From<DynamicArray<T>> for Vec<T> {
    fn from(mut arr: DynamicArray<T>) -> Self {
        arr.take_contents()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.data()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.data_mut()
    }
}

// ── Indexing ───────────────────────────────────────────────────────

/// Unchecked-style access; panics when `index >= len`. Use
/// [`at`](DynamicArray::at) for a recoverable error instead.
impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data()[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data_mut()[index]
    }
}

// ── Comparison ─────────────────────────────────────────────────────

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data() == other.data()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for DynamicArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.data() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynamicArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.data() == other.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_sets_capacity_to_len() {
        let arr = DynamicArray::from(vec![1, 2, 3]);
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.capacity(), 3);
    }

    #[test]
    fn from_slice_clones() {
        let words = ["x".to_string(), "y".to_string()];
        let arr = DynamicArray::from(&words[..]);
        assert_eq!(arr, words);
    }

    #[test]
    fn into_vec_returns_logical_elements() {
        let mut arr = DynamicArray::from([1, 2, 3]);
        arr.pop_back().unwrap();
        assert_eq!(Vec::from(arr), vec![1, 2]);
    }

    #[test]
    fn index_reads_and_writes() {
        let mut arr = DynamicArray::from([1, 2, 3]);
        arr[1] = 20;
        assert_eq!(arr[1], 20);
    }

    #[test]
    #[should_panic]
    fn index_past_len_panics() {
        let mut arr = DynamicArray::from([1, 2, 3]);
        arr.pop_back().unwrap();
        let _ = arr[2];
    }

    #[test]
    fn equality_ignores_capacity() {
        let mut a = DynamicArray::from([1, 2]);
        let b = DynamicArray::from([1, 2]);
        a.reserve(100);
        assert_eq!(a, b);
        a.push_back(3);
        assert_ne!(a, b);
    }

    #[test]
    fn compares_with_slices_and_arrays() {
        let arr = DynamicArray::from([1, 2]);
        assert_eq!(arr, [1, 2]);
        assert!(arr == *[1, 2].as_slice());
        let view: &[i32] = arr.as_ref();
        assert_eq!(view, &[1, 2]);
    }
}
