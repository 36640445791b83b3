//! Iteration support for [`DynamicArray`].
//!
//! Besides [`begin`](DynamicArray::begin)/[`end`](DynamicArray::end), the
//! array plugs into the standard iterator traits. Collecting and extending
//! go through [`push_back`](DynamicArray::push_back), so capacity follows
//! the doubling policy rather than the iterator's size hint.

use std::slice;
use std::vec;

use crate::array::DynamicArray;

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Vec::from(self).into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_grows_by_doubling() {
        let arr: DynamicArray<u32> = (0..5).collect();
        assert_eq!(arr.data(), &[0, 1, 2, 3, 4]);
        assert_eq!(arr.capacity(), 8);
    }

    #[test]
    fn extend_appends() {
        let mut arr: DynamicArray<i32> = [1, 2].into();
        arr.extend([3, 4]);
        arr.extend(&[5]);
        assert_eq!(arr.data(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn borrowed_iteration_in_order() {
        let arr: DynamicArray<i32> = [3, 1, 2].into();
        let seen: Vec<i32> = (&arr).into_iter().copied().collect();
        assert_eq!(seen, [3, 1, 2]);
    }

    #[test]
    fn mutable_iteration_updates_elements() {
        let mut arr: DynamicArray<i32> = [1, 2, 3].into();
        for value in &mut arr {
            *value *= 10;
        }
        assert_eq!(arr.data(), &[10, 20, 30]);
    }

    #[test]
    fn owned_iteration_skips_popped_elements() {
        let mut arr: DynamicArray<String> = ["a", "b", "c"].map(String::from).into();
        arr.pop_back().unwrap();
        let owned: Vec<String> = arr.into_iter().collect();
        assert_eq!(owned, ["a", "b"]);
    }
}
