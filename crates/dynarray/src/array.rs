//! The [`DynamicArray`] container.
//!
//! A `DynamicArray<T>` owns one contiguous allocation and tracks two
//! numbers: its logical length (elements `[0, len)`) and its capacity
//! (slots reserved for use). `len <= capacity` holds in every reachable
//! state. Capacity only changes through an explicit reallocation, which
//! happens when an append or insert finds the array full, when
//! [`reserve`](DynamicArray::reserve) or [`resize`](DynamicArray::resize)
//! asks for more room, or when the contents are replaced wholesale.

use std::fmt;
use std::mem;
use std::ops::Range;
use std::slice;

use crate::error::ArrayError;
use crate::growth::grow_capacity;

/// A growable, contiguous array with explicit capacity control.
///
/// Appends are amortised `O(1)`: a full array doubles its capacity before
/// accepting a new element. Capacity never shrinks on its own; removing
/// elements or calling [`clear`](Self::clear) keeps the allocation.
///
/// The array performs no internal synchronisation. It is `Send`/`Sync`
/// exactly when `T` is, and shared mutation needs an external lock.
///
/// # Example
///
/// ```rust
/// use dynarray::DynamicArray;
///
/// let mut arr = DynamicArray::builder().with_values([1, 2, 3]).build();
/// arr.insert(1, 99).unwrap();
/// assert_eq!(arr.data(), &[1, 99, 2, 3]);
/// assert_eq!(arr.erase(0), Ok(1));
/// assert_eq!(arr.to_string(), "Vector[99 2 3]");
/// ```
pub struct DynamicArray<T> {
    /// Logical elements. The allocation behind it always has room for at
    /// least `capacity` elements.
    data: Vec<T>,
    /// Slots reserved for use. Never below `data.len()`.
    capacity: usize,
}

// ── Construction ───────────────────────────────────────────────────

impl<T> DynamicArray<T> {
    /// Create an empty array with no allocation.
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
        }
    }

    /// Create an empty array with exactly `capacity` reserved slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Replace the contents with `data`, setting capacity to its length.
    pub(crate) fn set_contents(&mut self, data: Vec<T>) {
        self.capacity = data.len();
        self.data = data;
    }

    /// Take the current contents out, leaving the array empty.
    ///
    /// Capacity is reset to zero together with the contents.
    pub(crate) fn take_contents(&mut self) -> Vec<T> {
        self.capacity = 0;
        mem::take(&mut self.data)
    }

    /// Move the logical elements into a fresh allocation of exactly
    /// `new_capacity` slots and adopt it.
    ///
    /// Elements are moved, never cloned. The old allocation is freed.
    pub(crate) fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.data.len());
        let mut fresh = Vec::with_capacity(new_capacity);
        fresh.append(&mut self.data);
        log::trace!(
            "dynamic array reallocated: {} -> {} slots ({} live)",
            self.capacity,
            new_capacity,
            fresh.len()
        );
        self.data = fresh;
        self.capacity = new_capacity;
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ── Queries ────────────────────────────────────────────────────────

impl<T> DynamicArray<T> {
    /// Number of logical elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Number of slots reserved for use.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bounds-checked access to the element at `index`.
    ///
    /// Returns [`ArrayError::OutOfBounds`] unless `index < len`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.len();
        self.data
            .get(index)
            .ok_or(ArrayError::OutOfBounds { index, len })
    }

    /// Bounds-checked mutable access to the element at `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len();
        self.data
            .get_mut(index)
            .ok_or(ArrayError::OutOfBounds { index, len })
    }

    /// First element, or [`ArrayError::EmptyContainer`].
    pub fn front(&self) -> Result<&T, ArrayError> {
        self.data.first().ok_or(ArrayError::EmptyContainer)
    }

    /// Mutable first element, or [`ArrayError::EmptyContainer`].
    pub fn front_mut(&mut self) -> Result<&mut T, ArrayError> {
        self.data.first_mut().ok_or(ArrayError::EmptyContainer)
    }

    /// Last element, or [`ArrayError::EmptyContainer`].
    pub fn back(&self) -> Result<&T, ArrayError> {
        self.data.last().ok_or(ArrayError::EmptyContainer)
    }

    /// Mutable last element, or [`ArrayError::EmptyContainer`].
    pub fn back_mut(&mut self) -> Result<&mut T, ArrayError> {
        self.data.last_mut().ok_or(ArrayError::EmptyContainer)
    }

    /// View over exactly the logical elements `[0, len)`.
    ///
    /// The view borrows the array, so it cannot outlive a later call that
    /// might reallocate.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable view over exactly the logical elements `[0, len)`.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Start of the half-open index range over logical elements. Always 0.
    #[inline]
    pub fn begin(&self) -> usize {
        0
    }

    /// End of the half-open index range over logical elements (`len`).
    #[inline]
    pub fn end(&self) -> usize {
        self.len()
    }

    /// The index range `begin()..end()`.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.begin()..self.end()
    }

    /// Iterator over the logical elements in order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Mutable iterator over the logical elements in order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

// ── Mutation ───────────────────────────────────────────────────────

impl<T> DynamicArray<T> {
    /// Append `value`, doubling capacity first if the array is full.
    pub fn push_back(&mut self, value: T) {
        if self.len() == self.capacity {
            self.reallocate(grow_capacity(self.capacity));
        }
        self.data.push(value);
    }

    /// Remove and return the last element.
    ///
    /// Capacity is unchanged. Returns [`ArrayError::EmptyContainer`] on an
    /// empty array.
    pub fn pop_back(&mut self) -> Result<T, ArrayError> {
        self.data.pop().ok_or(ArrayError::EmptyContainer)
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` appends. A full array doubles its capacity before
    /// the shift. Fails with [`ArrayError::OutOfBounds`] if `index > len`,
    /// leaving the array untouched.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        let len = self.len();
        if index > len {
            return Err(ArrayError::OutOfBounds { index, len });
        }
        if len == self.capacity {
            self.reallocate(grow_capacity(self.capacity));
        }
        self.data.insert(index, value);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting `[index + 1, len)`
    /// one slot left.
    ///
    /// Fails with [`ArrayError::OutOfBounds`] unless `index < len`.
    pub fn erase(&mut self, index: usize) -> Result<T, ArrayError> {
        let len = self.len();
        if index >= len {
            return Err(ArrayError::OutOfBounds { index, len });
        }
        Ok(self.data.remove(index))
    }

    /// Remove every element. Capacity and allocation are kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Grow capacity to exactly `new_capacity` if it is larger than the
    /// current capacity. Never shrinks.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity {
            self.reallocate(new_capacity);
        }
    }

    /// Exchange contents, length and capacity with `other` in `O(1)`.
    ///
    /// Only the bookkeeping moves; no element is cloned or relocated.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Replace the entire contents with `values`.
    ///
    /// Afterwards `len == capacity == ` the number of values supplied.
    pub fn assign<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.set_contents(values.into_iter().collect());
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Set the logical length to `new_len`.
    ///
    /// Growing past capacity reserves exactly `new_len` slots first. Newly
    /// exposed slots `[old_len, new_len)` are filled with clones of
    /// `value`; shrinking truncates and drops the removed elements.
    pub fn resize(&mut self, new_len: usize, value: T) {
        self.reserve(new_len);
        self.data.resize(new_len, value);
    }
}

// ── Formatting ─────────────────────────────────────────────────────

/// Renders as `Vector[a b c]`, logical elements in order.
impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Vector[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("elements", &self.data)
            .finish()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
        }
    }
}
