//! Construction options for [`DynamicArray`].
//!
//! An array is built by applying a list of [`ArrayOption`] directives, in
//! order, to an initially empty instance. Later directives see the result
//! of earlier ones, so they can extend it ([`ArrayOption::Fill`]) or
//! replace it outright ([`ArrayOption::Values`], [`ArrayOption::Size`],
//! [`ArrayOption::FromSlice`]).
//!
//! [`ArrayBuilder`] is the chainable front end over the same directives:
//!
//! ```rust
//! use dynarray::{ArrayOption, DynamicArray};
//!
//! let built = DynamicArray::builder().with_values([1, 2]).with_fill(2, 0).build();
//! let applied = DynamicArray::from_options([
//!     ArrayOption::Values(vec![1, 2]),
//!     ArrayOption::Fill(2, 0),
//! ]);
//! assert_eq!(built, applied);
//! assert_eq!(built.data(), &[1, 2, 0, 0]);
//! ```

use std::iter;

use smallvec::SmallVec;

use crate::array::DynamicArray;

/// A single construction directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayOption<T> {
    /// Reallocate to `max(n, len)` slots. Existing contents are kept.
    Capacity(usize),
    /// Replace the contents with these values; `len == capacity == values.len()`.
    Values(Vec<T>),
    /// Replace the contents with `n` clones of the value; `len == capacity == n`.
    Size(usize, T),
    /// Append `n` clones of the value; `capacity` becomes the new length.
    Fill(usize, T),
    /// Replace the contents with a copy of a slice; `len == capacity == slice.len()`.
    FromSlice(Vec<T>),
}

impl<T: Clone> ArrayOption<T> {
    /// Apply this directive to a partially built array.
    pub fn apply(self, arr: &mut DynamicArray<T>) {
        match self {
            Self::Capacity(n) => {
                let target = n.max(arr.len());
                if target != arr.capacity() {
                    arr.reallocate(target);
                }
            }
            Self::Values(values) | Self::FromSlice(values) => arr.set_contents(values),
            Self::Size(n, value) => arr.set_contents(vec![value; n]),
            Self::Fill(n, value) => {
                let mut data = arr.take_contents();
                data.extend(iter::repeat_n(value, n));
                arr.set_contents(data);
            }
        }
    }
}

/// Chainable builder collecting [`ArrayOption`]s.
///
/// Nothing is allocated for the array until [`build`](Self::build) runs the
/// directives in the order they were added.
#[derive(Clone, Debug)]
pub struct ArrayBuilder<T> {
    options: SmallVec<[ArrayOption<T>; 4]>,
}

impl<T> ArrayBuilder<T> {
    /// Create a builder with no directives. Builds an empty array.
    pub fn new() -> Self {
        Self {
            options: SmallVec::new(),
        }
    }

    /// Append an arbitrary directive.
    pub fn option(mut self, option: ArrayOption<T>) -> Self {
        self.options.push(option);
        self
    }

    /// Reserve `capacity` slots. See [`ArrayOption::Capacity`].
    pub fn with_capacity(self, capacity: usize) -> Self {
        self.option(ArrayOption::Capacity(capacity))
    }

    /// Start from exactly these values. See [`ArrayOption::Values`].
    pub fn with_values<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.option(ArrayOption::Values(values.into_iter().collect()))
    }

    /// Start from `len` clones of `value`. See [`ArrayOption::Size`].
    pub fn with_size(self, len: usize, value: T) -> Self {
        self.option(ArrayOption::Size(len, value))
    }

    /// Append `count` clones of `value`. See [`ArrayOption::Fill`].
    pub fn with_fill(self, count: usize, value: T) -> Self {
        self.option(ArrayOption::Fill(count, value))
    }

    /// Number of directives collected so far.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// `true` if no directives have been added.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl<T: Clone> ArrayBuilder<T> {
    /// Start from a copy of `slice`. See [`ArrayOption::FromSlice`].
    pub fn from_slice(self, slice: &[T]) -> Self {
        self.option(ArrayOption::FromSlice(slice.to_vec()))
    }

    /// Apply every directive left to right and return the array.
    pub fn build(self) -> DynamicArray<T> {
        DynamicArray::from_options(self.options)
    }
}

impl<T> Default for ArrayBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynamicArray<T> {
    /// Start a chainable [`ArrayBuilder`].
    pub fn builder() -> ArrayBuilder<T> {
        ArrayBuilder::new()
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Build an array by applying `options` in order to an empty instance.
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = ArrayOption<T>>,
    {
        let mut arr = Self::new();
        for option in options {
            option.apply(&mut arr);
        }
        arr
    }
}
