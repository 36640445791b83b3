//! A growable, contiguous array with explicit capacity control.
//!
//! [`DynamicArray<T>`] keeps its elements in one owned allocation and
//! tracks a logical length alongside a capacity. It offers bounds-checked
//! random access, amortised `O(1)` append, shifting insert and erase, and
//! explicit [`reserve`](DynamicArray::reserve) /
//! [`resize`](DynamicArray::resize) control. Arrays are constructed by
//! applying [`ArrayOption`] directives in order, usually through an
//! [`ArrayBuilder`].
//!
//! # Architecture
//!
//! ```text
//! DynamicArray<T>
//! ├── data: Vec<T>        logical elements [0, len)
//! ├── capacity: usize     reserved slots, >= len
//! └── growth policy       0 → 1, otherwise double (growth.rs)
//! ```
//!
//! Fallible operations return [`ArrayError`]: `OutOfBounds` for index
//! violations, `EmptyContainer` for `front`/`back`/`pop_back` on an empty
//! array. Everything else is infallible short of allocation failure.
//!
//! # Quick start
//!
//! ```rust
//! use dynarray::{ArrayError, DynamicArray};
//!
//! let mut arr = DynamicArray::builder().with_capacity(2).build();
//! arr.push_back(1);
//! arr.push_back(2);
//! arr.push_back(3);
//! assert_eq!(arr.capacity(), 4);
//!
//! assert_eq!(arr.at(3), Err(ArrayError::OutOfBounds { index: 3, len: 3 }));
//! arr.clear();
//! assert_eq!(arr.front(), Err(ArrayError::EmptyContainer));
//! assert_eq!(arr.capacity(), 4);
//! ```
//!
//! # Logging
//!
//! Reallocations are reported through the [`log`] facade at `trace`
//! level. The crate never installs a logger.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
mod convert;
pub mod error;
pub mod growth;
mod iter;

pub use array::DynamicArray;
pub use config::{ArrayBuilder, ArrayOption};
pub use error::ArrayError;

/// Dynamic array of signed 64-bit integers.
pub type IntArray = DynamicArray<i64>;

/// Dynamic array of owned strings.
pub type StringArray = DynamicArray<String>;

/// Dynamic array of 64-bit floats.
pub type FloatArray = DynamicArray<f64>;
