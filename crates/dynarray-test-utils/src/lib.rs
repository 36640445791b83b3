//! Test utilities and fixtures for dynarray development.
//!
//! Provides a clone-counting element type ([`Tracked`]), a sequence of
//! array operations ([`Op`]) with proptest strategies to generate them,
//! and [`check_against_model`] which replays operations on both a
//! [`DynamicArray`] and a plain `Vec` reference model.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{CloneCounter, Tracked};

use dynarray::{ArrayError, DynamicArray};
use proptest::prelude::*;

/// One mutating operation on a `DynamicArray<i32>`.
///
/// Indices are raw so strategies can produce out-of-range values and
/// exercise the error paths.
#[derive(Clone, Debug)]
pub enum Op {
    PushBack(i32),
    PopBack,
    Insert(usize, i32),
    Erase(usize),
    Clear,
    Reserve(usize),
    Resize(usize, i32),
    Assign(Vec<i32>),
}

/// Strategy over single operations with indices up to `max_index`.
pub fn arb_op(max_index: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::PushBack),
        2 => Just(Op::PopBack),
        3 => (0..=max_index, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => (0..=max_index).prop_map(Op::Erase),
        1 => Just(Op::Clear),
        1 => (0..=max_index).prop_map(Op::Reserve),
        1 => (0..=max_index, any::<i32>()).prop_map(|(n, v)| Op::Resize(n, v)),
        1 => prop::collection::vec(any::<i32>(), 0..8).prop_map(Op::Assign),
    ]
}

/// Strategy over sequences of up to `max_len` operations.
pub fn arb_ops(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(arb_op(16), 0..max_len)
}

/// Apply `op` to the array under test, returning the error it produced.
pub fn apply(arr: &mut DynamicArray<i32>, op: &Op) -> Result<(), ArrayError> {
    match op {
        Op::PushBack(v) => arr.push_back(*v),
        Op::PopBack => {
            arr.pop_back()?;
        }
        Op::Insert(i, v) => arr.insert(*i, *v)?,
        Op::Erase(i) => {
            arr.erase(*i)?;
        }
        Op::Clear => arr.clear(),
        Op::Reserve(n) => arr.reserve(*n),
        Op::Resize(n, v) => arr.resize(*n, *v),
        Op::Assign(values) => arr.assign(values.iter().copied()),
    }
    Ok(())
}

/// Apply `op` to the reference model. Returns `false` where the array is
/// expected to reject the operation.
pub fn apply_model(model: &mut Vec<i32>, op: &Op) -> bool {
    match op {
        Op::PushBack(v) => model.push(*v),
        Op::PopBack => return model.pop().is_some(),
        Op::Insert(i, v) => {
            if *i > model.len() {
                return false;
            }
            model.insert(*i, *v);
        }
        Op::Erase(i) => {
            if *i >= model.len() {
                return false;
            }
            model.remove(*i);
        }
        Op::Clear => model.clear(),
        Op::Reserve(_) => {}
        Op::Resize(n, v) => model.resize(*n, *v),
        Op::Assign(values) => *model = values.clone(),
    }
    true
}

/// Replay `ops` against a fresh array and a `Vec` model, checking after
/// every step that contents agree, failures agree, and `len <= capacity`.
pub fn check_against_model(ops: &[Op]) -> Result<(), TestCaseError> {
    let mut arr = DynamicArray::new();
    let mut model = Vec::new();
    for op in ops {
        let result = apply(&mut arr, op);
        let accepted = apply_model(&mut model, op);
        prop_assert_eq!(result.is_ok(), accepted, "op {:?}", op);
        prop_assert_eq!(arr.data(), model.as_slice(), "op {:?}", op);
        prop_assert!(arr.len() <= arr.capacity());
    }
    Ok(())
}
