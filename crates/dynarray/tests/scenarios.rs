use dynarray::{ArrayError, DynamicArray, FloatArray, IntArray, StringArray};
use dynarray_test_utils::CloneCounter;

#[test]
fn values_insert_erase_resize_clear() {
    let mut arr = DynamicArray::builder().with_values([1, 2, 3]).build();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr.at(1), Ok(&2));

    arr.insert(1, 99).unwrap();
    assert_eq!(arr, [1, 99, 2, 3]);
    assert_eq!(arr.len(), 4);

    arr.erase(0).unwrap();
    assert_eq!(arr, [99, 2, 3]);
    assert_eq!(arr.len(), 3);

    arr.resize(5, 0);
    assert_eq!(arr, [99, 2, 3, 0, 0]);
    assert_eq!(arr.len(), 5);
    assert!(arr.capacity() >= 5);

    let cap = arr.capacity();
    arr.clear();
    assert_eq!(arr.len(), 0);
    assert_eq!(arr.capacity(), cap);
}

#[test]
fn third_push_into_capacity_two_doubles_once() {
    let mut arr = DynamicArray::builder().with_capacity(2).build();
    let mut caps = Vec::new();
    for v in 1..=3 {
        arr.push_back(v);
        caps.push(arr.capacity());
    }
    assert_eq!(arr.len(), 3);
    assert_eq!(caps, [2, 2, 4]);
}

#[test]
fn swap_exchanges_without_cloning() {
    let counter = CloneCounter::new();
    let mut a = DynamicArray::from(vec![counter.track(1), counter.track(2)]);
    let mut b = DynamicArray::from(vec![counter.track(9)]);

    a.swap(&mut b);

    assert_eq!(a.len(), 1);
    assert_eq!(a.at(0).unwrap().value, 9);
    assert_eq!(b.len(), 2);
    assert_eq!(b.at(0).unwrap().value, 1);
    assert_eq!(b.at(1).unwrap().value, 2);
    assert_eq!(counter.clones(), 0);
}

#[test]
fn growth_moves_elements_without_cloning() {
    let counter = CloneCounter::new();
    let mut arr = DynamicArray::new();
    for i in 0..100 {
        arr.push_back(counter.track(i));
    }
    arr.insert(0, counter.track(-1)).unwrap();
    arr.reserve(1000);
    assert_eq!(arr.len(), 101);
    assert_eq!(counter.clones(), 0);
}

#[test]
fn empty_container_errors() {
    let mut arr: DynamicArray<u8> = DynamicArray::new();
    assert_eq!(arr.front(), Err(ArrayError::EmptyContainer));
    assert_eq!(arr.back(), Err(ArrayError::EmptyContainer));
    assert_eq!(arr.pop_back(), Err(ArrayError::EmptyContainer));
    assert!(arr.is_empty());
}

#[test]
fn bounds_enforced_on_non_empty() {
    let arr = DynamicArray::from([10, 20]);
    assert!(matches!(arr.at(arr.len()), Err(ArrayError::OutOfBounds { .. })));
    assert!(matches!(arr.at(usize::MAX), Err(ArrayError::OutOfBounds { .. })));
}

#[test]
fn errors_leave_array_usable() {
    let mut arr = DynamicArray::from([1]);
    assert!(arr.erase(5).is_err());
    assert!(arr.insert(5, 0).is_err());
    arr.push_back(2);
    assert_eq!(arr, [1, 2]);
}

#[test]
fn typed_aliases() {
    let ints: IntArray = DynamicArray::builder().with_size(2, 7).build();
    let floats: FloatArray = DynamicArray::builder().with_fill(1, 0.5).build();
    let strings: StringArray = DynamicArray::builder()
        .from_slice(&["a".to_string()])
        .build();
    assert_eq!(ints.to_string(), "Vector[7 7]");
    assert_eq!(floats.to_string(), "Vector[0.5]");
    assert_eq!(strings.to_string(), "Vector[a]");
}

#[test]
fn views_track_mutation() {
    let mut arr = DynamicArray::from([1, 2, 3]);
    arr.data_mut().reverse();
    assert_eq!(arr.data(), &[3, 2, 1]);
    arr.push_back(0);
    assert_eq!(arr.data(), &[3, 2, 1, 0]);
}
