use maze_graph::data_structures::DynamicArray;
use maze_graph::Error;

#[test]
fn test_push_doubles_capacity() {
    let mut array = DynamicArray::new();
    assert_eq!(array.capacity(), 0);

    let mut seen = Vec::new();
    for i in 0..9 {
        array.push(i).unwrap();
        seen.push(array.capacity());
    }

    assert_eq!(seen, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
    assert_eq!(array.len(), 9);
    assert_eq!(array.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_with_capacity_and_filled() {
    let array: DynamicArray<u8> = DynamicArray::with_capacity(5).unwrap();
    assert!(array.is_empty());
    assert_eq!(array.capacity(), 5);

    let filled = DynamicArray::filled(3, 'x').unwrap();
    assert_eq!(filled.as_slice(), &['x', 'x', 'x']);
    assert_eq!(filled.capacity(), 3);
}

#[test]
fn test_insert_remove_and_reverse() {
    let mut array = DynamicArray::from(vec![1, 3, 4]);
    array.insert(1, 2).unwrap();
    array.insert(4, 5).unwrap();
    assert_eq!(array.as_slice(), &[1, 2, 3, 4, 5]);

    assert!(matches!(array.insert(9, 0), Err(Error::IndexOutOfRange(9))));

    assert_eq!(array.remove(0), Some(1));
    assert_eq!(array.remove(10), None);
    array.reverse();
    assert_eq!(array.as_slice(), &[5, 4, 3, 2]);
    assert_eq!(array.first(), Some(&5));
    assert_eq!(array.last(), Some(&2));
    assert_eq!(array.pop(), Some(2));
    assert_eq!(array[0], 5);
}

#[test]
fn test_clear_keeps_capacity() {
    let mut array = DynamicArray::new();
    for i in 0..6 {
        array.push(i).unwrap();
    }
    let capacity = array.capacity();
    array.clear();
    assert!(array.is_empty());
    assert_eq!(array.capacity(), capacity);
}

#[test]
fn test_equality_ignores_capacity() {
    let mut grown = DynamicArray::new();
    grown.push(1).unwrap();
    grown.push(2).unwrap();
    grown.push(3).unwrap();
    let exact = DynamicArray::from(vec![1, 2, 3]);
    assert_ne!(grown.capacity(), exact.capacity());
    assert_eq!(grown, exact);
}

#[test]
fn test_oversized_request_reports_allocation_error() {
    let result: Result<DynamicArray<u64>, Error> = DynamicArray::with_capacity(usize::MAX / 2);
    assert!(matches!(result, Err(Error::Allocation { .. })));
}

#[test]
fn test_clone_keeps_reserved_storage() {
    let mut original = DynamicArray::with_capacity(8).unwrap();
    original.push(5u32).unwrap();

    let mut copy = original.clone();
    assert_eq!(copy, original);
    assert_eq!(copy.capacity(), 8);

    // Filling the reserved room does not grow the copy
    for value in 0..7 {
        copy.push(value).unwrap();
    }
    assert_eq!(copy.capacity(), 8);
    assert!(copy.into_vec().capacity() >= 8, "clone must hold the capacity it reports");
    assert_eq!(original.len(), 1);
}
