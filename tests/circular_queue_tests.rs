use maze_graph::data_structures::CircularQueue;
use maze_graph::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

#[test]
fn test_fifo_order() {
    let mut queue = CircularQueue::new();
    for i in 0..5 {
        queue.push(i).unwrap();
    }
    assert_eq!(queue.len(), 5);
    assert_eq!(*queue.front().unwrap(), 0);
    assert_eq!(*queue.back().unwrap(), 4);

    let drained: Vec<i32> = std::iter::from_fn(|| queue.pop()).collect();
    assert_eq!(drained, vec![0, 1, 2, 3, 4]);
    assert!(queue.is_empty());
}

#[test]
fn test_growth_doubles_from_one() {
    let mut queue = CircularQueue::new();
    assert_eq!(queue.capacity(), 0);
    let mut capacities = Vec::new();
    for i in 0..5 {
        queue.push(i).unwrap();
        capacities.push(queue.capacity());
    }
    assert_eq!(capacities, vec![1, 2, 4, 4, 8]);
}

#[test]
fn test_growth_after_wraparound_keeps_order() {
    let mut queue = CircularQueue::with_capacity(4).unwrap();
    for i in 0..4 {
        queue.push(i).unwrap();
    }
    // Head moves to the middle of the ring, tail wraps around
    queue.pop();
    queue.pop();
    queue.push(4).unwrap();
    queue.push(5).unwrap();
    assert_eq!(queue.capacity(), 4);

    // Full ring with a wrapped tail: this push must relocate everything
    queue.push(6).unwrap();
    assert_eq!(queue.capacity(), 8);

    let items: Vec<i32> = queue.iter().copied().collect();
    assert_eq!(items, vec![2, 3, 4, 5, 6]);
    assert_eq!(*queue.front().unwrap(), 2);
    assert_eq!(*queue.back().unwrap(), 6);
}

#[test]
fn test_empty_access_and_pop() {
    let mut queue: CircularQueue<u8> = CircularQueue::new();
    assert!(matches!(queue.front(), Err(Error::EmptyAccess(_))));
    assert!(matches!(queue.back(), Err(Error::EmptyAccess(_))));
    assert_eq!(queue.pop(), None);
    assert_eq!(queue.len(), 0, "popping an empty queue must not underflow");

    queue.push(7).unwrap();
    queue.pop();
    assert!(matches!(queue.front_mut(), Err(Error::EmptyAccess(_))));
}

#[test]
fn test_front_and_back_mut() {
    let mut queue = CircularQueue::new();
    queue.push(String::from("a")).unwrap();
    queue.push(String::from("b")).unwrap();
    queue.front_mut().unwrap().push('!');
    queue.back_mut().unwrap().push('?');
    assert_eq!(queue.pop().as_deref(), Some("a!"));
    assert_eq!(queue.pop().as_deref(), Some("b?"));
}

#[test]
fn test_clear_keeps_storage() {
    let mut queue = CircularQueue::new();
    for i in 0..10 {
        queue.push(i).unwrap();
    }
    let capacity = queue.capacity();
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.capacity(), capacity);

    queue.push(42).unwrap();
    assert_eq!(*queue.front().unwrap(), 42);
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_random_operations_match_vecdeque() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut queue = CircularQueue::new();
    let mut reference = VecDeque::new();
    let mut pushes = 0usize;
    let mut pops = 0usize;

    for step in 0..5_000u32 {
        if rng.gen_bool(0.6) {
            queue.push(step).unwrap();
            reference.push_back(step);
            pushes += 1;
        } else {
            let expected = reference.pop_front();
            if expected.is_some() {
                pops += 1;
            }
            assert_eq!(queue.pop(), expected);
        }

        assert_eq!(queue.len(), pushes - pops);
        assert!(queue.len() <= queue.capacity());
        assert_eq!(queue.front().ok(), reference.front());
        assert_eq!(queue.back().ok(), reference.back());
    }
}

#[test]
fn test_oversized_request_reports_allocation_error() {
    let result: Result<CircularQueue<u64>, Error> = CircularQueue::with_capacity(usize::MAX / 2);
    assert!(matches!(result, Err(Error::Allocation { requested }) if requested == usize::MAX / 2));

    let queue: CircularQueue<u64> = CircularQueue::with_capacity(4).unwrap();
    assert_eq!(queue.capacity(), 4);
    assert!(queue.is_empty());
}
