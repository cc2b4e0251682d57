use heap_dict::utils::binary_heap::MinBinaryHeap;

#[test]
fn insert_pop_test() {
    let mut min_heap = MinBinaryHeap::new();

    min_heap.push(0, 10);
    min_heap.push(1, 8);
    min_heap.push(2, 12);
    min_heap.push(3, 7);

    assert_eq!(min_heap.len(), 4);
    assert!(min_heap.is_valid());

    let popped: Vec<(usize, u32)> = std::iter::from_fn(|| min_heap.pop())
        .map(|removal| (removal.entry.key, removal.entry.priority))
        .collect();

    assert_eq!(popped, vec![(3, 7), (1, 8), (0, 10), (2, 12)]);
    assert!(min_heap.is_empty());
}

#[test]
fn remove_test() {
    let mut min_heap = MinBinaryHeap::new();
    let mut handles = Vec::new();

    for (key, priority) in [(0, 5), (1, 3), (2, 9), (3, 1), (4, 7), (5, 2), (6, 8)] {
        handles.push(min_heap.push(key, priority));
    }

    // key 4 sits below the root, removing it climbs past its ancestors first
    let removal = min_heap.remove(handles[4]).unwrap();
    assert_eq!(removal.entry.key, 4);
    assert_eq!(removal.entry.priority, 7);
    assert!(min_heap.is_valid());

    let mut keys = Vec::new();
    while let Some(removal) = min_heap.pop() {
        keys.push(removal.entry.key);
        assert!(min_heap.is_valid());
    }

    assert_eq!(keys, vec![3, 5, 1, 0, 6, 2]);
}

#[test]
fn positions_follow_swaps_test() {
    let mut min_heap = MinBinaryHeap::new();

    for key in 0..50u32 {
        min_heap.push(key, (key * 37) % 50);
    }

    assert!(min_heap.is_valid());
    assert_eq!(min_heap.peek().map(|entry| entry.priority), Some(0));
    assert_eq!(min_heap.peek().map(|entry| entry.position), Some(0));

    for entry in min_heap.iter() {
        assert!(entry.position < min_heap.len());
    }
}

#[test]
fn ties_test() {
    let mut min_heap = MinBinaryHeap::new();

    for key in 0..100 {
        min_heap.push(key, 0);
    }

    while let Some(removal) = min_heap.pop() {
        assert_eq!(removal.entry.priority, 0);
        assert!(min_heap.is_valid());
    }
}

#[test]
fn clear_test() {
    let mut min_heap = MinBinaryHeap::new();
    min_heap.push("a", 1);
    min_heap.push("b", 2);

    min_heap.clear();

    assert!(min_heap.is_empty());
    assert!(min_heap.peek().is_none());
    assert!(min_heap.is_valid());
}
