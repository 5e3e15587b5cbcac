//! Iterator protocol tests

use pairing_queue::{PriorityQueue, QueueError};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(0)]
#[case(1)]
#[case(6)]
#[case(250)]
fn test_get_next_fails_after_size_calls(#[case] size: i32) {
    let q = PriorityQueue::from_entries((0..size).map(|i| (i, i % 7)));
    let mut iter = q.iter();
    for _ in 0..size {
        assert!(iter.has_next());
        assert!(iter.get_next().is_ok());
    }
    assert!(!iter.has_next());
    assert_eq!(
        iter.get_next(),
        Err(QueueError::IteratorExhausted {
            visited: size as usize
        })
    );
    // The step form reports completion instead of failing
    assert_eq!(iter.next(), None);
}

#[test]
fn test_exhausted_error_message() {
    let q = PriorityQueue::<&str, i32>::new();
    let err = q.iter().get_next().unwrap_err();
    assert_eq!(err.to_string(), "Iterator is finished after 0 entries");
}

#[test]
fn test_root_is_yielded_first() {
    let q = PriorityQueue::from_entries(vec![("c", 3), ("a", 1), ("b", 2)]);
    let mut iter = q.iter();
    assert_eq!(iter.get_next(), Ok((&"a", &1)));
}

#[test]
fn test_traversal_is_heap_order_not_sorted() {
    // Root 0 with children [3, 2, 1]; children come off the stack in reverse.
    let q = PriorityQueue::new()
        .enqueue("zero", 0)
        .enqueue("one", 1)
        .enqueue("two", 2)
        .enqueue("three", 3);
    let order: Vec<&str> = q.iter().map(|(element, _)| *element).collect();
    assert_eq!(order, vec!["zero", "one", "two", "three"]);

    let q = q.enqueue("half", 0);
    let order: Vec<&str> = q.iter().map(|(element, _)| *element).collect();
    assert_eq!(order, vec!["zero", "one", "two", "three", "half"]);
}

#[test]
fn test_equal_priorities_keep_existing_root() {
    let q = PriorityQueue::new()
        .enqueue("first", 5)
        .enqueue("second", 5)
        .enqueue("third", 5);
    assert_eq!(q.first_element(), Some(&"first"));
    let order: Vec<&str> = q.iter().map(|(element, _)| *element).collect();
    assert_eq!(order, vec!["first", "second", "third"]);
}

#[test]
fn test_for_each_uses_iterator_order() {
    let q = PriorityQueue::from_entries((0..20).map(|i| (i, (i * 7) % 11)));
    let mut via_for_each = Vec::new();
    q.for_each(|element, _, _| via_for_each.push(*element));
    let via_iter: Vec<i32> = q.iter().map(|(element, _)| *element).collect();
    assert_eq!(via_for_each, via_iter);
}

#[test]
fn test_size_hint_is_exact() {
    let q = PriorityQueue::from_entries(vec![((), 1), ((), 2), ((), 3)]);
    let mut iter = q.iter();
    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.size_hint(), (2, Some(2)));
    assert_eq!(iter.visited(), 1);
}

#[test]
fn test_iterator_is_fused() {
    let q = PriorityQueue::new().enqueue((), 1);
    let mut iter = q.iter();
    assert!(iter.next().is_some());
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
}

#[test]
fn test_for_loop_over_reference() {
    let q = PriorityQueue::from_entries(vec![("a", 1), ("b", 2)]);
    let mut total = 0;
    for (_, priority) in &q {
        total += priority;
    }
    assert_eq!(total, 3);
}

#[test]
fn test_sorted_iterator_leaves_queue() {
    let q = PriorityQueue::from_entries(vec![("c", 3), ("a", 1), ("b", 2)]);
    let sorted: Vec<(&str, i32)> = q.iter_sorted().collect();
    assert_eq!(sorted, vec![("a", 1), ("b", 2), ("c", 3)]);
    assert_eq!(q.len(), 3);
    assert_eq!(q.iter_sorted().len(), 3);
}

#[test]
fn test_wide_and_deep_heaps_iterate_without_recursion() {
    let wide = (0..100_000).fold(PriorityQueue::new(), |q, i| q.enqueue((), i));
    assert_eq!(wide.iter().count(), 100_000);

    let deep = (0..100_000)
        .rev()
        .fold(PriorityQueue::new(), |q, i| q.enqueue((), i));
    assert_eq!(deep.iter().count(), 100_000);
}

#[test]
fn test_debug_of_deep_heap_does_not_recurse() {
    let deep = (0..100_000)
        .rev()
        .fold(PriorityQueue::new(), |q, i| q.enqueue((), i));

    let data = format!("{:?}", deep.data());
    assert!(data.starts_with("QueueData { size: 100000, entries: [((), 0), ((), 1), "));
    assert!(data.ends_with("((), 99999)] }"));

    assert_eq!(
        format!("{:?}", deep.clone().into_iter()),
        "IntoIter { remaining: 100000, next: Some(((), 0)) }"
    );
    assert!(format!("{:?}", deep.data().root()).starts_with("Some(HeapNode {"));
}
