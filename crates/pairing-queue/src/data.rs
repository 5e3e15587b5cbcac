//! Functional queue layer
//!
//! A [`QueueData`] is an immutable `(root, size)` pair. Every function here
//! takes queue values by `&Arc<QueueData>` and hands back a new `Arc`, so the
//! identity of the result is observable with [`Arc::ptr_eq`]. Operations that
//! have no effect return the input `Arc` itself rather than an equal copy.

use crate::comparator::Comparator;
use crate::heap::{self, Heap};
use crate::iter::Iter;
use std::fmt;
use std::sync::Arc;

/// Immutable queue state: heap root plus entry count
///
/// `root` is `None` exactly when `size == 0`.
pub struct QueueData<T, P> {
    root: Heap<T, P>,
    size: usize,
}

impl<T, P> QueueData<T, P> {
    /// Heap root, for traversal
    pub fn root(&self) -> &Heap<T, P> {
        &self.root
    }

    /// Number of entries reachable from the root
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Traverses this snapshot in heap order
    pub fn iter(&self) -> Iter<'_, T, P> {
        Iter::new(self)
    }
}

impl<T: fmt::Debug, P: fmt::Debug> fmt::Debug for QueueData<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueData")
            .field("size", &self.size)
            .field("entries", &Entries(self))
            .finish()
    }
}

/// Entries in traversal order, formatted without recursing into the heap
struct Entries<'a, T, P>(&'a QueueData<T, P>);

impl<T: fmt::Debug, P: fmt::Debug> fmt::Debug for Entries<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// New empty queue value
pub fn empty<T, P>() -> Arc<QueueData<T, P>> {
    Arc::new(QueueData {
        root: None,
        size: 0,
    })
}

/// Builds a queue from `(element, priority)` entries
///
/// Uses linear-time batch pairing rather than folding inserts.
pub fn make<T, P, C, I>(entries: I, cmp: &C) -> Arc<QueueData<T, P>>
where
    C: Comparator<P> + ?Sized,
    I: IntoIterator<Item = (T, P)>,
{
    let entries: Vec<(T, P)> = entries.into_iter().collect();
    let size = entries.len();
    tracing::trace!(size, "building queue from entries");
    Arc::new(QueueData {
        root: heap::build(entries, cmp),
        size,
    })
}

/// Check if queue is empty
pub fn is_empty<T, P>(data: &QueueData<T, P>) -> bool {
    data.is_empty()
}

/// Get number of entries in queue
pub fn size<T, P>(data: &QueueData<T, P>) -> usize {
    data.size
}

/// Entry that would be dequeued next
pub fn first<T, P>(data: &QueueData<T, P>) -> Option<(&T, &P)> {
    heap::find_min(&data.root)
}

/// Element that would be dequeued next
pub fn first_element<T, P>(data: &QueueData<T, P>) -> Option<&T> {
    first(data).map(|(element, _)| element)
}

/// Priority of the entry that would be dequeued next
pub fn first_priority<T, P>(data: &QueueData<T, P>) -> Option<&P> {
    first(data).map(|(_, priority)| priority)
}

/// New value with one more entry; `data` is left untouched
pub fn enqueue<T, P, C>(
    data: &Arc<QueueData<T, P>>,
    element: T,
    priority: P,
    cmp: &C,
) -> Arc<QueueData<T, P>>
where
    C: Comparator<P> + ?Sized,
{
    Arc::new(QueueData {
        root: heap::insert(data.root.clone(), element, priority, cmp),
        size: data.size + 1,
    })
}

/// New value without the first entry
///
/// Dequeuing an empty queue returns `data` itself.
pub fn dequeue<T, P, C>(data: &Arc<QueueData<T, P>>, cmp: &C) -> Arc<QueueData<T, P>>
where
    C: Comparator<P> + ?Sized,
{
    if data.is_empty() {
        tracing::trace!("dequeue on empty queue");
        return Arc::clone(data);
    }
    Arc::new(QueueData {
        root: heap::delete_min(&data.root, cmp),
        size: data.size - 1,
    })
}

/// New value holding the entries of both queues
///
/// Merging a value with itself, or with an empty queue, returns the other
/// operand unchanged. Both operands must have been built with the same
/// comparator; the result is unspecified otherwise.
pub fn merge<T, P, C>(
    data: &Arc<QueueData<T, P>>,
    other: &Arc<QueueData<T, P>>,
    cmp: &C,
) -> Arc<QueueData<T, P>>
where
    C: Comparator<P> + ?Sized,
{
    if Arc::ptr_eq(data, other) {
        tracing::trace!("merge with self");
        return Arc::clone(data);
    }
    if other.is_empty() {
        return Arc::clone(data);
    }
    if data.is_empty() {
        return Arc::clone(other);
    }
    Arc::new(QueueData {
        root: heap::merge(data.root.clone(), other.root.clone(), cmp),
        size: data.size + other.size,
    })
}

/// Linear search by element equality; priorities are ignored
pub fn has<T, P>(data: &QueueData<T, P>, element: &T) -> bool
where
    T: PartialEq,
{
    data.iter().any(|(candidate, _)| candidate == element)
}

/// Calls `f` once per entry in heap traversal order (not sorted)
pub fn for_each<T, P, F>(data: &QueueData<T, P>, mut f: F)
where
    F: FnMut(&T, &P),
{
    for (element, priority) in data.iter() {
        f(element, priority);
    }
}

/// Empty value; an already empty `data` is returned as-is
pub fn clear<T, P>(data: &Arc<QueueData<T, P>>) -> Arc<QueueData<T, P>> {
    if data.is_empty() {
        return Arc::clone(data);
    }
    empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::Natural;
    use pretty_assertions::assert_eq;

    fn sample() -> Arc<QueueData<&'static str, i32>> {
        make(vec![("b", 2), ("a", 1), ("c", 3)], &Natural)
    }

    #[test]
    fn test_make_sets_size() {
        let data = sample();
        assert_eq!(size(&data), 3);
        assert!(!is_empty(&data));
        assert_eq!(first(&data), Some((&"a", &1)));
    }

    #[test]
    fn test_make_from_nothing_is_empty() {
        let data = make(Vec::<(&str, i32)>::new(), &Natural);
        assert!(is_empty(&data));
        assert_eq!(size(&data), 0);
        assert_eq!(first(&data), None);
    }

    #[test]
    fn test_enqueue_leaves_input() {
        let data = sample();
        let next = enqueue(&data, "z", 0, &Natural);
        assert_eq!(size(&data), 3);
        assert_eq!(first_element(&data), Some(&"a"));
        assert_eq!(size(&next), 4);
        assert_eq!(first_element(&next), Some(&"z"));
    }

    #[test]
    fn test_dequeue_empty_is_identity() {
        let data = empty::<&str, i32>();
        assert!(Arc::ptr_eq(&data, &dequeue(&data, &Natural)));
    }

    #[test]
    fn test_dequeue_to_empty() {
        let data = make(vec![("only", 1)], &Natural);
        let next = dequeue(&data, &Natural);
        assert!(is_empty(&next));
        assert!(next.root().is_none());
        assert_eq!(first_priority(&data), Some(&1));
    }

    #[test]
    fn test_merge_self_is_identity() {
        let data = sample();
        assert!(Arc::ptr_eq(&data, &merge(&data, &data, &Natural)));
    }

    #[test]
    fn test_merge_with_empty_returns_other_side() {
        let data = sample();
        let none = empty();
        assert!(Arc::ptr_eq(&data, &merge(&data, &none, &Natural)));
        assert!(Arc::ptr_eq(&data, &merge(&none, &data, &Natural)));
    }

    #[test]
    fn test_merge_adds_sizes() {
        let merged = merge(&sample(), &make(vec![("d", 0)], &Natural), &Natural);
        assert_eq!(size(&merged), 4);
        assert_eq!(first(&merged), Some((&"d", &0)));
    }

    #[test]
    fn test_clear() {
        let data = sample();
        let cleared = clear(&data);
        assert!(is_empty(&cleared));
        assert!(!Arc::ptr_eq(&data, &cleared));
        assert!(Arc::ptr_eq(&cleared, &clear(&cleared)));
        assert_eq!(size(&data), 3);
    }

    #[test]
    fn test_has_and_for_each() {
        let data = sample();
        assert!(has(&data, &"c"));
        assert!(!has(&data, &"d"));

        let mut seen = Vec::new();
        for_each(&data, |element, priority| seen.push((*element, *priority)));
        seen.sort();
        assert_eq!(seen, vec![("a", 1), ("b", 2), ("c", 3)]);
    }

    #[test]
    fn test_debug_lists_size_and_entries() {
        let data = make(vec![("b", 2), ("a", 1)], &Natural);
        assert_eq!(
            format!("{:?}", data),
            r#"QueueData { size: 2, entries: [("a", 1), ("b", 2)] }"#
        );
    }
}
