//! Queue handle
//!
//! [`PriorityQueue`] bundles a [`QueueData`] snapshot with its comparator and
//! forwards every operation to the functional layer in [`crate::data`].

use crate::comparator::{Comparator, Natural};
use crate::data::{self, QueueData};
use crate::iter::{IntoIter, Iter, Sorted};
use std::fmt;
use std::sync::Arc;

/// Persistent priority queue
///
/// `enqueue`, `dequeue`, `merge` and `clear` return a new queue and never
/// alter the receiver. Cloning is `O(1)` and the clone shares every node.
///
/// # Time Complexity
///
/// | Operation                    | Time Complexity        |
/// |------------------------------|------------------------|
/// | [`enqueue`](Self::enqueue)   | `O(1)`                 |
/// | [`merge`](Self::merge)       | `O(1)`                 |
/// | [`first`](Self::first)       | `O(1)`                 |
/// | [`dequeue`](Self::dequeue)   | `O(log n)` (amortized) |
/// | [`has`](Self::has)           | `O(n)`                 |
/// | [`from_entries`](Self::from_entries) | `O(n)`         |
///
/// # Example
///
/// ```
/// use pairing_queue::{Natural, PriorityQueue, Reverse};
///
/// let max = PriorityQueue::with_comparator(Reverse(Natural))
///     .enqueue("low", 1)
///     .enqueue("high", 9);
/// assert_eq!(max.first(), Some((&"high", &9)));
/// ```
pub struct PriorityQueue<T, P, C = Natural> {
    data: Arc<QueueData<T, P>>,
    comparator: Arc<C>,
}

impl<T, P: Ord> PriorityQueue<T, P, Natural> {
    /// Create new empty queue ordered by `P`'s natural order (min first)
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Create queue from `(element, priority)` entries, natural order
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, P)>,
    {
        Self::from_entries_with(entries, Natural)
    }
}

impl<T, P, C: Comparator<P>> PriorityQueue<T, P, C> {
    /// Create new empty queue ordered by `comparator`
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            data: data::empty(),
            comparator: Arc::new(comparator),
        }
    }

    /// Create queue from entries ordered by `comparator`
    pub fn from_entries_with<I>(entries: I, comparator: C) -> Self
    where
        I: IntoIterator<Item = (T, P)>,
    {
        let data = data::make(entries, &comparator);
        Self {
            data,
            comparator: Arc::new(comparator),
        }
    }

    /// Queue with one more entry
    pub fn enqueue(&self, element: T, priority: P) -> Self {
        self.derive(data::enqueue(
            &self.data,
            element,
            priority,
            &*self.comparator,
        ))
    }

    /// Queue without its first entry
    ///
    /// On an empty queue the result is the same queue (see [`ptr_eq`](Self::ptr_eq)).
    pub fn dequeue(&self) -> Self {
        self.derive(data::dequeue(&self.data, &*self.comparator))
    }

    /// Queue holding the entries of both queues
    ///
    /// The result is ordered by `self`'s comparator. Merging queues whose
    /// comparators disagree gives an unspecified order. Merging a queue with
    /// itself returns the same queue.
    pub fn merge(&self, other: &Self) -> Self {
        self.derive(data::merge(&self.data, &other.data, &*self.comparator))
    }

    /// Iterator yielding entries in priority order, leaving `self` intact
    pub fn iter_sorted(&self) -> Sorted<T, P, C> {
        Sorted::new(self.clone())
    }

    /// All entries in priority order
    pub fn into_sorted_vec(self) -> Vec<(T, P)>
    where
        T: Clone,
        P: Clone,
    {
        Sorted::new(self).collect()
    }
}

impl<T, P, C> PriorityQueue<T, P, C> {
    fn derive(&self, data: Arc<QueueData<T, P>>) -> Self {
        Self {
            data,
            comparator: Arc::clone(&self.comparator),
        }
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        data::is_empty(&self.data)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        data::size(&self.data)
    }

    /// Entry that would be dequeued next
    pub fn first(&self) -> Option<(&T, &P)> {
        data::first(&self.data)
    }

    /// Element that would be dequeued next
    pub fn first_element(&self) -> Option<&T> {
        data::first_element(&self.data)
    }

    /// Priority of the entry that would be dequeued next
    pub fn first_priority(&self) -> Option<&P> {
        data::first_priority(&self.data)
    }

    /// Whether any entry holds `element`, compared by equality
    pub fn has(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        data::has(&self.data, element)
    }

    /// Visits every entry once in heap traversal order (not sorted)
    ///
    /// `f` also receives the queue being traversed.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, &P, &Self),
    {
        data::for_each(&self.data, |element, priority| f(element, priority, self))
    }

    /// Empty queue with the same comparator
    ///
    /// Clearing an empty queue returns the same queue.
    pub fn clear(&self) -> Self {
        self.derive(data::clear(&self.data))
    }

    /// Traversal in heap order (not sorted)
    pub fn iter(&self) -> Iter<'_, T, P> {
        self.data.iter()
    }

    /// Comparator ordering this queue
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Underlying functional queue value
    pub fn data(&self) -> &Arc<QueueData<T, P>> {
        &self.data
    }

    /// Whether both handles share the same queue value
    ///
    /// Operations without effect (dequeue or clear on an empty queue, merging
    /// a queue with itself) return a handle for which this is `true`.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl<T, P, C> Clone for PriorityQueue<T, P, C> {
    fn clone(&self) -> Self {
        self.derive(Arc::clone(&self.data))
    }
}

impl<T, P, C: Comparator<P> + Default> Default for PriorityQueue<T, P, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, P: fmt::Debug, C> fmt::Debug for PriorityQueue<T, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, P, C: Comparator<P> + Default> FromIterator<(T, P)> for PriorityQueue<T, P, C> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        Self::from_entries_with(iter, C::default())
    }
}

impl<T: Clone, P: Clone, C> IntoIterator for PriorityQueue<T, P, C> {
    type Item = (T, P);
    type IntoIter = IntoIter<T, P>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(&self.data)
    }
}

impl<'a, T, P, C> IntoIterator for &'a PriorityQueue<T, P, C> {
    type Item = (&'a T, &'a P);
    type IntoIter = Iter<'a, T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
