//! Queue iterators
//!
//! [`Iter`] and [`IntoIter`] walk a heap snapshot with an explicit stack, so
//! deep or wide heaps never hit a recursion limit. A node's entry is yielded
//! first, then its children are pushed in list order and popped last-in
//! first-out. The order is a heap traversal, not a priority order; use
//! [`Sorted`] for that.
//!
//! Because nodes are never mutated, an iterator is unaffected by any queue
//! built afterwards from the same nodes.

use crate::comparator::Comparator;
use crate::data::QueueData;
use crate::heap::HeapNode;
use crate::queue::PriorityQueue;
use crate::{QueueError, QueueResult};
use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

/// Borrowing traversal over one queue snapshot
///
/// Besides [`Iterator`], exposes the explicit protocol
/// [`has_next`](Iter::has_next) / [`get_next`](Iter::get_next).
#[derive(Debug)]
pub struct Iter<'a, T, P> {
    stack: Vec<&'a HeapNode<T, P>>,
    visited: usize,
    remaining: usize,
}

impl<'a, T, P> Iter<'a, T, P> {
    pub(crate) fn new(data: &'a QueueData<T, P>) -> Self {
        Self {
            stack: data.root().as_deref().into_iter().collect(),
            visited: 0,
            remaining: data.size(),
        }
    }

    /// Check if any entry is left
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Next entry in traversal order
    ///
    /// Fails with [`QueueError::IteratorExhausted`] once every entry has been
    /// returned.
    pub fn get_next(&mut self) -> QueueResult<(&'a T, &'a P)> {
        let node = self.stack.pop().ok_or(QueueError::IteratorExhausted {
            visited: self.visited,
        })?;
        self.stack.extend(node.children().map(|child| &**child));
        self.visited += 1;
        self.remaining = self.remaining.saturating_sub(1);
        Ok((node.element(), node.priority()))
    }

    /// Number of entries returned so far
    pub fn visited(&self) -> usize {
        self.visited
    }
}

impl<'a, T, P> Clone for Iter<'a, T, P> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            visited: self.visited,
            remaining: self.remaining,
        }
    }
}

impl<'a, T, P> Iterator for Iter<'a, T, P> {
    type Item = (&'a T, &'a P);

    fn next(&mut self) -> Option<Self::Item> {
        self.get_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, P> ExactSizeIterator for Iter<'_, T, P> {}

impl<T, P> FusedIterator for Iter<'_, T, P> {}

/// Owning traversal over one queue snapshot
///
/// Holds the snapshot's nodes alive, so it can outlive the queue it came from.
/// Yields clones of each element and priority.
pub struct IntoIter<T, P> {
    stack: Vec<Arc<HeapNode<T, P>>>,
    remaining: usize,
}

impl<T, P> IntoIter<T, P> {
    pub(crate) fn new(data: &QueueData<T, P>) -> Self {
        Self {
            stack: data.root().iter().cloned().collect(),
            remaining: data.size(),
        }
    }

    /// Check if any entry is left
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }
}

impl<T: fmt::Debug, P: fmt::Debug> fmt::Debug for IntoIter<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.remaining)
            .field("next", &self.stack.last().map(|node| &**node.entry()))
            .finish()
    }
}

impl<T: Clone, P: Clone> Iterator for IntoIter<T, P> {
    type Item = (T, P);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().cloned());
        self.remaining = self.remaining.saturating_sub(1);
        Some((node.element().clone(), node.priority().clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Clone, P: Clone> ExactSizeIterator for IntoIter<T, P> {}

impl<T: Clone, P: Clone> FusedIterator for IntoIter<T, P> {}

/// Entries in priority order
///
/// Dequeues from a private copy of the queue handle; the queue it was created
/// from is not affected. Each step costs one `delete_min`.
#[derive(Debug)]
pub struct Sorted<T, P, C> {
    queue: PriorityQueue<T, P, C>,
}

impl<T, P, C> Sorted<T, P, C> {
    pub(crate) fn new(queue: PriorityQueue<T, P, C>) -> Self {
        Self { queue }
    }
}

impl<T: Clone, P: Clone, C: Comparator<P>> Iterator for Sorted<T, P, C> {
    type Item = (T, P);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self
            .queue
            .first()
            .map(|(element, priority)| (element.clone(), priority.clone()))?;
        self.queue = self.queue.dequeue();
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T: Clone, P: Clone, C: Comparator<P>> ExactSizeIterator for Sorted<T, P, C> {}

impl<T: Clone, P: Clone, C: Comparator<P>> FusedIterator for Sorted<T, P, C> {}
