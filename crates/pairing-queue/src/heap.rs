//! Pairing heap core
//!
//! Pure functions over optional heap roots. Nodes are immutable once built and
//! are shared between every queue version that can reach them, so none of the
//! functions here touch an existing node: they allocate new ones and reuse the
//! `Arc`s of everything that did not change.
//!
//! | Operation      | Cost                                   |
//! |----------------|----------------------------------------|
//! | [`merge`]      | `O(1)`                                 |
//! | [`insert`]     | `O(1)`                                 |
//! | [`find_min`]   | `O(1)`                                 |
//! | [`delete_min`] | `O(log n)` amortized, `O(n)` worst     |
//! | [`build`]      | `O(n)`                                 |

use crate::comparator::Comparator;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Optional shared heap root
pub type Heap<T, P> = Option<Arc<HeapNode<T, P>>>;

/// Persistent cons list of child heaps, most recently merged first
pub type ChildList<T, P> = Option<Arc<ChildCell<T, P>>>;

/// One cell of a [`ChildList`]
pub struct ChildCell<T, P> {
    head: Arc<HeapNode<T, P>>,
    next: ChildList<T, P>,
}

/// Immutable heap node: one entry plus its children
///
/// The entry sits behind its own `Arc` so that rebuilding a node during a
/// merge never clones the element or the priority.
pub struct HeapNode<T, P> {
    entry: Arc<(T, P)>,
    children: ChildList<T, P>,
}

impl<T, P> HeapNode<T, P> {
    fn singleton(element: T, priority: P) -> Arc<Self> {
        Arc::new(Self {
            entry: Arc::new((element, priority)),
            children: None,
        })
    }

    /// Element stored at this node
    pub fn element(&self) -> &T {
        &self.entry.0
    }

    /// Priority of this node's element
    pub fn priority(&self) -> &P {
        &self.entry.1
    }

    /// Shared `(element, priority)` pair
    pub fn entry(&self) -> &Arc<(T, P)> {
        &self.entry
    }

    /// Child heaps in list order
    pub fn children(&self) -> Children<'_, T, P> {
        Children {
            link: self.children.as_deref(),
        }
    }
}

impl<T, P> Drop for HeapNode<T, P> {
    // The default drop would recurse once per child cell and once per tree
    // level. Unwrap exclusively owned cells and nodes onto a worklist instead.
    fn drop(&mut self) {
        let Some(first) = self.children.take() else {
            return;
        };
        let mut pending = vec![first];
        while let Some(cell) = pending.pop() {
            let mut link = Some(cell);
            while let Some(cell) = link {
                let Ok(mut cell) = Arc::try_unwrap(cell) else {
                    break;
                };
                if let Some(node) = Arc::get_mut(&mut cell.head) {
                    if let Some(grandchildren) = node.children.take() {
                        pending.push(grandchildren);
                    }
                }
                link = cell.next.take();
            }
        }
    }
}

impl<T, P> Drop for ChildCell<T, P> {
    // Reached when a list shared between versions loses its last owner
    // outside `HeapNode::drop`, e.g. two threads releasing versions at once.
    fn drop(&mut self) {
        let mut link = self.next.take();
        while let Some(cell) = link {
            let Ok(mut cell) = Arc::try_unwrap(cell) else {
                break;
            };
            link = cell.next.take();
        }
    }
}

// Debug output stops at one node; deep heaps would overflow a recursive walk.
impl<T: fmt::Debug, P: fmt::Debug> fmt::Debug for HeapNode<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapNode")
            .field("element", self.element())
            .field("priority", self.priority())
            .field("children", &self.children().count())
            .finish()
    }
}

impl<T: fmt::Debug, P: fmt::Debug> fmt::Debug for ChildCell<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildCell")
            .field("head", &*self.head.entry)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

/// Iterator over the children of a [`HeapNode`], in list order
#[derive(Debug)]
pub struct Children<'a, T, P> {
    link: Option<&'a ChildCell<T, P>>,
}

impl<'a, T, P> Iterator for Children<'a, T, P> {
    type Item = &'a Arc<HeapNode<T, P>>;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.link?;
        self.link = cell.next.as_deref();
        Some(&cell.head)
    }
}

/// Merges two heaps
///
/// The root ordered first becomes the new root and the other root is
/// prepended to its children. On a tie `a` wins and `b` becomes the child.
pub fn merge<T, P, C>(a: Heap<T, P>, b: Heap<T, P>, cmp: &C) -> Heap<T, P>
where
    C: Comparator<P> + ?Sized,
{
    match (a, b) {
        (None, heap) | (heap, None) => heap,
        (Some(a), Some(b)) => Some(link(a, b, cmp)),
    }
}

fn link<T, P, C>(
    a: Arc<HeapNode<T, P>>,
    b: Arc<HeapNode<T, P>>,
    cmp: &C,
) -> Arc<HeapNode<T, P>>
where
    C: Comparator<P> + ?Sized,
{
    let (winner, loser) = match cmp.compare(a.priority(), b.priority()) {
        Ordering::Less | Ordering::Equal => (a, b),
        Ordering::Greater => (b, a),
    };
    Arc::new(HeapNode {
        entry: Arc::clone(&winner.entry),
        children: Some(Arc::new(ChildCell {
            head: loser,
            next: winner.children.clone(),
        })),
    })
}

/// Inserts one entry, `merge(heap, singleton)`
pub fn insert<T, P, C>(heap: Heap<T, P>, element: T, priority: P, cmp: &C) -> Heap<T, P>
where
    C: Comparator<P> + ?Sized,
{
    merge(heap, Some(HeapNode::singleton(element, priority)), cmp)
}

/// Root entry, if any
pub fn find_min<T, P>(heap: &Heap<T, P>) -> Option<(&T, &P)> {
    heap.as_deref().map(|node| (node.element(), node.priority()))
}

/// Removes the root and recombines its children by two-pass pairing
///
/// Pass one merges consecutive children left to right. Pass two folds the
/// merged pairs from right to left. An absent heap stays absent.
pub fn delete_min<T, P, C>(heap: &Heap<T, P>, cmp: &C) -> Heap<T, P>
where
    C: Comparator<P> + ?Sized,
{
    let root = heap.as_deref()?;

    let mut pairs = Vec::new();
    let mut children = root.children().cloned();
    while let Some(first) = children.next() {
        match children.next() {
            Some(second) => pairs.push(link(first, second, cmp)),
            None => pairs.push(first),
        }
    }

    let mut acc = pairs.pop()?;
    while let Some(pair) = pairs.pop() {
        acc = link(pair, acc, cmp);
    }
    Some(acc)
}

/// Builds a heap from entries in linear time
///
/// Every entry becomes a singleton; adjacent heaps are merged pairwise in
/// left-to-right rounds until a single root remains.
pub fn build<T, P, C, I>(entries: I, cmp: &C) -> Heap<T, P>
where
    C: Comparator<P> + ?Sized,
    I: IntoIterator<Item = (T, P)>,
{
    let mut round: Vec<_> = entries
        .into_iter()
        .map(|(element, priority)| HeapNode::singleton(element, priority))
        .collect();

    while round.len() > 1 {
        let mut next = Vec::with_capacity((round.len() + 1) / 2);
        let mut nodes = round.into_iter();
        while let Some(first) = nodes.next() {
            match nodes.next() {
                Some(second) => next.push(link(first, second, cmp)),
                None => next.push(first),
            }
        }
        round = next;
    }
    round.pop()
}
