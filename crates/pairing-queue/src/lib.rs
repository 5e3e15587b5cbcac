//! Persistent Priority Queue
//!
//! An immutable priority queue backed by a pairing heap. Every operation that
//! looks like a mutation returns a new queue; earlier versions stay valid and
//! share every untouched subtree with the new one.
//!
//! # Layers
//!
//! 1. [`heap`] - pairing heap core (`merge`, `insert`, `delete_min`)
//! 2. [`data`] - functional queue layer over `Arc<QueueData>`
//! 3. [`PriorityQueue`] - handle bundling data and a comparator
//! 4. [`iter`] - explicit-stack traversal over a heap snapshot
//!
//! # Example
//!
//! ```
//! use pairing_queue::PriorityQueue;
//!
//! let q = PriorityQueue::new()
//!     .enqueue("second", 2)
//!     .enqueue("first", 1)
//!     .enqueue("third", 3);
//!
//! let rest = q.dequeue();
//! assert_eq!(q.first_element(), Some(&"first"));
//! assert_eq!(rest.first_element(), Some(&"second"));
//! assert_eq!(q.len(), 3); // Original unchanged
//! assert_eq!(rest.len(), 2);
//! ```
//!
//! # Ordering of equal priorities
//!
//! When two roots compare equal during a merge, the left operand stays the
//! root and the right operand becomes its child. This only affects traversal
//! order of duplicates, never which entry is reported first.

pub mod comparator;
pub mod data;
pub mod heap;
pub mod iter;
mod queue;

use thiserror::Error;

/// Queue errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("Iterator is finished after {visited} entries")]
    IteratorExhausted { visited: usize },
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

// Re-export main types
pub use comparator::{Comparator, Natural, Reverse};
pub use data::QueueData;
pub use iter::{IntoIter, Iter, Sorted};
pub use queue::PriorityQueue;
