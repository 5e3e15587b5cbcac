//! Priority comparators
//!
//! A comparator is a total order over priorities, fixed for the lifetime of a
//! queue lineage. Queues derived from one another (by enqueue, dequeue or
//! merge) must be ordered by compatible comparators; merging queues built with
//! incompatible comparators is unspecified and is not detected.

use std::cmp::Ordering;

/// Total order over priority values
///
/// `Less` means the left priority is served first.
pub trait Comparator<P: ?Sized> {
    fn compare(&self, a: &P, b: &P) -> Ordering;
}

/// Natural ordering of `P` (min-queue)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<P: Ord + ?Sized> Comparator<P> for Natural {
    #[inline]
    fn compare(&self, a: &P, b: &P) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts another comparator
///
/// `Reverse(Natural)` turns the default min-queue into a max-queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reverse<C>(pub C);

impl<P: ?Sized, C: Comparator<P>> Comparator<P> for Reverse<C> {
    #[inline]
    fn compare(&self, a: &P, b: &P) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<P: ?Sized, F> Comparator<P> for F
where
    F: Fn(&P, &P) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &P, b: &P) -> Ordering {
        self(a, b)
    }
}
