use crate::{Characteristics, Error, Result, SequenceIter};
use core::cmp::Ordering;

/// Size estimate reported when the number of remaining elements is unknown
/// or unbounded.
pub const UNKNOWN_SIZE: u64 = u64::MAX;

/// An ordering relation over elements, as reported by
/// [`Splittable::comparator`]. `None` in that position means natural order.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// A cursor over an ordered collection that can be traversed one element at a
/// time, drained in bulk, or recursively split into disjoint pieces for
/// parallel consumption.
///
/// Splitting carves a prefix off the receiver: after `let left =
/// seq.try_split()`, traversing `left` and then `seq` yields exactly the
/// elements the unsplit sequence would have, in the same order when
/// [`Characteristics::ORDERED`] is reported. An element that has been yielded
/// is never yielded again by the same instance.
///
/// Implementations do no locking. A fork-join scheduler hands each split
/// piece to a different worker; correctness rests on pieces never
/// overlapping.
///
/// # Example
///
/// ```
/// use splitseq::{RangeI32, Splittable};
///
/// let mut right = RangeI32::range(0, 10);
/// let mut left = right.try_split().unwrap();
///
/// let mut seen = Vec::new();
/// left.drain_remaining(|i| seen.push(i));
/// right.drain_remaining(|i| seen.push(i));
/// assert_eq!(seen, (0..10).collect::<Vec<_>>());
/// ```
pub trait Splittable {
    /// The element type yielded by this sequence.
    type Item;

    /// Yields the next element to `visit` and returns `true`, or returns
    /// `false` without calling `visit` when no element remains.
    fn try_advance<F>(&mut self, visit: F) -> bool
    where
        F: FnMut(Self::Item);

    /// Yields every remaining element to `visit` in order, leaving the
    /// sequence exhausted.
    ///
    /// Overrides must behave exactly like calling [`Self::try_advance`] until
    /// it returns `false`.
    fn drain_remaining<F>(&mut self, mut visit: F)
    where
        F: FnMut(Self::Item),
    {
        while self.try_advance(&mut visit) {}
    }

    /// Returns an upper bound on the number of remaining elements, or
    /// [`UNKNOWN_SIZE`]. Exact when [`Characteristics::SIZED`] is reported.
    fn estimate_size(&self) -> u64;

    /// Returns the guarantees that currently hold. The set only ever loses
    /// flags as traversal and splitting proceed.
    fn characteristics(&self) -> Characteristics;

    /// Splits off a prefix of the remaining elements as a new sequence,
    /// leaving the receiver with the rest. Returns `None` when no useful
    /// split exists.
    fn try_split(&mut self) -> Option<Self>
    where
        Self: Sized;

    /// Returns the ordering a `SORTED` sequence is sorted by; `Ok(None)`
    /// means natural order.
    ///
    /// # Errors
    ///
    /// - [`Error::NotSorted`] if the sequence does not report `SORTED`.
    fn comparator(&self) -> Result<Option<Comparator<Self::Item>>> {
        Err(Error::NotSorted)
    }

    /// Returns true if every flag in `flags` is currently reported.
    fn has_characteristics(&self, flags: Characteristics) -> bool {
        self.characteristics().contains(flags)
    }

    /// Returns the exact remaining size when the sequence is `SIZED`.
    fn exact_size(&self) -> Option<u64> {
        if self.has_characteristics(Characteristics::SIZED) {
            Some(self.estimate_size())
        } else {
            None
        }
    }

    /// Wraps the sequence in a standard [`Iterator`].
    fn into_iter_seq(self) -> SequenceIter<Self>
    where
        Self: Sized,
    {
        SequenceIter::new(self)
    }
}
