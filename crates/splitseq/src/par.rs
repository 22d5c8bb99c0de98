use crate::Splittable;
use rayon::iter::ParallelIterator;
use rayon::iter::plumbing::{Folder, UnindexedConsumer, UnindexedProducer, bridge_unindexed};

/// A rayon [`ParallelIterator`] driven by a [`Splittable`].
///
/// rayon decides when to split; every split goes through
/// [`Splittable::try_split`], with the prefix on the left so ordered
/// consumers such as `collect` see elements in sequence order. Each leaf is
/// traversed with [`Splittable::try_advance`] so short-circuiting consumers
/// such as `find_any` stop early.
///
/// # Example
///
/// ```
/// use rayon::prelude::*;
/// use splitseq::{ParallelSplittable, RangeI64};
///
/// let sum: i64 = RangeI64::range(0, 10_000).into_par_seq().sum();
/// assert_eq!(sum, 49_995_000);
/// ```
#[derive(Clone, Debug)]
pub struct ParallelSequence<S> {
    seq: S,
}

impl<S> ParallelSequence<S> {
    /// Wraps `seq` for parallel traversal.
    pub const fn new(seq: S) -> Self {
        Self { seq }
    }

    /// Returns the wrapped sequence, untouched.
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S> ParallelIterator for ParallelSequence<S>
where
    S: Splittable + Send,
    S::Item: Send,
{
    type Item = S::Item;

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        bridge_unindexed(SequenceProducer(self.seq), consumer)
    }

    // Never `Some`: a known length commits rayon to indexed consumers, and
    // this iterator is driven through `bridge_unindexed`.
    fn opt_len(&self) -> Option<usize> {
        None
    }
}

struct SequenceProducer<S>(S);

impl<S> UnindexedProducer for SequenceProducer<S>
where
    S: Splittable + Send,
    S::Item: Send,
{
    type Item = S::Item;

    fn split(self) -> (Self, Option<Self>) {
        let mut rest = self.0;
        match rest.try_split() {
            Some(prefix) => (Self(prefix), Some(Self(rest))),
            None => (Self(rest), None),
        }
    }

    fn fold_with<F>(self, mut folder: F) -> F
    where
        F: Folder<Self::Item>,
    {
        let mut seq = self.0;
        while !folder.full() {
            let mut slot = None;
            if !seq.try_advance(|item| slot = Some(item)) {
                break;
            }
            if let Some(item) = slot {
                folder = folder.consume(item);
            }
        }
        folder
    }
}

/// Converts any sendable [`Splittable`] into a [`ParallelSequence`].
pub trait ParallelSplittable: Splittable + Send + Sized
where
    Self::Item: Send,
{
    /// Wraps `self` in a [`ParallelSequence`].
    fn into_par_seq(self) -> ParallelSequence<Self> {
        ParallelSequence::new(self)
    }
}

impl<S> ParallelSplittable for S
where
    S: Splittable + Send,
    S::Item: Send,
{
}
