use crate::Splittable;
use core::iter::FusedIterator;

/// An [`Iterator`] over the remaining elements of a [`Splittable`].
///
/// Created by [`Splittable::into_iter_seq`]. `size_hint` is exact when the
/// sequence reports `SIZED`.
pub struct SequenceIter<S> {
    inner: S,
}

impl<S> SequenceIter<S>
where
    S: Splittable,
{
    pub(crate) const fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns the wrapped sequence, positioned after the last element
    /// returned by `next`.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S> Iterator for SequenceIter<S>
where
    S: Splittable,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let mut slot = None;
        self.inner.try_advance(|item| slot = Some(item));
        slot
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.inner.exact_size() {
            Some(n) => {
                let n = usize::try_from(n).unwrap_or(usize::MAX);
                (n, Some(n))
            }
            None => (0, None),
        }
    }

    fn fold<B, G>(mut self, init: B, mut g: G) -> B
    where
        G: FnMut(B, Self::Item) -> B,
    {
        let mut acc = Some(init);
        self.inner.drain_remaining(|item| {
            acc = acc.take().map(|a| g(a, item));
        });
        match acc {
            Some(acc) => acc,
            None => unreachable!("accumulator is restored after every element"),
        }
    }
}

impl<S> FusedIterator for SequenceIter<S> where S: Splittable {}
