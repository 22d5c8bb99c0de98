use crate::{Characteristics, Comparator, Error, Result, Splittable, UNKNOWN_SIZE};

/// Two sequences presented as one: every element of `first`, then every
/// element of `second`.
///
/// The first [`try_split`] hands out `first` wholesale; from then on the
/// receiver is a thin wrapper around `second`, and later splits delegate to
/// it. [`try_advance`] drops `first` once it runs dry; a bulk
/// [`drain_remaining`] leaves it in place, so the reported characteristics
/// never widen. Either way the first child is never revisited.
///
/// While both children are present the combined characteristics are the
/// intersection of theirs, minus `DISTINCT` and `SORTED` (neither survives
/// concatenation), minus `SIZED` and `SUBSIZED` if the two size estimates
/// overflowed when summed at construction.
///
/// # Example
///
/// ```
/// use splitseq::{Characteristics, Concat, RangeI32, Splittable};
///
/// let mut seq = Concat::new(RangeI32::range(0, 3), RangeI32::range(10, 14));
/// assert_eq!(seq.estimate_size(), 7);
/// assert!(!seq.has_characteristics(Characteristics::SORTED));
///
/// let mut seen = Vec::new();
/// seq.drain_remaining(|i| seen.push(i));
/// assert_eq!(seen, [0, 1, 2, 10, 11, 12, 13]);
/// ```
///
/// [`try_split`]: Splittable::try_split
/// [`try_advance`]: Splittable::try_advance
/// [`drain_remaining`]: Splittable::drain_remaining
#[derive(Clone, Debug)]
pub struct Concat<A, B> {
    // At least one child is always present. Both are present exactly while
    // no split has happened and `try_advance` has not seen `first` run dry.
    first: Option<A>,
    second: Option<B>,
    // Only read while both children are present.
    unsized_: bool,
}

impl<A, B> Concat<A, B>
where
    A: Splittable,
    B: Splittable<Item = A::Item>,
{
    /// Concatenates `first` and `second`, taking ownership of both.
    pub fn new(first: A, second: B) -> Self {
        let unsized_ = first
            .estimate_size()
            .checked_add(second.estimate_size())
            .is_none();
        Self {
            first: Some(first),
            second: Some(second),
            unsized_,
        }
    }

    /// Returns true while both children are still present.
    pub const fn is_before_split(&self) -> bool {
        self.first.is_some() && self.second.is_some()
    }

    /// Returns true if the combined size overflowed at construction.
    pub const fn is_unsized(&self) -> bool {
        self.unsized_
    }

    /// Abandons a drained `first`, leaving only `second`.
    #[cold]
    fn abandon_first(&mut self) {
        if self.second.is_some() {
            self.first = None;
        }
    }
}

impl<A, B> Splittable for Concat<A, B>
where
    A: Splittable,
    B: Splittable<Item = A::Item>,
{
    type Item = A::Item;

    fn try_advance<F>(&mut self, mut visit: F) -> bool
    where
        F: FnMut(Self::Item),
    {
        if let Some(first) = self.first.as_mut() {
            if first.try_advance(&mut visit) {
                return true;
            }
            self.abandon_first();
        }
        match self.second.as_mut() {
            Some(second) => second.try_advance(visit),
            None => false,
        }
    }

    fn drain_remaining<F>(&mut self, mut visit: F)
    where
        F: FnMut(Self::Item),
    {
        if let Some(first) = self.first.as_mut() {
            first.drain_remaining(&mut visit);
        }
        if let Some(second) = self.second.as_mut() {
            second.drain_remaining(visit);
        }
    }

    fn estimate_size(&self) -> u64 {
        match (&self.first, &self.second) {
            (Some(first), Some(second)) => first
                .estimate_size()
                .checked_add(second.estimate_size())
                .unwrap_or(UNKNOWN_SIZE),
            (Some(first), None) => first.estimate_size(),
            (None, Some(second)) => second.estimate_size(),
            (None, None) => 0,
        }
    }

    fn characteristics(&self) -> Characteristics {
        match (&self.first, &self.second) {
            (Some(first), Some(second)) => {
                let mut lost = Characteristics::DISTINCT | Characteristics::SORTED;
                if self.unsized_ {
                    lost |= Characteristics::SIZED | Characteristics::SUBSIZED;
                }
                (first.characteristics() & second.characteristics()) - lost
            }
            (Some(first), None) => first.characteristics(),
            (None, Some(second)) => second.characteristics(),
            (None, None) => Characteristics::empty(),
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self), fields(before_split = self.is_before_split()))
    )]
    fn try_split(&mut self) -> Option<Self> {
        match (self.first.take(), self.second.as_mut()) {
            (Some(first), Some(_)) => Some(Self {
                first: Some(first),
                second: None,
                unsized_: false,
            }),
            (None, Some(second)) => second.try_split().map(|prefix| Self {
                first: None,
                second: Some(prefix),
                unsized_: false,
            }),
            (Some(mut first), None) => {
                // A handed-out first child splits like itself.
                let prefix = first.try_split().map(|prefix| Self {
                    first: Some(prefix),
                    second: None,
                    unsized_: false,
                });
                self.first = Some(first);
                prefix
            }
            (None, None) => None,
        }
    }

    fn comparator(&self) -> Result<Option<Comparator<Self::Item>>> {
        match (&self.first, &self.second) {
            (Some(_), Some(_)) => Err(Error::ConcatUnresolved),
            (Some(first), None) => first.comparator(),
            (None, Some(second)) => second.comparator(),
            (None, None) => Err(Error::NotSorted),
        }
    }
}
