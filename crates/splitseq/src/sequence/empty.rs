use crate::{Characteristics, Splittable};
use core::fmt;
use core::marker::PhantomData;

/// A sequence with no elements.
///
/// Zero-sized and stateless, so a single shared value per element kind can
/// be handed out freely: [`EMPTY_INT`], [`EMPTY_LONG`] and [`EMPTY_DOUBLE`]
/// for the numeric kinds, [`empty`] for everything else. Copying one out of
/// its static allocates nothing.
///
/// # Example
///
/// ```
/// use splitseq::{EMPTY_INT, Splittable};
///
/// let mut seq = EMPTY_INT;
/// assert_eq!(seq.estimate_size(), 0);
/// assert!(!seq.try_advance(|_| unreachable!()));
/// assert!(seq.try_split().is_none());
/// ```
pub struct EmptySequence<T> {
    // `fn() -> T` keeps the type `Send + Sync` whatever `T` is.
    _marker: PhantomData<fn() -> T>,
}

/// The shared empty `i32` sequence.
pub static EMPTY_INT: EmptySequence<i32> = EmptySequence::new();

/// The shared empty `i64` sequence.
pub static EMPTY_LONG: EmptySequence<i64> = EmptySequence::new();

/// The shared empty `f64` sequence.
pub static EMPTY_DOUBLE: EmptySequence<f64> = EmptySequence::new();

/// Returns the empty sequence for any element type.
pub const fn empty<T>() -> EmptySequence<T> {
    EmptySequence::new()
}

impl<T> EmptySequence<T> {
    /// Returns the empty sequence; same as [`empty`].
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Splittable for EmptySequence<T> {
    type Item = T;

    fn try_advance<F>(&mut self, _visit: F) -> bool
    where
        F: FnMut(T),
    {
        false
    }

    fn drain_remaining<F>(&mut self, _visit: F)
    where
        F: FnMut(T),
    {
    }

    fn estimate_size(&self) -> u64 {
        0
    }

    fn characteristics(&self) -> Characteristics {
        Characteristics::SIZED | Characteristics::SUBSIZED
    }

    fn try_split(&mut self) -> Option<Self> {
        None
    }
}

// Manual impls: derives would demand `T: Clone` and friends.
impl<T> Clone for EmptySequence<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EmptySequence<T> {}

impl<T> Default for EmptySequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for EmptySequence<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for EmptySequence<T> {}

impl<T> fmt::Debug for EmptySequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EmptySequence")
    }
}
