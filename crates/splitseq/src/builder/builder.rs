use core::mem;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{BuiltSequence, Error, InlineSequence, Result, SpinedBuffer};

/// Where a [`SequenceBuilder`] is in its lifecycle.
#[derive(Clone, Debug)]
pub enum BuilderState<T> {
    /// Nothing accepted yet.
    Empty,
    /// Exactly one element, held inline.
    One(T),
    /// Two or more elements. The buffer is allocated on the second accept
    /// and seeded with the inline element.
    Many(SpinedBuffer<T>),
    /// [`SequenceBuilder::build`] has been called. `count` is the number of
    /// elements accepted before that.
    Built {
        /// Elements accepted before freezing.
        count: usize,
    },
}

/// Accumulates elements one at a time, then freezes into a splittable
/// sequence.
///
/// A builder is single-threaded: accept everything on one thread, then call
/// [`Self::build`] once and hand the sequence to whoever traverses it. After
/// `build`, every further `accept` or `build` fails with
/// [`Error::AlreadyBuilt`] and leaves the builder untouched.
///
/// ## Representation
/// - 0 or 1 elements: held inline, no allocation
/// - 2 or more: held in a [`SpinedBuffer`], allocated lazily on the second
///   accept
///
/// # Example
///
/// ```
/// use splitseq::{Error, SequenceBuilder, Splittable};
///
/// let mut builder = SequenceBuilder::new();
/// builder.add("a")?.add("b")?.add("c")?;
///
/// let mut seq = builder.build()?;
/// let mut seen = Vec::new();
/// seq.drain_remaining(|s| seen.push(s));
/// assert_eq!(seen, ["a", "b", "c"]);
///
/// assert_eq!(builder.accept("d"), Err(Error::AlreadyBuilt));
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct SequenceBuilder<T> {
    state: BuilderState<T>,
}

/// Builder of `i32` sequences.
pub type IntSequenceBuilder = SequenceBuilder<i32>;

/// Builder of `i64` sequences.
pub type LongSequenceBuilder = SequenceBuilder<i64>;

/// Builder of `f64` sequences.
pub type DoubleSequenceBuilder = SequenceBuilder<f64>;

impl<T> SequenceBuilder<T> {
    /// Creates a builder that has accepted nothing.
    pub const fn new() -> Self {
        Self {
            state: BuilderState::Empty,
        }
    }

    /// Where the builder is in its lifecycle.
    pub const fn state(&self) -> &BuilderState<T> {
        &self.state
    }

    /// Number of accepted elements, also after the builder has been built.
    pub fn count(&self) -> usize {
        match &self.state {
            BuilderState::Empty => 0,
            BuilderState::One(_) => 1,
            BuilderState::Many(buffer) => buffer.len(),
            BuilderState::Built { count } => *count,
        }
    }

    /// Returns true once [`Self::build`] has succeeded.
    pub const fn is_built(&self) -> bool {
        matches!(self.state, BuilderState::Built { .. })
    }

    /// Appends `value` to the sequence being built.
    ///
    /// # Errors
    ///
    /// - [`Error::AlreadyBuilt`] if [`Self::build`] has already been called.
    pub fn accept(&mut self, value: T) -> Result<()> {
        self.state = match mem::replace(&mut self.state, BuilderState::Empty) {
            BuilderState::Empty => BuilderState::One(value),
            BuilderState::One(first) => {
                let mut buffer = SpinedBuffer::new();
                buffer.push(first);
                buffer.push(value);
                BuilderState::Many(buffer)
            }
            BuilderState::Many(mut buffer) => {
                buffer.push(value);
                BuilderState::Many(buffer)
            }
            built @ BuilderState::Built { .. } => {
                self.state = built;
                return Err(Error::AlreadyBuilt);
            }
        };
        Ok(())
    }

    /// Chaining form of [`Self::accept`].
    ///
    /// # Errors
    ///
    /// - [`Error::AlreadyBuilt`] if [`Self::build`] has already been called.
    pub fn add(&mut self, value: T) -> Result<&mut Self> {
        self.accept(value)?;
        Ok(self)
    }

    /// Freezes the builder and returns the sequence of accepted elements in
    /// acceptance order.
    ///
    /// # Errors
    ///
    /// - [`Error::AlreadyBuilt`] if called more than once.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self), fields(count = self.count())))]
    pub fn build(&mut self) -> Result<BuiltSequence<T>> {
        let count = self.count();
        match mem::replace(&mut self.state, BuilderState::Built { count }) {
            BuilderState::Empty => Ok(BuiltSequence::Inline(InlineSequence::empty())),
            BuilderState::One(value) => Ok(BuiltSequence::Inline(InlineSequence::of(value))),
            BuilderState::Many(buffer) => Ok(BuiltSequence::Buffered(buffer.into_sequence())),
            built @ BuilderState::Built { .. } => {
                self.state = built;
                Err(Error::AlreadyBuilt)
            }
        }
    }
}

impl<T> Default for SequenceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for SequenceBuilder<T> {
    /// Accepts every element of `iter`.
    ///
    /// # Panics
    ///
    /// Panics if the builder has already been built.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if let Err(e) = self.accept(value) {
                panic!("{e}");
            }
        }
    }
}
