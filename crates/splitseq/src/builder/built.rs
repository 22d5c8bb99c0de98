use crate::{BufferSequence, Characteristics, InlineSequence, Splittable};

/// The sequence produced by [`SequenceBuilder::build`].
///
/// Builders that accepted zero or one element hand back their inline value;
/// larger ones hand back the sequence of their chunked buffer.
///
/// [`SequenceBuilder::build`]: crate::SequenceBuilder::build
#[derive(Clone, Debug)]
pub enum BuiltSequence<T> {
    /// Zero or one element, stored inline. Never splits.
    Inline(InlineSequence<T>),
    /// Two or more elements, stored in a [`SpinedBuffer`].
    ///
    /// [`SpinedBuffer`]: crate::SpinedBuffer
    Buffered(BufferSequence<T>),
}

impl<T> BuiltSequence<T> {
    /// A built sequence of exactly one element, without going through a
    /// builder.
    pub const fn of(value: T) -> Self {
        Self::Inline(InlineSequence::of(value))
    }
}

impl<T> Splittable for BuiltSequence<T> {
    type Item = T;

    fn try_advance<F>(&mut self, visit: F) -> bool
    where
        F: FnMut(T),
    {
        match self {
            Self::Inline(seq) => seq.try_advance(visit),
            Self::Buffered(seq) => seq.try_advance(visit),
        }
    }

    fn drain_remaining<F>(&mut self, visit: F)
    where
        F: FnMut(T),
    {
        match self {
            Self::Inline(seq) => seq.drain_remaining(visit),
            Self::Buffered(seq) => seq.drain_remaining(visit),
        }
    }

    fn estimate_size(&self) -> u64 {
        match self {
            Self::Inline(seq) => seq.estimate_size(),
            Self::Buffered(seq) => seq.estimate_size(),
        }
    }

    fn characteristics(&self) -> Characteristics {
        match self {
            Self::Inline(seq) => seq.characteristics(),
            Self::Buffered(seq) => seq.characteristics(),
        }
    }

    fn try_split(&mut self) -> Option<Self> {
        match self {
            Self::Inline(_) => None,
            Self::Buffered(seq) => seq.try_split().map(Self::Buffered),
        }
    }
}
