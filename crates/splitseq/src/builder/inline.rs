use crate::{Characteristics, Splittable};

/// A sequence of zero or one element held inline.
///
/// This is what a [`SequenceBuilder`] turns into when it accepted fewer than
/// two elements, so the common "nothing or just one" case never touches the
/// allocator.
///
/// [`SequenceBuilder`]: crate::SequenceBuilder
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineSequence<T> {
    element: Option<T>,
}

impl<T> InlineSequence<T> {
    /// A sequence yielding nothing.
    pub const fn empty() -> Self {
        Self { element: None }
    }

    /// A sequence yielding `value` once.
    pub const fn of(value: T) -> Self {
        Self {
            element: Some(value),
        }
    }
}

impl<T> Default for InlineSequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Splittable for InlineSequence<T> {
    type Item = T;

    fn try_advance<F>(&mut self, mut visit: F) -> bool
    where
        F: FnMut(T),
    {
        match self.element.take() {
            Some(value) => {
                visit(value);
                true
            }
            None => false,
        }
    }

    fn drain_remaining<F>(&mut self, mut visit: F)
    where
        F: FnMut(T),
    {
        if let Some(value) = self.element.take() {
            visit(value);
        }
    }

    fn estimate_size(&self) -> u64 {
        u64::from(self.element.is_some())
    }

    fn characteristics(&self) -> Characteristics {
        Characteristics::SIZED
            | Characteristics::SUBSIZED
            | Characteristics::ORDERED
            | Characteristics::IMMUTABLE
    }

    fn try_split(&mut self) -> Option<Self> {
        None
    }
}
