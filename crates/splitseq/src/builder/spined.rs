use crate::{Characteristics, Splittable};
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::mem;

/// Capacity of the first chunk, as a power of two.
pub const FIRST_CHUNK_POWER: u32 = 4;

/// Chunks stop doubling once they reach this power of two.
pub const MAX_CHUNK_POWER: u32 = 30;

/// An append-only ordered store made of a spine of chunks.
///
/// The first chunk holds `2^FIRST_CHUNK_POWER` elements and every later
/// chunk doubles, so growing never copies elements that are already stored.
/// The chunk boundaries also give [`BufferSequence`] natural split points.
///
/// # Example
///
/// ```
/// use splitseq::{SpinedBuffer, Splittable};
///
/// let mut buffer = SpinedBuffer::new();
/// for i in 0..100 {
///     buffer.push(i);
/// }
/// assert_eq!(buffer.len(), 100);
///
/// let mut seq = buffer.into_sequence();
/// assert_eq!(seq.estimate_size(), 100);
/// assert!(seq.try_split().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct SpinedBuffer<T> {
    chunks: Vec<Vec<T>>,
    len: usize,
}

impl<T> SpinedBuffer<T> {
    /// Creates an empty buffer. No chunk is allocated until the first push.
    pub const fn new() -> Self {
        Self {
            chunks: Vec::new(),
            len: 0,
        }
    }

    /// Number of stored elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been pushed.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of chunks currently allocated.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Appends `value` after every element already stored.
    pub fn push(&mut self, value: T) {
        let index = self.chunks.len();
        match self.chunks.last_mut() {
            Some(chunk) if chunk.len() < Self::chunk_capacity(index - 1) => chunk.push(value),
            _ => {
                let mut chunk = Vec::with_capacity(Self::chunk_capacity(index));
                chunk.push(value);
                self.chunks.push(chunk);
            }
        }
        self.len += 1;
    }

    /// Returns the element at `index` in insertion order.
    pub fn get(&self, index: usize) -> Option<&T> {
        let mut index = index;
        for chunk in &self.chunks {
            if index < chunk.len() {
                return chunk.get(index);
            }
            index -= chunk.len();
        }
        None
    }

    /// Iterates the stored elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.chunks.iter().flatten()
    }

    /// Converts the buffer into a splittable sequence over its elements.
    pub fn into_sequence(self) -> BufferSequence<T> {
        BufferSequence {
            chunks: self.chunks.into_iter().map(VecDeque::from).collect(),
            len: self.len,
        }
    }

    fn chunk_capacity(index: usize) -> usize {
        let max_index = (MAX_CHUNK_POWER - FIRST_CHUNK_POWER) as usize;
        1 << (FIRST_CHUNK_POWER as usize + index.min(max_index))
    }
}

impl<T> Default for SpinedBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for SpinedBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for SpinedBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buffer = Self::new();
        buffer.extend(iter);
        buffer
    }
}

/// A splittable sequence draining the elements of a [`SpinedBuffer`].
///
/// Splits hand out every remaining chunk but the last; once a single chunk is
/// left it is split at its midpoint.
#[derive(Clone, Debug)]
pub struct BufferSequence<T> {
    // Never contains an empty chunk.
    chunks: VecDeque<VecDeque<T>>,
    len: usize,
}

impl<T> BufferSequence<T> {
    fn from_chunks(chunks: VecDeque<VecDeque<T>>) -> Self {
        let len = chunks.iter().map(VecDeque::len).sum();
        Self { chunks, len }
    }
}

impl<T> Splittable for BufferSequence<T> {
    type Item = T;

    fn try_advance<F>(&mut self, mut visit: F) -> bool
    where
        F: FnMut(T),
    {
        let Some(value) = self.chunks.front_mut().and_then(VecDeque::pop_front) else {
            return false;
        };
        if self.chunks.front().is_some_and(VecDeque::is_empty) {
            self.chunks.pop_front();
        }
        self.len -= 1;
        visit(value);
        true
    }

    fn drain_remaining<F>(&mut self, mut visit: F)
    where
        F: FnMut(T),
    {
        let chunks = mem::take(&mut self.chunks);
        self.len = 0;
        for value in chunks.into_iter().flatten() {
            visit(value);
        }
    }

    fn estimate_size(&self) -> u64 {
        self.len as u64
    }

    fn characteristics(&self) -> Characteristics {
        Characteristics::SIZED | Characteristics::SUBSIZED | Characteristics::ORDERED
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self), fields(len = self.len)))]
    fn try_split(&mut self) -> Option<Self> {
        if self.len <= 1 {
            return None;
        }
        if self.chunks.len() > 1 {
            let last = self.chunks.pop_back()?;
            let prefix = mem::replace(&mut self.chunks, VecDeque::from([last]));
            let prefix = Self::from_chunks(prefix);
            self.len -= prefix.len;
            return Some(prefix);
        }
        let chunk = self.chunks.front_mut()?;
        let rest = chunk.split_off(chunk.len() / 2);
        let prefix = mem::replace(chunk, rest);
        self.len -= prefix.len();
        Some(Self::from_chunks(VecDeque::from([prefix])))
    }
}
