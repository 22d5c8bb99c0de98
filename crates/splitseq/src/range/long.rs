use crate::{Error, Result};

range_sequence! {
    /// A splittable sequence over a contiguous run of `i64` values.
    ///
    /// Behaves exactly like [`RangeI32`], with one extra rule: the number of
    /// elements must not exceed `i64::MAX`. There is no wider native integer
    /// to fall back on for sizes, so a range such as `i64::MIN..i64::MAX` is a
    /// caller error and construction fails fast.
    ///
    /// # Example
    ///
    /// ```
    /// use splitseq::{RangeI64, Splittable};
    ///
    /// let mut seq = RangeI64::range(0, 1 << 30);
    /// let left = seq.try_split().unwrap();
    ///
    /// // Large ranges split far to the left.
    /// assert_eq!(left.estimate_size(), (1 << 30) / 8);
    /// assert_eq!(seq.estimate_size(), (1 << 30) - (1 << 30) / 8);
    /// ```
    ///
    /// [`RangeI32`]: crate::RangeI32
    RangeI64, i64
}

impl RangeI64 {
    /// The largest number of elements a 64-bit range may hold.
    pub const MAX_SIZE: u64 = i64::MAX as u64;

    /// Creates a range over `from..up_to`, or `from..=up_to` when `closed`.
    ///
    /// # Panics
    ///
    /// Panics if `from > up_to` or if the range would hold more than
    /// [`Self::MAX_SIZE`] elements.
    pub fn new(from: i64, up_to: i64, closed: bool) -> Self {
        match Self::try_new(from, up_to, closed) {
            Ok(range) => range,
            Err(e) => panic!("{e}"),
        }
    }

    /// A fallible version of [`Self::new`].
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRange`] if `from > up_to`.
    /// - [`Error::RangeTooLarge`] if the size would exceed [`Self::MAX_SIZE`].
    pub const fn try_new(from: i64, up_to: i64, closed: bool) -> Result<Self> {
        if from > up_to {
            return Err(Error::InvalidRange { from, up_to });
        }
        let span = up_to.abs_diff(from);
        if span > Self::MAX_SIZE || (closed && span == Self::MAX_SIZE) {
            return Err(Error::RangeTooLarge { from, up_to });
        }
        Ok(Self {
            from,
            up_to,
            last_pending: closed,
        })
    }

    /// The half-open range `start..end`; empty when `start >= end`.
    ///
    /// # Panics
    ///
    /// Panics if the range holds more than [`Self::MAX_SIZE`] elements.
    pub fn range(start: i64, end: i64) -> Self {
        if start >= end {
            Self::exhausted(start)
        } else {
            Self::new(start, end, false)
        }
    }

    /// The closed range `start..=end`; empty when `start > end`.
    ///
    /// # Panics
    ///
    /// Panics if the range holds more than [`Self::MAX_SIZE`] elements.
    pub fn range_closed(start: i64, end: i64) -> Self {
        if start > end {
            Self::exhausted(start)
        } else {
            Self::new(start, end, true)
        }
    }

    const fn exhausted(at: i64) -> Self {
        Self {
            from: at,
            up_to: at,
            last_pending: false,
        }
    }
}
