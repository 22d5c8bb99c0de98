use crate::{Error, Result};

range_sequence! {
    /// A splittable sequence over a contiguous run of `i32` values.
    ///
    /// The range is either half-open (`from..up_to`) or closed
    /// (`from..=up_to`). It reports every characteristic a numeric interval
    /// can: `ORDERED`, `SIZED`, `SUBSIZED`, `IMMUTABLE`, `NONNULL`,
    /// `DISTINCT` and `SORTED` under natural order.
    ///
    /// Sizes are computed in `u64`, so even `i32::MIN..=i32::MAX` (2^32
    /// elements) reports its exact size.
    ///
    /// Splitting hands out the left part as a new half-open range and keeps
    /// the rest. Below [`BALANCED_SPLIT_THRESHOLD`] elements the split is at
    /// the midpoint; above it the left part gets one eighth.
    ///
    /// # Example
    ///
    /// ```
    /// use splitseq::{RangeI32, Splittable};
    ///
    /// let mut seq = RangeI32::range_closed(0, 10);
    /// assert_eq!(seq.estimate_size(), 11);
    ///
    /// let left = seq.try_split().unwrap();
    /// assert_eq!((left.from(), left.up_to()), (0, 5));
    /// assert_eq!((seq.from(), seq.up_to()), (5, 10));
    /// assert!(seq.is_last_pending());
    /// ```
    ///
    /// [`BALANCED_SPLIT_THRESHOLD`]: crate::BALANCED_SPLIT_THRESHOLD
    RangeI32, i32
}

impl RangeI32 {
    /// Creates a range over `from..up_to`, or `from..=up_to` when `closed`.
    ///
    /// # Panics
    ///
    /// Panics if `from > up_to`. Use [`Self::try_new`] to handle that case.
    pub fn new(from: i32, up_to: i32, closed: bool) -> Self {
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
    pub const fn try_new(from: i32, up_to: i32, closed: bool) -> Result<Self> {
        if from > up_to {
            return Err(Error::InvalidRange {
                from: from as i64,
                up_to: up_to as i64,
            });
        }
        Ok(Self {
            from,
            up_to,
            last_pending: closed,
        })
    }

    /// The half-open range `start..end`; empty when `start >= end`.
    pub const fn range(start: i32, end: i32) -> Self {
        if start >= end {
            Self::exhausted(start)
        } else {
            Self {
                from: start,
                up_to: end,
                last_pending: false,
            }
        }
    }

    /// The closed range `start..=end`; empty when `start > end`.
    pub const fn range_closed(start: i32, end: i32) -> Self {
        if start > end {
            Self::exhausted(start)
        } else {
            Self {
                from: start,
                up_to: end,
                last_pending: true,
            }
        }
    }

    const fn exhausted(at: i32) -> Self {
        Self {
            from: at,
            up_to: at,
            last_pending: false,
        }
    }
}
