/// The size below which a range is split at its midpoint to produce balanced
/// splits. At or above it the split ratio is 1:(`RIGHT_BALANCED_SPLIT_RATIO` -
/// 1).
///
/// Skewing large splits keeps the left side of a very large range at a low
/// depth, at the expense of a deeper right side. This suits ranges such as
/// `0..i32::MAX` that are later truncated to a prefix much shorter than the
/// threshold: the discarded right side is rarely split any further.
pub const BALANCED_SPLIT_THRESHOLD: u64 = 1 << 24;

/// The left:right split ratio used once a range reaches
/// [`BALANCED_SPLIT_THRESHOLD`].
pub const RIGHT_BALANCED_SPLIT_RATIO: u64 = 1 << 3;

/// Returns how many elements the left piece receives when splitting a range
/// of `size` elements.
///
/// `size` must be at least 2; the result is then at least 1 and at most
/// `size / 2`.
///
/// ```
/// use splitseq::split_point;
///
/// assert_eq!(split_point(10), 5);
/// assert_eq!(split_point(11), 5);
/// assert_eq!(split_point(1 << 24), 1 << 21);
/// ```
#[inline]
pub const fn split_point(size: u64) -> u64 {
    debug_assert!(size >= 2, "splitting requires at least two elements");
    let d = if size < BALANCED_SPLIT_THRESHOLD {
        2
    } else {
        RIGHT_BALANCED_SPLIT_RATIO
    };
    size / d
}
