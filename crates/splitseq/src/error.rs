/// A result type defaulting to the crate [`Error`].
///
/// Traversal itself is infallible; only builder transitions, comparator
/// queries and range construction can fail.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Broad category of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A caller-supplied value is out of range. Raised before any state is
    /// touched.
    InvalidArgument,
    /// The receiver is in a state that does not permit the operation.
    IllegalState,
}

/// All error variants that `splitseq` can emit.
///
/// Every error is reported before any mutation takes place, so a failed call
/// leaves the receiver exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// `accept` or `build` was called on a builder that has already been
    /// built.
    #[error("sequence builder has already been built")]
    AlreadyBuilt,

    /// A comparator was requested from a concatenation that still spans two
    /// children.
    #[error("concatenation has not been reduced to a single sequence")]
    ConcatUnresolved,

    /// A comparator was requested from a sequence that does not report
    /// `SORTED`.
    #[error("sequence is not sorted")]
    NotSorted,

    /// The lower bound of a range lies above its upper bound.
    #[error("invalid range: {from} > {up_to}")]
    InvalidRange {
        /// Requested lower bound.
        from: i64,
        /// Requested upper bound.
        up_to: i64,
    },

    /// The number of elements in a 64-bit range would exceed `i64::MAX`.
    #[error("range {from}..{up_to} holds more than i64::MAX elements")]
    RangeTooLarge {
        /// Requested lower bound.
        from: i64,
        /// Requested upper bound.
        up_to: i64,
    },
}

impl Error {
    /// Returns the category this error belongs to.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyBuilt | Self::ConcatUnresolved | Self::NotSorted => {
                ErrorKind::IllegalState
            }
            Self::InvalidRange { .. } | Self::RangeTooLarge { .. } => ErrorKind::InvalidArgument,
        }
    }
}
