use alloc::vec::Vec;
use core::fmt;

/// The failure of a close action, together with the failures of any actions
/// that ran after it.
///
/// Composing close actions with [`compose`] never loses an error: the first
/// failure becomes [`CloseError::error`] and every later one is recorded in
/// [`CloseError::suppressed`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CloseError<E> {
    /// The first failure.
    pub error: E,
    /// Failures of close actions that still ran after the first one failed.
    pub suppressed: Vec<E>,
}

impl<E> CloseError<E> {
    /// A failure with nothing suppressed yet.
    pub const fn new(error: E) -> Self {
        Self {
            error,
            suppressed: Vec::new(),
        }
    }

    /// Records `later` as suppressed by this error, flattening anything it
    /// suppressed itself.
    pub fn suppress(&mut self, later: CloseError<E>) {
        self.suppressed.push(later.error);
        self.suppressed.extend(later.suppressed);
    }
}

impl<E> From<E> for CloseError<E> {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl<E: fmt::Display> fmt::Display for CloseError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        if !self.suppressed.is_empty() {
            write!(f, " ({} suppressed)", self.suppressed.len())?;
        }
        Ok(())
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for CloseError<E> {}

/// Returns a close action that runs `a` and then `b`.
///
/// `b` runs even when `a` fails. If both fail, `b`'s error is recorded as
/// suppressed by `a`'s; if only one fails, its error is returned. The result
/// composes again with further actions.
///
/// Sequences in this crate own no resources and have no close action of
/// their own. `compose` is a standalone utility for layers that wrap a
/// sequence around a resource: when two such sources are presented as one
/// [`Concat`], their close actions are combined with it.
///
/// [`Concat`]: crate::Concat
///
/// # Example
///
/// ```
/// use splitseq::{CloseError, compose};
///
/// let close = compose(
///     || Err(CloseError::new("first")),
///     || Err(CloseError::new("second")),
/// );
///
/// let err = close().unwrap_err();
/// assert_eq!(err.error, "first");
/// assert_eq!(err.suppressed, ["second"]);
/// ```
pub fn compose<E, A, B>(a: A, b: B) -> impl FnOnce() -> Result<(), CloseError<E>>
where
    A: FnOnce() -> Result<(), CloseError<E>>,
    B: FnOnce() -> Result<(), CloseError<E>>,
{
    move || match a() {
        Ok(()) => b(),
        Err(mut first) => {
            if let Err(second) = b() {
                first.suppress(second);
            }
            Err(first)
        }
    }
}
