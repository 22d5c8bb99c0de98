/// Wire form of a range cursor; deserialization re-validates it through the
/// fallible constructor.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRange<T> {
    from: T,
    up_to: T,
    last_pending: bool,
}

/// Generates the cursor state and the [`Splittable`] implementation shared by
/// the numeric range sequences. Constructors live with each type since their
/// overflow rules differ.
///
/// [`Splittable`]: crate::Splittable
macro_rules! range_sequence {
    ($(#[$meta:meta])* $name:ident, $ty:ty) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name {
            // Never greater than `up_to`, so incrementing cannot overflow even
            // when `up_to` is the type's maximum.
            from: $ty,
            up_to: $ty,
            // Set while a closed range still owes its endpoint `up_to`.
            last_pending: bool,
        }

        impl $name {
            /// The next value [`Splittable::try_advance`] would yield, unless
            /// only the closed endpoint remains.
            ///
            /// [`Splittable::try_advance`]: crate::Splittable::try_advance
            pub const fn from(&self) -> $ty {
                self.from
            }

            /// The exclusive upper bound, or the pending endpoint of a closed
            /// range.
            pub const fn up_to(&self) -> $ty {
                self.up_to
            }

            /// Returns true while a closed range has not yet yielded
            /// [`Self::up_to`].
            pub const fn is_last_pending(&self) -> bool {
                self.last_pending
            }

            /// Returns true once every element has been yielded.
            pub const fn is_exhausted(&self) -> bool {
                self.from == self.up_to && !self.last_pending
            }

            /// Consumes the cursor and produces two disjoint cursors, the
            /// left one holding the first `p` elements as a half-open range.
            ///
            /// `p` never exceeds `up_to - from`, so `mid` is in bounds.
            fn split_at(self, p: u64) -> (Self, Self) {
                // Below the balance threshold `p < 2^23`; at or above it
                // `p = size / 8`, so a 32-bit range (at most 2^32 elements)
                // gives `p <= 2^29` and a 64-bit one `p < 2^60`. Both fit.
                let mid = self.from + p as $ty;
                let left = Self {
                    from: self.from,
                    up_to: mid,
                    last_pending: false,
                };
                let right = Self {
                    from: mid,
                    up_to: self.up_to,
                    last_pending: self.last_pending,
                };
                (left, right)
            }
        }

        impl crate::Splittable for $name {
            type Item = $ty;

            #[inline]
            fn try_advance<F>(&mut self, mut visit: F) -> bool
            where
                F: FnMut($ty),
            {
                let i = self.from;
                if i < self.up_to {
                    self.from += 1;
                    visit(i);
                    true
                } else if self.last_pending {
                    self.last_pending = false;
                    visit(i);
                    true
                } else {
                    false
                }
            }

            fn drain_remaining<F>(&mut self, mut visit: F)
            where
                F: FnMut($ty),
            {
                let mut i = self.from;
                let up_to = self.up_to;
                let last_pending = self.last_pending;
                // Exhaust before visiting so re-entrant queries see no
                // remaining elements.
                self.from = up_to;
                self.last_pending = false;
                while i < up_to {
                    visit(i);
                    i += 1;
                }
                if last_pending {
                    visit(i);
                }
            }

            #[inline]
            fn estimate_size(&self) -> u64 {
                u64::from(self.up_to.abs_diff(self.from)).saturating_add(u64::from(self.last_pending))
            }

            fn characteristics(&self) -> crate::Characteristics {
                use crate::Characteristics as C;
                C::ORDERED
                    | C::SIZED
                    | C::SUBSIZED
                    | C::IMMUTABLE
                    | C::NONNULL
                    | C::DISTINCT
                    | C::SORTED
            }

            #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace"))]
            fn try_split(&mut self) -> Option<Self> {
                let size = crate::Splittable::estimate_size(self);
                if size <= 1 {
                    return None;
                }
                let (left, right) = self.split_at(crate::range::split_point(size));
                *self = right;
                Some(left)
            }

            fn comparator(&self) -> crate::Result<Option<crate::Comparator<$ty>>> {
                Ok(None)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw =
                    <crate::range::RawRange<$ty> as serde::Deserialize>::deserialize(deserializer)?;
                Self::try_new(raw.from, raw.up_to, raw.last_pending)
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

mod int;
mod long;
mod split;

pub use int::*;
pub use long::*;
pub use split::*;
