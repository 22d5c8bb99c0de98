use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub};

/// The set of guarantees a [`Splittable`] currently makes about its elements.
///
/// Consumers inspect these to pick cheaper algorithms, e.g. to pre-size an
/// output buffer when [`Characteristics::SIZED`] holds, or to merge split
/// results in any order when [`Characteristics::ORDERED`] does not.
///
/// The bit assignment is the conventional spliterator one:
///
/// ```text
///  Bit:    14         10          8         6       4         2          0
///        +----------+-----------+---------+-------+---------+--------+----------+
///  Flag: | SUBSIZED | IMMUTABLE | NONNULL | SIZED | ORDERED | SORTED | DISTINCT |
///        +----------+-----------+---------+-------+---------+--------+----------+
/// ```
///
/// # Example
///
/// ```
/// use splitseq::Characteristics;
///
/// let c = Characteristics::ORDERED | Characteristics::SIZED;
/// assert!(c.contains(Characteristics::SIZED));
/// assert!(!c.contains(Characteristics::SORTED));
/// assert_eq!(c - Characteristics::SIZED, Characteristics::ORDERED);
/// ```
///
/// [`Splittable`]: crate::Splittable
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawCharacteristics")
)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Characteristics {
    bits: u16,
}

/// Wire form of [`Characteristics`]; unknown bits are dropped on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCharacteristics {
    bits: u16,
}

#[cfg(feature = "serde")]
impl From<RawCharacteristics> for Characteristics {
    fn from(raw: RawCharacteristics) -> Self {
        Self::from_bits_truncate(raw.bits)
    }
}

impl Characteristics {
    /// No two yielded elements are equal.
    pub const DISTINCT: Self = Self::from_bits_truncate(0x0001);

    /// Elements are yielded in ascending order under the sequence's
    /// comparator.
    pub const SORTED: Self = Self::from_bits_truncate(0x0004);

    /// Elements have a defined encounter order that splitting preserves.
    pub const ORDERED: Self = Self::from_bits_truncate(0x0010);

    /// `estimate_size` is the exact number of remaining elements.
    pub const SIZED: Self = Self::from_bits_truncate(0x0040);

    /// No element is absent.
    pub const NONNULL: Self = Self::from_bits_truncate(0x0100);

    /// The element source cannot be modified during traversal.
    pub const IMMUTABLE: Self = Self::from_bits_truncate(0x0400);

    /// Every piece produced by splitting is itself `SIZED`.
    pub const SUBSIZED: Self = Self::from_bits_truncate(0x4000);

    const MASK: u16 = 0x0001 | 0x0004 | 0x0010 | 0x0040 | 0x0100 | 0x0400 | 0x4000;

    const NAMES: [(Self, &'static str); 7] = [
        (Self::ORDERED, "ORDERED"),
        (Self::DISTINCT, "DISTINCT"),
        (Self::SORTED, "SORTED"),
        (Self::SIZED, "SIZED"),
        (Self::NONNULL, "NONNULL"),
        (Self::IMMUTABLE, "IMMUTABLE"),
        (Self::SUBSIZED, "SUBSIZED"),
    ];

    /// The empty set.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Every known characteristic.
    pub const fn all() -> Self {
        Self { bits: Self::MASK }
    }

    /// Builds a set from raw bits, discarding unknown ones.
    pub const fn from_bits_truncate(bits: u16) -> Self {
        Self {
            bits: bits & Self::MASK,
        }
    }

    /// Raw bit representation.
    pub const fn bits(&self) -> u16 {
        self.bits
    }

    /// Returns true if no flag is set.
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns true if every flag of `other` is present in `self`.
    pub const fn contains(&self, other: Self) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Returns true if `self` and `other` share at least one flag.
    pub const fn intersects(&self, other: Self) -> bool {
        self.bits & other.bits != 0
    }

    /// Flags present in either set.
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Flags present in both sets.
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Flags of `self` that are not in `other`.
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }
}

impl BitOr for Characteristics {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Characteristics {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for Characteristics {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for Characteristics {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl Sub for Characteristics {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl Not for Characteristics {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_bits_truncate(!self.bits)
    }
}

impl fmt::Debug for Characteristics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Characteristics(empty)");
        }
        f.write_str("Characteristics(")?;
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        f.write_str(")")
    }
}
