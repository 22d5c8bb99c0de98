use crate::{
    Characteristics, Concat, EMPTY_INT, Error, RangeI32, RangeI64, Splittable, UNKNOWN_SIZE,
};
use alloc::collections::VecDeque;
use alloc::vec::Vec;

/// A sized sequence far too large to traverse, used to overflow the summed
/// size of a concatenation.
#[derive(Debug)]
struct Huge {
    size: u64,
}

impl Splittable for Huge {
    type Item = i64;

    fn try_advance<F>(&mut self, mut visit: F) -> bool
    where
        F: FnMut(i64),
    {
        if self.size == 0 {
            return false;
        }
        self.size -= 1;
        visit(0);
        true
    }

    fn estimate_size(&self) -> u64 {
        self.size
    }

    fn characteristics(&self) -> Characteristics {
        Characteristics::SIZED | Characteristics::SUBSIZED | Characteristics::ORDERED
    }

    fn try_split(&mut self) -> Option<Self> {
        None
    }
}

/// An ordered run of values reporting whatever flags the test chooses.
struct Listed {
    items: VecDeque<i32>,
    flags: Characteristics,
}

impl Listed {
    fn new(items: &[i32], flags: Characteristics) -> Self {
        Self {
            items: items.iter().copied().collect(),
            flags,
        }
    }
}

impl Splittable for Listed {
    type Item = i32;

    fn try_advance<F>(&mut self, mut visit: F) -> bool
    where
        F: FnMut(i32),
    {
        match self.items.pop_front() {
            Some(i) => {
                visit(i);
                true
            }
            None => false,
        }
    }

    fn estimate_size(&self) -> u64 {
        self.items.len() as u64
    }

    fn characteristics(&self) -> Characteristics {
        self.flags
    }

    fn try_split(&mut self) -> Option<Self> {
        None
    }
}

fn collect<S: Splittable>(seq: &mut S) -> Vec<S::Item> {
    let mut out = Vec::new();
    seq.drain_remaining(|i| out.push(i));
    out
}

fn split_and_collect<S: Splittable>(mut seq: S, out: &mut Vec<S::Item>) {
    match seq.try_split() {
        Some(prefix) => {
            split_and_collect(prefix, out);
            split_and_collect(seq, out);
        }
        None => seq.drain_remaining(|i| out.push(i)),
    }
}

#[test]
fn yields_first_then_second() {
    let mut seq = Concat::new(RangeI32::range(0, 3), RangeI32::range(10, 14));
    assert_eq!(seq.estimate_size(), 7);
    assert_eq!(seq.exact_size(), Some(7));
    assert_eq!(collect(&mut seq), [0, 1, 2, 10, 11, 12, 13]);
    assert_eq!(seq.estimate_size(), 0);
}

#[test]
fn try_advance_crosses_into_second() {
    let mut seq = Concat::new(RangeI32::range(0, 2), RangeI32::range(5, 7));
    let mut seen = Vec::new();
    while seq.try_advance(|i| seen.push(i)) {
        assert_eq!(seq.estimate_size(), 4 - seen.len() as u64);
    }
    assert_eq!(seen, [0, 1, 5, 6]);
    assert!(!seq.is_before_split());
}

#[test]
fn sorted_distinct_children_concatenate_to_ordered() {
    let flags = Characteristics::ORDERED | Characteristics::SORTED | Characteristics::DISTINCT;
    let mut seq = Concat::new(Listed::new(&[1, 2, 3], flags), Listed::new(&[0, 1, 2, 3], flags));
    assert_eq!(seq.estimate_size(), 7);
    assert_eq!(seq.characteristics(), Characteristics::ORDERED);
    assert_eq!(collect(&mut seq), [1, 2, 3, 0, 1, 2, 3]);
}

#[test]
fn sortedness_and_distinctness_are_dropped() {
    let seq = Concat::new(RangeI32::range(0, 3), RangeI32::range(10, 14));
    assert_eq!(
        seq.characteristics(),
        Characteristics::ORDERED
            | Characteristics::SIZED
            | Characteristics::SUBSIZED
            | Characteristics::IMMUTABLE
            | Characteristics::NONNULL
    );

    let seq = Concat::new(EMPTY_INT, RangeI32::range(0, 3));
    assert_eq!(
        seq.characteristics(),
        Characteristics::SIZED | Characteristics::SUBSIZED
    );
}

#[test]
fn first_split_hands_out_first() {
    let mut seq = Concat::new(RangeI32::range(0, 4), RangeI32::range(10, 14));
    assert!(seq.is_before_split());

    let mut prefix = seq.try_split().unwrap();
    assert!(!seq.is_before_split());
    assert!(!prefix.is_before_split());
    assert_eq!(prefix.estimate_size(), 4);
    assert_eq!(seq.estimate_size(), 4);

    // Each side now reports its remaining child's characteristics.
    assert!(prefix.has_characteristics(Characteristics::SORTED));
    assert!(seq.has_characteristics(Characteristics::SORTED | Characteristics::DISTINCT));

    let mut mid = seq.try_split().unwrap();
    assert_eq!(collect(&mut prefix), [0, 1, 2, 3]);
    assert_eq!(collect(&mut mid), [10, 11]);
    assert_eq!(collect(&mut seq), [12, 13]);
}

#[test]
fn handed_out_first_keeps_splitting() {
    let mut seq = Concat::new(RangeI32::range(0, 8), EMPTY_INT);
    let mut prefix = seq.try_split().unwrap();
    let mut quarter = prefix.try_split().unwrap();
    assert_eq!(collect(&mut quarter), [0, 1, 2, 3]);
    assert_eq!(collect(&mut prefix), [4, 5, 6, 7]);
    assert!(seq.try_split().is_none());
    assert!(collect(&mut seq).is_empty());
}

#[test]
fn comparator_is_unresolved_until_split() {
    let mut seq = Concat::new(RangeI32::range(0, 4), RangeI32::range(4, 8));
    assert_eq!(seq.comparator(), Err(Error::ConcatUnresolved));

    let prefix = seq.try_split().unwrap();
    assert_eq!(prefix.comparator(), Ok(None));
    assert_eq!(seq.comparator(), Ok(None));

    // Running `first` dry resolves the concatenation too, but only once a
    // traversal has observed it.
    let mut seq = Concat::new(RangeI32::range(0, 1), RangeI32::range(5, 6));
    assert!(seq.try_advance(|i| assert_eq!(i, 0)));
    assert_eq!(seq.comparator(), Err(Error::ConcatUnresolved));
    assert!(seq.try_advance(|i| assert_eq!(i, 5)));
    assert_eq!(seq.comparator(), Ok(None));
}

#[test]
fn overflowing_size_is_unsized() {
    let seq = Concat::new(Huge { size: u64::MAX - 1 }, Huge { size: 2 });
    assert!(seq.is_unsized());
    assert_eq!(seq.estimate_size(), UNKNOWN_SIZE);
    assert_eq!(seq.exact_size(), None);
    assert_eq!(seq.characteristics(), Characteristics::ORDERED);

    let fits = Concat::new(Huge { size: u64::MAX - 2 }, Huge { size: 1 });
    assert!(!fits.is_unsized());
    assert_eq!(fits.exact_size(), Some(u64::MAX - 1));
}

#[test]
fn unsized_concat_recovers_sizes_after_split() {
    let mut seq = Concat::new(Huge { size: u64::MAX }, Huge { size: 3 });
    let prefix = seq.try_split().unwrap();
    assert_eq!(prefix.exact_size(), Some(u64::MAX));
    assert_eq!(seq.exact_size(), Some(3));
    assert_eq!(collect(&mut seq), [0, 0, 0]);
}

#[test]
fn nested_concat_splits_back_to_the_whole() {
    let inner = Concat::new(RangeI64::range(0, 100), RangeI64::range_closed(100, 199));
    let seq = Concat::new(inner, Concat::new(RangeI64::range(200, 300), RangeI64::range(300, 300)));
    assert_eq!(seq.estimate_size(), 300);

    let mut out = Vec::new();
    split_and_collect(seq, &mut out);
    assert_eq!(out, (0..300).collect::<Vec<_>>());
}

#[test]
fn drain_after_partial_advance() {
    let mut seq = Concat::new(RangeI32::range(0, 3), RangeI32::range_closed(3, 5));
    assert!(seq.try_advance(|i| assert_eq!(i, 0)));
    assert_eq!(collect(&mut seq), [1, 2, 3, 4, 5]);
    assert!(!seq.try_advance(|_| panic!("drained concatenation yielded")));
}

#[test]
fn drain_never_widens_characteristics() {
    let mut seq = Concat::new(RangeI32::range(0, 3), RangeI32::range(10, 14));
    let before = seq.characteristics();

    assert_eq!(collect(&mut seq), [0, 1, 2, 10, 11, 12, 13]);
    assert!(before.contains(seq.characteristics()));
    assert!(!seq.has_characteristics(Characteristics::SORTED));
    assert!(seq.is_before_split());
    assert_eq!(seq.comparator(), Err(Error::ConcatUnresolved));
    assert_eq!(seq.estimate_size(), 0);
}
