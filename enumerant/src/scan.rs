//! Compile-time discovery of an enumeration's valid values.
//!
//! The derive lists every declared variant (and alias) as a [`Spelling`]. The functions here pick
//! the ones inside the configured [`Bounds`], drop repeated values and order the survivors by
//! value. They are `const fn`s so that the catalogue is built while compiling.

use crate::bounds::Bounds;
use crate::name::unqualified;

/// One declared variant or alias: its raw value and its qualified name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spelling {
    raw: i128,
    name: &'static str,
    unscoped: &'static str,
}

impl Spelling {
    /// Creates a spelling, deriving the unscoped form of `name`.
    pub const fn new(raw: i128, name: &'static str) -> Self {
        Self {
            raw,
            name,
            unscoped: unqualified(name),
        }
    }

    /// The raw value.
    pub const fn raw(self) -> i128 {
        self.raw
    }

    /// The qualified name.
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// The name with its scope removed.
    pub const fn unscoped(self) -> &'static str {
        self.unscoped
    }
}

/// A spelling survives if it is in bounds and no earlier spelling has the same value.
const fn survives(declared: &[Spelling], index: usize, bounds: Bounds) -> bool {
    let raw = declared[index].raw;
    if !bounds.contains(raw) {
        return false;
    }
    let mut i = 0;
    while i < index {
        if declared[i].raw == raw {
            return false;
        }
        i += 1;
    }
    true
}

/// Counts the distinct in-bounds values among `declared`.
///
/// # Panics
///
/// Panics if there are none.
pub const fn count(declared: &[Spelling], bounds: Bounds) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < declared.len() {
        if survives(declared, i, bounds) {
            count += 1;
        }
        i += 1;
    }
    assert!(count > 0, "enumeration has no values within its bounds");
    count
}

/// Returns the indices of the surviving spellings, ascending by value.
///
/// `M` must be [`count(declared, bounds)`](count).
pub const fn scan<const M: usize>(declared: &[Spelling], bounds: Bounds) -> [usize; M] {
    let mut order = [0; M];
    let mut len = 0;
    let mut i = 0;
    while i < declared.len() {
        if survives(declared, i, bounds) {
            assert!(len < M, "scanned more values than were counted");
            let raw = declared[i].raw;
            let mut j = len;
            while j > 0 && declared[order[j - 1]].raw > raw {
                order[j] = order[j - 1];
                j -= 1;
            }
            order[j] = i;
            len += 1;
        }
        i += 1;
    }
    assert!(len == M, "scanned fewer values than were counted");
    order
}

/// Takes the first `M` spellings as the values `0..M` without scanning.
///
/// # Panics
///
/// Panics if fewer than `M` spellings are declared or a spelling's value differs from its
/// position.
pub const fn assume_contiguous<const M: usize>(declared: &[Spelling]) -> [usize; M] {
    assert!(M > 0, "enumeration has no values within its bounds");
    assert!(
        declared.len() >= M,
        "contiguous enumeration declares fewer values than assumed"
    );
    let mut order = [0; M];
    let mut i = 0;
    while i < M {
        assert!(
            declared[i].raw == i as i128,
            "contiguous enumeration must declare the values 0, 1, 2, ... in order"
        );
        order[i] = i;
        i += 1;
    }
    order
}

/// Checks whether ascending `raws` leave no gaps.
pub const fn is_contiguous(raws: &[i128]) -> bool {
    match (raws.first(), raws.last()) {
        (Some(first), Some(last)) => *last - *first + 1 == raws.len() as i128,
        _ => false,
    }
}
