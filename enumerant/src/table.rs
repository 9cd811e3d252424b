//! Compile-time construction of the name tables in a [`Catalog`](crate::Catalog).

use core::cmp::Ordering;

use crate::scan::Spelling;

/// The raw values of the spellings picked by `order`.
pub const fn raws<const M: usize>(declared: &[Spelling], order: &[usize; M]) -> [i128; M] {
    let mut raws = [0; M];
    let mut i = 0;
    while i < M {
        raws[i] = declared[order[i]].raw();
        i += 1;
    }
    raws
}

/// The qualified names of the spellings picked by `order`.
pub const fn names<const M: usize>(
    declared: &[Spelling],
    order: &[usize; M],
) -> [&'static str; M] {
    let mut names = [""; M];
    let mut i = 0;
    while i < M {
        names[i] = declared[order[i]].name();
        i += 1;
    }
    names
}

/// The unscoped names of the spellings picked by `order`.
pub const fn unscoped_names<const M: usize>(
    declared: &[Spelling],
    order: &[usize; M],
) -> [&'static str; M] {
    let mut names = [""; M];
    let mut i = 0;
    while i < M {
        names[i] = declared[order[i]].unscoped();
        i += 1;
    }
    names
}

/// Positions into `names` ordered by name. Equal names keep their relative order.
pub const fn sort_by_name<const M: usize>(names: &[&str; M]) -> [usize; M] {
    let mut sorted = [0; M];
    let mut i = 0;
    while i < M {
        let mut j = i;
        while j > 0 && matches!(compare(names[sorted[j - 1]], names[i]), Ordering::Greater) {
            sorted[j] = sorted[j - 1];
            j -= 1;
        }
        sorted[j] = i;
        i += 1;
    }
    sorted
}

/// Byte-wise comparison, the order of `str::cmp`.
pub const fn compare(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut i = 0;
    while i < a.len() && i < b.len() {
        if a[i] < b[i] {
            return Ordering::Less;
        }
        if a[i] > b[i] {
            return Ordering::Greater;
        }
        i += 1;
    }
    if a.len() < b.len() {
        Ordering::Less
    } else if a.len() > b.len() {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use core::cmp::Ordering;

    use super::{compare, names, raws, sort_by_name, unscoped_names};
    use crate::scan::Spelling;

    const DECLARED: &[Spelling] = &[
        Spelling::new(2, "Color::Red"),
        Spelling::new(0, "Color::Green"),
        Spelling::new(1, "Color::Blue"),
    ];
    const ORDER: [usize; 3] = [1, 2, 0];

    #[test]
    fn projections() {
        assert_eq!(raws(DECLARED, &ORDER), [0, 1, 2]);
        assert_eq!(
            names(DECLARED, &ORDER),
            ["Color::Green", "Color::Blue", "Color::Red"],
        );
        assert_eq!(unscoped_names(DECLARED, &ORDER), ["Green", "Blue", "Red"]);
    }

    #[test]
    fn sorted_positions() {
        const NAMES: [&str; 3] = names(DECLARED, &ORDER);
        const BY_NAME: [usize; 3] = sort_by_name(&NAMES);
        assert_eq!(BY_NAME, [1, 0, 2]);
    }

    #[test]
    fn sort_is_stable() {
        assert_eq!(sort_by_name(&["b", "a", "b", "a"]), [1, 3, 0, 2]);
    }

    #[test]
    fn compare_matches_str_cmp() {
        let words = ["", "a", "A", "ab", "b", "Z", "Zero", "Grün", "Gru", "~"];
        for a in words {
            for b in words {
                assert_eq!(compare(a, b), a.cmp(b), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn prefix_orders_first() {
        assert_eq!(compare("Path", "PathSegment"), Ordering::Less);
    }
}
