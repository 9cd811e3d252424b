use core::fmt::{self, Debug, Display, Formatter};

use crate::bounds::Bounds;
use crate::scan::is_contiguous;
use crate::traits::Enumerant;

/// The compile-time tables describing one enumeration.
///
/// Each derived type carries one as [`Enumerant::CATALOG`]. Values, raw integers and names are
/// parallel slices in ascending value order; the `by_*` slices are positions into them sorted by
/// name.
pub struct Catalog<E: 'static> {
    type_name: &'static str,
    scoped: bool,
    bounds: Bounds,
    contiguous: bool,
    values: &'static [E],
    raws: &'static [i128],
    names: &'static [&'static str],
    by_name: &'static [usize],
    #[cfg(feature = "ext")]
    unscoped_names: &'static [&'static str],
    #[cfg(feature = "ext")]
    by_unscoped: &'static [usize],
}

impl<E: 'static> Clone for Catalog<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: 'static> Copy for Catalog<E> {}

impl<E: 'static> Catalog<E> {
    #[doc(hidden)]
    pub const fn new(
        type_name: &'static str,
        scoped: bool,
        bounds: Bounds,
        values: &'static [E],
        raws: &'static [i128],
        names: &'static [&'static str],
        by_name: &'static [usize],
    ) -> Self {
        assert!(!values.is_empty(), "enumeration has no values within its bounds");
        assert!(
            values.len() == raws.len() && values.len() == names.len(),
            "catalogue tables differ in length"
        );
        assert!(
            values.len() == by_name.len(),
            "catalogue tables differ in length"
        );
        Self {
            type_name,
            scoped,
            bounds,
            contiguous: is_contiguous(raws),
            values,
            raws,
            names,
            by_name,
            #[cfg(feature = "ext")]
            unscoped_names: names,
            #[cfg(feature = "ext")]
            by_unscoped: by_name,
        }
    }

    #[doc(hidden)]
    #[cfg_attr(not(feature = "ext"), allow(unused_mut, unused_variables))]
    pub const fn with_unscoped(
        mut self,
        unscoped_names: &'static [&'static str],
        by_unscoped: &'static [usize],
    ) -> Self {
        assert!(
            unscoped_names.len() == self.values.len() && by_unscoped.len() == self.values.len(),
            "catalogue tables differ in length"
        );
        #[cfg(feature = "ext")]
        {
            self.unscoped_names = unscoped_names;
            self.by_unscoped = by_unscoped;
        }
        self
    }

    /// The number of enumerators.
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: a catalogue holds at least one enumerator.
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The type's own spelling, including any configured scope.
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether names are qualified by the type's scope.
    pub const fn is_scoped(&self) -> bool {
        self.scoped
    }

    /// Whether the values form one gapless run.
    pub const fn is_contiguous(&self) -> bool {
        self.contiguous
    }

    /// The configured scan bounds.
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Enumerators in ascending value order.
    pub const fn values(&self) -> &'static [E] {
        self.values
    }

    /// Raw values, ascending.
    pub const fn raws(&self) -> &'static [i128] {
        self.raws
    }

    /// Names parallel to [`values`](Self::values).
    pub const fn names(&self) -> &'static [&'static str] {
        self.names
    }

    /// The smallest raw value.
    pub const fn actual_min(&self) -> i128 {
        self.raws[0]
    }

    /// The largest raw value.
    pub const fn actual_max(&self) -> i128 {
        self.raws[self.raws.len() - 1]
    }

    /// Position of `raw` in ascending value order.
    ///
    /// Contiguous catalogues answer by comparing against the extremes; sparse ones search.
    pub const fn position(&self, raw: i128) -> Option<usize> {
        if self.contiguous {
            if raw < self.actual_min() || raw > self.actual_max() {
                None
            } else {
                Some((raw - self.actual_min()) as usize)
            }
        } else {
            let (mut lo, mut hi) = (0, self.raws.len());
            while lo < hi {
                let mid = lo + (hi - lo) / 2;
                if self.raws[mid] < raw {
                    lo = mid + 1;
                } else if self.raws[mid] > raw {
                    hi = mid;
                } else {
                    return Some(mid);
                }
            }
            None
        }
    }

    /// Checks whether `raw` is the value of an enumerator.
    pub const fn is_valid(&self, raw: i128) -> bool {
        self.position(raw).is_some()
    }

    /// Position of the enumerator named `name` in ascending value order.
    pub fn position_of_name(&self, name: &str) -> Option<usize> {
        find_name(self.names, self.by_name, name)
    }

    /// Position of the enumerator whose unscoped name is `name`.
    #[cfg(feature = "ext")]
    #[cfg_attr(feature = "_nightly", doc(cfg(feature = "ext")))]
    pub fn position_of_unscoped_name(&self, name: &str) -> Option<usize> {
        find_name(self.unscoped_names, self.by_unscoped, name)
    }

    /// Unscoped names parallel to [`values`](Self::values).
    #[cfg(feature = "ext")]
    #[cfg_attr(feature = "_nightly", doc(cfg(feature = "ext")))]
    pub const fn unscoped_names(&self) -> &'static [&'static str] {
        self.unscoped_names
    }
}

/// Forces evaluation of a derived catalogue and checks its ordering.
#[doc(hidden)]
pub const fn assert_catalog<E: 'static>(catalog: &Catalog<E>) {
    let raws = catalog.raws();
    let mut i = 1;
    while i < raws.len() {
        assert!(
            raws[i - 1] < raws[i],
            "catalogue values must be strictly increasing"
        );
        i += 1;
    }
}

fn find_name(names: &[&str], sorted: &[usize], name: &str) -> Option<usize> {
    sorted
        .binary_search_by(|&i| names[i].cmp(name))
        .ok()
        .map(|k| sorted[k])
}

/// Formats an enumerator by name.
///
/// Values outside the catalogue print their raw integer instead.
///
/// ```
/// use enumerant::{Enumerant, Named};
///
/// #[derive(Clone, Copy, Enumerant)]
/// enum Color {
///     Red,
///     Green,
/// }
///
/// assert_eq!(Named(Color::Green).to_string(), "Color::Green");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Named<E>(pub E);

impl<E: Enumerant> Display for Named<E> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match E::enum_to_string(self.0) {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", E::enum_to_int(self.0)),
        }
    }
}

impl<E: Enumerant> Debug for Named<E> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::{assert_catalog, Catalog};
    use crate::bounds::Bounds;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Sparse {
        A = -2,
        B = 3,
        C = 4,
    }

    const SPARSE: Catalog<Sparse> = Catalog::new(
        "Sparse",
        true,
        Bounds::DEFAULT,
        &[Sparse::A, Sparse::B, Sparse::C],
        &[-2, 3, 4],
        &["Sparse::A", "Sparse::B", "Sparse::C"],
        &[0, 1, 2],
    );

    const DENSE: Catalog<u8> = Catalog::new(
        "Dense",
        false,
        Bounds::DEFAULT,
        &[0, 1, 2],
        &[0, 1, 2],
        &["Zero", "One", "Two"],
        &[1, 2, 0],
    );

    #[test]
    fn properties() {
        assert_eq!(SPARSE.len(), 3);
        assert!(!SPARSE.is_contiguous());
        assert!(DENSE.is_contiguous());
        assert!(SPARSE.is_scoped());
        assert_eq!(SPARSE.type_name(), "Sparse");
        assert_eq!((SPARSE.actual_min(), SPARSE.actual_max()), (-2, 4));
        assert_eq!(SPARSE.values()[1], Sparse::B);
    }

    #[test]
    fn positions() {
        assert_eq!(SPARSE.position(-2), Some(0));
        assert_eq!(SPARSE.position(4), Some(2));
        assert_eq!(SPARSE.position(0), None);
        assert_eq!(DENSE.position(2), Some(2));
        assert_eq!(DENSE.position(3), None);
        assert_eq!(DENSE.position(-1), None);
    }

    #[test]
    fn usable_in_constants() {
        const VALID: bool = SPARSE.is_valid(3);
        const INVALID: bool = SPARSE.is_valid(100);
        assert!(VALID);
        assert!(!INVALID);
    }

    #[test]
    fn names() {
        assert_eq!(DENSE.position_of_name("Two"), Some(2));
        assert_eq!(DENSE.position_of_name("Zero"), Some(0));
        assert_eq!(DENSE.position_of_name("zero"), None);
        assert_eq!(SPARSE.position_of_name("Sparse::C"), Some(2));
    }

    #[test]
    fn ordered_catalogues_pass() {
        assert_catalog(&SPARSE);
        assert_catalog(&DENSE);
    }

    #[test]
    #[should_panic(expected = "catalogue values must be strictly increasing")]
    fn unordered_catalogue() {
        assert_catalog(&Catalog::<u8>::new(
            "Unordered",
            true,
            Bounds::DEFAULT,
            &[1, 0],
            &[1, 0],
            &["B", "A"],
            &[1, 0],
        ));
    }

    #[test]
    #[should_panic(expected = "enumeration has no values within its bounds")]
    fn empty_catalog() {
        Catalog::<u8>::new("Empty", true, Bounds::DEFAULT, &[], &[], &[], &[]);
    }

    #[test]
    #[should_panic(expected = "catalogue tables differ in length")]
    fn mismatched_tables() {
        Catalog::<u8>::new("Bad", true, Bounds::DEFAULT, &[0, 1], &[0], &["A"], &[0]);
    }
}
