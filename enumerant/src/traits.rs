use core::iter::{Copied, Zip};
use core::slice;

use crate::bounds::Bounds;
use crate::catalog::Catalog;

/// Iterator over `(value, name)` pairs in ascending value order.
pub type Entries<E> =
    Zip<Copied<slice::Iter<'static, E>>, Copied<slice::Iter<'static, &'static str>>>;

/// Fieldless enums with a compile-time catalogue of their values and names.
///
/// Implement this trait with `#[derive(Enumerant)]`. All functions are associated functions of
/// the type; lookups read the `'static` tables in [`CATALOG`](Self::CATALOG) and never allocate.
///
/// ```
/// use enumerant::Enumerant;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Enumerant)]
/// enum Component {
///     Scheme,
///     Authority,
///     Path = 12,
/// }
///
/// assert_eq!(Component::count(), 3);
/// assert_eq!(Component::enum_to_string(Component::Path), Some("Component::Path"));
/// assert_eq!(Component::string_to_enum("Component::Authority"), Some(Component::Authority));
/// assert!(!Component::is_continuous());
/// ```
pub trait Enumerant: Copy + 'static {
    /// The integer type from the enum's `#[repr]`, or `isize`.
    type Underlying: Copy;

    /// The catalogue built while compiling.
    const CATALOG: Catalog<Self>;

    /// Converts an enumerator to its integer value.
    fn enum_to_int(value: Self) -> i128;

    /// Converts an enumerator to its `#[repr]` integer.
    fn enum_to_underlying(value: Self) -> Self::Underlying;

    /// The number of enumerators.
    fn count() -> usize {
        Self::CATALOG.len()
    }

    /// All enumerators in ascending value order.
    fn values() -> &'static [Self] {
        Self::CATALOG.values()
    }

    /// All names, parallel to [`values`](Self::values).
    fn names() -> &'static [&'static str] {
        Self::CATALOG.names()
    }

    /// Iterates `(value, name)` pairs in ascending value order, from either end.
    fn iter() -> Entries<Self> {
        Self::values()
            .iter()
            .copied()
            .zip(Self::names().iter().copied())
    }

    /// The enumerator with the smallest value.
    fn front() -> Self {
        Self::values()[0]
    }

    /// The enumerator with the largest value.
    fn back() -> Self {
        Self::values()[Self::count() - 1]
    }

    /// Position of `value` in ascending value order.
    fn index(value: Self) -> Option<usize> {
        Self::CATALOG.position(Self::enum_to_int(value))
    }

    /// The qualified name of `value`.
    fn enum_to_string(value: Self) -> Option<&'static str> {
        Self::index(value).map(|i| Self::names()[i])
    }

    /// Looks up an enumerator by its exact, case-sensitive name.
    fn string_to_enum(name: &str) -> Option<Self> {
        Self::CATALOG
            .position_of_name(name)
            .map(|i| Self::values()[i])
    }

    /// Looks up an enumerator by integer value.
    fn int_to_enum(value: i128) -> Option<Self> {
        Self::CATALOG.position(value).map(|i| Self::values()[i])
    }

    /// Checks whether `value` is catalogued.
    ///
    /// Contiguous catalogues compare against the smallest and largest values; others search.
    fn contains(value: Self) -> bool {
        Self::index(value).is_some()
    }

    /// Checks whether `name` is the exact name of an enumerator.
    fn contains_name(name: &str) -> bool {
        Self::CATALOG.position_of_name(name).is_some()
    }

    /// Checks whether the integer `value` is an enumerator's value.
    fn is_valid(value: i128) -> bool {
        Self::CATALOG.is_valid(value)
    }

    /// Whether names carry the type's scope.
    fn is_scoped() -> bool {
        Self::CATALOG.is_scoped()
    }

    /// Whether the values form one gapless run.
    fn is_continuous() -> bool {
        Self::CATALOG.is_contiguous()
    }

    /// Checks whether `value` lies within the configured scan bounds.
    fn in_range(value: Self) -> bool {
        Self::bounds().contains(Self::enum_to_int(value))
    }

    /// The configured scan bounds.
    fn bounds() -> Bounds {
        Self::CATALOG.bounds()
    }

    /// The smallest catalogued value.
    fn actual_min() -> i128 {
        Self::CATALOG.actual_min()
    }

    /// The largest catalogued value.
    fn actual_max() -> i128 {
        Self::CATALOG.actual_max()
    }

    /// The type's own spelling.
    fn type_name() -> &'static str {
        Self::CATALOG.type_name()
    }

    /// All unscoped names, parallel to [`values`](Self::values).
    #[cfg(feature = "ext")]
    #[cfg_attr(feature = "_nightly", doc(cfg(feature = "ext")))]
    fn unscoped_names() -> &'static [&'static str] {
        Self::CATALOG.unscoped_names()
    }

    /// The name of `value` without its scope.
    #[cfg(feature = "ext")]
    #[cfg_attr(feature = "_nightly", doc(cfg(feature = "ext")))]
    fn enum_to_unscoped_string(value: Self) -> Option<&'static str> {
        Self::index(value).map(|i| Self::unscoped_names()[i])
    }

    /// Looks up an enumerator by its name without scope.
    #[cfg(feature = "ext")]
    #[cfg_attr(feature = "_nightly", doc(cfg(feature = "ext")))]
    fn unscoped_string_to_enum(name: &str) -> Option<Self> {
        Self::CATALOG
            .position_of_unscoped_name(name)
            .map(|i| Self::values()[i])
    }

    /// Maps an unscoped name to its qualified form. Anything else is returned unchanged.
    #[cfg(feature = "ext")]
    #[cfg_attr(feature = "_nightly", doc(cfg(feature = "ext")))]
    fn add_scope(name: &str) -> &str {
        if !Self::is_scoped() {
            return name;
        }
        match Self::CATALOG.position_of_unscoped_name(name) {
            Some(i) => Self::names()[i],
            None => name,
        }
    }

    /// Maps a qualified name to its unscoped form. Anything else is returned unchanged.
    #[cfg(feature = "ext")]
    #[cfg_attr(feature = "_nightly", doc(cfg(feature = "ext")))]
    fn remove_scope(name: &str) -> &str {
        if !Self::is_scoped() {
            return name;
        }
        match Self::CATALOG.position_of_name(name) {
            Some(i) => Self::unscoped_names()[i],
            None => name,
        }
    }

    /// Checks whether `name` is the qualified name of an enumerator.
    #[cfg(feature = "ext")]
    #[cfg_attr(feature = "_nightly", doc(cfg(feature = "ext")))]
    fn has_scope(name: &str) -> bool {
        Self::is_scoped() && Self::contains_name(name)
    }

    /// Calls `f` with every enumerator in ascending order and hands `f` back.
    #[cfg(feature = "ext")]
    #[cfg_attr(feature = "_nightly", doc(cfg(feature = "ext")))]
    fn for_each<F: FnMut(Self)>(mut f: F) -> F {
        for &value in Self::values() {
            f(value);
        }
        f
    }

    /// Like [`for_each`](Self::for_each), stopping after `n` enumerators.
    #[cfg(feature = "ext")]
    #[cfg_attr(feature = "_nightly", doc(cfg(feature = "ext")))]
    fn for_each_n<F: FnMut(Self)>(n: usize, mut f: F) -> F {
        for &value in Self::values().iter().take(n) {
            f(value);
        }
        f
    }

    /// Like [`for_each`](Self::for_each), passing `receiver` along to every call.
    #[cfg(feature = "ext")]
    #[cfg_attr(feature = "_nightly", doc(cfg(feature = "ext")))]
    fn for_each_with<C: ?Sized, F: FnMut(&mut C, Self)>(receiver: &mut C, mut f: F) -> F {
        for &value in Self::values() {
            f(receiver, value);
        }
        f
    }

    /// Like [`for_each_with`](Self::for_each_with), stopping after `n` enumerators.
    #[cfg(feature = "ext")]
    #[cfg_attr(feature = "_nightly", doc(cfg(feature = "ext")))]
    fn for_each_n_with<C: ?Sized, F: FnMut(&mut C, Self)>(
        n: usize,
        receiver: &mut C,
        mut f: F,
    ) -> F {
        for &value in Self::values().iter().take(n) {
            f(receiver, value);
        }
        f
    }
}
