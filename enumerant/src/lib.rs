#![cfg_attr(not(test), no_std)]
#![cfg_attr(feature = "_nightly", feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod bitset;
mod bounds;
mod catalog;
#[cfg(feature = "ext")]
#[cfg_attr(feature = "_nightly", doc(cfg(feature = "ext")))]
pub mod dispatch;
mod error;
pub mod name;
pub mod prelude;
#[doc(hidden)]
pub mod scan;
#[cfg(feature = "serde")]
#[cfg_attr(feature = "_nightly", doc(cfg(feature = "serde")))]
pub mod serde;
mod storage;
#[doc(hidden)]
pub mod table;
mod traits;
pub mod type_name;

// For macro access via the configured crate path.
#[doc(hidden)]
pub mod __private {
    pub use crate::bitset::assert_dense;
    pub use crate::bounds::Bounds;
    pub use crate::catalog::{assert_catalog, Catalog};
    pub use crate::scan::{self, Spelling};
    pub use crate::table;
}

mod sealed {
    pub trait Sealed {}
}

pub use bitset::{Dense, EnumBitset, Iter, ParseOptions};
pub use bounds::Bounds;
pub use catalog::{Catalog, Named};
pub use error::{OverflowError, UnknownNameError};
pub use storage::BitStorage;
pub use traits::{Entries, Enumerant};

/// Derives [`Enumerant`] for a fieldless enum.
///
/// The derive lists the variants, and constant evaluation builds the catalogue while compiling:
/// values inside the scan bounds are kept, repeated values collapse to the first declared
/// spelling, and the survivors are sorted by value. Configuration errors and an empty catalogue
/// stop compilation.
///
/// # Container attributes
///
/// - `#[enumerant(crate_path = path)]`: where to find this crate. Defaults to `::enumerant`.
/// - `#[enumerant(min = N, max = N)]`: scan bounds. Defaults to `-128` and `127`, or to
///   `ENUMERANT_MIN_VALUE` / `ENUMERANT_MAX_VALUE` when those are set while `enumerant-macros` is
///   built.
/// - `#[enumerant(scope = "a::b::Type")]`: the text qualifying every name. Defaults to the enum's
///   identifier.
/// - `#[enumerant(unscoped)]`: names are bare variant spellings.
/// - `#[enumerant(contiguous)]`: trust that the variants are `0, 1, 2, ...` in order and skip the
///   scan. Compilation fails if they are not.
/// - `#[enumerant(bitset)]`: implement [`Dense`] so that the type can index an [`EnumBitset`].
///
/// # Variant attributes
///
/// - `#[enumerant(rename = "text")]`: spell the variant differently. No two variants may share a
///   spelling.
/// - `#[enumerant(alias = NAME)]`: add an associated constant `NAME` equal to the variant. An alias
///   is never catalogued under its own name.
/// - `#[enumerant(first)]`, `#[enumerant(last)]`: use the variant's value as a scan bound.
///
/// # Examples
///
/// ```
/// use enumerant::Enumerant;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Enumerant)]
/// #[enumerant(scope = "net::Component")]
/// enum Component {
///     Scheme,
///     #[enumerant(alias = HOST)]
///     Host,
///     #[enumerant(rename = "path")]
///     Path = 12,
/// }
///
/// assert_eq!(Component::HOST, Component::Host);
/// assert_eq!(Component::type_name(), "net::Component");
/// assert_eq!(Component::enum_to_string(Component::Path), Some("net::Component::path"));
/// assert_eq!(Component::string_to_enum("net::Component::HOST"), None);
/// ```
///
/// ```compile_fail
/// use enumerant::Enumerant;
///
/// // No value lies inside the bounds.
/// #[derive(Clone, Copy, Enumerant)]
/// #[enumerant(min = 0, max = 10)]
/// enum Far {
///     Away = 100,
/// }
/// ```
pub use enumerant_macros::Enumerant;
