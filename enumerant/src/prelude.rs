//! Convenience re-exports.

#[doc(no_inline)]
pub use crate::{Bounds, Dense, EnumBitset, Enumerant, Named, ParseOptions};

#[doc(no_inline)]
#[cfg(feature = "ext")]
#[cfg_attr(feature = "_nightly", doc(cfg(feature = "ext")))]
pub use crate::dispatch::{dispatch, dispatch_or_last, dispatch_with};
