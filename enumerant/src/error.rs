use alloc::string::String;
use core::fmt::{self, Display, Formatter};

/// The error type returned when a bitset does not fit the requested integer width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverflowError {
    pub(crate) width: usize,
}

impl OverflowError {
    /// The width in bits that was too narrow.
    pub fn width(&self) -> usize {
        self.width
    }
}

impl Display for OverflowError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "bitset value does not fit in {} bits", self.width)
    }
}

impl core::error::Error for OverflowError {}

/// The error type returned when strict bitset parsing meets a name it cannot resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownNameError {
    pub(crate) name: String,
}

impl UnknownNameError {
    /// The token that did not name an enumerator.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for UnknownNameError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "unknown enumerator name {:?}", self.name)
    }
}

impl core::error::Error for UnknownNameError {}
