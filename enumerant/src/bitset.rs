//! A fixed-width set of enumerators, one bit per value.

use alloc::string::String;
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter, Write};
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};
use core::str::FromStr;

use num_traits::{One, PrimInt, Zero};
use paste::paste;

use crate::catalog::{Catalog, Named};
use crate::error::{OverflowError, UnknownNameError};
use crate::storage::BitStorage;
use crate::traits::Enumerant;

/// Enumerations whose values are exactly `0..count()`, usable as [`EnumBitset`] positions.
///
/// Implement this trait with `#[enumerant(bitset)]` on a derived enum. The derive picks the
/// narrowest word that holds every variant and checks while compiling that the values start at
/// zero and leave no gaps.
pub trait Dense: Enumerant {
    /// The word holding one bit per enumerator.
    type Bits: BitStorage;
}

#[doc(hidden)]
pub const fn assert_dense<E: 'static>(catalog: &Catalog<E>, variants: usize, bits: u32) {
    assert!(
        catalog.len() == variants,
        "bitset enumeration has values outside its bounds"
    );
    assert!(
        catalog.is_contiguous(),
        "bitset enumeration must be contiguous"
    );
    assert!(
        catalog.actual_min() == 0,
        "bitset enumeration must start at zero"
    );
    assert!(catalog.len() <= bits as usize, "requested bitset overflow");
}

/// How [`EnumBitset::parse`] splits and resolves text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    separator: char,
    ignore_errors: bool,
    #[cfg(feature = "ext")]
    anyscope: bool,
}

impl ParseOptions {
    /// `|`-separated names; unknown names are skipped.
    pub const fn new() -> Self {
        Self {
            separator: '|',
            ignore_errors: true,
            #[cfg(feature = "ext")]
            anyscope: false,
        }
    }

    /// Like [`new`](Self::new), but unknown names are errors.
    pub const fn strict() -> Self {
        Self::new().ignore_errors(false)
    }

    /// Sets the character between names.
    pub const fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Chooses between skipping and rejecting unknown names.
    pub const fn ignore_errors(mut self, ignore_errors: bool) -> Self {
        self.ignore_errors = ignore_errors;
        self
    }

    /// Accepts unscoped names alongside qualified ones.
    #[cfg(feature = "ext")]
    #[cfg_attr(feature = "_nightly", doc(cfg(feature = "ext")))]
    pub const fn anyscope(mut self, anyscope: bool) -> Self {
        self.anyscope = anyscope;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A set of enumerators of a [`Dense`] enum stored as one bit per value.
///
/// Bit `i` is the enumerator whose value is `i`. Bits at positions `size()` and above are always
/// clear.
///
/// ```
/// use enumerant::{EnumBitset, Enumerant};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Enumerant)]
/// #[enumerant(bitset)]
/// enum Numbers {
///     Zero,
///     One,
///     Two,
///     Three,
/// }
///
/// let set: EnumBitset<Numbers> = "Numbers::One|Numbers::Three".parse().unwrap();
/// assert!(set.test(Numbers::Three));
/// assert_eq!(set.to_u64(), 0b1010);
/// assert_eq!(set.to_string(), "1010");
/// ```
pub struct EnumBitset<E: Dense> {
    bits: E::Bits,
    _marker: PhantomData<fn() -> E>,
}

impl<E: Dense> EnumBitset<E> {
    fn from_word(bits: E::Bits) -> Self {
        Self {
            bits: bits & Self::mask(),
            _marker: PhantomData,
        }
    }

    fn mask() -> E::Bits {
        E::Bits::low_mask(E::count())
    }

    fn bit(pos: usize) -> E::Bits {
        E::Bits::one() << pos
    }

    fn position(value: E) -> usize {
        E::enum_to_int(value) as usize
    }

    /// Creates an empty set.
    pub fn new() -> Self {
        Self::from_word(E::Bits::zero())
    }

    /// Creates a set from raw bits.
    ///
    /// Fails if a bit at position `size()` or above is set.
    pub fn from_bits(bits: u64) -> Result<Self, OverflowError> {
        let width = E::count();
        if bits & !u64::low_mask(width) != 0 {
            return Err(OverflowError { width });
        }
        match E::Bits::narrow(bits) {
            Some(bits) => Ok(Self::from_word(bits)),
            None => Err(OverflowError { width }),
        }
    }

    /// The raw storage word.
    pub fn to_bits(&self) -> E::Bits {
        self.bits
    }

    /// The raw bits widened to `u64`.
    pub fn to_u64(&self) -> u64 {
        self.bits.widen()
    }

    /// The number of positions, one per enumerator.
    pub fn size(&self) -> usize {
        E::count()
    }

    /// The number of enumerators in the set.
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// The number of enumerators not in the set.
    pub fn not_count(&self) -> usize {
        self.size() - self.count()
    }

    /// Checks whether `value` is in the set.
    pub fn test(&self, value: E) -> bool {
        self.test_bit(Self::position(value))
    }

    /// Checks the bit at `pos`. Positions past the end are clear.
    pub fn test_bit(&self, pos: usize) -> bool {
        pos < self.size() && self.bits & Self::bit(pos) != E::Bits::zero()
    }

    /// Adds `value`.
    pub fn set(&mut self, value: E) -> &mut Self {
        self.set_bit(Self::position(value))
    }

    /// Adds or removes `value`.
    pub fn set_to(&mut self, value: E, on: bool) -> &mut Self {
        if on {
            self.set(value)
        } else {
            self.reset(value)
        }
    }

    /// Adds every enumerator.
    pub fn set_all(&mut self) -> &mut Self {
        self.bits = Self::mask();
        self
    }

    /// Sets the bit at `pos`. Positions past the end are ignored.
    pub fn set_bit(&mut self, pos: usize) -> &mut Self {
        if pos < self.size() {
            self.bits = self.bits | Self::bit(pos);
        }
        self
    }

    /// Removes `value`.
    pub fn reset(&mut self, value: E) -> &mut Self {
        self.reset_bit(Self::position(value))
    }

    /// Removes every enumerator.
    pub fn reset_all(&mut self) -> &mut Self {
        self.bits = E::Bits::zero();
        self
    }

    /// Clears the bit at `pos`. Positions past the end are ignored.
    pub fn reset_bit(&mut self, pos: usize) -> &mut Self {
        if pos < self.size() {
            self.bits = self.bits & !Self::bit(pos);
        }
        self
    }

    /// Toggles `value`.
    pub fn flip(&mut self, value: E) -> &mut Self {
        self.flip_bit(Self::position(value))
    }

    /// Toggles every enumerator.
    pub fn flip_all(&mut self) -> &mut Self {
        self.bits = !self.bits & Self::mask();
        self
    }

    /// Toggles the bit at `pos`. Positions past the end are ignored.
    pub fn flip_bit(&mut self, pos: usize) -> &mut Self {
        if pos < self.size() {
            self.bits = self.bits ^ Self::bit(pos);
        }
        self
    }

    /// Checks whether the set is non-empty.
    pub fn any(&self) -> bool {
        self.bits != E::Bits::zero()
    }

    /// Checks whether every enumerator is in the set.
    pub fn all(&self) -> bool {
        self.bits == Self::mask()
    }

    /// Checks whether the set is empty.
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Checks whether every one of `values` is in the set.
    pub fn all_of(&self, values: impl IntoIterator<Item = E>) -> bool {
        values.into_iter().all(|value| self.test(value))
    }

    /// Checks whether at least one of `values` is in the set.
    pub fn any_of(&self, values: impl IntoIterator<Item = E>) -> bool {
        values.into_iter().any(|value| self.test(value))
    }

    /// Checks whether none of `values` is in the set.
    pub fn none_of(&self, values: impl IntoIterator<Item = E>) -> bool {
        !self.any_of(values)
    }

    /// Checks whether exactly one enumerator is in the set.
    pub fn has_single_bit(&self) -> bool {
        self.count() == 1
    }

    /// Rotates toward higher positions within `size()` bits.
    pub fn rotl(&self, k: usize) -> Self {
        let size = self.size();
        let k = k % size;
        if k == 0 {
            return *self;
        }
        Self::from_word((self.bits << k) | (self.bits >> (size - k)))
    }

    /// Rotates toward lower positions within `size()` bits.
    pub fn rotr(&self, k: usize) -> Self {
        let size = self.size();
        let k = k % size;
        if k == 0 {
            return *self;
        }
        self.rotl(size - k)
    }

    /// Iterates the enumerators in the set in ascending order.
    pub fn iter(&self) -> Iter<E> {
        Iter {
            set: *self,
            front: 0,
            back: self.size(),
        }
    }

    /// Calls `f` with every enumerator in the set and hands `f` back.
    pub fn for_each<F: FnMut(E)>(&self, mut f: F) -> F {
        for value in self.iter() {
            f(value);
        }
        f
    }

    /// Like [`for_each`](Self::for_each), stopping after `n` enumerators.
    pub fn for_each_n<F: FnMut(E)>(&self, n: usize, mut f: F) -> F {
        for value in self.iter().take(n) {
            f(value);
        }
        f
    }

    /// Builds a set from names separated by `options`' separator.
    ///
    /// Each token is trimmed of spaces and tabs. A trailing segment with nothing in it, not even
    /// blanks, is ignored. Unknown names are skipped unless the options are
    /// [strict](ParseOptions::strict).
    pub fn parse(src: &str, options: ParseOptions) -> Result<Self, UnknownNameError> {
        let mut result = Self::new();
        let mut tokens = src.split(options.separator).peekable();
        while let Some(segment) = tokens.next() {
            if segment.is_empty() && tokens.peek().is_none() {
                break;
            }
            let token = segment.trim_matches(|c| c == ' ' || c == '\t');

            #[cfg(feature = "ext")]
            let name = if options.anyscope && !E::has_scope(token) {
                E::add_scope(token)
            } else {
                token
            };
            #[cfg(not(feature = "ext"))]
            let name = token;

            match E::string_to_enum(name) {
                Some(value) => {
                    result.set(value);
                }
                None if options.ignore_errors => {
                    log::debug!("skipping unknown {} name {token:?}", E::type_name());
                }
                None => {
                    return Err(UnknownNameError {
                        name: token.into(),
                    })
                }
            }
        }
        Ok(result)
    }

    /// Renders `size()` characters, highest position first.
    pub fn to_string_with(&self, zero: char, one: char) -> String {
        (0..self.size())
            .rev()
            .map(|pos| if self.test_bit(pos) { one } else { zero })
            .collect()
    }
}

macro_rules! impl_narrow_conversions {
    ($($width:literal),*) => {paste! {$(
        #[doc = "The raw bits as a `u" $width "`."]
        ///
        /// Fails if a set bit does not fit.
        pub fn [<to_u $width>](&self) -> Result<[<u $width>], OverflowError> {
            [<u $width>]::try_from(self.to_u64()).map_err(|_| OverflowError { width: $width })
        }
    )*}};
}

impl<E: Dense> EnumBitset<E> {
    impl_narrow_conversions!(8, 16, 32);
}

/// Iterator over the enumerators in an [`EnumBitset`].
pub struct Iter<E: Dense> {
    set: EnumBitset<E>,
    front: usize,
    back: usize,
}

impl<E: Dense> Iterator for Iter<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        while self.front < self.back {
            let pos = self.front;
            self.front += 1;
            if self.set.test_bit(pos) {
                return Some(E::values()[pos]);
            }
        }
        None
    }
}

impl<E: Dense> DoubleEndedIterator for Iter<E> {
    fn next_back(&mut self) -> Option<E> {
        while self.front < self.back {
            self.back -= 1;
            if self.set.test_bit(self.back) {
                return Some(E::values()[self.back]);
            }
        }
        None
    }
}

impl<E: Dense> IntoIterator for EnumBitset<E> {
    type Item = E;
    type IntoIter = Iter<E>;

    fn into_iter(self) -> Iter<E> {
        self.iter()
    }
}

impl<E: Dense> Clone for EnumBitset<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Dense> Copy for EnumBitset<E> {}

impl<E: Dense> Default for EnumBitset<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Dense> PartialEq for EnumBitset<E> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<E: Dense> Eq for EnumBitset<E> {}

impl<E: Dense> PartialOrd for EnumBitset<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E: Dense> Ord for EnumBitset<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bits.cmp(&other.bits)
    }
}

impl<E: Dense> Hash for EnumBitset<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<E: Dense> From<E> for EnumBitset<E> {
    fn from(value: E) -> Self {
        let mut result = Self::new();
        result.set(value);
        result
    }
}

impl<E: Dense> FromIterator<E> for EnumBitset<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl<E: Dense> Extend<E> for EnumBitset<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for value in iter {
            self.set(value);
        }
    }
}

macro_rules! impl_bit_ops {
    ($($trait:ident, $method:ident, $op:tt);*) => {paste! {$(
        impl<E: Dense> $trait for EnumBitset<E> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self::from_word(self.bits $op rhs.bits)
            }
        }

        impl<E: Dense> $trait<E> for EnumBitset<E> {
            type Output = Self;

            fn $method(self, rhs: E) -> Self {
                self $op Self::from(rhs)
            }
        }

        impl<E: Dense> [<$trait Assign>] for EnumBitset<E> {
            fn [<$method _assign>](&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }

        impl<E: Dense> [<$trait Assign>]<E> for EnumBitset<E> {
            fn [<$method _assign>](&mut self, rhs: E) {
                *self = *self $op rhs;
            }
        }
    )*}};
}

impl_bit_ops!(BitAnd, bitand, &; BitOr, bitor, |; BitXor, bitxor, ^);

// Raw storage words as operands. Bits past `size()` are dropped from the result.
macro_rules! impl_raw_bit_ops {
    (@op $bits:ty, $trait:ident, $method:ident, $op:tt) => {paste! {
        impl<E: Dense<Bits = $bits>> $trait<$bits> for EnumBitset<E> {
            type Output = Self;

            fn $method(self, rhs: $bits) -> Self {
                Self::from_word(self.bits $op rhs)
            }
        }

        impl<E: Dense<Bits = $bits>> [<$trait Assign>]<$bits> for EnumBitset<E> {
            fn [<$method _assign>](&mut self, rhs: $bits) {
                *self = *self $op rhs;
            }
        }
    }};
    ($($bits:ty),*) => {$(
        impl_raw_bit_ops!(@op $bits, BitAnd, bitand, &);
        impl_raw_bit_ops!(@op $bits, BitOr, bitor, |);
        impl_raw_bit_ops!(@op $bits, BitXor, bitxor, ^);
    )*};
}

impl_raw_bit_ops!(u8, u16, u32, u64);

impl<E: Dense> Not for EnumBitset<E> {
    type Output = Self;

    fn not(mut self) -> Self {
        self.flip_all();
        self
    }
}

impl<E: Dense> Shl<usize> for EnumBitset<E> {
    type Output = Self;

    fn shl(self, rhs: usize) -> Self {
        if rhs >= self.size() {
            Self::new()
        } else {
            Self::from_word(self.bits << rhs)
        }
    }
}

impl<E: Dense> Shr<usize> for EnumBitset<E> {
    type Output = Self;

    fn shr(self, rhs: usize) -> Self {
        if rhs >= self.size() {
            Self::new()
        } else {
            Self::from_word(self.bits >> rhs)
        }
    }
}

impl<E: Dense> ShlAssign<usize> for EnumBitset<E> {
    fn shl_assign(&mut self, rhs: usize) {
        *self = *self << rhs;
    }
}

impl<E: Dense> ShrAssign<usize> for EnumBitset<E> {
    fn shr_assign(&mut self, rhs: usize) {
        *self = *self >> rhs;
    }
}

impl<E: Dense> FromStr for EnumBitset<E> {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, ParseOptions::new())
    }
}

impl<E: Dense> Display for EnumBitset<E> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for pos in (0..self.size()).rev() {
            f.write_char(if self.test_bit(pos) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl<E: Dense> Debug for EnumBitset<E> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Named)).finish()
    }
}
