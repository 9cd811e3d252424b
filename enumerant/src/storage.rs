use core::fmt::Debug;
use core::hash::Hash;

use num_traits::{FromPrimitive, PrimInt, Unsigned};

use crate::sealed::Sealed;

/// Unsigned primitive words that can back an [`EnumBitset`](crate::EnumBitset).
///
/// This trait is sealed. It is implemented for `u8`, `u16`, `u32` and `u64`.
pub trait BitStorage:
    PrimInt + Unsigned + FromPrimitive + Hash + Debug + Default + Send + Sync + Sealed + 'static
{
    /// The width of the word in bits.
    const BITS: usize;

    /// Widens the word to `u64`.
    fn widen(self) -> u64;

    /// Narrows a `u64` to this word, or `None` if set bits would be lost.
    fn narrow(value: u64) -> Option<Self>;

    /// A word with the low `n` bits set. `n` may be up to [`BITS`](Self::BITS).
    fn low_mask(n: usize) -> Self {
        if n >= Self::BITS {
            !Self::zero()
        } else {
            (Self::one() << n) - Self::one()
        }
    }
}

macro_rules! impl_bit_storage {
    ($($ty:ty),*) => {$(
        impl Sealed for $ty {}

        impl BitStorage for $ty {
            const BITS: usize = <$ty>::BITS as usize;

            #[inline]
            fn widen(self) -> u64 {
                self.into()
            }

            #[inline]
            fn narrow(value: u64) -> Option<Self> {
                Self::try_from(value).ok()
            }
        }
    )*};
}

impl_bit_storage!(u8, u16, u32, u64);
