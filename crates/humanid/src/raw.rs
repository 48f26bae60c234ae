use crate::base32::encoded_len;
use core::fmt;
use core::hash::Hash;
use core::str::FromStr;

/// An unsigned integer usable as a raw identifier.
///
/// Implemented for `u16`, `u32` and `u64`. The width of the type is the
/// supported range: anything representable encodes, and decoding refuses
/// values that would not fit.
pub trait RawId:
    Copy + Default + fmt::Debug + fmt::Display + Ord + Eq + Hash + FromStr + Send + Sync + 'static
{
    /// Width of the type in bits.
    const BITS: u32;
    /// Width of the type in bytes.
    const SIZE: usize;
    /// Longest possible display identifier for this type, in symbols.
    const DISPLAY_SIZE: usize;
    /// The zero identifier.
    const ZERO: Self;

    type ByteArray: AsRef<[u8]> + AsMut<[u8]> + fmt::Debug + Default + Copy + Eq + Hash;
    type DisplayArray: AsRef<[u8]> + AsMut<[u8]> + fmt::Debug + Default + Copy + Eq + Ord + Hash;

    fn to_be_bytes(self) -> Self::ByteArray;

    /// Shifts `byte` in as the new least significant byte.
    ///
    /// Returns `None` when a non-zero byte would be shifted out the top.
    fn checked_push_byte(self, byte: u8) -> Option<Self>;

    /// Big-endian bytes with the leading zero bytes removed.
    ///
    /// Zero keeps a single `0x00` byte so that every identifier has a
    /// non-empty display form. Older producers rendered zero as the empty
    /// string; here that string is rejected and zero is always `"AA"`.
    fn significant_bytes(bytes: &Self::ByteArray) -> &[u8] {
        let bytes = bytes.as_ref();
        let first = bytes
            .iter()
            .position(|&b| b != 0)
            .unwrap_or(bytes.len() - 1);
        &bytes[first..]
    }
}

macro_rules! impl_raw_id {
    ($($ty:ty),* $(,)?) => {$(
        impl RawId for $ty {
            const BITS: u32 = <$ty>::BITS;
            const SIZE: usize = core::mem::size_of::<$ty>();
            const DISPLAY_SIZE: usize = encoded_len(Self::SIZE);
            const ZERO: Self = 0;

            type ByteArray = [u8; Self::SIZE];
            type DisplayArray = [u8; Self::DISPLAY_SIZE];

            fn to_be_bytes(self) -> Self::ByteArray {
                <$ty>::to_be_bytes(self)
            }

            fn checked_push_byte(self, byte: u8) -> Option<Self> {
                if self >> (Self::BITS - 8) != 0 {
                    return None;
                }
                Some((self << 8) | Self::from(byte))
            }
        }
    )*};
}

impl_raw_id!(u16, u32, u64);
