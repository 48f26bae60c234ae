/// A result type defaulting to the crate [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All the ways a display identifier can fail to decode.
///
/// Encoding never fails: every value of a [`crate::RawId`] type has a display
/// form. Decoding reports why a string was refused so callers can log it, but
/// most call sites only care about presence and use `.ok()`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input was the empty string.
    #[error("empty display identifier")]
    Empty,

    /// A byte outside the display alphabet (`A-Z`, `2-7`, `8`, `9`).
    #[error("invalid byte {byte:#04x} at index {index}")]
    InvalidChar {
        /// The offending input byte.
        byte: u8,
        /// Byte offset into the input.
        index: usize,
    },

    /// The number of symbols cannot come from whole bytes (length mod 8 is
    /// 1, 3 or 6).
    #[error("invalid length: {len}")]
    InvalidLength {
        /// Number of symbols, padding excluded.
        len: usize,
    },

    /// Trailing `=` padding is present but does not complete an 8-symbol
    /// block.
    #[error("invalid padding")]
    InvalidPadding,

    /// The decoded value does not fit in the requested integer type.
    #[error("decoded value overflows a {bits}-bit identifier")]
    DecodeOverflow {
        /// Width of the target integer type.
        bits: u32,
    },

    /// The input decodes, but is not what encoding the value would produce.
    ///
    /// Only reported when canonical decoding is enabled on the
    /// [`crate::Codec`].
    #[error("non-canonical display identifier")]
    NonCanonical,

    /// A legacy all-digit identifier did not parse as an integer of the
    /// requested width.
    #[error("invalid decimal identifier")]
    InvalidDecimal,
}
