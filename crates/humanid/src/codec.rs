use crate::base32::{self, substitution};
use crate::{Error, RawId, Result};
use alloc::string::{String, ToString};
use core::fmt;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// How [`Codec::decode`] treats lower case input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Case {
    /// Only the upper case display alphabet is accepted.
    #[default]
    Strict,
    /// ASCII lower case letters are folded to upper case before decoding.
    Insensitive,
}

impl Case {
    #[inline]
    const fn fold(self, byte: u8) -> u8 {
        match self {
            Self::Strict => byte,
            Self::Insensitive => byte.to_ascii_uppercase(),
        }
    }
}

/// Converts raw identifiers to display identifiers and back.
///
/// A display identifier is the RFC 4648 base32 encoding of the raw value's
/// significant big-endian bytes, without padding, with `O` written as `8`
/// and `I` written as `9`:
///
/// ```
/// use humanid::Codec;
///
/// let codec = Codec::new();
/// assert_eq!(codec.encode(116_853_u32), "AHEHK");
/// assert_eq!(codec.decode::<u32>("AHEHK"), Ok(116_853));
/// assert_eq!(codec.encode(116_u32), "8Q");
/// ```
///
/// Encoding is total. Decoding never panics; malformed input is reported as
/// an [`Error`] and callers that treat any failure as "not found" can use
/// `.ok()`.
///
/// By default decoding follows the historical behavior: upper case only, and
/// any structurally valid string is accepted even when it is not exactly what
/// encoding would produce (leading zero bytes, set trailing bits, padding,
/// literal `O`/`I`). [`Codec::with_canonical`] rejects those.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Codec {
    case: Case,
    canonical: bool,
}

impl Default for Codec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Codec {
    /// Strict case, non-canonical input accepted.
    pub const DEFAULT: Self = Self {
        case: Case::Strict,
        canonical: false,
    };

    #[must_use]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    #[must_use]
    pub const fn with_case(mut self, case: Case) -> Self {
        self.case = case;
        self
    }

    /// When enabled, decoding only accepts strings that encoding the decoded
    /// value would reproduce (after case folding).
    #[must_use]
    pub const fn with_canonical(mut self, canonical: bool) -> Self {
        self.canonical = canonical;
        self
    }

    #[must_use]
    pub const fn case(&self) -> Case {
        self.case
    }

    #[must_use]
    pub const fn canonical(&self) -> bool {
        self.canonical
    }

    /// Encodes `raw` into a stack buffer and returns a formatter over it.
    ///
    /// Zero encodes as `"AA"` (a single zero byte), so the result is never
    /// empty.
    pub fn encode<T: RawId>(&self, raw: T) -> Encoded<T> {
        let mut buf = T::DisplayArray::default();
        let len = encode_into(raw, &mut buf);
        Encoded { buf, len }
    }

    /// Encodes `raw` into a caller supplied buffer and returns the written
    /// prefix as a `&str`.
    ///
    /// ```
    /// use humanid::{Codec, RawId};
    ///
    /// let mut buf = <u32 as RawId>::DisplayArray::default();
    /// let s = Codec::new().encode_to_buf(27_101_402_u32, &mut buf);
    /// assert_eq!(s, "AG8YRWQ");
    /// ```
    pub fn encode_to_buf<'buf, T: RawId>(
        &self,
        raw: T,
        buf: &'buf mut T::DisplayArray,
    ) -> &'buf str {
        let len = encode_into(raw, buf);
        let buf: &'buf [u8] = (*buf).as_ref();
        // SAFETY: `encode_into` only writes ASCII display symbols
        unsafe { core::str::from_utf8_unchecked(&buf[..len]) }
    }

    /// Decodes a display identifier.
    ///
    /// # Errors
    ///
    /// - [`Error::Empty`] for the empty string
    /// - [`Error::InvalidChar`] for bytes outside the display alphabet
    /// - [`Error::InvalidLength`] / [`Error::InvalidPadding`] for strings that
    ///   cannot come from whole bytes
    /// - [`Error::DecodeOverflow`] when the value does not fit in `T`
    /// - [`Error::NonCanonical`] in canonical mode
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self), err(level = "debug")))]
    pub fn decode<T: RawId>(&self, input: &str) -> Result<T> {
        let case = self.case;
        let raw = base32::decode_base32::<T>(input.as_bytes(), |b| {
            substitution::from_display(case.fold(b))
        })?;

        if self.canonical {
            let encoded = self.encode(raw);
            let folded = input.bytes().map(|b| case.fold(b));
            if !encoded.as_str().bytes().eq(folded) {
                return Err(Error::NonCanonical);
            }
        }
        Ok(raw)
    }
}

fn encode_into<T: RawId>(raw: T, buf: &mut T::DisplayArray) -> usize {
    let bytes = raw.to_be_bytes();
    let buf = buf.as_mut();
    let len = base32::encode_base32(T::significant_bytes(&bytes), buf);
    substitution::apply(&mut buf[..len]);
    len
}

/// A display identifier held in a stack buffer.
///
/// Returned by [`Codec::encode`]; implements [`fmt::Display`] and
/// [`AsRef<str>`] so it can be written into a URL or compared without
/// allocating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Encoded<T: RawId> {
    buf: T::DisplayArray,
    len: usize,
}

impl<T: RawId> Encoded<T> {
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `self.buf[..self.len]` holds only ASCII display symbols
        unsafe { core::str::from_utf8_unchecked(&self.buf.as_ref()[..self.len]) }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; every identifier has a non-empty display form.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.as_str().to_string()
    }
}

impl<T: RawId> fmt::Display for Encoded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: RawId> AsRef<str> for Encoded<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T: RawId> PartialEq<str> for Encoded<T> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<T: RawId> PartialEq<&str> for Encoded<T> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<T: RawId> PartialEq<String> for Encoded<T> {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other.as_str()
    }
}

/// Encodes `raw` with the default [`Codec`].
///
/// ```
/// assert_eq!(humanid::humanize(6_303_845_u32), "MAYGK");
/// ```
pub fn humanize<T: RawId>(raw: T) -> String {
    Codec::DEFAULT.encode(raw).into_string()
}

/// Decodes `display` with the default [`Codec`].
///
/// # Errors
///
/// See [`Codec::decode`].
///
/// ```
/// assert_eq!(humanid::dehumanize::<u32>("A98K8"), Ok(138_407));
/// assert!(humanid::dehumanize::<u32>("").is_err());
/// ```
pub fn dehumanize<T: RawId>(display: &str) -> Result<T> {
    Codec::DEFAULT.decode(display)
}
