use crate::{Codec, Encoded, Error, RawId};
use core::fmt;
use core::str::FromStr;

/// A raw identifier that renders as its display form.
///
/// Use it for struct fields and path parameters that should never show the
/// raw number: [`fmt::Display`] writes the display identifier and
/// [`FromStr`] decodes one with the default [`Codec`].
///
/// ```
/// use humanid::HumanId;
///
/// let id: HumanId = "AHEHK".parse().unwrap();
/// assert_eq!(id.raw(), 116_853);
/// assert_eq!(id.to_string(), "AHEHK");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct HumanId<T: RawId = u32>(T);

impl<T: RawId> HumanId<T> {
    #[must_use]
    pub const fn new(raw: T) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> T {
        self.0
    }

    /// The display form in a stack buffer.
    #[must_use]
    pub fn encode(&self) -> Encoded<T> {
        Codec::DEFAULT.encode(self.0)
    }

    /// Decodes with a specific codec instead of the default one.
    ///
    /// # Errors
    ///
    /// See [`Codec::decode`].
    pub fn decode_with(codec: &Codec, display: &str) -> Result<Self, Error> {
        codec.decode(display).map(Self)
    }
}

impl<T: RawId> From<T> for HumanId<T> {
    fn from(raw: T) -> Self {
        Self(raw)
    }
}

impl From<HumanId<u16>> for u16 {
    fn from(id: HumanId<u16>) -> Self {
        id.0
    }
}

impl From<HumanId<u32>> for u32 {
    fn from(id: HumanId<u32>) -> Self {
        id.0
    }
}

impl From<HumanId<u64>> for u64 {
    fn from(id: HumanId<u64>) -> Self {
        id.0
    }
}

impl<T: RawId> fmt::Display for HumanId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.encode(), f)
    }
}

impl<T: RawId> fmt::Debug for HumanId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HumanId")
            .field(&self.0)
            .field(&self.encode().as_str())
            .finish()
    }
}

impl<T: RawId> FromStr for HumanId<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode_with(&Codec::DEFAULT, s)
    }
}
