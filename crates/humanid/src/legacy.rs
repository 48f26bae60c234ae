//! Identifiers that may be either plain decimal or display encoded.
//!
//! Records written before ids were stored raw (search index object ids,
//! bookmarked URLs) still carry display identifiers, while newer ones carry
//! the decimal number. Both forms are accepted here. An all-digit string is
//! always read as decimal: display identifiers that happen to consist only of
//! `8`s and `9`s are indistinguishable and lose.

use crate::{Codec, Error, RawId, Result};

impl Codec {
    /// Parses `s` as a decimal raw id when it is all ASCII digits, and
    /// decodes it with this codec otherwise.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDecimal`] when the digits do not fit in `T`, otherwise
    /// any error from [`Codec::decode`].
    pub fn parse_legacy<T: RawId>(&self, s: &str) -> Result<T> {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            return s.parse::<T>().map_err(|_| Error::InvalidDecimal);
        }
        self.decode(s)
    }
}

/// [`Codec::parse_legacy`] with the default codec.
///
/// # Errors
///
/// See [`Codec::parse_legacy`].
///
/// ```
/// use humanid::parse_legacy;
///
/// assert_eq!(parse_legacy::<u32>("116853"), Ok(116_853));
/// assert_eq!(parse_legacy::<u32>("AHEHK"), Ok(116_853));
/// ```
pub fn parse_legacy<T: RawId>(s: &str) -> Result<T> {
    Codec::DEFAULT.parse_legacy(s)
}

/// Parses every entry with [`parse_legacy`], skipping the ones that fail.
///
/// ```
/// use humanid::dehumanize_all;
///
/// let ids: Vec<u32> = dehumanize_all(["116", "AHEHK", "not-an-id"]).collect();
/// assert_eq!(ids, [116, 116_853]);
/// ```
pub fn dehumanize_all<'a, T, I>(entries: I) -> impl Iterator<Item = T>
where
    T: RawId,
    I: IntoIterator<Item = &'a str>,
{
    entries.into_iter().filter_map(|entry| match parse_legacy(entry) {
        Ok(raw) => Some(raw),
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(entry, error = %_err, "skipping unparseable identifier");
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_parse_as_decimal() {
        assert_eq!(parse_legacy::<u32>("0"), Ok(0));
        assert_eq!(parse_legacy::<u32>("116"), Ok(116));
        assert_eq!(parse_legacy::<u32>("4294967295"), Ok(u32::MAX));
    }

    #[test]
    fn decimal_overflow_is_reported() {
        assert_eq!(parse_legacy::<u32>("4294967296"), Err(Error::InvalidDecimal));
        assert_eq!(parse_legacy::<u64>("4294967296"), Ok(4_294_967_296));
    }

    #[test]
    fn everything_else_is_dehumanized() {
        assert_eq!(parse_legacy::<u32>("8Q"), Ok(116));
        assert_eq!(parse_legacy::<u32>("AG8YRWQ"), Ok(27_101_402));
        assert_eq!(parse_legacy::<u32>(""), Err(Error::Empty));
        assert!(parse_legacy::<u32>("-116").is_err());
        assert!(parse_legacy::<u32>("+116").is_err());
    }

    #[test]
    fn all_digit_display_ids_are_read_as_decimal() {
        // "99" is also the display form of a valid id, decimal wins
        assert_eq!(parse_legacy::<u32>("99"), Ok(99));
    }

    #[test]
    fn codec_settings_apply_to_display_ids() {
        let codec = Codec::new().with_case(crate::Case::Insensitive);
        assert_eq!(codec.parse_legacy::<u32>("ahehk"), Ok(116_853));
        assert_eq!(codec.parse_legacy::<u32>("116853"), Ok(116_853));
        assert!(parse_legacy::<u32>("ahehk").is_err());
    }

    #[test]
    fn dehumanize_all_skips_failures() {
        let entries = ["116853", "AHEHK", "", "??", "B4GQA", "99999999999"];
        let ids: Vec<u32> = dehumanize_all(entries).collect();
        assert_eq!(ids, [116_853, 116_853, 986_368]);
    }

    #[test]
    fn dehumanize_all_accepts_borrowed_strings() {
        let owned = vec![String::from("8Q"), String::from("A98K8")];
        let ids: Vec<u64> = dehumanize_all(owned.iter().map(String::as_str)).collect();
        assert_eq!(ids, [116, 138_407]);
    }
}
