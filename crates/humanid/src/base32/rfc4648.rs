use crate::{Error, RawId, Result};

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const PAD: u8 = b'=';
const NO_VALUE: u8 = 255;
const BITS_PER_CHAR: usize = 5;
const MASK: u16 = 0x1F;

/// Lookup table for RFC 4648 base32 decoding. Upper case only.
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 32 {
        lut[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};

/// Number of symbols `len` input bytes encode to, padding excluded.
pub const fn encoded_len(len: usize) -> usize {
    (len * 8).div_ceil(BITS_PER_CHAR)
}

/// Number of `=` a padded block needs after `rem` trailing symbols.
const fn padding_for(rem: usize) -> usize {
    match rem {
        2 => 6,
        4 => 4,
        5 => 3,
        7 => 1,
        _ => 0,
    }
}

/// Encodes `input` as unpadded RFC 4648 base32 into the front of `buf` and
/// returns the number of symbols written.
///
/// `buf` must hold at least [`encoded_len`] of `input.len()` symbols; callers
/// size it with [`RawId::DisplayArray`].
pub fn encode_base32(input: &[u8], buf: &mut [u8]) -> usize {
    let mut acc = 0_u16;
    let mut bits = 0_usize;
    let mut out = 0;

    for &b in input {
        acc = (acc << 8) | u16::from(b);
        bits += 8;
        while bits >= BITS_PER_CHAR {
            bits -= BITS_PER_CHAR;
            buf[out] = ALPHABET[((acc >> bits) & MASK) as usize];
            out += 1;
        }
    }

    // Left-align the trailing partial group
    if bits > 0 {
        buf[out] = ALPHABET[((acc << (BITS_PER_CHAR - bits)) & MASK) as usize];
        out += 1;
    }
    out
}

/// Returns the length of `encoded` with any well-formed trailing padding
/// removed.
fn strip_padding(encoded: &[u8]) -> Result<usize> {
    let data_len = encoded
        .iter()
        .rposition(|&b| b != PAD)
        .map_or(0, |i| i + 1);
    let pad_len = encoded.len() - data_len;
    if pad_len == 0 {
        return Ok(data_len);
    }
    if data_len == 0 || encoded.len() % 8 != 0 || pad_len != padding_for(data_len % 8) {
        return Err(Error::InvalidPadding);
    }
    Ok(data_len)
}

/// Decodes RFC 4648 base32 into an integer, folding bytes big-endian.
///
/// Every input byte is passed through `map` before the alphabet lookup, which
/// is where display substitutions and case folding hook in. Errors report
/// the original byte. Padding is optional, but when present it must fill the
/// final 8-symbol block exactly. The unused low bits of the last symbol are
/// discarded.
pub fn decode_base32<T: RawId>(encoded: &[u8], map: impl Fn(u8) -> u8) -> Result<T> {
    if encoded.is_empty() {
        return Err(Error::Empty);
    }
    let len = strip_padding(encoded)?;
    if matches!(len % 8, 1 | 3 | 6) {
        return Err(Error::InvalidLength { len });
    }

    let mut acc = 0_u16;
    let mut bits = 0_usize;
    let mut value = T::ZERO;

    for (index, &byte) in encoded[..len].iter().enumerate() {
        let val = LOOKUP[map(byte) as usize];
        if val == NO_VALUE {
            return Err(Error::InvalidChar { byte, index });
        }
        acc = (acc << BITS_PER_CHAR) | u16::from(val);
        bits += BITS_PER_CHAR;
        if bits >= 8 {
            bits -= 8;
            value = value
                .checked_push_byte((acc >> bits) as u8)
                .ok_or(Error::DecodeOverflow { bits: T::BITS })?;
        }
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(input: &[u8]) -> String {
        let mut buf = [0_u8; 16];
        let n = encode_base32(input, &mut buf);
        String::from_utf8(buf[..n].to_vec()).unwrap()
    }

    fn decode(s: &str) -> Result<u64> {
        decode_base32::<u64>(s.as_bytes(), core::convert::identity)
    }

    #[test]
    fn encodes_rfc4648_test_vectors_without_padding() {
        assert_eq!(encode(b"f"), "MY");
        assert_eq!(encode(b"fo"), "MZXQ");
        assert_eq!(encode(b"foo"), "MZXW6");
        assert_eq!(encode(b"foob"), "MZXW6YQ");
        assert_eq!(encode(b"fooba"), "MZXW6YTB");
    }

    #[test]
    fn encoded_len_matches_symbols_written() {
        for len in 1..=8 {
            let input = [0xA5_u8; 8];
            assert_eq!(encode(&input[..len]).len(), encoded_len(len));
        }
    }

    #[test]
    fn decodes_with_and_without_padding() {
        assert_eq!(decode("MZXW6"), Ok(u64::from_be_bytes(*b"\0\0\0\0\0foo")));
        assert_eq!(decode("MZXQ"), decode("MZXQ===="));
        assert_eq!(decode("MY"), decode("MY======"));
        assert_eq!(decode("MZXW6YQ"), decode("MZXW6YQ="));
    }

    #[test]
    fn decode_rejects_malformed_padding() {
        assert_eq!(decode("MZXQ==="), Err(Error::InvalidPadding));
        assert_eq!(decode("MZXQ======"), Err(Error::InvalidPadding));
        assert_eq!(decode("MZXW6==="), Ok(decode("MZXW6").unwrap()));
        assert_eq!(decode("MZXW6Y=="), Err(Error::InvalidPadding));
        assert_eq!(decode("========"), Err(Error::InvalidPadding));
    }

    #[test]
    fn decode_rejects_impossible_lengths() {
        assert_eq!(decode("A"), Err(Error::InvalidLength { len: 1 }));
        assert_eq!(decode("AAA"), Err(Error::InvalidLength { len: 3 }));
        assert_eq!(decode("AAAAAA"), Err(Error::InvalidLength { len: 6 }));
        assert_eq!(decode("AAAAAAAAA"), Err(Error::InvalidLength { len: 9 }));
    }

    #[test]
    fn decode_reports_first_invalid_byte() {
        assert_eq!(
            decode("MZ!W6"),
            Err(Error::InvalidChar {
                byte: b'!',
                index: 2
            })
        );
        assert_eq!(
            decode("MZ=W6"),
            Err(Error::InvalidChar {
                byte: b'=',
                index: 2
            })
        );
        // lower case and the excluded digits are not in the alphabet
        assert!(matches!(decode("mzxw6"), Err(Error::InvalidChar { index: 0, .. })));
        assert!(matches!(decode("M0"), Err(Error::InvalidChar { index: 1, .. })));
        assert!(matches!(decode("M1"), Err(Error::InvalidChar { index: 1, .. })));
    }

    #[test]
    fn decode_detects_overflow() {
        // five significant bytes do not fit in a u32
        let err = decode_base32::<u32>(b"AEAQCAQB", core::convert::identity);
        assert_eq!(err, Err(Error::DecodeOverflow { bits: 32 }));

        // leading zero bytes are not significant
        let ok = decode_base32::<u32>(b"AAAAAAAB", core::convert::identity);
        assert_eq!(ok, Ok(1));
    }

    #[test]
    fn decode_applies_the_mapping_before_lookup() {
        let shifted = decode_base32::<u32>(b"mz", |b| b.to_ascii_uppercase());
        assert_eq!(shifted, decode_base32::<u32>(b"MZ", core::convert::identity));
    }
}
