//! Two-way mapping between base32 symbols and display symbols.
//!
//! `O` and `I` read too much like `0` and `1` in URLs and on screen, so they
//! are rendered as the digits `8` and `9`, which the RFC 4648 alphabet never
//! uses. The mapping is applied as a separate pass: after encoding and before
//! decoding.

/// `(base32 symbol, display symbol)` pairs.
const SUBSTITUTIONS: [(u8, u8); 2] = [(b'O', b'8'), (b'I', b'9')];

/// Maps a base32 symbol to the symbol shown to users.
#[inline]
pub const fn to_display(symbol: u8) -> u8 {
    let mut i = 0;
    while i < SUBSTITUTIONS.len() {
        if SUBSTITUTIONS[i].0 == symbol {
            return SUBSTITUTIONS[i].1;
        }
        i += 1;
    }
    symbol
}

/// Maps a display symbol back to its base32 symbol.
#[inline]
pub const fn from_display(symbol: u8) -> u8 {
    let mut i = 0;
    while i < SUBSTITUTIONS.len() {
        if SUBSTITUTIONS[i].1 == symbol {
            return SUBSTITUTIONS[i].0;
        }
        i += 1;
    }
    symbol
}

/// Rewrites an encoded buffer in place into its display form.
pub fn apply(buf: &mut [u8]) {
    for symbol in buf {
        *symbol = to_display(*symbol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_o_and_i() {
        assert_eq!(to_display(b'O'), b'8');
        assert_eq!(to_display(b'I'), b'9');
        assert_eq!(from_display(b'8'), b'O');
        assert_eq!(from_display(b'9'), b'I');
    }

    #[test]
    fn leaves_other_symbols_alone() {
        for &symbol in b"ABCDEFGHJKLMNPQRSTUVWXYZ234567=" {
            assert_eq!(to_display(symbol), symbol);
            assert_eq!(from_display(symbol), symbol);
        }
    }

    #[test]
    fn apply_rewrites_every_symbol() {
        let mut buf = *b"AIOKO";
        apply(&mut buf);
        assert_eq!(&buf, b"A98K8");
    }
}
