//! Symbol table and value mapping for the alnum32 alphabet
//!
//! The alphabet maps the 5-bit values 0..=25 to `'a'..='z'` and 26..=31 to
//! `'0'..='5'`. It is not the RFC 4648 alphabet and is case-sensitive.

/// Number of symbols in the alphabet
pub const ALPHABET_SIZE: usize = 32;

/// Bits carried by one symbol
pub const BITS_PER_SYMBOL: u32 = 5;

/// Bits carried by one input byte
pub const BITS_PER_BYTE: u32 = 8;

/// The alphabet in value order: `'a'..='z'` then `'0'..='5'`
pub const SYMBOLS: &[u8; ALPHABET_SIZE] = b"abcdefghijklmnopqrstuvwxyz012345";

/// Map a 5-bit value to its symbol.
///
/// Callers must pass a value below [`ALPHABET_SIZE`].
#[inline]
pub fn symbol_for(value: u8) -> u8 {
    debug_assert!((value as usize) < ALPHABET_SIZE);
    SYMBOLS[value as usize]
}

/// Map a symbol byte back to its 5-bit value, or `None` when the byte is
/// outside `['a','z']` and `['0','5']`.
#[inline]
pub fn value_for(symbol: u8) -> Option<u8> {
    match symbol {
        b'a'..=b'z' => Some(symbol - b'a'),
        b'0'..=b'5' => Some(symbol - b'0' + 26),
        _ => None,
    }
}
