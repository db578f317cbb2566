//! Byte-to-symbol encoding

use crate::alphabet::{symbol_for, BITS_PER_BYTE, BITS_PER_SYMBOL};
use alloc::string::String;

/// Encode raw bytes into alnum32 text
///
/// The input is treated as one big bit-stream, MSB-first within each byte,
/// and re-chunked into 5-bit groups, MSB-first within each group. Each group
/// maps to one symbol. A final partial group is right-padded with zero bits
/// before mapping.
///
/// The output is always `ceil(len * 8 / 5)` symbols long; every byte
/// sequence, including the empty one, has a valid encoding.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() * 8).div_ceil(5));

    // Accumulator holds at most 12 bits: up to 4 carried over plus 8 new.
    let mut acc: u16 = 0;
    let mut bits: u32 = 0;

    for &byte in data {
        acc = acc << BITS_PER_BYTE | byte as u16;
        bits += BITS_PER_BYTE;

        while bits >= BITS_PER_SYMBOL {
            bits -= BITS_PER_SYMBOL;
            out.push(symbol_for((acc >> bits) as u8 & 0x1f) as char);
        }
    }

    // Pad the final partial group with zero bits on the right
    if bits > 0 {
        out.push(symbol_for((acc << (BITS_PER_SYMBOL - bits)) as u8 & 0x1f) as char);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_encode_single_zero_byte() {
        // 8 zero bits split into 00000 and 000 + two zero pad bits
        assert_eq!(encode(&[0x00]), "aa");
    }

    #[test]
    fn test_encode_single_full_byte() {
        // 11111111 splits into 11111 (31 -> '5') and 111 padded to 11100 (28 -> '2')
        assert_eq!(encode(&[0xFF]), "52");
    }

    #[test]
    fn test_encode_length_law() {
        for len in 0..64 {
            let data = vec![0xA5u8; len];
            assert_eq!(encode(&data).len(), (len * 8).div_ceil(5));
        }
    }

    #[test]
    fn test_encode_exact_group_boundary() {
        // 5 bytes = 40 bits = exactly 8 symbols, no padding involved
        assert_eq!(encode(b"fooba"), "mzxw4ytb");
    }
}
