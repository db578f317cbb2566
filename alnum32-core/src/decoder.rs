//! Symbol-to-byte decoding (strict mode)

use crate::alphabet::{value_for, BITS_PER_BYTE, BITS_PER_SYMBOL};
use crate::error::CodecError;
use alloc::vec::Vec;

/// Decode alnum32 text back into raw bytes
///
/// This function performs strict validation:
/// - Every input byte must be an alphabet symbol
/// - The trailing bits must be exactly the zero padding a valid encoder
///   would have produced
///
/// Each symbol contributes 5 bits, MSB-first; the combined bit-stream is
/// re-chunked into 8-bit output bytes. After the last complete byte,
/// `5 * len mod 8` bits remain (fewer than 8). When the final symbols
/// complete an output byte, the remainder after it is pure padding; when
/// they cannot complete one, those bits would only form an all-zero
/// trailing byte that a byte-aligned origin never contains, so they are
/// dropped instead of emitted. In both cases every leftover bit must be
/// zero, else the input did not come from encoding a byte buffer and is
/// rejected with [`CodecError::InvalidPadding`].
///
/// Returns `floor(len * 5 / 8)` bytes on success. There is no partial or
/// best-effort decoding: any error aborts the whole call.
pub fn decode(input: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(input.len() * 5 / 8);

    // Accumulator holds at most 12 bits: up to 7 carried over plus 5 new.
    let mut acc: u16 = 0;
    let mut bits: u32 = 0;

    for (position, &byte) in input.iter().enumerate() {
        let value = value_for(byte).ok_or(CodecError::InvalidSymbol { byte, position })?;

        acc = acc << BITS_PER_SYMBOL | value as u16;
        bits += BITS_PER_SYMBOL;

        if bits >= BITS_PER_BYTE {
            bits -= BITS_PER_BYTE;
            out.push((acc >> bits) as u8);
        }
    }

    // All leftover bits past the last complete byte must be zero padding
    if acc & ((1 << bits) - 1) != 0 {
        return Err(CodecError::InvalidPadding);
    }

    Ok(out)
}
