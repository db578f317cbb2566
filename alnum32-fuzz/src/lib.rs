//! Fuzzing entry points for the alnum32 codec
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Wrap these functions in fuzz targets and run: cargo fuzz run <target>

pub fn fuzz_decode(data: &[u8]) {
    // Try to decode - should never panic
    let _ = alnum32_core::decode(data);
}

pub fn fuzz_round_trip(data: &[u8]) {
    let text = alnum32_core::encode(data);

    // Every encoding must decode back to the original bytes
    let decoded = alnum32_core::decode(text.as_bytes()).expect("own encoding must decode");
    assert_eq!(decoded, data);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_decode_empty() {
        fuzz_decode(&[]);
    }

    #[test]
    fn test_fuzz_decode_random() {
        fuzz_decode(&[0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_fuzz_round_trip_empty() {
        fuzz_round_trip(&[]);
    }

    #[test]
    fn test_fuzz_round_trip_random() {
        fuzz_round_trip(&[0xFF; 1024]);
    }
}
