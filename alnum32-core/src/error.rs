//! Error types for Alnum32 decoding

/// Errors that can occur while decoding alnum32 text
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Input byte is not one of the 32 alphabet symbols
    #[cfg_attr(
        feature = "std",
        error("invalid symbol {byte:#04x} at position {position}")
    )]
    InvalidSymbol {
        /// The offending input byte.
        byte: u8,
        /// Zero-based offset of the byte in the input.
        position: usize,
    },

    /// Trailing bits are inconsistent with a zero-padded encoding
    #[cfg_attr(feature = "std", error("trailing bits are not valid zero padding"))]
    InvalidPadding,
}
