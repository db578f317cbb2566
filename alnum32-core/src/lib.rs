//! # Alnum32 Core
//!
//! A Base32 codec over a lowercase alphanumeric alphabet (`'a'..='z'` then
//! `'0'..='5'`), with strict validation of the zero padding bits a valid
//! encoder leaves behind.
//!
//! ## Modules
//!
//! - `alphabet`: Symbol table and value mapping
//! - `encoder`: Byte-to-symbol bit packing
//! - `decoder`: Strict symbol-to-byte unpacking
//!
//! Unlike RFC 4648 Base32, the format carries no `'='` padding character;
//! whether an encoding is valid is determined purely by its trailing bits.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod alphabet;
pub mod decoder;
pub mod encoder;
pub mod error;

// Re-export the public surface
pub use decoder::decode;
pub use encoder::encode;
pub use error::CodecError;

/// Result type alias for Alnum32 operations
pub type Result<T> = core::result::Result<T, CodecError>;
