//! Core codec for DotDecoder
//!
//! Pure bidirectional mapping between a 12-bit vector, its unsigned integer
//! value, and a word from a 2048-entry dictionary (the BIP-39 English
//! wordlist), plus prefix-based smart matching for text input.
//!
//! Everything here is pure: no I/O, no shared state, no clocks. Callers hand
//! in a snapshot and get a fresh result back, so the codec is safe under any
//! threading model.
//!
//! # Components
//!
//! - [`BitVector`]: fixed-length 12-bit vector, MSB first
//! - [`Dictionary`]: validated, immutable 2048-word lookup table
//! - [`DecodeResult`]: derived snapshot of value, word number, word, validity
//! - [`WordMatch`]: outcome of the per-keystroke prefix matcher

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bits;
mod codec;
mod dictionary;
mod error;
#[cfg(test)]
mod test_words;

pub use bits::BitVector;
pub use codec::{DecodeResult, WordMatch};
pub use dictionary::Dictionary;
pub use error::{BitVectorError, DictionaryError};
