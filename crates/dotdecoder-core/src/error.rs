//! Error types for the DotDecoder core.
//!
//! Both errors here are construction-time contract violations, not runtime
//! conditions: a dictionary that fails validation or a bit slice of the wrong
//! length can never enter the system. Degenerate runtime inputs (empty text,
//! the all-zero vector, values above the dictionary range) are first-class
//! "invalid" outcomes on [`crate::DecodeResult`], never errors.

use thiserror::Error;

/// Errors that can occur while validating a dictionary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// Dictionary does not contain exactly the required number of words.
    #[error("dictionary must contain exactly {expected} words, got {actual}")]
    WrongCount {
        /// Required word count.
        expected: usize,
        /// Word count that was supplied.
        actual: usize,
    },

    /// A word appears more than once.
    #[error("duplicate dictionary word: {word:?}")]
    Duplicate {
        /// The repeated word.
        word: String,
    },

    /// A word is empty or contains characters outside `a-z`.
    #[error("invalid dictionary word: {word:?} (must be non-empty lowercase ASCII)")]
    InvalidWord {
        /// The offending word.
        word: String,
    },
}

/// Error converting a boolean slice into a [`crate::BitVector`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitVectorError {
    /// Slice length differs from the fixed bit count.
    ///
    /// Partial vectors are a programming error, never a user-facing state;
    /// construction fails fast instead of truncating or padding.
    #[error("bit vector must have exactly {expected} bits, got {actual}")]
    WrongLength {
        /// Required bit count.
        expected: usize,
        /// Length of the supplied slice.
        actual: usize,
    },
}
