//! Encode and decode operations.
//!
//! `encode` turns a bit vector into a [`DecodeResult`]; `resolve` is the
//! per-keystroke prefix matcher behind `decode_word`. Both are total: every
//! well-formed input maps to a defined result and "invalid" is a first-class
//! outcome, never an error.
//!
//! The bit space (0..=4095) is larger than the dictionary (1..=2048), so
//! both directions must handle the gap: value 0 is reserved for "nothing
//! selected" and values 2049..=4095 are well-formed patterns with no word.

use crate::{BitVector, Dictionary};

/// Snapshot derived from a bit vector: value, word number, word, validity.
///
/// `is_valid` is true iff the value is non-zero and a dictionary word exists
/// for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult {
    /// Unsigned value of the bit vector, in `0..=4095`.
    pub value: u16,
    /// 1-based word number. `None` when the value is 0 or above the
    /// dictionary range.
    pub word_number: Option<u16>,
    /// Matched dictionary word. `None` exactly when `word_number` is.
    pub word: Option<String>,
    /// Whether the vector selects a real word.
    pub is_valid: bool,
}

/// Outcome of resolving raw text against the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordMatch {
    /// Text was empty after trimming. Callers treat this as a full reset,
    /// not a failed match.
    Empty,
    /// Text named a word, either exactly or as a unique prefix.
    Word {
        /// 1-based word number of the match.
        number: u16,
        /// The matched word (may be longer than the typed text).
        word: String,
    },
    /// No word matched, or several words share the prefix: the user is
    /// still typing or typed something impossible.
    Unresolved,
}

impl Dictionary {
    /// Encode a bit vector against this dictionary.
    ///
    /// The raw numeric value is used directly as the 1-based word number;
    /// zero encodes "nothing selected" and is explicitly invalid.
    pub fn encode(&self, bits: BitVector) -> DecodeResult {
        let value = bits.value();
        match self.word(value) {
            Some(word) => DecodeResult {
                value,
                word_number: Some(value),
                word: Some(word.to_owned()),
                is_valid: true,
            },
            None => DecodeResult { value, word_number: None, word: None, is_valid: false },
        }
    }

    /// Resolve raw text to a word, exact match first, unique prefix second.
    ///
    /// Pure function of the current text and the dictionary; there is no
    /// memory between keystrokes. The prefix rule makes no assumption about
    /// prefix length: any prefix shared by exactly one word resolves (the
    /// BIP-39 list happens to be prefix-unique at four characters).
    pub fn resolve(&self, text: &str) -> WordMatch {
        let text = text.trim().to_ascii_lowercase();
        if text.is_empty() {
            return WordMatch::Empty;
        }

        if let Some(number) = self.word_number(&text) {
            return WordMatch::Word { number, word: text };
        }

        let mut candidates = self.words().enumerate().filter(|(_, w)| w.starts_with(&text));
        match (candidates.next(), candidates.next()) {
            (Some((index, word)), None) => {
                WordMatch::Word { number: (index + 1) as u16, word: word.to_owned() }
            },
            _ => WordMatch::Unresolved,
        }
    }

    /// Decode text into the bit vector of its resolved word.
    ///
    /// Empty and unresolved text both yield the all-false vector; callers
    /// distinguish the two via [`Dictionary::resolve`]. Exact inverse of
    /// [`Dictionary::encode`] for every resolvable word, so
    /// `decode_word(encode(bits).word) == bits` whenever the encode result
    /// is valid.
    pub fn decode_word(&self, text: &str) -> BitVector {
        match self.resolve(text) {
            WordMatch::Word { number, .. } => BitVector::from_value(number),
            WordMatch::Empty | WordMatch::Unresolved => BitVector::new(),
        }
    }
}
