//! Validated word dictionary.
//!
//! The dictionary is supplied once at startup and read-only afterwards.
//! Positions are exposed as 1-based "word numbers" (word number = array
//! index + 1) because the codec reserves value 0 for "nothing selected".

use std::collections::HashMap;

use crate::DictionaryError;

/// Immutable ordered list of exactly 2048 unique lowercase words.
///
/// Validation happens once in [`Dictionary::new`]; every later lookup can
/// rely on the count, uniqueness, and lowercase-ASCII invariants.
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// Words in supplied order. Ordering is semantic: word number = index + 1.
    words: Vec<String>,
    /// Exact-match index from word to 1-based word number.
    numbers: HashMap<String, u16>,
}

impl Dictionary {
    /// Number of words in every dictionary.
    pub const WORD_COUNT: usize = 2048;

    /// Validate and take ownership of a word list.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError`] when the list does not contain exactly
    /// [`Self::WORD_COUNT`] unique non-empty lowercase ASCII words.
    pub fn new(words: Vec<String>) -> Result<Self, DictionaryError> {
        if words.len() != Self::WORD_COUNT {
            return Err(DictionaryError::WrongCount {
                expected: Self::WORD_COUNT,
                actual: words.len(),
            });
        }

        let mut numbers = HashMap::with_capacity(Self::WORD_COUNT);
        for (index, word) in words.iter().enumerate() {
            if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(DictionaryError::InvalidWord { word: word.clone() });
            }
            let number = (index + 1) as u16;
            if numbers.insert(word.clone(), number).is_some() {
                return Err(DictionaryError::Duplicate { word: word.clone() });
            }
        }

        Ok(Self { words, numbers })
    }

    /// Parse a newline-separated word list (one word per line).
    ///
    /// Lines are trimmed and blank lines skipped, so files with a trailing
    /// newline or Windows line endings load cleanly.
    ///
    /// # Errors
    ///
    /// Same validation as [`Dictionary::new`].
    pub fn parse(text: &str) -> Result<Self, DictionaryError> {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        Self::new(words)
    }

    /// Word at the given 1-based word number.
    ///
    /// Returns `None` for 0 and for numbers above [`Self::WORD_COUNT`].
    pub fn word(&self, number: u16) -> Option<&str> {
        if number == 0 {
            return None;
        }
        self.words.get(usize::from(number) - 1).map(String::as_str)
    }

    /// 1-based word number for an exact word. `None` when absent.
    pub fn word_number(&self, word: &str) -> Option<u16> {
        self.numbers.get(word).copied()
    }

    /// Words in dictionary order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of words (always [`Self::WORD_COUNT`]).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
