//! Application state machine.
//!
//! This module defines the [`App`] state machine, which owns the bit vector
//! and the gesture session, completely decoupled from I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] and
//! [`crate::PointerEvent`] inputs and produces [`crate::AppAction`]
//! instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Owns the single writable copy of the bit vector and input text.
//! - Feeds pointer events through the gesture controller, applying at most
//!   one bit toggle per event.
//! - Re-derives the decode result snapshot after every mutation.
//! - Implements the external reset contract: one call restores the initial
//!   state, idempotently.

use std::time::Instant;

use dotdecoder_core::{BitVector, DecodeResult, Dictionary, WordMatch};

use crate::{AppAction, AppEvent, GestureConfig, GestureController, HitTest, PointerEvent};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug)]
pub struct App {
    /// Word dictionary, supplied once at startup and read-only after.
    dictionary: Dictionary,
    /// Current 12-bit selection pattern.
    bits: BitVector,
    /// Gesture session state (drag flag, active index, mouse lockout).
    gesture: GestureController,
    /// Raw text as typed; may be shorter than the matched word.
    input_text: String,
    /// Snapshot derived from `bits`, refreshed after every mutation.
    decode: DecodeResult,
}

impl App {
    /// Create a new App over the given dictionary.
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_config(dictionary, GestureConfig::default())
    }

    /// Create a new App with explicit gesture tuning.
    pub fn with_config(dictionary: Dictionary, config: GestureConfig) -> Self {
        let bits = BitVector::new();
        let decode = dictionary.encode(bits);
        Self {
            dictionary,
            bits,
            gesture: GestureController::new(config),
            input_text: String::new(),
            decode,
        }
    }

    /// Process a non-pointer event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::TextChanged(text) => self.set_text(&text),
            AppEvent::Reset => {
                self.reset_all();
                vec![AppAction::Render]
            },
            AppEvent::Tick => vec![],
            AppEvent::Resize(_, _) => vec![AppAction::Render],
        }
    }

    /// Process a pointer event at `now`, hit-testing against `surface`.
    ///
    /// A produced toggle mutates exactly one bit and re-derives the decode
    /// result; everything else (dead space, suppressed duplicates, drag
    /// ends) changes nothing visible.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        now: Instant,
        surface: &dyn HitTest,
    ) -> Vec<AppAction> {
        match self.gesture.handle(event, now, surface) {
            Some(index) => {
                if self.bits.toggle(index) {
                    self.refresh_from_bits();
                    vec![AppAction::Render]
                } else {
                    vec![]
                }
            },
            None => vec![],
        }
    }

    /// Restore the initial state: bits all-false, text and derived display
    /// state cleared, gesture session at rest. Calling this twice is
    /// equivalent to calling it once.
    pub fn reset_all(&mut self) {
        self.bits.reset();
        self.input_text.clear();
        self.gesture.reset();
        self.decode = self.dictionary.encode(self.bits);
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// Current bit vector snapshot.
    pub fn bits(&self) -> BitVector {
        self.bits
    }

    /// Decode result derived from the current bits.
    pub fn decode(&self) -> &DecodeResult {
        &self.decode
    }

    /// Raw text input as last typed or mirrored from a bit selection.
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    /// The dictionary this App decodes against.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Re-derive the decode snapshot after a bit mutation and mirror the
    /// selected word into the text field.
    fn refresh_from_bits(&mut self) {
        self.decode = self.dictionary.encode(self.bits);
        if self.decode.value == 0 {
            self.input_text.clear();
        } else if let Some(word) = &self.decode.word {
            self.input_text = word.clone();
        }
        // Values above the dictionary range leave the text untouched: the
        // user sees their last input alongside the invalid marker.
    }

    /// Re-evaluate the text input against the dictionary.
    fn set_text(&mut self, text: &str) -> Vec<AppAction> {
        match self.dictionary.resolve(text) {
            WordMatch::Empty => {
                // Clearing the field is a full reset, not merely "no match".
                self.reset_all();
            },
            WordMatch::Word { number, .. } => {
                self.input_text = text.to_owned();
                self.bits = BitVector::from_value(number);
                self.decode = self.dictionary.encode(self.bits);
            },
            WordMatch::Unresolved => {
                self.input_text = text.to_owned();
                self.bits = BitVector::new();
                self.decode = self.dictionary.encode(self.bits);
            },
        }
        vec![AppAction::Render]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotdecoder_core::DictionaryError;

    struct DeadSurface;

    impl HitTest for DeadSurface {
        fn control_at(&self, _x: f64, _y: f64) -> Option<usize> {
            None
        }
    }

    fn test_dictionary() -> Result<Dictionary, DictionaryError> {
        let mut words: Vec<String> = (0..Dictionary::WORD_COUNT)
            .map(|i| {
                let a = char::from(b'a' + (i / 676 % 26) as u8);
                let b = char::from(b'a' + (i / 26 % 26) as u8);
                let c = char::from(b'a' + (i % 26) as u8);
                format!("w{a}{b}{c}")
            })
            .collect();
        words[0] = "abandon".to_owned();
        words[1] = "ability".to_owned();
        Dictionary::new(words)
    }

    fn toggle(app: &mut App, index: usize) {
        let _ = app.handle_pointer(
            PointerEvent::MouseDown { index },
            Instant::now(),
            &DeadSurface,
        );
        let _ = app.handle_pointer(PointerEvent::PointerUp, Instant::now(), &DeadSurface);
    }

    #[test]
    fn starts_empty_and_invalid() -> Result<(), DictionaryError> {
        let app = App::new(test_dictionary()?);
        assert!(app.bits().is_zero());
        assert!(!app.decode().is_valid);
        assert_eq!(app.input_text(), "");
        Ok(())
    }

    #[test]
    fn toggling_lsb_selects_first_word() -> Result<(), DictionaryError> {
        let mut app = App::new(test_dictionary()?);
        toggle(&mut app, 11);

        assert_eq!(app.decode().value, 1);
        assert_eq!(app.decode().word.as_deref(), Some("abandon"));
        assert!(app.decode().is_valid);
        // Selection mirrors into the text field.
        assert_eq!(app.input_text(), "abandon");
        Ok(())
    }

    #[test]
    fn all_bits_set_is_out_of_range() -> Result<(), DictionaryError> {
        let mut app = App::new(test_dictionary()?);
        for index in 0..12 {
            toggle(&mut app, index);
        }
        assert_eq!(app.decode().value, 4095);
        assert!(!app.decode().is_valid);
        assert_eq!(app.decode().word, None);
        Ok(())
    }

    #[test]
    fn text_match_replaces_bits_wholesale() -> Result<(), DictionaryError> {
        let mut app = App::new(test_dictionary()?);
        toggle(&mut app, 0);

        let actions = app.handle(AppEvent::TextChanged("abili".to_owned()));
        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.decode().value, 2);
        assert_eq!(app.decode().word.as_deref(), Some("ability"));
        // Raw text is preserved; the match lives on the decode result.
        assert_eq!(app.input_text(), "abili");
        Ok(())
    }

    #[test]
    fn ambiguous_text_marks_invalid() -> Result<(), DictionaryError> {
        let mut app = App::new(test_dictionary()?);
        let _ = app.handle(AppEvent::TextChanged("ab".to_owned()));
        assert!(app.bits().is_zero());
        assert!(!app.decode().is_valid);
        assert_eq!(app.input_text(), "ab");
        Ok(())
    }

    #[test]
    fn empty_text_is_full_reset() -> Result<(), DictionaryError> {
        let mut app = App::new(test_dictionary()?);
        toggle(&mut app, 11);
        let _ = app.handle(AppEvent::TextChanged(String::new()));
        assert!(app.bits().is_zero());
        assert_eq!(app.input_text(), "");
        assert!(!app.decode().is_valid);
        Ok(())
    }

    #[test]
    fn reset_is_idempotent() -> Result<(), DictionaryError> {
        let mut app = App::new(test_dictionary()?);
        toggle(&mut app, 3);
        let _ = app.handle(AppEvent::TextChanged("aband".to_owned()));

        let _ = app.handle(AppEvent::Reset);
        let once_bits = app.bits();
        let once_decode = app.decode().clone();
        let once_text = app.input_text().to_owned();

        let _ = app.handle(AppEvent::Reset);
        assert_eq!(app.bits(), once_bits);
        assert_eq!(app.decode(), &once_decode);
        assert_eq!(app.input_text(), once_text);
        assert!(app.bits().is_zero());
        Ok(())
    }

    #[test]
    fn tick_produces_no_actions() -> Result<(), DictionaryError> {
        let mut app = App::new(test_dictionary()?);
        assert!(app.handle(AppEvent::Tick).is_empty());
        Ok(())
    }

    #[test]
    fn api_quit() -> Result<(), DictionaryError> {
        let app = App::new(test_dictionary()?);
        assert_eq!(app.quit(), vec![AppAction::Quit]);
        Ok(())
    }
}
