//! Fixed-length word representation
//!
//! A Word is a validated, lowercase, five-letter ASCII word. Targets and
//! submitted guesses are both stored as Words.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of letters in every target and every guess
pub const WORD_LENGTH: usize = 5;

/// A validated lowercase word of exactly [`WORD_LENGTH`] letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {len} letters, got {0}", len = WORD_LENGTH)]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased first, so `"CRANE"` and `"crane"` are the same word.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly [`WORD_LENGTH`]
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = ['\0'; WORD_LENGTH];
        for (slot, ch) in chars.iter_mut().zip(text.chars()) {
            *slot = ch;
        }

        Ok(Self { text, chars })
    }

    /// Build a Word from typed characters
    ///
    /// # Errors
    /// Same rules as [`Word::new`].
    pub fn from_chars(chars: &[char]) -> Result<Self, WordError> {
        Self::new(chars.iter().collect::<String>())
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Get the count of each letter in the word
    #[must_use]
    pub fn char_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Fold a typed key through upper-then-lower case
///
/// Returns the letter only when the result is a single ASCII letter, so
/// locale quirks such as the dotless `ı` still land on `i`.
#[must_use]
pub fn normalize_letter(key: char) -> Option<char> {
    let mut upper = key.to_uppercase();
    let (Some(upper_char), None) = (upper.next(), upper.next()) else {
        return None;
    };

    let mut lower = upper_char.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(letter), None) if letter.is_ascii_lowercase() => Some(letter),
        _ => None,
    }
}
