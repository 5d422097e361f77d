//! Feedback check command
//!
//! Scores a single guess against a chosen target.

use crate::core::{Feedback, Word, WordError, compute_letter_status, is_solved};
use crate::wordlists::Lexicon;

/// Result of checking one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub target: Word,
    pub guess: Word,
    pub feedback: Feedback,
    /// Whether the game would accept the guess
    pub guess_in_word_list: bool,
    /// Whether the target could be drawn as a solution
    pub target_is_solution: bool,
}

impl CheckResult {
    #[must_use]
    pub fn solved(&self) -> bool {
        is_solved(&self.feedback)
    }
}

/// Score `guess` against `target`
///
/// Neither word needs to be in the word lists; membership is reported
/// alongside the feedback.
///
/// # Errors
///
/// Returns an error if either word is not a valid five-letter word.
pub fn check_guess(lexicon: &Lexicon, target: &str, guess: &str) -> Result<CheckResult, WordError> {
    let target = Word::new(target)?;
    let guess = Word::new(guess)?;

    Ok(CheckResult {
        feedback: compute_letter_status(&target, guess.chars()),
        guess_in_word_list: lexicon.contains(guess.text()),
        target_is_solution: lexicon.solutions().contains(&target),
        target,
        guess,
    })
}
