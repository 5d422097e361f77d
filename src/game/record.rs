//! Immutable game snapshots
//!
//! A [`GameRecord`] is never edited in place: submitting a guess builds a new
//! record, and readers holding the previous one keep a consistent view.

use crate::core::Word;
use std::sync::Arc;

/// Guess limit used when none is supplied
pub const DEFAULT_GUESS_COUNT: usize = 7;

/// Targets, guess history and guess limit of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    guess_count: usize,
    targets: Arc<[Word]>,
    guesses: Vec<Word>,
}

impl GameRecord {
    fn new(guess_count: usize, targets: Arc<[Word]>, mut guesses: Vec<Word>) -> Self {
        debug_assert!(guess_count >= 1, "guess count must be positive");
        debug_assert!(!targets.is_empty(), "a game needs at least one target");

        guesses.truncate(guess_count);
        Self {
            guess_count,
            targets,
            guesses,
        }
    }

    /// Maximum number of guesses allowed
    #[inline]
    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guess_count
    }

    /// Words to find, in board order
    #[inline]
    #[must_use]
    pub fn targets(&self) -> &[Word] {
        &self.targets
    }

    /// Submitted guesses, oldest first
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Guesses still available
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.guess_count.saturating_sub(self.guesses.len())
    }

    /// Whether `word` has already been submitted
    #[must_use]
    pub fn has_guessed(&self, word: &Word) -> bool {
        self.guesses.contains(word)
    }

    /// New record with `guess` appended; targets are shared, not copied
    #[must_use]
    pub fn with_guess(&self, guess: Word) -> Self {
        let mut guesses = self.guesses.clone();
        guesses.push(guess);
        Self::new(self.guess_count, Arc::clone(&self.targets), guesses)
    }
}

/// Partial game description accepted when starting a game
///
/// Every field is optional and defaults on its own: a missing or zero guess
/// count becomes [`DEFAULT_GUESS_COUNT`], missing or empty targets become a
/// single random solution, and missing guesses become an empty history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSeed {
    pub guess_count: Option<usize>,
    pub targets: Option<Arc<[Word]>>,
    pub guesses: Option<Vec<Word>>,
}

impl GameSeed {
    /// Seed for a fresh game with specific targets
    #[must_use]
    pub fn new(targets: Vec<Word>, guess_count: usize) -> Self {
        Self {
            guess_count: Some(guess_count),
            targets: Some(targets.into()),
            guesses: None,
        }
    }

    /// Same targets and guess limit as `record`, with an empty history
    #[must_use]
    pub fn restart(record: &GameRecord) -> Self {
        Self {
            guess_count: Some(record.guess_count),
            targets: Some(Arc::clone(&record.targets)),
            guesses: None,
        }
    }

    #[must_use]
    pub fn with_guesses(mut self, guesses: Vec<Word>) -> Self {
        self.guesses = Some(guesses);
        self
    }

    /// Fill in missing fields; `random_target` is only called when needed
    pub(crate) fn resolve(self, random_target: impl FnOnce() -> Word) -> GameRecord {
        let guess_count = self
            .guess_count
            .filter(|&count| count >= 1)
            .unwrap_or(DEFAULT_GUESS_COUNT);

        let targets = self
            .targets
            .filter(|targets| !targets.is_empty())
            .unwrap_or_else(|| Arc::from(vec![random_target()]));

        GameRecord::new(guess_count, targets, self.guesses.unwrap_or_default())
    }
}
