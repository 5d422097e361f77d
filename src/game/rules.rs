//! Win and end conditions
//!
//! Pure predicates over a [`GameRecord`]; nothing here is stored, so the
//! answers can never drift from the record they describe.

use super::GameRecord;
use crate::core::Word;

/// Coarse state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    InProgress,
    /// Every target was found
    Won,
    /// Guesses ran out with at least one target unfound
    Lost,
}

impl GamePhase {
    /// Won and Lost are terminal until a new record replaces the game
    #[inline]
    #[must_use]
    pub const fn is_ended(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Whether some guess equals `target`
#[must_use]
pub fn is_target_found(target: &Word, record: &GameRecord) -> bool {
    found_at(target, record).is_some()
}

/// Index of the guess that found `target`, if any
#[must_use]
pub fn found_at(target: &Word, record: &GameRecord) -> Option<usize> {
    record.guesses().iter().position(|guess| guess == target)
}

/// Whether every target has been found
#[must_use]
pub fn is_game_won(record: &GameRecord) -> bool {
    record
        .targets()
        .iter()
        .all(|target| is_target_found(target, record))
}

/// Whether the guess limit is used up or the game is won
#[must_use]
pub fn is_game_ended(record: &GameRecord) -> bool {
    record.guesses().len() >= record.guess_count() || is_game_won(record)
}

#[must_use]
pub fn phase(record: &GameRecord) -> GamePhase {
    if is_game_won(record) {
        GamePhase::Won
    } else if is_game_ended(record) {
        GamePhase::Lost
    } else {
        GamePhase::InProgress
    }
}
