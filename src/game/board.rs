//! Per-target board view
//!
//! Each target gets its own grid. Once a target is found its board stops at
//! the winning row and no longer shows what the player is typing.

use super::GameRecord;
use super::rules;
use crate::core::{Feedback, LetterStatus, WORD_LENGTH, Word, compute_letter_status};
use crate::wordlists::Lexicon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A submitted guess with feedback
    Submitted,
    /// The row being typed into; `invalid` when a full word is not accepted
    Current { invalid: bool },
    /// A row not reached yet
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    pub letters: Vec<char>,
    pub statuses: Feedback,
    pub kind: RowKind,
}

impl BoardRow {
    fn empty() -> Self {
        Self {
            letters: Vec::new(),
            statuses: [LetterStatus::Empty; WORD_LENGTH],
            kind: RowKind::Empty,
        }
    }
}

/// Everything needed to draw one target's grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub target: Word,
    pub found: bool,
    pub rows: Vec<BoardRow>,
}

/// Build the board for `record.targets()[target_index]`
///
/// Always yields `guess_count` rows.
///
/// # Panics
/// Panics if `target_index` is out of range.
#[must_use]
pub fn build_board(
    record: &GameRecord,
    target_index: usize,
    current_guess: &[char],
    lexicon: &Lexicon,
) -> Board {
    let target = &record.targets()[target_index];
    let found_at = rules::found_at(target, record);

    let visible = found_at.map_or(record.guesses(), |index| &record.guesses()[..=index]);
    let mut rows: Vec<BoardRow> = visible
        .iter()
        .map(|guess| BoardRow {
            letters: guess.chars().to_vec(),
            statuses: compute_letter_status(target, guess.chars()),
            kind: RowKind::Submitted,
        })
        .collect();

    if rows.len() < record.guess_count() {
        let letters = if found_at.is_some() {
            Vec::new()
        } else {
            current_guess.to_vec()
        };
        let invalid = letters.len() == WORD_LENGTH && !lexicon.is_valid_guess(&letters);

        rows.push(BoardRow {
            letters,
            statuses: [LetterStatus::Empty; WORD_LENGTH],
            kind: RowKind::Current { invalid },
        });
    }

    rows.resize_with(record.guess_count(), BoardRow::empty);

    Board {
        target: target.clone(),
        found: found_at.is_some(),
        rows,
    }
}
