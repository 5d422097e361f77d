//! Keyboard-wide letter status across every target
//!
//! Each letter maps to one status slot per target, holding the best
//! feedback that letter has received against that target so far.

use super::{LetterStatus, Word, compute_letter_status};
use rustc_hash::FxHashMap;

/// Letter keys in on-screen keyboard order
pub const LETTER_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best known status per (letter, target index)
///
/// Letters that were never typed in a submitted guess are absent; lookups
/// for them report [`LetterStatus::Empty`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardStatus {
    letters: FxHashMap<char, Vec<LetterStatus>>,
    target_count: usize,
}

impl KeyboardStatus {
    /// Statuses for a letter, one per target, if the letter was ever guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<&[LetterStatus]> {
        self.letters
            .get(&letter.to_ascii_lowercase())
            .map(Vec::as_slice)
    }

    /// Status of a letter against a single target
    #[must_use]
    pub fn status(&self, letter: char, target_index: usize) -> LetterStatus {
        self.get(letter)
            .and_then(|statuses| statuses.get(target_index).copied())
            .unwrap_or_default()
    }

    /// Statuses for a letter across every target, defaulting to empty
    #[must_use]
    pub fn statuses(&self, letter: char) -> Vec<LetterStatus> {
        self.get(letter).map_or_else(
            || vec![LetterStatus::Empty; self.target_count],
            <[LetterStatus]>::to_vec,
        )
    }

    /// Number of targets each entry covers
    #[inline]
    #[must_use]
    pub const fn target_count(&self) -> usize {
        self.target_count
    }

    /// Number of distinct letters guessed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// One status summarizing a letter over all targets
    ///
    /// Green only when green for every target, gray only when gray for
    /// every target, yellow when credited anywhere else.
    #[must_use]
    pub fn overall(&self, letter: char) -> LetterStatus {
        let Some(statuses) = self.get(letter) else {
            return LetterStatus::Empty;
        };

        if statuses.iter().all(|&s| s == LetterStatus::Green) {
            LetterStatus::Green
        } else if statuses.iter().any(|s| s.is_credited()) {
            LetterStatus::Yellow
        } else if statuses.iter().all(|&s| s == LetterStatus::Gray) {
            LetterStatus::Gray
        } else {
            LetterStatus::Empty
        }
    }
}

/// Aggregate feedback of every guess against every target
///
/// Keeps the highest status seen for each (letter, target) pair, so a
/// letter never drops from green back to yellow when a later guess moves it.
#[must_use]
pub fn compute_keyboard_status(targets: &[Word], guesses: &[Word]) -> KeyboardStatus {
    let mut letters: FxHashMap<char, Vec<LetterStatus>> = FxHashMap::default();

    for (target_index, target) in targets.iter().enumerate() {
        for guess in guesses {
            let statuses = compute_letter_status(target, guess.chars());

            for (&letter, status) in guess.chars().iter().zip(statuses) {
                let slots = letters
                    .entry(letter)
                    .or_insert_with(|| vec![LetterStatus::Empty; targets.len()]);
                slots[target_index] = slots[target_index].max(status);
            }
        }
    }

    KeyboardStatus {
        letters,
        target_count: targets.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Empty, Gray, Green, Yellow};
    use proptest::prelude::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn keyboard_empty_without_guesses() {
        let keyboard = compute_keyboard_status(&words(&["slate"]), &[]);
        assert!(keyboard.is_empty());
        assert_eq!(keyboard.status('a', 0), Empty);
        assert_eq!(keyboard.statuses('a'), vec![Empty]);
    }

    #[test]
    fn keyboard_single_target() {
        let keyboard = compute_keyboard_status(&words(&["slate"]), &words(&["crane"]));

        assert_eq!(keyboard.status('c', 0), Gray);
        assert_eq!(keyboard.status('a', 0), Green);
        assert_eq!(keyboard.status('e', 0), Green);
        assert_eq!(keyboard.status('s', 0), Empty);
        assert_eq!(keyboard.get('s'), None);
        assert_eq!(keyboard.len(), 5);
    }

    #[test]
    fn keyboard_keeps_best_status() {
        // A is green in CRANE, then only yellow in ABOUT
        let keyboard =
            compute_keyboard_status(&words(&["slate"]), &words(&["crane", "about"]));
        assert_eq!(keyboard.status('a', 0), Green);

        let reversed =
            compute_keyboard_status(&words(&["slate"]), &words(&["about", "crane"]));
        assert_eq!(reversed.status('a', 0), Green);
    }

    #[test]
    fn keyboard_duplicate_letter_in_guess_takes_best() {
        // EERIE against CRANE: first two E's gray, last E green
        let keyboard = compute_keyboard_status(&words(&["crane"]), &words(&["eerie"]));
        assert_eq!(keyboard.status('e', 0), Green);
        assert_eq!(keyboard.status('r', 0), Yellow);
    }

    #[test]
    fn keyboard_one_slot_per_target() {
        let keyboard = compute_keyboard_status(
            &words(&["slate", "crane", "fight"]),
            &words(&["crate"]),
        );

        assert_eq!(keyboard.target_count(), 3);
        assert_eq!(keyboard.get('c'), Some(&[Gray, Green, Gray][..]));
        assert_eq!(keyboard.get('t'), Some(&[Green, Gray, Yellow][..]));
        assert_eq!(keyboard.status('c', 7), Empty);
    }

    #[test]
    fn keyboard_overall_summary() {
        let keyboard = compute_keyboard_status(
            &words(&["slate", "crane", "fight"]),
            &words(&["crate"]),
        );

        assert_eq!(keyboard.overall('t'), Yellow);
        assert_eq!(keyboard.overall('c'), Yellow);
        assert_eq!(keyboard.overall('z'), Empty);

        let single = compute_keyboard_status(&words(&["slate"]), &words(&["crane"]));
        assert_eq!(single.overall('a'), Green);
        assert_eq!(single.overall('c'), Gray);
    }

    #[test]
    fn letter_rows_cover_alphabet() {
        let mut letters: Vec<char> = LETTER_ROWS.iter().flat_map(|row| row.chars()).collect();
        letters.sort_unstable();
        assert_eq!(letters, ('a'..='z').collect::<Vec<_>>());
    }

    #[test]
    fn keyboard_lookup_case_insensitive() {
        let keyboard = compute_keyboard_status(&words(&["slate"]), &words(&["crane"]));
        assert_eq!(keyboard.status('A', 0), Green);
    }

    proptest! {
        #[test]
        fn prop_keyboard_never_downgrades(
            targets in prop::collection::vec("[a-f]{5}", 1..4),
            guesses in prop::collection::vec("[a-f]{5}", 1..8),
        ) {
            let targets: Vec<Word> = targets.iter().map(|t| Word::new(t.as_str()).unwrap()).collect();
            let guesses: Vec<Word> = guesses.iter().map(|g| Word::new(g.as_str()).unwrap()).collect();

            let mut previous = compute_keyboard_status(&targets, &[]);
            for played in 1..=guesses.len() {
                let current = compute_keyboard_status(&targets, &guesses[..played]);
                for letter in 'a'..='f' {
                    for index in 0..targets.len() {
                        prop_assert!(current.status(letter, index) >= previous.status(letter, index));
                    }
                }
                previous = current;
            }
        }
    }
}
