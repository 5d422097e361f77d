//! Letter-by-letter feedback for a guess against one target
//!
//! Implements Wordle's duplicate-letter rule: exact matches are credited
//! first, then misplaced letters, and a letter is never credited more times
//! than it occurs in the target.

use super::{LetterStatus, WORD_LENGTH, Word};

/// Feedback for every position of a guess
pub type Feedback = [LetterStatus; WORD_LENGTH];

/// Calculate the feedback when `guess` is played against `target`
///
/// `guess` may be partially typed: positions past its end stay
/// [`LetterStatus::Empty`], and characters past [`WORD_LENGTH`] are ignored.
/// Comparison is case-insensitive.
///
/// # Algorithm
/// 1. First pass: mark exact matches (greens) and consume them from a copy
///    of the target
/// 2. Second pass: for every other typed letter, consume the leftmost
///    remaining occurrence (yellow) or mark it gray
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterStatus, Word, compute_letter_status};
///
/// let target = Word::new("slate").unwrap();
/// let statuses = compute_letter_status(&target, &['c', 'r', 'a', 'n', 'e']);
///
/// assert_eq!(statuses[2], LetterStatus::Green);
/// assert_eq!(statuses[1], LetterStatus::Gray);
/// ```
#[must_use]
pub fn compute_letter_status(target: &Word, guess: &[char]) -> Feedback {
    let mut result = [LetterStatus::Empty; WORD_LENGTH];
    let mut remaining: [Option<char>; WORD_LENGTH] = target.chars().map(Some);

    let typed: Vec<char> = guess
        .iter()
        .take(WORD_LENGTH)
        .map(char::to_ascii_lowercase)
        .collect();

    // First pass: Mark greens (exact position matches)
    for (i, &letter) in typed.iter().enumerate() {
        if remaining[i] == Some(letter) {
            result[i] = LetterStatus::Green;
            remaining[i] = None;
        }
    }

    // Second pass: Mark yellows from what is left, grays otherwise
    for (i, &letter) in typed.iter().enumerate() {
        if result[i] == LetterStatus::Green {
            continue;
        }

        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(letter)) {
            result[i] = LetterStatus::Yellow;
            *slot = None;
        } else {
            result[i] = LetterStatus::Gray;
        }
    }

    result
}

/// Check if every position is green
#[must_use]
pub fn is_solved(feedback: &Feedback) -> bool {
    feedback.iter().all(|&status| status == LetterStatus::Green)
}

/// Render feedback as emoji squares
#[must_use]
pub fn to_emoji(feedback: &Feedback) -> String {
    feedback.iter().map(|status| status.emoji()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Empty, Gray, Green, Yellow};
    use proptest::prelude::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn feedback(target: &str, guess: &str) -> Feedback {
        compute_letter_status(&Word::new(target).unwrap(), &chars(guess))
    }

    #[test]
    fn feedback_all_gray() {
        assert_eq!(feedback("fghij", "abcde"), [Gray; WORD_LENGTH]);
    }

    #[test]
    fn feedback_all_green() {
        let result = feedback("crane", "crane");
        assert_eq!(result, [Green; WORD_LENGTH]);
        assert!(is_solved(&result));
    }

    #[test]
    fn feedback_real_wordle_example() {
        // C(gray) R(gray) A(green) N(gray) E(green)
        assert_eq!(
            feedback("slate", "crane"),
            [Gray, Gray, Green, Gray, Green]
        );
    }

    #[test]
    fn feedback_duplicate_guess_letters_speed_erase() {
        // Target SPEED holds two E's, neither at position 0 or 4
        let result = feedback("speed", "erase");
        assert_eq!(result, [Yellow, Gray, Gray, Yellow, Yellow]);

        let credited_e = chars("erase")
            .iter()
            .zip(result)
            .filter(|(c, status)| **c == 'e' && status.is_credited())
            .count();
        assert_eq!(credited_e, 2);
    }

    #[test]
    fn feedback_green_consumed_before_yellow() {
        // Only one E in CRANE, and it is matched exactly at the end
        assert_eq!(
            feedback("crane", "eerie"),
            [Gray, Gray, Yellow, Gray, Green]
        );
    }

    #[test]
    fn feedback_duplicate_letters_complex() {
        // First O is yellow (wrong position), second O is green
        assert_eq!(
            feedback("floor", "robot"),
            [Yellow, Yellow, Gray, Green, Gray]
        );
    }

    #[test]
    fn feedback_yellow_consumes_left_to_right() {
        // ABBEY has two B's: one matched in place, one left for the first stray B
        assert_eq!(
            feedback("abbey", "bxbbb"),
            [Yellow, Gray, Green, Gray, Gray]
        );
    }

    #[test]
    fn feedback_case_insensitive() {
        assert_eq!(feedback("slate", "SLATE"), [Green; WORD_LENGTH]);
        assert_eq!(feedback("slate", "CrAnE"), feedback("slate", "crane"));
    }

    #[test]
    fn feedback_partial_guess_leaves_empty() {
        let result = feedback("slate", "sl");
        assert_eq!(result, [Green, Green, Empty, Empty, Empty]);

        let result = feedback("slate", "");
        assert_eq!(result, [Empty; WORD_LENGTH]);
    }

    #[test]
    fn feedback_ignores_extra_characters() {
        assert_eq!(feedback("slate", "slatex"), [Green; WORD_LENGTH]);
    }

    #[test]
    fn feedback_emoji() {
        assert_eq!(to_emoji(&feedback("slate", "crane")), "⬛⬛🟩⬛🟩");
    }

    fn word_strategy() -> impl Strategy<Value = String> {
        // Small alphabet to force plenty of duplicate letters
        "[a-e]{5}"
    }

    proptest! {
        #[test]
        fn prop_word_against_itself_is_all_green(target in word_strategy()) {
            prop_assert_eq!(feedback(&target, &target), [Green; WORD_LENGTH]);
        }

        #[test]
        fn prop_credited_never_exceeds_occurrences(
            target in word_strategy(),
            guess in word_strategy(),
        ) {
            let word = Word::new(target.as_str()).unwrap();
            let result = compute_letter_status(&word, &chars(&guess));

            let counts = word.char_counts();
            for letter in 'a'..='e' {
                let credited = chars(&guess)
                    .iter()
                    .zip(result)
                    .filter(|(c, status)| **c == letter && status.is_credited())
                    .count();
                prop_assert!(credited <= counts.get(&letter).copied().unwrap_or(0));
            }
        }

        #[test]
        fn prop_partial_guess_never_gray_past_input(
            target in word_strategy(),
            guess in "[a-e]{0,5}",
        ) {
            let result = feedback(&target, &guess);
            let typed = guess.chars().count();
            for status in &result[typed..] {
                prop_assert_eq!(*status, Empty);
            }
            for status in &result[..typed] {
                prop_assert_ne!(*status, Empty);
            }
        }
    }
}
