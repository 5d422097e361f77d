//! Read-only word lists used by a game
//!
//! Holds the solution collection targets are drawn from, plus the set of
//! words a player may submit. Every solution is also a valid guess.

use super::{SOLUTIONS, VALID_GUESSES, loader::words_from_slice};
use crate::core::Word;
use rand::Rng;
use rand::seq::index;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Errors building a lexicon
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconError {
    #[error("solution list contains no valid words")]
    NoSolutions,
}

/// Solution collection plus valid-guess set
#[derive(Debug, Clone)]
pub struct Lexicon {
    solutions: Vec<Word>,
    valid_guesses: FxHashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from solution words and extra valid guesses
    ///
    /// # Errors
    /// Returns [`LexiconError::NoSolutions`] if `solutions` is empty, since a
    /// game could never pick a target.
    pub fn new(
        solutions: Vec<Word>,
        valid_guesses: impl IntoIterator<Item = Word>,
    ) -> Result<Self, LexiconError> {
        if solutions.is_empty() {
            return Err(LexiconError::NoSolutions);
        }

        let mut guess_set: FxHashSet<String> = valid_guesses
            .into_iter()
            .map(|word| word.text().to_string())
            .collect();
        guess_set.extend(solutions.iter().map(|word| word.text().to_string()));

        Ok(Self {
            solutions,
            valid_guesses: guess_set,
        })
    }

    /// Lexicon from the word lists compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded solution list is empty.
    pub fn embedded() -> Result<Self, LexiconError> {
        Self::new(
            words_from_slice(SOLUTIONS),
            words_from_slice(VALID_GUESSES),
        )
    }

    /// Words a game may pick as targets
    #[inline]
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Number of accepted guesses (solutions included)
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.valid_guesses.len()
    }

    /// Membership test for a word, case-insensitive
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.valid_guesses.contains(&word.to_lowercase())
    }

    /// Whether typed characters spell an accepted guess
    #[must_use]
    pub fn is_valid_guess(&self, typed: &[char]) -> bool {
        let joined: String = typed.iter().collect();
        self.contains(&joined)
    }

    /// Pick a target uniformly at random from the whole solution collection
    pub fn random_solution<R: Rng>(&self, rng: &mut R) -> &Word {
        &self.solutions[rng.random_range(0..self.solutions.len())]
    }

    /// Pick `count` targets, distinct whenever the collection is large enough
    pub fn random_solutions<R: Rng>(&self, rng: &mut R, count: usize) -> Vec<Word> {
        if count <= self.solutions.len() {
            index::sample(rng, self.solutions.len(), count)
                .into_iter()
                .map(|i| self.solutions[i].clone())
                .collect()
        } else {
            (0..count)
                .map(|_| self.random_solution(rng).clone())
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small() -> Lexicon {
        Lexicon::new(
            words_from_slice(&["crane", "slate"]),
            words_from_slice(&["adieu", "audio"]),
        )
        .unwrap()
    }

    #[test]
    fn lexicon_rejects_empty_solutions() {
        let err = Lexicon::new(Vec::new(), words_from_slice(&["adieu"])).unwrap_err();
        assert_eq!(err, LexiconError::NoSolutions);
    }

    #[test]
    fn lexicon_solutions_are_guessable() {
        let lexicon = small();
        assert!(lexicon.contains("crane"));
        assert!(lexicon.contains("adieu"));
        assert_eq!(lexicon.guess_count(), 4);
    }

    #[test]
    fn lexicon_membership_is_case_insensitive() {
        let lexicon = small();
        assert!(lexicon.contains("CRANE"));
        assert!(lexicon.is_valid_guess(&['A', 'u', 'd', 'i', 'o']));
        assert!(!lexicon.is_valid_guess(&['x', 'x', 'x', 'x', 'x']));
        assert!(!lexicon.is_valid_guess(&['c', 'r', 'a']));
    }

    #[test]
    fn random_solution_covers_whole_range() {
        let lexicon = small();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = FxHashSet::default();

        for _ in 0..200 {
            seen.insert(lexicon.random_solution(&mut rng).text().to_string());
        }

        // The last entry must be reachable too
        assert!(seen.contains("slate"));
        assert!(seen.contains("crane"));
    }

    #[test]
    fn random_solutions_are_distinct_when_possible() {
        let lexicon = small();
        let mut rng = StdRng::seed_from_u64(11);

        let picked = lexicon.random_solutions(&mut rng, 2);
        assert_eq!(picked.len(), 2);
        assert_ne!(picked[0], picked[1]);

        // More targets than solutions falls back to repeats
        assert_eq!(lexicon.random_solutions(&mut rng, 5).len(), 5);
    }

    #[test]
    fn embedded_lexicon_loads() {
        let lexicon = Lexicon::embedded().unwrap();
        assert_eq!(lexicon.solutions().len(), SOLUTIONS.len());
        assert!(lexicon.guess_count() >= lexicon.solutions().len());
    }
}
