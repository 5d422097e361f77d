//! Self-play simulation
//!
//! Plays many games in parallel through the real [`GameStore`], with a
//! player that guesses a random solution still consistent with the feedback
//! it has seen for the first unfound target.

use crate::core::{Word, compute_letter_status};
use crate::game::rules::is_target_found;
use crate::game::{GameMode, GamePhase, GameRecord, GameStore, GuessOutcome};
use crate::wordlists::Lexicon;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// What to simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub games: usize,
    pub mode: GameMode,
    /// Base seed; game `i` uses `seed + i`. Random when unset.
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize, mode: GameMode) -> Self {
        Self {
            games,
            mode,
            seed: None,
            show_progress: false,
        }
    }
}

/// Outcome of a single simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameReport {
    pub won: bool,
    pub guesses: usize,
}

/// Aggregate over every simulated game
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub mode: GameMode,
    pub seed: u64,
    pub games: usize,
    pub wins: usize,
    /// Guesses used in won games, keyed by guess count
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn losses(&self) -> usize {
        self.games - self.wins
    }

    /// Fraction of games won, in `0.0..=1.0`
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    /// Mean guesses over won games
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.wins == 0 {
            return 0.0;
        }
        let total: usize = self
            .distribution
            .iter()
            .map(|(guesses, count)| guesses * count)
            .sum();
        total as f64 / self.wins as f64
    }
}

/// Run `config.games` games across the rayon pool
#[must_use]
pub fn run_simulation(lexicon: &Arc<Lexicon>, config: SimulationConfig) -> SimulationResult {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    debug!(games = config.games, mode = %config.mode, seed, "starting simulation");

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb.set_message(config.mode.name());
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let reports: Vec<GameReport> = (0..config.games)
        .into_par_iter()
        .map(|index| {
            let report = play_game(lexicon, config.mode, seed.wrapping_add(index as u64));
            pb.inc(1);
            report
        })
        .collect();
    pb.finish_with_message("Complete!");

    let mut distribution = BTreeMap::new();
    for report in reports.iter().filter(|r| r.won) {
        *distribution.entry(report.guesses).or_insert(0) += 1;
    }

    SimulationResult {
        mode: config.mode,
        seed,
        games: reports.len(),
        wins: reports.iter().filter(|r| r.won).count(),
        distribution,
        duration: start.elapsed(),
    }
}

/// Play one game to the end with a seeded store and player
#[must_use]
pub fn play_game(lexicon: &Arc<Lexicon>, mode: GameMode, seed: u64) -> GameReport {
    let mut store = GameStore::with_rng(Arc::clone(lexicon), StdRng::seed_from_u64(seed));
    store.new_game(mode);
    let mut player = StdRng::seed_from_u64(!seed);

    while !store.phase().is_ended() {
        let Some(guess) = choose_guess(store.lexicon(), store.game(), &mut player) else {
            break;
        };
        store.set_current_guess(guess.chars().to_vec());
        if store.make_guess() != GuessOutcome::Accepted {
            break;
        }
    }

    GameReport {
        won: store.phase() == GamePhase::Won,
        guesses: store.game().guesses().len(),
    }
}

/// Pick a random unguessed solution that matches all feedback so far
///
/// Only the first target not yet found is considered.
pub fn choose_guess<R: Rng>(lexicon: &Lexicon, record: &GameRecord, rng: &mut R) -> Option<Word> {
    let target = record
        .targets()
        .iter()
        .find(|target| !is_target_found(target, record))?;

    let seen: Vec<_> = record
        .guesses()
        .iter()
        .map(|guess| (guess, compute_letter_status(target, guess.chars())))
        .collect();

    let candidates: Vec<&Word> = lexicon
        .solutions()
        .iter()
        .filter(|candidate| !record.has_guessed(candidate))
        .filter(|candidate| {
            seen.iter()
                .all(|(guess, feedback)| compute_letter_status(candidate, guess.chars()) == *feedback)
        })
        .collect();

    candidates.choose(rng).map(|&word| word.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameSeed;
    use crate::wordlists::loader::words_from_slice;

    fn small_lexicon() -> Arc<Lexicon> {
        Arc::new(
            Lexicon::new(
                words_from_slice(&[
                    "slate", "crane", "fight", "proxy", "audio", "tread", "lemon", "brick",
                ]),
                Vec::new(),
            )
            .unwrap(),
        )
    }

    #[test]
    fn consistent_player_always_wins_single_word() {
        // Six solutions and six guesses: each miss removes at least itself
        let lexicon = Arc::new(
            Lexicon::new(
                words_from_slice(&["slate", "crane", "fight", "proxy", "audio", "lemon"]),
                Vec::new(),
            )
            .unwrap(),
        );
        for seed in 0..20 {
            let report = play_game(&lexicon, GameMode::Wordle, seed);
            assert!(report.won, "seed {seed} lost");
            assert!((1..=6).contains(&report.guesses));
        }
    }

    #[test]
    fn choose_guess_respects_feedback() {
        let lexicon = small_lexicon();
        let record = GameSeed::new(words_from_slice(&["slate"]), 6)
            .with_guesses(words_from_slice(&["crane"]))
            .resolve(|| Word::new("slate").unwrap());

        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..10 {
            let guess = choose_guess(&lexicon, &record, &mut rng).unwrap();
            let target = &record.targets()[0];
            assert_eq!(
                compute_letter_status(&guess, record.guesses()[0].chars()),
                compute_letter_status(target, record.guesses()[0].chars())
            );
            assert_ne!(guess.text(), "crane");
        }
    }

    #[test]
    fn choose_guess_none_when_all_found() {
        let lexicon = small_lexicon();
        let record = GameSeed::new(words_from_slice(&["slate"]), 6)
            .with_guesses(words_from_slice(&["slate"]))
            .resolve(|| Word::new("slate").unwrap());
        assert_eq!(choose_guess(&lexicon, &record, &mut StdRng::seed_from_u64(1)), None);
    }

    #[test]
    fn simulation_is_reproducible() {
        let lexicon = small_lexicon();
        let config = SimulationConfig {
            seed: Some(7),
            ..SimulationConfig::new(12, GameMode::Quordle)
        };

        let first = run_simulation(&lexicon, config);
        let second = run_simulation(&lexicon, config);
        assert_eq!(first.wins, second.wins);
        assert_eq!(first.distribution, second.distribution);
        assert_eq!(first.seed, 7);
    }

    #[test]
    fn simulation_counts_add_up() {
        let lexicon = small_lexicon();
        let config = SimulationConfig {
            seed: Some(3),
            ..SimulationConfig::new(25, GameMode::Wordle)
        };
        let result = run_simulation(&lexicon, config);

        assert_eq!(result.games, 25);
        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.wins);
        assert_eq!(result.wins + result.losses(), result.games);
        assert!(result.win_rate() <= 1.0);
        if result.wins > 0 {
            assert!(result.average_guesses() >= 1.0);
        }
    }

    #[test]
    fn empty_simulation() {
        let result = run_simulation(&small_lexicon(), SimulationConfig::new(0, GameMode::Wordle));
        assert_eq!(result.games, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
        assert!(result.average_guesses().abs() < f64::EPSILON);
    }
}
