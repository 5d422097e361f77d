//! Authoritative game state and its transitions
//!
//! The [`GameStore`] owns the current [`GameRecord`], the in-progress guess
//! and the transient message. It is created once at startup and handed to
//! every consumer by reference; changes to the record are pushed to
//! subscribers instead of being read from global state.

use super::board::{Board, build_board};
use super::notifier::{Message, Notifier};
use super::rules::{self, GamePhase};
use super::{GameMode, GameRecord, GameSeed};
use crate::core::{KeyboardStatus, WORD_LENGTH, Word, compute_keyboard_status};
use crate::wordlists::Lexicon;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

/// Why a submitted guess was refused
///
/// The display text is the message shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessRejection {
    #[error("Not enough letters.")]
    TooShort,
    #[error("Too many letters.")]
    TooLong,
    #[error("Not in word list.")]
    NotInWordList,
    #[error("Used before.")]
    UsedBefore,
}

/// Result of [`GameStore::make_guess`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Guess appended to the history
    Accepted,
    /// Game already over; nothing changed and no message shown
    Ignored,
    /// Guess refused; the current guess is kept for correction
    Rejected(GuessRejection),
}

/// Handle returned by [`GameStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&GameRecord, &GameRecord)>;

/// Game state container
pub struct GameStore {
    lexicon: Arc<Lexicon>,
    game: Arc<GameRecord>,
    current_guess: Vec<char>,
    notifier: Notifier,
    rng: StdRng,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl GameStore {
    /// Store with a fresh default game and an OS-seeded random source
    #[must_use]
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self::with_rng(lexicon, StdRng::from_os_rng())
    }

    /// Store with a caller-supplied random source, for reproducible games
    #[must_use]
    pub fn with_rng(lexicon: Arc<Lexicon>, mut rng: StdRng) -> Self {
        let game = GameSeed::default().resolve(|| lexicon.random_solution(&mut rng).clone());

        Self {
            lexicon,
            game: Arc::new(game),
            current_guess: Vec::new(),
            notifier: Notifier::default(),
            rng,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current record; cheap to clone and never changes underneath a reader
    #[inline]
    #[must_use]
    pub const fn game(&self) -> &Arc<GameRecord> {
        &self.game
    }

    #[inline]
    #[must_use]
    pub fn current_guess(&self) -> &[char] {
        &self.current_guess
    }

    #[inline]
    #[must_use]
    pub const fn message(&self) -> Option<&Message> {
        self.notifier.message()
    }

    #[inline]
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        rules::phase(&self.game)
    }

    /// Best known status of every guessed letter against every target
    #[must_use]
    pub fn keyboard_status(&self) -> KeyboardStatus {
        compute_keyboard_status(self.game.targets(), self.game.guesses())
    }

    /// One board per target, as the player should see it
    #[must_use]
    pub fn boards(&self) -> Vec<Board> {
        (0..self.game.targets().len())
            .map(|index| build_board(&self.game, index, &self.current_guess, &self.lexicon))
            .collect()
    }

    /// Replace the game; missing seed fields get defaults
    ///
    /// Always clears the current guess.
    pub fn set_game(&mut self, seed: GameSeed) {
        let lexicon = &self.lexicon;
        let rng = &mut self.rng;
        let record = seed.resolve(|| lexicon.random_solution(rng).clone());

        info!(
            targets = record.targets().len(),
            guess_count = record.guess_count(),
            history = record.guesses().len(),
            "starting game"
        );
        self.current_guess.clear();
        self.replace_game(record);
    }

    /// Start over with the same targets and guess limit
    pub fn restart(&mut self) {
        let seed = GameSeed::restart(&self.game);
        self.set_game(seed);
    }

    /// Start a game shaped by `mode` with freshly drawn targets
    pub fn new_game(&mut self, mode: GameMode) {
        let targets = self
            .lexicon
            .random_solutions(&mut self.rng, mode.target_count());
        self.set_game(GameSeed::new(targets, mode.guess_count()));
    }

    /// Replace the in-progress guess without validation
    pub fn set_current_guess(&mut self, guess: Vec<char>) {
        self.current_guess = guess;
    }

    /// Submit the current guess
    pub fn make_guess(&mut self) -> GuessOutcome {
        if rules::is_game_ended(&self.game) {
            debug!("guess ignored, game already ended");
            return GuessOutcome::Ignored;
        }

        match self.validate_current_guess() {
            Ok(word) => {
                debug!(guess = %word, "guess accepted");
                let next = self.game.with_guess(word);
                self.current_guess.clear();
                self.replace_game(next);
                GuessOutcome::Accepted
            }
            Err(rejection) => {
                debug!(?rejection, "guess rejected");
                self.show_message(Message::error(rejection.to_string()));
                GuessOutcome::Rejected(rejection)
            }
        }
    }

    fn validate_current_guess(&self) -> Result<Word, GuessRejection> {
        let typed = self.current_guess.len();
        if typed < WORD_LENGTH {
            return Err(GuessRejection::TooShort);
        }
        if typed > WORD_LENGTH {
            return Err(GuessRejection::TooLong);
        }

        if !self.lexicon.is_valid_guess(&self.current_guess) {
            return Err(GuessRejection::NotInWordList);
        }
        let word =
            Word::from_chars(&self.current_guess).map_err(|_| GuessRejection::NotInWordList)?;

        if self.game.has_guessed(&word) {
            return Err(GuessRejection::UsedBefore);
        }

        Ok(word)
    }

    /// Show a message, replacing any current one and restarting its timer
    pub fn show_message(&mut self, message: Message) {
        self.notifier.show(message, Instant::now());
    }

    /// Expire the current message if its time is up
    ///
    /// Returns `true` when the message was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notifier.poll(now)
    }

    /// When the current message is due to expire
    #[must_use]
    pub fn message_deadline(&self) -> Option<Instant> {
        self.notifier.deadline()
    }

    /// Call `listener` with `(old, new)` every time the record is replaced
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&GameRecord, &GameRecord) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn replace_game(&mut self, record: GameRecord) {
        let previous = std::mem::replace(&mut self.game, Arc::new(record));
        let current = Arc::clone(&self.game);
        for (_, listener) in &mut self.listeners {
            listener(&previous, &current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::DEFAULT_GUESS_COUNT;
    use crate::wordlists::loader::words_from_slice;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn lexicon() -> Arc<Lexicon> {
        Arc::new(
            Lexicon::new(
                words_from_slice(&["slate", "crane", "fight", "proxy"]),
                words_from_slice(&["audio", "adieu", "tread"]),
            )
            .unwrap(),
        )
    }

    fn store_with(targets: &[&str], guess_count: usize) -> GameStore {
        let mut store = GameStore::with_rng(lexicon(), StdRng::seed_from_u64(1));
        store.set_game(GameSeed::new(words_from_slice(targets), guess_count));
        store
    }

    fn type_word(store: &mut GameStore, word: &str) {
        store.set_current_guess(word.chars().collect());
    }

    fn submit(store: &mut GameStore, word: &str) -> GuessOutcome {
        type_word(store, word);
        store.make_guess()
    }

    fn message_text(store: &GameStore) -> Option<&str> {
        store.message().map(|m| m.text.as_str())
    }

    #[test]
    fn new_store_has_default_game() {
        let store = GameStore::with_rng(lexicon(), StdRng::seed_from_u64(3));

        assert_eq!(store.game().guess_count(), DEFAULT_GUESS_COUNT);
        assert_eq!(store.game().targets().len(), 1);
        assert!(store.lexicon().solutions().contains(&store.game().targets()[0]));
        assert!(store.current_guess().is_empty());
        assert_eq!(store.phase(), GamePhase::InProgress);
    }

    #[test]
    fn accepted_guess_appends_and_clears_current() {
        let mut store = store_with(&["slate"], 6);

        assert_eq!(submit(&mut store, "crane"), GuessOutcome::Accepted);
        assert_eq!(store.game().guesses(), words_from_slice(&["crane"]).as_slice());
        assert!(store.current_guess().is_empty());
        assert!(store.message().is_none());
    }

    #[test]
    fn uppercase_guess_is_accepted() {
        let mut store = store_with(&["slate"], 6);
        assert_eq!(submit(&mut store, "SLATE"), GuessOutcome::Accepted);
        assert_eq!(store.phase(), GamePhase::Won);
    }

    #[test]
    fn unknown_word_rejected_and_kept() {
        let mut store = store_with(&["slate"], 6);

        assert_eq!(
            submit(&mut store, "zzzzz"),
            GuessOutcome::Rejected(GuessRejection::NotInWordList)
        );
        assert_eq!(message_text(&store), Some("Not in word list."));
        assert_eq!(store.current_guess(), &['z'; 5]);
        assert!(store.game().guesses().is_empty());
    }

    #[test]
    fn repeated_guess_rejected() {
        let mut store = store_with(&["slate"], 6);
        assert_eq!(submit(&mut store, "crane"), GuessOutcome::Accepted);

        assert_eq!(
            submit(&mut store, "CRANE"),
            GuessOutcome::Rejected(GuessRejection::UsedBefore)
        );
        assert_eq!(message_text(&store), Some("Used before."));
        assert_eq!(store.game().guesses().len(), 1);
        assert_eq!(store.current_guess().len(), 5);
    }

    #[test]
    fn wrong_length_rejected() {
        let mut store = store_with(&["slate"], 6);

        assert_eq!(
            submit(&mut store, "cran"),
            GuessOutcome::Rejected(GuessRejection::TooShort)
        );
        assert_eq!(message_text(&store), Some("Not enough letters."));

        assert_eq!(
            submit(&mut store, "cranes"),
            GuessOutcome::Rejected(GuessRejection::TooLong)
        );
        assert_eq!(message_text(&store), Some("Too many letters."));
        assert!(store.game().guesses().is_empty());
    }

    #[test]
    fn running_out_of_guesses_loses() {
        let mut store = store_with(&["slate"], 2);

        assert_eq!(submit(&mut store, "crane"), GuessOutcome::Accepted);
        assert_eq!(submit(&mut store, "audio"), GuessOutcome::Accepted);
        assert_eq!(store.phase(), GamePhase::Lost);
        assert!(rules::is_game_ended(store.game()));
        assert!(!rules::is_game_won(store.game()));
    }

    #[test]
    fn guess_after_end_changes_nothing() {
        let mut store = store_with(&["slate"], 6);
        submit(&mut store, "tread");
        submit(&mut store, "zzzzz");
        assert_eq!(submit(&mut store, "slate"), GuessOutcome::Accepted);
        assert_eq!(store.phase(), GamePhase::Won);

        type_word(&mut store, "crane");
        let game_before = GameRecord::clone(store.game());
        let guess_before = store.current_guess().to_vec();
        let message_before = store.message().cloned();

        assert_eq!(store.make_guess(), GuessOutcome::Ignored);
        assert_eq!(**store.game(), game_before);
        assert_eq!(store.current_guess(), guess_before.as_slice());
        assert_eq!(store.message().cloned(), message_before);
    }

    #[test]
    fn guess_after_loss_changes_nothing() {
        let mut store = store_with(&["slate"], 2);
        submit(&mut store, "zzzzz");
        assert_eq!(submit(&mut store, "crane"), GuessOutcome::Accepted);
        assert_eq!(submit(&mut store, "audio"), GuessOutcome::Accepted);
        assert_eq!(store.phase(), GamePhase::Lost);

        type_word(&mut store, "slate");
        let game_before = GameRecord::clone(store.game());
        let message_before = store.message().cloned();
        assert_eq!(message_before.as_ref().map(|m| m.text.as_str()), Some("Not in word list."));

        assert_eq!(store.make_guess(), GuessOutcome::Ignored);
        assert_eq!(**store.game(), game_before);
        assert_eq!(store.game().guesses().len(), 2);
        assert_eq!(store.current_guess(), &['s', 'l', 'a', 't', 'e']);
        assert_eq!(store.message().cloned(), message_before);
    }

    #[test]
    fn multi_target_game_needs_every_target() {
        let mut store = store_with(&["slate", "crane"], 9);

        submit(&mut store, "slate");
        assert_eq!(store.phase(), GamePhase::InProgress);
        submit(&mut store, "crane");
        assert_eq!(store.phase(), GamePhase::Won);
    }

    #[test]
    fn set_game_clears_current_guess() {
        let mut store = store_with(&["slate"], 6);
        submit(&mut store, "crane");
        type_word(&mut store, "aud");

        store.set_game(GameSeed::default());
        assert!(store.current_guess().is_empty());
        assert!(store.game().guesses().is_empty());
        assert_eq!(store.game().guess_count(), DEFAULT_GUESS_COUNT);
    }

    #[test]
    fn restart_keeps_targets_wipes_guesses() {
        let mut store = store_with(&["slate", "fight"], 9);
        submit(&mut store, "crane");
        type_word(&mut store, "pro");
        let targets = store.game().targets().to_vec();

        store.restart();
        assert_eq!(store.game().targets(), targets.as_slice());
        assert_eq!(store.game().guess_count(), 9);
        assert!(store.game().guesses().is_empty());
        assert!(store.current_guess().is_empty());
    }

    #[test]
    fn new_game_uses_mode_shape() {
        let mut store = store_with(&["slate"], 6);
        store.new_game(GameMode::Quordle);

        let game = store.game();
        assert_eq!(game.targets().len(), 4);
        assert_eq!(game.guess_count(), 9);
        for target in game.targets() {
            assert!(store.lexicon().solutions().contains(target));
        }
    }

    #[test]
    fn seeded_stores_are_reproducible() {
        let mut first = GameStore::with_rng(lexicon(), StdRng::seed_from_u64(42));
        let mut second = GameStore::with_rng(lexicon(), StdRng::seed_from_u64(42));
        first.new_game(GameMode::Quordle);
        second.new_game(GameMode::Quordle);
        assert_eq!(first.game(), second.game());
    }

    #[test]
    fn subscribers_see_record_changes_only() {
        let mut store = store_with(&["slate"], 6);
        let seen: Rc<RefCell<Vec<(usize, usize)>>> = Rc::default();

        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |old, new| {
            sink.borrow_mut()
                .push((old.guesses().len(), new.guesses().len()));
        });

        type_word(&mut store, "cra");
        submit(&mut store, "zzzzz");
        assert!(seen.borrow().is_empty());

        submit(&mut store, "crane");
        assert_eq!(seen.borrow().as_slice(), &[(0, 1)]);

        store.restart();
        assert_eq!(seen.borrow().as_slice(), &[(0, 1), (1, 0)]);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        submit(&mut store, "audio");
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn previous_snapshot_stays_valid() {
        let mut store = store_with(&["slate"], 6);
        let before = Arc::clone(store.game());

        submit(&mut store, "crane");
        assert!(before.guesses().is_empty());
        assert_eq!(store.game().guesses().len(), 1);
        assert!(!Arc::ptr_eq(&before, store.game()));
    }

    #[test]
    fn keyboard_status_follows_guesses() {
        let mut store = store_with(&["slate"], 6);
        assert!(store.keyboard_status().is_empty());

        submit(&mut store, "crane");
        let keyboard = store.keyboard_status();
        assert_eq!(keyboard.status('a', 0), crate::core::LetterStatus::Green);
        assert_eq!(keyboard.status('c', 0), crate::core::LetterStatus::Gray);
    }

    #[test]
    fn message_cleared_by_tick() {
        let mut store = store_with(&["slate"], 6);
        submit(&mut store, "zzzzz");

        let deadline = store.message_deadline().unwrap();
        assert!(store.tick(deadline));
        assert!(store.message().is_none());
    }
}
