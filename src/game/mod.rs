//! Game state: records, rules, the store and its boundaries

pub mod board;
pub mod input;
pub mod mode;
pub mod notifier;
pub mod persistence;
pub mod record;
pub mod rules;
pub mod store;

pub use board::{Board, BoardRow, RowKind, build_board};
pub use input::{InputAction, Key, emit_key};
pub use mode::{GameMode, UnknownMode};
pub use notifier::{MESSAGE_DURATION, Message, MessageStyle, Notifier};
pub use persistence::{PersistError, StateFile};
pub use record::{DEFAULT_GUESS_COUNT, GameRecord, GameSeed};
pub use rules::GamePhase;
pub use store::{GameStore, GuessOutcome, GuessRejection, SubscriptionId};
