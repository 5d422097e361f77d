//! Core domain types for the word game
//!
//! Pure, deterministic building blocks: words, per-letter feedback and the
//! keyboard aggregation. Nothing here knows about game state or I/O.

mod feedback;
mod keyboard;
mod status;
mod word;

pub use feedback::{Feedback, compute_letter_status, is_solved, to_emoji};
pub use keyboard::{KeyboardStatus, LETTER_ROWS, compute_keyboard_status};
pub use status::LetterStatus;
pub use word::{WORD_LENGTH, Word, WordError, normalize_letter};
