//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary for zero-cost
//! access, file loading for custom lists, and the [`Lexicon`] a game reads.

mod embedded;
mod lexicon;
pub mod loader;

pub use embedded::{SOLUTIONS, SOLUTIONS_COUNT, VALID_GUESSES, VALID_GUESSES_COUNT};
pub use lexicon::{Lexicon, LexiconError};
