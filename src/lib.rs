//! Wordle Game
//!
//! Game engine for Wordle and its multi-board variants (Quordle, Octordle),
//! with a terminal UI, a line-based mode and a self-play simulator.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterStatus, Word, compute_letter_status};
//!
//! let target = Word::new("slate").unwrap();
//! let statuses = compute_letter_status(&target, &['c', 'r', 'a', 'n', 'e']);
//! assert_eq!(statuses[4], LetterStatus::Green);
//! ```

// Core domain types
pub mod core;

// Game state, rules and persistence
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
