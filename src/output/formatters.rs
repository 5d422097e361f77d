//! Formatting utilities for terminal output

use crate::core::LetterStatus;
use colored::{ColoredString, Colorize};

/// Text of a single tile, three columns wide
#[must_use]
pub fn tile_text(letter: Option<char>) -> String {
    format!(" {} ", letter.map_or('·', |c| c.to_ascii_uppercase()))
}

/// A letter tile colored by its status
#[must_use]
pub fn tile(letter: Option<char>, status: LetterStatus) -> ColoredString {
    let text = tile_text(letter);
    match status {
        LetterStatus::Green => text.black().on_green().bold(),
        LetterStatus::Yellow => text.black().on_yellow().bold(),
        LetterStatus::Gray => text.white().on_bright_black(),
        LetterStatus::Empty => text.normal(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a ratio as a percentage with one decimal
#[must_use]
pub fn percent(part: usize, whole: usize) -> String {
    if whole == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 / whole as f64 * 100.0)
}
