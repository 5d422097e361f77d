//! Per-letter feedback classification
//!
//! Variants are declared in aggregation order so the derived `Ord` gives
//! `Empty < Gray < Yellow < Green`.

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterStatus {
    /// No information yet (untyped position, or letter never guessed)
    #[default]
    Empty,
    /// Letter is not in the target
    Gray,
    /// Letter is in the target, but somewhere else
    Yellow,
    /// Letter is in the target at this position
    Green,
}

impl LetterStatus {
    /// Whether the letter was credited against the target (yellow or green)
    #[inline]
    #[must_use]
    pub const fn is_credited(self) -> bool {
        matches!(self, Self::Yellow | Self::Green)
    }

    /// Emoji square used in shareable results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Gray => '⬛',
            Self::Empty => '⬜',
        }
    }
}
