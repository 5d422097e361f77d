//! Named game presets
//!
//! A mode only decides how many targets to draw and how many guesses to
//! allow; the store never needs to know which preset produced a game.

use super::GameRecord;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// One word, six tries
    #[default]
    Wordle,
    /// Four words at once, nine tries
    Quordle,
    /// Eight words at once, thirteen tries
    Octordle,
}

/// Error for an unrecognized mode name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown game mode '{0}' (expected wordle, quordle or octordle)")]
pub struct UnknownMode(String);

impl GameMode {
    /// Every preset, in menu order
    pub const ALL: [Self; 3] = [Self::Wordle, Self::Quordle, Self::Octordle];

    #[must_use]
    pub const fn guess_count(self) -> usize {
        match self {
            Self::Wordle => 6,
            Self::Quordle => 9,
            Self::Octordle => 13,
        }
    }

    #[must_use]
    pub const fn target_count(self) -> usize {
        match self {
            Self::Wordle => 1,
            Self::Quordle => 4,
            Self::Octordle => 8,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wordle => "Wordle",
            Self::Quordle => "Quordle",
            Self::Octordle => "Octordle",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Wordle => "Guess a single 5-letter word in 6 tries.",
            Self::Quordle => "Solve 4 words at the same time in 9 tries.",
            Self::Octordle => "Guess 8 words simultaneously within 13 tries.",
        }
    }

    /// The preset whose shape matches `record`, if any
    #[must_use]
    pub fn of_record(record: &GameRecord) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| {
            mode.target_count() == record.targets().len()
                && mode.guess_count() == record.guess_count()
        })
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}
