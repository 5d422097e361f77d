//! Saving and restoring the game record
//!
//! Only the [`GameRecord`] is stored. The in-progress guess and any message
//! are deliberately lost on restart.

use super::{GameRecord, GameSeed, GameStore, SubscriptionId};
use crate::core::Word;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Key the record is stored under; also the file stem
pub const STATE_KEY: &str = "game";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode game state: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SavedGame<'a> {
    guess_count: usize,
    targets: Vec<&'a str>,
    guesses: Vec<Vec<String>>,
}

impl<'a> From<&'a GameRecord> for SavedGame<'a> {
    fn from(record: &'a GameRecord) -> Self {
        Self {
            guess_count: record.guess_count(),
            targets: record.targets().iter().map(Word::text).collect(),
            guesses: record
                .guesses()
                .iter()
                .map(|guess| guess.chars().iter().map(char::to_string).collect())
                .collect(),
        }
    }
}

/// Top-level fields, each kept raw so one bad field cannot spoil the others
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGame {
    #[serde(default)]
    guess_count: Value,
    #[serde(default)]
    targets: Value,
    #[serde(default)]
    guesses: Value,
}

/// Serialize a record to its JSON form
///
/// # Errors
/// Returns [`PersistError::Encode`] if serialization fails.
pub fn encode(record: &GameRecord) -> Result<String, PersistError> {
    Ok(serde_json::to_string(&SavedGame::from(record))?)
}

/// Parse saved JSON into a seed
///
/// Unreadable JSON yields an empty seed. Otherwise each field is decoded on
/// its own and left unset when it is missing or malformed.
#[must_use]
pub fn decode(json: &str) -> GameSeed {
    let raw: RawGame = match serde_json::from_str(json) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(error = %e, "saved game is not valid JSON, starting fresh");
            return GameSeed::default();
        }
    };

    GameSeed {
        guess_count: decode_guess_count(raw.guess_count),
        targets: decode_targets(raw.targets).map(Into::into),
        guesses: decode_guesses(raw.guesses),
    }
}

fn decode_guess_count(value: Value) -> Option<usize> {
    let count = serde_json::from_value::<usize>(value).ok()?;
    (count >= 1).then_some(count)
}

fn decode_targets(value: Value) -> Option<Vec<Word>> {
    let texts = serde_json::from_value::<Vec<String>>(value).ok()?;
    let targets = texts
        .iter()
        .map(|text| Word::new(text.as_str()))
        .collect::<Result<Vec<_>, _>>()
        .ok()?;
    (!targets.is_empty()).then_some(targets)
}

fn decode_guesses(value: Value) -> Option<Vec<Word>> {
    // Each cell must hold exactly one letter
    let rows = serde_json::from_value::<Vec<Vec<char>>>(value).ok()?;
    rows.iter()
        .map(|letters| Word::from_chars(letters))
        .collect::<Result<Vec<_>, _>>()
        .ok()
}

/// The save file inside a state directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STATE_KEY}.json")),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved seed; a missing file yields an empty seed
    ///
    /// # Errors
    /// Returns [`PersistError::Io`] if the file exists but cannot be read.
    pub fn load(&self) -> Result<GameSeed, PersistError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => {
                debug!(path = %self.path.display(), "loaded saved game");
                Ok(decode(&json))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(GameSeed::default()),
            Err(source) => Err(PersistError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Write `record`, creating the state directory if needed
    ///
    /// # Errors
    /// Returns an error if encoding fails or the file cannot be written.
    pub fn save(&self, record: &GameRecord) -> Result<(), PersistError> {
        let json = encode(record)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| PersistError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&self.path, json).map_err(|source| PersistError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Continue the saved game, or start a default one when there is none
///
/// Without a state file, or when it cannot be read, the store gets the same
/// default game as an empty save.
pub fn resume(store: &mut GameStore, file: Option<&StateFile>) {
    let seed = match file.map(StateFile::load) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            warn!(error = %e, "could not read saved game, starting fresh");
            GameSeed::default()
        }
        None => GameSeed::default(),
    };
    store.set_game(seed);
}

/// Save every new record the store produces
pub fn attach(store: &mut GameStore, file: StateFile) -> SubscriptionId {
    store.subscribe(move |_, current| {
        if let Err(e) = file.save(current) {
            warn!(error = %e, "failed to save game");
        }
    })
}
