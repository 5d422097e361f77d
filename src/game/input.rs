//! Key presses to game actions
//!
//! Front ends translate their own key events into [`Key`]s and feed them to
//! [`emit_key`]. Key-repeat suppression and focus handling stay with the
//! front end.

use super::GameStore;
use crate::core::{WORD_LENGTH, normalize_letter};

/// A key as the game understands it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Append(char),
    RemoveLast,
    Submit,
}

/// Map a key to an action given how many letters are already typed
///
/// Letters fold through upper-then-lower case and must land on a single
/// ASCII letter. Enter only submits a complete word.
#[must_use]
pub fn interpret(key: Key, typed: usize) -> Option<InputAction> {
    match key {
        Key::Char(c) => normalize_letter(c).map(InputAction::Append),
        Key::Backspace => Some(InputAction::RemoveLast),
        Key::Enter if typed == WORD_LENGTH => Some(InputAction::Submit),
        Key::Enter | Key::Other => None,
    }
}

/// Apply a key press to the store
///
/// Returns `true` when the key was consumed by the game. Nothing is consumed
/// once the game has ended. A letter typed into a full row is consumed but
/// does not change the guess.
pub fn emit_key(store: &mut GameStore, key: Key) -> bool {
    if store.phase().is_ended() {
        return false;
    }

    let Some(action) = interpret(key, store.current_guess().len()) else {
        return false;
    };

    match action {
        InputAction::Append(letter) => {
            if store.current_guess().len() < WORD_LENGTH {
                let mut guess = store.current_guess().to_vec();
                guess.push(letter);
                store.set_current_guess(guess);
            }
        }
        InputAction::RemoveLast => {
            let mut guess = store.current_guess().to_vec();
            guess.pop();
            store.set_current_guess(guess);
        }
        InputAction::Submit => {
            store.make_guess();
        }
    }

    true
}
