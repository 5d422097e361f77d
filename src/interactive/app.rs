//! TUI application state and logic

use crate::core::KeyboardStatus;
use crate::game::{GameMode, GamePhase, GameRecord, GameStore, Key, Message, emit_key};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// How long to wait for input when no message is waiting to expire
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Modal dialog shown over the boards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// Pick a mode for a new game; `selected` indexes [`GameMode::ALL`]
    NewGame { selected: usize },
    /// Confirm restarting the current game
    Restart,
}

/// Application state
pub struct App {
    pub store: GameStore,
    pub dialog: Option<Dialog>,
    pub should_quit: bool,
    keyboard: Option<(Arc<GameRecord>, KeyboardStatus)>,
}

impl App {
    #[must_use]
    pub const fn new(store: GameStore) -> Self {
        Self {
            store,
            dialog: None,
            should_quit: false,
            keyboard: None,
        }
    }

    /// Recompute the keyboard status if the record changed since last time
    pub fn refresh_keyboard(&mut self) {
        let game = self.store.game();
        let stale = self
            .keyboard
            .as_ref()
            .is_none_or(|(record, _)| !Arc::ptr_eq(record, game));

        if stale {
            self.keyboard = Some((Arc::clone(game), self.store.keyboard_status()));
        }
    }

    /// Keyboard status as of the last [`refresh_keyboard`](Self::refresh_keyboard)
    #[must_use]
    pub fn keyboard(&self) -> Option<&KeyboardStatus> {
        self.keyboard.as_ref().map(|(_, status)| status)
    }

    /// Mode matching the current game, falling back to Wordle
    #[must_use]
    pub fn mode(&self) -> GameMode {
        GameMode::of_record(self.store.game()).unwrap_or_default()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if let Some(dialog) = self.dialog {
            self.handle_dialog_key(dialog, key.code);
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.open_new_game_dialog(),
            KeyCode::Char('r') if ctrl => self.dialog = Some(Dialog::Restart),
            _ if ctrl => {}
            code => self.play_key(code),
        }
    }

    fn open_new_game_dialog(&mut self) {
        let current = self.mode();
        let selected = GameMode::ALL
            .iter()
            .position(|&mode| mode == current)
            .unwrap_or(0);
        self.dialog = Some(Dialog::NewGame { selected });
    }

    fn handle_dialog_key(&mut self, dialog: Dialog, code: KeyCode) {
        match dialog {
            Dialog::NewGame { selected } => match code {
                KeyCode::Up => {
                    let selected = selected.checked_sub(1).unwrap_or(GameMode::ALL.len() - 1);
                    self.dialog = Some(Dialog::NewGame { selected });
                }
                KeyCode::Down | KeyCode::Tab => {
                    let selected = (selected + 1) % GameMode::ALL.len();
                    self.dialog = Some(Dialog::NewGame { selected });
                }
                KeyCode::Char(c @ '1'..='9') => {
                    let index = c as usize - '1' as usize;
                    if let Some(&mode) = GameMode::ALL.get(index) {
                        self.start_new_game(mode);
                    }
                }
                KeyCode::Enter => {
                    if let Some(&mode) = GameMode::ALL.get(selected) {
                        self.start_new_game(mode);
                    }
                }
                KeyCode::Esc => self.dialog = None,
                _ => {}
            },
            Dialog::Restart => match code {
                KeyCode::Enter | KeyCode::Char('y' | 'Y') => {
                    self.dialog = None;
                    self.store.restart();
                    self.store.show_message(Message::info("Restarted."));
                }
                KeyCode::Esc | KeyCode::Char('n' | 'N') => self.dialog = None,
                _ => {}
            },
        }
    }

    fn start_new_game(&mut self, mode: GameMode) {
        self.dialog = None;
        self.store.new_game(mode);
        self.store
            .show_message(Message::info(format!("New {} game!", mode.name())));
    }

    fn play_key(&mut self, code: KeyCode) {
        let key = match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Enter => Key::Enter,
            _ => Key::Other,
        };

        let before = self.store.phase();
        if !emit_key(&mut self.store, key) {
            return;
        }

        let after = self.store.phase();
        if before != after {
            debug!(?after, "game finished");
            self.announce(after);
        }
    }

    fn announce(&mut self, phase: GamePhase) {
        let used = self.store.game().guesses().len();
        let message = match phase {
            GamePhase::Won => Message::success(match used {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                _ => "🎊 SOLVED! 🎊",
            }),
            GamePhase::Lost => Message::error("Out of guesses! Ctrl-N for a new game."),
            GamePhase::InProgress => return,
        };
        self.store.show_message(message);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.refresh_keyboard();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Wake up in time to clear an expiring message
        let timeout = app
            .store
            .message_deadline()
            .map_or(IDLE_POLL, |deadline| {
                deadline.saturating_duration_since(Instant::now())
            });

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        app.store.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
