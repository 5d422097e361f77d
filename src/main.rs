//! Wordle - CLI
//!
//! Wordle, Quordle and Octordle in the terminal, with a line-based mode, a
//! self-play simulator and a one-off feedback checker.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use wordle_game::{
    commands::{SimulationConfig, check_guess, run_simple, run_simulation},
    game::{GameMode, GameStore, StateFile, persistence},
    logging,
    output::{print_check_result, print_simulation_result},
    wordlists::{
        Lexicon, SOLUTIONS, VALID_GUESSES,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Wordle, Quordle and Octordle in your terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the saved game and the TUI log
    #[arg(long, global = true, env = "WORDLE_STATE_DIR", default_value = ".wordle")]
    state_dir: PathBuf,

    /// Don't load or save the game
    #[arg(long, global = true)]
    no_save: bool,

    /// Solutions file (one word per line) instead of the built-in list
    #[arg(long, global = true)]
    solutions: Option<PathBuf>,

    /// Valid guesses file (one word per line) instead of the built-in list
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Start a fresh game in this mode instead of resuming
        #[arg(short, long)]
        mode: Option<GameMode>,
    },

    /// Simple CLI mode (line-based, no TUI)
    Simple {
        /// Start a fresh game in this mode instead of resuming
        #[arg(short, long)]
        mode: Option<GameMode>,
    },

    /// Self-play many games and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        games: usize,

        /// Game mode to simulate
        #[arg(short, long, default_value = "wordle")]
        mode: GameMode,

        /// Base random seed, for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show the feedback for one guess against a target
    Check {
        /// The target word
        target: String,

        /// The guessed word
        guess: String,
    },
}

/// Build the lexicon from the built-in lists or the given files
fn load_lexicon(solutions: Option<&Path>, guesses: Option<&Path>) -> Result<Lexicon> {
    let solution_words = match solutions {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read solutions from {}", path.display()))?,
        None => words_from_slice(SOLUTIONS),
    };
    let guess_words = match guesses {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read guesses from {}", path.display()))?,
        None => words_from_slice(VALID_GUESSES),
    };

    let lexicon = Lexicon::new(solution_words, guess_words)?;
    info!(
        solutions = lexicon.solutions().len(),
        guesses = lexicon.guess_count(),
        "word lists loaded"
    );
    Ok(lexicon)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { mode: None });

    if matches!(command, Commands::Play { .. }) {
        logging::init_file(&cli.state_dir)
            .with_context(|| format!("failed to open log in {}", cli.state_dir.display()))?;
    } else {
        logging::init_stderr();
    }

    let lexicon = Arc::new(load_lexicon(
        cli.solutions.as_deref(),
        cli.guesses.as_deref(),
    )?);
    let state = (!cli.no_save).then(|| StateFile::in_dir(&cli.state_dir));

    match command {
        Commands::Play { mode } => {
            use wordle_game::interactive::{App, run_tui};

            let store = prepare_store(lexicon, state, mode);
            run_tui(App::new(store))
        }
        Commands::Simple { mode } => {
            let mut store = prepare_store(lexicon, state, mode);
            run_simple(&mut store)?;
            Ok(())
        }
        Commands::Simulate { games, mode, seed } => {
            let config = SimulationConfig {
                seed,
                show_progress: true,
                ..SimulationConfig::new(games, mode)
            };
            println!("Simulating {games} {} games...", mode.name());
            let result = run_simulation(&lexicon, config);
            print_simulation_result(&result);
            Ok(())
        }
        Commands::Check { target, guess } => {
            let result = check_guess(&lexicon, &target, &guess)?;
            print_check_result(&result);
            Ok(())
        }
    }
}

/// Create the store, resume or start a game, and hook up saving
fn prepare_store(
    lexicon: Arc<Lexicon>,
    state: Option<StateFile>,
    mode: Option<GameMode>,
) -> GameStore {
    let mut store = GameStore::new(lexicon);

    match mode {
        Some(mode) => store.new_game(mode),
        None => persistence::resume(&mut store, state.as_ref()),
    }

    if let Some(file) = state {
        if let Err(e) = file.save(store.game()) {
            warn!(error = %e, "failed to save game");
        }
        persistence::attach(&mut store, file);
    }

    store
}
