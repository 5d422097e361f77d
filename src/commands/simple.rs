//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Each line is submitted as a whole guess.

use crate::game::{GameMode, GamePhase, GameStore, GuessOutcome, MessageStyle};
use crate::output::{print_boards, print_keyboard};
use colored::Colorize;
use std::io::{self, Write};

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Guess(String),
    NewGame(Option<GameMode>),
    Restart,
    Quit,
    Help,
    Invalid(String),
}

fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let Some(rest) = input.strip_prefix(':') else {
        return Command::Guess(input.to_string());
    };

    let mut parts = rest.split_whitespace();
    match parts.next().unwrap_or_default() {
        "q" | "quit" | "exit" => Command::Quit,
        "r" | "restart" => Command::Restart,
        "h" | "help" => Command::Help,
        "n" | "new" => match parts.next() {
            None => Command::NewGame(None),
            Some(name) => name.parse().map_or_else(
                |e: crate::game::UnknownMode| Command::Invalid(e.to_string()),
                |mode| Command::NewGame(Some(mode)),
            ),
        },
        other => Command::Invalid(format!("unknown command ':{other}'")),
    }
}

fn print_help() {
    println!("Type a word and press Enter to guess.");
    println!("Commands: ':new [wordle|quordle|octordle]', ':restart', ':help', ':quit'\n");
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(store: &mut GameStore) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    loop {
        let phase = store.phase();
        print_boards(&store.boards(), phase.is_ended());
        print_keyboard(&store.keyboard_status());

        if phase.is_ended() {
            print_game_over(store, phase);
            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    let mode = GameMode::of_record(store.game()).unwrap_or_default();
                    store.new_game(mode);
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let prompt = format!(
            "Guess {}/{}",
            store.game().guesses().len() + 1,
            store.game().guess_count()
        );
        let Some(line) = read_line(&prompt)? else {
            return Ok(());
        };

        match parse_command(&line) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Help => print_help(),
            Command::Restart => {
                store.restart();
                println!("\n🔄 Restarted!\n");
            }
            Command::NewGame(mode) => {
                let mode = mode
                    .or_else(|| GameMode::of_record(store.game()))
                    .unwrap_or_default();
                store.new_game(mode);
                println!("\n🔄 New {} game: {}\n", mode.name(), mode.description());
            }
            Command::Invalid(reason) => println!("❌ {reason}\n"),
            Command::Guess(word) if word.is_empty() => {}
            Command::Guess(word) => {
                store.set_current_guess(word.chars().collect());
                if let GuessOutcome::Rejected(_) = store.make_guess() {
                    if let Some(message) = store.message() {
                        let text = match message.style {
                            MessageStyle::Error => message.text.red(),
                            MessageStyle::Success => message.text.green(),
                            MessageStyle::Info => message.text.normal(),
                        };
                        println!("❌ {text}\n");
                    }
                    store.set_current_guess(Vec::new());
                }
            }
        }
    }
}

fn print_game_over(store: &GameStore, phase: GamePhase) {
    let used = store.game().guesses().len();

    if phase == GamePhase::Won {
        println!("{}", "═".repeat(70).bright_cyan());
        println!(
            "{}",
            "    🎉 🎊 ✨  S O L V E D !  ✨ 🎊 🎉    "
                .bright_green()
                .bold()
        );
        println!("{}", "═".repeat(70).bright_cyan());
        println!(
            "\n  Found in {} {}\n",
            used.to_string().bright_cyan().bold(),
            if used == 1 { "guess" } else { "guesses" }
        );
    } else {
        println!("{}", "Out of guesses!".red().bold());
        let words: Vec<String> = store
            .game()
            .targets()
            .iter()
            .map(|target| target.text().to_uppercase())
            .collect();
        println!("  The answer was: {}\n", words.join(", ").bright_yellow());
    }
}

/// Read a line; `None` at end of input
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    Ok(read_line(prompt)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_are_guesses() {
        assert_eq!(parse_command(" crane "), Command::Guess("crane".into()));
        assert_eq!(parse_command(""), Command::Guess(String::new()));
    }

    #[test]
    fn colon_commands() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":restart"), Command::Restart);
        assert_eq!(parse_command(":new"), Command::NewGame(None));
        assert_eq!(
            parse_command(":new Quordle"),
            Command::NewGame(Some(GameMode::Quordle))
        );
    }

    #[test]
    fn bad_commands_are_reported() {
        assert!(matches!(parse_command(":new chess"), Command::Invalid(_)));
        assert!(matches!(parse_command(":dance"), Command::Invalid(_)));
        assert!(matches!(parse_command(":"), Command::Invalid(_)));
    }
}
