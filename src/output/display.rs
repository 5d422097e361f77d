//! Display functions for command results

use super::formatters::{create_progress_bar, percent, tile, tile_text};
use crate::commands::{CheckResult, SimulationResult};
use crate::core::{KeyboardStatus, LETTER_ROWS, WORD_LENGTH, to_emoji};
use crate::game::{Board, RowKind};
use colored::Colorize;

/// Boards printed side by side
const BOARDS_PER_LINE: usize = 4;
const BOARD_WIDTH: usize = WORD_LENGTH * 3;

/// One string per row of `board`
#[must_use]
pub fn board_lines(board: &Board) -> Vec<String> {
    board
        .rows
        .iter()
        .map(|row| {
            (0..WORD_LENGTH)
                .map(|i| {
                    let letter = row.letters.get(i).copied();
                    match row.kind {
                        RowKind::Submitted => tile(letter, row.statuses[i]).to_string(),
                        RowKind::Current { invalid: true } => {
                            tile_text(letter).red().bold().to_string()
                        }
                        RowKind::Current { invalid: false } => {
                            tile_text(letter).bright_white().bold().to_string()
                        }
                        RowKind::Empty => tile_text(None).bright_black().to_string(),
                    }
                })
                .collect::<String>()
        })
        .collect()
}

/// Print every board, with solutions underneath once the game is over
pub fn print_boards(boards: &[Board], ended: bool) {
    for chunk in boards.chunks(BOARDS_PER_LINE) {
        let lines: Vec<Vec<String>> = chunk.iter().map(board_lines).collect();
        let height = lines.iter().map(Vec::len).max().unwrap_or(0);

        println!();
        for row in 0..height {
            let joined: Vec<&str> = lines
                .iter()
                .map(|board| board.get(row).map_or("", String::as_str))
                .collect();
            println!("  {}", joined.join("   "));
        }

        if ended {
            let badges: Vec<String> = chunk
                .iter()
                .map(|board| {
                    let text = format!("{:^BOARD_WIDTH$}", board.target.text().to_uppercase());
                    if board.found {
                        text.green().bold().to_string()
                    } else {
                        text.red().bold().to_string()
                    }
                })
                .collect();
            println!("  {}", badges.join("   "));
        }
    }
    println!();
}

/// Print the letter keyboard colored by what is known so far
pub fn print_keyboard(keyboard: &KeyboardStatus) {
    for (indent, row) in LETTER_ROWS.iter().enumerate() {
        let keys: String = row
            .chars()
            .map(|c| tile(Some(c), keyboard.overall(c)).to_string())
            .collect();
        println!("  {}{keys}", " ".repeat(indent * 2));
    }
    println!();
}

/// Print the feedback for a single checked guess
pub fn print_check_result(result: &CheckResult) {
    let tiles: String = result
        .guess
        .chars()
        .iter()
        .zip(result.feedback)
        .map(|(&c, status)| tile(Some(c), status).to_string())
        .collect();

    println!(
        "\n{} → {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("  {tiles}  {}", to_emoji(&result.feedback));

    if result.solved() {
        println!("  {}", "Solved!".green().bold());
    }
    if !result.guess_in_word_list {
        println!("  {}", "Guess is not in the word list.".yellow());
    }
    if !result.target_is_solution {
        println!("  {}", "Target is not a possible solution.".yellow());
    }
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SIMULATION RESULTS:".bright_cyan().bold(),
        result.mode.name().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Won:              {} {}",
        result.wins,
        format!("({})", percent(result.wins, result.games)).green()
    );
    if result.losses() > 0 {
        println!(
            "   Lost:             {} {}",
            result.losses(),
            format!("({})", percent(result.losses(), result.games)).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses())
            .bright_yellow()
            .bold()
    );
    println!("   Seed:             {}", result.seed);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.distribution.is_empty() {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for (&guesses, &count) in &result.distribution {
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "   {guesses:2}: {} {count:5} ({})",
            bar.green(),
            percent(count, result.wins)
        );
    }
}

