//! TUI rendering with ratatui
//!
//! One grid per target, the shared keyboard underneath, and modal dialogs
//! drawn on top.

use super::app::{App, Dialog};
use crate::core::{KeyboardStatus, LETTER_ROWS, LetterStatus, WORD_LENGTH};
use crate::game::{Board, BoardRow, GameMode, MessageStyle, RowKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
};

/// Boards per line before wrapping
const MAX_COLUMNS: usize = 4;
/// Five three-column tiles plus borders
const BOARD_WIDTH: u16 = (WORD_LENGTH as u16) * 3 + 2;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Boards
            Constraint::Length(1), // Message
            Constraint::Length(7), // Keyboard
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_boards(f, app, chunks[1]);
    render_message(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_help(f, chunks[4]);

    match app.dialog {
        Some(Dialog::NewGame { selected }) => render_new_game_dialog(f, selected),
        Some(Dialog::Restart) => render_restart_dialog(f),
        None => {}
    }
}

fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Green => Color::Green,
        LetterStatus::Yellow => Color::Yellow,
        LetterStatus::Gray => Color::DarkGray,
        LetterStatus::Empty => Color::Reset,
    }
}

fn tile_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Empty => Style::default().fg(Color::White),
        known => Style::default()
            .fg(Color::Black)
            .bg(status_color(known))
            .add_modifier(Modifier::BOLD),
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let game = app.store.game();
    let mode = GameMode::of_record(game).map_or("Custom", GameMode::name);
    let title = format!(
        "🎯 {} | {} of {} guesses left",
        mode.to_uppercase(),
        game.remaining_guesses(),
        game.guess_count()
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn row_line(row: &BoardRow) -> Line<'static> {
    let spans: Vec<Span> = (0..WORD_LENGTH)
        .map(|i| {
            let letter = row.letters.get(i).map_or('·', char::to_ascii_uppercase);
            let text = format!(" {letter} ");
            let style = match row.kind {
                RowKind::Submitted => tile_style(row.statuses[i]),
                RowKind::Current { invalid: true } => Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
                RowKind::Current { invalid: false } => Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                RowKind::Empty => Style::default().fg(Color::DarkGray),
            };
            Span::styled(text, style)
        })
        .collect();
    Line::from(spans)
}

fn board_paragraph(index: usize, board: &Board, ended: bool) -> Paragraph<'static> {
    let mut lines: Vec<Line> = board.rows.iter().map(row_line).collect();

    if ended {
        let color = if board.found { Color::Green } else { Color::Red };
        lines.push(Line::from(Span::styled(
            board.target.text().to_uppercase(),
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let border = if board.found {
        Color::Green
    } else {
        Color::Gray
    };

    Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {} ", index + 1))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(border)),
    )
}

fn render_boards(f: &mut Frame, app: &App, area: Rect) {
    let boards = app.store.boards();
    if boards.is_empty() {
        return;
    }

    let ended = app.store.phase().is_ended();
    let columns = boards.len().min(MAX_COLUMNS);
    let board_height = app.store.game().guess_count() as u16 + 2 + u16::from(ended);
    let line_count = boards.len().div_ceil(columns);

    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(board_height); line_count])
        .split(area);

    for (line_index, (line, chunk)) in lines.iter().zip(boards.chunks(columns)).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .flex(Flex::Center)
            .spacing(2)
            .constraints(vec![Constraint::Length(BOARD_WIDTH); chunk.len()])
            .split(*line);

        for (offset, (cell, board)) in cells.iter().zip(chunk).enumerate() {
            let index = line_index * columns + offset;
            f.render_widget(board_paragraph(index, board, ended), *cell);
        }
    }
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let Some(message) = app.store.message() else {
        return;
    };

    let style = match message.style {
        MessageStyle::Info => Style::default().fg(Color::White),
        MessageStyle::Success => Style::default().fg(Color::Green),
        MessageStyle::Error => Style::default().fg(Color::Red),
    };

    let paragraph = Paragraph::new(message.text.clone())
        .style(style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Key caps for one keyboard row, with Enter and Backspace around the last
fn key_row(row_index: usize, letters: &str) -> Vec<Option<char>> {
    let mut keys: Vec<Option<char>> = letters.chars().map(Some).collect();
    if row_index == LETTER_ROWS.len() - 1 {
        keys.insert(0, None);
        keys.push(None);
    }
    keys
}

fn keyboard_lines(keyboard: &KeyboardStatus) -> Vec<Line<'static>> {
    let segments = keyboard.target_count() > 1;
    let cell_width = keyboard.target_count().max(3);
    let mut lines = Vec::new();

    for (row_index, letters) in LETTER_ROWS.iter().enumerate() {
        let keys = key_row(row_index, letters);
        let mut caps = Vec::new();
        let mut marks = Vec::new();

        for (position, key) in keys.iter().enumerate() {
            match key {
                Some(letter) => {
                    let text = format!("{:^cell_width$}", letter.to_ascii_uppercase());
                    caps.push(Span::styled(text, tile_style(keyboard.overall(*letter))));

                    for status in keyboard.statuses(*letter) {
                        marks.push(Span::styled("▀", Style::default().fg(status_color(status))));
                    }
                    let padding = cell_width - keyboard.target_count();
                    marks.push(Span::raw(" ".repeat(padding)));
                }
                None => {
                    let label = if position == 0 { " ENTER " } else { " ⌫ " };
                    caps.push(Span::styled(
                        label,
                        Style::default().fg(Color::Black).bg(Color::Gray),
                    ));
                    marks.push(Span::raw(" ".repeat(label.chars().count())));
                }
            }
            caps.push(Span::raw(" "));
            marks.push(Span::raw(" "));
        }

        lines.push(Line::from(caps));
        if segments {
            lines.push(Line::from(marks));
        }
    }

    lines
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines = app.keyboard().map(keyboard_lines).unwrap_or_default();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(keyboard, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Type: Guess | Enter: Submit | Ctrl-N: New Game | Ctrl-R: Restart | Esc: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

/// Centered rectangle of at most `width` x `height`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(vertical);
    centered
}

fn render_new_game_dialog(f: &mut Frame, selected: usize) {
    let items: Vec<ListItem> = GameMode::ALL
        .iter()
        .enumerate()
        .map(|(i, mode)| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!("{}. {}", i + 1, mode.name()),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("   {}", mode.description())),
            ])
        })
        .collect();

    let height = (GameMode::ALL.len() * 2 + 2) as u16;
    let area = centered_rect(56, height, f.area());

    let list = List::new(items)
        .block(
            Block::default()
                .title(" New Game | ↑↓ Enter, Esc to cancel ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default().with_selected(Some(selected));
    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
}

fn render_restart_dialog(f: &mut Frame) {
    let area = centered_rect(40, 5, f.area());
    let body = Paragraph::new(vec![
        Line::from("Restart with the same words?"),
        Line::from(Span::styled(
            "y: Restart | n: Cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Restart ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(Clear, area);
    f.render_widget(body, area);
}
