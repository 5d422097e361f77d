//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    board_lines, print_boards, print_check_result, print_keyboard, print_simulation_result,
};
