//! Pretty-printing for command results

use super::formatters::{format_grid, format_word_columns};
use crate::commands::{CheckResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a board
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "Board".bright_cyan().bold());
    println!("{}\n", format_grid(&result.grid));

    if result.words.is_empty() {
        println!("{}", "No dictionary words on this board.".bright_black());
        return;
    }

    println!(
        "{} {}",
        result.words.len().to_string().bright_yellow().bold(),
        if result.words.len() == 1 {
            "word found:"
        } else {
            "words found:"
        }
    );
    println!("{}", format_word_columns(&result.words, 6));
}

/// Print the result of a single-word path check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "Board".bright_cyan().bold());
    println!("{}\n", format_grid(&result.grid));

    if result.on_board {
        println!("{} {}", "✔".bright_green(), format!("{} is on this board", result.word).bold());
    } else {
        println!("{} {}", "❌".bright_red(), format!("{} is NOT on this board", result.word).bold());
    }
}
