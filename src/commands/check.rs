//! Word path-check command
//!
//! Answers whether a single word traces a valid path on a board; the
//! dictionary plays no part, matching the live-submission rule.

use crate::core::Grid;
use crate::search;

/// Result of checking one word against a board
pub struct CheckResult {
    pub word: String,
    pub grid: Grid,
    pub on_board: bool,
}

/// Check whether `word` is traceable on the board spec
///
/// # Errors
///
/// Returns an error if the board spec does not parse.
pub fn check_word(word: &str, board: &str) -> Result<CheckResult, String> {
    let grid = Grid::parse(board).map_err(|e| format!("Invalid board: {e}"))?;
    let on_board = search::word_exists(word, &grid);

    Ok(CheckResult {
        word: word.trim().to_uppercase(),
        grid,
        on_board,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_word_on_board() {
        let result = check_word("cats", "CATS,ONIE,RDXY,PQZW").unwrap();
        assert!(result.on_board);
        assert_eq!(result.word, "CATS");
    }

    #[test]
    fn check_word_not_on_board() {
        let result = check_word("ton", "CATS,ONIE,RDXY,PQZW").unwrap();
        assert!(!result.on_board);
    }

    #[test]
    fn check_invalid_board_is_error() {
        assert!(check_word("cat", "CATS,ON").is_err());
    }
}
