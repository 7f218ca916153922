//! Board solving command
//!
//! Enumerates every dictionary word on a given or random board.

use crate::core::Grid;
use crate::dictionary::DictionaryIndex;
use crate::search;

/// Configuration for solving a board
pub struct SolveConfig {
    /// Comma-separated rows, e.g. "CATS,ONIE,RDXY,PQZW"; random when absent
    pub board: Option<String>,
    pub rows: usize,
    pub cols: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(board: Option<String>, rows: usize, cols: usize) -> Self {
        Self { board, rows, cols }
    }
}

/// Result of solving a board
pub struct SolveResult {
    pub grid: Grid,
    /// Every dictionary word on the board, uppercase, sorted
    pub words: Vec<String>,
}

/// Solve a board against the given dictionary
///
/// # Errors
///
/// Returns an error if an explicit board spec does not parse. An empty
/// dictionary is not an error; the result simply has no words.
pub fn solve_board(
    config: &SolveConfig,
    dictionary: &DictionaryIndex,
) -> Result<SolveResult, String> {
    let grid = match &config.board {
        Some(spec) => Grid::parse(spec).map_err(|e| format!("Invalid board: {e}"))?,
        None => Grid::random(config.rows, config.cols, &mut rand::rng()),
    };

    let words = search::solve(&grid, dictionary).into_iter().collect();

    Ok(SolveResult { grid, words })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_explicit_board() {
        let config = SolveConfig::new(Some("CATS,ONIE,RDXY,PQZW".to_string()), 4, 4);
        let dictionary = DictionaryIndex::new(["cat", "cats", "ant", "ants", "ton"]);

        let result = solve_board(&config, &dictionary).unwrap();

        assert_eq!(result.grid.rows(), 4);
        assert_eq!(result.words, vec!["ANT", "ANTS", "CAT", "CATS"]);
    }

    #[test]
    fn solve_random_board_uses_dimensions() {
        let config = SolveConfig::new(None, 3, 5);
        let dictionary = DictionaryIndex::new(["cat"]);

        let result = solve_board(&config, &dictionary).unwrap();

        assert_eq!(result.grid.rows(), 3);
        assert_eq!(result.grid.cols(), 5);
    }

    #[test]
    fn solve_invalid_board_is_error() {
        let config = SolveConfig::new(Some("CATS,ON".to_string()), 4, 4);
        let dictionary = DictionaryIndex::new(["cat"]);

        assert!(solve_board(&config, &dictionary).is_err());
    }

    #[test]
    fn solve_with_empty_dictionary_yields_no_words() {
        let config = SolveConfig::new(Some("CATS,ONIE".to_string()), 4, 4);
        let dictionary = DictionaryIndex::new(Vec::<String>::new());

        let result = solve_board(&config, &dictionary).unwrap();
        assert!(result.words.is_empty());
    }
}
