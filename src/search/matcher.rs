//! Board-only path matching
//!
//! Decides whether a literal word traces a connected path of distinct,
//! 8-adjacent cells on the grid. No dictionary is consulted; this is the
//! check live submissions go through.

use super::visited::VisitedMask;
use crate::core::Grid;

/// Check whether `word` traces a valid path on `grid`
///
/// Case-insensitive. Returns false for an empty grid. A path uses each cell at
/// most once; the same letter may be revisited through a *different* cell.
/// Worst case O(R·C·8^L) for word length L, fine for short user-typed words on
/// a small board.
///
/// # Examples
/// ```
/// use wordgrid::core::Grid;
/// use wordgrid::search::word_exists;
///
/// let grid = Grid::from_rows(&["ca", "ts"]).unwrap();
/// assert!(word_exists("cat", &grid));
/// assert!(word_exists("CAST", &grid));
/// assert!(!word_exists("cc", &grid));
/// ```
#[must_use]
pub fn word_exists(word: &str, grid: &Grid) -> bool {
    if grid.is_empty() {
        return false;
    }

    let word = word.to_lowercase();
    let target = word.as_bytes();
    let mut visited = VisitedMask::new(grid.rows(), grid.cols());

    grid.coords()
        .any(|(row, col)| dfs(grid, target, row, col, 0, &mut visited))
}

/// Try to match `target[index..]` with a path starting at (row, col)
///
/// The cell is unmarked on every exit path so other start cells get a clean
/// mask.
fn dfs(
    grid: &Grid,
    target: &[u8],
    row: usize,
    col: usize,
    index: usize,
    visited: &mut VisitedMask,
) -> bool {
    if index == target.len() {
        return true;
    }
    if visited.is_visited(row, col) {
        return false;
    }
    if grid.get(row, col) != Some(target[index]) {
        return false;
    }

    visited.mark(row, col);
    let found = grid
        .neighbors(row, col)
        .any(|(nr, nc)| dfs(grid, target, nr, nc, index + 1, visited));
    visited.unmark(row, col);

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_grid() -> Grid {
        Grid::from_rows(&["cats", "onie", "rdxy", "pqzw"]).unwrap()
    }

    #[test]
    fn finds_straight_path() {
        let grid = spec_grid();
        assert!(word_exists("cats", &grid));
    }

    #[test]
    fn finds_diagonal_path() {
        let grid = spec_grid();
        // a(0,1) -> n(1,1) -> t(0,2) uses a diagonal step back up
        assert!(word_exists("ant", &grid));
        assert!(word_exists("ants", &grid));
    }

    #[test]
    fn case_does_not_affect_result() {
        let grid = spec_grid();
        assert!(word_exists("CATS", &grid));
        assert!(word_exists("CaTs", &grid));
    }

    #[test]
    fn rejects_disconnected_letters() {
        let grid = spec_grid();
        // t(0,2) and o(1,0) are not adjacent
        assert!(!word_exists("ton", &grid));
    }

    #[test]
    fn rejects_letters_not_on_board() {
        let grid = spec_grid();
        assert!(!word_exists("dog", &grid));
        assert!(!word_exists("jazz", &grid));
    }

    #[test]
    fn cell_not_reused_within_one_path() {
        // Single 'a': "aa" would need the same cell twice
        let grid = Grid::from_rows(&["ab", "cd"]).unwrap();
        assert!(!word_exists("aa", &grid));

        // Two distinct 'a' cells make "aa" traceable
        let grid = Grid::from_rows(&["aa", "cd"]).unwrap();
        assert!(word_exists("aa", &grid));
    }

    #[test]
    fn backtracking_releases_cells_for_other_branches() {
        // "aba" needs the search to back out of the wrong 'b' and retry
        let grid = Grid::from_rows(&["ab", "ba"]).unwrap();
        assert!(word_exists("aba", &grid));
        assert!(word_exists("abab", &grid));
        // Five letters would reuse a cell
        assert!(!word_exists("ababa", &grid));
    }

    #[test]
    fn empty_grid_matches_nothing() {
        let grid = Grid::random(0, 0, &mut rand::rng());
        assert!(grid.is_empty());
        assert!(!word_exists("cat", &grid));
    }

    #[test]
    fn single_cell_word() {
        let grid = Grid::from_rows(&["a"]).unwrap();
        assert!(word_exists("a", &grid));
        assert!(!word_exists("z", &grid));
    }

    #[test]
    fn consecutive_searches_are_independent() {
        let grid = spec_grid();
        // A failing search must not leave marks that break a later one
        assert!(!word_exists("catsz", &grid));
        assert!(word_exists("cats", &grid));
        assert!(word_exists("cats", &grid));
    }
}
