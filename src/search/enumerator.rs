//! Full-board solution enumeration
//!
//! Depth-first search from every cell, pruned by the dictionary's prefix
//! index. Start cells run in parallel; each owns its own visited mask and
//! result set, merged at the end. This is the round-start precomputation that
//! the end-of-round missed-word report diffs against.

use super::visited::VisitedMask;
use crate::core::Grid;
use crate::dictionary::DictionaryIndex;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Shortest word worth reporting; shorter traceable strings are ignored even
/// when they are dictionary words.
pub const MIN_WORD_LEN: usize = 3;

/// Enumerate every dictionary word traceable on the grid
///
/// Returns the uppercase words as a sorted set; a word reachable via several
/// paths appears once. An empty grid or empty dictionary yields an empty set,
/// not an error. Calling twice on the same inputs yields the same set.
///
/// Prefix pruning is what keeps this tractable: a branch is abandoned the
/// moment its accumulated string cannot extend into any dictionary word.
///
/// # Examples
/// ```
/// use wordgrid::core::Grid;
/// use wordgrid::dictionary::DictionaryIndex;
/// use wordgrid::search::solve;
///
/// let grid = Grid::from_rows(&["cats", "onie", "rdxy", "pqzw"]).unwrap();
/// let dict = DictionaryIndex::new(["cat", "cats", "ant", "ants", "ton"]);
/// let words = solve(&grid, &dict);
/// assert!(words.contains("CATS"));
/// assert!(!words.contains("TON"));
/// ```
#[must_use]
pub fn solve(grid: &Grid, dict: &DictionaryIndex) -> BTreeSet<String> {
    if grid.is_empty() || dict.is_empty() {
        return BTreeSet::new();
    }

    let starts: Vec<(usize, usize)> = grid.coords().collect();

    starts
        .par_iter()
        .map(|&(row, col)| {
            let mut visited = VisitedMask::new(grid.rows(), grid.cols());
            let mut curr = String::new();
            let mut found = BTreeSet::new();
            dfs(grid, dict, row, col, &mut curr, &mut visited, &mut found);
            debug_assert!(visited.is_clear());
            found
        })
        .reduce(BTreeSet::new, |mut acc, set| {
            acc.extend(set);
            acc
        })
}

/// Extend the accumulated string with (row, col) and recurse while it is
/// still a dictionary prefix
fn dfs(
    grid: &Grid,
    dict: &DictionaryIndex,
    row: usize,
    col: usize,
    curr: &mut String,
    visited: &mut VisitedMask,
    found: &mut BTreeSet<String>,
) {
    let Some(letter) = grid.get(row, col) else {
        return;
    };

    curr.push(letter as char);

    if dict.is_prefix(curr) {
        if curr.len() >= MIN_WORD_LEN && dict.is_word(curr) {
            found.insert(curr.to_uppercase());
        }

        visited.mark(row, col);
        for (nr, nc) in grid.neighbors(row, col) {
            if !visited.is_visited(nr, nc) {
                dfs(grid, dict, nr, nc, curr, visited, found);
            }
        }
        visited.unmark(row, col);
    }

    curr.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::word_exists;

    fn spec_grid() -> Grid {
        Grid::from_rows(&["cats", "onie", "rdxy", "pqzw"]).unwrap()
    }

    fn spec_dict() -> DictionaryIndex {
        DictionaryIndex::new(["cat", "cats", "ant", "ants", "ton"])
    }

    #[test]
    fn finds_exactly_the_traceable_words() {
        let words = solve(&spec_grid(), &spec_dict());

        assert!(words.contains("CAT"));
        assert!(words.contains("CATS"));
        assert!(words.contains("ANT"));
        assert!(words.contains("ANTS"));
        // In the dictionary but T and O are not adjacent
        assert!(!words.contains("TON"));
        // Not in the dictionary at all
        assert!(!words.contains("DOG"));
        assert_eq!(words.len(), 4);
    }

    #[test]
    fn results_are_traceable_dictionary_words() {
        let grid = spec_grid();
        let dict = spec_dict();
        for word in solve(&grid, &dict) {
            assert!(word.len() >= MIN_WORD_LEN);
            assert!(dict.is_word(&word.to_lowercase()));
            assert!(word_exists(&word, &grid));
        }
    }

    #[test]
    fn words_below_minimum_length_excluded() {
        let grid = Grid::from_rows(&["at", "on"]).unwrap();
        let dict = DictionaryIndex::new(["at", "on", "no", "to", "not"]);
        let words = solve(&grid, &dict);

        assert!(!words.contains("AT"));
        assert!(!words.contains("NO"));
        // n(1,1) -> o(1,0) -> t(0,1), the last step diagonal
        assert!(words.contains("NOT"));
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn empty_dictionary_yields_empty_set() {
        let dict = DictionaryIndex::new(Vec::<String>::new());
        assert!(solve(&spec_grid(), &dict).is_empty());
    }

    #[test]
    fn empty_grid_yields_empty_set() {
        let grid = Grid::random(0, 0, &mut rand::rng());
        assert!(solve(&grid, &spec_dict()).is_empty());
    }

    #[test]
    fn solve_is_idempotent() {
        let grid = spec_grid();
        let dict = spec_dict();
        let first = solve(&grid, &dict);
        let second = solve(&grid, &dict);
        assert_eq!(first, second);
    }

    #[test]
    fn multiple_paths_yield_one_entry() {
        // "aba" is traceable many ways; set semantics keep one copy
        let grid = Grid::from_rows(&["ab", "ba"]).unwrap();
        let dict = DictionaryIndex::new(["aba", "bab"]);
        let words = solve(&grid, &dict);
        assert_eq!(
            words.into_iter().collect::<Vec<_>>(),
            vec!["ABA".to_string(), "BAB".to_string()]
        );
    }

    #[test]
    fn output_is_sorted() {
        let words = solve(&spec_grid(), &spec_dict());
        let listed: Vec<_> = words.iter().cloned().collect();
        let mut sorted = listed.clone();
        sorted.sort();
        assert_eq!(listed, sorted);
    }
}
