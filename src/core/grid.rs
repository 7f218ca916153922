//! Letter grid representation
//!
//! A Grid stores an R×C arrangement of single letters along with 8-direction
//! neighbor adjacency. Cells are held lowercase; the grid is immutable for the
//! duration of a round.

use rand::Rng;
use std::fmt;

/// The eight unit offsets around a cell: four orthogonal, four diagonal.
///
/// Out-of-bounds candidates are filtered by [`Grid::neighbors`]; interior cells
/// have all eight, edge and corner cells fewer.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// An R×C grid of lowercase letters
///
/// Immutable once constructed. Coordinates are (row, col) with
/// `0 <= row < rows()` and `0 <= col < cols()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

/// Error type for invalid grid construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    Empty,
    RaggedRows { expected: usize, got: usize },
    InvalidCharacter(char),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Grid must have at least one cell"),
            Self::RaggedRows { expected, got } => {
                write!(f, "All rows must have the same length: expected {expected}, got {got}")
            }
            Self::InvalidCharacter(c) => {
                write!(f, "Grid cells must be ASCII letters, got '{c}'")
            }
        }
    }
}

impl std::error::Error for GridError {}

impl Grid {
    /// Generate a grid with cells drawn independently and uniformly from a-z
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let cells = (0..rows * cols)
            .map(|_| rng.random_range(b'a'..=b'z'))
            .collect();

        Self { rows, cols, cells }
    }

    /// Build a grid from explicit rows of letters
    ///
    /// Input is case-insensitive; cells are stored lowercase.
    ///
    /// # Errors
    /// Returns `GridError` if:
    /// - No rows, or the first row is empty
    /// - Rows have differing lengths
    /// - Any cell is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use wordgrid::core::Grid;
    ///
    /// let grid = Grid::from_rows(&["CATS", "ONIE", "RDXY", "PQZW"]).unwrap();
    /// assert_eq!(grid.rows(), 4);
    /// assert_eq!(grid.get(0, 0), Some(b'c'));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };

        let cols = first.chars().count();
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let got = row.chars().count();
            if got != cols {
                return Err(GridError::RaggedRows {
                    expected: cols,
                    got,
                });
            }
            for c in row.chars() {
                if !c.is_ascii_alphabetic() {
                    return Err(GridError::InvalidCharacter(c));
                }
                cells.push(c.to_ascii_lowercase() as u8);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Parse a board spec of comma-separated rows, e.g. `"CATS,ONIE,RDXY,PQZW"`
    ///
    /// # Errors
    /// Returns `GridError` under the same conditions as [`Grid::from_rows`].
    pub fn parse(spec: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = spec.split(',').map(str::trim).collect();
        Self::from_rows(&rows)
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// True when the grid has no cells
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounds-checked cell lookup; returns the lowercase letter
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// In-bounds 8-direction neighbors of a cell
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let nr = row as i32 + dr;
            let nc = col as i32 + dc;
            if nr >= 0 && nc >= 0 && (nr as usize) < self.rows && (nc as usize) < self.cols {
                Some((nr as usize, nc as usize))
            } else {
                None
            }
        })
    }

    /// Iterate over every cell coordinate in row-major order
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| (r, c)))
    }

    /// The letters of one row, lowercase
    #[must_use]
    pub fn row_letters(&self, row: usize) -> &[u8] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, &cell) in self.row_letters(row).iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.to_ascii_uppercase() as char)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_valid() {
        let grid = Grid::from_rows(&["cats", "onie", "rdxy", "pqzw"]).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 4);
        assert!(!grid.is_empty());
        assert_eq!(grid.get(0, 0), Some(b'c'));
        assert_eq!(grid.get(3, 3), Some(b'w'));
    }

    #[test]
    fn from_rows_normalizes_case() {
        let upper = Grid::from_rows(&["CATS", "ONIE"]).unwrap();
        let lower = Grid::from_rows(&["cats", "onie"]).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn from_rows_empty_is_error() {
        assert_eq!(Grid::from_rows(&[]), Err(GridError::Empty));
        assert_eq!(Grid::from_rows(&[""]), Err(GridError::Empty));
    }

    #[test]
    fn from_rows_ragged_is_error() {
        assert_eq!(
            Grid::from_rows(&["cats", "on"]),
            Err(GridError::RaggedRows {
                expected: 4,
                got: 2
            })
        );
    }

    #[test]
    fn from_rows_rejects_non_letters() {
        assert_eq!(
            Grid::from_rows(&["ca1s"]),
            Err(GridError::InvalidCharacter('1'))
        );
        assert_eq!(
            Grid::from_rows(&["ca s"]),
            Err(GridError::InvalidCharacter(' '))
        );
    }

    #[test]
    fn parse_board_spec() {
        let grid = Grid::parse("CATS, ONIE, RDXY, PQZW").unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.get(1, 0), Some(b'o'));
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let grid = Grid::from_rows(&["ab", "cd"]).unwrap();
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.get(usize::MAX, 0), None);
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let grid = Grid::from_rows(&["abc", "def", "ghi"]).unwrap();
        let neighbors: Vec<_> = grid.neighbors(1, 1).collect();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(1, 1)));
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        let grid = Grid::from_rows(&["abc", "def", "ghi"]).unwrap();
        let mut neighbors: Vec<_> = grid.neighbors(0, 0).collect();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        let grid = Grid::from_rows(&["abc", "def", "ghi"]).unwrap();
        let neighbors: Vec<_> = grid.neighbors(0, 1).collect();
        assert_eq!(neighbors.len(), 5);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let grid = Grid::from_rows(&["a"]).unwrap();
        assert_eq!(grid.neighbors(0, 0).count(), 0);
    }

    #[test]
    fn random_grid_cells_in_range() {
        let mut rng = rand::rng();
        let grid = Grid::random(4, 4, &mut rng);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 4);
        for (r, c) in grid.coords() {
            let letter = grid.get(r, c).unwrap();
            assert!(letter.is_ascii_lowercase());
        }
    }

    #[test]
    fn coords_covers_every_cell_once() {
        let grid = Grid::from_rows(&["ab", "cd", "ef"]).unwrap();
        let coords: Vec<_> = grid.coords().collect();
        assert_eq!(coords.len(), 6);
        assert_eq!(coords[0], (0, 0));
        assert_eq!(coords[5], (2, 1));
    }

    #[test]
    fn display_renders_uppercase_rows() {
        let grid = Grid::from_rows(&["ca", "ts"]).unwrap();
        assert_eq!(format!("{grid}"), "C A\nT S");
    }
}
