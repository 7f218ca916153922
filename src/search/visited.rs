//! Per-search visited mask
//!
//! A boolean grid matching the board's shape, scoped to a single search
//! invocation. Every cell a search marks must be unmarked before the frame
//! that marked it returns, so sibling branches and later searches see a clean
//! mask. The mask is never shared across concurrent searches; parallel start
//! cells each build their own.

/// Boolean grid tracking cells used by the current path
#[derive(Debug, Clone)]
pub(crate) struct VisitedMask {
    cols: usize,
    cells: Vec<bool>,
}

impl VisitedMask {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            cells: vec![false; rows * cols],
        }
    }

    #[inline]
    pub(crate) fn is_visited(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    #[inline]
    pub(crate) fn mark(&mut self, row: usize, col: usize) {
        self.cells[row * self.cols + col] = true;
    }

    #[inline]
    pub(crate) fn unmark(&mut self, row: usize, col: usize) {
        self.cells[row * self.cols + col] = false;
    }

    /// True when no cell is marked; holds between searches
    pub(crate) fn is_clear(&self) -> bool {
        self.cells.iter().all(|&v| !v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_mask_is_clear() {
        let mask = VisitedMask::new(3, 4);
        assert!(mask.is_clear());
        assert!(!mask.is_visited(2, 3));
    }

    #[test]
    fn mark_and_unmark_round_trip() {
        let mut mask = VisitedMask::new(2, 2);
        mask.mark(1, 0);
        assert!(mask.is_visited(1, 0));
        assert!(!mask.is_visited(0, 1));
        assert!(!mask.is_clear());

        mask.unmark(1, 0);
        assert!(mask.is_clear());
    }
}
