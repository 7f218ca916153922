//! Formatting helpers for boards and word lists

use crate::core::Grid;

/// Render the board as framed uppercase tiles
///
/// # Examples
/// ```
/// use wordgrid::core::Grid;
/// use wordgrid::output::formatters::format_grid;
///
/// let grid = Grid::from_rows(&["ca", "ts"]).unwrap();
/// assert_eq!(format_grid(&grid), "  C A\n  T S");
/// ```
#[must_use]
pub fn format_grid(grid: &Grid) -> String {
    (0..grid.rows())
        .map(|row| {
            let letters: Vec<String> = grid
                .row_letters(row)
                .iter()
                .map(|&c| (c.to_ascii_uppercase() as char).to_string())
                .collect();
            format!("  {}", letters.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lay words out in fixed-width columns
#[must_use]
pub fn format_word_columns(words: &[String], per_row: usize) -> String {
    let width = words.iter().map(String::len).max().unwrap_or(0) + 2;

    words
        .chunks(per_row.max(1))
        .map(|chunk| {
            chunk
                .iter()
                .map(|w| format!("{w:<width$}"))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
