//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.
//! Malformed entries are skipped rather than failing the load; an unreachable
//! file is reported to the caller, who degrades to an empty dictionary.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a flat text file, one word per line
///
/// Entries are lowercased; blank lines and lines with non-alphabetic
/// characters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordgrid::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
                Some(trimmed.to_lowercase())
            } else {
                None
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use wordgrid::dictionary::loader::words_from_slice;
/// use wordgrid::dictionary::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_lowercases() {
        let input = &["CAT", "ants", "Ton"];
        let words = words_from_slice(input);
        assert_eq!(words, vec!["cat", "ants", "ton"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_from_file("no/such/wordlist.txt");
        assert!(result.is_err());
    }

    #[test]
    fn embedded_list_round_trips() {
        use crate::dictionary::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
