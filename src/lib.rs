//! Wordgrid
//!
//! A timed word-finding game on a randomly generated letter grid, built around a
//! reusable grid word-search engine: DFS path matching for user submissions and a
//! trie-pruned enumeration of every dictionary word on the board.
//!
//! # Quick Start
//!
//! ```rust
//! use wordgrid::core::Grid;
//! use wordgrid::dictionary::DictionaryIndex;
//! use wordgrid::search;
//!
//! let grid = Grid::from_rows(&["cats", "onie", "rdxy", "pqzw"]).unwrap();
//! let dict = DictionaryIndex::new(["cat", "cats", "ant", "ants", "ton"]);
//!
//! // Every dictionary word traceable on the board (uppercase, sorted)
//! let words = search::solve(&grid, &dict);
//! assert!(words.contains("CAT"));
//!
//! // Board-only path check, no dictionary involved
//! assert!(search::word_exists("CATS", &grid));
//! ```

// Core domain types
pub mod core;

// Grid search engine (path matching + solution enumeration)
pub mod search;

// Dictionary index and word lists
pub mod dictionary;

// Round state machine
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
