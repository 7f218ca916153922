//! Grid word-search engine
//!
//! Two operations over a [`crate::core::Grid`]: board-only path matching for a
//! single word, and trie-pruned enumeration of every dictionary word on the
//! board. Both are synchronous, CPU-bound backtracking searches.

mod enumerator;
mod matcher;
mod visited;

pub use enumerator::{MIN_WORD_LEN, solve};
pub use matcher::word_exists;
