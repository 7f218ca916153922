//! Dictionary index and word lists
//!
//! [`DictionaryIndex`] preprocesses a flat word list into a prefix trie
//! supporting exact-membership and prefix queries, the two operations the
//! board search needs for pruning. Word lists come from the embedded list
//! compiled in at build time or from a user-supplied file.

mod embedded;
mod index;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use index::DictionaryIndex;
