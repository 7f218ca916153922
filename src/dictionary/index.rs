//! Prefix trie over the dictionary
//!
//! Built once per process, immutable afterward. Registering every word once
//! costs O(total characters); `is_word` and `is_prefix` then walk at most the
//! query's length. A trie rather than a set of all prefixes keeps memory
//! proportional to shared structure for large word lists, with the same
//! observable behavior.

use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
struct TrieNode {
    children: FxHashMap<u8, TrieNode>,
    terminal: bool,
}

/// Read-only word/prefix index over a dictionary
///
/// Words are normalized to lowercase on construction; queries are normalized
/// the same way. An empty dictionary is valid: both queries are then always
/// false and callers treat it as "no solutions derivable".
#[derive(Debug, Default)]
pub struct DictionaryIndex {
    root: TrieNode,
    len: usize,
}

impl DictionaryIndex {
    /// Build the index from a word list
    ///
    /// Empty entries are skipped; duplicates count once.
    ///
    /// # Examples
    /// ```
    /// use wordgrid::dictionary::DictionaryIndex;
    ///
    /// let dict = DictionaryIndex::new(["cat", "cats"]);
    /// assert!(dict.is_word("cat"));
    /// assert!(dict.is_prefix("ca"));
    /// assert!(!dict.is_word("ca"));
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for word in words {
            index.insert(word.as_ref());
        }
        index
    }

    fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for byte in word.bytes().map(|b| b.to_ascii_lowercase()) {
            node = node.children.entry(byte).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    /// Number of distinct words indexed
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when no words were indexed
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Exact dictionary membership
    #[must_use]
    pub fn is_word(&self, s: &str) -> bool {
        self.walk(s).is_some_and(|node| node.terminal)
    }

    /// Is `s` a prefix (possibly equal) of at least one dictionary word?
    #[must_use]
    pub fn is_prefix(&self, s: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        self.walk(s).is_some()
    }

    fn walk(&self, s: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for byte in s.bytes().map(|b| b.to_ascii_lowercase()) {
            node = node.children.get(&byte)?;
        }
        Some(node)
    }
}
