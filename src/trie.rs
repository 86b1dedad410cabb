//! Provides the trie dictionary: a set of words stored as a prefix
//! tree, one node per character along each stored word.
//!
//! Words are plain `&str` arguments and are walked one [`char`] at a
//! time. There is no grapheme segmentation and no radix compression;
//! each code point gets its own node. Child links are held in a
//! [`BTreeMap`] so enumeration is deterministic (lexicographic by
//! code point).
//!
//! The interface treats malformed word input as a non-event rather
//! than an error: queries return `false` for the empty string and
//! mutations silently do nothing. Deleting a word that other words
//! pass through only clears a flag; deleting a word at the tip of a
//! branch prunes the branch back to the nearest node which still
//! roots a word.
//!
//! Example 1
//! ```
//! use wordtrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.add_word("cat");
//! trie.add_word("car");
//!
//! assert!(trie.lookup("cat"));
//! assert!(trie.is_valid_prefix("ca")); // "cat" and "car" pass through
//! assert!(!trie.lookup("ca")); // but "ca" itself was never added
//!
//! trie.remove_word("cat");
//! assert!(!trie.lookup("cat"));
//! assert!(trie.lookup("car")); // untouched by the removal
//! ```
//!
//! Example 2
//! ```
//! use wordtrie::trie::Trie;
//!
//! let trie = Trie::from_words(["dog", "dot", "dog"]);
//! assert_eq!(trie.count(), 2); // duplicate insertion is a no-op
//! assert_eq!(trie.words(), vec!["dog".to_string(), "dot".to_string()]);
//! ```
//!
//! Typical usages for this data structure:
//!  - Spell-check style dictionaries
//!  - Autocomplete prefix validation
//!  - Storing large numbers of words with significant amounts of
//!    shared-prefix duplication
//!  - ...

use std::collections::BTreeMap;

/// One position along some prefix of the stored words.
///
/// A node is "dead" when it neither ends a word nor has children;
/// removal cleanup guarantees no dead node survives in the tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) children: BTreeMap<char, Node>,
    pub(crate) terminal: bool,
}

/// Stores a set of words as a prefix tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trie {
    pub(crate) root: Node,
    count: usize,
}

impl Node {
    /// Does this node's subtree (itself included) end at least one word?
    ///
    /// Worklist scan rather than recursion: a branch is as deep as the
    /// longest word passing through it, which the stack cannot bound.
    pub(crate) fn roots_word(&self) -> bool {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            if node.terminal {
                return true;
            }
            pending.extend(node.children.values());
        }
        false
    }

    /// Number of words ending in this node's subtree.
    pub(crate) fn word_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += usize::from(node.terminal);
            pending.extend(node.children.values());
        }
        count
    }

    /// Walk `word` from this node, returning the node at the end of
    /// the path if the whole path exists.
    fn descend(&self, word: &str) -> Option<&Node> {
        let mut node = self;
        for ch in word.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}

// Default drop glue recurses once per tree level, which overflows the
// stack on branches as deep as a long word. Flatten the tree into a
// worklist instead, leaving each node childless before it drops.
impl Drop for Node {
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let mut pending = vec![std::mem::take(&mut self.children)];
        while let Some(level) = pending.pop() {
            for (_, mut child) in level {
                if !child.children.is_empty() {
                    pending.push(std::mem::take(&mut child.children));
                }
            }
        }
    }
}

impl Trie {
    /// Create a new empty Trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Trie holding every word in `words`, inserted in order.
    ///
    /// Duplicates are no-ops, so the resulting word set is exactly the
    /// set of distinct non-empty words in the input.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.extend(words);
        trie
    }

    /// Clear the Trie.
    pub fn clear(&mut self) {
        self.root = Node::default();
        self.count = 0;
    }

    /// How many words does the Trie contain?
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Does the Trie contain exactly the supplied word?
    ///
    /// The empty string is never stored, so it always answers `false`.
    /// This is an exact match: a stored word extending `word` does not
    /// count (see [`Trie::is_valid_prefix`] for that).
    pub fn lookup(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        self.root
            .descend(word)
            .map(|node| node.terminal)
            .unwrap_or(false)
    }

    /// Is at least one stored word prefixed by `word`?
    ///
    /// A stored word counts as its own prefix, so `lookup(w)` implies
    /// `is_valid_prefix(w)`. The empty string always answers `false`.
    pub fn is_valid_prefix(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        self.root
            .descend(word)
            .map(Node::roots_word)
            .unwrap_or(false)
    }

    /// Add a word to the Trie, creating nodes for any characters not
    /// yet present. Adding the empty string or a word already present
    /// does nothing.
    pub fn add_word(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.count += 1;
        }
    }

    /// Remove a word from the Trie.
    ///
    /// Clears the word's terminal flag, then prunes trailing dead
    /// nodes back toward the root, stopping at the first node along
    /// the path which still roots a word. The root itself is never
    /// removed. Removing the empty string or a word whose path does
    /// not exist does nothing.
    pub fn remove_word(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let path: Vec<char> = word.chars().collect();

        // First walk: confirm the full path exists and find the anchor,
        // the deepest node along the path which survives pruning (it
        // ends another word or branches). Everything between the anchor
        // and the path end is a single-child, non-terminal chain, so
        // detaching one edge at the anchor drops the whole dead tail.
        let mut anchor = 0;
        let mut node = &self.root;
        for (depth, ch) in path.iter().enumerate() {
            let Some(child) = node.children.get(ch) else {
                return;
            };
            if node.terminal || node.children.len() > 1 {
                anchor = depth;
            }
            node = child;
        }
        let was_terminal = node.terminal;
        // A final node with children stays; clearing its flag is the
        // whole removal. A childless one is dead once the flag clears,
        // and takes the chain below the anchor with it.
        let prune = node.children.is_empty();

        let mut node = &mut self.root;
        for (depth, ch) in path.iter().enumerate() {
            if prune && depth == anchor {
                node.children.remove(ch);
                if was_terminal {
                    self.count -= 1;
                }
                return;
            }
            let Some(child) = node.children.get_mut(ch) else {
                return;
            };
            node = child;
        }
        node.terminal = false;
        if was_terminal {
            self.count -= 1;
        }
    }

    /// Swap in a freshly parsed root and recount its words.
    pub(crate) fn replace_root(&mut self, root: Node) {
        self.count = root.word_count();
        self.root = root;
    }

    /// Build the full list of stored words, in lexicographic order
    /// (by code point).
    ///
    /// An empty Trie yields an empty list.
    pub fn words(&self) -> Vec<String> {
        self.iter().collect()
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.add_word(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        Self::from_words(words)
    }
}
