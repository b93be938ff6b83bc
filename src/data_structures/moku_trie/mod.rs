// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Moku Trie Implementation
//!
//! A prefix tree over arbitrary symbols (`char` by default) that keeps a
//! per-node count of the insertions passing through it. The counts let
//! removal prune every branch that no stored word depends on, so the tree
//! never carries dead subtrees.
//!
//! # Example
//!
//! ```
//! use moku_trie_lib::data_structures::moku_trie::MokuTrie;
//!
//! let mut trie: MokuTrie = MokuTrie::new();
//! trie.insert("cat");
//! trie.insert("car");
//! trie.insert("dog");
//!
//! assert_eq!(trie.word_count(), 3);
//! assert!(trie.contains_prefix("ca"));
//! assert!(!trie.contains("ca"));
//!
//! trie.remove("cat");
//! assert!(trie.contains("car"));
//! assert_eq!(trie.word_count(), 2);
//! ```
//!
//! # Duplicate insertions
//!
//! Counts track insertions, not distinct words. A word inserted twice needs
//! two removals before `contains` reports it absent, while `word_count`
//! reports it once throughout.
//!
//! # Empty input
//!
//! The root is never a word: inserting or removing an empty word is a no-op
//! and both lookups return `false` for it.

mod node;
mod render;
mod symbols;

#[cfg(test)]
mod tests;

use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace};

use node::TrieNode;
pub use symbols::IntoSymbols;

/// Prefix tree with insertion-counted nodes and eager pruning.
///
/// Mutating operations take `&mut self`; to share a trie between threads,
/// wrap the whole structure in a single lock.
///
/// Every traversal, dropping included, runs on an explicit queue or stack,
/// so word length is bounded by memory rather than by the call stack.
pub struct MokuTrie<S = char> {
    /// The sentinel root node
    root: TrieNode<S>,
}

impl<S> MokuTrie<S>
where
    S: Eq + Hash + Clone,
{
    /// Creates a new empty `MokuTrie`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::root(),
        }
    }

    /// Inserts a word into the trie.
    ///
    /// Every node on the path, the final one included, has its count bumped,
    /// so inserting the same word twice records two insertions. An empty
    /// word is ignored.
    pub fn insert<W: IntoSymbols<S>>(&mut self, word: W) {
        let mut node = &mut self.root;
        let mut depth = 0usize;

        for symbol in word.into_symbols() {
            node.descendant_count += 1;
            node = node
                .children
                .entry(symbol.clone())
                .or_insert_with(|| TrieNode::new(symbol));
            depth += 1;
        }

        if depth == 0 {
            return;
        }

        node.descendant_count += 1;
        node.is_terminal = true;
        trace!(depth, "Inserted word");
    }

    /// Removes one occurrence of a word.
    ///
    /// # Returns
    ///
    /// `true` if an occurrence was removed, `false` if the word was not
    /// stored (in which case the trie is untouched).
    pub fn remove<W: IntoSymbols<S>>(&mut self, word: W) -> bool {
        let symbols: Vec<S> = word.into_symbols().collect();
        if !self.contains(symbols.as_slice()) {
            return false;
        }

        Self::remove_from(&mut self.root, &symbols);
        trace!(depth = symbols.len(), "Removed word");
        true
    }

    /// Walks `symbols` down from `root`, releasing one insertion at each level.
    ///
    /// The caller guarantees the word is stored, so every count on the path
    /// is at least one.
    fn remove_from(root: &mut TrieNode<S>, symbols: &[S]) {
        let mut node = root;

        for (index, symbol) in symbols.iter().enumerate() {
            node.descendant_count -= 1;

            let child_count = match node.children.get(symbol) {
                Some(child) => child.descendant_count,
                None => return,
            };

            // A child carrying only this insertion has nothing else below it
            if child_count == 1 {
                node.children.remove(symbol);
                debug!(remaining = symbols.len() - index - 1, "Pruned subtree");
                return;
            }

            let Some(child) = node.children.get_mut(symbol) else {
                return;
            };
            if index + 1 == symbols.len() {
                child.descendant_count -= 1;
                if child.terminal_count() == 0 {
                    child.is_terminal = false;
                }
                return;
            }
            node = child;
        }
    }

    /// Checks whether a word is stored (exact match).
    pub fn contains<W: IntoSymbols<S>>(&self, word: W) -> bool {
        self.find(word).is_some_and(|node| node.is_terminal)
    }

    /// Checks whether any stored word starts with `prefix`, the word itself
    /// included.
    pub fn contains_prefix<W: IntoSymbols<S>>(&self, prefix: W) -> bool {
        self.find(prefix).is_some()
    }

    /// Follows a non-empty path from the root.
    fn find<W: IntoSymbols<S>>(&self, word: W) -> Option<&TrieNode<S>> {
        let mut node = &self.root;
        let mut depth = 0usize;

        for symbol in word.into_symbols() {
            node = node.children.get(&symbol)?;
            depth += 1;
        }

        (depth > 0).then_some(node)
    }

    /// Returns the number of distinct stored words.
    ///
    /// This requires traversing the entire trie, so it's an O(n) operation.
    pub fn word_count(&self) -> usize {
        let mut queue = VecDeque::from([&self.root]);
        let mut count = 0;

        while let Some(node) = queue.pop_front() {
            if node.is_terminal {
                count += 1;
            }
            queue.extend(node.children.values());
        }

        count
    }

    /// Returns the number of live insertions, duplicates included.
    pub fn total_insertions(&self) -> usize {
        self.root.descendant_count
    }

    /// Returns every stored word as a symbol sequence.
    ///
    /// Order follows the child tables and carries no meaning.
    pub fn list_words(&self) -> Vec<Vec<S>> {
        let mut words = Vec::new();
        let mut path = Vec::new();
        Self::collect_words(&self.root, &mut path, &mut words);
        words
    }

    /// Returns every stored word that starts with `prefix`.
    ///
    /// An empty prefix lists all words.
    pub fn words_with_prefix<W: IntoSymbols<S>>(&self, prefix: W) -> Vec<Vec<S>> {
        let mut path: Vec<S> = prefix.into_symbols().collect();
        if path.is_empty() {
            return self.list_words();
        }

        let mut words = Vec::new();
        if let Some(node) = self.find(path.as_slice()) {
            if node.is_terminal {
                words.push(path.clone());
            }
            Self::collect_words(node, &mut path, &mut words);
        }
        words
    }

    /// Depth-first walk below `start`; `path` holds the symbols leading to it.
    ///
    /// Stack entries carry the path length of their parent, so `path` is cut
    /// back to it before the entry's own symbol is pushed.
    fn collect_words(start: &TrieNode<S>, path: &mut Vec<S>, words: &mut Vec<Vec<S>>) {
        let base = path.len();
        let mut stack: Vec<(&TrieNode<S>, usize)> =
            start.children.values().map(|child| (child, base)).collect();

        while let Some((node, depth)) = stack.pop() {
            path.truncate(depth);
            if let Some(symbol) = &node.symbol {
                path.push(symbol.clone());
            }
            if node.is_terminal {
                words.push(path.clone());
            }
            stack.extend(node.children.values().map(|child| (child, depth + 1)));
        }

        path.truncate(base);
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Removes every word.
    pub fn clear(&mut self) {
        self.root = TrieNode::root();
    }
}

impl MokuTrie<char> {
    /// Returns every stored word as a `String`.
    pub fn words(&self) -> Vec<String> {
        self.list_words()
            .into_iter()
            .map(|chars| chars.into_iter().collect())
            .collect()
    }

    /// Returns every stored word starting with `prefix` as a `String`.
    pub fn words_starting_with(&self, prefix: &str) -> Vec<String> {
        self.words_with_prefix(prefix)
            .into_iter()
            .map(|chars| chars.into_iter().collect())
            .collect()
    }
}

impl<S> fmt::Debug for MokuTrie<S>
where
    S: Eq + Hash + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MokuTrie")
            .field("words", &self.word_count())
            .field("insertions", &self.total_insertions())
            .finish()
    }
}

impl<S> Default for MokuTrie<S>
where
    S: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, W> Extend<W> for MokuTrie<S>
where
    S: Eq + Hash + Clone,
    W: IntoSymbols<S>,
{
    fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S, W> FromIterator<W> for MokuTrie<S>
where
    S: Eq + Hash + Clone,
    W: IntoSymbols<S>,
{
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
