// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Moku Trie.
//!
//! Nodes own their children outright, so dropping a child entry from the
//! table releases the whole subtree beneath it.

use std::hash::Hash;
use std::mem;

use fnv::FnvHashMap;

/// A node in the Moku Trie.
///
/// Each non-root node represents one symbol on the path from the root.
#[derive(Debug)]
pub struct TrieNode<S> {
    /// Symbol on the edge from the parent; `None` only for the root
    pub symbol: Option<S>,

    /// Whether the path ending here is a stored word
    pub is_terminal: bool,

    /// Insertions whose path passes through (or ends at) this node
    pub descendant_count: usize,

    /// Map of symbols to child nodes
    pub children: FnvHashMap<S, TrieNode<S>>,
}

impl<S: Eq + Hash> TrieNode<S> {
    /// Creates the sentinel root node.
    pub fn root() -> Self {
        Self {
            symbol: None,
            is_terminal: false,
            descendant_count: 0,
            children: FnvHashMap::default(),
        }
    }

    /// Creates an empty node reached through `symbol`.
    pub fn new(symbol: S) -> Self {
        Self {
            symbol: Some(symbol),
            is_terminal: false,
            descendant_count: 0,
            children: FnvHashMap::default(),
        }
    }

    /// Insertions that end exactly at this node.
    ///
    /// Every insertion through a child also passes through this node, so
    /// whatever the children do not account for terminates here.
    pub fn terminal_count(&self) -> usize {
        let through_children: usize = self
            .children
            .values()
            .map(|child| child.descendant_count)
            .sum();
        self.descendant_count.saturating_sub(through_children)
    }
}

impl<S: Eq + Hash> Default for TrieNode<S> {
    fn default() -> Self {
        Self::root()
    }
}

// Tear subtrees down from a worklist; the generated drop glue would recurse
// once per symbol of the longest word.
impl<S> Drop for TrieNode<S> {
    fn drop(&mut self) {
        let mut pending = vec![mem::take(&mut self.children)];
        while let Some(children) = pending.pop() {
            for (_, mut child) in children {
                pending.push(mem::take(&mut child.children));
            }
        }
    }
}
