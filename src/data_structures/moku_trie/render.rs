// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Diagnostic dumps of the trie structure.
//!
//! The output lists node symbols breadth-first, one level at a time. It is a
//! debugging aid with no parseable format.

use std::collections::VecDeque;
use std::fmt::{self, Display, Write};
use std::hash::Hash;

use super::node::TrieNode;
use super::MokuTrie;

/// How levels are delimited in a rendered dump.
#[derive(Debug, Clone, Copy)]
struct LevelStyle {
    /// Written before each level's symbols
    marker: &'static str,
    /// Written between two levels
    separator: &'static str,
}

const INLINE: LevelStyle = LevelStyle {
    marker: "| ",
    separator: " ",
};

const BY_LEVEL: LevelStyle = LevelStyle {
    marker: "",
    separator: "\n",
};

impl<S> MokuTrie<S>
where
    S: Eq + Hash + Clone + Display,
{
    /// Renders every level on one line, each level introduced by `|`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.render_to(&mut out);
        out
    }

    /// Renders one line per level.
    pub fn render_by_level(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.render_by_level_to(&mut out);
        out
    }

    /// Writes the single-line dump into `out`.
    pub fn render_to<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        self.write_levels(out, INLINE)
    }

    /// Writes the per-level dump into `out`.
    pub fn render_by_level_to<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        self.write_levels(out, BY_LEVEL)
    }

    /// Breadth-first walk where `None` in the queue marks the end of a level.
    fn write_levels<W: Write + ?Sized>(&self, out: &mut W, style: LevelStyle) -> fmt::Result {
        let mut queue: VecDeque<Option<&TrieNode<S>>> = VecDeque::from([Some(&self.root), None]);
        let mut level: Vec<&S> = Vec::new();
        let mut first_level = true;

        while let Some(entry) = queue.pop_front() {
            match entry {
                Some(node) => {
                    if let Some(symbol) = &node.symbol {
                        level.push(symbol);
                    }
                    queue.extend(node.children.values().map(Some));
                }
                None => {
                    if !level.is_empty() {
                        if !first_level {
                            out.write_str(style.separator)?;
                        }
                        out.write_str(style.marker)?;
                        for (i, symbol) in level.drain(..).enumerate() {
                            if i > 0 {
                                out.write_char(' ')?;
                            }
                            write!(out, "{symbol}")?;
                        }
                        first_level = false;
                    }
                    if !queue.is_empty() {
                        queue.push_back(None);
                    }
                }
            }
        }

        Ok(())
    }
}

impl<S> Display for MokuTrie<S>
where
    S: Eq + Hash + Clone + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_by_level_to(f)
    }
}
