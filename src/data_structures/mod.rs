//! Data structures for Moku.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Owned, acyclic node graphs (no shared or back references)
//! - Side-effect-free cores; diagnostics go to caller-supplied sinks

pub mod moku_trie;

// Re-export common data structures
pub use moku_trie::{IntoSymbols, MokuTrie};
