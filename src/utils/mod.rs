//! Utilities that sit between the outside world and the trie.

pub mod wordlist;

pub use wordlist::WordListLoader;
