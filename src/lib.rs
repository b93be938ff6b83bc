//! Moku Library
//!
//! This library contains the Moku prefix tree together with the pieces the
//! `moku` binary builds around it: layered configuration, error types and
//! word-list loading.
//!
//! # Architecture
//!
//! - `data_structures`: the trie itself, free of I/O and global state
//! - `config`: defaults, file and environment layering with validation
//! - `error`: crate error enums
//! - `utils`: word-list reading that feeds the trie

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod utils;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Moku.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
