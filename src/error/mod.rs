//! Error module for Moku.
//!
//! Trie operations themselves never fail; errors only arise around them,
//! while loading configuration or reading word lists.

use std::path::PathBuf;
use thiserror::Error;

pub mod config;

/// Result type alias used throughout Moku.
pub type MokuResult<T> = Result<T, MokuError>;

/// Core error enum for Moku.
#[derive(Error, Debug)]
pub enum MokuError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A word list could not be read.
    #[error("Word list {path:?}, line {line}: {message}")]
    WordList {
        /// File being read
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
