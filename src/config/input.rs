//! Word-list input configuration module.
//!
//! Controls how raw lines from a word-list file become trie words.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Word-list input configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Whether words keep their case; when false they are lowercased
    pub case_sensitive: bool,

    /// Whether surrounding whitespace is stripped from each line
    pub trim: bool,

    /// Lines starting with this prefix are skipped
    pub comment_prefix: Option<String>,

    /// Longest accepted word, in symbols; longer words are skipped
    pub max_word_length: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            trim: true,
            comment_prefix: Some("#".to_string()),
            max_word_length: 256,
        }
    }
}

impl Validate for InputConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_length == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "input.max_word_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if matches!(self.comment_prefix.as_deref(), Some("")) {
            return Err(ConfigError::ValidationError(
                "input.comment_prefix must not be empty when set".to_string(),
            ));
        }

        Ok(())
    }
}
