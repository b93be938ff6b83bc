//! Word-list loading.
//!
//! A word list is a UTF-8 text file with one word per line. Blank lines and
//! comment lines are skipped; the remaining lines are normalized according to
//! [`InputConfig`] before they reach the trie.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::config::input::InputConfig;
use crate::data_structures::MokuTrie;
use crate::error::{MokuError, MokuResult};

/// Reads word lists and applies them to a trie.
#[derive(Debug, Clone, Default)]
pub struct WordListLoader {
    config: InputConfig,
}

impl WordListLoader {
    /// Creates a loader using the given input configuration.
    pub fn new(config: InputConfig) -> Self {
        Self { config }
    }

    /// Turns one raw line into a word.
    ///
    /// Returns `None` for blank lines and comments.
    pub fn normalize<'a>(&self, line: &'a str) -> Option<Cow<'a, str>> {
        let line = if self.config.trim { line.trim() } else { line };
        if line.is_empty() {
            return None;
        }
        if let Some(prefix) = self.config.comment_prefix.as_deref() {
            if line.starts_with(prefix) {
                return None;
            }
        }

        if self.config.case_sensitive {
            Some(Cow::Borrowed(line))
        } else {
            Some(Cow::Owned(line.to_lowercase()))
        }
    }

    /// Reads every accepted word from `reader`.
    ///
    /// `origin` only labels errors and log lines.
    pub fn read<R: BufRead>(&self, reader: R, origin: &Path) -> MokuResult<Vec<String>> {
        let mut words = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| MokuError::WordList {
                path: origin.to_path_buf(),
                line: index + 1,
                message: e.to_string(),
            })?;

            let Some(word) = self.normalize(&line) else {
                continue;
            };

            let length = word.chars().count();
            if length > self.config.max_word_length {
                warn!(
                    path = %origin.display(),
                    line = index + 1,
                    length,
                    max = self.config.max_word_length,
                    "Skipping word longer than the configured maximum"
                );
                continue;
            }

            words.push(word.into_owned());
        }

        debug!(path = %origin.display(), words = words.len(), "Read word list");
        Ok(words)
    }

    /// Reads every accepted word from the file at `path`.
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> MokuResult<Vec<String>> {
        let path = path.as_ref();
        let file = File::open(path)?;
        self.read(BufReader::new(file), path)
    }

    /// Inserts every word of the file into `trie`.
    ///
    /// # Returns
    ///
    /// The number of words inserted.
    pub fn insert_file<P: AsRef<Path>>(&self, trie: &mut MokuTrie, path: P) -> MokuResult<usize> {
        let words = self.read_file(path)?;
        let count = words.len();
        trie.extend(words.iter());
        Ok(count)
    }

    /// Removes one occurrence of every word of the file from `trie`.
    ///
    /// # Returns
    ///
    /// The number of words that were present and got removed.
    pub fn remove_file<P: AsRef<Path>>(&self, trie: &mut MokuTrie, path: P) -> MokuResult<usize> {
        let words = self.read_file(path)?;
        Ok(words.iter().filter(|word| trie.remove(*word)).count())
    }
}
