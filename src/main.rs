//! Moku - Main entrypoint.
//!
//! Builds a trie from word-list files and runs one query against it.
//! Logging is configured from the loaded configuration, with `RUST_LOG`
//! taking precedence when set.

use clap::{Args, Parser, Subcommand};
use moku_trie_lib::config::{ConfigLoader, LogConfig, MokuConfig, ENV_PREFIX};
use moku_trie_lib::data_structures::MokuTrie;
use moku_trie_lib::error::{MokuError, MokuResult};
use moku_trie_lib::utils::WordListLoader;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Moku.
#[derive(Parser, Debug)]
#[clap(name = "moku", version, author, about)]
struct Cli {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Word lists that make up the trie.
#[derive(Args, Debug)]
struct Sources {
    /// Word-list files to insert, one word per line
    #[clap(required = true, value_parser)]
    files: Vec<PathBuf>,

    /// Word-list files whose words are removed after loading
    #[clap(short, long, value_parser)]
    remove: Vec<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the number of stored words and insertions
    Stats {
        #[clap(flatten)]
        sources: Sources,
    },

    /// List the stored words in sorted order
    List {
        #[clap(flatten)]
        sources: Sources,

        /// Only list words starting with this prefix
        #[clap(short, long)]
        prefix: Option<String>,
    },

    /// Check whether a word, or a prefix of stored words, is present
    Check {
        #[clap(flatten)]
        sources: Sources,

        /// Word to look up
        #[clap(short, long)]
        word: String,
    },

    /// Print the trie structure level by level
    Render {
        #[clap(flatten)]
        sources: Sources,

        /// One line per level instead of a single line
        #[clap(long)]
        by_level: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> MokuResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| MokuError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds the trie described by `sources`.
fn build_trie(loader: &WordListLoader, sources: &Sources) -> MokuResult<MokuTrie> {
    let mut trie = MokuTrie::new();

    for path in &sources.files {
        let inserted = loader.insert_file(&mut trie, path)?;
        info!(path = %path.display(), inserted, "Loaded word list");
    }
    for path in &sources.remove {
        let removed = loader.remove_file(&mut trie, path)?;
        info!(path = %path.display(), removed, "Applied removal list");
    }

    Ok(trie)
}

fn run(command: Command, config: MokuConfig, loader: ConfigLoader) -> MokuResult<()> {
    let words = WordListLoader::new(config.input.clone());

    match command {
        Command::Stats { sources } => {
            let trie = build_trie(&words, &sources)?;
            println!("words: {}", trie.word_count());
            println!("insertions: {}", trie.total_insertions());
        }
        Command::List { sources, prefix } => {
            let trie = build_trie(&words, &sources)?;
            let mut listed = match prefix {
                Some(prefix) => trie.words_starting_with(&prefix),
                None => trie.words(),
            };
            listed.sort_unstable();
            for word in listed {
                println!("{word}");
            }
        }
        Command::Check { sources, word } => {
            let trie = build_trie(&words, &sources)?;
            let word = words.normalize(&word).unwrap_or_default();
            println!("contains: {}", trie.contains(&*word));
            println!("prefix: {}", trie.contains_prefix(&*word));
        }
        Command::Render { sources, by_level } => {
            let trie = build_trie(&words, &sources)?;
            if by_level {
                println!("{}", trie.render_by_level());
            } else {
                println!("{}", trie.render());
            }
        }
        Command::Validate => {
            loader.load()?;
            info!("Configuration validated successfully");
            println!("configuration ok");
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&MokuConfig::default())
                .map_err(|e| MokuError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
        }
    }

    Ok(())
}

/// Main entry point for the application.
fn main() {
    let cli = Cli::parse();
    let loader = ConfigLoader::new(cli.config.as_deref(), ENV_PREFIX);

    let config = match loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(2);
        }
    };

    if let Err(e) = init_logging(&config.log) {
        eprintln!("{e}");
        process::exit(2);
    }

    if let Err(e) = run(cli.command, config, loader) {
        tracing::error!("{e}");
        eprintln!("error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_takes_word_flag() {
        for flag in ["--word", "-w"] {
            let cli = Cli::try_parse_from(["moku", "check", "a.txt", "b.txt", flag, "cat"]).unwrap();
            match cli.command {
                Command::Check { sources, word } => {
                    assert_eq!(sources.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
                    assert_eq!(word, "cat");
                }
                other => panic!("unexpected command: {other:?}"),
            }
        }
    }

    #[test]
    fn test_check_requires_word_flag() {
        // A trailing bare word is just another file
        assert!(Cli::try_parse_from(["moku", "check", "a.txt", "cat"]).is_err());
    }
}
