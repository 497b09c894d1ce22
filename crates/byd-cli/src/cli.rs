//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// BYD - Build Your Dictionary
#[derive(Parser, Debug)]
#[command(name = "byd", author, version)]
#[command(about = "Build Your Dictionary: a terminal vocabulary trainer", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "BYD_CONFIG", global = true)]
    pub config: Option<String>,

    /// Dictionary file (overrides `dictionary.path` from the config file)
    #[arg(short, long, env = "BYD_DICTIONARY", global = true)]
    pub dictionary: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand; the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands. Without one, the interactive menu starts.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the interactive menu
    Run,
    /// Show a word's meanings and memory level
    Lookup {
        /// Word to look up
        word: String,
    },
    /// Add a word without the interactive prompt
    Add {
        /// Word to add
        word: String,
        /// Meanings, one per argument
        #[arg(required = true)]
        meanings: Vec<String>,
    },
    /// Print one page of the word list
    List {
        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Show word and mastery counts
    Stats,
    /// Manage the configuration file
    Config {
        /// Config operation
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `byd config` subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,
    /// Print a value by dotted key (e.g. `quiz.mastery_threshold`)
    Get {
        /// Dotted key
        key: String,
    },
    /// Set a value by dotted key
    Set {
        /// Dotted key
        key: String,
        /// New value
        value: String,
    },
    /// Write a default configuration file
    Init {
        /// Write to this path instead of the default location
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
