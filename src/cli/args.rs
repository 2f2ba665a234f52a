//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `print`: translate a message key
//! - `plural`: translate a count-dependent message
//! - `list`: show loaded namespaces
//! - `check`: report catalog files and entries that could not be loaded
//! - `init`: create a configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by catalog commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Catalog root directory (overrides config file)
    #[arg(long, env = "GLOSSA_CATALOG_ROOT")]
    pub catalog_root: Option<PathBuf>,

    /// Current language (overrides config file)
    #[arg(long)]
    pub lang: Option<String>,

    /// Log missing translations
    #[arg(long)]
    pub debug: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct PrintCommand {
    /// Message key (also the fallback text)
    pub key: String,

    /// Formatting arguments; a trailing namespace name selects that language.
    /// Numeric values are passed as numbers, so a namespace named like a
    /// number (e.g. `2024`) needs `--in` instead
    #[arg(allow_negative_numbers = true)]
    pub args: Vec<String>,

    /// Translate in this language without inspecting the arguments
    #[arg(long = "in", value_name = "LANG")]
    pub target: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PluralCommand {
    /// Count selecting the message; also the first formatting argument
    #[arg(allow_negative_numbers = true)]
    pub count: i64,

    /// Key used when the count is zero or less
    pub zero: String,

    /// Key used when the count is one
    pub one: String,

    /// Key used when the count is greater than one
    pub many: String,

    /// Additional formatting arguments
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ListCommand {
    /// Also list every key of each namespace
    #[arg(long)]
    pub keys: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate a message key
    Print(PrintCommand),
    /// Translate a zero/one/many message for a count
    Plural(PluralCommand),
    /// List loaded namespaces
    List(ListCommand),
    /// Report catalog files and values that could not be loaded
    Check(CheckCommand),
    /// Initialize a new .glossarc.json configuration file
    Init,
}
