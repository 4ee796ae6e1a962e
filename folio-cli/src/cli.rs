use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use folio::{IndexConfig, IndexPolicy, Order};

use crate::output::OutputFormat;

/// Folio - back-of-book index builder
#[derive(Parser)]
#[command(name = "folio", version, about)]
pub struct Cli {
    /// TOML file with default paths and options.
    #[arg(long, env = "FOLIO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Log build progress.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build an index and write its report.
    Build(BuildCommand),
    /// Build an index and print its words.
    List(ListCommand),
    /// Start an interactive session.
    Repl,
}

/// Which index to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Index that excludes stop words.
    Index,
    /// Alternate index of stop words only.
    Alternate,
}

impl From<Variant> for IndexPolicy {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Index => IndexPolicy::Exclusive,
            Variant::Alternate => IndexPolicy::Inclusive,
        }
    }
}

/// Listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl From<SortOrder> for Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Order::Ascending,
            SortOrder::Desc => Order::Descending,
        }
    }
}

/// Input files shared by `build` and `list`.
#[derive(Args)]
pub struct SourceArgs {
    /// Text to index.
    #[arg(long)]
    pub text: Option<PathBuf>,

    /// Dictionary with one `word,definition` entry per line.
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Whitespace-separated stop words.
    #[arg(long)]
    pub stop_words: Option<PathBuf>,

    /// Index variant.
    #[arg(long, value_enum, default_value_t = Variant::Index)]
    pub variant: Variant,

    /// Remove words without a dictionary definition.
    #[arg(long)]
    pub drop_undefined: bool,
}

impl SourceArgs {
    /// Configuration holding only the values given on the command line.
    pub fn overlay(&self) -> IndexConfig {
        IndexConfig {
            text_file: self.text.clone(),
            dictionary_file: self.dictionary.clone(),
            stop_words_file: self.stop_words.clone(),
            drop_undefined_words: self.drop_undefined,
            ..IndexConfig::default()
        }
    }
}

// --- Build ---

#[derive(Parser)]
pub struct BuildCommand {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Report destination.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Prefix the report with the number of words that occur once.
    #[arg(long)]
    pub unique_count: bool,
}

impl BuildCommand {
    pub fn overlay(&self) -> IndexConfig {
        let mut config = self.sources.overlay();
        config.output_file = self.output.clone();
        config.display_unique_word_count = self.unique_count;
        config
    }
}

// --- List ---

#[derive(Parser)]
pub struct ListCommand {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Listing order.
    #[arg(long, value_enum, default_value_t = SortOrder::Asc)]
    pub order: SortOrder,
}
