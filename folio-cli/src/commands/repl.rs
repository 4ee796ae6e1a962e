use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use folio::{IndexConfig, IndexPolicy, Order, WordIndex};
use rustyline::DefaultEditor;

use crate::cli::{SortOrder, Variant};
use crate::context;
use crate::output::{self, BuildSummary, OutputFormat};

/// Run the interactive REPL.
pub fn run(config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = match config_path {
        Some(path) => context::load_config(path)?,
        None => IndexConfig::default(),
    };
    let mut session = Session::new(config, format);

    let mut rl = DefaultEditor::new()?;

    println!("Folio REPL (type 'help' for commands, 'quit' to exit)");

    loop {
        let line = match rl.readline("folio> ") {
            Ok(line) => line,
            Err(
                rustyline::error::ReadlineError::Interrupted | rustyline::error::ReadlineError::Eof,
            ) => {
                break;
            }
            Err(err) => {
                eprintln!("Error: {err}");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line);

        match session.execute(line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => eprintln!("Error: {e:#}"),
        }
    }

    println!("Goodbye.");
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Paths, options and the last index built for each variant.
struct Session {
    config: IndexConfig,
    format: OutputFormat,
    index: Option<WordIndex>,
    alternate: Option<WordIndex>,
}

impl Session {
    fn new(config: IndexConfig, format: OutputFormat) -> Self {
        Session {
            config,
            format,
            index: None,
            alternate: None,
        }
    }

    fn execute(&mut self, line: &str) -> Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            return Ok(Flow::Continue);
        };
        match command {
            "help" => print_help(),
            "quit" | "exit" => return Ok(Flow::Quit),
            "text" => {
                self.config.text_file = Some(path_arg(&parts, "text <path>")?);
                println!("Text file set.");
            }
            "dictionary" => {
                self.config.dictionary_file = Some(path_arg(&parts, "dictionary <path>")?);
                println!("Dictionary file set.");
            }
            "stopwords" => {
                self.config.stop_words_file = Some(path_arg(&parts, "stopwords <path>")?);
                println!("Stop words file set.");
            }
            "output" => {
                self.config.output_file = Some(path_arg(&parts, "output <path>")?);
                println!("Output file set.");
            }
            "unique" => {
                self.config.display_unique_word_count = switch(&parts, "on", "off", "unique on|off")?;
                println!(
                    "Unique word count {}.",
                    if self.config.display_unique_word_count { "on" } else { "off" }
                );
            }
            "undefined" => {
                self.config.drop_undefined_words = switch(&parts, "drop", "keep", "undefined keep|drop")?;
                println!(
                    "Undefined words will be {}.",
                    if self.config.drop_undefined_words { "dropped" } else { "kept" }
                );
            }
            "build" => self.build(variant_arg(&parts, "build index|alternate")?)?,
            "list" => {
                let variant = variant_arg(&parts, "list index|alternate [asc|desc]")?;
                let order = match parts.get(2) {
                    Some(order) => SortOrder::from_str(order, true)
                        .map_err(|_| anyhow::anyhow!("Usage: list index|alternate [asc|desc]"))?,
                    None => SortOrder::Asc,
                };
                self.list(variant, Order::from(order))?;
            }
            "show" => {
                let text = toml::to_string_pretty(&self.config)
                    .context("Failed to render configuration")?;
                print!("{text}");
            }
            _ => {
                eprintln!(
                    "Unknown command: '{command}'. Type 'help' for available commands."
                );
            }
        }
        Ok(Flow::Continue)
    }

    fn build(&mut self, variant: Variant) -> Result<()> {
        let policy = IndexPolicy::from(variant);
        let index = context::build_report(policy, self.config.clone())?;
        let summary = BuildSummary::new(policy, &index, self.config.output_file.as_deref());
        output::print_build_summary(&summary, self.format);

        match variant {
            Variant::Index => self.index = Some(index),
            Variant::Alternate => self.alternate = Some(index),
        }
        Ok(())
    }

    fn list(&self, variant: Variant, order: Order) -> Result<()> {
        let built = match variant {
            Variant::Index => self.index.as_ref(),
            Variant::Alternate => self.alternate.as_ref(),
        };
        let Some(index) = built else {
            bail!("No {} has been built yet.", IndexPolicy::from(variant).name());
        };
        output::print_words(index, order, self.format);
        Ok(())
    }
}

fn path_arg(parts: &[&str], usage: &str) -> Result<PathBuf> {
    match parts.get(1) {
        Some(path) => Ok(PathBuf::from(path)),
        None => bail!("Usage: {usage}"),
    }
}

fn switch(parts: &[&str], on: &str, off: &str, usage: &str) -> Result<bool> {
    match parts.get(1) {
        Some(value) if value.eq_ignore_ascii_case(on) => Ok(true),
        Some(value) if value.eq_ignore_ascii_case(off) => Ok(false),
        _ => bail!("Usage: {usage}"),
    }
}

fn variant_arg(parts: &[&str], usage: &str) -> Result<Variant> {
    parts
        .get(1)
        .and_then(|value| Variant::from_str(value, true).ok())
        .with_context(|| format!("Usage: {usage}"))
}

fn print_help() {
    println!(
        "\
Available commands:
  text <path>                       Set the text file
  dictionary <path>                 Set the dictionary file
  stopwords <path>                  Set the stop words file
  output <path>                     Set the report file
  unique on|off                     Prefix the report with the unique word count
  undefined keep|drop               Keep or drop words without a definition
  build index|alternate             Build an index and write its report
  list index|alternate [asc|desc]   Print the words of the last build
  show                              Show the current configuration
  help                              Show this help
  quit                              Exit the REPL"
    );
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn session() -> Session {
        Session::new(IndexConfig::default(), OutputFormat::Table)
    }

    #[test]
    fn test_set_paths_and_options() {
        let mut session = session();
        session.execute("text book.txt").unwrap();
        session.execute("dictionary dictionary.csv").unwrap();
        session.execute("stopwords stopwords.txt").unwrap();
        session.execute("output index.txt").unwrap();
        session.execute("unique on").unwrap();
        session.execute("undefined drop").unwrap();

        let config = &session.config;
        assert_eq!(config.text_file, Some(PathBuf::from("book.txt")));
        assert_eq!(config.dictionary_file, Some(PathBuf::from("dictionary.csv")));
        assert_eq!(config.stop_words_file, Some(PathBuf::from("stopwords.txt")));
        assert_eq!(config.output_file, Some(PathBuf::from("index.txt")));
        assert!(config.display_unique_word_count);
        assert!(config.drop_undefined_words);

        session.execute("unique off").unwrap();
        assert!(!session.config.display_unique_word_count);
    }

    #[test]
    fn test_invalid_arguments_are_errors() {
        let mut session = session();
        assert!(session.execute("text").is_err());
        assert!(session.execute("unique maybe").is_err());
        assert!(session.execute("build everything").is_err());
        assert_eq!(session.execute("bogus").unwrap(), Flow::Continue);
        assert_eq!(session.execute("quit").unwrap(), Flow::Quit);
    }

    #[test]
    fn test_blank_line_is_ignored() {
        let mut session = session();
        assert_eq!(session.execute("").unwrap(), Flow::Continue);
        assert_eq!(session.execute("   \t ").unwrap(), Flow::Continue);
        assert_eq!(session.config, IndexConfig::default());
    }

    #[test]
    fn test_build_before_paths_set_is_rejected() {
        let mut session = session();
        assert!(session.execute("build index").is_err());
        assert!(session.index.is_none());
    }

    #[test]
    fn test_list_requires_previous_build() {
        let mut session = session();
        assert!(session.execute("list alternate").is_err());
    }

    #[test]
    fn test_build_keeps_index_per_variant() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("text.txt"), "The Cat sat.\nA dog ran.").unwrap();
        fs::write(dir.path().join("dictionary.csv"), "cat,feline").unwrap();
        fs::write(dir.path().join("stopwords.txt"), "the a").unwrap();

        let mut session = session();
        for (command, file) in [
            ("text", "text.txt"),
            ("dictionary", "dictionary.csv"),
            ("stopwords", "stopwords.txt"),
            ("output", "index.txt"),
        ] {
            let line = format!("{command} {}", dir.path().join(file).display());
            session.execute(&line).unwrap();
        }

        session.execute("build index").unwrap();
        session.execute("build alternate").unwrap();
        session.execute("list index desc").unwrap();
        session.execute("list alternate").unwrap();

        let index = session.index.as_ref().unwrap();
        assert!(index.contains("cat"));
        assert!(!index.contains("the"));
        let alternate = session.alternate.as_ref().unwrap();
        assert!(alternate.contains("the"));
        assert!(!alternate.contains("cat"));
        assert!(dir.path().join("index.txt").exists());
    }
}
