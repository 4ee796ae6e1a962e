use std::path::Path;

use anyhow::{Context, Result};
use folio::{IndexBuilder, IndexConfig, IndexPolicy, WordIndex};

/// Load an index configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<IndexConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: IndexConfig = toml::from_str(&content).context("Failed to parse config TOML")?;
    Ok(config)
}

/// Combine the optional config file with values given on the command line.
///
/// Command-line values win over file values.
pub fn resolve_config(config_path: Option<&Path>, overlay: IndexConfig) -> Result<IndexConfig> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => IndexConfig::default(),
    };
    config.merge(overlay);
    Ok(config)
}

/// Build an index and write its report.
pub fn build_report(policy: IndexPolicy, config: IndexConfig) -> Result<WordIndex> {
    let builder = IndexBuilder::new(policy, config);
    let index = builder
        .build_and_write()
        .with_context(|| format!("Failed to build {}", policy.name()))?;
    Ok(index)
}

/// Build an index without writing a report.
pub fn build_index(policy: IndexPolicy, config: IndexConfig) -> Result<WordIndex> {
    let builder = IndexBuilder::new(policy, config);
    let index = builder
        .build()
        .with_context(|| format!("Failed to build {}", policy.name()))?;
    Ok(index)
}

/// Initialize logging. `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .init();
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_resolve_config_overrides_file_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(
            &path,
            "text_file = \"book.txt\"\n\
             dictionary_file = \"dictionary.csv\"\n\
             stop_words_file = \"stopwords.txt\"\n\
             output_file = \"index.txt\"\n\
             display_unique_word_count = true\n",
        )
        .unwrap();

        let overlay = IndexConfig::builder().text_file("other.txt").build();
        let config = resolve_config(Some(&path), overlay).unwrap();
        assert_eq!(config.text_file, Some(PathBuf::from("other.txt")));
        assert_eq!(config.dictionary_file, Some(PathBuf::from("dictionary.csv")));
        assert!(config.display_unique_word_count);
        assert!(!config.drop_undefined_words);
    }

    #[test]
    fn test_resolve_config_without_file() {
        let overlay = IndexConfig::builder().drop_undefined_words(true).build();
        let config = resolve_config(None, overlay.clone()).unwrap();
        assert_eq!(config, overlay);
    }

    #[test]
    fn test_load_config_rejects_bad_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "text_file = [").unwrap();
        assert!(load_config(&path).is_err());
        assert!(load_config(&dir.path().join("missing.toml")).is_err());
    }
}
