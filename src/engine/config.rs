use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Configuration for an index build.
///
/// All four paths must be set before a build starts. Paths are kept optional so
/// a configuration can be assembled incrementally (from a file, flags, or an
/// interactive session) and validated once, before any file is opened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Text to index.
    pub text_file: Option<PathBuf>,
    /// Dictionary with one `word,definition` entry per line.
    pub dictionary_file: Option<PathBuf>,
    /// Whitespace-separated stop words.
    pub stop_words_file: Option<PathBuf>,
    /// Destination of the report.
    pub output_file: Option<PathBuf>,
    /// Prefix the report with the number of words that occur exactly once.
    pub display_unique_word_count: bool,
    /// Remove words the dictionary has no definition for.
    pub drop_undefined_words: bool,
}

impl IndexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> IndexConfigBuilder {
        IndexConfigBuilder::default()
    }

    /// Resolve the input paths, failing if any is missing.
    pub fn inputs(&self) -> Result<InputFiles<'_>> {
        Ok(InputFiles {
            text: required(&self.text_file, "text file")?,
            dictionary: required(&self.dictionary_file, "dictionary file")?,
            stop_words: required(&self.stop_words_file, "stop words file")?,
        })
    }

    /// Resolve the report path, failing if it is missing.
    pub fn output(&self) -> Result<&Path> {
        required(&self.output_file, "output file")
    }

    /// Check that every path is set.
    pub fn validate(&self) -> Result<()> {
        self.inputs()?;
        self.output()?;
        Ok(())
    }

    /// Overlay every value that is set in `other` onto this configuration.
    ///
    /// Paths replace existing ones; flags are enabled if either side enables them.
    pub fn merge(&mut self, other: IndexConfig) {
        if other.text_file.is_some() {
            self.text_file = other.text_file;
        }
        if other.dictionary_file.is_some() {
            self.dictionary_file = other.dictionary_file;
        }
        if other.stop_words_file.is_some() {
            self.stop_words_file = other.stop_words_file;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        self.display_unique_word_count |= other.display_unique_word_count;
        self.drop_undefined_words |= other.drop_undefined_words;
    }
}

fn required<'a>(path: &'a Option<PathBuf>, name: &str) -> Result<&'a Path> {
    path.as_deref()
        .ok_or_else(|| FolioError::invalid_config(format!("{name} is not set")))
}

/// Validated input paths of a build.
#[derive(Debug, Clone, Copy)]
pub struct InputFiles<'a> {
    pub text: &'a Path,
    pub dictionary: &'a Path,
    pub stop_words: &'a Path,
}

#[derive(Default)]
pub struct IndexConfigBuilder {
    config: IndexConfig,
}

impl IndexConfigBuilder {
    pub fn text_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.text_file = Some(path.into());
        self
    }

    pub fn dictionary_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.dictionary_file = Some(path.into());
        self
    }

    pub fn stop_words_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.stop_words_file = Some(path.into());
        self
    }

    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_file = Some(path.into());
        self
    }

    pub fn display_unique_word_count(mut self, display: bool) -> Self {
        self.config.display_unique_word_count = display;
        self
    }

    pub fn drop_undefined_words(mut self, drop: bool) -> Self {
        self.config.drop_undefined_words = drop;
        self
    }

    pub fn build(self) -> IndexConfig {
        self.config
    }
}
