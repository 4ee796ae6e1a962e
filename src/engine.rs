pub mod config;
pub mod filter;
pub mod pass;
pub mod policy;

use std::time::Instant;

use crate::analysis::{AlphabeticTokenizer, Tokenizer, WhitespaceTokenizer};
use crate::error::Result;
use crate::index::{StopWordSet, WordIndex};
use crate::report::ReportFormatter;

use self::config::IndexConfig;
use self::filter::PostFilter;
use self::pass::PassStats;
use self::policy::{IndexPolicy, Pass};

/// Builds one variant of the index from a text, a dictionary and a stop-word list.
///
/// Each call to [`IndexBuilder::build`] is an independent one-shot batch: it owns
/// a fresh [`WordIndex`], stop-word set and page counter, runs the three passes
/// in policy order, then prunes the result with the [`PostFilter`].
///
/// # Example
///
/// ```no_run
/// use folio::{IndexBuilder, IndexConfig, IndexPolicy};
///
/// let config = IndexConfig::builder()
///     .text_file("book.txt")
///     .dictionary_file("dictionary.csv")
///     .stop_words_file("stopwords.txt")
///     .output_file("index.txt")
///     .display_unique_word_count(true)
///     .build();
///
/// let builder = IndexBuilder::new(IndexPolicy::Exclusive, config);
/// let index = builder.build_and_write()?;
/// println!("{} words indexed", index.len());
/// # Ok::<(), folio::FolioError>(())
/// ```
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    policy: IndexPolicy,
    config: IndexConfig,
    text_tokenizer: AlphabeticTokenizer,
    stop_word_tokenizer: WhitespaceTokenizer,
}

impl IndexBuilder {
    pub fn new(policy: IndexPolicy, config: IndexConfig) -> Self {
        IndexBuilder {
            policy,
            config,
            text_tokenizer: AlphabeticTokenizer::new(),
            stop_word_tokenizer: WhitespaceTokenizer::new(),
        }
    }

    /// Builder for the index that excludes stop words.
    pub fn exclusive(config: IndexConfig) -> Self {
        Self::new(IndexPolicy::Exclusive, config)
    }

    /// Builder for the alternate index of stop words only.
    pub fn inclusive(config: IndexConfig) -> Self {
        Self::new(IndexPolicy::Inclusive, config)
    }

    pub fn policy(&self) -> IndexPolicy {
        self.policy
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Run all passes and the post filter, returning the finished index.
    ///
    /// The three input paths must be configured; a missing path is rejected
    /// before any file is opened.
    pub fn build(&self) -> Result<WordIndex> {
        let inputs = self.config.inputs()?;
        let start = Instant::now();
        log::info!(
            "building {} from {} (text: {} tokenizer, stop words: {} tokenizer)",
            self.policy.name(),
            inputs.text.display(),
            self.text_tokenizer.name(),
            self.stop_word_tokenizer.name()
        );

        let index = WordIndex::new();
        let stop_words = StopWordSet::new();

        for pass in self.policy.passes() {
            let result = match pass {
                Pass::StopWords => pass::stop_words_pass(
                    inputs.stop_words,
                    self.policy,
                    &self.stop_word_tokenizer,
                    &index,
                    &stop_words,
                ),
                Pass::Dictionary => pass::dictionary_pass(inputs.dictionary, &index),
                Pass::Text => {
                    pass::text_pass(inputs.text, self.policy, &self.text_tokenizer, &index)
                }
            };
            let stats: PassStats = result.inspect_err(|e| {
                log::warn!("{} build aborted in {} pass: {e}", self.policy.name(), pass.name());
            })?;
            log::info!(
                "{} pass read {} lines, index holds {} entries",
                stats.pass.name(),
                stats.lines,
                index.len()
            );
        }

        PostFilter::new(self.policy, self.config.drop_undefined_words).apply(&index, &stop_words);

        log::info!(
            "built {} with {} entries in {:?}",
            self.policy.name(),
            index.len(),
            start.elapsed()
        );
        Ok(index)
    }

    /// Build the index and write the report to the configured output file.
    ///
    /// All four paths are checked before the build starts.
    pub fn build_and_write(&self) -> Result<WordIndex> {
        self.config.validate()?;
        let index = self.build()?;
        let output = self.config.output()?;
        ReportFormatter::new(self.config.display_unique_word_count).write_to_path(&index, output)?;
        log::info!("wrote {} report to {}", self.policy.name(), output.display());
        Ok(index)
    }
}
