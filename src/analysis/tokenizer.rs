//! Line tokenizers.

/// Splits one raw input line into case-folded tokens.
///
/// Tokenizers are shared by every task of a pass, so they must be `Send + Sync`.
pub trait Tokenizer: Send + Sync + std::fmt::Debug {
    /// Tokenize a single line.
    fn tokenize(&self, line: &str) -> Vec<String>;

    /// Name of this tokenizer, used in log output.
    fn name(&self) -> &'static str;
}

/// Tokenizer for prose lines.
///
/// The line is lower-cased and trimmed, every character outside `[a-zA-Z]`
/// becomes a separator, and the remainder is split on whitespace runs.
/// A line with no alphabetic characters yields a single empty token; the
/// exclusive post filter removes that key after ingestion.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphabeticTokenizer;

impl AlphabeticTokenizer {
    pub fn new() -> Self {
        AlphabeticTokenizer
    }
}

impl Tokenizer for AlphabeticTokenizer {
    fn tokenize(&self, line: &str) -> Vec<String> {
        let normalized: String = line
            .to_lowercase()
            .trim()
            .chars()
            .map(|c| if c.is_ascii_alphabetic() { c } else { ' ' })
            .collect();

        let tokens: Vec<String> = normalized.split_whitespace().map(str::to_owned).collect();
        if tokens.is_empty() {
            vec![String::new()]
        } else {
            tokens
        }
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}

/// Tokenizer for stop-word lists.
///
/// Splits on whitespace and case-folds each word. Punctuation is kept, so a
/// stop word such as `don't` only ever matches the same literal key.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_lowercase).collect()
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
