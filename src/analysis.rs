//! Text analysis for index builds.
//!
//! Every input line passes through a [`Tokenizer`] before it touches the index:
//!
//! ```text
//! Line → Tokenizer → Case-folded Tokens
//! ```
//!
//! - [`AlphabeticTokenizer`]: text and prose lines. Anything outside `[a-zA-Z]`
//!   separates words.
//! - [`WhitespaceTokenizer`]: stop-word lists. Words are split on whitespace and
//!   case-folded but otherwise kept as written.
//!
//! # Examples
//!
//! ```
//! use folio::analysis::{AlphabeticTokenizer, Tokenizer};
//!
//! let tokens = AlphabeticTokenizer::new().tokenize("The Cat sat.");
//! assert_eq!(tokens, vec!["the", "cat", "sat"]);
//! ```

pub mod tokenizer;

pub use tokenizer::{AlphabeticTokenizer, Tokenizer, WhitespaceTokenizer};
