//! # Folio
//!
//! Builds a back-of-book index from a plain text document.
//!
//! ## Features
//!
//! - Page numbers for every occurrence of every word (40 lines per page)
//! - Definitions attached from a `word,definition` dictionary file
//! - Two variants: an index that excludes stop words, and an alternate index of
//!   stop words only
//! - Concurrent ingestion of the stop-word and dictionary files
//! - Plain text report and ordered word listings

pub mod analysis;
mod engine;
mod error;
pub mod index;
pub mod report;

// Re-exports for the public API
pub use engine::IndexBuilder;
pub use engine::config::{IndexConfig, IndexConfigBuilder, InputFiles};
pub use engine::filter::PostFilter;
pub use engine::pass::{LINES_PER_PAGE, PageCounter, PassStats, dictionary_key};
pub use engine::policy::{IndexPolicy, Pass};
pub use error::{FolioError, Result};
pub use index::{Order, StopWordSet, WordEntry, WordIndex};
pub use report::{ReportFormatter, count_unique, word_lines};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
