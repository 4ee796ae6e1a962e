//! In-memory index structures shared by ingestion tasks.
//!
//! - [`WordEntry`]: definition and page occurrences of one word.
//! - [`WordIndex`]: ordered, lock-guarded map of word to entry.
//! - [`StopWordSet`]: concurrent set of stop words for the exclusive policy.

pub mod entry;
pub mod stop_words;
pub mod word_index;

pub use entry::{Page, WordEntry};
pub use stop_words::StopWordSet;
pub use word_index::{IndexView, Order, OrderedEntries, WordIndex};
