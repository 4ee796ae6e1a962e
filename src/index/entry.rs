//! Per-word index record.

use serde::Serialize;

/// Page number inside the indexed text. Pages are 1-indexed.
pub type Page = u32;

/// Definition and page occurrences of one indexed word.
///
/// The word is fixed at creation. Pages are append-only and keep duplicates, so
/// a word seen twice on page 3 records `[3, 3]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    word: String,
    definition: Option<String>,
    #[serde(skip)]
    definition_line: Option<usize>,
    pages: Vec<Page>,
}

impl WordEntry {
    pub fn new(word: impl Into<String>) -> Self {
        WordEntry {
            word: word.into(),
            definition: None,
            definition_line: None,
            pages: Vec::new(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }

    /// Pages this word occurs on, in the order they were recorded.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn has_definition(&self) -> bool {
        self.definition.is_some()
    }

    /// A word is unique when it occurs exactly once in the text.
    pub fn is_unique(&self) -> bool {
        self.pages.len() == 1
    }

    /// Total number of recorded occurrences.
    pub fn occurrences(&self) -> usize {
        self.pages.len()
    }

    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Overwrite the definition unconditionally.
    pub fn set_definition(&mut self, definition: impl Into<String>) {
        self.definition = Some(definition.into());
        self.definition_line = None;
    }

    /// Overwrite the definition unless it already came from a later source line.
    ///
    /// Dictionary lines are applied by concurrent tasks in any order; comparing
    /// line numbers keeps the result equal to a sequential last-write-wins pass.
    /// Returns `true` if the definition was replaced.
    pub fn set_definition_from_line(&mut self, definition: impl Into<String>, line: usize) -> bool {
        if self.definition_line.is_some_and(|current| current > line) {
            return false;
        }
        self.definition = Some(definition.into());
        self.definition_line = Some(line);
        true
    }
}
