//! Human-readable rendering of a finished index.
//!
//! The report lists every entry in ascending order:
//!
//! ```text
//! Total Unique Words: 1      <- only when requested
//!
//! cat
//!     Definitions:
//!     cat,feline
//!
//!     Pages:
//!     [1, 3]
//! ```
//!
//! (Indentation in the file is a single tab.)

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{FolioError, Result};
use crate::index::{IndexView, Order, OrderedEntries, Page, WordIndex};

/// Printed in place of a missing definition.
pub const ABSENT_DEFINITION: &str = "null";

/// Words per line in a console listing.
pub const WORDS_PER_LINE: usize = 5;

/// Number of entries that occur exactly once.
pub fn count_unique(index: &WordIndex) -> usize {
    index
        .read()
        .iter(Order::Ascending)
        .filter(|(_, entry)| entry.is_unique())
        .count()
}

/// Writes the report of a [`WordIndex`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter {
    include_unique_count: bool,
}

impl ReportFormatter {
    pub fn new(include_unique_count: bool) -> Self {
        ReportFormatter {
            include_unique_count,
        }
    }

    /// Render the report into `writer`.
    pub fn render<W: Write>(&self, index: &WordIndex, writer: &mut W) -> Result<()> {
        if self.include_unique_count {
            write!(writer, "Total Unique Words: {}\n\n", count_unique(index))?;
        }

        for (word, entry) in index.read().iter(Order::Ascending) {
            writeln!(writer, "{word}")?;
            writeln!(writer, "\tDefinitions:")?;
            write!(
                writer,
                "\t{}\n\n",
                entry.definition().unwrap_or(ABSENT_DEFINITION)
            )?;
            writeln!(writer, "\tPages:")?;
            write!(writer, "\t{}\n\n", format_pages(entry.pages()))?;
        }
        Ok(())
    }

    pub fn render_to_string(&self, index: &WordIndex) -> Result<String> {
        let mut buf = Vec::new();
        self.render(index, &mut buf)?;
        String::from_utf8(buf).map_err(|e| {
            FolioError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    /// Create or truncate `path` and write the report into it.
    ///
    /// A failure part-way through leaves the partially written file in place.
    pub fn write_to_path(&self, index: &WordIndex, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| FolioError::output(path, e))?;
        let mut writer = BufWriter::new(file);
        self.render(index, &mut writer).map_err(|e| match e {
            FolioError::Io(source) => FolioError::output(path, source),
            other => other,
        })?;
        writer.flush().map_err(|e| FolioError::output(path, e))
    }
}

/// Render a page list as `[1, 1, 2]`.
pub fn format_pages(pages: &[Page]) -> String {
    let pages: Vec<String> = pages.iter().map(ToString::to_string).collect();
    format!("[{}]", pages.join(", "))
}

/// Lazily group the words of `view` into comma-separated lines.
pub fn word_lines<'a>(view: &'a IndexView<'_>, order: Order) -> WordLines<'a> {
    WordLines {
        entries: view.iter(order),
        per_line: WORDS_PER_LINE,
    }
}

/// Iterator over listing lines of at most [`WORDS_PER_LINE`] words.
pub struct WordLines<'a> {
    entries: OrderedEntries<'a>,
    per_line: usize,
}

impl Iterator for WordLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let words: Vec<&str> = self
            .entries
            .by_ref()
            .take(self.per_line)
            .map(|(word, _)| word)
            .collect();
        if words.is_empty() {
            None
        } else {
            Some(words.join(", "))
        }
    }
}
