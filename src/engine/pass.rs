//! Ingestion passes.
//!
//! The stop-words and dictionary passes spawn one task per line inside a
//! [`rayon::scope`], which doubles as the end-of-pass barrier. The text pass is
//! sequential because page numbers depend on line order.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::analysis::Tokenizer;
use crate::engine::policy::{IndexPolicy, Pass};
use crate::error::{FolioError, Result};
use crate::index::{Page, StopWordSet, WordIndex};

/// Number of text lines that make up one page.
pub const LINES_PER_PAGE: usize = 40;

/// Outcome of one completed pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassStats {
    pub pass: Pass,
    pub lines: usize,
}

/// Page number of the line being consumed.
///
/// Starts at page 1 and turns the page after every [`LINES_PER_PAGE`] lines.
#[derive(Debug, Clone)]
pub struct PageCounter {
    page: Page,
    lines: usize,
}

impl PageCounter {
    pub fn new() -> Self {
        PageCounter { page: 1, lines: 0 }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Mark the current line as consumed.
    pub fn advance(&mut self) {
        self.lines += 1;
        if self.lines % LINES_PER_PAGE == 0 {
            self.page += 1;
        }
    }

    pub fn lines(&self) -> usize {
        self.lines
    }
}

impl Default for PageCounter {
    fn default() -> Self {
        Self::new()
    }
}

fn open_lines(path: &Path) -> Result<Lines<BufReader<File>>> {
    let file = File::open(path).map_err(|e| FolioError::input_unavailable(path, e))?;
    Ok(BufReader::new(file).lines())
}

/// Spawn `task` for every line of `path` and wait for all of them.
///
/// `task` receives the 1-based line number and the line. A read error stops
/// dispatching; tasks already spawned still finish before the error is returned.
fn dispatch_lines<F>(path: &Path, task: F) -> Result<usize>
where
    F: Fn(usize, String) + Sync,
{
    let lines = open_lines(path)?;
    let task = &task;
    rayon::scope(|scope| {
        let mut count = 0;
        for line in lines {
            let line = line.map_err(|e| FolioError::input_unavailable(path, e))?;
            count += 1;
            let number = count;
            scope.spawn(move |_| task(number, line));
        }
        Ok(count)
    })
}

/// Read the stop-words file.
///
/// Exclusive builds collect the words into `stop_words`; inclusive builds seed
/// them into `index`.
pub fn stop_words_pass(
    path: &Path,
    policy: IndexPolicy,
    tokenizer: &dyn Tokenizer,
    index: &WordIndex,
    stop_words: &StopWordSet,
) -> Result<PassStats> {
    let lines = dispatch_lines(path, |_, line| {
        for token in tokenizer.tokenize(&line) {
            policy.collect_stop_word(token, index, stop_words);
        }
    })?;
    Ok(PassStats {
        pass: Pass::StopWords,
        lines,
    })
}

/// Split a dictionary line into its lookup key.
///
/// The line is case-folded and trimmed, and everything before the first comma is
/// the key. Lines without a comma or with an empty key have no key.
pub fn dictionary_key(line: &str) -> Option<String> {
    let normalized = line.to_lowercase();
    let (key, _) = normalized.trim().split_once(',')?;
    if key.is_empty() {
        None
    } else {
        Some(key.to_owned())
    }
}

/// Read the dictionary file, attaching each full line as the definition of its key.
pub fn dictionary_pass(path: &Path, index: &WordIndex) -> Result<PassStats> {
    let lines = dispatch_lines(path, |number, line| {
        if let Some(key) = dictionary_key(&line) {
            index.set_definition_from_line(&key, &line, number);
        }
    })?;
    Ok(PassStats {
        pass: Pass::Dictionary,
        lines,
    })
}

/// Read the text file in order, recording each token on its page.
pub fn text_pass(
    path: &Path,
    policy: IndexPolicy,
    tokenizer: &dyn Tokenizer,
    index: &WordIndex,
) -> Result<PassStats> {
    let mut counter = PageCounter::new();
    for line in open_lines(path)? {
        let line = line.map_err(|e| FolioError::input_unavailable(path, e))?;
        let page = counter.page();
        for token in tokenizer.tokenize(&line) {
            policy.record_occurrence(&token, page, index);
        }
        counter.advance();
    }
    Ok(PassStats {
        pass: Pass::Text,
        lines: counter.lines(),
    })
}
