//! Concurrent stop-word lookup set.

use ahash::AHashSet;
use parking_lot::RwLock;

/// Case-folded stop words collected by concurrent stop-word tasks.
#[derive(Debug, Default)]
pub struct StopWordSet {
    words: RwLock<AHashSet<String>>,
}

impl StopWordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the word was not present yet.
    pub fn insert(&self, word: impl Into<String>) -> bool {
        self.words.write().insert(word.into())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.read().contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.read().is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        StopWordSet {
            words: RwLock::new(iter.into_iter().map(Into::into).collect()),
        }
    }
}
