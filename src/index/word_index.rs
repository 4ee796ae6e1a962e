//! Shared ordered word index.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::iter::Rev;

use parking_lot::{RwLock, RwLockReadGuard};
use serde::{Deserialize, Serialize};

use crate::index::entry::{Page, WordEntry};

/// Traversal order for index iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    /// Lexicographic order (a-z).
    #[default]
    Ascending,
    /// Reverse lexicographic order (z-a).
    Descending,
}

impl Order {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Order::Ascending
        } else {
            Order::Descending
        }
    }
}

/// Thread-safe mapping of word to [`WordEntry`], ordered by word.
///
/// Every operation takes `&self`; the map is guarded by a single [`RwLock`], so
/// ingestion tasks may call any of them concurrently on the same or different
/// keys without losing inserts. Each key always equals the `word` of its entry.
///
/// # Example
///
/// ```
/// use folio::index::{Order, WordIndex};
///
/// let index = WordIndex::new();
/// index.upsert_with_page("fox", 1);
/// index.upsert_with_page("cat", 2);
/// index.upsert_with_page("fox", 2);
///
/// let view = index.read();
/// let words: Vec<&str> = view.words(Order::Ascending).collect();
/// assert_eq!(words, vec!["cat", "fox"]);
/// assert_eq!(view.get("fox").unwrap().pages(), &[1, 2]);
/// ```
#[derive(Debug, Default)]
pub struct WordIndex {
    entries: RwLock<BTreeMap<String, WordEntry>>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an occurrence of `word` on `page`, creating the entry on first sight.
    pub fn upsert_with_page(&self, word: &str, page: Page) {
        let mut entries = self.entries.write();
        match entries.get_mut(word) {
            Some(entry) => entry.add_page(page),
            None => {
                let mut entry = WordEntry::new(word);
                entry.add_page(page);
                entries.insert(word.to_owned(), entry);
            }
        }
    }

    /// Record an occurrence of `word` on `page` only if the word is already indexed.
    ///
    /// Returns `true` if an entry was annotated. Never grows the index.
    pub fn annotate_if_present(&self, word: &str, page: Page) -> bool {
        match self.entries.write().get_mut(word) {
            Some(entry) => {
                entry.add_page(page);
                true
            }
            None => false,
        }
    }

    /// Insert an empty entry for `word` if it is not indexed yet.
    ///
    /// Returns `true` if a new entry was created.
    pub fn seed(&self, word: &str) -> bool {
        let mut entries = self.entries.write();
        if entries.contains_key(word) {
            return false;
        }
        entries.insert(word.to_owned(), WordEntry::new(word));
        true
    }

    /// Overwrite the definition of `word` if it is indexed.
    ///
    /// Returns `true` if an entry was updated.
    pub fn set_definition(&self, word: &str, definition: &str) -> bool {
        match self.entries.write().get_mut(word) {
            Some(entry) => {
                entry.set_definition(definition);
                true
            }
            None => false,
        }
    }

    /// Overwrite the definition of `word` with one read from dictionary line `line`.
    ///
    /// A definition that came from a later line is kept, so concurrent dictionary
    /// tasks produce the same result as reading the file top to bottom.
    /// Returns `true` if the definition was replaced.
    pub fn set_definition_from_line(&self, word: &str, definition: &str, line: usize) -> bool {
        match self.entries.write().get_mut(word) {
            Some(entry) => entry.set_definition_from_line(definition, line),
            None => false,
        }
    }

    pub fn remove(&self, word: &str) -> Option<WordEntry> {
        self.entries.write().remove(word)
    }

    /// Remove every entry matching `predicate`, returning how many were removed.
    pub fn remove_where<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&WordEntry) -> bool,
    {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !predicate(entry));
        before - entries.len()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.read().contains_key(word)
    }

    /// Snapshot of a single entry.
    pub fn get(&self, word: &str) -> Option<WordEntry> {
        self.entries.read().get(word).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Lock the index for reading.
    ///
    /// Writers block until the returned view is dropped.
    pub fn read(&self) -> IndexView<'_> {
        IndexView {
            entries: self.entries.read(),
        }
    }

    /// Consume the index into its ordered entries.
    pub fn into_entries(self) -> BTreeMap<String, WordEntry> {
        self.entries.into_inner()
    }
}

/// Read-locked view over a [`WordIndex`].
///
/// [`IndexView::iter`] can be called any number of times; each call starts a
/// fresh lazy traversal.
pub struct IndexView<'a> {
    entries: RwLockReadGuard<'a, BTreeMap<String, WordEntry>>,
}

impl IndexView<'_> {
    pub fn iter(&self, order: Order) -> OrderedEntries<'_> {
        match order {
            Order::Ascending => OrderedEntries::Ascending(self.entries.iter()),
            Order::Descending => OrderedEntries::Descending(self.entries.iter().rev()),
        }
    }

    pub fn words(&self, order: Order) -> impl Iterator<Item = &str> + '_ {
        self.iter(order).map(|(word, _)| word)
    }

    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Iterator over `(word, entry)` pairs in a chosen [`Order`].
pub enum OrderedEntries<'a> {
    Ascending(btree_map::Iter<'a, String, WordEntry>),
    Descending(Rev<btree_map::Iter<'a, String, WordEntry>>),
}

impl<'a> Iterator for OrderedEntries<'a> {
    type Item = (&'a str, &'a WordEntry);

    fn next(&mut self) -> Option<Self::Item> {
        let (word, entry) = match self {
            OrderedEntries::Ascending(iter) => iter.next()?,
            OrderedEntries::Descending(iter) => iter.next()?,
        };
        Some((word.as_str(), entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            OrderedEntries::Ascending(iter) => iter.size_hint(),
            OrderedEntries::Descending(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for OrderedEntries<'_> {}
