//! Post-ingestion pruning.

use crate::engine::policy::IndexPolicy;
use crate::index::{StopWordSet, WordIndex};

/// Removes entries that must not appear in the finished index.
///
/// - Exclusive: the empty key, then every stop word.
/// - Inclusive: every entry that never occurred in the text.
///
/// Either policy then drops undefined words if requested. Applying the filter a
/// second time removes nothing.
#[derive(Debug, Clone, Copy)]
pub struct PostFilter {
    policy: IndexPolicy,
    drop_undefined_words: bool,
}

impl PostFilter {
    pub fn new(policy: IndexPolicy, drop_undefined_words: bool) -> Self {
        PostFilter {
            policy,
            drop_undefined_words,
        }
    }

    /// Prune `index`, returning the number of removed entries.
    pub fn apply(&self, index: &WordIndex, stop_words: &StopWordSet) -> usize {
        let mut removed = match self.policy {
            IndexPolicy::Exclusive => {
                let empty = usize::from(index.remove("").is_some());
                empty + index.remove_where(|entry| stop_words.contains(entry.word()))
            }
            IndexPolicy::Inclusive => index.remove_where(|entry| entry.pages().is_empty()),
        };

        if self.drop_undefined_words {
            removed += index.remove_where(|entry| !entry.has_definition());
        }

        log::debug!(
            "{} filter removed {removed} entries, {} remain",
            self.policy.name(),
            index.len()
        );
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Order;

    fn words(index: &WordIndex) -> Vec<String> {
        index
            .read()
            .words(Order::Ascending)
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn test_exclusive_filter() {
        let index = WordIndex::new();
        for word in ["", "the", "cat", "a", "dog"] {
            index.upsert_with_page(word, 1);
        }
        index.set_definition("cat", "cat,feline");
        let stop_words: StopWordSet = ["the", "a", "an"].into_iter().collect();

        let removed = PostFilter::new(IndexPolicy::Exclusive, false).apply(&index, &stop_words);
        assert_eq!(removed, 3);
        assert_eq!(words(&index), vec!["cat", "dog"]);
    }

    #[test]
    fn test_exclusive_filter_drop_undefined() {
        let index = WordIndex::new();
        for word in ["the", "cat", "dog"] {
            index.upsert_with_page(word, 1);
        }
        index.set_definition("cat", "cat,feline");
        let stop_words: StopWordSet = ["the"].into_iter().collect();

        PostFilter::new(IndexPolicy::Exclusive, true).apply(&index, &stop_words);
        assert_eq!(words(&index), vec!["cat"]);
    }

    #[test]
    fn test_inclusive_filter() {
        let index = WordIndex::new();
        for word in ["the", "a", "of"] {
            index.seed(word);
        }
        index.annotate_if_present("the", 1);
        index.annotate_if_present("of", 2);
        index.set_definition("of", "of,belonging to");

        let stop_words = StopWordSet::new();
        let removed = PostFilter::new(IndexPolicy::Inclusive, false).apply(&index, &stop_words);
        assert_eq!(removed, 1);
        assert_eq!(words(&index), vec!["of", "the"]);

        PostFilter::new(IndexPolicy::Inclusive, true).apply(&index, &stop_words);
        assert_eq!(words(&index), vec!["of"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let index = WordIndex::new();
        for word in ["", "the", "cat", "sat"] {
            index.upsert_with_page(word, 1);
        }
        index.set_definition("cat", "cat,feline");
        let stop_words: StopWordSet = ["the"].into_iter().collect();
        let filter = PostFilter::new(IndexPolicy::Exclusive, true);

        filter.apply(&index, &stop_words);
        let once = index.read().iter(Order::Ascending).map(|(_, e)| e.clone()).collect::<Vec<_>>();
        assert_eq!(filter.apply(&index, &stop_words), 0);
        let twice = index.read().iter(Order::Ascending).map(|(_, e)| e.clone()).collect::<Vec<_>>();
        assert_eq!(once, twice);
    }
}
