//! Build policies.
//!
//! Both index variants run the same three passes. An [`IndexPolicy`] decides
//! their order and which [`WordIndex`] operation each pass calls.

use serde::{Deserialize, Serialize};

use crate::index::{Page, StopWordSet, WordIndex};

/// One ingestion pass over an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    StopWords,
    Dictionary,
    Text,
}

impl Pass {
    pub fn name(&self) -> &'static str {
        match self {
            Pass::StopWords => "stop words",
            Pass::Dictionary => "dictionary",
            Pass::Text => "text",
        }
    }
}

/// Which words end up in the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexPolicy {
    /// Every text word except the stop words ("Index").
    #[default]
    Exclusive,
    /// Only the stop words that occur in the text ("Alternate Index").
    Inclusive,
}

impl IndexPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            IndexPolicy::Exclusive => "index",
            IndexPolicy::Inclusive => "alternate index",
        }
    }

    /// Pass order for this policy.
    ///
    /// Definitions can only attach to existing entries, so the dictionary pass
    /// follows whichever pass creates them.
    pub fn passes(&self) -> [Pass; 3] {
        match self {
            IndexPolicy::Exclusive => [Pass::StopWords, Pass::Text, Pass::Dictionary],
            IndexPolicy::Inclusive => [Pass::StopWords, Pass::Dictionary, Pass::Text],
        }
    }

    /// Handle one token of the stop-words file.
    pub fn collect_stop_word(&self, token: String, index: &WordIndex, stop_words: &StopWordSet) {
        match self {
            IndexPolicy::Exclusive => {
                stop_words.insert(token);
            }
            IndexPolicy::Inclusive => {
                index.seed(&token);
            }
        }
    }

    /// Handle one token of the text file found on `page`.
    pub fn record_occurrence(&self, token: &str, page: Page, index: &WordIndex) {
        match self {
            IndexPolicy::Exclusive => index.upsert_with_page(token, page),
            IndexPolicy::Inclusive => {
                index.annotate_if_present(token, page);
            }
        }
    }
}
