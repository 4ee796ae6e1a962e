use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

use folio::{IndexBuilder, IndexConfig, IndexPolicy, Order, WordIndex};

fn write_inputs(dir: &Path, text: &str, dictionary: &str, stop_words: &str) -> IndexConfig {
    fs::write(dir.join("text.txt"), text).unwrap();
    fs::write(dir.join("dictionary.csv"), dictionary).unwrap();
    fs::write(dir.join("stopwords.txt"), stop_words).unwrap();
    IndexConfig::builder()
        .text_file(dir.join("text.txt"))
        .dictionary_file(dir.join("dictionary.csv"))
        .stop_words_file(dir.join("stopwords.txt"))
        .output_file(dir.join("alternate.txt"))
        .build()
}

fn words(index: &WordIndex) -> Vec<String> {
    index
        .read()
        .words(Order::Ascending)
        .map(str::to_owned)
        .collect()
}

const TEXT: &str = "\
It was the best of times, it was the worst of times.
It was the age of wisdom; it was the age of foolishness.
We had everything before us, we had nothing before us.";

#[test]
fn test_alternate_index_contains_only_stop_words() -> folio::Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let stop_words = "the of it was\nwe had before\nus into onto\n";
    let config = write_inputs(temp_dir.path(), TEXT, "", stop_words);

    let index = IndexBuilder::inclusive(config).build()?;
    let allowed: HashSet<&str> = stop_words.split_whitespace().collect();
    for word in words(&index) {
        assert!(allowed.contains(word.as_str()), "{word} is not a stop word");
    }

    // Stop words that never occur in the text are pruned.
    assert!(!index.contains("into"));
    assert!(!index.contains("onto"));
    assert_eq!(
        words(&index),
        vec!["before", "had", "it", "of", "the", "us", "was", "we"]
    );
    Ok(())
}

#[test]
fn test_alternate_index_counts_every_occurrence() -> folio::Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = write_inputs(temp_dir.path(), TEXT, "", "The OF");

    let index = IndexBuilder::inclusive(config).build()?;
    assert_eq!(index.get("the").unwrap().pages(), &[1, 1, 1, 1]);
    assert_eq!(index.get("of").unwrap().pages(), &[1, 1, 1, 1]);
    assert_eq!(index.len(), 2);
    Ok(())
}

#[test]
fn test_alternate_index_never_adds_text_words() -> folio::Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = write_inputs(temp_dir.path(), TEXT, "wisdom,knowledge", "");

    let index = IndexBuilder::inclusive(config).build()?;
    assert!(index.is_empty());
    Ok(())
}

#[test]
fn test_alternate_index_definitions_and_drop_undefined() -> folio::Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = write_inputs(
        temp_dir.path(),
        TEXT,
        "the,definite article\nof,expressing relationship\ninto,expressing movement",
        "the of into was",
    );

    let index = IndexBuilder::inclusive(config.clone()).build()?;
    assert_eq!(words(&index), vec!["of", "the", "was"]);
    assert_eq!(
        index.get("the").unwrap().definition(),
        Some("the,definite article")
    );
    assert_eq!(index.get("was").unwrap().definition(), None);

    // "into" has a definition but no occurrence; the occurrence filter removes it
    // whether or not undefined words are dropped.
    let mut config = config;
    config.drop_undefined_words = true;
    let index = IndexBuilder::inclusive(config).build()?;
    assert_eq!(words(&index), vec!["of", "the"]);
    Ok(())
}

#[test]
fn test_alternate_index_pages_across_page_breaks() -> folio::Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let mut text = String::new();
    for line in 1..=120 {
        if line % 30 == 0 {
            text.push_str("and so it goes\n");
        } else {
            text.push_str("nothing to see here\n");
        }
    }
    let config = write_inputs(temp_dir.path(), &text, "", "and so");

    let index = IndexBuilder::inclusive(config).build()?;
    // Lines 30, 60, 90 and 120 fall on pages 1, 2, 3 and 3.
    assert_eq!(index.get("and").unwrap().pages(), &[1, 2, 3, 3]);
    assert_eq!(index.get("so").unwrap().pages(), &[1, 2, 3, 3]);
    Ok(())
}

#[test]
fn test_variants_are_complementary() -> folio::Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = write_inputs(temp_dir.path(), TEXT, "", "the of it was");

    let exclusive = IndexBuilder::new(IndexPolicy::Exclusive, config.clone()).build()?;
    let inclusive = IndexBuilder::new(IndexPolicy::Inclusive, config).build()?;

    let exclusive_words: HashSet<String> = words(&exclusive).into_iter().collect();
    let inclusive_words: HashSet<String> = words(&inclusive).into_iter().collect();
    assert!(exclusive_words.is_disjoint(&inclusive_words));
    assert_eq!(inclusive_words.len(), 4);
    assert!(exclusive_words.contains("wisdom"));
    Ok(())
}
