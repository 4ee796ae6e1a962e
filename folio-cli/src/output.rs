use std::path::Path;

use clap::ValueEnum;
use folio::{IndexPolicy, Order, WordIndex, count_unique, word_lines};
use serde::Serialize;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    Table,
    /// JSON output.
    Json,
}

/// Figures describing a finished build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
    pub variant: String,
    pub entries: usize,
    pub unique_words: usize,
    pub defined_words: usize,
    pub output: Option<String>,
}

impl BuildSummary {
    pub fn new(policy: IndexPolicy, index: &WordIndex, output: Option<&Path>) -> Self {
        let defined_words = index
            .read()
            .iter(Order::Ascending)
            .filter(|(_, entry)| entry.has_definition())
            .count();
        BuildSummary {
            variant: policy.name().to_string(),
            entries: index.len(),
            unique_words: count_unique(index),
            defined_words,
            output: output.map(|path| path.display().to_string()),
        }
    }
}

/// Print a build summary.
pub fn print_build_summary(summary: &BuildSummary, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&json!(summary)),
        OutputFormat::Table => {
            let rows = vec![
                SummaryRow::new("Variant", &summary.variant),
                SummaryRow::new("Entries", summary.entries),
                SummaryRow::new("Unique words", summary.unique_words),
                SummaryRow::new("Defined words", summary.defined_words),
                SummaryRow::new("Report", summary.output.as_deref().unwrap_or("-")),
            ];
            let table = Table::new(&rows).with(Style::rounded()).to_string();
            println!("{table}");
        }
    }
}

/// Print every word of the index, five per line.
pub fn print_words(index: &WordIndex, order: Order, format: OutputFormat) {
    let view = index.read();
    match format {
        OutputFormat::Json => {
            let words: Vec<&str> = view.words(order).collect();
            print_json(&json!({
                "order": order,
                "count": words.len(),
                "words": words,
            }));
        }
        OutputFormat::Table => {
            if view.is_empty() {
                println!("No words in index.");
                return;
            }
            for line in word_lines(&view, order) {
                println!("{line}");
            }
        }
    }
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("Error: failed to render JSON: {e}"),
    }
}

// --- Helper types ---

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

impl SummaryRow {
    fn new(field: &'static str, value: impl ToString) -> Self {
        SummaryRow {
            field,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_summary_counts() {
        let index = WordIndex::new();
        for word in ["the", "quick", "fox", "fox"] {
            index.upsert_with_page(word, 1);
        }
        index.set_definition("fox", "fox,a small wild canid");

        let summary = BuildSummary::new(IndexPolicy::Exclusive, &index, Some(Path::new("out.txt")));
        assert_eq!(summary.variant, "index");
        assert_eq!(summary.entries, 3);
        assert_eq!(summary.unique_words, 2);
        assert_eq!(summary.defined_words, 1);
        assert_eq!(summary.output.as_deref(), Some("out.txt"));
    }

    #[test]
    fn test_build_summary_serializes() {
        let index = WordIndex::new();
        let summary = BuildSummary::new(IndexPolicy::Inclusive, &index, None);
        let value = json!(summary);
        assert_eq!(value["variant"], "alternate index");
        assert_eq!(value["entries"], 0);
        assert!(value["output"].is_null());
    }
}
