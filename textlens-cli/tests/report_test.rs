//! Presenters over a real engine: every format shows the same numbers.

use std::sync::Arc;

use textlens_analysis::{Lexicon, TextMetricsEngine};
use textlens_cli::present::{self, panels, window};
use textlens_core::config::{DisplayConfig, OutputFormat};
use textlens_core::models::AnalysisResult;

fn engine() -> TextMetricsEngine {
    let lexicon = Lexicon::from_entries([
        ("love", 3.2),
        ("wonderful", 2.7),
        ("great", 3.1),
        ("hate", -2.7),
    ]);
    TextMetricsEngine::with_lexicon(Arc::new(lexicon))
}

fn display(format: OutputFormat) -> DisplayConfig {
    DisplayConfig {
        format: Some(format),
        ..Default::default()
    }
}

#[test]
fn panels_report_for_positive_text() {
    let result = engine().analyze("I love this! It is wonderful and great.");
    let out = present::render(&result, &display(OutputFormat::Panels)).unwrap();

    assert!(out.contains("Word count: 8"));
    assert!(out.contains("Overall tone: Positive"));
    assert!(out.contains("Most Frequent Words"));
    assert!(out.contains("1. i - 1 time(s)"));
    // Every boxed row has the same width.
    let widths: Vec<usize> = out
        .lines()
        .filter(|l| l.starts_with('|'))
        .map(|l| l.chars().count())
        .collect();
    assert!(widths.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn window_and_json_agree() {
    let result = engine().analyze("I hate rain. I love sun. I love tea.");

    let block = window::render_window(&result);
    assert!(block.contains("1. i - 3 time(s)"));
    assert!(block.contains("2. love - 2 time(s)"));

    let json = present::render(&result, &display(OutputFormat::Json)).unwrap();
    let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.word_count, result.word_count);
    assert_eq!(parsed.top_words, result.top_words);
    assert_eq!(
        parsed.sentiment.map(|s| s.label),
        result.sentiment.map(|s| s.label)
    );

    let report = result.sentiment.unwrap();
    assert!(block.contains(&format!("Sentiment: {}", report.label)));
    assert!(block.contains(&format!("Compound: {:.3}", report.scores.compound)));
}

#[test]
fn long_preview_is_truncated_and_wrapped() {
    let text = "word ".repeat(100);
    let result = engine().with_preview_chars(40).analyze(&text);
    assert!(result.preview.ends_with("..."));

    let out = panels::render_report(&result, 48);
    assert!(out.contains("Sample preview: word word"));
    assert!(out.contains("1. word - 100 time(s)"));
}
