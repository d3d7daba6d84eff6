//! Presentation adapters over `AnalysisResult`.
//!
//! Presenters only format; every number they show was computed by the engine.

pub mod panels;
pub mod window;

use textlens_core::config::{DisplayConfig, OutputFormat};
use textlens_core::models::{AnalysisResult, SentimentScores};

/// Render `result` in the configured format.
pub fn render(
    result: &AnalysisResult,
    display: &DisplayConfig,
) -> Result<String, serde_json::Error> {
    match display.effective_format() {
        OutputFormat::Panels => Ok(panels::render_report(
            result,
            display.effective_min_panel_width(),
        )),
        OutputFormat::Window => Ok(window::render_window(result)),
        OutputFormat::Json => render_json(result),
    }
}

/// Pretty-printed JSON of the full result, unrounded.
pub fn render_json(result: &AnalysisResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

/// Frequency leaderboard lines shared by panels and the window report.
pub fn frequency_lines(result: &AnalysisResult) -> Vec<String> {
    if result.top_words.is_empty() {
        return vec!["No words detected. Add more text to see frequency insights.".to_string()];
    }
    result
        .top_words
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}. {} - {} time(s)", i + 1, entry.word, entry.count))
        .collect()
}

pub(crate) fn fmt_score(value: f64) -> String {
    format!("{value:.3}")
}

pub(crate) fn scores_line(scores: &SentimentScores) -> String {
    format!(
        "Positive: {} | Neutral: {} | Negative: {}",
        fmt_score(scores.positive),
        fmt_score(scores.neutral),
        fmt_score(scores.negative)
    )
}

#[cfg(test)]
mod tests {
    use textlens_core::models::FrequencyEntry;

    use super::*;

    fn result() -> AnalysisResult {
        AnalysisResult {
            word_count: 3,
            chars_with_spaces: 13,
            chars_without_spaces: 11,
            top_words: vec![FrequencyEntry::new("cat", 2), FrequencyEntry::new("dog", 1)],
            sentiment: Some(SentimentScores::neutral().into()),
            preview: "cat dog cat".to_string(),
        }
    }

    #[test]
    fn leaderboard_lines() {
        assert_eq!(
            frequency_lines(&result()),
            vec!["1. cat - 2 time(s)", "2. dog - 1 time(s)"]
        );
    }

    #[test]
    fn empty_leaderboard() {
        let mut r = result();
        r.top_words.clear();
        assert_eq!(
            frequency_lines(&r),
            vec!["No words detected. Add more text to see frequency insights."]
        );
    }

    #[test]
    fn json_keeps_full_precision() {
        let mut r = result();
        r.sentiment = Some(
            SentimentScores {
                positive: 0.123456,
                neutral: 0.876544,
                negative: 0.0,
                compound: 0.5,
            }
            .into(),
        );
        let json = render_json(&r).unwrap();
        assert!(json.contains("0.123456"));
    }

    #[test]
    fn dispatches_on_format() {
        let display = DisplayConfig {
            format: Some(OutputFormat::Window),
            ..Default::default()
        };
        let out = render(&result(), &display).unwrap();
        assert!(out.starts_with("Word count: 3"));

        let out = render(&result(), &DisplayConfig::default()).unwrap();
        assert!(out.starts_with('+'));
    }
}
