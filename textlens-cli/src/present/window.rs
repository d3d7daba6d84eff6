//! The compact report a desktop result window shows.

use textlens_core::models::AnalysisResult;

use super::{fmt_score, frequency_lines};

/// Plain multi-line block, no trailing whitespace.
pub fn render_window(result: &AnalysisResult) -> String {
    let mut lines = vec![
        format!("Word count: {}", result.word_count),
        format!("Characters (with spaces): {}", result.chars_with_spaces),
        format!("Characters (without spaces): {}", result.chars_without_spaces),
        String::new(),
        "Top 5 Words:".to_string(),
    ];
    lines.extend(frequency_lines(result));
    lines.push(String::new());

    match &result.sentiment {
        Some(report) => {
            lines.push(format!("Sentiment: {}", report.label));
            lines.push(format!(
                "Scores -> Pos: {}, Neu: {}, Neg: {}, Compound: {}",
                fmt_score(report.scores.positive),
                fmt_score(report.scores.neutral),
                fmt_score(report.scores.negative),
                fmt_score(report.scores.compound)
            ));
        }
        None => lines.push("Sentiment: unavailable".to_string()),
    }

    lines.join("\n").trim().to_string()
}
