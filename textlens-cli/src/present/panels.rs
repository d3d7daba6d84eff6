//! Boxed console panels.

use textlens_core::models::AnalysisResult;

use super::{fmt_score, frequency_lines, scores_line};

const BANNER_WIDTH: usize = 74;

/// Closing line printed after the interactive report.
pub const CLOSING_LINE: &str = "Thanks for exploring your text with this analyzer.";

/// The welcome banner.
pub fn banner() -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!(
        "{rule}\n{:^w$}\n{:^w$}\n{rule}\n",
        "TEXT ANALYZER",
        "Text insights ready in seconds",
        w = BANNER_WIDTH
    )
}

/// Render one panel: centred title, separator, wrapped body, borders.
///
/// The inner width is the widest of the title plus four, the longest line,
/// and `min_width`. Output ends with a blank line.
pub fn render_panel(title: &str, lines: &[String], min_width: usize) -> String {
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let inner = (title.chars().count() + 4).max(longest).max(min_width);
    let border = format!("+{}+", "-".repeat(inner + 2));

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&format!("| {title:^inner$} |\n"));
    out.push_str(&format!("| {} |\n", "-".repeat(inner)));
    for line in lines {
        for segment in wrap(line, inner) {
            out.push_str(&format!("| {segment:<inner$} |\n"));
        }
    }
    out.push_str(&border);
    out.push_str("\n\n");
    out
}

/// Overview, frequency, and sentiment panels.
pub fn render_report(result: &AnalysisResult, min_width: usize) -> String {
    let preview = if result.preview.is_empty() {
        "N/A"
    } else {
        result.preview.as_str()
    };
    let overview = vec![
        format!("Word count: {}", result.word_count),
        format!("Characters (with spaces): {}", result.chars_with_spaces),
        format!("Characters (without spaces): {}", result.chars_without_spaces),
        format!("Sample preview: {preview}"),
    ];

    let sentiment = match &result.sentiment {
        Some(report) => vec![
            format!("Overall tone: {}", report.label),
            format!("Compound score: {}", fmt_score(report.scores.compound)),
            scores_line(&report.scores),
        ],
        None => vec![
            "Sentiment unavailable: the VADER lexicon could not be loaded.".to_string(),
        ],
    };

    let mut out = render_panel("Overview", &overview, min_width);
    out.push_str(&render_panel(
        "Most Frequent Words",
        &frequency_lines(result),
        min_width,
    ));
    out.push_str(&render_panel("Sentiment", &sentiment, min_width));
    out
}

/// Greedy word wrap. Whitespace runs (including newlines) collapse to one
/// space and words longer than `width` are split.
fn wrap(line: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in line.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            rows.push(word.into_iter().collect());
            word = rest;
        }
        if word.is_empty() {
            continue;
        }
        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }
    if current_len > 0 || rows.is_empty() {
        rows.push(current);
    }
    rows
}
