//! Word/character counting and frequency ranking.
//!
//! Total over every input string: there are no error paths here.

pub mod frequency;

use textlens_core::constants::TOP_WORDS_LIMIT;
use textlens_core::models::FrequencyEntry;

pub use frequency::{normalize_token, top_words};

/// Counts and ranking for a single text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMetrics {
    pub word_count: usize,
    pub chars_with_spaces: usize,
    pub chars_without_spaces: usize,
    pub top_words: Vec<FrequencyEntry>,
}

impl TextMetrics {
    pub fn compute(text: &str) -> Self {
        Self {
            word_count: word_count(text),
            chars_with_spaces: char_count_with_spaces(text),
            chars_without_spaces: char_count_without_spaces(text),
            top_words: top_words(text, TOP_WORDS_LIMIT),
        }
    }
}

/// Number of maximal non-whitespace runs.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Unicode scalar values, whitespace included.
pub fn char_count_with_spaces(text: &str) -> usize {
    text.chars().count()
}

/// Unicode scalar values outside the whitespace category.
pub fn char_count_without_spaces(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Leading excerpt of the trimmed text, `...` appended when cut short.
pub fn preview(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_zero_counts() {
        let m = TextMetrics::compute("");
        assert_eq!(m.word_count, 0);
        assert_eq!(m.chars_with_spaces, 0);
        assert_eq!(m.chars_without_spaces, 0);
        assert!(m.top_words.is_empty());
    }

    #[test]
    fn whitespace_only_has_no_words() {
        let m = TextMetrics::compute(" \t\n  ");
        assert_eq!(m.word_count, 0);
        assert_eq!(m.chars_with_spaces, 5);
        assert_eq!(m.chars_without_spaces, 0);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(char_count_with_spaces("héllo wörld"), 11);
        assert_eq!(char_count_without_spaces("héllo wörld"), 10);
    }

    #[test]
    fn punctuation_runs_count_as_words() {
        assert_eq!(word_count("wait -- what?!"), 3);
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        assert_eq!(preview("  ééééé  ", 3), "ééé...");
        assert_eq!(preview("short", 200), "short");
        assert_eq!(preview("exact", 5), "exact");
        assert_eq!(preview("   ", 10), "");
    }
}
