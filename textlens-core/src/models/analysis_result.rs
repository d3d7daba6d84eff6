use serde::{Deserialize, Serialize};

use super::{FrequencyEntry, SentimentReport};

/// Everything one analysis call produces.
///
/// Owned by the caller that requested it; nothing else holds a reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Maximal non-whitespace runs.
    pub word_count: usize,
    /// Unicode scalar values in the raw input.
    pub chars_with_spaces: usize,
    /// Unicode scalar values that are not whitespace.
    pub chars_without_spaces: usize,
    /// Up to five most frequent normalized words.
    pub top_words: Vec<FrequencyEntry>,
    /// `None` when no lexicon could be obtained.
    pub sentiment: Option<SentimentReport>,
    /// Leading excerpt of the trimmed input.
    pub preview: String,
}

impl AnalysisResult {
    pub fn has_sentiment(&self) -> bool {
        self.sentiment.is_some()
    }
}
