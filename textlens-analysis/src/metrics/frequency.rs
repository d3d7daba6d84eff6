//! Top-N word frequency ranking.

use rustc_hash::FxHashMap;
use textlens_core::models::FrequencyEntry;

/// Lower-case a whitespace-delimited token and strip leading/trailing
/// non-alphanumeric characters. `None` when nothing is left.
pub fn normalize_token(token: &str) -> Option<String> {
    let lowered = token.to_lowercase();
    let trimmed = lowered.trim_matches(|c: char| !c.is_alphanumeric());
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// The `limit` most frequent normalized words, count descending.
///
/// Ties keep first-appearance order: entries are collected in the order
/// they first occur and the sort is stable.
pub fn top_words(text: &str, limit: usize) -> Vec<FrequencyEntry> {
    let mut slots: FxHashMap<String, usize> = FxHashMap::default();
    let mut entries: Vec<FrequencyEntry> = Vec::new();

    for word in text.split_whitespace().filter_map(normalize_token) {
        match slots.get(&word) {
            Some(&slot) => entries[slot].count += 1,
            None => {
                slots.insert(word.clone(), entries.len());
                entries.push(FrequencyEntry::new(word, 1));
            }
        }
    }

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit);
    entries
}
