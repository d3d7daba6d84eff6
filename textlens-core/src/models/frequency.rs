use serde::{Deserialize, Serialize};

/// A normalized word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub word: String,
    /// Always at least 1.
    pub count: usize,
}

impl FrequencyEntry {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}
