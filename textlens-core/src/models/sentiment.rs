//! Sentiment scores and the three-way label derived from them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};

/// Proportional polarity mass plus the normalized compound score.
///
/// `positive + neutral + negative` is 1 within floating tolerance and
/// `compound` lies in `[-1, 1]`. Values are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
    pub compound: f64,
}

impl SentimentScores {
    /// Scores for text without any tokens.
    pub fn neutral() -> Self {
        Self {
            positive: 0.0,
            neutral: 1.0,
            negative: 0.0,
            compound: 0.0,
        }
    }

    pub fn label(&self) -> SentimentLabel {
        SentimentLabel::from_compound(self.compound)
    }
}

impl Default for SentimentScores {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Overall tone of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// compound ≥ 0.05 is positive, compound ≤ -0.05 is negative.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            Self::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scores together with their label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    pub scores: SentimentScores,
    pub label: SentimentLabel,
}

impl From<SentimentScores> for SentimentReport {
    fn from(scores: SentimentScores) -> Self {
        Self {
            label: scores.label(),
            scores,
        }
    }
}
