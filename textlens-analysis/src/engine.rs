//! TextMetricsEngine — raw text in, `AnalysisResult` out.
//!
//! Metrics never fail. Sentiment is present whenever a scorer was injected;
//! an engine built without one (lexicon unavailable) still returns counts,
//! frequencies, and the preview.

use std::sync::Arc;
use std::time::Instant;

use textlens_core::constants::DEFAULT_PREVIEW_CHARS;
use textlens_core::errors::AnalysisError;
use textlens_core::models::AnalysisResult;
use textlens_core::traits::ValenceLookup;

use crate::input::{load_text, Decoding};
use crate::metrics::{self, TextMetrics};
use crate::sentiment::SentimentScorer;

/// Stateless analyzer shared by every presentation layer.
#[derive(Debug, Clone)]
pub struct TextMetricsEngine {
    scorer: Option<SentimentScorer>,
    preview_chars: usize,
}

impl TextMetricsEngine {
    /// Engine with sentiment scoring.
    pub fn new(scorer: SentimentScorer) -> Self {
        Self {
            scorer: Some(scorer),
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }

    /// Engine scoring against the given lexicon.
    pub fn with_lexicon(lexicon: Arc<dyn ValenceLookup>) -> Self {
        Self::new(SentimentScorer::new(lexicon))
    }

    /// Engine without sentiment, for when no lexicon could be obtained.
    pub fn metrics_only() -> Self {
        Self {
            scorer: None,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }

    /// Set the preview length in characters.
    pub fn with_preview_chars(mut self, preview_chars: usize) -> Self {
        self.preview_chars = preview_chars;
        self
    }

    pub fn sentiment_enabled(&self) -> bool {
        self.scorer.is_some()
    }

    /// Analyze `text`. Total: succeeds for every string, including "".
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let started = Instant::now();
        let TextMetrics {
            word_count,
            chars_with_spaces,
            chars_without_spaces,
            top_words,
        } = TextMetrics::compute(text);
        let sentiment = self.scorer.as_ref().map(|s| s.score(text));

        tracing::debug!(
            word_count,
            chars = chars_with_spaces,
            sentiment = sentiment.is_some(),
            micros = started.elapsed().as_micros() as u64,
            "analysis complete"
        );

        AnalysisResult {
            word_count,
            chars_with_spaces,
            chars_without_spaces,
            top_words,
            sentiment,
            preview: metrics::preview(text, self.preview_chars),
        }
    }

    /// Read a user-typed path and analyze its content.
    ///
    /// Input errors return before any analysis; there is no partial result.
    pub fn analyze_path(
        &self,
        raw_path: &str,
        decoding: Decoding,
    ) -> Result<AnalysisResult, AnalysisError> {
        let text = load_text(raw_path, decoding)?;
        Ok(self.analyze(&text))
    }
}
