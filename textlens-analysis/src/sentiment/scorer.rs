//! SentimentScorer — VADER polarity scores over an injected lexicon.

use std::sync::Arc;

use textlens_core::models::{SentimentReport, SentimentScores};
use textlens_core::traits::ValenceLookup;

use super::heuristics::{
    but_check, least_check, negation_check, normalize, punctuation_emphasis, scalar_inc_dec,
    special_idioms_check,
};
use super::rules::{booster_scalar, C_INCR, N_SCALAR};
use super::sentitext::{is_all_caps, SentiText};

/// Scores text against a read-only valence table.
///
/// Holds no mutable state; one scorer can serve any number of calls,
/// from any number of threads.
#[derive(Clone)]
pub struct SentimentScorer {
    lexicon: Arc<dyn ValenceLookup>,
}

impl std::fmt::Debug for SentimentScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentScorer")
            .field("lexicon_entries", &self.lexicon.len())
            .finish()
    }
}

impl SentimentScorer {
    pub fn new(lexicon: Arc<dyn ValenceLookup>) -> Self {
        Self { lexicon }
    }

    /// Scores plus their Positive/Neutral/Negative label.
    pub fn score(&self, text: &str) -> SentimentReport {
        SentimentReport::from(self.polarity_scores(text))
    }

    /// Compound, positive, neutral, and negative scores for `text`.
    ///
    /// Text without tokens scores as fully neutral with compound 0.
    pub fn polarity_scores(&self, text: &str) -> SentimentScores {
        let senti = SentiText::new(text);
        if senti.is_empty() {
            return SentimentScores::neutral();
        }

        let mut sentiments = Vec::with_capacity(senti.len());
        for (i, lowered) in senti.lowered.iter().enumerate() {
            // Modifiers carry no valence of their own.
            if booster_scalar(lowered).is_some() {
                sentiments.push(0.0);
                continue;
            }
            if lowered == "kind" && senti.lowered.get(i + 1).is_some_and(|next| next == "of") {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.sentiment_valence(&senti, i));
        }

        but_check(&senti.lowered, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn sentiment_valence(&self, senti: &SentiText<'_>, i: usize) -> f64 {
        let words = &senti.lowered;
        let item = &words[i];
        let Some(base) = self.lexicon.valence(item) else {
            return 0.0;
        };
        let mut valence = base;

        // "no" directly before a rated word negates it instead of scoring itself.
        if item == "no" && words.get(i + 1).is_some_and(|next| self.lexicon.contains(next)) {
            valence = 0.0;
        }
        if (i > 0 && words[i - 1] == "no")
            || (i > 1 && words[i - 2] == "no")
            || (i > 2 && words[i - 3] == "no" && matches!(words[i - 1].as_str(), "or" | "nor"))
        {
            valence = base * N_SCALAR;
        }

        if is_all_caps(senti.tokens[i]) && senti.is_cap_diff {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }

        for start_i in 0..3 {
            if i <= start_i {
                break;
            }
            let prev = i - (start_i + 1);
            if self.lexicon.contains(&words[prev]) {
                continue;
            }
            let mut s =
                scalar_inc_dec(senti.tokens[prev], &words[prev], valence, senti.is_cap_diff);
            if s != 0.0 {
                s *= match start_i {
                    1 => 0.95,
                    2 => 0.9,
                    _ => 1.0,
                };
            }
            valence += s;
            valence = negation_check(valence, words, start_i, i);
            if start_i == 2 {
                valence = special_idioms_check(valence, words, i);
            }
        }

        least_check(valence, words, i, |w| self.lexicon.contains(w))
    }
}

/// Aggregate per-token valences into the final scores.
fn score_valence(sentiments: &[f64], text: &str) -> SentimentScores {
    let emphasis = punctuation_emphasis(text);

    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize(sum);

    let (mut pos_sum, mut neg_sum, neu_count) = sift_sentiment_scores(sentiments);
    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neu_count as f64;
    SentimentScores {
        positive: (pos_sum / total).abs(),
        neutral: (neu_count as f64 / total).abs(),
        negative: (neg_sum / total).abs(),
        compound,
    }
}

/// Positive mass, negative mass, and neutral token count.
fn sift_sentiment_scores(sentiments: &[f64]) -> (f64, f64, usize) {
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1;
        }
    }
    (pos_sum, neg_sum, neu_count)
}
