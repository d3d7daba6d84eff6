//! VADER sentiment scoring.
//!
//! Lexicon-weighted valences per token, adjusted by the canonical VADER
//! heuristics (boosters, ALL-CAPS emphasis, negation, "but", "least",
//! idioms, punctuation emphasis), then aggregated into a compound score
//! and proportional positive/neutral/negative mass.

mod heuristics;
pub mod rules;
mod scorer;
mod sentitext;

pub use scorer::SentimentScorer;
