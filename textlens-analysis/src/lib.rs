//! # textlens-analysis
//!
//! The computational core of textlens: word and character counts, frequency
//! ranking, VADER sentiment scoring, and the one-time lexicon acquisition
//! that feeds it. Console and window presenters both consume
//! [`TextMetricsEngine`] so their numbers are always identical.

pub mod engine;
pub mod input;
pub mod lexicon;
pub mod metrics;
pub mod sentiment;

pub use engine::TextMetricsEngine;
pub use input::{load_text, resolve_path, Decoding};
pub use lexicon::{HttpLexiconSource, Lexicon, LexiconLoader, LexiconOrigin, LexiconSource};
pub use metrics::TextMetrics;
pub use sentiment::SentimentScorer;
