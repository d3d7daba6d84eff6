//! # textlens-core
//!
//! Foundation crate for the textlens analyzer.
//! Defines the result model, traits, errors, config, tracing, and constants.
//! The analysis and CLI crates depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TextlensConfig;
pub use errors::{AnalysisError, ConfigError, InputError, LexiconError};
pub use models::{AnalysisResult, FrequencyEntry, SentimentLabel, SentimentReport, SentimentScores};
pub use traits::ValenceLookup;
