//! Result records produced by an analysis call.

pub mod analysis_result;
pub mod frequency;
pub mod sentiment;

pub use analysis_result::AnalysisResult;
pub use frequency::FrequencyEntry;
pub use sentiment::{SentimentLabel, SentimentReport, SentimentScores};
