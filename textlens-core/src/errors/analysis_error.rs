//! Top-level error for an analysis request.

use super::error_code::TextlensErrorCode;
use super::{ConfigError, InputError, LexiconError};

/// Errors surfaced to a presentation layer.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TextlensErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Lexicon(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
