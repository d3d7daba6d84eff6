//! Lexicon acquisition errors.

use super::error_code::{self, TextlensErrorCode};

/// Errors that can occur while locating, fetching, or parsing the lexicon.
///
/// `Clone` because a failed one-time acquisition is handed to every caller
/// that asks for the lexicon afterwards.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LexiconError {
    #[error("Lexicon file not found: {path}")]
    NotFound { path: String },

    #[error("Lexicon unavailable from {url}: {reason}")]
    Unavailable { url: String, reason: String },

    #[error("Lexicon not cached at {path} and offline mode forbids fetching")]
    Offline { path: String },

    #[error("Lexicon parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Lexicon IO error at {path}: {message}")]
    Io { path: String, message: String },
}

impl TextlensErrorCode for LexiconError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => error_code::LEXICON_PARSE_ERROR,
            _ => error_code::LEXICON_UNAVAILABLE,
        }
    }
}
