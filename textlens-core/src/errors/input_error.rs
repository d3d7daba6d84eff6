//! Input boundary errors.

use std::path::PathBuf;

use super::error_code::{self, TextlensErrorCode};

/// Errors that can occur while resolving and reading caller input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Input file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Input path is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    #[error("Input file is not valid UTF-8: {path} (invalid byte at offset {offset})")]
    NotDecodable { path: PathBuf, offset: usize },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No text to analyze")]
    Empty,
}

impl TextlensErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } | Self::NotAFile { .. } => error_code::INPUT_NOT_FOUND,
            Self::NotDecodable { .. } => error_code::INPUT_NOT_DECODABLE,
            Self::Io { .. } | Self::Empty => error_code::INPUT_ERROR,
        }
    }
}
