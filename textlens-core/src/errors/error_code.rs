//! TextlensErrorCode trait for structured error reporting.

/// Trait for mapping textlens errors to stable error code strings.
/// Every error enum implements this so presenters and exit-code mapping
/// never have to match on message text.
pub trait TextlensErrorCode {
    /// Returns the error code string (e.g., "INPUT_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const INPUT_NOT_FOUND: &str = "INPUT_NOT_FOUND";
pub const INPUT_NOT_DECODABLE: &str = "INPUT_NOT_DECODABLE";
pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const LEXICON_UNAVAILABLE: &str = "LEXICON_UNAVAILABLE";
pub const LEXICON_PARSE_ERROR: &str = "LEXICON_PARSE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
