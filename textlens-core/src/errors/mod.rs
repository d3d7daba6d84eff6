//! Error handling for textlens.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod lexicon_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use error_code::TextlensErrorCode;
pub use input_error::InputError;
pub use lexicon_error::LexiconError;
