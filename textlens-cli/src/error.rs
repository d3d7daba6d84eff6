//! Mapping from analysis errors to process exit codes.

use textlens_core::errors::{AnalysisError, ConfigError, InputError, LexiconError};

/// Exit codes of the `textlens` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CliExitCode {
    Success = 0,
    /// Input could not be read or was empty.
    Input = 1,
    /// Configuration failed to load or validate.
    Config = 2,
    /// Sentiment was required but the lexicon could not be obtained.
    Lexicon = 3,
}

impl CliExitCode {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<&InputError> for CliExitCode {
    fn from(_: &InputError) -> Self {
        Self::Input
    }
}

impl From<&ConfigError> for CliExitCode {
    fn from(_: &ConfigError) -> Self {
        Self::Config
    }
}

impl From<&LexiconError> for CliExitCode {
    fn from(_: &LexiconError) -> Self {
        Self::Lexicon
    }
}

/// Exit code for an error surfaced to `main`.
pub fn exit_code_for_error(err: &AnalysisError) -> CliExitCode {
    match err {
        AnalysisError::Input(e) => e.into(),
        AnalysisError::Config(e) => e.into(),
        AnalysisError::Lexicon(e) => e.into(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn maps_each_subsystem() {
        let input = AnalysisError::from(InputError::NotFound {
            path: PathBuf::from("/nope"),
        });
        assert_eq!(exit_code_for_error(&input).code(), 1);

        let config = AnalysisError::from(ConfigError::InvalidValue {
            field: "format".into(),
            message: "bad".into(),
        });
        assert_eq!(exit_code_for_error(&config).code(), 2);

        let lexicon = AnalysisError::from(LexiconError::Offline {
            path: "/cache".into(),
        });
        assert_eq!(exit_code_for_error(&lexicon), CliExitCode::Lexicon);
    }
}
