//! Top-level textlens configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DisplayConfig, HttpConfig, LexiconConfig, OutputFormat};
use crate::constants::{PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TEXTLENS_*`)
/// 3. Project config (`textlens.toml` in the project directory)
/// 4. User config (`~/.textlens/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TextlensConfig {
    pub lexicon: LexiconConfig,
    pub http: HttpConfig,
    pub display: DisplayConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub lexicon_path: Option<PathBuf>,
    pub offline: Option<bool>,
    pub format: Option<OutputFormat>,
    pub preview_chars: Option<usize>,
}

impl TextlensConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        // Unreadable user config is not fatal.
                        ::tracing::warn!(error = %err, "ignoring user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        ::tracing::debug!(
            root = %root.display(),
            format = %config.display.effective_format(),
            offline = config.lexicon.effective_offline(),
            "configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &TextlensConfig) -> Result<(), ConfigError> {
        if config.display.preview_chars == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "display.preview_chars".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(width) = config.display.min_panel_width {
            if width < 20 {
                return Err(ConfigError::ValidationFailed {
                    field: "display.min_panel_width".to_string(),
                    message: "must be at least 20".to_string(),
                });
            }
        }
        if config.http.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "http.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref url) = config.lexicon.url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::ValidationFailed {
                    field: "lexicon.url".to_string(),
                    message: "must be an http:// or https:// URL".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.textlens/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut TextlensConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: TextlensConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut TextlensConfig, other: &TextlensConfig) {
        // Lexicon
        if other.lexicon.path.is_some() {
            base.lexicon.path = other.lexicon.path.clone();
        }
        if other.lexicon.cache_dir.is_some() {
            base.lexicon.cache_dir = other.lexicon.cache_dir.clone();
        }
        if other.lexicon.url.is_some() {
            base.lexicon.url = other.lexicon.url.clone();
        }
        if other.lexicon.offline.is_some() {
            base.lexicon.offline = other.lexicon.offline;
        }

        // HTTP
        if other.http.timeout_secs.is_some() {
            base.http.timeout_secs = other.http.timeout_secs;
        }
        if other.http.max_retries.is_some() {
            base.http.max_retries = other.http.max_retries;
        }
        if other.http.initial_backoff_ms.is_some() {
            base.http.initial_backoff_ms = other.http.initial_backoff_ms;
        }
        if other.http.max_backoff_ms.is_some() {
            base.http.max_backoff_ms = other.http.max_backoff_ms;
        }

        // Display
        if other.display.format.is_some() {
            base.display.format = other.display.format;
        }
        if other.display.preview_chars.is_some() {
            base.display.preview_chars = other.display.preview_chars;
        }
        if other.display.min_panel_width.is_some() {
            base.display.min_panel_width = other.display.min_panel_width;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TEXTLENS_LEXICON_PATH`, `TEXTLENS_HTTP_TIMEOUT_SECS`, etc.
    ///
    /// Unparseable numeric values are ignored; an unknown display format is
    /// rejected because it would otherwise silently change the output.
    fn apply_env_overrides(config: &mut TextlensConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("TEXTLENS_LEXICON_PATH") {
            config.lexicon.path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("TEXTLENS_LEXICON_CACHE_DIR") {
            config.lexicon.cache_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("TEXTLENS_LEXICON_URL") {
            config.lexicon.url = Some(val);
        }
        if let Ok(val) = std::env::var("TEXTLENS_OFFLINE") {
            if let Ok(v) = val.parse::<bool>() {
                config.lexicon.offline = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TEXTLENS_HTTP_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.http.timeout_secs = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TEXTLENS_HTTP_MAX_RETRIES") {
            if let Ok(v) = val.parse::<u32>() {
                config.http.max_retries = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TEXTLENS_DISPLAY_FORMAT") {
            let format = val
                .parse::<OutputFormat>()
                .map_err(|message| ConfigError::InvalidValue {
                    field: "TEXTLENS_DISPLAY_FORMAT".to_string(),
                    message,
                })?;
            config.display.format = Some(format);
        }
        if let Ok(val) = std::env::var("TEXTLENS_PREVIEW_CHARS") {
            if let Ok(v) = val.parse::<usize>() {
                config.display.preview_chars = Some(v);
            }
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut TextlensConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.lexicon_path {
            config.lexicon.path = Some(v.clone());
        }
        if let Some(v) = cli.offline {
            config.lexicon.offline = Some(v);
        }
        if let Some(v) = cli.format {
            config.display.format = Some(v);
        }
        if let Some(v) = cli.preview_chars {
            config.display.preview_chars = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}
