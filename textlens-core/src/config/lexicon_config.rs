//! Lexicon resolution configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LEXICON_URL, LEXICON_FILE_NAME, USER_CONFIG_DIR};

/// Where the sentiment lexicon comes from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LexiconConfig {
    /// Explicit lexicon file. When set, no cache lookup or fetch happens.
    pub path: Option<PathBuf>,
    /// Cache directory for the fetched lexicon. Default: `~/.textlens/lexicon`.
    pub cache_dir: Option<PathBuf>,
    /// Source URL for the first-use fetch.
    pub url: Option<String>,
    /// Never touch the network. Default: false.
    pub offline: Option<bool>,
}

impl LexiconConfig {
    /// Returns the effective cache directory.
    ///
    /// Falls back to `./.textlens/lexicon` when no home directory is known.
    pub fn effective_cache_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.cache_dir {
            return dir.clone();
        }
        super::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(USER_CONFIG_DIR)
            .join("lexicon")
    }

    /// Returns the cached lexicon file path inside the cache directory.
    pub fn cached_file(&self) -> PathBuf {
        self.effective_cache_dir().join(LEXICON_FILE_NAME)
    }

    /// Returns the effective source URL.
    pub fn effective_url(&self) -> &str {
        self.url.as_deref().unwrap_or(DEFAULT_LEXICON_URL)
    }

    /// Returns whether fetching is disabled, defaulting to false.
    pub fn effective_offline(&self) -> bool {
        self.offline.unwrap_or(false)
    }
}
