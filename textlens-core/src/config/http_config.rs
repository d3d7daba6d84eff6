//! HTTP transport configuration for the lexicon fetch.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HTTP_INITIAL_BACKOFF_MS, DEFAULT_HTTP_MAX_BACKOFF_MS, DEFAULT_HTTP_MAX_RETRIES,
    DEFAULT_HTTP_TIMEOUT_SECS,
};

/// Timeout and retry settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout in seconds. Default: 30.
    pub timeout_secs: Option<u64>,
    /// Retries after the first attempt. Default: 3.
    pub max_retries: Option<u32>,
    /// Initial backoff in milliseconds, doubled per retry. Default: 500.
    pub initial_backoff_ms: Option<u64>,
    /// Backoff ceiling in milliseconds. Default: 30000.
    pub max_backoff_ms: Option<u64>,
}

impl HttpConfig {
    pub fn effective_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS))
    }

    pub fn effective_max_retries(&self) -> u32 {
        self.max_retries.unwrap_or(DEFAULT_HTTP_MAX_RETRIES)
    }

    pub fn effective_initial_backoff(&self) -> Duration {
        Duration::from_millis(
            self.initial_backoff_ms
                .unwrap_or(DEFAULT_HTTP_INITIAL_BACKOFF_MS),
        )
    }

    pub fn effective_max_backoff(&self) -> Duration {
        Duration::from_millis(self.max_backoff_ms.unwrap_or(DEFAULT_HTTP_MAX_BACKOFF_MS))
    }
}
