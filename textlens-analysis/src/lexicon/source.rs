//! Remote lexicon sources.

use std::time::Duration;

use textlens_core::config::HttpConfig;
use textlens_core::errors::LexiconError;

/// Produces the raw lexicon text when no local copy exists.
pub trait LexiconSource: Send + Sync {
    /// Fetch the full lexicon file content.
    fn fetch(&self) -> Result<String, LexiconError>;

    /// Human-readable origin, used in logs and errors.
    fn describe(&self) -> String;
}

/// Blocking HTTP source with retry and exponential backoff.
#[derive(Debug, Clone)]
pub struct HttpLexiconSource {
    url: String,
    timeout: Duration,
    max_retries: u32,
    initial_backoff: Duration,
    max_backoff: Duration,
}

impl HttpLexiconSource {
    pub fn new(url: impl Into<String>, http: &HttpConfig) -> Self {
        Self {
            url: url.into(),
            timeout: http.effective_timeout(),
            max_retries: http.effective_max_retries(),
            initial_backoff: http.effective_initial_backoff(),
            max_backoff: http.effective_max_backoff(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn unavailable(&self, reason: String) -> LexiconError {
        LexiconError::Unavailable {
            url: self.url.clone(),
            reason,
        }
    }
}

impl LexiconSource for HttpLexiconSource {
    fn fetch(&self) -> Result<String, LexiconError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .gzip(true)
            .build()
            .map_err(|e: reqwest::Error| self.unavailable(e.to_string()))?;

        let mut backoff = self.initial_backoff;
        let mut last_err = String::new();

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                tracing::debug!(
                    "lexicon: retry attempt {}/{} after {:?}",
                    attempt,
                    self.max_retries,
                    backoff
                );
                std::thread::sleep(backoff);
                backoff = (backoff * 2).min(self.max_backoff);
            }

            match client.get(&self.url).send() {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return resp
                            .text()
                            .map_err(|e: reqwest::Error| {
                                self.unavailable(format!("body read failed: {e}"))
                            });
                    }
                    if status.is_client_error() {
                        return Err(self.unavailable(format!("HTTP {status}")));
                    }
                    last_err = format!("HTTP {status}");
                }
                Err(e) => {
                    last_err = e.to_string();
                }
            }
        }

        Err(self.unavailable(format!(
            "all {} retries exhausted: {last_err}",
            self.max_retries
        )))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
