//! LexiconLoader — scoped one-time lexicon acquisition.
//!
//! Resolution: explicit path → cached file → remote source (written back to
//! the cache). The outcome, success or failure, is stored in a `OnceLock`,
//! so the lookup and any network fetch run at most once per loader. Callers
//! receive a shared `Arc<Lexicon>` that is never mutated afterwards.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use textlens_core::config::{LexiconConfig, TextlensConfig};
use textlens_core::errors::LexiconError;

use super::source::{HttpLexiconSource, LexiconSource};
use super::table::Lexicon;

/// Where the loaded lexicon came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexiconOrigin {
    /// `lexicon.path` from configuration.
    ExplicitPath,
    /// Previously fetched copy in the cache directory.
    Cache,
    /// Fetched from the remote source during this process.
    Remote,
}

impl fmt::Display for LexiconOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ExplicitPath => "path",
            Self::Cache => "cache",
            Self::Remote => "remote",
        })
    }
}

#[derive(Debug, Clone)]
struct Loaded {
    lexicon: Arc<Lexicon>,
    origin: LexiconOrigin,
}

/// Owns the lexicon acquisition for one process (or one test).
pub struct LexiconLoader {
    config: LexiconConfig,
    source: Box<dyn LexiconSource>,
    cell: OnceLock<Result<Loaded, LexiconError>>,
}

impl LexiconLoader {
    /// Create a loader with an explicit remote source.
    pub fn new(config: LexiconConfig, source: Box<dyn LexiconSource>) -> Self {
        Self {
            config,
            source,
            cell: OnceLock::new(),
        }
    }

    /// Create a loader that fetches over HTTP using the configured URL and
    /// retry policy.
    pub fn from_config(config: &TextlensConfig) -> Self {
        let source = HttpLexiconSource::new(config.lexicon.effective_url(), &config.http);
        Self::new(config.lexicon.clone(), Box::new(source))
    }

    /// The lexicon, acquiring it on first call.
    ///
    /// Every later call returns the same table, or the same error.
    pub fn get(&self) -> Result<Arc<Lexicon>, LexiconError> {
        match self.cell.get_or_init(|| self.acquire()) {
            Ok(loaded) => Ok(Arc::clone(&loaded.lexicon)),
            Err(err) => Err(err.clone()),
        }
    }

    /// Origin of the lexicon, once successfully acquired.
    pub fn origin(&self) -> Option<LexiconOrigin> {
        match self.cell.get() {
            Some(Ok(loaded)) => Some(loaded.origin),
            _ => None,
        }
    }

    /// Whether acquisition has already been attempted.
    pub fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Whether the next `get` will go to the remote source: nothing is
    /// resolved yet, no explicit path is set, no cache file exists, and
    /// fetching is allowed.
    pub fn will_fetch(&self) -> bool {
        !self.is_resolved()
            && self.config.path.is_none()
            && !self.config.cached_file().is_file()
            && !self.config.effective_offline()
    }

    fn acquire(&self) -> Result<Loaded, LexiconError> {
        let loaded = self.resolve()?;
        tracing::info!(
            origin = %loaded.origin,
            entries = loaded.lexicon.len(),
            "lexicon ready"
        );
        Ok(loaded)
    }

    fn resolve(&self) -> Result<Loaded, LexiconError> {
        if let Some(ref path) = self.config.path {
            if !path.is_file() {
                return Err(LexiconError::NotFound {
                    path: path.display().to_string(),
                });
            }
            let lexicon = read_lexicon(path)?;
            return Ok(Loaded {
                lexicon: Arc::new(lexicon),
                origin: LexiconOrigin::ExplicitPath,
            });
        }

        let cached = self.config.cached_file();
        if cached.is_file() {
            match read_lexicon(&cached) {
                Ok(lexicon) => {
                    return Ok(Loaded {
                        lexicon: Arc::new(lexicon),
                        origin: LexiconOrigin::Cache,
                    })
                }
                Err(err) => {
                    tracing::warn!(
                        path = %cached.display(),
                        error = %err,
                        "cached lexicon unreadable, fetching a fresh copy"
                    );
                }
            }
        }

        if self.config.effective_offline() {
            return Err(LexiconError::Offline {
                path: cached.display().to_string(),
            });
        }

        tracing::info!(
            source = %self.source.describe(),
            "setting up the VADER lexicon (this only runs once)"
        );
        let content = self.source.fetch()?;
        let lexicon = Lexicon::parse(&content)?;
        store_cache(&cached, &content);

        Ok(Loaded {
            lexicon: Arc::new(lexicon),
            origin: LexiconOrigin::Remote,
        })
    }
}

impl fmt::Debug for LexiconLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexiconLoader")
            .field("config", &self.config)
            .field("source", &self.source.describe())
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

fn read_lexicon(path: &Path) -> Result<Lexicon, LexiconError> {
    let content = fs::read_to_string(path).map_err(|e| LexiconError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Lexicon::parse(&content)
}

/// Best effort: a failed cache write only means the next process fetches again.
fn store_cache(path: &Path, content: &str) {
    if let Err(e) = write_atomic(path, content) {
        tracing::warn!(path = %path.display(), error = %e, "could not cache lexicon");
    }
}

/// Write to a sibling temp file, then rename over `path`, so readers never
/// see a partially written lexicon.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(format!(".{}.tmp", std::process::id()));
    let tmp = path.with_file_name(tmp_name);

    if let Err(e) = fs::write(&tmp, content).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_write_replaces_whole_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("vader_lexicon.txt");

        write_atomic(&path, "good\t1.9\n").unwrap();
        write_atomic(&path, "bad\t-2.5\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "bad\t-2.5\n");
        let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("vader_lexicon.txt")]);
    }

    #[test]
    fn failed_cache_write_leaves_no_temp_file() {
        let dir = tempfile::TempDir::new().unwrap();
        // The target is a directory, so the rename fails.
        let path = dir.path().join("vader_lexicon.txt");
        fs::create_dir(&path).unwrap();

        assert!(write_atomic(&path, "good\t1.9\n").is_err());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
