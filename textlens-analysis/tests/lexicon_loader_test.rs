//! Tests for the one-time lexicon acquisition.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use textlens_analysis::{LexiconLoader, LexiconOrigin, LexiconSource};
use textlens_core::config::LexiconConfig;
use textlens_core::errors::LexiconError;

const LEXICON: &str = "good\t1.9\t0.9434\t[2, 1, 2, 3, 3, 1, 2, 2, 1, 2]\n\
                       bad\t-2.5\t0.67082\t[-2, -3, -3, -3, -3, -3, -2, -1, -2, -3]\n";

/// Stub remote source that counts how often it is asked.
struct StubSource {
    calls: Arc<AtomicUsize>,
    response: Result<String, LexiconError>,
}

impl LexiconSource for StubSource {
    fn fetch(&self) -> Result<String, LexiconError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }

    fn describe(&self) -> String {
        "stub".to_string()
    }
}

fn stub(response: Result<String, LexiconError>) -> (Box<StubSource>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    (
        Box::new(StubSource {
            calls: Arc::clone(&calls),
            response,
        }),
        calls,
    )
}

fn cache_config(dir: &tempfile::TempDir) -> LexiconConfig {
    LexiconConfig {
        cache_dir: Some(dir.path().join("lexicon")),
        ..Default::default()
    }
}

#[test]
fn fetches_once_and_writes_cache() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = cache_config(&dir);
    let (source, calls) = stub(Ok(LEXICON.to_string()));
    let loader = LexiconLoader::new(config.clone(), source);

    let first = loader.get().unwrap();
    let second = loader.get().unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.get("good"), Some(1.9));
    assert_eq!(loader.origin(), Some(LexiconOrigin::Remote));
    assert_eq!(
        std::fs::read_to_string(config.cached_file()).unwrap(),
        LEXICON
    );
}

#[test]
fn cached_copy_skips_the_fetch() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = cache_config(&dir);
    std::fs::create_dir_all(config.effective_cache_dir()).unwrap();
    std::fs::write(config.cached_file(), LEXICON).unwrap();

    let (source, calls) = stub(Ok(String::new()));
    let loader = LexiconLoader::new(config, source);

    let lexicon = loader.get().unwrap();
    assert_eq!(lexicon.get("bad"), Some(-2.5));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(loader.origin(), Some(LexiconOrigin::Cache));
}

#[test]
fn corrupt_cache_is_refetched() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = cache_config(&dir);
    std::fs::create_dir_all(config.effective_cache_dir()).unwrap();
    std::fs::write(config.cached_file(), "garbage without tabs\n").unwrap();

    let (source, calls) = stub(Ok(LEXICON.to_string()));
    let loader = LexiconLoader::new(config, source);

    assert_eq!(loader.get().unwrap().len(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn explicit_path_wins_over_cache_and_source() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("custom.txt");
    std::fs::write(&path, "splendid\t2.8\n").unwrap();
    let config = LexiconConfig {
        path: Some(path),
        ..cache_config(&dir)
    };

    let (source, calls) = stub(Ok(LEXICON.to_string()));
    let loader = LexiconLoader::new(config, source);

    assert_eq!(loader.get().unwrap().get("splendid"), Some(2.8));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(loader.origin(), Some(LexiconOrigin::ExplicitPath));
}

#[test]
fn missing_explicit_path_is_not_found() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = LexiconConfig {
        path: Some(dir.path().join("nope.txt")),
        ..cache_config(&dir)
    };
    let (source, _calls) = stub(Ok(LEXICON.to_string()));
    let loader = LexiconLoader::new(config, source);

    assert!(matches!(loader.get(), Err(LexiconError::NotFound { .. })));
}

#[test]
fn offline_without_cache_fails_without_fetching() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = LexiconConfig {
        offline: Some(true),
        ..cache_config(&dir)
    };
    let (source, calls) = stub(Ok(LEXICON.to_string()));
    let loader = LexiconLoader::new(config, source);

    assert!(matches!(loader.get(), Err(LexiconError::Offline { .. })));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn failed_fetch_is_not_retried_by_later_calls() {
    let dir = tempfile::TempDir::new().unwrap();
    let failure = LexiconError::Unavailable {
        url: "stub".to_string(),
        reason: "connection refused".to_string(),
    };
    let (source, calls) = stub(Err(failure));
    let loader = LexiconLoader::new(cache_config(&dir), source);

    assert!(loader.get().is_err());
    assert!(loader.get().is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(loader.is_resolved());
    assert_eq!(loader.origin(), None);
}

#[test]
fn concurrent_first_use_fetches_once() {
    let dir = tempfile::TempDir::new().unwrap();
    let (source, calls) = stub(Ok(LEXICON.to_string()));
    let loader = LexiconLoader::new(cache_config(&dir), source);

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                assert_eq!(loader.get().unwrap().len(), 2);
            });
        }
    });
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn will_fetch_only_before_first_download() {
    let dir = tempfile::TempDir::new().unwrap();
    let (source, _) = stub(Ok(LEXICON.to_string()));
    let loader = LexiconLoader::new(cache_config(&dir), source);
    assert!(loader.will_fetch());

    loader.get().unwrap();
    assert!(!loader.will_fetch());

    // A fresh loader finds the cache written by the first one.
    let (source, _) = stub(Ok(LEXICON.to_string()));
    let again = LexiconLoader::new(cache_config(&dir), source);
    assert!(!again.will_fetch());
}

#[test]
fn will_fetch_is_false_offline_or_with_explicit_path() {
    let dir = tempfile::TempDir::new().unwrap();

    let offline = LexiconConfig {
        offline: Some(true),
        ..cache_config(&dir)
    };
    let (source, _) = stub(Ok(LEXICON.to_string()));
    assert!(!LexiconLoader::new(offline, source).will_fetch());

    let explicit = LexiconConfig {
        path: Some(dir.path().join("mine.txt")),
        ..cache_config(&dir)
    };
    let (source, _) = stub(Ok(LEXICON.to_string()));
    assert!(!LexiconLoader::new(explicit, source).will_fetch());
}
