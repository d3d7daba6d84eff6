//! Shared constants for the textlens analyzer.

/// textlens version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of entries in the word frequency ranking.
pub const TOP_WORDS_LIMIT: usize = 5;

/// Compound score at or above which text is labelled positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound score at or below which text is labelled negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// File name of the VADER lexicon inside the cache directory.
pub const LEXICON_FILE_NAME: &str = "vader_lexicon.txt";

/// Canonical source of the VADER lexicon.
pub const DEFAULT_LEXICON_URL: &str =
    "https://raw.githubusercontent.com/cjhutto/vaderSentiment/master/vaderSentiment/vader_lexicon.txt";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "textlens.toml";

/// User-level config directory name (under the home directory).
pub const USER_CONFIG_DIR: &str = ".textlens";

/// Default number of characters shown in the text preview.
pub const DEFAULT_PREVIEW_CHARS: usize = 200;

/// Default minimum inner width of console panels.
pub const DEFAULT_MIN_PANEL_WIDTH: usize = 48;

/// Default HTTP request timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Default number of HTTP retries after the first attempt.
pub const DEFAULT_HTTP_MAX_RETRIES: u32 = 3;

/// Default initial retry backoff in milliseconds (doubles per retry).
pub const DEFAULT_HTTP_INITIAL_BACKOFF_MS: u64 = 500;

/// Default retry backoff ceiling in milliseconds.
pub const DEFAULT_HTTP_MAX_BACKOFF_MS: u64 = 30_000;

/// Sentinel line that ends pasted console input (case-insensitive).
pub const PASTE_SENTINEL: &str = "END";
