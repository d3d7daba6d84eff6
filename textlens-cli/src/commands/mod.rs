//! CLI command handlers
//!
//! # Modules
//!
//! - `analyze`: one-shot `file` and `text` analysis
//! - `interactive`: the guided menu (default command)
//! - `config`: print the resolved configuration

pub mod analyze;
pub mod config;
pub mod interactive;

use std::io::{self, Write};

use textlens_analysis::{Decoding, LexiconLoader, TextMetricsEngine};
use textlens_core::config::DisplayConfig;
use textlens_core::errors::LexiconError;
use textlens_core::models::AnalysisResult;
use textlens_core::TextlensConfig;

use crate::present;

/// Everything a handler needs after argument parsing and config resolution.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: TextlensConfig,
    pub decoding: Decoding,
    /// Fail instead of degrading to metrics-only when the lexicon is missing.
    pub require_sentiment: bool,
}

/// Printed before the lexicon download that only the first run performs.
pub const FIRST_RUN_NOTICE: &str = "Setting up the VADER lexicon (this only runs once)...";

/// Build the engine, acquiring the lexicon through `loader`.
///
/// When the lexicon has to be downloaded, `FIRST_RUN_NOTICE` is written to
/// `notice` first. Without `require_sentiment`, a lexicon failure is logged
/// and the engine reports metrics only.
pub fn build_engine<W: Write>(
    loader: &LexiconLoader,
    ctx: &Context,
    notice: &mut W,
) -> Result<TextMetricsEngine, LexiconError> {
    if loader.will_fetch() {
        // A closed console must not stop the analysis.
        let _ = writeln!(notice, "\n{FIRST_RUN_NOTICE}").and_then(|()| notice.flush());
    }
    let engine = match loader.get() {
        Ok(lexicon) => TextMetricsEngine::with_lexicon(lexicon),
        Err(err) if ctx.require_sentiment => return Err(err),
        Err(err) => {
            tracing::warn!(error = %err, "sentiment disabled, lexicon unavailable");
            TextMetricsEngine::metrics_only()
        }
    };
    Ok(engine.with_preview_chars(ctx.config.display.effective_preview_chars()))
}

/// Render `result` and write it to `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    result: &AnalysisResult,
    display: &DisplayConfig,
) -> io::Result<()> {
    let rendered = present::render(result, display)?;
    out.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()
}

#[cfg(test)]
pub mod test_utils {
    use textlens_analysis::LexiconSource;

    use super::*;

    /// Remote source that must never be reached.
    pub struct NoNetwork;

    impl LexiconSource for NoNetwork {
        fn fetch(&self) -> Result<String, LexiconError> {
            Err(LexiconError::Unavailable {
                url: "test://none".to_string(),
                reason: "network disabled in tests".to_string(),
            })
        }

        fn describe(&self) -> String {
            "test://none".to_string()
        }
    }

    /// Remote source that always serves the same lexicon text.
    pub struct FixedLexicon(pub &'static str);

    impl LexiconSource for FixedLexicon {
        fn fetch(&self) -> Result<String, LexiconError> {
            Ok(self.0.to_string())
        }

        fn describe(&self) -> String {
            "test://fixed".to_string()
        }
    }

    pub fn offline_context(require_sentiment: bool) -> Context {
        let mut config = TextlensConfig::default();
        config.lexicon.offline = Some(true);
        config.lexicon.cache_dir = Some(std::env::temp_dir().join("textlens-no-cache"));
        Context {
            config,
            decoding: Decoding::Strict,
            require_sentiment,
        }
    }
}
