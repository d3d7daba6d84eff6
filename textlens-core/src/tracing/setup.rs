//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the textlens tracing/logging system.
///
/// Reads `TEXTLENS_LOG` for per-crate log levels.
/// Format: `TEXTLENS_LOG=textlens_analysis=debug,textlens_cli=info`
///
/// Falls back to `textlens=warn` if `TEXTLENS_LOG` is not set or is invalid.
/// Output goes to stderr so rendered results on stdout stay clean.
///
/// Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("TEXTLENS_LOG")
            .unwrap_or_else(|_| EnvFilter::new("textlens=warn"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
