//! Configuration system for textlens.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod display_config;
pub mod http_config;
pub mod lexicon_config;
pub mod textlens_config;

pub use display_config::{DisplayConfig, OutputFormat};
pub use http_config::HttpConfig;
pub use lexicon_config::LexiconConfig;
pub use textlens_config::{home_dir, CliOverrides, TextlensConfig};
