//! # textlens-cli
//!
//! Console front end for textlens: the interactive prompt, the one-shot
//! `file` / `text` commands, and the presenters that turn an
//! `AnalysisResult` into panels, a window report, or JSON.

pub mod commands;
pub mod error;
pub mod present;
