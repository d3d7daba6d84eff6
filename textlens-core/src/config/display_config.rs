//! Presentation configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MIN_PANEL_WIDTH, DEFAULT_PREVIEW_CHARS};

/// How an analysis result is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Boxed console panels.
    #[default]
    Panels,
    /// The compact block shown in the desktop result window.
    Window,
    /// Serialized `AnalysisResult`.
    Json,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Panels => "panels",
            Self::Window => "window",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "panels" => Ok(Self::Panels),
            "window" => Ok(Self::Window),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown format '{other}', expected panels, window, or json"
            )),
        }
    }
}

/// Configuration for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DisplayConfig {
    /// Output format. Default: panels.
    pub format: Option<OutputFormat>,
    /// Characters shown in the text preview. Default: 200.
    pub preview_chars: Option<usize>,
    /// Minimum inner width of console panels. Default: 48.
    pub min_panel_width: Option<usize>,
}

impl DisplayConfig {
    pub fn effective_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    pub fn effective_preview_chars(&self) -> usize {
        self.preview_chars.unwrap_or(DEFAULT_PREVIEW_CHARS)
    }

    pub fn effective_min_panel_width(&self) -> usize {
        self.min_panel_width.unwrap_or(DEFAULT_MIN_PANEL_WIDTH)
    }
}
