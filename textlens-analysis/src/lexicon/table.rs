//! The parsed VADER lexicon.
//!
//! Each line of `vader_lexicon.txt` is `TOKEN<TAB>MEAN<TAB>STD<TAB>[RATINGS]`;
//! only the token and mean valence are kept.

use rustc_hash::FxHashMap;
use textlens_core::errors::LexiconError;
use textlens_core::traits::ValenceLookup;

/// Immutable token → mean valence table.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: FxHashMap<String, f64>,
}

impl Lexicon {
    /// Parse the tab-separated lexicon format. Blank lines are skipped.
    pub fn parse(content: &str) -> Result<Self, LexiconError> {
        let mut entries = FxHashMap::default();
        for (idx, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            let token = fields.next().unwrap_or_default();
            let measure = fields.next().ok_or_else(|| LexiconError::Parse {
                line: idx + 1,
                message: format!("missing valence for token '{token}'"),
            })?;
            let valence = measure.trim().parse::<f64>().map_err(|e| LexiconError::Parse {
                line: idx + 1,
                message: format!("invalid valence '{measure}': {e}"),
            })?;
            if !valence.is_finite() {
                return Err(LexiconError::Parse {
                    line: idx + 1,
                    message: format!("valence '{measure}' is not a finite number"),
                });
            }
            entries.insert(token.to_string(), valence);
        }

        if entries.is_empty() {
            return Err(LexiconError::Parse {
                line: 0,
                message: "lexicon contains no entries".to_string(),
            });
        }
        Ok(Self { entries })
    }

    /// Build a lexicon from explicit pairs.
    pub fn from_entries<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            entries: pairs.into_iter().map(|(t, v)| (t.into(), v)).collect(),
        }
    }

    pub fn get(&self, token: &str) -> Option<f64> {
        self.entries.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ValenceLookup for Lexicon {
    fn valence(&self, token: &str) -> Option<f64> {
        self.get(token)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
