//! Input boundary: turning a user-typed path into validated UTF-8 text.

use std::path::{Path, PathBuf};

use textlens_core::config::home_dir;
use textlens_core::errors::InputError;

/// How bytes that are not valid UTF-8 are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decoding {
    /// Reject the file with `InputError::NotDecodable`.
    #[default]
    Strict,
    /// Replace invalid sequences with U+FFFD.
    Lossy,
}

/// Normalize a user-typed path: trim whitespace, drop surrounding quotes,
/// and expand a leading `~` to the home directory.
pub fn resolve_path(raw: &str) -> PathBuf {
    let unquoted = raw.trim().trim_matches(|c: char| c == '"' || c == '\'');
    expand_home(unquoted)
}

fn expand_home(path: &str) -> PathBuf {
    let Some(rest) = path.strip_prefix('~') else {
        return PathBuf::from(path);
    };
    if !(rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\')) {
        // `~user` forms are left alone.
        return PathBuf::from(path);
    }
    match home_dir() {
        Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(path),
    }
}

/// Read a file as text, validating existence and encoding.
pub fn read_text_file(path: &Path, decoding: Decoding) -> Result<String, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(InputError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => match decoding {
            Decoding::Strict => Err(InputError::NotDecodable {
                path: path.to_path_buf(),
                offset: err.utf8_error().valid_up_to(),
            }),
            Decoding::Lossy => {
                tracing::warn!(
                    path = %path.display(),
                    "input is not valid UTF-8, replacing invalid bytes"
                );
                Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
            }
        },
    }
}

/// Resolve a user-typed path and read it.
pub fn load_text(raw_path: &str, decoding: Decoding) -> Result<String, InputError> {
    let path = resolve_path(raw_path);
    tracing::debug!(path = %path.display(), "reading input file");
    read_text_file(&path, decoding)
}
