//! Tokenization as VADER sees it.

/// Whitespace tokens with edge punctuation stripped, plus their lower-case
/// forms and whether the text mixes ALL-CAPS and other tokens.
pub(crate) struct SentiText<'a> {
    pub tokens: Vec<&'a str>,
    pub lowered: Vec<String>,
    pub is_cap_diff: bool,
}

impl<'a> SentiText<'a> {
    pub fn new(text: &'a str) -> Self {
        let tokens: Vec<&str> = text.split_whitespace().map(strip_punc_if_word).collect();
        let lowered = tokens.iter().map(|t| t.to_lowercase()).collect();
        let is_cap_diff = allcap_differential(&tokens);
        Self {
            tokens,
            lowered,
            is_cap_diff,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Strip ASCII punctuation from both ends unless that leaves two characters
/// or fewer, which keeps emoticons such as `:)` and `<3` intact.
fn strip_punc_if_word(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

/// At least one cased character and no lower-case ones.
pub(crate) fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

/// True when some, but not all, tokens are ALL-CAPS.
fn allcap_differential(tokens: &[&str]) -> bool {
    let allcaps = tokens.iter().filter(|t| is_all_caps(t)).count();
    let differential = tokens.len() - allcaps;
    differential > 0 && differential < tokens.len()
}
