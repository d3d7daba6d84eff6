//! Sentiment lexicon: parsing, sources, and the one-time acquisition.

pub mod loader;
pub mod source;
pub mod table;

pub use loader::{LexiconLoader, LexiconOrigin};
pub use source::{HttpLexiconSource, LexiconSource};
pub use table::Lexicon;
