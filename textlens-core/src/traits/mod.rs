//! Trait seams of the analyzer.

pub mod valence;

pub use valence::ValenceLookup;
