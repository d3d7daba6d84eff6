use std::sync::Arc;

use proptest::prelude::*;
use textlens_analysis::metrics::{
    char_count_with_spaces, char_count_without_spaces, top_words, word_count,
};
use textlens_analysis::{Lexicon, SentimentScorer};
use textlens_core::constants::TOP_WORDS_LIMIT;
use textlens_core::models::SentimentLabel;

fn scorer() -> SentimentScorer {
    let lexicon = Lexicon::from_entries([
        ("good", 1.9),
        ("bad", -2.5),
        ("love", 3.2),
        ("hate", -2.7),
        ("no", -1.2),
        (":)", 2.0),
    ]);
    SentimentScorer::new(Arc::new(lexicon))
}

/// Text built from lexicon words, modifiers, and punctuation so the
/// heuristics actually fire.
fn sentiment_text() -> impl Strategy<Value = String> {
    let word = prop::sample::select(vec![
        "good", "bad", "love", "hate", "no", "not", "very", "but", "least", "kind", "of", "GOOD",
        "so", "never", ":)", "the", "cat", "!", "??", "sort", "at", "without", "doubt",
    ]);
    prop::collection::vec(word, 0..25).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn char_counts_are_consistent(s in ".*") {
        prop_assert_eq!(char_count_with_spaces(&s), s.chars().count());
        prop_assert!(char_count_without_spaces(&s) <= char_count_with_spaces(&s));
        prop_assert!(word_count(&s) <= char_count_without_spaces(&s));
    }

    #[test]
    fn ranking_is_idempotent_and_bounded(s in ".{0,300}") {
        let first = top_words(&s, TOP_WORDS_LIMIT);
        let second = top_words(&s, TOP_WORDS_LIMIT);
        prop_assert!(first.len() <= TOP_WORDS_LIMIT);
        prop_assert!(first.windows(2).all(|w| w[0].count >= w[1].count));
        prop_assert!(first.iter().all(|e| e.count >= 1));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn polarity_mass_sums_to_one(s in sentiment_text()) {
        let scores = scorer().polarity_scores(&s);
        let total = scores.positive + scores.neutral + scores.negative;
        prop_assert!((total - 1.0).abs() < 1e-6, "total = {}", total);
        prop_assert!((-1.0..=1.0).contains(&scores.compound));
    }

    #[test]
    fn arbitrary_text_scores_are_well_formed(s in ".{0,200}") {
        let scores = scorer().polarity_scores(&s);
        let total = scores.positive + scores.neutral + scores.negative;
        prop_assert!((total - 1.0).abs() < 1e-6);
        prop_assert!([scores.positive, scores.neutral, scores.negative]
            .iter()
            .all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn label_is_monotonic_in_compound(a in -1.0f64..=1.0, b in -1.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let rank = |l: SentimentLabel| match l {
            SentimentLabel::Negative => 0,
            SentimentLabel::Neutral => 1,
            SentimentLabel::Positive => 2,
        };
        prop_assert!(
            rank(SentimentLabel::from_compound(lo)) <= rank(SentimentLabel::from_compound(hi))
        );
    }
}
