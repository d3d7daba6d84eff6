//! Context rules applied to a token's raw lexicon valence.

use super::rules::{
    booster_scalar, is_negation, special_case_valence, C_INCR, EXCLAMATION_AMPLIFIER,
    EXCLAMATION_CAP, NORMALIZE_ALPHA, N_SCALAR, QUESTION_AMPLIFIER, QUESTION_CAP_AMPLIFIER,
};
use super::sentitext::is_all_caps;

/// Scalar a preceding booster/dampener contributes to `valence`.
pub(crate) fn scalar_inc_dec(word: &str, lowered: &str, valence: f64, is_cap_diff: bool) -> f64 {
    let Some(mut scalar) = booster_scalar(lowered) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if is_all_caps(word) && is_cap_diff {
        if valence > 0.0 {
            scalar += C_INCR;
        } else {
            scalar -= C_INCR;
        }
    }
    scalar
}

/// Negation of the item at `i` by the word `start_i + 1` positions back.
pub(crate) fn negation_check(valence: f64, words: &[String], start_i: usize, i: usize) -> f64 {
    let back = |n: usize| words[i - n].as_str();
    match start_i {
        0 => {
            if is_negation(back(1)) {
                return valence * N_SCALAR;
            }
        }
        1 => {
            if back(2) == "never" && matches!(back(1), "so" | "this") {
                return valence * 1.25;
            }
            if back(2) == "without" && back(1) == "doubt" {
                return valence;
            }
            if is_negation(back(2)) {
                return valence * N_SCALAR;
            }
        }
        2 => {
            if (back(3) == "never" && matches!(back(2), "so" | "this"))
                || matches!(back(1), "so" | "this")
            {
                return valence * 1.25;
            }
            if back(3) == "without" && (back(2) == "doubt" || back(1) == "doubt") {
                return valence;
            }
            if is_negation(back(3)) {
                return valence * N_SCALAR;
            }
        }
        _ => {}
    }
    valence
}

/// Idiom overrides around position `i` and booster n-grams before it.
/// Requires `i >= 3`.
pub(crate) fn special_idioms_check(mut valence: f64, words: &[String], i: usize) -> f64 {
    let onezero = format!("{} {}", words[i - 1], words[i]);
    let twoonezero = format!("{} {} {}", words[i - 2], words[i - 1], words[i]);
    let twoone = format!("{} {}", words[i - 2], words[i - 1]);
    let threetwoone = format!("{} {} {}", words[i - 3], words[i - 2], words[i - 1]);
    let threetwo = format!("{} {}", words[i - 3], words[i - 2]);

    for seq in [&onezero, &twoonezero, &twoone, &threetwoone, &threetwo] {
        if let Some(v) = special_case_valence(seq) {
            valence = v;
            break;
        }
    }

    if words.len() - 1 > i {
        let zeroone = format!("{} {}", words[i], words[i + 1]);
        if let Some(v) = special_case_valence(&zeroone) {
            valence = v;
        }
    }
    if words.len() - 1 > i + 1 {
        let zeroonetwo = format!("{} {} {}", words[i], words[i + 1], words[i + 2]);
        if let Some(v) = special_case_valence(&zeroonetwo) {
            valence = v;
        }
    }

    for n_gram in [&threetwoone, &threetwo, &twoone] {
        if let Some(scalar) = booster_scalar(n_gram) {
            valence += scalar;
        }
    }
    valence
}

/// "least" before a word negates it, except in "at least" / "very least".
pub(crate) fn least_check(
    valence: f64,
    words: &[String],
    i: usize,
    in_lexicon: impl Fn(&str) -> bool,
) -> f64 {
    if i > 0 && words[i - 1] == "least" && !in_lexicon(&words[i - 1]) {
        if i > 1 && matches!(words[i - 2].as_str(), "at" | "very") {
            return valence;
        }
        return valence * N_SCALAR;
    }
    valence
}

/// Contrastive "but": halve everything before the first "but", boost
/// everything after it by half.
pub(crate) fn but_check(words: &[String], sentiments: &mut [f64]) {
    let Some(bi) = words.iter().position(|w| w == "but") else {
        return;
    };
    for (si, sentiment) in sentiments.iter_mut().enumerate() {
        if si < bi {
            *sentiment *= 0.5;
        } else if si > bi {
            *sentiment *= 1.5;
        }
    }
}

/// Emphasis added by `!` and `?` marks anywhere in the raw text.
pub(crate) fn punctuation_emphasis(text: &str) -> f64 {
    amplify_exclamation(text) + amplify_question(text)
}

fn amplify_exclamation(text: &str) -> f64 {
    let count = text.matches('!').count().min(EXCLAMATION_CAP);
    count as f64 * EXCLAMATION_AMPLIFIER
}

fn amplify_question(text: &str) -> f64 {
    match text.matches('?').count() {
        0 | 1 => 0.0,
        n @ 2..=3 => n as f64 * QUESTION_AMPLIFIER,
        _ => QUESTION_CAP_AMPLIFIER,
    }
}

/// Map an unbounded valence sum into `[-1, 1]`.
pub(crate) fn normalize(score: f64) -> f64 {
    let norm = score / (score * score + NORMALIZE_ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn normalize_is_bounded_and_odd() {
        assert_eq!(normalize(0.0), 0.0);
        assert!(normalize(1e9) <= 1.0);
        assert!(normalize(-1e9) >= -1.0);
        assert!((normalize(2.0) + normalize(-2.0)).abs() < 1e-12);
        assert!((normalize(3.0) - 3.0 / 24f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn exclamation_marks_saturate() {
        assert!((punctuation_emphasis("wow!") - 0.292).abs() < 1e-12);
        assert!((punctuation_emphasis("wow!!!!!!!!") - 4.0 * 0.292).abs() < 1e-12);
    }

    #[test]
    fn single_question_mark_adds_nothing() {
        assert_eq!(punctuation_emphasis("really?"), 0.0);
        assert!((punctuation_emphasis("really??") - 0.36).abs() < 1e-12);
        assert!((punctuation_emphasis("really?????") - 0.96).abs() < 1e-12);
    }

    #[test]
    fn but_reweights_around_first_but() {
        let w = words("good but great but fine");
        let mut s = vec![2.0, 0.0, 2.0, 0.0, 2.0];
        but_check(&w, &mut s);
        assert_eq!(s, vec![1.0, 0.0, 3.0, 0.0, 3.0]);
    }

    #[test]
    fn negation_one_back() {
        let w = words("not good");
        assert!((negation_check(1.9, &w, 0, 1) - 1.9 * N_SCALAR).abs() < 1e-12);
    }

    #[test]
    fn never_so_intensifies() {
        let w = words("never so good");
        assert!((negation_check(1.9, &w, 1, 2) - 1.9 * 1.25).abs() < 1e-12);
    }

    #[test]
    fn without_doubt_is_not_negation() {
        let w = words("without doubt good");
        assert_eq!(negation_check(1.9, &w, 1, 2), 1.9);
    }

    #[test]
    fn least_negates_unless_at_least() {
        let none = |_: &str| false;
        let negated = 2.0 * N_SCALAR;
        assert!((least_check(2.0, &words("the least good"), 2, none) - negated).abs() < 1e-12);
        assert_eq!(least_check(2.0, &words("at least good"), 2, none), 2.0);
        assert!((least_check(2.0, &words("least good"), 1, none) - negated).abs() < 1e-12);
    }

    #[test]
    fn idiom_overrides_valence() {
        let w = words("he gave the kiss of death");
        assert_eq!(special_idioms_check(-1.0, &w, 5), -1.5);
    }

    #[test]
    fn dampener_bigram_three_back() {
        let w = words("it was sort of nice");
        let v = special_idioms_check(1.8, &w, 4);
        assert!((v - (1.8 - 0.293)).abs() < 1e-12);
    }

    #[test]
    fn booster_flips_with_negative_valence() {
        assert!((scalar_inc_dec("very", "very", -2.0, false) + 0.293).abs() < 1e-12);
        assert!((scalar_inc_dec("VERY", "very", 2.0, true) - (0.293 + C_INCR)).abs() < 1e-12);
        assert_eq!(scalar_inc_dec("table", "table", 2.0, false), 0.0);
    }
}
