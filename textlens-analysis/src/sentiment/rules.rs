//! Fixed VADER word lists and constants.

/// Booster increment.
pub const B_INCR: f64 = 0.293;
/// Dampener decrement.
pub const B_DECR: f64 = -0.293;
/// ALL-CAPS emphasis increment.
pub const C_INCR: f64 = 0.733;
/// Negation scalar.
pub const N_SCALAR: f64 = -0.74;
/// Saturation constant of the compound normalization.
pub const NORMALIZE_ALPHA: f64 = 15.0;

/// Per-`!` amplifier and the mark count it saturates at.
pub const EXCLAMATION_AMPLIFIER: f64 = 0.292;
pub const EXCLAMATION_CAP: usize = 4;
/// Per-`?` amplifier for 2–3 marks, and the flat amplifier beyond that.
pub const QUESTION_AMPLIFIER: f64 = 0.18;
pub const QUESTION_CAP_AMPLIFIER: f64 = 0.96;

/// Words that negate the sentiment of what follows.
pub const NEGATE: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

/// Booster/dampener scalar of a lower-cased word or n-gram.
pub fn booster_scalar(word: &str) -> Option<f64> {
    match word {
        "absolutely" | "amazingly" | "awfully" | "completely" | "considerable" | "considerably"
        | "decidedly" | "deeply" | "effing" | "enormous" | "enormously" | "entirely"
        | "especially" | "exceptional" | "exceptionally" | "extreme" | "extremely"
        | "fabulously" | "flipping" | "flippin" | "frackin" | "fracking" | "fricking"
        | "frickin" | "frigging" | "friggin" | "fully" | "fuckin" | "fucking" | "fuggin"
        | "fugging" | "greatly" | "hella" | "highly" | "hugely" | "incredible" | "incredibly"
        | "intensely" | "major" | "majorly" | "more" | "most" | "particularly" | "purely"
        | "quite" | "really" | "remarkably" | "so" | "substantially" | "thoroughly" | "total"
        | "totally" | "tremendous" | "tremendously" | "uber" | "unbelievably" | "unusually"
        | "utter" | "utterly" | "very" => Some(B_INCR),
        "almost" | "barely" | "hardly" | "just enough" | "kind of" | "kinda" | "kindof"
        | "kind-of" | "less" | "little" | "marginal" | "marginally" | "occasional"
        | "occasionally" | "partly" | "scarce" | "scarcely" | "slight" | "slightly"
        | "somewhat" | "sort of" | "sorta" | "sortof" | "sort-of" => Some(B_DECR),
        _ => None,
    }
}

/// Fixed valence of idioms that override their constituent words.
pub fn special_case_valence(phrase: &str) -> Option<f64> {
    match phrase {
        "the shit" | "the bomb" | "to die for" => Some(3.0),
        "bad ass" | "badass" => Some(1.5),
        "bus stop" => Some(0.0),
        "yeah right" => Some(-2.0),
        "kiss of death" => Some(-1.5),
        "beating heart" => Some(3.1),
        "broken heart" => Some(-2.9),
        _ => None,
    }
}

/// Whether a lower-cased word negates: a listed negation or any `n't` form.
pub fn is_negation(word: &str) -> bool {
    NEGATE.contains(&word) || word.contains("n't")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boosters_and_dampeners() {
        assert_eq!(booster_scalar("very"), Some(B_INCR));
        assert_eq!(booster_scalar("sort of"), Some(B_DECR));
        assert_eq!(booster_scalar("barely"), Some(B_DECR));
        assert_eq!(booster_scalar("good"), None);
    }

    #[test]
    fn negation_detection() {
        assert!(is_negation("never"));
        assert!(is_negation("shouldn't"));
        assert!(is_negation("mustn't've"));
        assert!(!is_negation("maybe"));
    }

    #[test]
    fn idioms() {
        assert_eq!(special_case_valence("kiss of death"), Some(-1.5));
        assert_eq!(special_case_valence("bus stop"), Some(0.0));
        assert_eq!(special_case_valence("the cat"), None);
    }
}
