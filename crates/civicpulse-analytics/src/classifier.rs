//! Lexical polarity classifier over raw post text.
//!
//! Deliberately simple: substring containment against two fixed keyword
//! lists, majority wins. No NLP, no negation handling — the dashboard needs
//! a cheap, deterministic signal, not a model.

use crate::types::Sentiment;

/// Positive polarity markers. Matched by substring, so stems cover
/// inflections ("improve" matches "improved"/"improvement").
pub(crate) const POSITIVE_TERMS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "success",
    "win",
    "victory",
    "progress",
    "develop",
    "growth",
    "improve",
    "benefit",
    "welfare",
    "support",
    "happy",
    "celebrat",
    "achiev",
    "launch",
    "inaugurat",
    "promis",
    "relief",
];

/// Negative polarity markers.
pub(crate) const NEGATIVE_TERMS: &[&str] = &[
    "bad",
    "poor",
    "fail",
    "crisis",
    "scam",
    "corrupt",
    "protest",
    "anger",
    "angry",
    "sad",
    "death",
    "flood",
    "drought",
    "shortage",
    "neglect",
    "blame",
    "fraud",
    "fake",
    "scandal",
    "outrage",
];

/// Classify text polarity by counting keyword occurrences.
///
/// Case-folds the text, counts substring occurrences of each term in both
/// lists, and returns whichever polarity has the strictly larger count
/// (ties, including empty text, are neutral). Pure and total.
#[must_use]
pub fn classify(text: &str) -> Sentiment {
    let folded = text.to_lowercase();
    let positive = count_occurrences(&folded, POSITIVE_TERMS);
    let negative = count_occurrences(&folded, NEGATIVE_TERMS);

    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

fn count_occurrences(folded: &str, terms: &[&str]) -> usize {
    terms.iter().map(|term| folded.matches(term).count()).sum()
}
