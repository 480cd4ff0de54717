//! Synthetic sentiment/emotion time series.
//!
//! The dashboard charts expect exactly six points. These series are NOT
//! histograms over each post's `created_at`: one aggregate ratio is computed
//! over the whole corpus and perturbed by a deterministic positional offset
//! per bucket, then floored at a small positive minimum. This reproduces the
//! source system's shape, which downstream charts assume.

use civicpulse_core::Post;

use crate::classifier::classify;
use crate::misinfo::MISINFO_RE;
use crate::types::{EmotionPoint, Sentiment, SentimentPoint};

/// Fixed hour labels, one per bucket.
const HOURS: [&str; 6] = ["00:00", "04:00", "08:00", "12:00", "16:00", "20:00"];

const SENTIMENT_SCALE: f64 = 2.0;
const SENTIMENT_FLOOR: f64 = 5.0;
const EMOTION_SCALE: f64 = 1.5;
const EMOTION_FLOOR: f64 = 3.0;

/// Signed positional offset for bucket `i`: zero at the fourth bucket,
/// negative before, positive after.
#[allow(clippy::cast_precision_loss)]
fn positional_offset(i: usize, scale: f64) -> f64 {
    (i as f64 - 3.0) * scale
}

struct CorpusRatios {
    positive: f64,
    negative: f64,
    neutral: f64,
    flagged: f64,
}

#[allow(clippy::cast_precision_loss)]
fn corpus_ratios(posts: &[Post]) -> CorpusRatios {
    let total = posts.len().max(1) as f64;
    let mut positive = 0usize;
    let mut negative = 0usize;
    let mut flagged = 0usize;

    for post in posts {
        match classify(&post.text) {
            Sentiment::Positive => positive += 1,
            Sentiment::Negative => negative += 1,
            Sentiment::Neutral => {}
        }
        if MISINFO_RE.is_match(&post.text.to_lowercase()) {
            flagged += 1;
        }
    }
    let neutral = posts.len() - positive - negative;

    CorpusRatios {
        positive: positive as f64 / total * 100.0,
        negative: negative as f64 / total * 100.0,
        neutral: neutral as f64 / total * 100.0,
        flagged: flagged as f64 / total * 100.0,
    }
}

/// Derive the six-bucket sentiment series for the corpus.
#[must_use]
pub fn derive_sentiment_series(posts: &[Post]) -> Vec<SentimentPoint> {
    let ratios = corpus_ratios(posts);

    HOURS
        .iter()
        .enumerate()
        .map(|(i, &hour)| {
            let offset = positional_offset(i, SENTIMENT_SCALE);
            SentimentPoint {
                hour,
                positive: (ratios.positive + offset).max(SENTIMENT_FLOOR),
                negative: (ratios.negative + offset).max(SENTIMENT_FLOOR),
                neutral: (ratios.neutral + offset).max(SENTIMENT_FLOOR),
            }
        })
        .collect()
}

/// Derive the six-bucket emotion series for the corpus.
///
/// Emotion ratios are projections of the classifier and misinformation
/// counts — no emotion model exists.
#[must_use]
pub fn derive_emotion_series(posts: &[Post]) -> Vec<EmotionPoint> {
    let ratios = corpus_ratios(posts);

    HOURS
        .iter()
        .enumerate()
        .map(|(i, &hour)| {
            let offset = positional_offset(i, EMOTION_SCALE);
            EmotionPoint {
                hour,
                anger: (ratios.negative * 0.7 + offset).max(EMOTION_FLOOR),
                joy: (ratios.positive * 0.8 + offset).max(EMOTION_FLOOR),
                fear: (ratios.flagged + offset).max(EMOTION_FLOOR),
                sadness: (ratios.negative * 0.4 + offset).max(EMOTION_FLOOR),
            }
        })
        .collect()
}
