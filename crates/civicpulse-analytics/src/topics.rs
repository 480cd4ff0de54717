//! Keyword-to-category topic volumes.

use std::collections::HashMap;

use civicpulse_core::Post;

use crate::types::{Topic, Trend};

/// Fixed keyword → category table. Matched case-insensitively by substring,
/// so one post can contribute to several topics.
const TOPIC_KEYWORDS: &[(&str, &str)] = &[
    ("water", "Infrastructure"),
    ("electricity", "Infrastructure"),
    ("roads", "Infrastructure"),
    ("metro", "Infrastructure"),
    ("education", "Education"),
    ("school", "Education"),
    ("hospital", "Health"),
    ("health", "Health"),
    ("farmer", "Agriculture"),
    ("agriculture", "Agriculture"),
    ("jobs", "Economy"),
    ("employment", "Economy"),
    ("election", "Politics"),
    ("corruption", "Governance"),
    ("police", "Law & Order"),
];

const MAX_TOPICS: usize = 8;

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Volume thresholds are fixed: heavy engagement reads as rising, a trickle
/// as falling.
fn trend_for_volume(volume: u64) -> Trend {
    if volume > 500 {
        Trend::Rising
    } else if volume > 100 {
        Trend::Stable
    } else {
        Trend::Falling
    }
}

/// Derive ranked topic volumes from the corpus.
///
/// Returns at most 8 topics sorted by volume descending.
#[must_use]
pub fn derive_topics(posts: &[Post]) -> Vec<Topic> {
    let mut volumes: HashMap<&'static str, u64> = HashMap::new();

    for post in posts {
        let folded = post.text.to_lowercase();
        for &(keyword, _) in TOPIC_KEYWORDS {
            if folded.contains(keyword) {
                *volumes.entry(keyword).or_insert(0) += post.weight();
            }
        }
    }

    let mut topics: Vec<Topic> = volumes
        .into_iter()
        .map(|(keyword, volume)| {
            let category = TOPIC_KEYWORDS
                .iter()
                .find(|(k, _)| *k == keyword)
                .map_or("General", |(_, c)| *c);
            Topic {
                id: keyword.to_string(),
                name: capitalize(keyword),
                volume,
                trend: trend_for_volume(volume),
                category: category.to_string(),
            }
        })
        .collect();

    topics.sort_by(|a, b| b.volume.cmp(&a.volume).then_with(|| a.id.cmp(&b.id)));
    topics.truncate(MAX_TOPICS);
    topics
}
