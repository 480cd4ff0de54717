//! Hashtag extraction and ranking.

use std::collections::HashMap;
use std::sync::LazyLock;

use civicpulse_core::{Platform, Post};
use regex::Regex;

use crate::classifier::classify;
use crate::types::{Hashtag, HashtagSources, Sentiment};

pub(crate) static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("hashtag regex is valid"));

const MAX_HASHTAGS: usize = 15;

#[derive(Debug)]
struct TagStats {
    volume: u64,
    growth: f64,
    sentiment: Sentiment,
    /// Occurrence count per platform, indexed by `Platform::ALL` position.
    occurrences: [u32; 5],
    total_occurrences: u32,
}

fn platform_index(platform: Platform) -> usize {
    Platform::ALL
        .iter()
        .position(|&p| p == platform)
        .unwrap_or(0)
}

/// Extract and rank hashtags from the corpus.
///
/// Returns at most 15 tags sorted by accumulated engagement volume
/// descending (ties broken by tag for determinism). Growth is a noisy
/// per-occurrence accumulator of each post's engagement delta against the
/// corpus average — kept as-is from the source system, not a clean
/// percentage. The stored sentiment is the label of the *last* matching
/// post processed, not a majority vote.
#[must_use]
pub fn derive_hashtags(posts: &[Post]) -> Vec<Hashtag> {
    let total_engagement: u64 = posts.iter().map(Post::engagement).sum();
    #[allow(clippy::cast_precision_loss)]
    let avg_engagement = if posts.is_empty() {
        0.0
    } else {
        total_engagement as f64 / posts.len() as f64
    };

    let mut stats: HashMap<String, TagStats> = HashMap::new();

    for post in posts {
        let matches: Vec<&str> = HASHTAG_RE.find_iter(&post.text).map(|m| m.as_str()).collect();
        if matches.is_empty() {
            continue;
        }
        let sentiment = classify(&post.text);
        #[allow(clippy::cast_precision_loss)]
        let growth_delta = if avg_engagement > 0.0 {
            ((post.engagement() as f64 - avg_engagement) / avg_engagement) * 10.0
        } else {
            0.0
        };

        for raw in matches {
            let tag = raw.to_lowercase();
            let entry = stats.entry(tag).or_insert_with(|| TagStats {
                volume: 0,
                growth: 0.0,
                sentiment,
                occurrences: [0; 5],
                total_occurrences: 0,
            });
            entry.volume += post.weight();
            entry.growth += growth_delta;
            entry.sentiment = sentiment;
            entry.occurrences[platform_index(post.platform)] += 1;
            entry.total_occurrences += 1;
        }
    }

    let mut hashtags: Vec<Hashtag> = stats
        .into_iter()
        .map(|(tag, s)| {
            let share = |platform: Platform| -> u32 {
                let occ = s.occurrences[platform_index(platform)];
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                {
                    (f64::from(occ) / f64::from(s.total_occurrences.max(1)) * 100.0).round()
                        as u32
                }
            };
            Hashtag {
                id: tag.trim_start_matches('#').to_string(),
                sources: HashtagSources {
                    twitter: share(Platform::Twitter),
                    facebook: share(Platform::Facebook),
                    instagram: share(Platform::Instagram),
                    news: share(Platform::News),
                },
                tag,
                volume: s.volume,
                growth: s.growth,
                sentiment: s.sentiment,
                districts: Vec::new(),
            }
        })
        .collect();

    hashtags.sort_by(|a, b| b.volume.cmp(&a.volume).then_with(|| a.tag.cmp(&b.tag)));
    hashtags.truncate(MAX_HASHTAGS);
    hashtags
}
