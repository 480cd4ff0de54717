//! Media-channel, constituency, and KPI rollups.

use civicpulse_core::{Platform, Post, CONSTITUENCIES};

use crate::classifier::classify;
use crate::hashtags::HASHTAG_RE;
use crate::misinfo::MISINFO_RE;
use crate::types::{ConstituencySentiment, KpiSummary, MediaChannel, Sentiment};

const MAX_CHANNEL_TOPICS: usize = 3;

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn percent(numerator: usize, denominator: usize) -> u32 {
    (numerator as f64 / denominator.max(1) as f64 * 100.0).round() as u32
}

fn channel_name(platform: Platform) -> &'static str {
    match platform {
        Platform::Twitter => "Twitter/X",
        Platform::Instagram => "Instagram",
        Platform::Facebook => "Facebook",
        Platform::News => "News Media",
        Platform::Firecrawl => "Web Crawl",
    }
}

/// One synthetic channel per platform that produced posts.
///
/// Tilt is the signed share of positive-minus-negative posts on that
/// platform, in integer percent.
#[must_use]
pub fn derive_media_channels(posts: &[Post]) -> Vec<MediaChannel> {
    Platform::ALL
        .iter()
        .filter_map(|&platform| {
            let platform_posts: Vec<&Post> =
                posts.iter().filter(|p| p.platform == platform).collect();
            if platform_posts.is_empty() {
                return None;
            }

            let mut positive = 0i64;
            let mut negative = 0i64;
            let mut top_topics: Vec<String> = Vec::new();
            for post in &platform_posts {
                match classify(&post.text) {
                    Sentiment::Positive => positive += 1,
                    Sentiment::Negative => negative += 1,
                    Sentiment::Neutral => {}
                }
                for tag in HASHTAG_RE.find_iter(&post.text) {
                    let tag = tag.as_str().to_lowercase();
                    if top_topics.len() < MAX_CHANNEL_TOPICS && !top_topics.contains(&tag) {
                        top_topics.push(tag);
                    }
                }
            }

            #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
            let sentiment_tilt = ((positive - negative) as f64
                / platform_posts.len() as f64
                * 100.0)
                .round() as i32;

            Some(MediaChannel {
                id: platform.as_str().to_string(),
                name: channel_name(platform).to_string(),
                platform,
                sentiment_tilt,
                top_topics,
            })
        })
        .collect()
}

/// Per-constituency sentiment from name mentions in post text.
///
/// Constituencies nobody mentioned default to the 50 midpoint.
#[must_use]
pub fn derive_constituencies(posts: &[Post]) -> Vec<ConstituencySentiment> {
    CONSTITUENCIES
        .iter()
        .map(|&name| {
            let needle = name.to_lowercase();
            let mentioning: Vec<&Post> = posts
                .iter()
                .filter(|p| p.text.to_lowercase().contains(&needle))
                .collect();
            let sentiment = if mentioning.is_empty() {
                50
            } else {
                let positive = mentioning
                    .iter()
                    .filter(|p| classify(&p.text) == Sentiment::Positive)
                    .count();
                percent(positive, mentioning.len())
            };
            ConstituencySentiment {
                name: name.to_string(),
                sentiment,
                mentions: mentioning.len(),
            }
        })
        .collect()
}

/// Headline KPI scores over the full corpus.
///
/// The denominator is floored at one post so an empty corpus yields defined
/// zero percentages rather than NaN.
#[must_use]
pub fn derive_kpis(posts: &[Post]) -> KpiSummary {
    let total = posts.len().max(1);
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

    KpiSummary {
        public_sentiment: percent(positive, total),
        opposition_momentum: percent(negative, total),
        misinformation_risk: percent((flagged * 3).min(total), total),
        crisis_escalation: percent((negative + flagged * 2).min(total), total),
    }
}
