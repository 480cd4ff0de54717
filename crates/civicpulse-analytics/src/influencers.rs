//! Influencer rankings by author engagement.

use std::collections::HashMap;

use civicpulse_core::{Platform, Post};

use crate::hashtags::HASHTAG_RE;
use crate::types::{Influencer, Sentiment};

const MAX_INFLUENCERS: usize = 10;
const MAX_RECENT_TOPICS: usize = 3;
const HASHTAGS_PER_POST: usize = 2;

#[derive(Debug)]
struct AuthorStats {
    post_count: u64,
    likes: u64,
    shares: u64,
    /// Platform of the author's first post seen in corpus order.
    platform: Platform,
    recent_topics: Vec<String>,
}

/// Group posts by exact author string and rank by total engagement.
///
/// Returns at most 10 entries sorted by likes+shares descending. Follower
/// and reach figures are synthesized from engagement — no real audience
/// data exists. Alignment is always neutral: stance classification is not
/// implemented. Posts with an empty author are skipped as malformed.
#[must_use]
pub fn derive_influencers(posts: &[Post]) -> Vec<Influencer> {
    let mut stats: HashMap<&str, AuthorStats> = HashMap::new();

    for post in posts {
        if post.author.is_empty() {
            continue;
        }
        let entry = stats.entry(post.author.as_str()).or_insert_with(|| AuthorStats {
            post_count: 0,
            likes: 0,
            shares: 0,
            platform: post.platform,
            recent_topics: Vec::new(),
        });
        entry.post_count += 1;
        entry.likes += post.likes;
        entry.shares += post.shares;
        for tag in HASHTAG_RE
            .find_iter(&post.text)
            .take(HASHTAGS_PER_POST)
            .map(|m| m.as_str().to_lowercase())
        {
            if entry.recent_topics.len() < MAX_RECENT_TOPICS
                && !entry.recent_topics.contains(&tag)
            {
                entry.recent_topics.push(tag);
            }
        }
    }

    let mut ranked: Vec<(u64, Influencer)> = stats
        .into_iter()
        .map(|(author, s)| {
            let total = s.likes + s.shares;
            #[allow(clippy::cast_precision_loss)]
            let engagement = (total as f64 / s.post_count as f64 * 10.0).round() / 10.0;
            let handle: String = author
                .split_whitespace()
                .collect::<String>()
                .to_lowercase();
            let influencer = Influencer {
                id: handle.clone(),
                name: author.to_string(),
                handle,
                platform: s.platform,
                followers: s.likes * 10 + s.shares * 20,
                reach: s.likes * 20 + s.shares * 50,
                engagement,
                alignment: Sentiment::Neutral,
                recent_topics: s.recent_topics,
            };
            (total, influencer)
        })
        .collect();

    ranked.sort_by(|(ta, a), (tb, b)| tb.cmp(ta).then_with(|| a.name.cmp(&b.name)));
    ranked
        .into_iter()
        .take(MAX_INFLUENCERS)
        .map(|(_, influencer)| influencer)
        .collect()
}
