//! Full-corpus derivation entry point.

use civicpulse_core::SearchResult;

use crate::types::AnalyticsSnapshot;
use crate::{
    derive_breaking_news, derive_constituencies, derive_emotion_series, derive_hashtags,
    derive_influencers, derive_kpis, derive_media_channels, derive_misinformation,
    derive_schemes, derive_sentiment_series, derive_topics,
};

/// Derive every analytical view from the current search result.
///
/// Pure and synchronous: the owning layer calls this once per corpus
/// replacement. Breaking news reads only the news bucket; everything else
/// reads the unified corpus in fixed platform order.
#[must_use]
pub fn derive_snapshot(result: &SearchResult) -> AnalyticsSnapshot {
    let posts = result.all_posts();
    tracing::debug!(posts = posts.len(), "deriving analytics snapshot");

    AnalyticsSnapshot {
        hashtags: derive_hashtags(&posts),
        topics: derive_topics(&posts),
        breaking_news: derive_breaking_news(&result.news.data),
        sentiment_series: derive_sentiment_series(&posts),
        emotion_series: derive_emotion_series(&posts),
        influencers: derive_influencers(&posts),
        misinformation: derive_misinformation(&posts),
        schemes: derive_schemes(&posts),
        media_channels: derive_media_channels(&posts),
        constituencies: derive_constituencies(&posts),
        kpis: derive_kpis(&posts),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use civicpulse_core::{Platform, PlatformBucket, Post};

    use super::*;

    fn post(id: &str, text: &str, likes: u64, platform: Platform) -> Post {
        Post {
            id: id.to_string(),
            text: text.to_string(),
            author: "Priya".to_string(),
            // Fixed timestamp so snapshot serialization is byte-stable.
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            likes,
            shares: 0,
            platform,
            url: None,
        }
    }

    fn sample_result() -> SearchResult {
        SearchResult {
            twitter: PlatformBucket {
                count: 2,
                data: vec![
                    post(
                        "t1",
                        "Great success with the new water scheme #TNWater",
                        100,
                        Platform::Twitter,
                    ),
                    post("t2", "fake claims spreading about the project", 40, Platform::Twitter),
                ],
            },
            news: PlatformBucket {
                count: 1,
                data: vec![post("n1", "Minister inaugurates metro extension", 5, Platform::News)],
            },
            ..SearchResult::default()
        }
    }

    #[test]
    fn empty_result_produces_typed_defaults() {
        let snapshot = derive_snapshot(&SearchResult::default());
        assert!(snapshot.hashtags.is_empty());
        assert!(snapshot.topics.is_empty());
        assert!(snapshot.breaking_news.is_empty());
        assert!(snapshot.influencers.is_empty());
        assert!(snapshot.misinformation.is_empty());
        assert!(snapshot.schemes.is_empty());
        assert!(snapshot.media_channels.is_empty());
        assert_eq!(snapshot.sentiment_series.len(), 6);
        assert_eq!(snapshot.emotion_series.len(), 6);
        assert_eq!(snapshot.constituencies.len(), 12);
    }

    #[test]
    fn populated_result_fills_every_view() {
        let snapshot = derive_snapshot(&sample_result());
        assert!(!snapshot.hashtags.is_empty());
        assert!(!snapshot.topics.is_empty());
        assert_eq!(snapshot.breaking_news.len(), 1);
        assert_eq!(snapshot.influencers.len(), 1);
        assert_eq!(snapshot.misinformation.len(), 1);
        assert!(!snapshot.schemes.is_empty());
        assert_eq!(snapshot.media_channels.len(), 2);
        assert!(snapshot.kpis.public_sentiment > 0);
    }

    #[test]
    fn breaking_news_reads_only_the_news_bucket() {
        let snapshot = derive_snapshot(&sample_result());
        assert_eq!(snapshot.breaking_news[0].id, "n1");
    }

    #[test]
    fn snapshot_is_idempotent_for_identical_corpus() {
        let result = sample_result();
        let one = serde_json::to_string(&derive_snapshot(&result)).expect("serialize");
        let two = serde_json::to_string(&derive_snapshot(&result)).expect("serialize");
        assert_eq!(one, two, "derivation must be byte-identical on the same corpus");
    }
}
