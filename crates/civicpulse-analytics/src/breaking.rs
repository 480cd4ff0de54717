//! Breaking-news alerts from the news bucket.

use civicpulse_core::Post;

use crate::types::{BreakingNews, Severity};

const MAX_ALERTS: usize = 6;

/// Map news-platform posts directly into ranked alerts.
///
/// Takes the first 6 news posts in corpus order — no recency or signal
/// ranking — and assigns severity purely by list position. A display-order
/// heuristic, not a content-based assessment.
#[must_use]
pub fn derive_breaking_news(news_posts: &[Post]) -> Vec<BreakingNews> {
    news_posts
        .iter()
        .take(MAX_ALERTS)
        .enumerate()
        .map(|(rank, post)| BreakingNews {
            id: post.id.clone(),
            headline: post.text.clone(),
            source: post.author.clone(),
            severity: Severity::positional(rank),
            reported_at: post.created_at,
            url: post.url.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use civicpulse_core::Platform;

    use super::*;

    fn news_post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            text: format!("headline {id}"),
            author: "The Hindu".to_string(),
            created_at: Utc::now(),
            likes: 0,
            shares: 0,
            platform: Platform::News,
            url: Some(format!("https://news.example.com/{id}")),
        }
    }

    #[test]
    fn empty_bucket_yields_no_alerts() {
        assert!(derive_breaking_news(&[]).is_empty());
    }

    #[test]
    fn caps_at_six_in_corpus_order() {
        let posts: Vec<Post> = (0..10).map(|i| news_post(&format!("n{i}"))).collect();
        let alerts = derive_breaking_news(&posts);
        assert_eq!(alerts.len(), 6);
        assert_eq!(alerts[0].id, "n0");
        assert_eq!(alerts[5].id, "n5");
    }

    #[test]
    fn severity_is_positional() {
        let posts: Vec<Post> = (0..6).map(|i| news_post(&format!("n{i}"))).collect();
        let alerts = derive_breaking_news(&posts);
        assert_eq!(alerts[0].severity, Severity::Critical);
        assert_eq!(alerts[1].severity, Severity::High);
        assert_eq!(alerts[2].severity, Severity::High);
        assert_eq!(alerts[3].severity, Severity::Medium);
        assert_eq!(alerts[5].severity, Severity::Medium);
    }
}
