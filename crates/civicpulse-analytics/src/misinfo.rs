//! Misinformation candidate flagging.

use std::sync::LazyLock;

use civicpulse_core::Post;
use regex::Regex;

use crate::types::{MisinformationClaim, Severity};

/// Lexical suspicion markers. Applied to lowercased text.
pub(crate) static MISINFO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"fake|false|hoax|scam|fraud|rumou?r|mislead|manipulat")
        .expect("misinfo regex is valid")
});

const MAX_CLAIMS: usize = 5;
const CLAIM_MAX_CHARS: usize = 120;
const VELOCITY_CAP: f64 = 9.5;

/// Char-boundary-safe prefix truncation.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Flag suspicious posts as misinformation candidates.
///
/// Takes the first 5 matches in corpus order. Severity is positional (rank
/// in the flagged list), not a content assessment; rebuttal points are fixed
/// placeholders pending a real fact-check integration.
#[must_use]
pub fn derive_misinformation(posts: &[Post]) -> Vec<MisinformationClaim> {
    posts
        .iter()
        .filter(|post| MISINFO_RE.is_match(&post.text.to_lowercase()))
        .take(MAX_CLAIMS)
        .enumerate()
        .map(|(rank, post)| {
            #[allow(clippy::cast_precision_loss)]
            let spread_velocity =
                (2.0 + post.engagement() as f64 / 100.0).min(VELOCITY_CAP);
            MisinformationClaim {
                id: post.id.clone(),
                claim: truncate_chars(&post.text, CLAIM_MAX_CHARS),
                severity: Severity::positional(rank),
                spread_velocity,
                sources: vec![post.platform],
                rebuttal_points: vec![
                    "Official records do not support this claim".to_string(),
                    "No verifiable source is cited".to_string(),
                    "Fact-check request filed with the press bureau".to_string(),
                ],
                status: "active",
                first_detected: post.created_at,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use civicpulse_core::Platform;

    use super::*;

    fn post(id: &str, text: &str, likes: u64) -> Post {
        Post {
            id: id.to_string(),
            text: text.to_string(),
            author: "tester".to_string(),
            created_at: Utc::now(),
            likes,
            shares: 0,
            platform: Platform::Facebook,
            url: None,
        }
    }

    #[test]
    fn empty_corpus_yields_no_claims() {
        assert!(derive_misinformation(&[]).is_empty());
    }

    #[test]
    fn clean_posts_are_not_flagged() {
        let posts = vec![post("a", "new metro line opens next month", 10)];
        assert!(derive_misinformation(&posts).is_empty());
    }

    #[test]
    fn flags_both_rumor_spellings() {
        let posts = vec![
            post("a", "a rumor about the minister", 0),
            post("b", "a rumour about the minister", 0),
        ];
        assert_eq!(derive_misinformation(&posts).len(), 2);
    }

    #[test]
    fn takes_first_five_in_corpus_order_with_positional_severity() {
        let posts: Vec<Post> = (0..8)
            .map(|i| post(&format!("m{i}"), "this is fake", 0))
            .collect();
        let claims = derive_misinformation(&posts);
        assert_eq!(claims.len(), 5);
        assert_eq!(claims[0].id, "m0");
        assert_eq!(claims[0].severity, Severity::Critical);
        assert_eq!(claims[1].severity, Severity::High);
        assert_eq!(claims[2].severity, Severity::High);
        assert_eq!(claims[3].severity, Severity::Medium);
        assert_eq!(claims[4].severity, Severity::Medium);
    }

    #[test]
    fn spread_velocity_scales_with_engagement_and_caps() {
        let posts = vec![
            post("low", "manipulated photo circulating", 100),
            post("high", "manipulated photo circulating", 100_000),
        ];
        let claims = derive_misinformation(&posts);
        assert_eq!(claims[0].spread_velocity, 3.0);
        assert_eq!(claims[1].spread_velocity, 9.5);
    }

    #[test]
    fn claim_text_is_truncated() {
        let long = format!("fake {}", "x".repeat(300));
        let posts = vec![post("a", &long, 0)];
        let claims = derive_misinformation(&posts);
        assert_eq!(claims[0].claim.chars().count(), 120);
    }

    #[test]
    fn status_and_sources_are_fixed() {
        let posts = vec![post("a", "hoax alert", 0)];
        let claims = derive_misinformation(&posts);
        assert_eq!(claims[0].status, "active");
        assert_eq!(claims[0].sources, vec![Platform::Facebook]);
        assert_eq!(claims[0].rebuttal_points.len(), 3);
    }
}
