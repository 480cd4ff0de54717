//! Scheme/policy impact inference.

use civicpulse_core::Post;

use crate::classifier::classify;
use crate::misinfo::truncate_chars;
use crate::types::{Scheme, Sentiment};

/// Policy vocabulary. Matched case-insensitively by substring.
const SCHEME_KEYWORDS: &[&str] = &[
    "scheme",
    "initiative",
    "program",
    "project",
    "plan",
    "mission",
    "policy",
    "welfare",
];

const MAX_SCHEMES: usize = 6;
const NAME_MAX_CHARS: usize = 60;

/// Derive scheme impact entries from policy-flavoured posts.
///
/// Before/after sentiment figures are synthetic: a fixed baseline stepped by
/// list position, lifted by 20 points when the post classifies positive and
/// 5 otherwise. Impact is seeded from the like count, capped at 95.
#[must_use]
pub fn derive_schemes(posts: &[Post]) -> Vec<Scheme> {
    posts
        .iter()
        .filter(|post| {
            let folded = post.text.to_lowercase();
            SCHEME_KEYWORDS.iter().any(|k| folded.contains(k))
        })
        .take(MAX_SCHEMES)
        .enumerate()
        .map(|(i, post)| {
            #[allow(clippy::cast_possible_truncation)]
            let index = i as u32;
            let before = 40 + index * 3;
            let after = if classify(&post.text) == Sentiment::Positive {
                before + 20
            } else {
                before + 5
            };
            #[allow(clippy::cast_possible_truncation)]
            let impact_score = (60 + (post.likes % 30) as u32).min(95);
            Scheme {
                id: post.id.clone(),
                name: truncate_chars(&post.text, NAME_MAX_CHARS),
                impact_score,
                sentiment_before: before,
                sentiment_after: after,
                announcement_date: post.created_at,
                category: "Policy",
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
            platform: Platform::Twitter,
            url: None,
        }
    }

    #[test]
    fn no_matches_returns_empty() {
        let posts = vec![post("a", "traffic jam on the highway", 10)];
        assert!(derive_schemes(&posts).is_empty());
    }

    #[test]
    fn positive_scheme_post_gets_twenty_point_lift() {
        // Two positive terms ("great", "success"), zero negative.
        let posts = vec![post("a", "Great success with the new water scheme", 100)];
        let schemes = derive_schemes(&posts);
        assert_eq!(schemes.len(), 1);
        let scheme = &schemes[0];
        assert_eq!(scheme.sentiment_before, 40);
        assert_eq!(scheme.sentiment_after, 60);
        // min(95, 60 + 100 % 30) = 70
        assert_eq!(scheme.impact_score, 70);
        assert_eq!(scheme.category, "Policy");
    }

    #[test]
    fn non_positive_post_gets_five_point_lift() {
        let posts = vec![post("a", "the new housing policy announced", 0)];
        let schemes = derive_schemes(&posts);
        assert_eq!(schemes[0].sentiment_before, 40);
        assert_eq!(schemes[0].sentiment_after, 45);
    }

    #[test]
    fn baseline_steps_by_position_and_caps_at_six() {
        let posts: Vec<Post> = (0..9)
            .map(|i| post(&format!("s{i}"), "a welfare initiative", 0))
            .collect();
        let schemes = derive_schemes(&posts);
        assert_eq!(schemes.len(), 6);
        let baselines: Vec<u32> = schemes.iter().map(|s| s.sentiment_before).collect();
        assert_eq!(baselines, vec![40, 43, 46, 49, 52, 55]);
    }

    #[test]
    fn impact_score_caps_at_ninety_five() {
        // 60 + likes % 30 maxes out at 89, under the 95 cap
        let posts = vec![post("a", "mega project", 29)];
        assert_eq!(derive_schemes(&posts)[0].impact_score, 89);
    }

    #[test]
    fn name_is_truncated() {
        let long = format!("scheme {}", "y".repeat(200));
        let posts = vec![post("a", &long, 0)];
        assert_eq!(derive_schemes(&posts)[0].name.chars().count(), 60);
    }
}
