//! Derived view types consumed by the dashboard.
//!
//! Field names, cardinalities, and sort orders are part of the interface:
//! the frontend consumes these shapes verbatim (camelCase on the wire).

use chrono::{DateTime, Utc};
use civicpulse_core::Platform;
use serde::Serialize;

/// Polarity label produced by the lexical classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// Severity label for alerts and claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
}

impl Severity {
    /// Positional severity heuristic: rank in the displayed list, not
    /// content analysis. Rank 0 is critical, ranks 1-2 high, the rest medium.
    #[must_use]
    pub fn positional(rank: usize) -> Self {
        match rank {
            0 => Severity::Critical,
            1 | 2 => Severity::High,
            _ => Severity::Medium,
        }
    }
}

/// Per-platform occurrence share of one hashtag, in integer percent.
///
/// Rounded independently, so the four values need not sum to exactly 100.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HashtagSources {
    pub twitter: u32,
    pub facebook: u32,
    pub instagram: u32,
    pub news: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hashtag {
    pub id: String,
    /// Lowercased, including the leading `#`.
    pub tag: String,
    /// Sum of engagement weight across matching posts.
    pub volume: u64,
    /// Noisy per-occurrence growth accumulator, signed.
    pub growth: f64,
    pub sources: HashtagSources,
    /// Label of the last matching post processed (last-write-wins).
    pub sentiment: Sentiment,
    pub districts: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Stable,
    Falling,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    /// Capitalized matched keyword.
    pub name: String,
    pub volume: u64,
    pub trend: Trend,
    pub category: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakingNews {
    pub id: String,
    pub headline: String,
    pub source: String,
    pub severity: Severity,
    pub reported_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One of exactly six synthetic time buckets for the sentiment chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentPoint {
    pub hour: &'static str,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

/// One of exactly six synthetic time buckets for the emotion chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionPoint {
    pub hour: &'static str,
    pub anger: f64,
    pub joy: f64,
    pub fear: f64,
    pub sadness: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Influencer {
    pub id: String,
    pub name: String,
    /// Author name lowercased with whitespace stripped.
    pub handle: String,
    pub platform: Platform,
    /// Synthesized from engagement; no real follower data exists.
    pub followers: u64,
    pub reach: u64,
    /// Mean engagement per post, one decimal place.
    pub engagement: f64,
    /// Always neutral — no stance classification is implemented.
    pub alignment: Sentiment,
    pub recent_topics: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MisinformationClaim {
    pub id: String,
    /// Post text truncated for display.
    pub claim: String,
    /// Positional, by rank in the flagged list — not content severity.
    pub severity: Severity,
    pub spread_velocity: f64,
    pub sources: Vec<Platform>,
    pub rebuttal_points: Vec<String>,
    pub status: &'static str,
    pub first_detected: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    pub id: String,
    pub name: String,
    pub impact_score: u32,
    pub sentiment_before: u32,
    pub sentiment_after: u32,
    pub announcement_date: DateTime<Utc>,
    pub category: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaChannel {
    pub id: String,
    pub name: String,
    pub platform: Platform,
    /// round((positive - negative) / post_count * 100), in [-100, 100].
    pub sentiment_tilt: i32,
    pub top_topics: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstituencySentiment {
    pub name: String,
    /// round(positive_fraction * 100) over mentioning posts; 50 when unmentioned.
    pub sentiment: u32,
    pub mentions: usize,
}

/// Headline scores for the landing dashboard, all in integer percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub public_sentiment: u32,
    pub opposition_momentum: u32,
    pub misinformation_risk: u32,
    pub crisis_escalation: u32,
}

/// Every derived view for one corpus, bundled.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub hashtags: Vec<Hashtag>,
    pub topics: Vec<Topic>,
    pub breaking_news: Vec<BreakingNews>,
    pub sentiment_series: Vec<SentimentPoint>,
    pub emotion_series: Vec<EmotionPoint>,
    pub influencers: Vec<Influencer>,
    pub misinformation: Vec<MisinformationClaim>,
    pub schemes: Vec<Scheme>,
    pub media_channels: Vec<MediaChannel>,
    pub constituencies: Vec<ConstituencySentiment>,
    pub kpis: KpiSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_severity_by_rank() {
        assert_eq!(Severity::positional(0), Severity::Critical);
        assert_eq!(Severity::positional(1), Severity::High);
        assert_eq!(Severity::positional(2), Severity::High);
        assert_eq!(Severity::positional(3), Severity::Medium);
        assert_eq!(Severity::positional(99), Severity::Medium);
    }

    #[test]
    fn kpi_summary_serializes_camel_case() {
        let kpis = KpiSummary {
            public_sentiment: 40,
            opposition_momentum: 20,
            misinformation_risk: 10,
            crisis_escalation: 15,
        };
        let json = serde_json::to_string(&kpis).expect("serialize");
        assert!(json.contains("\"publicSentiment\":40"));
        assert!(json.contains("\"crisisEscalation\":15"));
    }

    #[test]
    fn sentiment_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Negative).unwrap(),
            "\"negative\""
        );
    }
}
