use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upstream platform a post was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Instagram,
    Facebook,
    News,
    Firecrawl,
}

impl Platform {
    /// Fixed concatenation order for the unified corpus.
    pub const ALL: [Platform; 5] = [
        Platform::Twitter,
        Platform::Instagram,
        Platform::Facebook,
        Platform::News,
        Platform::Firecrawl,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::News => "news",
            Platform::Firecrawl => "firecrawl",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn now() -> DateTime<Utc> {
    Utc::now()
}

/// A single collected social/news post. Immutable once ingested.
///
/// Upstream adapters occasionally omit fields; everything except `id` and
/// `platform` defaults so one malformed record never aborts a whole bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author: String,
    #[serde(default = "now")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub shares: u64,
    pub platform: Platform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Post {
    /// Likes + shares — the universal weighting unit for volume/ranking.
    #[must_use]
    pub fn engagement(&self) -> u64 {
        self.likes + self.shares
    }

    /// Engagement floored at 1 so zero-engagement posts still count once.
    #[must_use]
    pub fn weight(&self) -> u64 {
        self.engagement().max(1)
    }
}

/// One platform's slice of a search result.
///
/// `count` is the upstream-reported total and may exceed `data.len()` when
/// the upstream returns a partial page. Derivation must use `data`; `count`
/// is for display totals only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformBucket {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub data: Vec<Post>,
}

/// The five-bucket aggregation result for one query.
///
/// Missing buckets deserialize to empty defaults so a partially failed
/// upstream aggregation still parses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub twitter: PlatformBucket,
    #[serde(default)]
    pub instagram: PlatformBucket,
    #[serde(default)]
    pub facebook: PlatformBucket,
    #[serde(default)]
    pub news: PlatformBucket,
    #[serde(default)]
    pub firecrawl: PlatformBucket,
}

impl SearchResult {
    #[must_use]
    pub fn bucket(&self, platform: Platform) -> &PlatformBucket {
        match platform {
            Platform::Twitter => &self.twitter,
            Platform::Instagram => &self.instagram,
            Platform::Facebook => &self.facebook,
            Platform::News => &self.news,
            Platform::Firecrawl => &self.firecrawl,
        }
    }

    #[must_use]
    pub fn bucket_mut(&mut self, platform: Platform) -> &mut PlatformBucket {
        match platform {
            Platform::Twitter => &mut self.twitter,
            Platform::Instagram => &mut self.instagram,
            Platform::Facebook => &mut self.facebook,
            Platform::News => &mut self.news,
            Platform::Firecrawl => &mut self.firecrawl,
        }
    }

    /// The unified corpus: all buckets concatenated in fixed platform order.
    #[must_use]
    pub fn all_posts(&self) -> Vec<Post> {
        Platform::ALL
            .iter()
            .flat_map(|&p| self.bucket(p).data.iter().cloned())
            .collect()
    }

    /// Sum of upstream-reported counts. Display only.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        Platform::ALL.iter().map(|&p| self.bucket(p).count).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Platform::ALL.iter().all(|&p| self.bucket(p).data.is_empty())
    }
}
