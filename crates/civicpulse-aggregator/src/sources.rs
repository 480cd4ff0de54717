//! Platform adapter fan-out.
//!
//! Each platform is fetched independently with its own timeout; a failed
//! adapter degrades to an empty bucket for that platform only. The
//! aggregation as a whole fails only when every adapter fails.

use std::time::Duration;

use civicpulse_core::{Platform, PlatformBucket, SearchResult};
use futures::future::join_all;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::error::AggregatorError;

/// HTTP client against the proxy aggregation service.
#[derive(Debug, Clone)]
pub struct AggregatorClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    limit: u32,
}

impl AggregatorClient {
    /// Build a client for the given proxy base URL.
    ///
    /// `timeout` bounds each individual platform fetch; `limit` is the
    /// per-platform page size requested upstream.
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration, limit: u32) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            limit,
        }
    }

    /// Fetch one platform's bucket for a query.
    ///
    /// # Errors
    ///
    /// Returns [`AggregatorError::Http`] on request, status, or decode
    /// failures.
    pub async fn fetch_bucket(
        &self,
        platform: Platform,
        query: &str,
    ) -> Result<PlatformBucket, AggregatorError> {
        let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC).to_string();
        let url = format!(
            "{}/api/v1/{}/posts?query={encoded}&limit={}",
            self.base_url,
            platform.as_str(),
            self.limit
        );

        let bucket: PlatformBucket = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(bucket)
    }

    /// Fan out one query to all five platforms with independent settlement.
    ///
    /// Individual adapter failures are logged and degrade to empty buckets;
    /// upstream may also legitimately return an empty bucket, which is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`AggregatorError::AllSourcesFailed`] only when every adapter
    /// fails — the caller then keeps its previous corpus.
    pub async fn fetch_social_data(&self, query: &str) -> Result<SearchResult, AggregatorError> {
        let fetches = Platform::ALL
            .iter()
            .map(|&platform| async move { (platform, self.fetch_bucket(platform, query).await) });
        let settled = join_all(fetches).await;

        let mut result = SearchResult::default();
        let mut failures = 0usize;

        for (platform, outcome) in settled {
            match outcome {
                Ok(bucket) => {
                    tracing::debug!(
                        platform = %platform,
                        count = bucket.data.len(),
                        "collected platform bucket"
                    );
                    *result.bucket_mut(platform) = bucket;
                }
                Err(e) => {
                    failures += 1;
                    tracing::warn!(
                        platform = %platform,
                        error = %e,
                        "platform fetch failed; substituting empty bucket"
                    );
                }
            }
        }

        if failures == Platform::ALL.len() {
            return Err(AggregatorError::AllSourcesFailed(query.to_string()));
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> AggregatorClient {
        AggregatorClient::new(&server.uri(), Duration::from_secs(5), 25)
    }

    fn bucket_json(count: u64, id: &str, platform: &str) -> serde_json::Value {
        serde_json::json!({
            "count": count,
            "data": [{
                "id": id,
                "text": "water scheme update",
                "author": "Reporter",
                "created_at": "2025-06-01T12:00:00Z",
                "likes": 10,
                "shares": 2,
                "platform": platform
            }]
        })
    }

    #[tokio::test]
    async fn fetch_bucket_decodes_platform_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/twitter/posts"))
            .and(query_param("query", "water crisis"))
            .and(query_param("limit", "25"))
            .respond_with(ResponseTemplate::new(200).set_body_json(bucket_json(7, "t1", "twitter")))
            .mount(&server)
            .await;

        let bucket = client_for(&server)
            .fetch_bucket(Platform::Twitter, "water crisis")
            .await
            .expect("fetch should succeed");
        assert_eq!(bucket.count, 7);
        assert_eq!(bucket.data.len(), 1);
        assert_eq!(bucket.data[0].id, "t1");
    }

    #[tokio::test]
    async fn fetch_bucket_rejects_non_2xx() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/news/posts"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = client_for(&server).fetch_bucket(Platform::News, "q").await;
        assert!(matches!(result, Err(AggregatorError::Http(_))));
    }

    #[tokio::test]
    async fn single_adapter_failure_degrades_to_empty_bucket() {
        let server = MockServer::start().await;
        for platform in ["twitter", "instagram", "facebook", "firecrawl"] {
            Mock::given(method("GET"))
                .and(path(format!("/api/v1/{platform}/posts")))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(bucket_json(1, "p1", platform)),
                )
                .mount(&server)
                .await;
        }
        Mock::given(method("GET"))
            .and(path("/api/v1/news/posts"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .fetch_social_data("q")
            .await
            .expect("partial failure must not fail the aggregation");
        assert!(result.news.data.is_empty());
        assert_eq!(result.news.count, 0);
        assert_eq!(result.twitter.data.len(), 1);
        assert_eq!(result.firecrawl.data.len(), 1);
    }

    #[tokio::test]
    async fn all_adapters_failing_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = client_for(&server).fetch_social_data("doomed query").await;
        assert!(
            matches!(result, Err(AggregatorError::AllSourcesFailed(ref q)) if q == "doomed query")
        );
    }

    #[tokio::test]
    async fn query_is_percent_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("query", "cauvery & delta"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"count": 0, "data": []})),
            )
            .mount(&server)
            .await;

        let bucket = client_for(&server)
            .fetch_bucket(Platform::Facebook, "cauvery & delta")
            .await
            .expect("encoded query should round-trip");
        assert!(bucket.data.is_empty());
    }
}
