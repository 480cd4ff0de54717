//! Corpus store with search lifecycle.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use civicpulse_core::{Post, SearchResult};
use tokio::sync::RwLock;

use crate::sources::AggregatorClient;

#[derive(Debug, Default)]
struct StoreState {
    data: SearchResult,
    is_loading: bool,
    error: Option<String>,
    query: Option<String>,
    fetched_at: Option<DateTime<Utc>>,
}

/// Point-in-time view of the store for consumers.
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    pub data: SearchResult,
    pub is_loading: bool,
    pub error: Option<String>,
    pub query: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
}

/// Holds the corpus from the latest completed search.
///
/// A new search replaces the corpus wholesale — there is no incremental
/// merge. A failed search keeps the previous corpus and surfaces a single
/// error message. Each search carries a monotonically increasing generation;
/// a completion for a superseded generation is discarded, so an overlapping
/// older search can never overwrite a newer one.
pub struct PostStore {
    client: AggregatorClient,
    state: RwLock<StoreState>,
    generation: AtomicU64,
}

impl PostStore {
    #[must_use]
    pub fn new(client: AggregatorClient) -> Self {
        Self {
            client,
            state: RwLock::new(StoreState::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Run one search against the aggregation service.
    ///
    /// Side-effecting: outcome lands in the store state rather than a return
    /// value. Sets `is_loading` for the duration, clears any prior error on
    /// start, and on failure records a human-readable message while keeping
    /// the previous corpus intact.
    pub async fn search(&self, query: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.write().await;
            state.is_loading = true;
            state.error = None;
            state.query = Some(query.to_string());
        }
        tracing::info!(query, generation, "search started");

        let outcome = self.client.fetch_social_data(query).await;

        let mut state = self.state.write().await;
        if generation != self.generation.load(Ordering::SeqCst) {
            tracing::debug!(query, generation, "discarding superseded search response");
            return;
        }

        match outcome {
            Ok(data) => {
                tracing::info!(
                    query,
                    posts = data.all_posts().len(),
                    "search completed; corpus replaced"
                );
                state.data = data;
                state.fetched_at = Some(Utc::now());
                state.error = None;
            }
            Err(e) => {
                tracing::warn!(query, error = %e, "search failed; keeping previous corpus");
                state.error = Some(format!("search \"{query}\" failed: {e}"));
            }
        }
        state.is_loading = false;
    }

    /// Trigger one search with the default query if none has run yet.
    pub async fn ensure_initial_fetch(&self, default_query: &str) {
        if self.generation.load(Ordering::SeqCst) == 0 {
            self.search(default_query).await;
        }
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        let state = self.state.read().await;
        StoreSnapshot {
            data: state.data.clone(),
            is_loading: state.is_loading,
            error: state.error.clone(),
            query: state.query.clone(),
            fetched_at: state.fetched_at,
        }
    }

    /// The unified corpus, buckets concatenated in fixed platform order.
    pub async fn all_posts(&self) -> Vec<Post> {
        self.state.read().await.data.all_posts()
    }
}
