use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use chrono::{DateTime, Utc};
use civicpulse_core::Post;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchAccepted {
    pub query: String,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PostsData {
    pub posts: Vec<Post>,
    /// Upstream-reported total across buckets; may exceed `posts.len()`.
    pub total_count: u64,
    pub is_loading: bool,
    pub error: Option<String>,
    pub query: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
}

/// Kick off a search in the background and acknowledge immediately.
///
/// The fetch can take up to the adapter timeout; callers poll `/posts` or
/// the analytics endpoints for the replaced corpus.
pub(super) async fn trigger_search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<ApiResponse<SearchAccepted>>, ApiError> {
    let query = request.query.trim().to_string();
    if query.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "query must not be empty",
        ));
    }

    let store = Arc::clone(&state.store);
    let task_query = query.clone();
    tokio::spawn(async move { store.search(&task_query).await });

    Ok(Json(ApiResponse {
        data: SearchAccepted {
            query,
            status: "started",
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Current corpus plus fetch status.
pub(super) async fn get_posts(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<PostsData>> {
    let snapshot = state.store.snapshot().await;
    Json(ApiResponse {
        data: PostsData {
            posts: snapshot.data.all_posts(),
            total_count: snapshot.data.total_count(),
            is_loading: snapshot.is_loading,
            error: snapshot.error,
            query: snapshot.query,
            fetched_at: snapshot.fetched_at,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
