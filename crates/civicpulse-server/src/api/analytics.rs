use axum::{extract::State, Extension, Json};
use civicpulse_analytics::types::{
    AnalyticsSnapshot, BreakingNews, ConstituencySentiment, EmotionPoint, Hashtag, Influencer,
    KpiSummary, MediaChannel, MisinformationClaim, Scheme, SentimentPoint, Topic,
};
use civicpulse_analytics::{
    derive_breaking_news, derive_constituencies, derive_emotion_series, derive_hashtags,
    derive_influencers, derive_kpis, derive_media_channels, derive_misinformation,
    derive_schemes, derive_sentiment_series, derive_snapshot, derive_topics,
};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct SeriesData {
    pub sentiment: Vec<SentimentPoint>,
    pub emotion: Vec<EmotionPoint>,
}

/// The whole dashboard payload in one response.
pub(super) async fn full_snapshot(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<AnalyticsSnapshot>> {
    let snapshot = state.store.snapshot().await;
    Json(ApiResponse {
        data: derive_snapshot(&snapshot.data),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn hashtags(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<Hashtag>>> {
    let posts = state.store.all_posts().await;
    Json(ApiResponse {
        data: derive_hashtags(&posts),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn topics(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<Topic>>> {
    let posts = state.store.all_posts().await;
    Json(ApiResponse {
        data: derive_topics(&posts),
        meta: ResponseMeta::new(req_id.0),
    })
}

/// Breaking news reads only the news bucket, in corpus order.
pub(super) async fn breaking(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<BreakingNews>>> {
    let snapshot = state.store.snapshot().await;
    Json(ApiResponse {
        data: derive_breaking_news(&snapshot.data.news.data),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn series(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<SeriesData>> {
    let posts = state.store.all_posts().await;
    Json(ApiResponse {
        data: SeriesData {
            sentiment: derive_sentiment_series(&posts),
            emotion: derive_emotion_series(&posts),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn influencers(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<Influencer>>> {
    let posts = state.store.all_posts().await;
    Json(ApiResponse {
        data: derive_influencers(&posts),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn misinformation(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<MisinformationClaim>>> {
    let posts = state.store.all_posts().await;
    Json(ApiResponse {
        data: derive_misinformation(&posts),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn schemes(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<Scheme>>> {
    let posts = state.store.all_posts().await;
    Json(ApiResponse {
        data: derive_schemes(&posts),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn channels(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<MediaChannel>>> {
    let posts = state.store.all_posts().await;
    Json(ApiResponse {
        data: derive_media_channels(&posts),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn constituencies(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<ConstituencySentiment>>> {
    let posts = state.store.all_posts().await;
    Json(ApiResponse {
        data: derive_constituencies(&posts),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn kpis(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<KpiSummary>> {
    let posts = state.store.all_posts().await;
    Json(ApiResponse {
        data: derive_kpis(&posts),
        meta: ResponseMeta::new(req_id.0),
    })
}
