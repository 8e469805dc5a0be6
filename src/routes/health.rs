use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::SharedState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub api_key_configured: bool,
}

pub async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        api_key_configured: state.config.has_api_key(),
    })
}

/// Route listing served at `/`.
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("search", "GET /api/pexels/search"),
    ("searchWithFilters", "GET /api/pexels/search/filters?query="),
    ("popular", "GET /api/pexels/popular"),
    ("curated", "GET /api/pexels/curated"),
    ("trending", "GET /api/pexels/trending"),
    ("category", "GET /api/pexels/category/{category}"),
    ("videoById", "GET /api/pexels/video/{video_id}"),
    ("videoStats", "GET /api/pexels/video/{video_id}/stats"),
    ("status", "GET /api/pexels/status"),
    ("videoAnalytics", "GET /api/analytics/video/{video_id}/analytics"),
    ("collectionAnalytics", "GET /api/analytics/collection/analytics"),
    ("trendingAnalysis", "GET /api/analytics/trending/analysis"),
    ("recommendations", "GET /api/analytics/recommendations"),
];

pub async fn index() -> Json<serde_json::Value> {
    let endpoints: serde_json::Map<String, serde_json::Value> = ENDPOINTS
        .iter()
        .map(|(name, route)| (name.to_string(), serde_json::Value::from(*route)))
        .collect();

    Json(serde_json::json!({
        "message": "Welcome to Pexels Relay",
        "endpoints": endpoints,
    }))
}
