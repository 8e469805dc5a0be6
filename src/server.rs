use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes::{analytics, health, videos};
use crate::state::SharedState;

pub fn build_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Service info
        .route("/", get(health::index))
        .route("/health", get(health::health))
        .nest("/api/pexels", video_routes())
        .nest("/api/analytics", analytics_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn video_routes() -> Router<SharedState> {
    Router::new()
        .route("/search", get(videos::search))
        .route("/search/filters", get(videos::search_with_filters))
        .route("/popular", get(videos::popular))
        .route("/curated", get(videos::curated))
        .route("/trending", get(videos::trending))
        .route("/category/{category}", get(videos::by_category))
        .route("/video/{video_id}", get(videos::video_details))
        .route("/video/{video_id}/stats", get(videos::video_stats))
        .route("/status", get(videos::api_status))
}

fn analytics_routes() -> Router<SharedState> {
    Router::new()
        .route(
            "/video/{video_id}/analytics",
            get(analytics::video_analytics),
        )
        .route(
            "/collection/analytics",
            get(analytics::collection_analytics),
        )
        .route("/trending/analysis", get(analytics::trending_analysis))
        .route("/recommendations", get(analytics::recommendations))
}
