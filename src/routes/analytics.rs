use axum::extract::{Path, State};
use axum::response::IntoResponse;
use serde::Deserialize;

use super::{non_blank, parse_number, parse_video_id, Envelope, RelayQuery};
use crate::analytics::TrendAnalysis;
use crate::config::{COLLECTION_PER_PAGE, TRENDING_MAX_COUNT};
use crate::error::RelayError;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CollectionQuery {
    pub per_page: Option<String>,
}

#[derive(Deserialize)]
pub struct TrendingQuery {
    pub max_count: Option<String>,
}

#[derive(Deserialize)]
pub struct RecommendationQuery {
    pub content_type: Option<String>,
}

pub async fn video_analytics(
    State(state): State<SharedState>,
    Path(video_id): Path<String>,
) -> Result<impl IntoResponse, RelayError> {
    let video_id = parse_video_id(&video_id)?;

    let analytics = state
        .analytics
        .video_analytics(video_id)
        .await
        .map_err(RelayError::upstream("Failed to get video analytics"))?;

    Ok(Envelope::ok(
        analytics,
        "Video analytics retrieved successfully",
    ))
}

pub async fn collection_analytics(
    State(state): State<SharedState>,
    RelayQuery(query): RelayQuery<CollectionQuery>,
) -> Result<impl IntoResponse, RelayError> {
    let per_page =
        parse_number("per_page", query.per_page.as_deref())?.unwrap_or(COLLECTION_PER_PAGE);

    let analytics = state
        .analytics
        .collection_analytics(per_page)
        .await
        .map_err(RelayError::upstream("Failed to get video collection analytics"))?;

    Ok(Envelope::ok(
        analytics,
        "Video collection analytics retrieved successfully",
    ))
}

pub async fn trending_analysis(
    State(state): State<SharedState>,
    RelayQuery(query): RelayQuery<TrendingQuery>,
) -> Result<impl IntoResponse, RelayError> {
    let max_count =
        parse_number("max_count", query.max_count.as_deref())?.unwrap_or(TRENDING_MAX_COUNT);

    let result = state
        .analytics
        .trending_analysis(max_count)
        .await
        .map_err(RelayError::upstream("Failed to get trending videos analysis"))?;

    let message = match &result.analysis {
        TrendAnalysis::Empty {} => "No trending videos found",
        TrendAnalysis::Summary(_) => "Trending videos analysis completed successfully",
    };

    Ok(Envelope::ok(result, message))
}

pub async fn recommendations(
    State(state): State<SharedState>,
    RelayQuery(query): RelayQuery<RecommendationQuery>,
) -> Result<impl IntoResponse, RelayError> {
    let content_type = non_blank(query.content_type).unwrap_or_else(|| "videos".to_string());

    let recommendations = state
        .analytics
        .recommendations(&content_type)
        .await
        .map_err(RelayError::upstream("Failed to get recommendations"))?;

    Ok(Envelope::ok(
        recommendations,
        "Content recommendations generated successfully",
    ))
}
