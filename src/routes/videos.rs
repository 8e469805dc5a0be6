use axum::extract::{Path, State};
use axum::response::IntoResponse;
use serde::Deserialize;

use super::{
    non_blank, parse_number, parse_video_id, Envelope, FlatEnvelope, PagingQuery, RelayQuery,
};
use crate::config::DEFAULT_SEARCH_QUERY;
use crate::error::RelayError;
use crate::pexels::models::SearchFilters;
use crate::pexels::{
    CATEGORY_FAILED, CURATED_FAILED, DETAILS_FAILED, FILTERS_FAILED, POPULAR_FAILED, SEARCH_FAILED,
    STATS_FAILED, STATUS_FAILED, TRENDING_FAILED,
};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct FilterQuery {
    pub query: Option<String>,
    pub per_page: Option<String>,
    pub page: Option<String>,
    pub orientation: Option<String>,
    pub size: Option<String>,
    pub locale: Option<String>,
}

impl FilterQuery {
    /// Split into the search term and the filters that were actually given.
    pub fn into_search(self) -> Result<(String, SearchFilters), RelayError> {
        let query = non_blank(self.query)
            .ok_or_else(|| RelayError::BadRequest("Query parameter is required".to_string()))?;

        let filters = SearchFilters {
            per_page: parse_number("per_page", self.per_page.as_deref())?,
            page: parse_number("page", self.page.as_deref())?,
            orientation: non_blank(self.orientation),
            size: non_blank(self.size),
            locale: non_blank(self.locale),
        };

        Ok((query, filters))
    }
}

/// Search with the fixed query; page fields are flattened into the body.
pub async fn search(
    State(state): State<SharedState>,
    RelayQuery(paging): RelayQuery<PagingQuery>,
) -> Result<impl IntoResponse, RelayError> {
    let (per_page, page) = paging.resolve()?;

    let videos = state
        .pexels
        .search_videos(DEFAULT_SEARCH_QUERY, per_page, page)
        .await
        .map_err(RelayError::upstream(SEARCH_FAILED))?;

    Ok(FlatEnvelope::ok(
        videos,
        format!("Videos found for query: {}", DEFAULT_SEARCH_QUERY),
    ))
}

pub async fn popular(
    State(state): State<SharedState>,
    RelayQuery(paging): RelayQuery<PagingQuery>,
) -> Result<impl IntoResponse, RelayError> {
    let (per_page, page) = paging.resolve()?;

    let videos = state
        .pexels
        .popular_videos(per_page, page)
        .await
        .map_err(RelayError::upstream(POPULAR_FAILED))?;

    Ok(Envelope::ok(videos, "Popular videos retrieved successfully"))
}

pub async fn curated(
    State(state): State<SharedState>,
    RelayQuery(paging): RelayQuery<PagingQuery>,
) -> Result<impl IntoResponse, RelayError> {
    let (per_page, page) = paging.resolve()?;

    let videos = state
        .pexels
        .curated_videos(per_page, page)
        .await
        .map_err(RelayError::upstream(CURATED_FAILED))?;

    Ok(Envelope::ok(videos, "Curated videos retrieved successfully"))
}

pub async fn trending(
    State(state): State<SharedState>,
    RelayQuery(paging): RelayQuery<PagingQuery>,
) -> Result<impl IntoResponse, RelayError> {
    let (per_page, page) = paging.resolve()?;

    let videos = state
        .pexels
        .trending_videos(per_page, page)
        .await
        .map_err(RelayError::upstream(TRENDING_FAILED))?;

    Ok(Envelope::ok(videos, "Trending videos retrieved successfully"))
}

pub async fn by_category(
    State(state): State<SharedState>,
    Path(category): Path<String>,
    RelayQuery(paging): RelayQuery<PagingQuery>,
) -> Result<impl IntoResponse, RelayError> {
    let (per_page, page) = paging.resolve()?;

    let videos = state
        .pexels
        .search_videos_by_category(&category, per_page, page)
        .await
        .map_err(RelayError::upstream(CATEGORY_FAILED))?;

    Ok(Envelope::ok(
        videos,
        format!("Videos found for category: {}", category),
    ))
}

/// Missing `query` is rejected before anything is sent upstream.
pub async fn search_with_filters(
    State(state): State<SharedState>,
    RelayQuery(params): RelayQuery<FilterQuery>,
) -> Result<impl IntoResponse, RelayError> {
    let (query, filters) = params.into_search()?;

    let videos = state
        .pexels
        .search_videos_with_filters(&query, &filters)
        .await
        .map_err(RelayError::upstream(FILTERS_FAILED))?;

    Ok(Envelope::ok(
        videos,
        format!("Videos found for query: {} with filters", query),
    ))
}

pub async fn video_details(
    State(state): State<SharedState>,
    Path(video_id): Path<String>,
) -> Result<impl IntoResponse, RelayError> {
    let video_id = parse_video_id(&video_id)?;

    let video = state
        .pexels
        .video_by_id(video_id)
        .await
        .map_err(RelayError::upstream(DETAILS_FAILED))?;

    Ok(Envelope::ok(video, "Video details retrieved successfully"))
}

pub async fn video_stats(
    State(state): State<SharedState>,
    Path(video_id): Path<String>,
) -> Result<impl IntoResponse, RelayError> {
    let video_id = parse_video_id(&video_id)?;

    let stats = state
        .pexels
        .video_stats(video_id)
        .await
        .map_err(RelayError::upstream(STATS_FAILED))?;

    Ok(Envelope::ok(stats, "Video statistics retrieved successfully"))
}

/// The one route that reports upstream trouble as 503.
pub async fn api_status(State(state): State<SharedState>) -> Result<impl IntoResponse, RelayError> {
    let status = state
        .pexels
        .api_status()
        .await
        .map_err(RelayError::unavailable(STATUS_FAILED))?;

    Ok(Envelope::stamped(status, "Pexels API is working correctly"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_query(query: Option<&str>) -> FilterQuery {
        FilterQuery {
            query: query.map(str::to_string),
            per_page: None,
            page: None,
            orientation: None,
            size: None,
            locale: None,
        }
    }

    #[test]
    fn test_missing_query_is_rejected() {
        let err = filter_query(None).into_search().unwrap_err();
        assert_eq!(err.to_string(), "Query parameter is required");
    }

    #[test]
    fn test_blank_query_is_rejected() {
        assert!(filter_query(Some("   ")).into_search().is_err());
    }

    #[test]
    fn test_only_given_filters_are_kept() {
        let mut params = filter_query(Some("ocean"));
        params.orientation = Some("landscape".to_string());
        params.page = Some("2".to_string());

        let (query, filters) = params.into_search().unwrap();
        assert_eq!(query, "ocean");
        assert_eq!(
            filters,
            SearchFilters {
                page: Some(2),
                orientation: Some("landscape".to_string()),
                ..Default::default()
            }
        );
        assert_eq!(
            filters.query_pairs(),
            vec![("page", "2".to_string()), ("orientation", "landscape".to_string())]
        );
    }
}
