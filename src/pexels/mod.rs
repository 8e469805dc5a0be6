pub mod models;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::RelayConfig;
use crate::error::{UpstreamCause, UpstreamError};
use models::{
    ApiStatus, SearchFilters, UpstreamErrorBody, VideoLinks, VideoPage, VideoRecord, VideoStatistics,
    VideoStats,
};

// Operation prefixes carried by every client error.
pub const SEARCH_FAILED: &str = "Failed to search videos";
pub const POPULAR_FAILED: &str = "Failed to get popular videos";
pub const DETAILS_FAILED: &str = "Failed to get video details";
pub const CURATED_FAILED: &str = "Failed to get curated videos";
pub const CATEGORY_FAILED: &str = "Failed to search videos by category";
pub const TRENDING_FAILED: &str = "Failed to get trending videos";
pub const FILTERS_FAILED: &str = "Failed to search videos with filters";
pub const STATS_FAILED: &str = "Failed to get video statistics";
pub const STATUS_FAILED: &str = "Pexels API is not available";

/// Client for the Pexels videos API.
///
/// Holds only immutable configuration plus a pooled `reqwest::Client`, so a
/// clone is cheap and can be handed to every request.
#[derive(Clone)]
pub struct PexelsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    api_version: String,
}

impl PexelsClient {
    pub fn new(http: reqwest::Client, config: &RelayConfig) -> Self {
        PexelsClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            api_version: config.api_version.clone(),
        }
    }

    // --- Shaped operations ---

    /// Search and keep only the best link of each hit.
    pub async fn search_videos(
        &self,
        query: &str,
        per_page: u32,
        page: u32,
    ) -> Result<VideoPage<String>, UpstreamError> {
        let raw = self.search_records(query, &paging(per_page, page), SEARCH_FAILED).await?;
        to_link_page(&raw, SEARCH_FAILED)
    }

    pub async fn popular_videos(
        &self,
        per_page: u32,
        page: u32,
    ) -> Result<VideoPage<VideoLinks>, UpstreamError> {
        let raw = self.popular_records(per_page, page).await?;
        to_links_page(&raw, POPULAR_FAILED)
    }

    pub async fn curated_videos(
        &self,
        per_page: u32,
        page: u32,
    ) -> Result<VideoPage<VideoLinks>, UpstreamError> {
        let raw = self.curated_records(per_page, page).await?;
        to_links_page(&raw, CURATED_FAILED)
    }

    /// The category is sent as a plain search term; the API has no taxonomy.
    pub async fn search_videos_by_category(
        &self,
        category: &str,
        per_page: u32,
        page: u32,
    ) -> Result<VideoPage<VideoLinks>, UpstreamError> {
        let raw = self
            .search_records(category, &paging(per_page, page), CATEGORY_FAILED)
            .await?;
        to_links_page(&raw, CATEGORY_FAILED)
    }

    /// Trending is the popular feed under another name.
    pub async fn trending_videos(
        &self,
        per_page: u32,
        page: u32,
    ) -> Result<VideoPage<VideoLinks>, UpstreamError> {
        let raw = self.trending_records(per_page, page).await?;
        to_links_page(&raw, TRENDING_FAILED)
    }

    pub async fn search_videos_with_filters(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<VideoPage<String>, UpstreamError> {
        let raw = self
            .search_records(query, &filters.query_pairs(), FILTERS_FAILED)
            .await?;
        to_link_page(&raw, FILTERS_FAILED)
    }

    pub async fn video_by_id(&self, video_id: u64) -> Result<VideoRecord, UpstreamError> {
        self.get_json(&video_id.to_string(), &[], DETAILS_FAILED).await
    }

    pub async fn video_stats(&self, video_id: u64) -> Result<VideoStats, UpstreamError> {
        let video = self
            .video_by_id(video_id)
            .await
            .map_err(|e| e.within(STATS_FAILED))?;

        Ok(VideoStats {
            statistics: VideoStatistics::from(&video),
            video,
            timestamp: chrono::Utc::now().to_rfc3339(),
        })
    }

    /// Ask the popular feed for a single result. Only the page totals are
    /// read, so an odd video entry does not count as an outage.
    pub async fn api_status(&self) -> Result<ApiStatus, UpstreamError> {
        let page: VideoPage<serde_json::Value> = self
            .get_json("popular", &[("per_page", "1".to_string())], STATUS_FAILED)
            .await?;

        Ok(ApiStatus {
            status: "active".to_string(),
            total_results: page.total_results,
            api_version: self.api_version.clone(),
        })
    }

    // --- Full records, for the analytics layer ---

    pub async fn popular_records(
        &self,
        per_page: u32,
        page: u32,
    ) -> Result<VideoPage<VideoRecord>, UpstreamError> {
        self.get_json("popular", &paging(per_page, page), POPULAR_FAILED)
            .await
    }

    pub async fn curated_records(
        &self,
        per_page: u32,
        page: u32,
    ) -> Result<VideoPage<VideoRecord>, UpstreamError> {
        self.get_json("curated", &paging(per_page, page), CURATED_FAILED)
            .await
    }

    pub async fn trending_records(
        &self,
        per_page: u32,
        page: u32,
    ) -> Result<VideoPage<VideoRecord>, UpstreamError> {
        self.get_json("popular", &paging(per_page, page), TRENDING_FAILED)
            .await
    }

    // --- Transport ---

    async fn search_records(
        &self,
        query: &str,
        params: &[(&'static str, String)],
        context: &'static str,
    ) -> Result<VideoPage<VideoRecord>, UpstreamError> {
        let mut all = Vec::with_capacity(params.len() + 1);
        all.push(("query", query.to_string()));
        all.extend(params.iter().cloned());
        self.get_json("search", &all, context).await
    }

    fn endpoint_url(
        &self,
        path: &str,
        params: &[(&'static str, String)],
        context: &'static str,
    ) -> Result<Url, UpstreamError> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, path)).map_err(|e| {
            UpstreamError::new(context, UpstreamCause::Transport, format!("Invalid URL: {}", e))
        })?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
        context: &'static str,
    ) -> Result<T, UpstreamError> {
        let url = self.endpoint_url(path, params, context)?;
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .header(AUTHORIZATION, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| UpstreamError::new(context, UpstreamCause::Transport, e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<UpstreamErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));
            warn!("Pexels {} returned {}: {}", path, status, detail);
            return Err(UpstreamError::new(
                context,
                UpstreamCause::Status(status.as_u16()),
                detail,
            ));
        }

        resp.json::<T>().await.map_err(|e| {
            UpstreamError::new(
                context,
                UpstreamCause::MalformedResponse,
                format!("Failed to parse response: {}", e),
            )
        })
    }
}

fn paging(per_page: u32, page: u32) -> Vec<(&'static str, String)> {
    vec![("per_page", per_page.to_string()), ("page", page.to_string())]
}

fn best_link(video: &VideoRecord, context: &'static str) -> Result<String, UpstreamError> {
    video
        .best_file()
        .map(|f| f.link.clone())
        .ok_or_else(|| {
            UpstreamError::new(
                context,
                UpstreamCause::MalformedResponse,
                format!("Video {} has no video files", video.id),
            )
        })
}

fn to_link_page(
    raw: &VideoPage<VideoRecord>,
    context: &'static str,
) -> Result<VideoPage<String>, UpstreamError> {
    let links = raw
        .videos
        .iter()
        .map(|v| best_link(v, context))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(raw.with_videos(links))
}

fn to_links_page(
    raw: &VideoPage<VideoRecord>,
    context: &'static str,
) -> Result<VideoPage<VideoLinks>, UpstreamError> {
    let videos = raw
        .videos
        .iter()
        .map(|v| -> Result<VideoLinks, UpstreamError> {
            Ok(VideoLinks {
                id: v.id,
                video_links: vec![best_link(v, context)?],
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(raw.with_videos(videos))
}
