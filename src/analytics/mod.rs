pub mod metrics;

use serde::Serialize;
use tracing::info;

use crate::config::{RECOMMENDATION_SAMPLE_SIZE, TOP_PERFORMING_LIMIT};
use crate::error::UpstreamError;
use crate::pexels::models::{ApiStatus, VideoRecord};
use crate::pexels::PexelsClient;
use metrics::{fixed2, round2, top_performing, Totals, VideoMetrics};

#[derive(Debug, Clone, Serialize)]
pub struct VideoAnalytics {
    pub video: VideoRecord,
    pub metrics: VideoMetrics,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionAnalytics {
    pub api_status: ApiStatus,
    pub video_stats: CollectionStats,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionStats {
    pub total_videos: usize,
    pub total_duration: String,
    pub total_file_size: String,
    pub avg_duration: f64,
    pub avg_file_size: f64,
    pub popular_videos: usize,
    pub curated_videos: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendingAnalysis {
    pub videos: Vec<VideoRecord>,
    pub analysis: TrendAnalysis,
}

/// Serialises as `{}` when there was nothing to analyse.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TrendAnalysis {
    Empty {},
    Summary(TrendSummary),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    pub total_videos: usize,
    pub total_duration: String,
    pub total_file_size: String,
    pub avg_duration: String,
    pub avg_file_size: String,
    pub top_performing_videos: Vec<VideoRecord>,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub content_type: String,
    pub recommendations: Vec<Recommendation>,
    pub video_stats: SampleStats,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub suggestions: &'static [&'static str],
    pub reason: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SampleStats {
    pub total_videos: usize,
    pub avg_duration: String,
}

/// Fixed suggestion catalog; nothing here is derived from the sample.
pub const RECOMMENDATION_CATALOG: &[Recommendation] = &[
    Recommendation {
        kind: "popular_categories",
        suggestions: &["nature", "business", "people", "animals", "travel"],
        reason: "Based on popular video categories",
    },
    Recommendation {
        kind: "content_ideas",
        suggestions: &[
            "Nature and landscapes",
            "Business and technology",
            "People and lifestyle",
            "Animals and wildlife",
            "Travel and adventure",
        ],
        reason: "Popular content formats with high quality",
    },
    Recommendation {
        kind: "video_qualities",
        suggestions: &[
            "4K Ultra HD",
            "1080p Full HD",
            "720p HD",
            "High frame rate (60fps)",
            "Wide aspect ratio",
        ],
        reason: "Optimal video qualities for different use cases",
    },
];

pub fn collection_stats(popular: &[VideoRecord], curated: &[VideoRecord]) -> CollectionStats {
    let totals = Totals::over(popular.iter().chain(curated.iter()));
    CollectionStats {
        total_videos: totals.count,
        total_duration: fixed2(totals.total_minutes),
        total_file_size: fixed2(totals.total_mb),
        avg_duration: round2(totals.avg_minutes),
        avg_file_size: round2(totals.avg_mb),
        popular_videos: popular.len(),
        curated_videos: curated.len(),
    }
}

pub fn trending_analysis(videos: Vec<VideoRecord>) -> TrendingAnalysis {
    if videos.is_empty() {
        return TrendingAnalysis {
            videos,
            analysis: TrendAnalysis::Empty {},
        };
    }

    let totals = Totals::over(&videos);
    let summary = TrendSummary {
        total_videos: totals.count,
        total_duration: fixed2(totals.total_minutes),
        total_file_size: fixed2(totals.total_mb),
        avg_duration: fixed2(totals.avg_minutes),
        avg_file_size: fixed2(totals.avg_mb),
        top_performing_videos: top_performing(&videos, TOP_PERFORMING_LIMIT),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    TrendingAnalysis {
        videos,
        analysis: TrendAnalysis::Summary(summary),
    }
}

pub fn recommendations(content_type: &str, sample: &[VideoRecord]) -> Recommendations {
    let totals = Totals::over(sample);
    Recommendations {
        content_type: content_type.to_string(),
        recommendations: RECOMMENDATION_CATALOG.to_vec(),
        video_stats: SampleStats {
            total_videos: totals.count,
            avg_duration: fixed2(totals.avg_minutes),
        },
        timestamp: chrono::Utc::now().to_rfc3339(),
    }
}

/// Analytics service over the Pexels client.
///
/// Every method recomputes from fresh upstream data; nothing is kept between
/// calls.
#[derive(Clone)]
pub struct Aggregator {
    client: PexelsClient,
}

impl Aggregator {
    pub fn new(client: PexelsClient) -> Self {
        Aggregator { client }
    }

    pub async fn video_analytics(&self, video_id: u64) -> Result<VideoAnalytics, UpstreamError> {
        let video = self.client.video_by_id(video_id).await?;
        let metrics = VideoMetrics::for_video(&video);
        Ok(VideoAnalytics { video, metrics })
    }

    /// Status check, popular and curated are fetched together; the first
    /// failure aborts the whole aggregate.
    pub async fn collection_analytics(
        &self,
        per_page: u32,
    ) -> Result<CollectionAnalytics, UpstreamError> {
        let (api_status, popular, curated) = futures::try_join!(
            self.client.api_status(),
            self.client.popular_records(per_page, 1),
            self.client.curated_records(per_page, 1),
        )?;

        info!(
            "Collection analytics over {} popular and {} curated videos",
            popular.videos.len(),
            curated.videos.len()
        );

        Ok(CollectionAnalytics {
            api_status,
            video_stats: collection_stats(&popular.videos, &curated.videos),
            timestamp: chrono::Utc::now().to_rfc3339(),
        })
    }

    pub async fn trending_analysis(&self, max_count: u32) -> Result<TrendingAnalysis, UpstreamError> {
        let trending = self.client.trending_records(max_count, 1).await?;
        Ok(trending_analysis(trending.videos))
    }

    pub async fn recommendations(&self, content_type: &str) -> Result<Recommendations, UpstreamError> {
        let sample = self
            .client
            .popular_records(RECOMMENDATION_SAMPLE_SIZE, 1)
            .await?;
        Ok(recommendations(content_type, &sample.videos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: u64, duration: u64, file_size: u64) -> VideoRecord {
        VideoRecord {
            id,
            duration,
            file_size,
            width: 1280,
            height: 720,
            ..Default::default()
        }
    }

    #[test]
    fn test_collection_stats_counts_sources_separately() {
        let popular = vec![video(1, 60, 1024 * 1024), video(2, 120, 3 * 1024 * 1024)];
        let curated = vec![video(3, 180, 2 * 1024 * 1024)];

        let stats = collection_stats(&popular, &curated);
        assert_eq!(stats.total_videos, 3);
        assert_eq!(stats.popular_videos, 2);
        assert_eq!(stats.curated_videos, 1);
        assert_eq!(stats.total_duration, "6.00");
        assert_eq!(stats.total_file_size, "6.00");
        assert_eq!(stats.avg_duration, 2.0);
        assert_eq!(stats.avg_file_size, 2.0);
    }

    #[test]
    fn test_empty_trending_serializes_empty_analysis() {
        let result = trending_analysis(Vec::new());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({"videos": [], "analysis": {}}));
    }

    #[test]
    fn test_trending_keeps_upstream_order() {
        let videos = vec![video(1, 10, 0), video(2, 500, 0), video(3, 20, 0)];
        let result = trending_analysis(videos);

        let ids: Vec<u64> = result.videos.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        match result.analysis {
            TrendAnalysis::Summary(summary) => {
                let top: Vec<u64> = summary.top_performing_videos.iter().map(|v| v.id).collect();
                assert_eq!(top, vec![2, 3, 1]);
                assert_eq!(summary.total_videos, 3);
            }
            TrendAnalysis::Empty {} => panic!("expected a summary"),
        }
    }

    #[test]
    fn test_recommendation_catalog_is_static() {
        let recs = recommendations("videos", &[]);
        assert_eq!(recs.recommendations.len(), 3);
        assert_eq!(recs.recommendations[0].kind, "popular_categories");
        assert_eq!(recs.video_stats.total_videos, 0);
        assert_eq!(recs.video_stats.avg_duration, "0.00");
    }
}
