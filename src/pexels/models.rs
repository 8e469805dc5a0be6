use serde::{Deserialize, Serialize};

/// One page of a list response, upstream or reshaped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoPage<T> {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default = "Vec::new")]
    pub videos: Vec<T>,
}

impl<T> VideoPage<T> {
    /// Replace the videos while keeping the paging fields.
    pub fn with_videos<U>(&self, videos: Vec<U>) -> VideoPage<U> {
        VideoPage {
            page: self.page,
            per_page: self.per_page,
            total_results: self.total_results,
            videos,
        }
    }
}

/// A video as returned by the upstream API.
///
/// Fields the API leaves out default to zero so the analytics never see a
/// hole; anything not modelled here is kept in `extra` and re-emitted.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct VideoRecord {
    pub id: u64,
    #[serde(default)]
    pub width: u64,
    #[serde(default)]
    pub height: u64,
    #[serde(default)]
    pub duration: u64,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default)]
    pub fps: f64,
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub user: serde_json::Value,
    #[serde(default)]
    pub video_files: Vec<VideoFile>,
    #[serde(default)]
    pub video_pictures: Vec<VideoPicture>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl VideoRecord {
    /// The last encoded variant, assumed to be the highest quality.
    pub fn best_file(&self) -> Option<&VideoFile> {
        self.video_files.last()
    }

    /// Pixel count times duration; the trending ranking key.
    pub fn footprint(&self) -> u64 {
        self.width
            .saturating_mul(self.height)
            .saturating_mul(self.duration)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct VideoFile {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub fps: Option<f64>,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct VideoPicture {
    #[serde(default)]
    pub id: u64,
    pub picture: String,
    #[serde(default)]
    pub nr: u32,
}

/// A video reduced to its id and best link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoLinks {
    pub id: u64,
    pub video_links: Vec<String>,
}

/// Optional search filters; unset keys never reach the upstream query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub orientation: Option<String>,
    pub size: Option<String>,
    pub locale: Option<String>,
}

impl SearchFilters {
    /// Query pairs for the keys that are set, in a fixed order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(orientation) = &self.orientation {
            pairs.push(("orientation", orientation.clone()));
        }
        if let Some(size) = &self.size {
            pairs.push(("size", size.clone()));
        }
        if let Some(locale) = &self.locale {
            pairs.push(("locale", locale.clone()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiStatus {
    pub status: String,
    pub total_results: u64,
    pub api_version: String,
}

/// Expanded view of a single video.
#[derive(Debug, Clone, Serialize)]
pub struct VideoStats {
    pub video: VideoRecord,
    pub statistics: VideoStatistics,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    pub duration: u64,
    pub width: u64,
    pub height: u64,
    pub file_size: u64,
    pub quality: Option<String>,
    pub fps: f64,
    pub user: serde_json::Value,
    pub url: String,
    pub image: Option<String>,
    #[serde(rename = "video_files")]
    pub video_files: Vec<VideoFile>,
    #[serde(rename = "video_pictures")]
    pub video_pictures: Vec<VideoPicture>,
}

impl From<&VideoRecord> for VideoStatistics {
    fn from(video: &VideoRecord) -> Self {
        VideoStatistics {
            duration: video.duration,
            width: video.width,
            height: video.height,
            file_size: video.file_size,
            quality: video.quality.clone(),
            fps: video.fps,
            user: video.user.clone(),
            url: video.url.clone(),
            image: video.image.clone(),
            video_files: video.video_files.clone(),
            video_pictures: video.video_pictures.clone(),
        }
    }
}

/// Body shape of an upstream error response.
#[derive(Debug, Deserialize)]
pub(crate) struct UpstreamErrorBody {
    pub error: Option<String>,
}
