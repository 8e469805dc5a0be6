use serde::Serialize;

use crate::pexels::models::VideoRecord;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

// Performance score weights: resolution, duration, frame rate.
const RESOLUTION_WEIGHT: f64 = 0.4;
const DURATION_WEIGHT: f64 = 0.3;
const FPS_WEIGHT: f64 = 0.3;

/// Derived numbers for a single video.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetrics {
    pub performance_score: u8,
    pub duration_in_minutes: String,
    #[serde(rename = "fileSizeInMB")]
    pub file_size_in_mb: String,
    pub aspect_ratio: String,
    pub quality: Option<String>,
    pub fps: f64,
    pub resolution: String,
    pub timestamp: String,
}

/// Totals and per-video averages over a set of videos, in minutes and MB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub count: usize,
    pub total_minutes: f64,
    pub total_mb: f64,
    pub avg_minutes: f64,
    pub avg_mb: f64,
}

pub fn minutes(seconds: u64) -> f64 {
    seconds as f64 / 60.0
}

pub fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Two-decimal rendering used throughout the payloads. Ties round up, the
/// same as `round2`.
pub fn fixed2(value: f64) -> String {
    format!("{:.2}", round2(value))
}

/// Round to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Heuristic 0-100 score mixing megapixels, duration and frame rate.
///
/// The terms are not normalised against each other; scores must match the
/// values already published for the same inputs.
pub fn performance_score(width: u64, height: u64, duration_secs: u64, fps: f64) -> u8 {
    let megapixels = (width as f64 * height as f64) / 1_000_000.0;
    let raw = megapixels * RESOLUTION_WEIGHT
        + (minutes(duration_secs) * 10.0) * DURATION_WEIGHT
        + (fps / 60.0 * 100.0) * FPS_WEIGHT;

    let score = raw.round();
    if score.is_nan() || score <= 0.0 {
        0
    } else {
        score.min(100.0) as u8
    }
}

/// Width over height; a zero height renders as `0.00`.
pub fn aspect_ratio(width: u64, height: u64) -> String {
    if height == 0 {
        return fixed2(0.0);
    }
    fixed2(width as f64 / height as f64)
}

impl VideoMetrics {
    pub fn for_video(video: &VideoRecord) -> Self {
        VideoMetrics {
            performance_score: performance_score(
                video.width,
                video.height,
                video.duration,
                video.fps,
            ),
            duration_in_minutes: fixed2(minutes(video.duration)),
            file_size_in_mb: fixed2(megabytes(video.file_size)),
            aspect_ratio: aspect_ratio(video.width, video.height),
            quality: video.quality.clone(),
            fps: video.fps,
            resolution: format!("{}x{}", video.width, video.height),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl Totals {
    /// Sum durations and sizes; averages are zero for an empty set.
    pub fn over<'a>(videos: impl IntoIterator<Item = &'a VideoRecord>) -> Self {
        let mut count = 0usize;
        let mut seconds = 0u64;
        let mut bytes = 0u64;
        for video in videos {
            count += 1;
            seconds = seconds.saturating_add(video.duration);
            bytes = bytes.saturating_add(video.file_size);
        }

        let total_minutes = minutes(seconds);
        let total_mb = megabytes(bytes);
        let (avg_minutes, avg_mb) = if count == 0 {
            (0.0, 0.0)
        } else {
            (total_minutes / count as f64, total_mb / count as f64)
        };

        Totals {
            count,
            total_minutes,
            total_mb,
            avg_minutes,
            avg_mb,
        }
    }
}

/// The `limit` videos with the largest `width * height * duration`.
///
/// The sort is stable, so equal footprints keep their input order.
pub fn top_performing(videos: &[VideoRecord], limit: usize) -> Vec<VideoRecord> {
    let mut ranked: Vec<&VideoRecord> = videos.iter().collect();
    ranked.sort_by(|a, b| b.footprint().cmp(&a.footprint()));
    ranked.into_iter().take(limit).cloned().collect()
}
