#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::MockServer;

use pexels_relay::config::RelayConfig;
use pexels_relay::pexels::PexelsClient;
use pexels_relay::state::{AppState, SharedState};

pub const TEST_API_KEY: &str = "test-key";

pub fn test_config(base_url: &str) -> RelayConfig {
    RelayConfig {
        port: 0,
        api_key: TEST_API_KEY.to_string(),
        base_url: base_url.to_string(),
        api_version: "v1".to_string(),
        environment: "test".to_string(),
    }
}

pub fn test_client(server: &MockServer) -> PexelsClient {
    PexelsClient::new(reqwest::Client::new(), &test_config(&server.uri()))
}

pub fn test_state(server: &MockServer) -> SharedState {
    Arc::new(AppState::new(test_config(&server.uri())).unwrap())
}

/// A video in the upstream wire format.
pub fn video_json(id: u64, width: u64, height: u64, duration: u64) -> Value {
    json!({
        "id": id,
        "width": width,
        "height": height,
        "duration": duration,
        "file_size": 2 * 1024 * 1024,
        "fps": 30.0,
        "url": format!("https://www.pexels.com/video/{}/", id),
        "image": format!("https://images.pexels.com/videos/{}/preview.jpg", id),
        "user": {"id": 42, "name": "Jane Doe", "url": "https://www.pexels.com/@jane"},
        "video_files": [
            {"id": id * 10, "quality": "sd", "file_type": "video/mp4", "width": 640, "height": 360, "fps": 30.0, "link": format!("https://cdn.example.com/{}/sd.mp4", id)},
            {"id": id * 10 + 1, "quality": "hd", "file_type": "video/mp4", "width": 1920, "height": 1080, "fps": 30.0, "link": format!("https://cdn.example.com/{}/hd.mp4", id)}
        ],
        "video_pictures": [
            {"id": id * 100, "picture": format!("https://images.pexels.com/videos/{}/0.jpg", id), "nr": 0}
        ],
        "avg_color": null
    })
}

pub fn page_json(videos: Vec<Value>, total_results: u64) -> Value {
    json!({
        "page": 1,
        "per_page": videos.len(),
        "total_results": total_results,
        "videos": videos,
        "url": "https://www.pexels.com/videos/"
    })
}
