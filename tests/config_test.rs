use clap::Parser;
use pexels_relay::config::*;

#[test]
fn test_default_port() {
    assert_eq!(DEFAULT_PORT, 3003);
}

#[test]
fn test_default_upstream() {
    assert_eq!(DEFAULT_API_BASE_URL, "https://api.pexels.com/videos");
    assert_eq!(DEFAULT_API_VERSION, "v1");
}

#[test]
fn test_paging_defaults() {
    assert_eq!(DEFAULT_PER_PAGE, 15);
    assert_eq!(DEFAULT_PAGE, 1);
    assert_eq!(COLLECTION_PER_PAGE, 50);
    assert_eq!(TRENDING_MAX_COUNT, 20);
    assert_eq!(TOP_PERFORMING_LIMIT, 5);
}

#[test]
fn test_config_from_args() {
    let args = CliArgs::try_parse_from([
        "pexels-relay",
        "--port",
        "8080",
        "--api-key",
        "secret",
        "--base-url",
        "http://localhost:9999/videos/",
        "--api-version",
        "v2",
        "--environment",
        "production",
    ])
    .unwrap();

    let config = RelayConfig::from_args(args);
    assert_eq!(config.port, 8080);
    assert_eq!(config.api_key, "secret");
    // Trailing slash is dropped so paths join cleanly.
    assert_eq!(config.base_url, "http://localhost:9999/videos");
    assert_eq!(config.api_version, "v2");
    assert_eq!(config.environment, "production");
    assert!(config.has_api_key());
}

#[test]
fn test_config_without_api_key() {
    let config = RelayConfig {
        port: 3003,
        api_key: "  ".to_string(),
        base_url: DEFAULT_API_BASE_URL.to_string(),
        api_version: DEFAULT_API_VERSION.to_string(),
        environment: "development".to_string(),
    };
    assert!(!config.has_api_key());
}
