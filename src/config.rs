use clap::Parser;

/// Pexels Relay: proxies and summarizes the Pexels videos API.
#[derive(Parser, Debug, Clone)]
#[command(name = "pexels-relay")]
pub struct CliArgs {
    /// HTTP port to listen on
    #[arg(long = "port", env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Pexels API key, sent in the Authorization header
    #[arg(long = "api-key", env = "PEXELS_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Base URL of the Pexels videos API
    #[arg(long = "base-url", env = "PEXELS_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub base_url: String,

    /// API version reported by the status endpoint
    #[arg(long = "api-version", env = "PEXELS_API_VERSION", default_value = DEFAULT_API_VERSION)]
    pub api_version: String,

    /// Deployment environment name (informational)
    #[arg(long = "environment", env = "RELAY_ENV", default_value = "development")]
    pub environment: String,
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub port: u16,
    pub api_key: String,
    pub base_url: String,
    pub api_version: String,
    pub environment: String,
}

// Server constants
pub const DEFAULT_PORT: u16 = 3003;

// Upstream constants
pub const DEFAULT_API_BASE_URL: &str = "https://api.pexels.com/videos";
pub const DEFAULT_API_VERSION: &str = "v1";

// Paging defaults applied by the routes
pub const DEFAULT_PER_PAGE: u32 = 15;
pub const DEFAULT_PAGE: u32 = 1;

// Analytics defaults
pub const COLLECTION_PER_PAGE: u32 = 50;
pub const TRENDING_MAX_COUNT: u32 = 20;
pub const RECOMMENDATION_SAMPLE_SIZE: u32 = 10;
pub const TOP_PERFORMING_LIMIT: usize = 5;

/// Fixed query used by the plain search route.
pub const DEFAULT_SEARCH_QUERY: &str = "Single Continuous Shot";

impl RelayConfig {
    pub fn from_args(args: CliArgs) -> Self {
        RelayConfig {
            port: args.port,
            api_key: args.api_key,
            base_url: args.base_url.trim_end_matches('/').to_string(),
            api_version: args.api_version,
            environment: args.environment,
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
