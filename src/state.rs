use std::sync::Arc;

use crate::analytics::Aggregator;
use crate::config::RelayConfig;
use crate::pexels::PexelsClient;

pub type SharedState = Arc<AppState>;

/// Per-process state handed to every handler. Nothing in here is mutated
/// after startup.
pub struct AppState {
    pub config: RelayConfig,
    pub pexels: PexelsClient,
    pub analytics: Aggregator,
}

impl AppState {
    pub fn new(config: RelayConfig) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("pexels-relay/", env!("CARGO_PKG_VERSION")))
            .pool_max_idle_per_host(4)
            .build()?;
        let pexels = PexelsClient::new(http_client, &config);
        let analytics = Aggregator::new(pexels.clone());
        Ok(Self {
            config,
            pexels,
            analytics,
        })
    }
}
