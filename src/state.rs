use crate::config::Config;

/// Shared handler state: configuration plus the outbound HTTP client.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config, http: reqwest::Client) -> Self {
        Self { config, http }
    }
}
