use std::time::Duration;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Recommendation service base URL (scheme, host and port)
    #[serde(default = "default_recommend_api_url")]
    pub recommend_api_url: String,

    /// User identifier sent with every recommendation request
    #[serde(default = "default_recommend_user_id")]
    pub recommend_user_id: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_recommend_api_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_recommend_user_id() -> String {
    "user1".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recommend_api_url: default_recommend_api_url(),
            recommend_user_id: default_recommend_user_id(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?
            .validate()
    }

    /// Rejects values that would make every request fail
    pub fn validate(self) -> anyhow::Result<Self> {
        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be at least 1");
        }
        Ok(self)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
