use clap::Parser;

use crate::config::Config;

/// Movie recommendations from the terminal
#[derive(Debug, Parser)]
#[command(name = "movie-search", version, about)]
pub struct Cli {
    /// Run a single search for this movie and exit; omit for an interactive prompt
    pub movie: Option<String>,

    /// Recommendation service base URL (overrides RECOMMEND_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// User identifier sent with requests (overrides RECOMMEND_USER_ID)
    #[arg(long)]
    pub user_id: Option<String>,

    /// Request timeout in seconds (overrides REQUEST_TIMEOUT_SECS)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    /// Layers command-line overrides on top of the environment configuration
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(api_url) = &self.api_url {
            config.recommend_api_url = api_url.clone();
        }
        if let Some(user_id) = &self.user_id {
            config.recommend_user_id = user_id.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.request_timeout_secs = timeout_secs;
        }
        config
    }
}
