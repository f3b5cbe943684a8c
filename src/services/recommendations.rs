/// Recommendation service client
///
/// The recommendation service is an external HTTP endpoint that, given a movie
/// title and a user identifier, returns a ranked list of suggested titles.
/// Callers depend on the `RecommendationService` trait so the transport can be
/// swapped for a mock in tests.
use std::time::Duration;

use reqwest::Client as HttpClient;
use tracing::instrument;

use crate::{
    error::{AppError, AppResult},
    models::RecommendationList,
};

const RECOMMEND_PATH: &str = "/recommend";

/// Trait for recommendation backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationService: Send + Sync {
    /// Fetch recommendations for a movie on behalf of a user
    ///
    /// An empty list means the service answered but had nothing to suggest.
    async fn recommend(&self, movie_name: &str, user_id: &str) -> AppResult<RecommendationList>;

    /// Service name for logging and debugging
    fn name(&self) -> &'static str;
}

/// `GET /recommend` over HTTP
#[derive(Clone)]
pub struct HttpRecommendationService {
    http_client: HttpClient,
    api_url: String,
}

impl HttpRecommendationService {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url: api_url.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), RECOMMEND_PATH)
    }
}

#[async_trait::async_trait]
impl RecommendationService for HttpRecommendationService {
    #[instrument(skip(self))]
    async fn recommend(&self, movie_name: &str, user_id: &str) -> AppResult<RecommendationList> {
        if movie_name.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Movie name cannot be empty".to_string(),
            ));
        }

        let response = self
            .http_client
            .get(self.endpoint())
            .query(&[("movie_name", movie_name), ("user_id", user_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw recommendation response");

        let body: serde_json::Value = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %response_text,
                "Failed to deserialize recommendation response"
            );
            AppError::MalformedResponse(format!("Failed to parse response: {}", e))
        })?;

        let recommendations = RecommendationList::from_response(&body);

        tracing::info!(
            results = recommendations.len(),
            "Recommendations fetched"
        );

        Ok(recommendations)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
