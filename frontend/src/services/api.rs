use async_trait::async_trait;
use gloo::net::http::Request;
use shared::{ApiConfig, FinanceApi, HealthResponse, RawResponse};

use crate::services::dom;

/// API client for communicating with the finance server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    /// Create a new API client that talks to the origin serving the page
    pub fn new() -> Self {
        Self {
            config: ApiConfig::default(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            config: ApiConfig::new(base_url),
        }
    }

    /// Use the `api-base-url` meta tag of the page when present
    pub fn from_page() -> Self {
        match dom::meta_content("api-base-url") {
            Some(base_url) if !base_url.trim().is_empty() => Self::with_base_url(base_url),
            _ => Self::new(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Test connection to the server
    pub async fn test_connection(&self) -> Result<(), String> {
        let response = Request::get(&self.config.health_url())
            .send()
            .await
            .map_err(|e| format!("Connection failed: {}", e))?;

        if !response.ok() {
            return Err(format!("Server error {}", response.status()));
        }

        match response.json::<HealthResponse>().await {
            Ok(health) if health.status == "ok" => Ok(()),
            Ok(health) => Err(format!("Server reports status {}", health.status)),
            Err(e) => Err(format!("Failed to parse health response: {}", e)),
        }
    }

    async fn post_json(&self, url: &str, body: &str) -> Result<RawResponse, String> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .map_err(|e| format!("Failed to build request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let status = response.status();
        let content_disposition = response.headers().get("Content-Disposition");
        let body = response
            .binary()
            .await
            .map_err(|e| format!("Failed to read response: {}", e))?;

        Ok(RawResponse {
            status,
            content_disposition,
            body,
        })
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl FinanceApi for ApiClient {
    async fn validate_finance(&self, body: &str) -> Result<RawResponse, String> {
        self.post_json(&self.config.validate_finance_url(), body).await
    }

    async fn generate_report(&self, body: &str) -> Result<RawResponse, String> {
        self.post_json(&self.config.generate_report_url(), body).await
    }
}
