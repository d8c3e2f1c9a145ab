//! Endpoint paths and client settings.

/// Validation endpoint: returns totals or field errors
pub const VALIDATE_FINANCE_PATH: &str = "/api/validate-finance";

/// Report endpoint: returns the PDF bytes
pub const GENERATE_REPORT_PATH: &str = "/api/generate-report";

pub const HEALTH_PATH: &str = "/health";

/// Saved filename when the report response does not name one
pub const DEFAULT_REPORT_FILENAME: &str = "Finance_Report.pdf";

/// Seasons accepted by the server, in the order the form lists them
pub const SEASONS: [&str; 4] = ["Kharif", "Rabi", "Summer", "Other"];

/// Where the finance API lives.
///
/// An empty base URL means same-origin requests, which is how the page is
/// normally served.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Full URL for an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn validate_finance_url(&self) -> String {
        self.url(VALIDATE_FINANCE_PATH)
    }

    pub fn generate_report_url(&self) -> String {
        self.url(GENERATE_REPORT_PATH)
    }

    pub fn health_url(&self) -> String {
        self.url(HEALTH_PATH)
    }

    /// Human readable name of the target, for status display
    pub fn endpoint_label(&self) -> &str {
        if self.base_url.is_empty() {
            "this server"
        } else {
            &self.base_url
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_same_origin() {
        let config = ApiConfig::default();
        assert_eq!(config.validate_finance_url(), "/api/validate-finance");
        assert_eq!(config.generate_report_url(), "/api/generate-report");
        assert_eq!(config.endpoint_label(), "this server");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ApiConfig::new("http://localhost:8000/ ");
        assert_eq!(config.health_url(), "http://localhost:8000/health");
        assert_eq!(config.endpoint_label(), "http://localhost:8000");
    }
}
