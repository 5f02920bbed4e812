//! Task API connection configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::api::HttpApiConfig;

/// Where the task API lives.
///
/// Without a base URL the bot runs against the in-memory adapter.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the task service, e.g. `https://tasks.example.com/api`
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Bearer token sent with every request
    pub token: Option<Secret<String>>,
}

impl ApiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a remote service is configured
    pub fn is_remote(&self) -> bool {
        self.base_url.as_ref().is_some_and(|url| !url.trim().is_empty())
    }

    /// Builds the HTTP client settings, or `None` for the in-memory adapter.
    pub fn http_config(&self) -> Option<HttpApiConfig> {
        let base_url = self.base_url.as_deref().filter(|url| !url.trim().is_empty())?;
        let config = HttpApiConfig::new(base_url.trim()).with_timeout(self.timeout());
        Some(match &self.token {
            Some(token) => config.with_token(token.clone()),
            None => config,
        })
    }

    /// Validate API configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        if let Some(url) = self.base_url.as_deref().filter(|url| !url.trim().is_empty()) {
            let url = url.trim();
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidApiUrl(url.to_string()));
            }
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout(),
            token: None,
        }
    }
}

fn default_timeout() -> u64 {
    10
}
