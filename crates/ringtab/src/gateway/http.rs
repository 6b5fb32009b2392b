//! HTTP implementation of the analysis gateway.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{Result, RingtabError};

use super::verdict::{AnalysisRequest, AnalysisVerdict};
use super::AnalysisGateway;

/// Environment variable naming the analysis service base URL.
const BASE_URL_ENV: &str = "RINGTAB_ANALYZER_URL";

/// Default request timeout. Graph rendering on the service side can take a
/// while for larger structures.
const TIMEOUT: Duration = Duration::from_secs(60);

/// Blocking HTTP client for the analysis service.
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// Create a gateway for the given base URL (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| RingtabError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a gateway from the `RINGTAB_ANALYZER_URL` environment variable.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV).map_err(|_| {
            RingtabError::Config(format!("{} environment variable not set", BASE_URL_ENV))
        })?;
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl AnalysisGateway for HttpGateway {
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisVerdict> {
        let url = format!("{}/analyze", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| RingtabError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(RingtabError::Gateway {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .map_err(|e| RingtabError::Transport(format!("Failed to parse verdict: {}", e)))
    }

    fn name(&self) -> &str {
        "http"
    }
}
