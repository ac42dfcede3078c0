//! Static HTTP fetch

use crate::config::{millis, ExtractionConfig};
use crate::error::{Error, FetchError, Result};
use crate::fetch::PageSource;
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

/// Fetches server-rendered markup with one GET request
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    user_agent: String,
    timeout: Duration,
}

impl HttpSource {
    /// Build the HTTP client for `config`
    pub fn new(config: &ExtractionConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| FetchError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
            timeout: config.http_timeout,
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            FetchError::Timeout(millis(self.timeout)).into()
        } else {
            FetchError::Network(err.to_string()).into()
        }
    }
}

#[async_trait]
impl PageSource for HttpSource {
    fn name(&self) -> &'static str {
        "http"
    }

    #[instrument(skip(self, url), fields(url = %url))]
    async fn fetch_markup(&self, url: &Url) -> Result<String> {
        info!("Fetching page");

        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, self.user_agent.as_str())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        let body = response.text().await.map_err(|e| {
            if e.is_decode() {
                Error::parse(format!("response body is not readable as HTML: {}", e))
            } else {
                self.transport_error(e)
            }
        })?;

        debug!("Fetched {} bytes", body.len());
        Ok(body)
    }
}
