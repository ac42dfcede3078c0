//! URL validation utilities

use crate::error::{Error, Result};
use url::Url;

/// Validates caller-supplied URLs before any network activity
pub struct UrlValidator;

impl UrlValidator {
    /// Parse and validate a URL for extraction.
    ///
    /// The URL must be non-empty, absolute, use `http` or `https`, and name a
    /// host. The returned [`Url`] is the normalized form used as the
    /// metadata's source URL.
    pub fn parse(url: &str) -> Result<Url> {
        if url.is_empty() {
            return Err(Error::invalid_url("URL cannot be empty"));
        }

        let parsed = Url::parse(url).map_err(|e| Error::invalid_url(format!("{}: {}", url, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::invalid_url(format!(
                "URL must start with http:// or https://: {}",
                url
            )));
        }

        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(Error::invalid_url(format!("URL has no host: {}", url)));
        }

        Ok(parsed)
    }
}
