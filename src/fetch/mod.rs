//! Page fetching
//!
//! Two ways to get a page's markup, both behind [`PageSource`]:
//!
//! - [`HttpSource`]: a single plain GET, no script execution
//! - [`BrowserSource`]: a full headless-browser render
//!
//! Neither retries. Retrying is left to callers.

pub mod http;
pub mod rendered;

pub use http::HttpSource;
pub use rendered::BrowserSource;

use crate::config::ExtractionConfig;
use crate::document::ParsedDocument;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// Something that can produce the markup of a page
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Short label for logs
    fn name(&self) -> &'static str;

    /// Fetch the page at `url` and return its markup
    async fn fetch_markup(&self, url: &Url) -> Result<String>;
}

/// Fetch `url` from `source` and parse the result
pub async fn fetch_document(source: &dyn PageSource, url: &Url) -> Result<ParsedDocument> {
    let markup = source.fetch_markup(url).await?;
    Ok(ParsedDocument::parse(&markup))
}

/// Static fetch with a one-off HTTP client
pub async fn fetch_static(url: &Url, config: &ExtractionConfig) -> Result<ParsedDocument> {
    let source = HttpSource::new(config)?;
    fetch_document(&source, url).await
}

/// Rendered fetch in a fresh browser session
pub async fn fetch_rendered(url: &Url, config: &ExtractionConfig) -> Result<ParsedDocument> {
    let source = BrowserSource::new(Arc::new(config.clone()));
    fetch_document(&source, url).await
}
