//! Error types for sitemeta
//!
//! The pipeline surfaces a small, layered set of errors built with `thiserror`.
//! Static-fetch failures are fatal; render failures are absorbed by the client
//! and only ever reach callers that drive a [`crate::fetch::BrowserSource`]
//! directly.

use thiserror::Error;

/// The main error type for sitemeta operations
#[derive(Error, Debug)]
pub enum Error {
    /// The input URL was empty or not an absolute http(s) URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Static HTTP fetch errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Headless browser render errors
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Fetched markup could not be turned into a document
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Errors raised by the static HTTP fetch
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, DNS, TLS or body transfer failure
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not complete within the HTTP timeout
    #[error("Request timed out after {0}ms")]
    Timeout(u64),

    /// The server answered with something other than 200 OK
    #[error("HTTP status {status} for {url}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },
}

/// Errors raised while rendering a page in the headless browser
#[derive(Error, Debug)]
pub enum RenderError {
    /// Failed to launch browser
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Browser configuration error
    #[error("Invalid browser configuration: {0}")]
    ConfigError(String),

    /// Failed to create new page/tab
    #[error("Failed to create page: {0}")]
    PageCreationFailed(String),

    /// Navigation to the target URL failed
    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    /// The page never reported the awaited element
    #[error("Page never became ready: {0}")]
    ReadinessFailed(String),

    /// Reading the rendered markup failed
    #[error("HTML capture failed: {0}")]
    CaptureFailed(String),

    /// The render sequence exceeded the browser timeout
    #[error("Render timed out after {0}ms")]
    Timeout(u64),
}

/// Result type alias for sitemeta operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid URL error from a string
    pub fn invalid_url<S: Into<String>>(msg: S) -> Self {
        Error::InvalidUrl(msg.into())
    }

    /// Create a parse error from a string
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
}
