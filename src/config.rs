//! Client configuration
//!
//! [`ExtractionConfig`] is supplied once when a client is built and shared
//! read-only by every request that client issues.

use crate::browser::BrowserConfig;
use crate::extraction::MatchMode;
use std::time::Duration;

/// Default timeout for the static HTTP fetch
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Default bound on the whole browser render sequence
pub const DEFAULT_BROWSER_TIMEOUT: Duration = Duration::from_secs(20);

/// Default wait after the body appears, for client-side rendering to settle
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(1);

/// Default `User-Agent` sent with static fetches
pub const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; sitemeta/",
    env!("CARGO_PKG_VERSION"),
    "; link preview bot)"
);

/// Settings for metadata extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Timeout for the static HTTP fetch (default: 10s)
    pub http_timeout: Duration,
    /// Timeout for the full render sequence (default: 20s)
    pub browser_timeout: Duration,
    /// Fixed wait after the body is present (default: 1s)
    pub browser_settle_delay: Duration,
    /// User agent for the static fetch
    pub user_agent: String,
    /// How meta tags are matched (default: positional)
    pub match_mode: MatchMode,
    /// Browser launch options for the rendered fetch
    pub browser: BrowserConfig,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            browser_timeout: DEFAULT_BROWSER_TIMEOUT,
            browser_settle_delay: DEFAULT_SETTLE_DELAY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            match_mode: MatchMode::default(),
            browser: BrowserConfig::default(),
        }
    }
}

impl ExtractionConfig {
    /// Create a new config builder
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder::default()
    }
}

/// Builder for ExtractionConfig
#[derive(Default)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    /// Set the static fetch timeout
    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    /// Set the render sequence timeout
    pub fn browser_timeout(mut self, timeout: Duration) -> Self {
        self.config.browser_timeout = timeout;
        self
    }

    /// Set the settle delay
    pub fn browser_settle_delay(mut self, delay: Duration) -> Self {
        self.config.browser_settle_delay = delay;
        self
    }

    /// Set user agent
    pub fn user_agent<S: Into<String>>(mut self, ua: S) -> Self {
        self.config.user_agent = ua.into();
        self
    }

    /// Set the meta tag matching policy
    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.config.match_mode = mode;
        self
    }

    /// Run the browser headless or with a window
    pub fn headless(mut self, headless: bool) -> Self {
        self.config.browser.headless = headless;
        self
    }

    /// Set the browser viewport
    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.config.browser.width = width;
        self.config.browser.height = height;
        self
    }

    /// Enable or disable the browser sandbox
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.config.browser.sandbox = sandbox;
        self
    }

    /// Launch this Chrome/Chromium executable instead of auto-detecting one
    pub fn chrome_path<S: Into<String>>(mut self, path: S) -> Self {
        self.config.browser.chrome_path = Some(path.into());
        self
    }

    /// Pass an extra command-line argument to the browser
    pub fn browser_arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.config.browser.extra_args.push(arg.into());
        self
    }

    /// Build the config
    pub fn build(self) -> ExtractionConfig {
        self.config
    }
}

/// Milliseconds in a duration, saturating, for error and log messages
pub(crate) fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
