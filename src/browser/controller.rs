//! Browser lifecycle management
//!
//! Every rendered fetch launches its own [`BrowserSession`] and closes it when
//! done. Sessions are never shared between calls.

use crate::error::{RenderError, Result};
use chromiumoxide::browser::{Browser, BrowserConfig as CdpBrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Time allowed for a graceful close before the process is killed
const BROWSER_SHUTDOWN_GRACE: Duration = Duration::from_secs(3);

/// Grace period for the CDP handler task after the browser is gone
const HANDLER_SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// Launch options for the headless browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    /// Run in headless mode (default: true)
    pub headless: bool,
    /// Browser window width (default: 1920)
    pub width: u32,
    /// Browser window height (default: 1080)
    pub height: u32,
    /// Enable sandbox (default: true)
    pub sandbox: bool,
    /// Path to Chrome/Chromium executable (None = auto-detect)
    pub chrome_path: Option<String>,
    /// Additional Chrome arguments
    pub extra_args: Vec<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            width: 1920,
            height: 1080,
            sandbox: true,
            chrome_path: None,
            extra_args: Vec::new(),
        }
    }
}

impl BrowserConfig {
    fn to_cdp(&self) -> Result<CdpBrowserConfig> {
        let mut builder = CdpBrowserConfig::builder().viewport(
            chromiumoxide::handler::viewport::Viewport {
                width: self.width,
                height: self.height,
                device_scale_factor: None,
                emulating_mobile: false,
                is_landscape: true,
                has_touch: false,
            },
        );

        if !self.headless {
            builder = builder.with_head();
        }

        if !self.sandbox {
            builder = builder.arg("--no-sandbox");
        }

        if let Some(ref path) = self.chrome_path {
            builder = builder.chrome_executable(path);
        }

        for arg in &self.extra_args {
            builder = builder.arg(arg);
        }

        builder
            .build()
            .map_err(|e| RenderError::ConfigError(e.to_string()).into())
    }
}

/// One isolated browser process plus its CDP event loop
pub struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
}

impl BrowserSession {
    /// Launch a fresh browser
    #[instrument(skip(config))]
    pub async fn launch(config: &BrowserConfig) -> Result<Self> {
        info!(
            "Launching browser with config: headless={}",
            config.headless
        );

        let cdp_config = config.to_cdp()?;

        let (browser, mut handler) = Browser::launch(cdp_config)
            .await
            .map_err(|e| RenderError::LaunchFailed(e.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    warn!("Browser handler event error");
                    break;
                }
            }
            debug!("Browser handler finished");
        });

        debug!("Browser launched");

        Ok(Self {
            browser,
            handler: handler_task,
        })
    }

    /// Open a blank page/tab
    #[instrument(skip(self))]
    pub async fn new_page(&self) -> Result<Page> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| RenderError::PageCreationFailed(e.to_string()))?;

        debug!("Created new page");
        Ok(page)
    }

    /// Close the browser and wait for the handler to wind down.
    ///
    /// A browser that does not exit within a short grace period is
    /// killed. Teardown failures are logged, never returned: the render
    /// result is already decided by the time a session closes.
    #[instrument(skip(self))]
    pub async fn close(mut self) {
        let graceful = tokio::time::timeout(BROWSER_SHUTDOWN_GRACE, async {
            if let Err(e) = self.browser.close().await {
                warn!("Failed to close browser cleanly: {}", e);
            }
            if let Err(e) = self.browser.wait().await {
                warn!("Failed to reap browser process: {}", e);
            }
        })
        .await;

        if graceful.is_err() {
            warn!(
                "Browser still running after {:?}, killing it",
                BROWSER_SHUTDOWN_GRACE
            );
            if let Some(Err(e)) = self.browser.kill().await {
                warn!("Failed to kill browser process: {}", e);
            }
        }

        if tokio::time::timeout(HANDLER_SHUTDOWN_GRACE, &mut self.handler)
            .await
            .is_err()
        {
            self.handler.abort();
        }

        debug!("Browser closed");
    }
}
