//! Headless-browser rendered fetch
//!
//! Sequence, all under `browser_timeout`:
//!
//! 1. launch an isolated browser
//! 2. navigate to the URL
//! 3. wait for `body`
//! 4. sleep `browser_settle_delay`
//! 5. capture the outer HTML of `html`
//!
//! The browser is closed afterwards whatever the outcome, and killed if it
//! will not exit.

use crate::browser::{BrowserSession, PageCapture, PageNavigator};
use crate::config::{millis, ExtractionConfig};
use crate::error::{RenderError, Result};
use crate::fetch::PageSource;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Selector that must be present before the settle delay starts
const READY_SELECTOR: &str = "body";

/// Selector whose outer HTML is captured
const CAPTURE_SELECTOR: &str = "html";

/// Fetches markup after executing the page in a headless browser
#[derive(Debug, Clone)]
pub struct BrowserSource {
    config: Arc<ExtractionConfig>,
}

impl BrowserSource {
    /// Create a source using the browser settings in `config`
    pub fn new(config: Arc<ExtractionConfig>) -> Self {
        Self { config }
    }

    async fn render(session: &BrowserSession, url: &Url, settle: Duration) -> Result<String> {
        let page = session.new_page().await?;
        PageNavigator::goto(&page, url).await?;
        PageNavigator::wait_for_selector(&page, READY_SELECTOR).await?;

        debug!("Settling for {:?}", settle);
        tokio::time::sleep(settle).await;

        PageCapture::outer_html(&page, CAPTURE_SELECTOR).await
    }
}

#[async_trait]
impl PageSource for BrowserSource {
    fn name(&self) -> &'static str {
        "browser"
    }

    #[instrument(skip(self, url), fields(url = %url))]
    async fn fetch_markup(&self, url: &Url) -> Result<String> {
        let budget = self.config.browser_timeout;
        let deadline = Instant::now() + budget;
        let timed_out = || RenderError::Timeout(millis(budget));

        info!("Rendering page in headless browser");

        let session = timeout_at(deadline, BrowserSession::launch(&self.config.browser))
            .await
            .map_err(|_| timed_out())??;

        let outcome = timeout_at(
            deadline,
            Self::render(&session, url, self.config.browser_settle_delay),
        )
        .await;

        session.close().await;

        match outcome {
            Ok(Ok(html)) => {
                debug!("Rendered {} bytes", html.len());
                Ok(html)
            }
            Ok(Err(e)) => Err(e),
            Err(_) => {
                warn!("Render exceeded {:?}", budget);
                Err(timed_out().into())
            }
        }
    }
}
