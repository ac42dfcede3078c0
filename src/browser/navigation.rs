//! Page navigation and readiness waiting
//!
//! Individual steps carry no timeouts of their own. The render sequence runs
//! them under one shared deadline (see [`crate::fetch::BrowserSource`]).

use crate::error::{RenderError, Result};
use chromiumoxide::Page;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Interval between readiness probes inside the page
const READY_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Page navigator
pub struct PageNavigator;

impl PageNavigator {
    /// Navigate the page to `url` and wait for the load to finish
    #[instrument(skip(page, url), fields(url = %url))]
    pub async fn goto(page: &Page, url: &Url) -> Result<()> {
        page.goto(url.as_str())
            .await
            .map_err(|e| RenderError::NavigationFailed(e.to_string()))?;

        debug!("Navigation complete: {}", url);
        Ok(())
    }

    /// Wait until an element matching `selector` is present in the document.
    ///
    /// The probe runs inside the page and keeps polling until it succeeds or
    /// the caller's deadline drops this future.
    #[instrument(skip(page))]
    pub async fn wait_for_selector(page: &Page, selector: &str) -> Result<()> {
        let script = format!(
            r#"
                new Promise((resolve, reject) => {{
                    function check() {{
                        let el;
                        try {{
                            el = document.querySelector('{}');
                        }} catch (e) {{
                            reject(e);
                            return;
                        }}
                        if (el) {{
                            resolve(true);
                        }} else {{
                            setTimeout(check, {});
                        }}
                    }}
                    check();
                }})
            "#,
            selector.replace('\\', "\\\\").replace('\'', "\\'"),
            READY_POLL_INTERVAL.as_millis()
        );

        page.evaluate(script.as_str())
            .await
            .map_err(|e| RenderError::ReadinessFailed(e.to_string()))?;

        debug!("Selector ready: {}", selector);
        Ok(())
    }
}

