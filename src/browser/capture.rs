//! Rendered markup capture

use crate::error::{Error, RenderError, Result};
use chromiumoxide::Page;
use tracing::{debug, instrument};

/// Page capture functionality
pub struct PageCapture;

impl PageCapture {
    /// Capture the outer HTML of the first element matching `selector`
    #[instrument(skip(page))]
    pub async fn outer_html(page: &Page, selector: &str) -> Result<String> {
        let script = format!(
            r#"
            (() => {{
                const el = document.querySelector('{}');
                return el ? el.outerHTML : '';
            }})()
            "#,
            selector.replace('\\', "\\\\").replace('\'', "\\'")
        );

        let html: String = page
            .evaluate(script.as_str())
            .await
            .map_err(|e| RenderError::CaptureFailed(e.to_string()))?
            .into_value()
            .map_err(|e| Error::parse(format!("rendered markup is not a string: {}", e)))?;

        if html.is_empty() {
            return Err(
                RenderError::CaptureFailed(format!("no element matches {}", selector)).into(),
            );
        }

        debug!("HTML captured: {} bytes", html.len());
        Ok(html)
    }
}
