#![allow(dead_code)]

use async_trait::async_trait;
use sitemeta::error::{FetchError, RenderError};
use sitemeta::{PageSource, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use url::Url;

pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sitemeta=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Write an executable that starts, never announces a DevTools endpoint and
/// never exits on its own. Launching it as the browser wedges the launch.
#[cfg(unix)]
pub fn hung_browser_executable() -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    static NEXT: AtomicUsize = AtomicUsize::new(0);
    let path = std::env::temp_dir().join(format!(
        "sitemeta-hung-browser-{}-{}",
        std::process::id(),
        NEXT.fetch_add(1, Ordering::SeqCst)
    ));
    std::fs::write(&path, "#!/bin/sh\nexec sleep 30\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

enum Response {
    Markup(String),
    FetchFailure(u16),
    RenderFailure,
    Unreachable,
}

/// Canned [`PageSource`] that counts its calls
pub struct StubSource {
    name: &'static str,
    response: Response,
    calls: AtomicUsize,
}

impl StubSource {
    fn build(name: &'static str, response: Response) -> Arc<Self> {
        Arc::new(Self {
            name,
            response,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn markup(name: &'static str, html: &str) -> Arc<Self> {
        Self::build(name, Response::Markup(html.to_string()))
    }

    pub fn http_status(name: &'static str, status: u16) -> Arc<Self> {
        Self::build(name, Response::FetchFailure(status))
    }

    pub fn render_failure(name: &'static str) -> Arc<Self> {
        Self::build(name, Response::RenderFailure)
    }

    /// A source the test expects never to be used
    pub fn unreachable(name: &'static str) -> Arc<Self> {
        Self::build(name, Response::Unreachable)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageSource for StubSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch_markup(&self, url: &Url) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Response::Markup(html) => Ok(html.clone()),
            Response::FetchFailure(status) => Err(FetchError::HttpStatus {
                status: *status,
                url: url.to_string(),
            }
            .into()),
            Response::RenderFailure => {
                Err(RenderError::NavigationFailed("net::ERR_NAME_NOT_RESOLVED".to_string()).into())
            }
            Response::Unreachable => panic!("{} source must not be called for {}", self.name, url),
        }
    }
}
