//! Browser module tests
//!
//! Configuration and deadline tests run everywhere; the deadline tests stand
//! in a wedged executable for Chrome. Rendering tests need a local
//! Chrome/Chromium and are ignored by default:
//!
//! ```text
//! cargo test --test browser_tests -- --ignored
//! ```

mod common;

use common::init_test_tracing;
use sitemeta::config::ExtractionConfigBuilder;
use sitemeta::fetch::fetch_rendered;
use sitemeta::{
    BrowserConfig, BrowserSource, Error, ExtractionConfig, MetaResolver, PageSource, RenderError,
    SiteMetaClient,
};
use std::sync::Arc;
use std::time::Duration;
use url::Url;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A page whose description only exists after its script runs
const SCRIPTED_PAGE: &str = r#"<!DOCTYPE html>
<html><head>
    <title>Scripted</title>
    <script>
        setTimeout(() => {
            const meta = document.createElement('meta');
            meta.setAttribute('name', 'description');
            meta.setAttribute('content', 'Injected by script');
            document.head.appendChild(meta);
        }, 100);
    </script>
</head><body><div id="root"></div></body></html>"#;

fn ci_browser() -> ExtractionConfigBuilder {
    ExtractionConfig::builder()
        .sandbox(false)
        .browser_arg("--disable-gpu")
        .browser_arg("--disable-dev-shm-usage")
}

async fn serve(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(body),
        )
        .mount(&server)
        .await;
    server
}

#[test]
fn test_browser_config_default() {
    let config = BrowserConfig::default();
    assert!(config.headless);
    assert_eq!(config.width, 1920);
    assert_eq!(config.height, 1080);
    assert!(config.sandbox);
    assert!(config.chrome_path.is_none());
    assert!(config.extra_args.is_empty());
}

#[test]
fn test_launch_options_land_in_browser_config() {
    let config = ci_browser()
        .headless(false)
        .viewport(1280, 720)
        .browser_settle_delay(Duration::from_millis(250))
        .build();

    assert!(!config.browser.headless);
    assert_eq!(config.browser.width, 1280);
    assert_eq!(config.browser.height, 720);
    assert!(!config.browser.sandbox);
    assert_eq!(
        config.browser.extra_args,
        vec!["--disable-gpu", "--disable-dev-shm-usage"]
    );
    assert_eq!(config.browser_settle_delay, Duration::from_millis(250));
}

#[test]
fn test_browser_source_name() {
    let source = BrowserSource::new(Arc::new(ExtractionConfig::default()));
    assert_eq!(source.name(), "browser");
}

#[cfg(unix)]
mod hung_browser {
    use super::*;
    use crate::common::hung_browser_executable;
    use tokio::time::Instant;

    const BUDGET: Duration = Duration::from_millis(300);

    /// Generous ceiling: the deadline plus teardown grace, never a hang
    const CEILING: Duration = Duration::from_secs(8);

    fn hung_config() -> ExtractionConfig {
        ExtractionConfig::builder()
            .browser_timeout(BUDGET)
            .chrome_path(hung_browser_executable().to_string_lossy())
            .build()
    }

    #[tokio::test]
    async fn test_render_deadline_bounds_wedged_launch() {
        init_test_tracing();
        let source = BrowserSource::new(Arc::new(hung_config()));
        let url = Url::parse("https://example.com/").unwrap();

        let started = Instant::now();
        let err = source.fetch_markup(&url).await.unwrap_err();

        assert!(started.elapsed() < CEILING, "took {:?}", started.elapsed());
        assert!(matches!(err, Error::Render(RenderError::Timeout(300))));
    }

    #[tokio::test]
    async fn test_fetch_rendered_reports_timeout() {
        let url = Url::parse("https://example.com/").unwrap();

        let err = fetch_rendered(&url, &hung_config()).await.unwrap_err();

        assert!(matches!(err, Error::Render(RenderError::Timeout(300))));
    }

    #[tokio::test]
    async fn test_client_returns_static_result_when_browser_hangs() {
        init_test_tracing();
        let server = serve(
            r#"<html><head><title>Loading...</title></head><body></body></html>"#,
        )
        .await;
        let client = SiteMetaClient::with_config(hung_config()).unwrap();

        let started = Instant::now();
        let meta = client
            .get_site_meta(&format!("{}/app", server.uri()))
            .await
            .unwrap();

        assert!(started.elapsed() < CEILING, "took {:?}", started.elapsed());
        assert_eq!(meta.title(), Some("Loading..."));
        assert!(meta.description().is_none());
    }
}

#[tokio::test]
#[ignore = "requires a local Chrome/Chromium"]
async fn test_render_captures_script_output() {
    init_test_tracing();
    let server = serve(SCRIPTED_PAGE).await;

    let config = ci_browser()
        .browser_settle_delay(Duration::from_millis(500))
        .build();
    let source = BrowserSource::new(Arc::new(config));
    let url = Url::parse(&format!("{}/app", server.uri())).unwrap();

    let html = source.fetch_markup(&url).await.unwrap();
    assert!(html.starts_with("<html"));
    assert!(html.contains("Injected by script"));
}

#[tokio::test]
#[ignore = "requires a local Chrome/Chromium"]
async fn test_fetch_rendered_parses_script_output() {
    init_test_tracing();
    let server = serve(SCRIPTED_PAGE).await;

    let config = ci_browser()
        .browser_settle_delay(Duration::from_millis(500))
        .build();
    let url = Url::parse(&format!("{}/app", server.uri())).unwrap();

    let document = fetch_rendered(&url, &config).await.unwrap();
    let meta = MetaResolver::default().resolve(&document, &url);
    assert_eq!(meta.description(), Some("Injected by script"));
}

#[tokio::test]
#[ignore = "requires a local Chrome/Chromium"]
async fn test_client_falls_back_to_render() {
    init_test_tracing();
    let server = serve(SCRIPTED_PAGE).await;

    let client = SiteMetaClient::with_config(ci_browser().build()).unwrap();

    let meta = client
        .get_site_meta(&format!("{}/app", server.uri()))
        .await
        .unwrap();

    assert_eq!(meta.title(), Some("Scripted"));
    assert_eq!(meta.description(), Some("Injected by script"));
}

#[tokio::test]
#[ignore = "requires a local Chrome/Chromium"]
async fn test_render_times_out() {
    let config = ci_browser()
        .browser_timeout(Duration::from_millis(50))
        .browser_settle_delay(Duration::from_secs(5))
        .build();
    let source = BrowserSource::new(Arc::new(config));
    let url = Url::parse("https://example.com/").unwrap();

    let err = source.fetch_markup(&url).await.unwrap_err();
    assert!(matches!(err, Error::Render(RenderError::Timeout(50))));
}
