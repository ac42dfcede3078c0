//! Metadata client
//!
//! [`SiteMetaClient`] runs the two-stage pipeline: a static fetch first, then
//! a browser render only when the static pass found no description.

use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::extraction::{MetaResolver, SiteMetadata};
use crate::fetch::{BrowserSource, HttpSource, PageSource};
use crate::validation::UrlValidator;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Extracts [`SiteMetadata`] from web pages.
///
/// Cloning is cheap and clones share the HTTP connection pool. A client can
/// serve concurrent calls; each call keeps its own state.
#[derive(Clone)]
pub struct SiteMetaClient {
    config: Arc<ExtractionConfig>,
    static_source: Arc<dyn PageSource>,
    rendered_source: Arc<dyn PageSource>,
}

impl SiteMetaClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ExtractionConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ExtractionConfig) -> Result<Self> {
        let config = Arc::new(config);
        let static_source = HttpSource::new(&config)?;
        let rendered_source = BrowserSource::new(Arc::clone(&config));

        Ok(Self {
            config,
            static_source: Arc::new(static_source),
            rendered_source: Arc::new(rendered_source),
        })
    }

    /// Create a client with custom page sources for either stage
    pub fn with_sources(
        config: ExtractionConfig,
        static_source: Arc<dyn PageSource>,
        rendered_source: Arc<dyn PageSource>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            static_source,
            rendered_source,
        }
    }

    /// Get the client configuration
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Fetch metadata for `url`.
    ///
    /// Fails only for an invalid URL or a failed static fetch. When the static
    /// pass finds no description the page is rendered in a headless browser;
    /// a successful render replaces the static result wholesale, including
    /// fields the render left empty. A failed render is logged and the static
    /// result is returned.
    #[instrument(skip(self))]
    pub async fn get_site_meta(&self, url: &str) -> Result<SiteMetadata> {
        let target = UrlValidator::parse(url)?;
        let resolver = MetaResolver::new(self.config.match_mode);

        let metadata = Self::extract(self.static_source.as_ref(), &resolver, &target).await?;

        if metadata.has_description() {
            return Ok(metadata);
        }

        debug!(
            "No description from {} source, falling back to {}",
            self.static_source.name(),
            self.rendered_source.name()
        );

        match Self::extract(self.rendered_source.as_ref(), &resolver, &target).await {
            Ok(rendered) => Ok(rendered),
            Err(e) => {
                warn!("Rendered extraction failed, returning static result: {}", e);
                Ok(metadata)
            }
        }
    }

    async fn extract(
        source: &dyn PageSource,
        resolver: &MetaResolver,
        url: &Url,
    ) -> Result<SiteMetadata> {
        let markup = source.fetch_markup(url).await?;
        let metadata = resolver.resolve_markup(&markup, url);

        info!(
            source = source.name(),
            has_title = metadata.title.is_some(),
            has_description = metadata.has_description(),
            has_image = metadata.image.is_some(),
            "Extracted metadata"
        );

        Ok(metadata)
    }
}

impl std::fmt::Debug for SiteMetaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteMetaClient")
            .field("config", &self.config)
            .field("static_source", &self.static_source.name())
            .field("rendered_source", &self.rendered_source.name())
            .finish()
    }
}

/// Fetch metadata for `url` with a default client
pub async fn get_site_meta(url: &str) -> Result<SiteMetadata> {
    SiteMetaClient::new()?.get_site_meta(url).await
}
