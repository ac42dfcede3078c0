//! Site metadata resolution
//!
//! [`MetaResolver`] walks a parsed document's `head`, reads the title and
//! meta tags, and produces a [`SiteMetadata`]. Resolution has no failure
//! path: anything it cannot find is simply left empty.

use crate::document::ParsedDocument;
use crate::extraction::meta_tag::{
    first_match, MatchMode, MetaTagRecord, DESCRIPTION_PATTERNS, IMAGE_PATTERNS,
};
use scraper::ElementRef;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

/// Metadata for one page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    /// Text of the first `<title>` in the head, untrimmed
    pub title: Option<String>,
    /// Description from `description`, `og:description` or `twitter:description`
    pub description: Option<String>,
    /// Preview image from `og:image` or `twitter:image`, made absolute when possible
    pub image: Option<String>,
    /// Normalized URL the metadata was extracted for
    pub url: String,
}

impl SiteMetadata {
    /// Metadata with only the URL set
    pub fn empty(url: &Url) -> Self {
        Self {
            url: url.to_string(),
            ..Default::default()
        }
    }

    /// Page title
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Page description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Preview image URL
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Source URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether a non-empty description was found
    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.is_empty())
    }
}

/// Resolves [`SiteMetadata`] from parsed documents
#[derive(Debug, Clone, Copy, Default)]
pub struct MetaResolver {
    mode: MatchMode,
}

impl MetaResolver {
    /// Create a resolver with the given matching policy
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    /// Resolve metadata from a parsed document
    #[instrument(skip(self, document, source_url), fields(url = %source_url))]
    pub fn resolve(&self, document: &ParsedDocument, source_url: &Url) -> SiteMetadata {
        let mut metadata = SiteMetadata::empty(source_url);

        let Some(head) = find_element(document, "head") else {
            debug!("Document has no head element");
            return metadata;
        };

        metadata.title = Self::title(head);

        let records = Self::meta_records(head);
        metadata.description =
            first_match(&records, &DESCRIPTION_PATTERNS, self.mode).and_then(non_empty);
        metadata.image = first_match(&records, &IMAGE_PATTERNS, self.mode)
            .and_then(non_empty)
            .map(|image| resolve_image_url(&image, source_url));

        debug!(
            "Resolved metadata: title={:?}, description={:?}, image={:?}",
            metadata.title, metadata.description, metadata.image
        );

        metadata
    }

    /// Parse `markup` and resolve it in one step
    pub fn resolve_markup(&self, markup: &str, source_url: &Url) -> SiteMetadata {
        self.resolve(&ParsedDocument::parse(markup), source_url)
    }

    /// Every `<meta>` element under `head`, in document order
    pub fn meta_records(head: ElementRef<'_>) -> Vec<MetaTagRecord> {
        head.descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "meta")
            .map(|el| MetaTagRecord::from_element(el.value()))
            .collect()
    }

    fn title(head: ElementRef<'_>) -> Option<String> {
        let title = head
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == "title")?;

        let text: &str = title.first_child()?.value().as_text()?;
        non_empty(text)
    }
}

/// Depth-first search for the first element called `name`
fn find_element<'a>(document: &'a ParsedDocument, name: &str) -> Option<ElementRef<'a>> {
    document
        .html()
        .tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == name)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Make an image reference absolute against the page URL.
///
/// Absolute values are returned verbatim. Relative values are joined onto
/// `base`; if that fails the raw value is kept rather than dropped.
pub fn resolve_image_url(image: &str, base: &Url) -> String {
    if image.is_empty() || Url::parse(image).is_ok() {
        return image.to_string();
    }

    match base.join(image) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => image.to_string(),
    }
}
