//! sitemeta - page metadata for link previews
//!
//! Fetches a web page's title, description and preview image. Pages are first
//! fetched with a plain HTTP GET and parsed statically; when that yields no
//! description (typically a page rendered by client-side script), the page is
//! rendered in a headless browser and parsed again.
//!
//! # Architecture
//!
//! ```text
//! caller ──▶ SiteMetaClient ──▶ HttpSource ──▶ MetaResolver ──▶ SiteMetadata
//!                  │                                 ▲
//!                  │ no description                  │
//!                  └──────────▶ BrowserSource ───────┘
//!                               (ChromiumOxide)
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sitemeta::SiteMetaClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SiteMetaClient::new()?;
//!     let meta = client.get_site_meta("https://example.com").await?;
//!
//!     println!("Title: {:?}", meta.title());
//!     println!("Description: {:?}", meta.description());
//!     println!("Image: {:?}", meta.image());
//!     Ok(())
//! }
//! ```
//!
//! # Known limitation
//!
//! By default a `<meta>` tag only matches when its discriminating attribute is
//! written first and its value second, e.g.
//! `<meta name="description" content="...">`. Select
//! [`MatchMode::AttributeSet`] through [`ExtractionConfig`] to match on any
//! attribute order instead.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod browser;
pub mod client;
pub mod config;
pub mod document;
pub mod error;
pub mod extraction;
pub mod fetch;
pub mod validation;

// Re-exports for convenience
pub use browser::BrowserConfig;
pub use client::{get_site_meta, SiteMetaClient};
pub use config::ExtractionConfig;
pub use document::ParsedDocument;
pub use error::{Error, FetchError, RenderError, Result};
pub use extraction::{MatchMode, MetaResolver, MetaTagRecord, SiteMetadata};
pub use fetch::{BrowserSource, HttpSource, PageSource};
pub use validation::UrlValidator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
