//! Metadata extraction module
//!
//! Resolution of title, description and preview image from a parsed
//! document's head.

pub mod meta_tag;
pub mod metadata;

pub use meta_tag::{MatchMode, MetaTagRecord, TagPattern, DESCRIPTION_PATTERNS, IMAGE_PATTERNS};
pub use metadata::{resolve_image_url, MetaResolver, SiteMetadata};
