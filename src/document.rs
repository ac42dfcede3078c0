//! Parsed HTML documents
//!
//! A [`ParsedDocument`] lives for exactly one resolution pass. The underlying
//! `scraper` tree is not `Send`, so callers parse and resolve without awaiting
//! in between.

use scraper::Html;

/// A DOM tree built from fetched or rendered markup
#[derive(Debug)]
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    /// Parse a full HTML document.
    ///
    /// The HTML5 tree builder always synthesizes `html`, `head` and `body`.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Parse a fragment. No `head` element is synthesized.
    pub fn parse_fragment(markup: &str) -> Self {
        Self {
            html: Html::parse_fragment(markup),
        }
    }

    /// Borrow the underlying tree
    pub fn html(&self) -> &Html {
        &self.html
    }
}
