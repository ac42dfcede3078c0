//! `<meta>` element records and tag matching
//!
//! Each `<meta>` element becomes a [`MetaTagRecord`]: its attributes as an
//! ordered list of key/value pairs, in source order. Keeping the order is what
//! lets the default [`MatchMode::Positional`] policy look at "the first
//! attribute" and "the second attribute" rather than at named keys.

use scraper::node::Element;

/// How a [`MetaTagRecord`] is tested against a [`TagPattern`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The discriminator must be the first attribute; the value is the second
    /// attribute, whatever its key. Tags written as
    /// `<meta content="..." name="description">` are not matched.
    #[default]
    Positional,
    /// The discriminator may be any attribute; the value is the `content`
    /// attribute.
    AttributeSet,
}

/// A discriminating attribute such as `property="og:image"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagPattern {
    /// Attribute key
    pub key: &'static str,
    /// Attribute value
    pub value: &'static str,
}

impl TagPattern {
    /// Create a pattern
    pub const fn new(key: &'static str, value: &'static str) -> Self {
        Self { key, value }
    }
}

/// Description tags, highest priority first
pub const DESCRIPTION_PATTERNS: [TagPattern; 3] = [
    TagPattern::new("name", "description"),
    TagPattern::new("property", "og:description"),
    TagPattern::new("name", "twitter:description"),
];

/// Image tags, highest priority first
pub const IMAGE_PATTERNS: [TagPattern; 2] = [
    TagPattern::new("property", "og:image"),
    TagPattern::new("name", "twitter:image"),
];

/// Ordered attributes of one `<meta>` element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTagRecord {
    attributes: Vec<(String, String)>,
}

impl MetaTagRecord {
    /// Build a record from attribute pairs in source order
    pub fn new<K, V, I>(attributes: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Build a record from a parsed element
    pub fn from_element(element: &Element) -> Self {
        Self::new(element.attrs())
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the element had no attributes
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// The attribute in position zero
    pub fn primary(&self) -> Option<(&str, &str)> {
        self.position(0)
    }

    /// The attribute in position one
    pub fn secondary(&self) -> Option<(&str, &str)> {
        self.position(1)
    }

    /// Look up an attribute by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The value this record carries for `pattern`, if it matches
    pub fn value_for(&self, pattern: &TagPattern, mode: MatchMode) -> Option<&str> {
        match mode {
            MatchMode::Positional => {
                let (key, value) = self.primary()?;
                let (_, carried) = self.secondary()?;
                (key == pattern.key && value == pattern.value).then_some(carried)
            }
            MatchMode::AttributeSet => {
                let discriminated = self
                    .attributes
                    .iter()
                    .any(|(k, v)| k == pattern.key && v == pattern.value);
                if discriminated {
                    self.get("content")
                } else {
                    None
                }
            }
        }
    }

    fn position(&self, index: usize) -> Option<(&str, &str)> {
        self.attributes
            .get(index)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Scan `records` in document order and return the value of the first record
/// matching any of `patterns`.
///
/// Patterns are tried in priority order per record; a later record never wins
/// over an earlier one, whichever pattern it would match. Records with fewer
/// than two attributes are skipped.
pub fn first_match<'a>(
    records: &'a [MetaTagRecord],
    patterns: &[TagPattern],
    mode: MatchMode,
) -> Option<&'a str> {
    records
        .iter()
        .filter(|record| record.len() >= 2)
        .find_map(|record| {
            patterns
                .iter()
                .find_map(|pattern| record.value_for(pattern, mode))
        })
}
