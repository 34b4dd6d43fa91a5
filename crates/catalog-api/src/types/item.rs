use std::fmt;

use crate::error::CatalogError;

/// Namespaced identifier for a catalog item, e.g. `core/heading`.
///
/// The namespace prefix determines whether an item belongs to the reserved
/// primary class that is prioritized in display order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId {
    raw: String,
    separator: usize,
}

impl ItemId {
    /// Parse a `namespace/name` identifier.
    pub fn new(raw: impl Into<String>) -> Result<Self, CatalogError> {
        let raw = raw.into();
        match raw.find('/') {
            Some(separator) if separator > 0 && separator + 1 < raw.len() => {
                Ok(Self { raw, separator })
            }
            _ => Err(CatalogError::MalformedId { id: raw }),
        }
    }

    /// The namespace prefix, without the separator.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.raw[..self.separator]
    }

    /// The item name following the namespace.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.raw[self.separator + 1..]
    }

    /// The full `namespace/name` form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl TryFrom<String> for ItemId {
    type Error = CatalogError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.raw
    }
}

/// A single entry of the catalog shown in the list panel.
///
/// Items are immutable once obtained from a [`CatalogProvider`]; the list
/// pipeline shares them through `Arc<[CatalogItem]>` snapshots instead of
/// copying per stage.
///
/// [`CatalogProvider`]: crate::provider::CatalogProvider
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CatalogItem {
    /// Unique namespaced identifier.
    pub id: ItemId,
    /// Human-readable title rendered next to the icon.
    pub title: String,
    /// Short glyph rendered in front of the title.
    #[serde(default)]
    pub icon: String,
    /// Additional search terms beyond title and identifier.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Names of the displayable content facets this item carries.
    ///
    /// An item with no facet intersecting the panel's displayable set is
    /// filtered-in by text search but suppressed from rendering.
    #[serde(default)]
    pub facets: Vec<String>,
}

impl CatalogItem {
    /// Create an item with the provided identifier and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Result<Self, CatalogError> {
        Ok(Self {
            id: ItemId::new(id)?,
            title: title.into(),
            icon: String::new(),
            keywords: Vec::new(),
            facets: Vec::new(),
        })
    }

    /// Attach an icon glyph.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Attach search keywords.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Attach displayable content facets.
    #[must_use]
    pub fn with_facets<I, S>(mut self, facets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.facets = facets.into_iter().map(Into::into).collect();
        self
    }
}
