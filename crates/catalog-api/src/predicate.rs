use crate::error::CatalogError;
use crate::types::CatalogItem;

/// Facet names the panel displays unless the host configures its own set.
pub const DEFAULT_DISPLAY_FACETS: [&str; 4] = ["typography", "color", "border", "dimensions"];

/// Free-text match predicate applied by the filter engine.
///
/// Matching rules are the host's concern; the engine only guarantees order
/// preservation and the empty-query short-circuit. A predicate error excludes
/// the item from the visible set instead of aborting the pass.
pub trait MatchPredicate {
    /// Whether `item` matches the non-empty `query`.
    fn matches(&self, item: &CatalogItem, query: &str) -> Result<bool, CatalogError>;
}

/// Per-item probe deciding whether a filtered-in item renders at all.
///
/// Probes are pure and cheap to evaluate once per update, which lets the
/// rendered count be derived from the visible set without inspecting
/// rendered output.
pub trait FacetProbe {
    /// Whether `item` carries any content this probe knows how to display.
    fn has_displayable_content(&self, item: &CatalogItem) -> Result<bool, CatalogError>;
}

/// Default matcher: normalized substring match over title, id, and keywords.
///
/// Every whitespace-separated query term must appear in at least one of the
/// item's searchable fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordMatcher;

impl KeywordMatcher {
    fn term_matches(item: &CatalogItem, term: &str) -> bool {
        if item.title.to_lowercase().contains(term) || item.id.as_str().to_lowercase().contains(term)
        {
            return true;
        }
        item.keywords
            .iter()
            .any(|keyword| keyword.to_lowercase().contains(term))
    }
}

impl MatchPredicate for KeywordMatcher {
    fn matches(&self, item: &CatalogItem, query: &str) -> Result<bool, CatalogError> {
        let query = query.to_lowercase();
        Ok(query
            .split_whitespace()
            .all(|term| Self::term_matches(item, term)))
    }
}

/// Probe that renders items whose facet list intersects a displayable set.
#[derive(Debug, Clone)]
pub struct FacetDisplayProbe {
    displayable: Vec<String>,
}

impl FacetDisplayProbe {
    /// Build a probe for the provided facet names.
    #[must_use]
    pub fn displaying<I, S>(facets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            displayable: facets.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for FacetDisplayProbe {
    fn default() -> Self {
        Self::displaying(DEFAULT_DISPLAY_FACETS)
    }
}

impl FacetProbe for FacetDisplayProbe {
    fn has_displayable_content(&self, item: &CatalogItem) -> Result<bool, CatalogError> {
        Ok(item
            .facets
            .iter()
            .any(|facet| self.displayable.iter().any(|shown| shown == facet)))
    }
}
