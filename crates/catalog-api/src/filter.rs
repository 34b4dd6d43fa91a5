use std::sync::Arc;

use tracing::warn;

use crate::predicate::MatchPredicate;
use crate::types::CatalogItem;

/// Apply the free-text `query` to an already sorted catalog.
///
/// An empty query returns `sorted` itself (pointer-equal), so downstream
/// memoization keyed on identity keeps working. Otherwise the result is the
/// order-preserving subsequence for which the matcher holds; a matcher error
/// excludes that item and is reported to the logging layer.
#[must_use]
pub fn filter_catalog(
    sorted: &Arc<[CatalogItem]>,
    query: &str,
    matcher: &dyn MatchPredicate,
) -> Arc<[CatalogItem]> {
    if query.is_empty() {
        return Arc::clone(sorted);
    }

    sorted
        .iter()
        .filter(|item| match matcher.matches(item, query) {
            Ok(hit) => hit,
            Err(error) => {
                warn!(item = %item.id, %error, "match predicate failed, excluding item");
                false
            }
        })
        .cloned()
        .collect()
}

/// Memoized filter keyed on `(sorted identity, query)`.
///
/// The matcher is fixed per cache instance; swapping matchers means building
/// a fresh cache.
pub struct FilterCache {
    matcher: Arc<dyn MatchPredicate>,
    key: Option<(usize, usize, String)>,
    visible: Option<Arc<[CatalogItem]>>,
}

fn snapshot_key(sorted: &Arc<[CatalogItem]>) -> (usize, usize) {
    (Arc::as_ptr(sorted).cast::<CatalogItem>() as usize, sorted.len())
}

impl FilterCache {
    /// Create a cache around the provided matcher.
    #[must_use]
    pub fn new(matcher: Arc<dyn MatchPredicate>) -> Self {
        Self {
            matcher,
            key: None,
            visible: None,
        }
    }

    /// Return the visible set, re-filtering only when the sorted snapshot or
    /// the query changed since the previous call.
    pub fn get_or_filter(&mut self, sorted: &Arc<[CatalogItem]>, query: &str) -> Arc<[CatalogItem]> {
        let (ptr, len) = snapshot_key(sorted);
        let stale = match &self.key {
            Some((cached_ptr, cached_len, cached_query)) => {
                (*cached_ptr, *cached_len) != (ptr, len) || cached_query != query
            }
            None => true,
        };
        if stale {
            self.visible = Some(filter_catalog(sorted, query, self.matcher.as_ref()));
            self.key = Some((ptr, len, query.to_string()));
        }
        self.visible
            .clone()
            .unwrap_or_else(|| Arc::clone(sorted))
    }
}
