use std::sync::Arc;

use crate::types::CatalogItem;

/// Reserved namespace whose items are prioritized in display order.
pub const PRIMARY_NAMESPACE: &str = "core";

/// Stable priority partition of the catalog.
///
/// Items for which `is_primary` holds come first, followed by everything
/// else; relative order within each class equals the input order. The input
/// may arrive in any order (third-party items often register before the
/// built-in ones), so no pre-existing ordering is assumed.
#[must_use]
pub fn sort_by_priority<F>(items: &[CatalogItem], is_primary: F) -> Arc<[CatalogItem]>
where
    F: Fn(&CatalogItem) -> bool,
{
    let mut primary = Vec::with_capacity(items.len());
    let mut rest = Vec::new();
    for item in items {
        if is_primary(item) {
            primary.push(item.clone());
        } else {
            rest.push(item.clone());
        }
    }
    primary.extend(rest);
    primary.into()
}

/// Classification used when the host does not supply its own: the item's
/// namespace equals [`PRIMARY_NAMESPACE`].
#[must_use]
pub fn is_primary_namespace(item: &CatalogItem) -> bool {
    item.id.namespace() == PRIMARY_NAMESPACE
}

/// Memoized sorter keyed on catalog snapshot identity.
///
/// Sorting is O(n) but still per-item cloning work; the cache re-runs it only
/// when the provider hands out a different `Arc`, not on every UI update.
#[derive(Default)]
pub struct SortCache {
    key: Option<(usize, usize)>,
    sorted: Option<Arc<[CatalogItem]>>,
}

fn snapshot_key(catalog: &Arc<[CatalogItem]>) -> (usize, usize) {
    (Arc::as_ptr(catalog).cast::<CatalogItem>() as usize, catalog.len())
}

impl SortCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sorted catalog, re-sorting only when `catalog` identity
    /// changed since the previous call.
    pub fn get_or_sort<F>(&mut self, catalog: &Arc<[CatalogItem]>, is_primary: F) -> Arc<[CatalogItem]>
    where
        F: Fn(&CatalogItem) -> bool,
    {
        let key = snapshot_key(catalog);
        if self.key != Some(key) {
            self.sorted = Some(sort_by_priority(catalog, is_primary));
            self.key = Some(key);
        }
        self.sorted
            .clone()
            .unwrap_or_else(|| Arc::clone(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> CatalogItem {
        CatalogItem::new(id, id).expect("valid item")
    }

    fn ids(items: &[CatalogItem]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn primary_items_come_first_in_input_order() {
        let catalog = vec![
            item("vendor/b"),
            item("core/a"),
            item("vendor/c"),
            item("core/d"),
        ];

        let sorted = sort_by_priority(&catalog, is_primary_namespace);
        assert_eq!(ids(&sorted), ["core/a", "core/d", "vendor/b", "vendor/c"]);
    }

    #[test]
    fn already_partitioned_input_is_unchanged() {
        let catalog = vec![item("core/a"), item("core/b"), item("vendor/c")];
        let sorted = sort_by_priority(&catalog, is_primary_namespace);
        assert_eq!(ids(&sorted), ["core/a", "core/b", "vendor/c"]);
    }

    #[test]
    fn custom_classification_is_honored() {
        let catalog = vec![item("core/a"), item("vendor/b")];
        let sorted = sort_by_priority(&catalog, |entry| entry.id.namespace() == "vendor");
        assert_eq!(ids(&sorted), ["vendor/b", "core/a"]);
    }

    #[test]
    fn cache_reuses_the_result_for_the_same_snapshot() {
        let catalog: Arc<[CatalogItem]> = vec![item("vendor/b"), item("core/a")].into();
        let mut cache = SortCache::new();

        let first = cache.get_or_sort(&catalog, is_primary_namespace);
        let second = cache.get_or_sort(&catalog, is_primary_namespace);
        assert!(
            Arc::ptr_eq(&first, &second),
            "unchanged snapshot should not be re-sorted"
        );
    }

    #[test]
    fn cache_resorts_when_the_snapshot_changes() {
        let mut cache = SortCache::new();
        let first_catalog: Arc<[CatalogItem]> = vec![item("vendor/b"), item("core/a")].into();
        let first = cache.get_or_sort(&first_catalog, is_primary_namespace);
        assert_eq!(ids(&first), ["core/a", "vendor/b"]);

        let second_catalog: Arc<[CatalogItem]> = vec![item("vendor/z"), item("core/y")].into();
        let second = cache.get_or_sort(&second_catalog, is_primary_namespace);
        assert_eq!(ids(&second), ["core/y", "vendor/z"]);
    }
}
