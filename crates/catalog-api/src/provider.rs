use std::sync::Arc;

use crate::error::CatalogError;
use crate::types::CatalogItem;

/// Source of catalog snapshots consumed by the list pipeline.
///
/// The pipeline never reads the catalog from ambient state; callers inject a
/// provider and the sorter memoizes on the identity of the returned `Arc`,
/// so providers should return the same allocation until their data changes.
pub trait CatalogProvider {
    /// Return a read-only snapshot of the catalog.
    fn catalog(&self) -> Result<Arc<[CatalogItem]>, CatalogError>;
}

/// Provider backed by a fixed in-memory snapshot.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    items: Arc<[CatalogItem]>,
}

impl StaticCatalog {
    /// Wrap the provided items in a shareable snapshot.
    #[must_use]
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl CatalogProvider for StaticCatalog {
    fn catalog(&self) -> Result<Arc<[CatalogItem]>, CatalogError> {
        Ok(Arc::clone(&self.items))
    }
}
