pub mod error;
pub mod filter;
pub mod predicate;
pub mod provider;
pub mod sort;
pub mod types;
pub mod visibility;

pub use error::CatalogError;
pub use filter::{FilterCache, filter_catalog};
pub use predicate::{DEFAULT_DISPLAY_FACETS, FacetDisplayProbe, FacetProbe, KeywordMatcher, MatchPredicate};
pub use provider::{CatalogProvider, StaticCatalog};
pub use sort::{PRIMARY_NAMESPACE, SortCache, is_primary_namespace, sort_by_priority};
pub use types::{CatalogItem, ItemId};
pub use visibility::{RenderPlan, plan_rendering};
