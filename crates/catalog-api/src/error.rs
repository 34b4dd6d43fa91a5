use thiserror::Error;

/// Errors surfaced by catalog providers and predicates.
///
/// None of these abort the list pipeline: a failing predicate excludes the
/// offending item and the failure is reported to the logging layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// An item identifier did not follow the `namespace/name` form.
    #[error("item id '{id}' is not a namespaced 'ns/name' identifier")]
    MalformedId { id: String },

    /// A match or content predicate failed while inspecting an item.
    #[error("predicate failed for item '{id}': {message}")]
    PredicateFailed { id: String, message: String },

    /// The catalog source could not produce a snapshot.
    #[error("catalog unavailable: {message}")]
    Unavailable { message: String },
}

impl CatalogError {
    /// Build a [`CatalogError::PredicateFailed`] for the given item.
    pub fn predicate_failed(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PredicateFailed {
            id: id.into(),
            message: message.into(),
        }
    }
}
