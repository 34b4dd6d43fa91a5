use std::sync::Arc;

use tracing::warn;

use crate::predicate::FacetProbe;
use crate::types::CatalogItem;

/// Per-item render decisions for one visible set, plus the resulting count.
///
/// The rendered count is derived here, from pure probes evaluated once per
/// update, rather than by counting rendered rows after the fact; the
/// announcer depends on it being consistent with the visible set that
/// produced it.
#[derive(Debug, Clone, Default)]
pub struct RenderPlan {
    items: Arc<[CatalogItem]>,
    decisions: Vec<bool>,
    rendered: usize,
}

impl RenderPlan {
    /// Plan for an empty visible set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of visible items, rendered or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the visible set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items that will actually produce a row.
    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.rendered
    }

    /// Iterate over `(item, should_render)` pairs in visible-set order.
    pub fn entries(&self) -> impl Iterator<Item = (&CatalogItem, bool)> {
        self.items
            .iter()
            .zip(self.decisions.iter().copied())
    }

    /// Iterate over the items that will render, in visible-set order.
    pub fn rendered_items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.entries()
            .filter_map(|(item, rendered)| rendered.then_some(item))
    }

    /// Look up the `nth` rendered item, counting suppressed items as absent.
    #[must_use]
    pub fn rendered_item(&self, nth: usize) -> Option<&CatalogItem> {
        self.rendered_items().nth(nth)
    }
}

/// Decide, per visible item, whether it should render.
///
/// An item renders when at least one probe reports displayable content. A
/// probe error counts as "nothing to display" from that probe and is reported
/// to the logging layer; it never aborts the pass. With no probes registered
/// every item renders.
#[must_use]
pub fn plan_rendering(visible: &Arc<[CatalogItem]>, probes: &[Box<dyn FacetProbe>]) -> RenderPlan {
    let mut decisions = Vec::with_capacity(visible.len());
    let mut rendered = 0;
    for item in visible.iter() {
        let should_render = probes.is_empty()
            || probes.iter().any(|probe| {
                match probe.has_displayable_content(item) {
                    Ok(displayable) => displayable,
                    Err(error) => {
                        warn!(item = %item.id, %error, "content probe failed, suppressing item");
                        false
                    }
                }
            });
        if should_render {
            rendered += 1;
        }
        decisions.push(should_render);
    }

    RenderPlan {
        items: Arc::clone(visible),
        decisions,
        rendered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::predicate::FacetDisplayProbe;

    fn styled(id: &str) -> CatalogItem {
        CatalogItem::new(id, id)
            .expect("valid item")
            .with_facets(["typography"])
    }

    fn bare(id: &str) -> CatalogItem {
        CatalogItem::new(id, id).expect("valid item")
    }

    fn default_probes() -> Vec<Box<dyn FacetProbe>> {
        vec![Box::new(FacetDisplayProbe::default())]
    }

    #[test]
    fn facetless_items_are_counted_out() {
        let visible: Arc<[CatalogItem]> =
            vec![styled("core/a"), bare("core/b"), styled("vendor/c")].into();
        let plan = plan_rendering(&visible, &default_probes());

        assert_eq!(plan.len(), 3);
        assert_eq!(plan.rendered_count(), 2);
        let rendered: Vec<&str> = plan.rendered_items().map(|item| item.id.as_str()).collect();
        assert_eq!(rendered, ["core/a", "vendor/c"]);
    }

    #[test]
    fn nth_rendered_item_skips_suppressed_rows() {
        let visible: Arc<[CatalogItem]> =
            vec![bare("core/a"), styled("core/b"), styled("core/c")].into();
        let plan = plan_rendering(&visible, &default_probes());

        assert_eq!(
            plan.rendered_item(1).map(|item| item.id.as_str()),
            Some("core/c")
        );
        assert_eq!(plan.rendered_item(2), None);
    }

    #[test]
    fn no_probes_means_everything_renders() {
        let visible: Arc<[CatalogItem]> = vec![bare("core/a"), bare("core/b")].into();
        let plan = plan_rendering(&visible, &[]);
        assert_eq!(plan.rendered_count(), 2);
    }

    #[test]
    fn failing_probe_suppresses_only_the_failing_item() {
        struct Flaky;
        impl FacetProbe for Flaky {
            fn has_displayable_content(&self, item: &CatalogItem) -> Result<bool, CatalogError> {
                if item.id.as_str() == "core/b" {
                    Err(CatalogError::predicate_failed(item.id.as_str(), "boom"))
                } else {
                    Ok(true)
                }
            }
        }

        let visible: Arc<[CatalogItem]> =
            vec![bare("core/a"), bare("core/b"), bare("core/c")].into();
        let plan = plan_rendering(&visible, &[Box::new(Flaky) as Box<dyn FacetProbe>]);

        assert_eq!(plan.rendered_count(), 2);
        let rendered: Vec<&str> = plan.rendered_items().map(|item| item.id.as_str()).collect();
        assert_eq!(rendered, ["core/a", "core/c"]);
    }

    #[test]
    fn any_probe_reporting_content_renders_the_item() {
        let visible: Arc<[CatalogItem]> = vec![styled("core/a")].into();
        let probes: Vec<Box<dyn FacetProbe>> = vec![
            Box::new(FacetDisplayProbe::displaying(["layout"])),
            Box::new(FacetDisplayProbe::displaying(["typography"])),
        ];
        let plan = plan_rendering(&visible, &probes);
        assert_eq!(plan.rendered_count(), 1);
    }
}
