//! Catalog sources for the panel: a JSON file or the builtin sample.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use catalist_catalog_api::CatalogItem;
use tracing::info;

/// Load catalog items from a JSON array file.
pub(crate) fn load_catalog(path: &Path) -> Result<Vec<CatalogItem>> {
	let payload = fs::read_to_string(path)
		.with_context(|| format!("reading catalog file {}", path.display()))?;
	let items: Vec<CatalogItem> = serde_json::from_str(&payload)
		.with_context(|| format!("parsing catalog file {}", path.display()))?;
	info!(count = items.len(), path = %path.display(), "loaded catalog");
	Ok(items)
}

/// Builtin demonstration catalog used when no file is configured.
///
/// Deliberately registered out of priority order: vendor items first, so
/// the sorter has real work to do.
pub(crate) fn sample_catalog() -> Vec<CatalogItem> {
	fn item(id: &'static str, title: &'static str, icon: &'static str) -> CatalogItem {
		match CatalogItem::new(id, title) {
			Ok(item) => item.with_icon(icon),
			// Ids here are literals; a typo is a programming error.
			Err(error) => unreachable!("builtin catalog id invalid: {error}"),
		}
	}

	vec![
		item("acme/slideshow", "Slideshow", "▸").with_facets(["color", "dimensions"]),
		item("acme/testimonial", "Testimonial", "“").with_facets(["typography", "color"]),
		item("core/paragraph", "Paragraph", "¶")
			.with_keywords(["text", "body"])
			.with_facets(["typography", "color", "dimensions"]),
		item("core/heading", "Heading", "H")
			.with_keywords(["title", "subtitle"])
			.with_facets(["typography", "color"]),
		item("core/image", "Image", "◻")
			.with_keywords(["photo", "picture"])
			.with_facets(["border", "dimensions"]),
		item("core/separator", "Separator", "—").with_facets(["color"]),
		item("core/shortcode", "Shortcode", "["),
		item("core/html", "Custom HTML", "<"),
		item("core/table", "Table", "#")
			.with_keywords(["grid", "cells"])
			.with_facets(["typography", "color", "border"]),
	]
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn json_catalog_round_trips() {
		let mut file = tempfile::NamedTempFile::new().expect("temp catalog");
		write!(
			file,
			r#"[
				{{"id": "core/heading", "title": "Heading", "facets": ["typography"]}},
				{{"id": "acme/widget", "title": "Widget", "icon": "*", "keywords": ["gadget"]}}
			]"#
		)
		.expect("write catalog");

		let items = load_catalog(file.path()).expect("catalog loads");
		assert_eq!(items.len(), 2);
		assert_eq!(items[0].id.as_str(), "core/heading");
		assert_eq!(items[1].keywords, ["gadget"]);
	}

	#[test]
	fn malformed_ids_fail_loading() {
		let mut file = tempfile::NamedTempFile::new().expect("temp catalog");
		write!(file, r#"[{{"id": "not-namespaced", "title": "Broken"}}]"#).expect("write catalog");

		let error = load_catalog(file.path()).expect_err("malformed id must fail");
		assert!(error.to_string().contains("parsing catalog file"));
	}

	#[test]
	fn missing_file_reports_the_path() {
		let error = load_catalog(Path::new("/nonexistent/items.json")).expect_err("must fail");
		assert!(error.to_string().contains("/nonexistent/items.json"));
	}

	#[test]
	fn sample_catalog_mixes_namespaces_and_facetless_items() {
		let items = sample_catalog();
		assert!(items.iter().any(|item| item.id.namespace() != "core"));
		assert!(
			items.iter().any(|item| item.facets.is_empty()),
			"sample should exercise visibility suppression"
		);
	}
}
