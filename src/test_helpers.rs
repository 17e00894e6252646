//! Shared test utilities for the playground test suite.
//!
//! Provides extractors over page models and small assertions over rendered
//! HTML, so tests can say what they expect without string-slicing markup.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let html = render_target("/pagination?page=5");
//! assert_contains_all(&html, &["Page 5 of 9", "Article 21"]);
//! assert_eq!(count_occurrences(&html, "class=\"ellipsis\""), 2);
//! ```

use crate::config::SiteConfig;
use crate::location::Location;
use crate::navigation::PageMarker;
use crate::render;
use crate::types::Item;

// =========================================================================
// Model extractors
// =========================================================================

/// Ids of a list of items, in order.
pub fn item_ids(items: &[Item]) -> Vec<i64> {
    items.iter().map(|i| i.id).collect()
}

/// Space-separated markers, e.g. `"1 ... 4 5 6 ... 9"`.
pub fn marker_labels(markers: &[PageMarker]) -> String {
    markers
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

// =========================================================================
// Rendering shortcuts
// =========================================================================

/// Render a request target with the stock config. Panics on unknown routes.
pub fn render_target(target: &str) -> String {
    render_target_with(&SiteConfig::default(), target)
}

/// Render a request target with a custom config. Panics on unknown routes.
pub fn render_target_with(config: &SiteConfig, target: &str) -> String {
    let location = Location::parse(target);
    render::render_location(config, &location)
        .unwrap_or_else(|| panic!("no page for target '{target}'"))
        .into_string()
}

// =========================================================================
// HTML assertions
// =========================================================================

/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Assert every needle appears in `html`, listing the missing ones on failure.
pub fn assert_contains_all(html: &str, needles: &[&str]) {
    let missing: Vec<&str> = needles
        .iter()
        .copied()
        .filter(|n| !html.contains(n))
        .collect();
    assert!(missing.is_empty(), "missing from HTML: {missing:?}");
}
