//! Position math shared by every page: clamping, query parsing, slide
//! wrapping, and the pagination window.
//!
//! Everything here is a pure function over integers. Nothing reads the
//! request or knows about HTML; the [`location`](crate::location) adapter
//! hands in raw parameter values and the page views consume the results.
//!
//! ## Page Window
//!
//! [`build_window`] decides which page numbers a pagination bar shows. Page 1
//! and the last page are always present, the current page is surrounded by
//! `radius` neighbours, and an ellipsis stands in for each skipped run:
//!
//! ```text
//! current=1 total=9  →  1 2 … 9
//! current=5 total=9  →  1 … 4 5 6 … 9
//! current=9 total=9  →  1 … 8 9
//! ```
//!
//! The ellipsis thresholds are evaluated against the current page alone
//! (`current - radius > 2`, `current + radius < total - 1`). For small totals
//! this shows an ellipsis standing in for a single page (`1 … 3 4 5` at
//! current=4, total=5). That layout is kept as-is.

use serde::{Serialize, Serializer};
use std::fmt;

/// Radius used by the pagination bar unless configured otherwise.
pub const DEFAULT_WINDOW_RADIUS: i64 = 1;

/// Text shown for a skipped run of pages.
pub const ELLIPSIS: &str = "...";

/// Constrain `requested` to `[min, max]`, snapping to the nearest bound.
///
/// Callers guarantee `min <= max`. When they don't, the result is `max`
/// rather than a panic.
pub fn clamp(requested: i64, min: i64, max: i64) -> i64 {
    requested.max(min).min(max)
}

/// Parse a raw query value into a 1-based position.
///
/// Missing, blank, non-integer, and zero values all fall back to `1`.
/// Negative values pass through so that clamping can snap them.
pub fn parse_position(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|&n| n != 0)
        .unwrap_or(1)
}

/// Parse and clamp a raw query value into `[1, total]`.
pub fn resolve_position(raw: Option<&str>, total: i64) -> i64 {
    clamp(parse_position(raw), 1, total)
}

/// Slide after `current`, wrapping from the last slide back to the first.
pub fn next_slide(current: i64, total: i64) -> i64 {
    if current >= total { 1 } else { current + 1 }
}

/// Slide before `current`, wrapping from the first slide to the last.
pub fn previous_slide(current: i64, total: i64) -> i64 {
    if current <= 1 { total } else { current - 1 }
}

/// One displayable unit of a pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(i64),
    Ellipsis,
}

impl PageMarker {
    pub fn page(self) -> Option<i64> {
        match self {
            PageMarker::Page(n) => Some(n),
            PageMarker::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageMarker::Page(n) => write!(f, "{n}"),
            PageMarker::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

/// Pages serialize as bare numbers and the ellipsis as `"..."`, so a window
/// reads as `[1, "...", 4, 5, 6, "...", 9]` in JSON.
impl Serialize for PageMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageMarker::Page(n) => serializer.serialize_i64(*n),
            PageMarker::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

/// Build the sequence of markers for a pagination bar.
///
/// Returns an empty sequence when `total <= 0`. `current` outside
/// `[1, total]` produces a degenerate but well-formed window.
pub fn build_window(current: i64, total: i64, radius: i64) -> Vec<PageMarker> {
    if total <= 0 {
        return Vec::new();
    }

    let low = current.saturating_sub(radius);
    let high = current.saturating_add(radius);

    let mut markers = vec![PageMarker::Page(1)];

    if low > 2 {
        markers.push(PageMarker::Ellipsis);
    }

    // Bounded to [2, total - 1] so neither end page is emitted twice.
    let start = low.max(2);
    let end = high.min(total - 1);
    markers.extend((start..=end).map(PageMarker::Page));

    if high < total - 1 {
        markers.push(PageMarker::Ellipsis);
    }

    if total > 1 {
        markers.push(PageMarker::Page(total));
    }

    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Ellipsis, Page};

    fn window(current: i64, total: i64) -> Vec<PageMarker> {
        build_window(current, total, DEFAULT_WINDOW_RADIUS)
    }

    fn numbers(markers: &[PageMarker]) -> Vec<i64> {
        markers.iter().filter_map(|m| m.page()).collect()
    }

    // =========================================================================
    // clamp / parse_position
    // =========================================================================

    #[test]
    fn clamp_snaps_to_bounds() {
        assert_eq!(clamp(0, 1, 5), 1);
        assert_eq!(clamp(99, 1, 5), 5);
        assert_eq!(clamp(3, 1, 5), 3);
    }

    #[test]
    fn clamp_keeps_values_on_the_bounds() {
        assert_eq!(clamp(1, 1, 5), 1);
        assert_eq!(clamp(5, 1, 5), 5);
        assert_eq!(clamp(7, 7, 7), 7);
    }

    #[test]
    fn clamp_result_always_in_range() {
        for min in -3..=3 {
            for max in min..=min + 4 {
                for requested in -10..=10 {
                    let got = clamp(requested, min, max);
                    assert!((min..=max).contains(&got), "{requested} in [{min},{max}] → {got}");
                    if (min..=max).contains(&requested) {
                        assert_eq!(got, requested);
                    }
                }
            }
        }
    }

    #[test]
    fn clamp_inverted_bounds_does_not_panic() {
        assert_eq!(clamp(3, 5, 1), 1);
    }

    #[test]
    fn parse_position_defaults_to_one() {
        assert_eq!(parse_position(None), 1);
        assert_eq!(parse_position(Some("")), 1);
        assert_eq!(parse_position(Some("abc")), 1);
        assert_eq!(parse_position(Some("2.5")), 1);
        assert_eq!(parse_position(Some("0")), 1);
    }

    #[test]
    fn parse_position_reads_integers() {
        assert_eq!(parse_position(Some("4")), 4);
        assert_eq!(parse_position(Some(" 12 ")), 12);
        assert_eq!(parse_position(Some("-3")), -3);
    }

    #[test]
    fn resolve_position_clamps_parsed_value() {
        assert_eq!(resolve_position(Some("99"), 5), 5);
        assert_eq!(resolve_position(Some("-3"), 5), 1);
        assert_eq!(resolve_position(Some("junk"), 5), 1);
        assert_eq!(resolve_position(Some("3"), 5), 3);
    }

    // =========================================================================
    // Slide wrapping
    // =========================================================================

    #[test]
    fn next_slide_wraps_to_first() {
        assert_eq!(next_slide(2, 5), 3);
        assert_eq!(next_slide(5, 5), 1);
    }

    #[test]
    fn previous_slide_wraps_to_last() {
        assert_eq!(previous_slide(3, 5), 2);
        assert_eq!(previous_slide(1, 5), 5);
    }

    #[test]
    fn single_slide_wraps_onto_itself() {
        assert_eq!(next_slide(1, 1), 1);
        assert_eq!(previous_slide(1, 1), 1);
    }

    // =========================================================================
    // build_window: concrete layouts
    // =========================================================================

    #[test]
    fn window_first_page_of_nine() {
        assert_eq!(window(1, 9), vec![Page(1), Page(2), Ellipsis, Page(9)]);
    }

    #[test]
    fn window_middle_page_of_nine() {
        assert_eq!(
            window(5, 9),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(9)]
        );
    }

    #[test]
    fn window_last_page_of_nine() {
        assert_eq!(window(9, 9), vec![Page(1), Ellipsis, Page(8), Page(9)]);
    }

    #[test]
    fn window_small_totals() {
        assert_eq!(window(1, 1), vec![Page(1)]);
        assert_eq!(window(1, 2), vec![Page(1), Page(2)]);
        assert_eq!(window(2, 3), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn window_ellipsis_standing_in_for_one_page_is_kept() {
        assert_eq!(
            window(4, 5),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn window_empty_for_non_positive_total() {
        assert!(window(1, 0).is_empty());
        assert!(window(1, -4).is_empty());
    }

    #[test]
    fn window_tolerates_out_of_range_current() {
        assert_eq!(window(20, 9), vec![Page(1), Ellipsis, Page(9)]);
        assert_eq!(window(-5, 9), vec![Page(1), Ellipsis, Page(9)]);
        assert_eq!(window(i64::MAX, i64::MAX).first(), Some(&Page(1)));
        assert_eq!(window(i64::MIN, 3), vec![Page(1), Ellipsis, Page(3)]);
    }

    #[test]
    fn wider_radius_widens_middle() {
        assert_eq!(
            build_window(6, 12, 2),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Page(8),
                Ellipsis,
                Page(12)
            ]
        );
    }

    // =========================================================================
    // build_window: properties over small inputs
    // =========================================================================

    #[test]
    fn window_starts_with_one_and_ends_with_total() {
        for total in 1..=30 {
            for current in 1..=total {
                let w = window(current, total);
                assert_eq!(w.first(), Some(&Page(1)));
                if total > 1 {
                    assert_eq!(w.last(), Some(&Page(total)));
                }
            }
        }
    }

    #[test]
    fn window_numbers_strictly_ascending() {
        for total in 1..=30 {
            for current in 1..=total {
                let nums = numbers(&window(current, total));
                assert!(
                    nums.windows(2).all(|pair| pair[0] < pair[1]),
                    "current={current} total={total}: {nums:?}"
                );
            }
        }
    }

    #[test]
    fn window_ellipsis_placement_follows_thresholds() {
        for total in 1..=30 {
            for current in 1..=total {
                let w = window(current, total);
                let current_idx = w.iter().position(|m| *m == Page(current));
                let Some(current_idx) = current_idx else {
                    panic!("current page {current} missing from {w:?}");
                };
                let before = w[..current_idx].contains(&Ellipsis);
                let after = w[current_idx..].contains(&Ellipsis);
                assert_eq!(before, current > 3, "current={current} total={total}");
                assert_eq!(after, current < total - 2, "current={current} total={total}");
            }
        }
    }

    #[test]
    fn window_middle_never_exceeds_three_pages() {
        for total in 1..=30 {
            for current in 1..=total {
                let middle: Vec<i64> = numbers(&window(current, total))
                    .into_iter()
                    .filter(|&n| n != 1 && n != total)
                    .collect();
                assert!(middle.len() <= 3);
                assert!(middle.iter().all(|n| (n - current).abs() <= 1));
            }
        }
    }

    #[test]
    fn markers_serialize_as_numbers_and_dots() {
        let json = serde_json::to_string(&window(5, 9)).unwrap();
        assert_eq!(json, r#"[1,"...",4,5,6,"...",9]"#);
    }

    #[test]
    fn markers_display() {
        assert_eq!(Page(7).to_string(), "7");
        assert_eq!(Ellipsis.to_string(), "...");
    }
}
