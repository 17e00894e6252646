//! CLI output formatting for the server and the inspection commands.
//!
//! # Output Format
//!
//! ## Serve
//!
//! ```text
//! Navigation Playground
//!     Listening on http://127.0.0.1:3000
//!
//! Routes
//!     /                 Home
//!     /pagination       Pagination Bar (42 items, 5 per page)
//!     /infinite-scroll  Infinite Scroll (30 items, 6 per page)
//!     /carousel         Carousel (5 slides)
//!
//! GET /pagination?page=3 → 200 (0.3ms)
//! GET /nope → 404 (0.1ms)
//! ```
//!
//! ## Window
//!
//! ```text
//! 1 … 4 [5] 6 … 9
//! ```
//!
//! # Architecture
//!
//! Each report has a `format_*` function (returns `Vec<String>` or `String`)
//! for testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::config::SiteConfig;
use crate::mock::SLIDES;
use crate::navigation::PageMarker;
use crate::types::Route;
use std::time::Duration;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// One-line summary of what a route serves under `config`.
fn route_detail(route: Route, config: &SiteConfig) -> String {
    match route {
        Route::Home => route.title().to_string(),
        Route::Pagination => format!(
            "{} ({} items, {} per page)",
            route.title(),
            config.pagination.total_items,
            config.pagination.per_page
        ),
        Route::InfiniteScroll => format!(
            "{} ({} items, {} per page)",
            route.title(),
            config.infinite_scroll.total_items,
            config.infinite_scroll.per_page
        ),
        Route::Carousel => format!("{} ({} slides)", route.title(), SLIDES.len()),
    }
}

// ============================================================================
// Serve
// ============================================================================

/// Startup banner: site title, listening address, and the route table.
pub fn format_serve_banner(address: &str, config: &SiteConfig) -> Vec<String> {
    let mut lines = vec![
        config.title.clone(),
        format!("{}Listening on http://{}", indent(1), address),
        String::new(),
        "Routes".to_string(),
    ];

    let width = Route::ALL
        .iter()
        .map(|r| r.path().len())
        .max()
        .unwrap_or_default();
    for route in Route::ALL {
        lines.push(format!(
            "{}{:<width$}  {}",
            indent(1),
            route.path(),
            route_detail(route, config)
        ));
    }
    lines.push(String::new());
    lines
}

pub fn print_serve_banner(address: &str, config: &SiteConfig) {
    for line in format_serve_banner(address, config) {
        println!("{}", line);
    }
}

/// One access-log line: `GET /carousel?slide=2 → 200 (0.4ms)`.
pub fn format_request(method: &str, target: &str, status: u16, elapsed: Duration) -> String {
    format!(
        "{} {} → {} ({:.1}ms)",
        method,
        target,
        status,
        elapsed.as_secs_f64() * 1000.0
    )
}

pub fn print_request(method: &str, target: &str, status: u16, elapsed: Duration) {
    println!("{}", format_request(method, target, status, elapsed));
}

// ============================================================================
// Window
// ============================================================================

/// Markers as a single line, ellipses as `…` and the current page bracketed.
pub fn format_window(markers: &[PageMarker], current: i64) -> String {
    markers
        .iter()
        .map(|marker| match marker {
            PageMarker::Page(n) if *n == current => format!("[{n}]"),
            PageMarker::Page(n) => n.to_string(),
            PageMarker::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_window(markers: &[PageMarker], current: i64) {
    println!("{}", format_window(markers, current));
}
