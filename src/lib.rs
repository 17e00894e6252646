//! # Navigation Playground
//!
//! A tiny server-rendered site demonstrating three navigation patterns:
//! numbered pagination, infinite scroll, and an image carousel. Every page
//! keeps its state in the URL query string (`?page=N`, `?slide=N`), so a
//! reload, a shared link, or a bookmark always lands on the same view.
//!
//! # Architecture: URL In, HTML Out
//!
//! Each request flows through the same pipeline of pure functions:
//!
//! ```text
//! 1. Location   "/pagination?page=7"  →  path + query parameters
//! 2. Pages      location + config     →  PaginationView { current_page: 7, ... }
//! 3. Render     view                  →  maud Markup
//! ```
//!
//! Nothing is stored between requests. The HTTP server in [`server`] is a thin
//! shell around this pipeline, and the `render` CLI command runs it without a
//! socket, which is how most of the behaviour is tested.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`navigation`] | Index clamping, query parsing, slide wrapping, and the page window/ellipsis builder |
//! | [`mock`] | Deterministic synthetic articles, posts, and the fixed slide table |
//! | [`location`] | The only code that reads or writes query strings |
//! | [`pages`] | Per-request view models for each demo page |
//! | [`render`] | HTML for each view using Maud, with the embedded stylesheet and widget script |
//! | [`server`] | Thread-per-connection HTTP/1.1 server |
//! | [`config`] | `playground.toml` loading, validation, and merging over stock defaults |
//! | [`types`] | Shared data types: `Item`, `Slide`, `Route` |
//! | [`output`] | CLI output formatting: startup banner, access log, window display |
//!
//! # Design Decisions
//!
//! ## Clamp, Never Fail
//!
//! A position in the URL is untrusted input. Missing, blank, non-numeric, or
//! zero values mean "page 1"; anything past the end means "last page". No
//! query string can produce an error page, which keeps every shareable link
//! valid even after the data set shrinks.
//!
//! ## Links First, Script Second
//!
//! Every control is a real `<a href="?page=N">` computed on the server, so
//! the site works with JavaScript disabled. The embedded widget script only
//! upgrades navigation to `location.replace` (history stays clean) and adds
//! the timer- and observer-driven behaviour: carousel autoplay, arrow keys,
//! and automatic loading when the infinite-scroll trigger becomes visible.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Malformed markup
//! is a build error, interpolation is auto-escaped, and there is no template
//! directory to ship next to the binary.
//!
//! ## No Async Runtime
//!
//! Pages render in microseconds from in-memory data. A blocking listener with
//! one short-lived thread per connection is enough, and keeps the binary free
//! of an executor.

pub mod config;
pub mod location;
pub mod mock;
pub mod navigation;
pub mod output;
pub mod pages;
pub mod render;
pub mod server;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
