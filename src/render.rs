//! HTML rendering.
//!
//! Turns page models from [`pages`](crate::pages) into complete HTML
//! documents. Every page shares one layout: a header with the site title and
//! demo navigation, the page body, and the inline stylesheet and widget
//! script.
//!
//! ## Links and URL State
//!
//! Every navigation control is a plain link to the same path with one query
//! parameter rewritten (see [`Location::href_with`]), so the pages work with
//! scripting disabled. Links marked `data-replace` are upgraded by the
//! widget script to `location.replace`, which keeps page and slide changes
//! out of the back/forward history.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: layout and component styles
//! - `static/widgets.js`: keyboard navigation, autoplay, load-more observer,
//!   and the home page counter
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::config::SiteConfig;
use crate::location::Location;
use crate::navigation::PageMarker;
use crate::pages::{
    CarouselView, InfiniteScrollView, PAGE_PARAM, PageView, PaginationView, SLIDE_PARAM,
};
use crate::types::Route;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/widgets.js");

/// Resolve and render a request location. `None` for unknown paths.
pub fn render_location(config: &SiteConfig, location: &Location) -> Option<Markup> {
    PageView::resolve(config, location).map(|view| render_page(config, &view, location))
}

/// Render a resolved page model.
pub fn render_page(config: &SiteConfig, view: &PageView, location: &Location) -> Markup {
    let route = view.route();
    let body = match view {
        PageView::Home => render_home(config),
        PageView::Pagination(v) => render_pagination(v, location),
        PageView::InfiniteScroll(v) => render_infinite_scroll(config, v, location),
        PageView::Carousel(v) => render_carousel(v, location),
    };
    let title = match route {
        Route::Home => config.title.clone(),
        r => format!("{} · {}", r.title(), config.title),
    };
    base_document(config, &title, Some(route), body)
}

/// Render the 404 page for an unknown path.
pub fn render_not_found(config: &SiteConfig, path: &str) -> Markup {
    let body = html! {
        main.not-found {
            h1 { "Page not found" }
            p { "Nothing lives at " code { (path) } "." }
            p { a href="/" { "Back to the playground" } }
        }
    };
    base_document(config, &format!("Not found · {}", config.title), None, body)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(
    config: &SiteConfig,
    title: &str,
    current: Option<Route>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(config.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(config.description);
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                (site_header(&config.title, current))
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Renders the site header with links to every demo
fn site_header(site_title: &str, current: Option<Route>) -> Markup {
    html! {
        header.site-header {
            a.site-title href="/" { (site_title) }
            nav.site-nav {
                ul {
                    @for route in Route::ALL.into_iter().filter(|r| *r != Route::Home) {
                        @let is_current = current == Some(route);
                        li.current[is_current] {
                            a href=(route.path()) aria-current=[is_current.then_some("page")] {
                                (route.title())
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the home page with demo links and the counter widget
fn render_home(config: &SiteConfig) -> Markup {
    let demos = [
        (
            Route::Pagination,
            "Numbered pages with ellipses. The current page lives in ?page=N.",
        ),
        (
            Route::InfiniteScroll,
            "Posts load in batches as you reach the bottom of the list.",
        ),
        (
            Route::Carousel,
            "Slides with keyboard navigation and optional autoplay.",
        ),
    ];

    html! {
        main.home-page {
            h1 { (config.title) }
            p.lead { "Three navigation patterns, each driven entirely by the URL query string." }
            ul.demo-list {
                @for (route, blurb) in demos {
                    li.demo-card {
                        a href=(route.path()) { (route.title()) }
                        p { (blurb) }
                    }
                }
            }
            div.counter data-counter {
                h2 { "Example Component" }
                p { "Count: " span.counter-value { "0" } }
                button.button.counter-increment type="button" { "Increment" }
            }
        }
    }
}

/// Renders the paginated article list and its pagination bar
fn render_pagination(view: &PaginationView, location: &Location) -> Markup {
    html! {
        main.pagination-page {
            h1 { (Route::Pagination.title()) }
            p.lead { "Server-rendered pages; the bar below only rewrites the page parameter." }
            section.panel {
                h2 { "Page " (view.current_page) " of " (view.total_pages) }
                div.article-list {
                    @for item in &view.items {
                        article.article-card {
                            h3 { (item.title) }
                            p { (item.description) }
                        }
                    }
                }
            }
            (render_pagination_bar(view, location))
        }
    }
}

/// Renders previous/next controls around the page window
pub fn render_pagination_bar(view: &PaginationView, location: &Location) -> Markup {
    let link = |page: i64| location.href_with(PAGE_PARAM, page);

    html! {
        nav.pagination-bar aria-label="Pagination" {
            @if view.has_previous() {
                a.page-step href=(link(view.current_page - 1)) data-replace aria-label="Previous page" {
                    "← Previous"
                }
            } @else {
                span.page-step.disabled aria-disabled="true" { "← Previous" }
            }
            div.page-numbers {
                @for marker in &view.markers {
                    @match marker {
                        PageMarker::Page(n) => {
                            @let is_active = *n == view.current_page;
                            a.page-link.active[is_active]
                                href=(link(*n))
                                data-replace
                                aria-label={ "Go to page " (n) }
                                aria-current=[is_active.then_some("page")] {
                                (n)
                            }
                        },
                        PageMarker::Ellipsis => {
                            span.ellipsis { (marker) }
                        },
                    }
                }
            }
            @if view.has_next() {
                a.page-step href=(link(view.current_page + 1)) data-replace aria-label="Next page" {
                    "Next →"
                }
            } @else {
                span.page-step.disabled aria-disabled="true" { "Next →" }
            }
        }
    }
}

/// Renders the accumulated post grid and the load-more trigger
fn render_infinite_scroll(
    config: &SiteConfig,
    view: &InfiniteScrollView,
    location: &Location,
) -> Markup {
    html! {
        main.infinite-scroll-page {
            h1 { (Route::InfiniteScroll.title()) }
            p.lead { "Progressive loading: each batch adds one page to the URL." }
            div.post-grid {
                @for item in &view.items {
                    article.post-card {
                        @if let Some(src) = &item.image_url {
                            img src=(src) alt=(item.title) loading="lazy";
                        }
                        div.post-body {
                            h2 { (item.title) }
                            p { (item.description) }
                        }
                    }
                }
            }
            (render_scroll_trigger(config, view, location))
        }
    }
}

/// Renders the load-more trigger, or the end-of-list message
pub fn render_scroll_trigger(
    config: &SiteConfig,
    view: &InfiniteScrollView,
    location: &Location,
) -> Markup {
    let settings = &config.infinite_scroll;

    html! {
        @if view.has_more {
            @let next = location.href_with(PAGE_PARAM, view.next_page());
            div.scroll-trigger
                data-next=(next)
                data-delay=(settings.load_delay_ms)
                data-threshold=(settings.threshold) {
                div.scroll-idle {
                    p.scroll-status {
                        "Loaded " (view.items_loaded()) " of " (view.total_items) " items"
                    }
                    a.button.load-more href=(next) data-replace aria-label="Load more items" {
                        "Load more"
                    }
                }
                div.scroll-loading hidden {
                    div.spinner {}
                    p { "Loading..." }
                }
            }
        } @else {
            div.scroll-end {
                p { "You've seen all " (view.total_items) " items!" }
            }
        }
    }
}

/// Renders the current slide with controls, indicators, and progress
fn render_carousel(view: &CarouselView, location: &Location) -> Markup {
    let link = |slide: i64| location.href_with(SLIDE_PARAM, slide);
    let slide = &view.slide;
    let progress = format!("width: {}%;", view.progress_percent());

    html! {
        main.carousel-page {
            h1 { (Route::Carousel.title()) }
            p.lead { "A URL-driven carousel: share the link to land on the same slide." }
            section.carousel
                data-prev=(link(view.previous_slide))
                data-next=(link(view.next_slide))
                data-interval=(view.autoplay_interval_ms) {
                figure.slide style={ "background: " (slide.background()) ";" } {
                    img src=(slide.image_url) alt=(slide.title);
                    figcaption {
                        h2 { (slide.title) }
                        p { (slide.description) }
                    }
                }
                div.carousel-controls {
                    a.button.slide-step href=(link(view.previous_slide)) data-replace aria-label="Previous slide" {
                        "← Previous"
                    }
                    div.carousel-status {
                        span.slide-counter { (view.current_slide) " / " (view.total_slides) }
                        button.button.autoplay-toggle type="button" aria-pressed="false" aria-label="Start autoplay" {
                            "▶ Autoplay"
                        }
                    }
                    a.button.slide-step href=(link(view.next_slide)) data-replace aria-label="Next slide" {
                        "Next →"
                    }
                }
                nav.indicators aria-label="Slides" {
                    @for n in 1..=view.total_slides {
                        @let is_active = n == view.current_slide;
                        a.indicator.active[is_active]
                            href=(link(n))
                            data-replace
                            aria-label={ "Go to slide " (n) }
                            aria-current=[is_active.then_some("true")] {
                            (n)
                        }
                    }
                }
                div.progress {
                    div.progress-bar style=(progress) {}
                }
            }
            section.features {
                h3 { "Features" }
                ul {
                    li { "Previous / Next buttons that wrap around" }
                    li { "Clickable numbered indicators" }
                    li { "Keyboard navigation (← →)" }
                    li { "URL in sync: link straight to any slide" }
                    li { "Optional autoplay toggle" }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
