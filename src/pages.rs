//! Per-request page models.
//!
//! Each demo page is described by a plain struct computed from the site
//! config and the request [`Location`]. Building one is the whole "server
//! side" of a request: read the relevant query parameter, clamp it, slice
//! the mock data. The [`render`](crate::render) module turns these into HTML
//! and `render --json` prints them as-is.

use crate::config::SiteConfig;
use crate::location::Location;
use crate::mock::{Catalog, ItemKind, SLIDES};
use crate::navigation::{self, PageMarker};
use crate::types::{Item, Route, Slide};
use serde::Serialize;

/// Query parameter holding the page number on list pages.
pub const PAGE_PARAM: &str = "page";
/// Query parameter holding the slide number on the carousel page.
pub const SLIDE_PARAM: &str = "slide";

/// Numbered pagination page.
#[derive(Debug, Clone, Serialize)]
pub struct PaginationView {
    pub current_page: i64,
    pub total_pages: i64,
    pub items: Vec<Item>,
    pub markers: Vec<PageMarker>,
}

impl PaginationView {
    pub fn build(config: &SiteConfig, location: &Location) -> Self {
        let settings = &config.pagination;
        let catalog = Catalog::new(ItemKind::Article, settings.total_items, settings.per_page);
        let total_pages = catalog.total_pages();
        let current_page = navigation::resolve_position(location.get(PAGE_PARAM), total_pages);

        Self {
            current_page,
            total_pages,
            items: catalog.page(current_page),
            markers: navigation::build_window(current_page, total_pages, settings.window_radius),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Infinite scroll page: every item up to and including the current page.
#[derive(Debug, Clone, Serialize)]
pub struct InfiniteScrollView {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub items: Vec<Item>,
    pub has_more: bool,
}

impl InfiniteScrollView {
    pub fn build(config: &SiteConfig, location: &Location) -> Self {
        let settings = &config.infinite_scroll;
        let catalog = Catalog::new(ItemKind::Post, settings.total_items, settings.per_page);
        let total_pages = catalog.total_pages();
        let current_page = navigation::resolve_position(location.get(PAGE_PARAM), total_pages);

        Self {
            current_page,
            total_pages,
            total_items: settings.total_items,
            items: catalog.up_to(current_page),
            has_more: current_page < total_pages,
        }
    }

    pub fn items_loaded(&self) -> usize {
        self.items.len()
    }

    pub fn next_page(&self) -> i64 {
        self.current_page + 1
    }
}

/// Carousel page: the current slide plus its neighbours for wrapping links.
#[derive(Debug, Clone, Serialize)]
pub struct CarouselView {
    pub current_slide: i64,
    pub total_slides: i64,
    pub previous_slide: i64,
    pub next_slide: i64,
    pub slide: Slide,
    pub autoplay_interval_ms: u64,
}

impl CarouselView {
    pub fn build(config: &SiteConfig, location: &Location) -> Self {
        Self::with_slides(config, location, &SLIDES)
    }

    /// Build against any fixed slide table. An empty table fails to compile.
    pub fn with_slides<const N: usize>(
        config: &SiteConfig,
        location: &Location,
        slides: &[Slide; N],
    ) -> Self {
        const { assert!(N > 0, "a carousel needs at least one slide") };
        let total_slides = N as i64;
        let current_slide = navigation::resolve_position(location.get(SLIDE_PARAM), total_slides);
        let index = usize::try_from(current_slide - 1).unwrap_or_default();

        Self {
            current_slide,
            total_slides,
            previous_slide: navigation::previous_slide(current_slide, total_slides),
            next_slide: navigation::next_slide(current_slide, total_slides),
            slide: slides[index],
            autoplay_interval_ms: config.carousel.autoplay_interval_ms,
        }
    }

    /// Width of the progress bar as a percentage.
    pub fn progress_percent(&self) -> f64 {
        (self.current_slide * 100) as f64 / self.total_slides as f64
    }
}

/// The model for whichever page a request resolves to.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum PageView {
    Home,
    Pagination(PaginationView),
    InfiniteScroll(InfiniteScrollView),
    Carousel(CarouselView),
}

impl PageView {
    /// Resolve a request location to a page model. `None` for unknown paths.
    pub fn resolve(config: &SiteConfig, location: &Location) -> Option<PageView> {
        let view = match Route::from_path(location.path())? {
            Route::Home => PageView::Home,
            Route::Pagination => PageView::Pagination(PaginationView::build(config, location)),
            Route::InfiniteScroll => {
                PageView::InfiniteScroll(InfiniteScrollView::build(config, location))
            }
            Route::Carousel => PageView::Carousel(CarouselView::build(config, location)),
        };
        Some(view)
    }

    pub fn route(&self) -> Route {
        match self {
            PageView::Home => Route::Home,
            PageView::Pagination(_) => Route::Pagination,
            PageView::InfiniteScroll(_) => Route::InfiniteScroll,
            PageView::Carousel(_) => Route::Carousel,
        }
    }
}
