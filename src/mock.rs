//! Deterministic mock content.
//!
//! There is no data source behind the playground. Items are computed from
//! their page coordinates and slides are a fixed table, so any URL always
//! renders the same content.

use crate::types::{Item, Slide};

/// Which flavour of synthetic item to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Text-only entries for the pagination page.
    Article,
    /// Entries with a thumbnail for the infinite-scroll page.
    Post,
}

impl ItemKind {
    fn item(self, id: i64) -> Item {
        match self {
            ItemKind::Article => Item {
                id,
                title: format!("Article {id}"),
                description: format!("Description of article number {id}"),
                image_url: None,
            },
            ItemKind::Post => Item {
                id,
                title: format!("Post {id}"),
                description: format!(
                    "Content of post number {id}. This is an example of progressive loading."
                ),
                image_url: Some(format!("https://picsum.photos/seed/{id}/400/300")),
            },
        }
    }
}

/// Generate the `page`-th slice of `per_page` items.
///
/// Ids run `(page-1)*per_page + 1 ..= page*per_page`. No upper bound is
/// applied; see [`Catalog::page`] for the bounded version. Pages before the
/// first, empty page sizes, and ids past `i64::MAX` yield nothing.
pub fn generate(kind: ItemKind, page: i64, per_page: i64) -> Vec<Item> {
    match page_bounds(page, per_page) {
        Some((first, last)) => (first..=last).map(|id| kind.item(id)).collect(),
        None => Vec::new(),
    }
}

/// First and last id on a 1-based page, saturating at `i64::MAX`.
fn page_bounds(page: i64, per_page: i64) -> Option<(i64, i64)> {
    if page < 1 || per_page < 1 {
        return None;
    }
    let first = (page - 1).checked_mul(per_page)?.checked_add(1)?;
    Some((first, first.saturating_add(per_page - 1)))
}

/// A fixed-size collection of synthetic items split into pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    pub kind: ItemKind,
    pub total_items: i64,
    pub per_page: i64,
}

impl Catalog {
    pub fn new(kind: ItemKind, total_items: i64, per_page: i64) -> Self {
        Self {
            kind,
            total_items,
            per_page,
        }
    }

    /// Number of pages, rounding up so a partial last page counts.
    pub fn total_pages(&self) -> i64 {
        if self.per_page <= 0 || self.total_items <= 0 {
            return 0;
        }
        (self.total_items - 1) / self.per_page + 1
    }

    /// Items on one page, stopping at `total_items`.
    pub fn page(&self, page: i64) -> Vec<Item> {
        match page_bounds(page, self.per_page) {
            Some((first, last)) => self.items(first, last),
            None => Vec::new(),
        }
    }

    /// Items on pages `1..=page`, concatenated. Pages past the end add nothing.
    pub fn up_to(&self, page: i64) -> Vec<Item> {
        match page_bounds(page.min(self.total_pages()), self.per_page) {
            Some((_, last)) => self.items(1, last),
            None => Vec::new(),
        }
    }

    fn items(&self, first: i64, last: i64) -> Vec<Item> {
        (first..=last.min(self.total_items))
            .map(|id| self.kind.item(id))
            .collect()
    }
}

/// The carousel's slides, in display order.
pub const SLIDES: [Slide; 5] = [
    Slide {
        id: 1,
        title: "Welcome to the Carousel",
        description: "This is the first slide of our carousel",
        image_url: "https://picsum.photos/seed/carousel1/800/400",
        gradient: ["#3b82f6", "#9333ea"],
    },
    Slide {
        id: 2,
        title: "Smooth Navigation",
        description: "Move between slides with the buttons or the keyboard",
        image_url: "https://picsum.photos/seed/carousel2/800/400",
        gradient: ["#22c55e", "#0d9488"],
    },
    Slide {
        id: 3,
        title: "URL in Sync",
        description: "The current slide lives in the URL",
        image_url: "https://picsum.photos/seed/carousel3/800/400",
        gradient: ["#f97316", "#dc2626"],
    },
    Slide {
        id: 4,
        title: "Server Rendered",
        description: "Slide data is computed on the server for every request",
        image_url: "https://picsum.photos/seed/carousel4/800/400",
        gradient: ["#ec4899", "#e11d48"],
    },
    Slide {
        id: 5,
        title: "Client Interactivity",
        description: "Keyboard, autoplay, and indicators are handled in the browser",
        image_url: "https://picsum.photos/seed/carousel5/800/400",
        gradient: ["#6366f1", "#2563eb"],
    },
];
