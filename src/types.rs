//! Shared data types rendered by the pages.
//!
//! Items and slides are plain data: built fresh for every request, serialized
//! by `render --json`, and never mutated after construction.

use serde::Serialize;

/// A synthetic list entry shown on the pagination and infinite-scroll pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One carousel slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub id: i64,
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    /// Background gradient as `[from, to]` CSS colors.
    pub gradient: [&'static str; 2],
}

impl Slide {
    /// CSS `background` value for the slide's gradient.
    pub fn background(&self) -> String {
        format!(
            "linear-gradient(to right, {}, {})",
            self.gradient[0], self.gradient[1]
        )
    }
}

/// Top-level pages served by the playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Pagination,
    InfiniteScroll,
    Carousel,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Home,
        Route::Pagination,
        Route::InfiniteScroll,
        Route::Carousel,
    ];

    /// Match a request path. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = match path {
            "/" => "/",
            p => p.strip_suffix('/').unwrap_or(p),
        };
        Route::ALL.into_iter().find(|r| r.path() == trimmed)
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Pagination => "/pagination",
            Route::InfiniteScroll => "/infinite-scroll",
            Route::Carousel => "/carousel",
        }
    }

    /// Label used in navigation and page headings.
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Pagination => "Pagination Bar",
            Route::InfiniteScroll => "Infinite Scroll",
            Route::Carousel => "Carousel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_from_path_matches_known_pages() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/pagination"), Some(Route::Pagination));
        assert_eq!(
            Route::from_path("/infinite-scroll"),
            Some(Route::InfiniteScroll)
        );
        assert_eq!(Route::from_path("/carousel"), Some(Route::Carousel));
    }

    #[test]
    fn route_from_path_ignores_trailing_slash() {
        assert_eq!(Route::from_path("/carousel/"), Some(Route::Carousel));
    }

    #[test]
    fn route_from_path_rejects_unknown() {
        assert_eq!(Route::from_path("/about"), None);
        assert_eq!(Route::from_path("/carousel/extra"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn route_paths_roundtrip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn item_without_image_omits_field() {
        let item = Item {
            id: 1,
            title: "Article 1".to_string(),
            description: "d".to_string(),
            image_url: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn slide_background_is_linear_gradient() {
        let slide = Slide {
            id: 1,
            title: "t",
            description: "d",
            image_url: "u",
            gradient: ["#000", "#fff"],
        };
        assert_eq!(slide.background(), "linear-gradient(to right, #000, #fff)");
    }
}
