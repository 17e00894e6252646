//! Playground configuration.
//!
//! Handles loading, validating, and merging `playground.toml`. Stock defaults
//! reproduce the demo exactly as shipped; a config file only needs the keys
//! it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Navigation Playground"   # Site title shown in <title> and header
//! description = "..."               # <meta name="description">
//! lang = "en"                       # <html lang="...">
//!
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [pagination]
//! total_items = 42          # Size of the mock article list
//! per_page = 5              # Articles per page
//! window_radius = 1         # Page numbers shown on each side of the current one
//!
//! [infinite_scroll]
//! total_items = 30          # Size of the mock post list
//! per_page = 6              # Posts added per "load more"
//! load_delay_ms = 500       # Busy period after triggering a load
//! threshold = 0.1           # Visible fraction of the trigger that fires a load
//!
//! [carousel]
//! autoplay_interval_ms = 3000
//! ```
//!
//! ## Partial Configuration
//!
//! ```toml
//! # Only change the page size
//! [pagination]
//! per_page = 10
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "playground.toml";

/// Largest mock collection a demo may be configured with.
pub const MAX_TOTAL_ITEMS: i64 = 100_000;
/// Largest page size a demo may be configured with.
pub const MAX_PER_PAGE: i64 = 1_000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Playground configuration loaded from `playground.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title shown in the header and document titles.
    pub title: String,
    /// Content of the `<meta name="description">` tag.
    pub description: String,
    /// Value of the `<html lang>` attribute.
    pub lang: String,
    /// Listening address for `serve`.
    pub server: ServerConfig,
    /// Numbered pagination demo.
    pub pagination: PaginationConfig,
    /// Infinite scroll demo.
    pub infinite_scroll: InfiniteScrollConfig,
    /// Carousel demo.
    pub carousel: CarouselConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Navigation Playground".to_string(),
            description:
                "Pagination, infinite scroll, and carousel demos driven by the URL query string"
                    .to_string(),
            lang: "en".to_string(),
            server: ServerConfig::default(),
            pagination: PaginationConfig::default(),
            infinite_scroll: InfiniteScrollConfig::default(),
            carousel: CarouselConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        check_count("pagination.total_items", self.pagination.total_items, MAX_TOTAL_ITEMS)?;
        check_count("pagination.per_page", self.pagination.per_page, MAX_PER_PAGE)?;
        if self.pagination.window_radius < 0 {
            return Err(ConfigError::Validation(
                "pagination.window_radius must not be negative".into(),
            ));
        }
        check_count(
            "infinite_scroll.total_items",
            self.infinite_scroll.total_items,
            MAX_TOTAL_ITEMS,
        )?;
        check_count("infinite_scroll.per_page", self.infinite_scroll.per_page, MAX_PER_PAGE)?;
        if self.infinite_scroll.load_delay_ms == 0 {
            return Err(ConfigError::Validation(
                "infinite_scroll.load_delay_ms must be positive".into(),
            ));
        }
        let threshold = self.infinite_scroll.threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::Validation(
                "infinite_scroll.threshold must be in (0, 1]".into(),
            ));
        }
        if self.carousel.autoplay_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "carousel.autoplay_interval_ms must be positive".into(),
            ));
        }
        Ok(())
    }
}

fn check_count(key: &str, value: i64, max: i64) -> Result<(), ConfigError> {
    if !(1..=max).contains(&value) {
        return Err(ConfigError::Validation(format!(
            "{key} must be between 1 and {max}, got {value}"
        )));
    }
    Ok(())
}

/// Listening address for the HTTP server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    /// Port to bind. `0` picks a free port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// `host:port` suitable for `TcpListener::bind`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Numbered pagination settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationConfig {
    pub total_items: i64,
    pub per_page: i64,
    /// Page numbers shown on each side of the current page.
    pub window_radius: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            total_items: 42,
            per_page: 5,
            window_radius: crate::navigation::DEFAULT_WINDOW_RADIUS,
        }
    }
}

/// Infinite scroll settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InfiniteScrollConfig {
    pub total_items: i64,
    pub per_page: i64,
    /// How long the trigger stays busy after starting a load.
    pub load_delay_ms: u64,
    /// Fraction of the trigger that must be visible before it fires.
    pub threshold: f64,
}

impl Default for InfiniteScrollConfig {
    fn default() -> Self {
        Self {
            total_items: 30,
            per_page: 6,
            load_delay_ms: 500,
            threshold: 0.1,
        }
    }
}

/// Carousel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Time between slides while autoplay is on.
    pub autoplay_interval_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 3000,
        }
    }
}

// =============================================================================
// Stock table + playground.toml overlay
// =============================================================================

/// The built-in settings as a TOML table: the layer `playground.toml` is laid
/// over.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Lay a sparse `overlay` over `base`.
///
/// Sections such as `[pagination]` combine key by key, so a file that sets
/// only `per_page` keeps the stock `total_items`. Any other value in the
/// overlay wins outright.
pub fn merge_toml(mut base: toml::Value, overlay: toml::Value) -> toml::Value {
    overlay_into(&mut base, overlay);
    base
}

fn overlay_into(target: &mut toml::Value, overlay: toml::Value) {
    match (target, overlay) {
        (toml::Value::Table(section), toml::Value::Table(changes)) => {
            for (key, value) in changes {
                match section.get_mut(&key) {
                    Some(existing) => overlay_into(existing, value),
                    None => {
                        section.insert(key, value);
                    }
                }
            }
        }
        (target, value) => *target = value,
    }
}

/// Read `playground.toml` as an untyped table.
///
/// A missing file is `Ok(None)`; a file that is not TOML is an error.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(toml::from_str(&content)?))
}

/// Lay the file's table (if any) over the stock table, then deserialize and
/// validate.
pub fn resolve_config(
    stock: toml::Value,
    file: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match file {
        Some(file) => merge_toml(stock, file),
        None => stock,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`, falling back to stock defaults when it is absent.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `playground.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Navigation Playground Configuration
# ===================================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Unknown keys will cause an error.

# Site title shown in the header and in every <title>.
title = "Navigation Playground"

# Content of the <meta name="description"> tag.
description = "Pagination, infinite scroll, and carousel demos driven by the URL query string"

# Value of the <html lang="..."> attribute.
lang = "en"

# ---------------------------------------------------------------------------
# HTTP server
# ---------------------------------------------------------------------------
[server]
host = "127.0.0.1"
# Use 0 to pick any free port.
port = 3000

# ---------------------------------------------------------------------------
# Pagination bar demo (/pagination)
# ---------------------------------------------------------------------------
[pagination]
# Number of mock articles.
total_items = 42

# Articles per page.
per_page = 5

# Page numbers shown on each side of the current page before an ellipsis.
window_radius = 1

# ---------------------------------------------------------------------------
# Infinite scroll demo (/infinite-scroll)
# ---------------------------------------------------------------------------
[infinite_scroll]
# Number of mock posts.
total_items = 30

# Posts added per load.
per_page = 6

# Milliseconds the trigger stays busy after starting a load.
load_delay_ms = 500

# Fraction of the trigger (0, 1] that must be visible to load more.
threshold = 0.1

# ---------------------------------------------------------------------------
# Carousel demo (/carousel)
# ---------------------------------------------------------------------------
[carousel]
# Milliseconds between slides while autoplay is on.
autoplay_interval_ms = 3000
"##
}
