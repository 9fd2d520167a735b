//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser has no process environment, so the backend base URL is baked
//! in from `RENTIFY_API_URL` when the WASM bundle is compiled. An empty value
//! means the API is served from the same origin as the app.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Build-time variable naming the backend base URL.
pub const API_URL_ENV: &str = "RENTIFY_API_URL";

/// `localStorage` key holding the serialized session user.
pub const SESSION_STORAGE_KEY: &str = "rentify_user";

/// How often the profile page re-fetches incoming contact requests.
pub const INCOMING_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// How long a "sent" confirmation stays up before the form resets.
pub const CONFIRMATION_RESET_DELAY: Duration = Duration::from_secs(3);

/// Page size used by the listings browser.
pub const LISTINGS_PAGE_LIMIT: u32 = 50;

/// Page size requested for the home page before trimming to [`FEATURED_COUNT`].
pub const FEATURED_PAGE_LIMIT: u32 = 6;

/// Number of featured listings shown on the home page.
pub const FEATURED_COUNT: usize = 3;

/// Page size used when listing the caller's own apartments.
pub const OWNED_LISTINGS_LIMIT: u32 = 100;

/// Placeholder image offered on the create-listing form.
pub const DEFAULT_IMAGE_URL: &str = "https://picsum.photos/800/600";

/// Backend location for every API call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config from a raw base URL, stripping trailing slashes.
    pub fn new(base_url: &str) -> Self {
        Self { base_url: normalize_base_url(base_url) }
    }

    /// Read the base URL captured from [`API_URL_ENV`] at compile time.
    pub fn from_build_env() -> Self {
        let config = Self::new(option_env!("RENTIFY_API_URL").unwrap_or_default());
        if config.is_same_origin() {
            log::debug!("{API_URL_ENV} unset; using same-origin API");
        } else {
            log::debug!("using API at {}", config.base_url);
        }
        config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// True when requests go to the page's own origin.
    pub fn is_same_origin(&self) -> bool {
        self.base_url.is_empty()
    }

    /// Join the base URL with an absolute resource path (`/api/...`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
