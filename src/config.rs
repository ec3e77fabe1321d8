//! Runtime configuration resolved at startup.
//!
//! DESIGN
//! ======
//! Configuration is read once from browser `localStorage` overrides and
//! provided through context, so request code never touches web-sys glue
//! directly and host-side tests can construct configs by hand.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `localStorage` key overriding the API base URL (default: same origin).
pub const API_BASE_STORAGE_KEY: &str = "vizboard_api_base";
/// `localStorage` key disabling the offline login fallback when set to `"false"`.
pub const INSECURE_FALLBACK_STORAGE_KEY: &str = "vizboard_allow_insecure_fallback";

/// Resolved application configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Base URL prepended to API paths. Empty means same-origin requests,
    /// which the dev server proxies to the backend.
    pub api_base: String,
    /// Whether a failed login may fall back to a local browser-only session.
    pub allow_insecure_fallback: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            allow_insecure_fallback: true,
        }
    }
}

impl AppConfig {
    /// Build the config from `localStorage` overrides, falling back to
    /// defaults when storage is missing or untouched.
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(raw) = read_storage(API_BASE_STORAGE_KEY) {
            config.api_base = normalize_api_base(&raw);
        }
        if let Some(raw) = read_storage(INSECURE_FALLBACK_STORAGE_KEY) {
            config.allow_insecure_fallback = parse_fallback_flag(&raw);
        }
        config
    }

    /// Join an absolute API path onto the configured base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

/// Trim whitespace and trailing slashes so joins with absolute paths stay clean.
pub(crate) fn normalize_api_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

/// The fallback stays on unless the override is explicitly `"false"`.
pub(crate) fn parse_fallback_flag(raw: &str) -> bool {
    raw.trim() != "false"
}

fn read_storage(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}
