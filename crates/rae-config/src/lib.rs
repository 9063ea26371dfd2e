use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://rae-api.com/api".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_product() -> String {
    "rae-api".to_string()
}

fn default_docs_url() -> String {
    "https://rae-api.com".to_string()
}

fn default_lookup_accepts_not_found() -> bool {
    true
}

/// Client settings. Fixed once the client is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Service root, every endpoint path is appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Upper bound for a single request
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Version reported in the User-Agent header
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_product")]
    pub product: String,
    #[serde(default = "default_docs_url")]
    pub docs_url: String,
    /// Treat HTTP 404 on word lookup as a regular "not found" envelope
    /// instead of a transport failure. Suggestions only survive with this on.
    #[serde(default = "default_lookup_accepts_not_found")]
    pub lookup_accepts_not_found: bool,
    /// Search engine selector sent as `eng=`, omitted when `None`
    #[serde(default)]
    pub search_engine: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            version: default_version(),
            product: default_product(),
            docs_url: default_docs_url(),
            lookup_accepts_not_found: default_lookup_accepts_not_found(),
            search_engine: None,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `RAE_*` environment variables
    pub fn new() -> Self {
        let defaults = Self::default();

        let base_url = env::var("RAE_BASE_URL").unwrap_or(defaults.base_url);

        let timeout_ms = env::var("RAE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(defaults.timeout_ms);

        let version = env::var("RAE_VERSION").unwrap_or(defaults.version);

        let lookup_accepts_not_found = env::var("RAE_LOOKUP_ACCEPT_404")
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.lookup_accepts_not_found);

        let search_engine = env::var("RAE_SEARCH_ENGINE")
            .ok()
            .filter(|v| !v.trim().is_empty());

        Self {
            base_url,
            timeout_ms,
            version,
            lookup_accepts_not_found,
            search_engine,
            ..defaults
        }
    }

    /// Request bound. Zero would fail every call, so it means "use the default".
    pub fn timeout(&self) -> Duration {
        match self.timeout_ms {
            0 => Duration::from_millis(default_timeout_ms()),
            ms => Duration::from_millis(ms),
        }
    }

    /// Value of the identifying header sent with every call
    pub fn user_agent(&self) -> String {
        format!("{}/{} See {}", self.product, self.version, self.docs_url)
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
