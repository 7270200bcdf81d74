//! Runtime configuration for backend access

/// Environment variable that overrides the backend base URL
pub const BASE_URL_ENV: &str = "SKILL_CARDS_BASE_URL";

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8181";

const DEFAULT_USER_AGENT: &str = "skill_cards/0.1";

/// Backend connection settings shared by all API clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend origin without trailing slash, e.g. `https://example.org`
    pub base_url: String,
    /// Value sent in the `User-Agent` header
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Build a config with the given base URL and default user agent.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            ..Self::default()
        }
    }

    /// Defaults, with the base URL taken from `SKILL_CARDS_BASE_URL` when set.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                log::debug!("Using base URL from {}: {}", BASE_URL_ENV, url);
                Self::new(url)
            }
            _ => Self::default(),
        }
    }

    /// Join a path (starting with `/`) onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
