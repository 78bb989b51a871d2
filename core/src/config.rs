//! Client configuration.
//!
//! The base URL is read once when the composition root builds its
//! `ClientConfig` and copied into each `ApiClient`; nothing mutates it later.

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV: &str = "API_BASE_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix prepended verbatim to every request path. Empty means
    /// same-origin, i.e. paths are used as given.
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Load `.env` if one exists, then read `API_BASE_URL`. Unset or
    /// non-unicode values fall back to an empty base URL.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            base_url: lookup(BASE_URL_ENV).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_base_url_from_lookup() {
        let config = ClientConfig::from_lookup(|key| {
            (key == BASE_URL_ENV).then(|| "https://vms.example.com/api".to_string())
        });
        assert_eq!(config.base_url, "https://vms.example.com/api");
    }

    #[test]
    fn missing_base_url_is_empty() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "");
    }

    #[test]
    fn base_url_is_kept_verbatim() {
        let config = ClientConfig::from_lookup(|_| Some("http://host:8080/".to_string()));
        assert_eq!(config.base_url, "http://host:8080/");
    }
}
