//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address and asset paths are read separately by leptos from
//! `[package.metadata.leptos]` (overridable with `LEPTOS_SITE_ADDR`).

const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tracing filter directives (`RUST_LOG`)
    /// Example: info,admybrand=debug
    pub log_filter: Option<String>,

    /// Public origin the site is served from (`PUBLIC_URL`), used in logs
    /// Example: https://admybrand.com
    pub public_url: Option<String>,

    /// Compress responses with brotli/gzip (`COMPRESSION`, default on)
    pub compression: bool,

    /// Mount the JSON pricing API (`PRICING_API`, default on)
    pub pricing_api: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_filter: lookup("RUST_LOG"),
            public_url: lookup("PUBLIC_URL"),
            compression: lookup("COMPRESSION").map_or(true, |v| parse_flag(&v)),
            pricing_api: lookup("PRICING_API").map_or(true, |v| parse_flag(&v)),
        }
    }

    /// Filter directives for the tracing subscriber
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Check if a public URL is configured
    pub fn has_public_url(&self) -> bool {
        self.public_url.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Anything other than an explicit "off" value enables the flag.
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_defaults_when_unset() {
        let config = config_from(&[]);

        assert!(config.log_filter.is_none());
        assert!(!config.has_public_url());
        assert!(config.compression);
        assert!(config.pricing_api);
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = config_from(&[
            ("RUST_LOG", "debug"),
            ("PUBLIC_URL", "https://admybrand.com"),
            ("COMPRESSION", "off"),
            ("PRICING_API", "false"),
        ]);

        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.public_url.as_deref(), Some("https://admybrand.com"));
        assert!(config.has_public_url());
        assert!(!config.compression);
        assert!(!config.pricing_api);
    }

    #[test]
    fn test_parse_flag() {
        for off in ["0", "false", "FALSE", "off", " no "] {
            assert!(!parse_flag(off), "{}", off);
        }
        for on in ["1", "true", "on", "yes", ""] {
            assert!(parse_flag(on), "{}", on);
        }
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Values depend on the environment; only check it loads
        let config = Config::from_env();
        let _ = config.log_filter();
        let _ = config.has_public_url();
    }

    #[test]
    fn test_config_clone() {
        let config = config_from(&[("PUBLIC_URL", "http://localhost:3000")]);
        let cloned = config.clone();

        assert_eq!(config.public_url, cloned.public_url);
        assert_eq!(config.compression, cloned.compression);
    }
}
