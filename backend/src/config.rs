//! Server configuration from the environment.
//!
//! | variable             | default              |
//! |----------------------|----------------------|
//! | `ADMIN_HOST`         | `127.0.0.1`          |
//! | `ADMIN_PORT`         | `8080`               |
//! | `ADMIN_DB_PATH`      | `storefront.sqlite`  |
//! | `ADMIN_OPEN_BROWSER` | `true`               |
//!
//! Unparseable values fall back to the default with a warning.

use log::warn;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            db_path: PathBuf::from("storefront.sqlite"),
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("ADMIN_HOST")
                .filter(|host| !host.trim().is_empty())
                .unwrap_or(defaults.host),
            port: parsed(&lookup, "ADMIN_PORT", defaults.port, |raw| raw.parse().ok()),
            db_path: lookup("ADMIN_DB_PATH")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            open_browser: parsed(&lookup, "ADMIN_OPEN_BROWSER", defaults.open_browser, parse_flag),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parsed<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => parse(raw.trim()).unwrap_or_else(|| {
            warn!("Ignoring invalid {}={:?}", key, raw);
            default
        }),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config(&[]), ServerConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = config(&[
            ("ADMIN_HOST", "0.0.0.0"),
            ("ADMIN_PORT", "9090"),
            ("ADMIN_DB_PATH", "/tmp/admin.sqlite"),
            ("ADMIN_OPEN_BROWSER", "off"),
        ]);
        assert_eq!(config.url(), "http://0.0.0.0:9090");
        assert_eq!(config.db_path, PathBuf::from("/tmp/admin.sqlite"));
        assert!(!config.open_browser);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config(&[("ADMIN_PORT", "eighty"), ("ADMIN_OPEN_BROWSER", "maybe")]);
        assert_eq!(config.port, 8080);
        assert!(config.open_browser);
    }
}
