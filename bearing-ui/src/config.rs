//! Application configuration.
//!
//! Values come from three layers, later ones winning:
//! 1. built-in defaults,
//! 2. an optional TOML file,
//! 3. environment overrides (`BEARING_API_BASE_URL`, `BEARING_BACKEND_ORIGIN`).
//!
//! Command-line flags are applied on top by the binary.

use std::{
    fs,
    path::{Path, PathBuf},
};

use bearing_core::service::ServiceConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::themes::FormStyle;

/// Overrides the API base URL (absolute, or a path resolved against the origin).
pub const ENV_API_BASE_URL: &str = "BEARING_API_BASE_URL";
/// Overrides the origin relative API bases are resolved against.
pub const ENV_BACKEND_ORIGIN: &str = "BEARING_BACKEND_ORIGIN";

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_BACKEND_ORIGIN: &str = "http://localhost:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Generation backend: `local` or `http`.
    pub backend: String,
    pub api_base_url: String,
    pub backend_origin: String,
    pub style: FormStyle,
    /// Show locally generated text when the backend call fails.
    pub fallback_on_error: bool,
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: "local".to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            backend_origin: DEFAULT_BACKEND_ORIGIN.to_string(),
            style: FormStyle::default(),
            fallback_on_error: true,
            log_level: "info".to_string(),
            log_file: None,
            window_width: 900.0,
            window_height: 820.0,
        }
    }
}

impl AppConfig {
    /// Parses a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(
        text: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Applies environment overrides. `lookup` is `std::env::var` in
    /// production; tests pass a map.
    pub fn with_env<F>(
        mut self,
        lookup: F,
    ) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(base) = non_empty(ENV_API_BASE_URL) {
            self.api_base_url = base;
        }
        if let Some(origin) = non_empty(ENV_BACKEND_ORIGIN) {
            self.backend_origin = origin;
        }
        self
    }

    /// Absolute base URL for network backends.
    ///
    /// An absolute `api_base_url` is used as is; a relative one (the default
    /// `/api`) is appended to `backend_origin`.
    pub fn resolved_base_url(&self) -> String {
        let base = self.api_base_url.trim();
        if base.starts_with("http://") || base.starts_with("https://") {
            return base.trim_end_matches('/').to_string();
        }

        let origin = self.backend_origin.trim().trim_end_matches('/');
        let path = base.trim_matches('/');
        if path.is_empty() {
            origin.to_string()
        } else {
            format!("{origin}/{path}")
        }
    }

    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            backend: self.backend.trim().to_lowercase(),
            base_url: self.resolved_base_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_resolve_to_local_proxy_target() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.resolved_base_url(), "http://localhost:8000/api");
        assert_eq!(cfg.service_config().backend, "local");
    }

    #[test]
    fn absolute_base_url_is_used_unchanged() {
        let cfg = AppConfig {
            api_base_url: "https://specs.example.com/v2/".to_string(),
            ..Default::default()
        };

        assert_eq!(cfg.resolved_base_url(), "https://specs.example.com/v2");
    }

    #[test]
    fn relative_base_joins_origin_with_single_slash() {
        let cfg = AppConfig {
            api_base_url: "api/".to_string(),
            backend_origin: "http://10.0.0.5:9000/".to_string(),
            ..Default::default()
        };

        assert_eq!(cfg.resolved_base_url(), "http://10.0.0.5:9000/api");
    }

    #[test]
    fn env_overrides_base_and_origin() {
        let cfg = AppConfig::default().with_env(env(&[
            (ENV_API_BASE_URL, "/v1"),
            (ENV_BACKEND_ORIGIN, "http://backend:8080"),
        ]));

        assert_eq!(cfg.resolved_base_url(), "http://backend:8080/v1");
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let cfg = AppConfig::default().with_env(env(&[(ENV_API_BASE_URL, "  ")]));

        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = AppConfig::from_toml_str(
            "backend = \"http\"\nstyle = \"hero\"\n",
            Path::new("inline.toml"),
        )
        .unwrap();

        assert_eq!(cfg.backend, "http");
        assert_eq!(cfg.style, FormStyle::Hero);
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
        assert!(cfg.fallback_on_error);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = AppConfig::from_toml_str("colour = \"blue\"", Path::new("bad.toml")).unwrap_err();

        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn backend_name_is_normalized() {
        let cfg = AppConfig {
            backend: " HTTP ".to_string(),
            ..Default::default()
        };

        assert_eq!(cfg.service_config().backend, "http");
    }

    #[test]
    fn load_without_path_returns_defaults() {
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }
}
