//! Client configuration loaded from environment variables.
//!
//! All settings have defaults so the client can start with zero
//! configuration against a local development backend.

use std::path::PathBuf;
use std::time::Duration;

use scoda_shared::constants::{DEFAULT_API_URL, REQUEST_TIMEOUT_SECS};

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Scoda backend, without trailing slash.
    /// Env: `SCODA_API_URL`
    /// Default: `http://localhost:3001`
    pub api_url: String,

    /// Blanket timeout applied to every request.
    /// Env: `SCODA_TIMEOUT_SECS`
    /// Default: 30 seconds
    pub request_timeout: Duration,

    /// Directory holding the local session database.
    /// Env: `SCODA_DATA_DIR`
    /// Default: `None` (platform data directory).
    pub data_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            data_dir: None,
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at `api_url`, other settings defaulted.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: normalize_base_url(&api_url.into()),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("SCODA_API_URL") {
            let url = normalize_base_url(&url);
            if url.starts_with("http://") || url.starts_with("https://") {
                config.api_url = url;
            } else {
                tracing::warn!(value = %url, "Invalid SCODA_API_URL, using default");
            }
        }

        if let Ok(val) = std::env::var("SCODA_TIMEOUT_SECS") {
            match val.parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout = Duration::from_secs(secs),
                _ => tracing::warn!(value = %val, "Invalid SCODA_TIMEOUT_SECS, using default"),
            }
        }

        if let Ok(dir) = std::env::var("SCODA_DATA_DIR") {
            if !dir.is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }

        config
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
