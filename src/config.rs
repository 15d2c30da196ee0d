//! Runtime Configuration
//!
//! Read from an optional `<script id="app-config" type="application/json">`
//! block in the host page. Every field has a default, so the block may be
//! omitted or partial.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Id of the page element holding the JSON configuration
pub const CONFIG_ELEMENT_ID: &str = "app-config";

const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_TASK_LIMIT: usize = 15;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid app config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root of the remote task service, without trailing slash
    pub api_base_url: String,
    /// Page size requested from the task listing
    pub task_limit: usize,
    /// Console log level ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            task_limit: DEFAULT_TASK_LIMIT,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = serde_json::from_str(json)?;
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Load from the host page, falling back to defaults.
    ///
    /// Logging is not initialized yet when this runs, so a broken block is
    /// reported once the logger is up (see `main`).
    pub fn load() -> (Self, Option<ConfigError>) {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(json) if !json.trim().is_empty() => match Self::from_json(&json) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
            _ => (Self::default(), None),
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
