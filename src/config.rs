use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_STORE_PATH: &str = "housing_store.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No API key configured: set GEMINI_API_KEY or API_KEY")]
    MissingApiKey,

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Settings for the generation client and local store
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Raw `GEMINI_TIMEOUT_SECS`; parsed only when a live client is built
    pub timeout_secs: Option<String>,
    pub store_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl AppConfig {
    /// Load from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        config.api_key = get("GEMINI_API_KEY").or_else(|| get("API_KEY"));

        if let Some(model) = get("GEMINI_MODEL") {
            config.model = model;
        }
        if let Some(base_url) = get("GEMINI_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        config.timeout_secs = get("GEMINI_TIMEOUT_SECS");
        if let Some(path) = get("HOUSING_STORE_PATH") {
            config.store_path = PathBuf::from(path);
        }

        config
    }

    /// Request timeout for the generation client
    pub fn timeout(&self) -> Result<Duration, ConfigError> {
        let Some(raw) = &self.timeout_secs else {
            return Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        };
        raw.trim()
            .parse::<u64>()
            .ok()
            .filter(|s| *s > 0)
            .map(Duration::from_secs)
            .ok_or_else(|| ConfigError::InvalidValue {
                name: "GEMINI_TIMEOUT_SECS",
                value: raw.clone(),
            })
    }

    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key.as_deref().ok_or(ConfigError::MissingApiKey)
    }
}
