//! Application configuration management.

use serde::Deserialize;

/// Environment variable consulted when no key is configured under `analysis`.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Hosted text-generation configuration.
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Result cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Effort calculator defaults.
    #[serde(default)]
    pub effort: EffortConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum accepted upload size in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

/// Hosted text-generation configuration.
#[derive(Clone, Deserialize)]
pub struct AnalysisConfig {
    /// API key for the hosted model. `None` disables analysis.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL of the generative language API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
        }
    }
}

impl AnalysisConfig {
    /// Returns the configured key, treating blank strings as absent.
    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl std::fmt::Debug for AnalysisConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisConfig")
            .field("api_key", &self.credential().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Result cache configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached results.
    #[serde(default = "default_cache_capacity")]
    pub capacity: u64,
    /// Time-to-live of a cached result in seconds.
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

fn default_cache_capacity() -> u64 {
    100
}

fn default_cache_ttl() -> u64 {
    300 // 5 minutes
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

/// Effort calculator defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct EffortConfig {
    /// Hour budget used when a request does not name one.
    #[serde(default = "default_hours")]
    pub default_hours: u32,
}

fn default_hours() -> u32 {
    240
}

impl Default for EffortConfig {
    fn default() -> Self {
        Self {
            default_hours: default_hours(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Falls back to `GEMINI_API_KEY` when no key is configured under
    /// `TALLYBOARD__ANALYSIS__API_KEY` or the config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TALLYBOARD").separator("__"))
            .build()?;

        let mut app_config: Self = config.try_deserialize()?;

        if app_config.analysis.credential().is_none() {
            app_config.analysis.api_key = std::env::var(GEMINI_API_KEY_ENV).ok();
        }

        Ok(app_config)
    }
}
