//! Configuration loading, validation, and management for Garçon.
//!
//! Loads configuration from `~/.garcon/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use garcon_core::{Catalog, MenuItem};

/// The root configuration structure.
///
/// Maps directly to `~/.garcon/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP gateway settings
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// LLM responder settings
    #[serde(default)]
    pub responder: ResponderConfig,

    /// Cart store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Menu override. Empty = use the built-in menu.
    #[serde(default)]
    pub menu: Vec<MenuItemConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 {
    5000
}
fn default_host() -> String {
    "0.0.0.0".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ResponderConfig {
    /// Provider name: "openai", "openrouter", "ollama", "groq", or any
    /// OpenAI-compatible endpoint via `api_url`.
    #[serde(default = "default_responder_provider")]
    pub provider: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Per-request timeout before falling back to the canned reply.
    #[serde(default = "default_responder_timeout")]
    pub timeout_secs: u64,
}

fn default_responder_provider() -> String {
    "openai".into()
}
fn default_model() -> String {
    "gpt-3.5-turbo".into()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_responder_timeout() -> u64 {
    15
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            provider: default_responder_provider(),
            api_key: None,
            api_url: None,
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_responder_timeout(),
        }
    }
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for ResponderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponderConfig")
            .field("provider", &self.provider)
            .field("api_key", &redact(&self.api_key))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Maximum live sessions before the store evicts the least recently
    /// touched one.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Idle time before a session's cart is dropped. 0 disables expiry.
    #[serde(default = "default_idle_ttl_secs")]
    pub idle_ttl_secs: u64,
}

fn default_max_sessions() -> usize {
    1024
}
fn default_idle_ttl_secs() -> u64 {
    30 * 60
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
            idle_ttl_secs: default_idle_ttl_secs(),
        }
    }
}

impl StoreConfig {
    /// Idle TTL as a duration; zero seconds disables expiry.
    pub fn idle_ttl(&self) -> Option<Duration> {
        (self.idle_ttl_secs > 0).then(|| Duration::from_secs(self.idle_ttl_secs))
    }
}

/// One menu item in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemConfig {
    pub name: String,
    pub price: Decimal,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl AppConfig {
    /// Load configuration from the default path (~/.garcon/config.toml).
    ///
    /// Also checks environment variables:
    /// - `GARCON_API_KEY` (highest priority), then `OPENAI_API_KEY`
    /// - `GARCON_PROVIDER` overrides the responder provider
    /// - `GARCON_MODEL` overrides the responder model
    pub fn load() -> Result<Self, ConfigError> {
        let config_dir = Self::config_dir();
        let config_path = config_dir.join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        // Environment variable overrides (highest priority)
        if config.responder.api_key.is_none() {
            config.responder.api_key = std::env::var("GARCON_API_KEY")
                .ok()
                .or_else(|| std::env::var("OPENAI_API_KEY").ok());
        }

        if let Ok(provider) = std::env::var("GARCON_PROVIDER") {
            config.responder.provider = provider;
        }

        if let Ok(model) = std::env::var("GARCON_MODEL") {
            config.responder.model = model;
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".garcon")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.responder.temperature < 0.0 || self.responder.temperature > 2.0 {
            return Err(ConfigError::ValidationError(
                "responder.temperature must be between 0.0 and 2.0".into(),
            ));
        }

        if self.responder.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "responder.timeout_secs must be at least 1".into(),
            ));
        }

        if self.store.max_sessions == 0 {
            return Err(ConfigError::ValidationError(
                "store.max_sessions must be at least 1".into(),
            ));
        }

        if !self.menu.is_empty() {
            // Catalog construction enforces unique names and sane prices.
            self.build_catalog()
                .map_err(|e| ConfigError::ValidationError(format!("menu: {e}")))?;
        }

        Ok(())
    }

    /// Check if an API key is available (from config or environment).
    pub fn has_api_key(&self) -> bool {
        self.responder.api_key.is_some()
    }

    /// The menu catalog this deployment serves: the `[[menu]]` entries if
    /// present, otherwise the built-in menu.
    pub fn menu_catalog(&self) -> Result<Catalog, ConfigError> {
        if self.menu.is_empty() {
            return Ok(Catalog::builtin());
        }
        self.build_catalog()
            .map_err(|e| ConfigError::ValidationError(format!("menu: {e}")))
    }

    fn build_catalog(&self) -> Result<Catalog, garcon_core::CatalogError> {
        let items = self
            .menu
            .iter()
            .map(|m| MenuItem::new(&m.name, m.price, &m.category, &m.description))
            .collect();
        Catalog::new(items)
    }

    /// Generate a default config TOML string (for the `init` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig::default(),
            responder: ResponderConfig::default(),
            store: StoreConfig::default(),
            menu: vec![],
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigError> for garcon_core::Error {
    fn from(e: ConfigError) -> Self {
        garcon_core::Error::Config {
            message: e.to_string(),
        }
    }
}
