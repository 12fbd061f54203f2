use crate::error::ConfigError;
use anyhow::{Context, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::Level;
use url::Url;

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed on load, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub notification: NotificationConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ── Backend API ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend root URL (default: <http://localhost:5000>)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_init_path")]
    pub init_path: String,
    #[serde(default = "default_ping_path")]
    pub ping_path: String,
    #[serde(default = "default_config_path")]
    pub config_path: String,
    #[serde(default = "default_user_profile_path")]
    pub user_profile_path: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".into()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_init_path() -> String {
    "/app/init".into()
}

fn default_ping_path() -> String {
    "/ping".into()
}

fn default_config_path() -> String {
    "/config".into()
}

fn default_user_profile_path() -> String {
    "/app/auth/user/profile".into()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            init_path: default_init_path(),
            ping_path: default_ping_path(),
            config_path: default_config_path(),
            user_profile_path: default_user_profile_path(),
        }
    }
}

// ── Notifications ────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Display duration applied when a payload does not set one.
    /// `None` keeps the banner until it is closed.
    #[serde(default)]
    pub default_duration_ms: Option<u64>,
    /// Overrides `default_duration_ms` for error notifications.
    #[serde(default)]
    pub error_duration_ms: Option<u64>,
}

impl NotificationConfig {
    pub fn default_duration(&self) -> Option<Duration> {
        self.default_duration_ms.map(Duration::from_millis)
    }

    pub fn error_duration(&self) -> Option<Duration> {
        self.error_duration_ms
            .map(Duration::from_millis)
            .or_else(|| self.default_duration())
    }
}

// ── Observability ────────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn as_tracing_level(self) -> Level {
        match self {
            Self::Trace => Level::TRACE,
            Self::Debug => Level::DEBUG,
            Self::Info => Level::INFO,
            Self::Warn => Level::WARN,
            Self::Error => Level::ERROR,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default)]
    pub log_level: LogLevel,
}

// ── Loading / saving ─────────────────────────────────────────────

impl Config {
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        let appstate_dir = home.join(".appstate");
        let config_path = appstate_dir.join("config.toml");

        if !appstate_dir.exists() {
            fs::create_dir_all(&appstate_dir).context("Failed to create .appstate directory")?;
        }

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self {
                config_path,
                ..Self::default()
            };
            config.validate()?;
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::Load(e.to_string()))
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.config_path = path.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        if let Some(parent) = self.config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }

    /// Apply environment variable overrides to config
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("APPSTATE_BASE_URL")
            && !url.is_empty()
        {
            self.api.base_url = url;
        }

        if let Ok(level) = std::env::var("APPSTATE_LOG_LEVEL")
            && let Some(level) = LogLevel::parse(&level)
        {
            self.observability.log_level = level;
        }
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let url = Url::parse(&self.api.base_url).map_err(|e| {
            ConfigError::Validation(format!("api.base_url '{}': {e}", self.api.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "api.base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "api.timeout_secs must be greater than 0".into(),
            ));
        }
        if self.api.connect_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "api.connect_timeout_secs must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
