//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `rehnuma.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Startup seeding settings.
    pub seed: SeedConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Content seeding performed once at startup.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Rebuild the content store from CSV files before serving.
    pub enabled: bool,
    /// Directory holding `services.csv` and `steps.csv`.
    pub dir: PathBuf,
}

impl Config {
    /// Load configuration from `rehnuma.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("rehnuma.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("REHNUMA_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("REHNUMA_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some((host, port)) = var("REHNUMA_BIND")
            .as_deref()
            .and_then(|val| val.rsplit_once(':'))
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("REHNUMA_DATABASE_URL") {
            self.database.url = val;
        }
        if let Some(val) = var("REHNUMA_SEED_DIR") {
            self.seed.dir = PathBuf::from(val);
        }
        if let Some(enabled) = var("REHNUMA_SEED_ENABLED").and_then(|val| parse_flag(&val)) {
            self.seed.enabled = enabled;
        }
        if let Some(val) = var("REHNUMA_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.seed.enabled && self.seed.dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "seed directory must be set when seeding is enabled".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:rehnuma.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "rehnumad=info,rehnuma=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: PathBuf::from("data"),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
