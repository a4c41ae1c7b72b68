//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// File path or http(s) URL of the JSON document
    #[serde(default = "default_dataset_location")]
    pub location: String,
}

fn default_dataset_location() -> String {
    "assets/mock/olympic.json".to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            location: default_dataset_location(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![
                "http://localhost:4200".to_string(),
                "http://127.0.0.1:4200".to_string(),
            ],
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> LoadedConfig {
        let mut config = Config::default();
        let warnings = config.apply_env_overrides();
        LoadedConfig {
            config,
            path: None,
            warnings,
        }
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<LoadedConfig, ConfigError> {
        let mut config = Self::load(path)?;
        let warnings = config.apply_env_overrides();
        Ok(LoadedConfig {
            config,
            path: Some(path.to_path_buf()),
            warnings,
        })
    }

    /// Load from default locations or environment
    pub fn load_default() -> LoadedConfig {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("medalboard").join("config.toml")),
            Some(PathBuf::from("/etc/medalboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths, |key| std::env::var(key).ok())
    }

    /// Load the first existing, parseable file among `paths`.
    ///
    /// Files that exist but fail to load are recorded as warnings and skipped.
    fn load_first(paths: &[PathBuf], var: impl Fn(&str) -> Option<String>) -> LoadedConfig {
        let mut warnings = Vec::new();
        let mut loaded = None;

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(config) => {
                    loaded = Some((config, path.clone()));
                    break;
                }
                Err(e) => warnings.push(format!("Failed to load config from {:?}: {}", path, e)),
            }
        }

        let (mut config, path) = match loaded {
            Some((config, path)) => (config, Some(path)),
            None => (Config::default(), None),
        };
        warnings.extend(config.apply_overrides(var));

        LoadedConfig {
            config,
            path,
            warnings,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> Vec<String> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Returns a warning for every override that could not be applied
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(location) = var("MEDALBOARD_DATASET") {
            self.dataset.location = location;
        }

        if let Some(host) = var("MEDALBOARD_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = var("MEDALBOARD_API_PORT") {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => warnings.push(format!("Ignoring invalid MEDALBOARD_API_PORT: {}", port)),
            }
        }

        if let Some(level) = var("MEDALBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("MEDALBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }

        warnings
    }
}

/// A resolved configuration plus what happened while resolving it.
///
/// Config is read before the tracing subscriber exists, so diagnostics are
/// kept here and emitted by `report()` once logging is installed.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from; `None` means defaults
    pub path: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl LoadedConfig {
    /// Log where the config came from and every warning collected
    pub fn report(&self) {
        match &self.path {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }

        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Medalboard Configuration
#
# Environment variables override these settings:
# - MEDALBOARD_DATASET
# - MEDALBOARD_API_HOST
# - MEDALBOARD_API_PORT
# - MEDALBOARD_LOG_LEVEL
# - MEDALBOARD_LOG_FORMAT

[dataset]
# JSON document with the participation records.
# A filesystem path, or an http(s) URL fetched once at startup.
location = "assets/mock/olympic.json"

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8090

# Allowed CORS origins (empty list allows any origin)
cors_origins = ["http://localhost:4200", "http://127.0.0.1:4200"]

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
