//! Dashboard configuration and persistence

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use url::Url;

/// One remote dataset: a display name and the URL it is fetched from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub name: String,
    pub url: String,
}

impl EndpointConfig {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Parse the configured URL, accepting only http(s)
    pub fn parsed_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.url).map_err(|e| {
            ConfigError::invalid(format!("dataset '{}' has an invalid url '{}': {}", self.name, self.url, e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::invalid(format!(
                "dataset '{}' uses unsupported scheme '{}'",
                self.name, other
            ))),
        }
    }
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Terminal lines per user row
    pub row_height: u16,

    /// Redraw interval in milliseconds
    pub tick_rate_ms: u64,

    /// Colour theme name ("dark" or "light")
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            row_height: 3,
            tick_rate_ms: 250,
            theme: "dark".to_string(),
        }
    }
}

/// Complete dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// The primary user directory dataset
    pub users: EndpointConfig,

    /// Auxiliary datasets, shown in order
    pub datasets: Vec<EndpointConfig>,

    pub ui: UiConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            users: EndpointConfig::new(
                "Users (High Priority)",
                "https://randomuser.me/api/?results=1000&seed=assessment",
            ),
            datasets: vec![
                EndpointConfig::new("Posts", "https://jsonplaceholder.typicode.com/posts"),
                EndpointConfig::new("Comments", "https://jsonplaceholder.typicode.com/comments"),
                EndpointConfig::new("Todos", "https://jsonplaceholder.typicode.com/todos"),
            ],
            ui: UiConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Default config file location: `<config_dir>/userboard/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("userboard").join("config.toml"))
    }

    /// Load configuration from file, falling back to defaults when it does not exist
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text without validating it
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to pretty TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::new();

        for endpoint in std::iter::once(&self.users).chain(self.datasets.iter()) {
            if endpoint.name.trim().is_empty() {
                return Err(ConfigError::invalid("dataset names must not be empty"));
            }
            if !names.insert(endpoint.name.as_str()) {
                return Err(ConfigError::invalid(format!(
                    "dataset name '{}' is used more than once",
                    endpoint.name
                )));
            }
            endpoint.parsed_url()?;
        }

        if self.ui.row_height == 0 {
            return Err(ConfigError::invalid("ui.row_height must be at least 1"));
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::invalid("ui.tick_rate_ms must be greater than 0"));
        }

        if crate::theme::Theme::by_name(&self.ui.theme).is_none() {
            return Err(ConfigError::invalid(format!("unknown theme '{}'", self.ui.theme)));
        }

        Ok(())
    }
}
