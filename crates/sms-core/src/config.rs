use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, SmsError};

pub const ENV_VECTORIZER_PATH: &str = "SMS_VECTORIZER_PATH";
pub const ENV_MODEL_PATH: &str = "SMS_MODEL_PATH";
pub const ENV_HOST: &str = "SMS_HOST";
pub const ENV_PORT: &str = "SMS_PORT";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpamFilterConfig {
    #[serde(default)]
    pub artifacts: ArtifactConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Locations of the fitted vectorizer and classifier documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    #[serde(default = "default_vectorizer_path")]
    pub vectorizer_path: PathBuf,
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_vectorizer_path() -> PathBuf {
    PathBuf::from("vectorizer.json")
}

fn default_model_path() -> PathBuf {
    PathBuf::from("model.json")
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    5000
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            vectorizer_path: default_vectorizer_path(),
            model_path: default_model_path(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

impl Default for SpamFilterConfig {
    fn default() -> Self {
        Self {
            artifacts: ArtifactConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl SpamFilterConfig {
    /// Load configuration from a TOML file. Missing sections fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SmsError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| SmsError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Override fields from `SMS_*` environment variables.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(path) = lookup(ENV_VECTORIZER_PATH) {
            self.artifacts.vectorizer_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_MODEL_PATH) {
            self.artifacts.model_path = PathBuf::from(path);
        }
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port.trim().parse().map_err(|_| {
                SmsError::Config(format!("{} is not a valid port: {:?}", ENV_PORT, port))
            })?;
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(SmsError::Config("server.host must not be empty".into()));
        }
        if self.artifacts.vectorizer_path.as_os_str().is_empty() {
            return Err(SmsError::Config("artifacts.vectorizer_path must not be empty".into()));
        }
        if self.artifacts.model_path.as_os_str().is_empty() {
            return Err(SmsError::Config("artifacts.model_path must not be empty".into()));
        }
        Ok(())
    }
}
