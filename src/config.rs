//! Configuration loading and management for focusfork.
//!
//! Loads settings from `focusfork.toml` with environment variable overrides
//! for the bearer credential. A missing file falls back to local-backend
//! defaults so the seeded listings work out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable overriding the analysis bearer token.
pub const TOKEN_ENV_VAR: &str = "FOCUSFORK_API_TOKEN";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("missing API token: set {TOKEN_ENV_VAR} or [api] token")]
    MissingToken,
}

/// Backend endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Summarization endpoint (POST, JSON).
    pub summarize_url: String,
    /// Issue-analysis endpoint (POST, JSON, bearer auth).
    pub analysis_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            summarize_url: "http://localhost:3000/api/summarize-discussion".to_string(),
            analysis_url: "http://localhost:3000/api/analyze-issues".to_string(),
        }
    }
}

/// Credentials configuration (overridable from the environment).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub token: Option<String>,
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Loads configuration from the default location, falling back to
    /// defaults when no file exists. The env override still applies.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                let mut config = Config::default();
                config.apply_env_overrides();
                Ok(config)
            }
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            self.api.token = Some(token);
        }
    }

    /// Finds the config file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from("focusfork.toml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Check home directory
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config").join("focusfork").join("focusfork.toml");
            if home_config.exists() {
                return Some(home_config);
            }
        }

        None
    }

    /// The bearer token for the analysis backend.
    pub fn api_token(&self) -> Result<&str, ConfigError> {
        self.api.token.as_deref().ok_or(ConfigError::MissingToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_point_at_the_local_backend() {
        let config = Config::default();
        assert_eq!(
            config.backend.summarize_url,
            "http://localhost:3000/api/summarize-discussion"
        );
        assert!(matches!(config.api_token(), Err(ConfigError::MissingToken)));
    }

    #[test]
    fn load_from_parses_backend_and_token_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[backend]
summarize_url = "https://dash.example/api/summarize-discussion"
analysis_url = "https://dash.example/api/analyze-issues"

[api]
token = "file-token"
"#
        )
        .unwrap();

        let config = Config::load_from(&file.path().to_path_buf()).unwrap();
        assert_eq!(
            config.backend.analysis_url,
            "https://dash.example/api/analyze-issues"
        );
        // The env var may override the file token in some environments;
        // either way a token must be present.
        assert!(config.api_token().is_ok());
    }

    #[test]
    fn partial_files_fall_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\ntoken = \"t\"").unwrap();

        let config = Config::load_from(&file.path().to_path_buf()).unwrap();
        assert_eq!(
            config.backend.summarize_url,
            BackendConfig::default().summarize_url
        );
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "backend = nonsense").unwrap();

        let result = Config::load_from(&file.path().to_path_buf());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
