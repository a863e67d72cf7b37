//! Client configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! an optional TOML file overlaid with `CONSPECTS__*` environment
//! variables. Every field has a default, so an empty source is valid.

pub mod api;
pub mod download;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::download::DownloadConfig;
use self::logging::LoggingConfig;

use crate::error::AppError;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "CONSPECTS";

/// Root client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Where exported archives are written.
    #[serde(default)]
    pub download: DownloadConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// A missing file is not an error; environment variables such as
    /// `CONSPECTS__API__BASE_URL` override file values.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        parsed.validate()?;
        Ok(parsed)
    }

    /// Reject configurations the client cannot work with.
    pub fn validate(&self) -> Result<(), AppError> {
        let base = self.api.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(AppError::configuration(format!(
                "api.base_url must be an http(s) URL, got '{base}'"
            )));
        }
        if self.api.timeout_seconds == 0 {
            return Err(AppError::configuration(
                "api.timeout_seconds must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = ClientConfig::load("definitely/not/here.toml").expect("defaults");
        assert_eq!(config.api.timeout_seconds, 30);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("client.toml");
        std::fs::write(
            &path,
            concat!(
                "[api]\n",
                "base_url = \"https://courses.example.org/api\"\n",
                "\n",
                "[download]\n",
                "directory = \"exports\"\n",
            ),
        )
        .expect("write");

        let config = ClientConfig::load(path.to_str().expect("utf8")).expect("load");
        assert_eq!(config.api.base_url, "https://courses.example.org/api");
        assert_eq!(config.download.directory, std::path::PathBuf::from("exports"));
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut config = ClientConfig::default();
        config.api.base_url = "ftp://example.org".to_string();
        assert!(config.validate().is_err());
    }
}
