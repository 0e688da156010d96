use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Endpoint settings for the language catalog service.
///
/// The base URL is threaded into `LanguagesClient` explicitly; nothing in
/// the crate reads ambient state at fetch time.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(default = "default_languages_path")]
    pub languages_path: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_languages_path() -> String {
    "/api/v1/languages".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with COMMUNITY_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with COMMUNITY_)
            // e.g., COMMUNITY_API__BASE_URL -> api.base_url
            .add_source(
                Environment::with_prefix("COMMUNITY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("COMMUNITY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_defaults() {
        assert_eq!(default_languages_path(), "/api/v1/languages");
        assert_eq!(default_timeout_secs(), 15);
    }

    #[test]
    fn test_logging_defaults() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
    }

    #[test]
    fn test_optional_fields_take_defaults() {
        let settings: Settings = serde_json::from_value(serde_json::json!({
            "api": { "base_url": "https://api.test" }
        }))
        .unwrap();

        assert_eq!(settings.api.base_url, "https://api.test");
        assert_eq!(settings.api.languages_path, "/api/v1/languages");
        assert_eq!(settings.api.timeout_secs, 15);
        assert_eq!(settings.logging.level, "info");
    }
}
