use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Settings for talking to the meal catalog API
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Scheme and host of the API; endpoint paths are appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. `None` keeps the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://themealdb.com".to_string()
}

fn default_user_agent() -> String {
    format!("mealdb-desserts/{}", env!("CARGO_PKG_VERSION"))
}

impl CatalogConfig {
    /// Config pointing at a different API host, everything else default
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALDB__ prefix
    /// 2. mealdb.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALDB__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// See [`CatalogConfig::load`]
pub fn load_config() -> Result<CatalogConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("mealdb").required(false))
        .add_source(
            Environment::with_prefix("MEALDB")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use std::env;

    #[test]
    fn test_default_values() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, "https://themealdb.com");
        assert_eq!(config.timeout_secs, None);
        assert!(config.timeout().is_none());
        assert!(config.user_agent.starts_with("mealdb-desserts/"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: CatalogConfig = Config::builder()
            .add_source(File::from_str("timeout_secs = 5", FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.base_url, default_base_url());
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_with_base_url() {
        let config = CatalogConfig::with_base_url("http://127.0.0.1:1234");
        assert_eq!(config.base_url, "http://127.0.0.1:1234");
        assert_eq!(config.user_agent, default_user_agent());
    }

    #[test]
    fn test_load_config_without_file() {
        // Clear any environment variables that might interfere
        let keys_to_clear: Vec<String> = env::vars()
            .filter(|(k, _)| k.starts_with("MEALDB__"))
            .map(|(k, _)| k)
            .collect();

        for key in keys_to_clear {
            env::remove_var(&key);
        }

        // No mealdb.toml ships with the crate, so only defaults apply
        assert_eq!(load_config().unwrap(), CatalogConfig::default());
    }
}
