//! Application configuration
//!
//! Read from `config.toml` when present, then overridden by environment
//! variables.

use serde::{Deserialize, Serialize};

const CONFIG_FILE_PATH: &str = "config.toml";

/// Default backend port, kept from the original deployment.
pub const DEFAULT_PORT: u16 = 5099;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the support backend consumed by the gateway.
    pub api_base: String,
    /// Port the backend listens on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path of the sqlite database used by the backend.
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_db_path() -> String {
    "support.db".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config {
            api_base: format!("http://localhost:{DEFAULT_PORT}"),
            port: DEFAULT_PORT,
            db_path: default_db_path(),
        };

        if std::path::Path::new(CONFIG_FILE_PATH).exists() {
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                if let Ok(file_config) = toml::from_str::<Config>(&content) {
                    config = file_config;
                }
            }
        }

        // Override with environment variables if they exist
        if let Ok(api_base) = std::env::var("SUPPORT_API_BASE") {
            config.api_base = api_base;
        }
        if let Ok(port) = std::env::var("APP_PORT") {
            if let Ok(port) = port.parse() {
                config.port = port;
            }
        }
        if let Ok(db_path) = std::env::var("SUPPORT_DB_PATH") {
            config.db_path = db_path;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_round_trip() {
        let config = Config {
            api_base: "http://192.168.0.10:5099".to_string(),
            port: 5099,
            db_path: "support.db".to_string(),
        };
        let text = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.api_base, config.api_base);
        assert_eq!(parsed.port, config.port);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: Config =
            toml::from_str(r#"api_base = "http://example.com""#).unwrap();
        assert_eq!(parsed.port, DEFAULT_PORT);
        assert_eq!(parsed.db_path, "support.db");
    }
}
