//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP server port, bound on all interfaces.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Environment name (development, staging, production).
    /// Echoed into responses and gates error-message verbosity.
    #[serde(default = "default_environment", rename = "app_env")]
    pub environment: String,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_port() -> u16 {
    3000
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }

        Ok(())
    }

    /// Whether the service runs in a development posture.
    /// Controls disclosure of fault detail in 500 responses.
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            environment: default_environment(),
            rust_log: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        assert_eq!(default_port(), 3000);
        assert_eq!(default_environment(), "development");
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn default_config_is_development() {
        let config = Config::default();
        assert!(config.is_development());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn production_config_is_not_development() {
        let config = Config {
            environment: "production".to_string(),
            ..Config::default()
        };

        assert!(!config.is_development());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let config = Config {
            port: 0,
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }
}
