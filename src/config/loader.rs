//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::ServerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ServerConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides to an already-loaded configuration.
///
/// `PORT` replaces the port of the configured bind address, matching the
/// conventional deployment contract of small HTTP services.
pub fn apply_env_overrides(mut config: ServerConfig) -> Result<ServerConfig, ConfigError> {
    if let Ok(port) = std::env::var("PORT") {
        let port: u16 = port
            .parse()
            .map_err(|_| ConfigError::Validation(vec![ValidationError::InvalidPort(port)]))?;

        let mut addr: std::net::SocketAddr =
            config.listener.bind_address.parse().map_err(|_| {
                ConfigError::Validation(vec![ValidationError::InvalidBindAddress(
                    config.listener.bind_address.clone(),
                )])
            })?;
        addr.set_port(port);
        config.listener.bind_address = addr.to_string();
    }

    Ok(config)
}
