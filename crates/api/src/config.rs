//! Server configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional TOML
//! file, then `CLIMATE_API_*` environment variables.

use config::{ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::Level;

/// Config file read when `CLIMATE_API_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "climate-api.toml";

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_VAR: &str = "CLIMATE_API_CONFIG";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: String,
    /// SQLite URL of the climate database
    pub database_url: String,
    /// Pool size for per-request queries
    pub max_connections: u32,
    /// Max log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            database_url: "sqlite://Resources/hawaii.sqlite".to_string(),
            max_connections: 4,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load from the file named by `CLIMATE_API_CONFIG` (or the default
    /// file) and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(&path)
    }

    /// Load with `path` as the (optional) TOML file layer
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let loaded: Self = config::Config::builder()
            .set_default("bind_addr", defaults.bind_addr)?
            .set_default("database_url", defaults.database_url)?
            .set_default("max_connections", i64::from(defaults.max_connections))?
            .set_default("log_level", defaults.log_level)?
            .add_source(File::new(path, FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("CLIMATE_API"))
            .build()?
            .try_deserialize()?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject values the server cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_connections == 0 {
            return Err(ConfigError::Message(
                "max_connections must be at least 1".to_string(),
            ));
        }
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::Message("database_url is empty".to_string()));
        }
        self.log_level()?;
        Ok(())
    }

    /// Parsed `log_level`
    pub fn log_level(&self) -> Result<Level, ConfigError> {
        Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::Message(format!("unknown log level: {}", self.log_level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // Loading reads the process environment, which tests share
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.toml", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr, "127.0.0.1:5000");
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.log_level().unwrap(), Level::INFO);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let _env = env_lock();
        let config = ServerConfig::load_from("/nonexistent/climate-api.toml").unwrap();
        assert_eq!(config.database_url, "sqlite://Resources/hawaii.sqlite");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let _env = env_lock();
        let path = write_config(
            "climate-api-override",
            "bind_addr = \"0.0.0.0:8080\"\nmax_connections = 2\nlog_level = \"debug\"\n",
        );

        let config = ServerConfig::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.log_level().unwrap(), Level::DEBUG);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_rejects_zero_connections() {
        let _env = env_lock();
        let path = write_config("climate-api-zero", "max_connections = 0\n");

        let result = ServerConfig::load_from(path.to_str().unwrap());
        assert!(result.is_err());

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_environment_overrides_file() {
        let _env = env_lock();
        let path = write_config(
            "climate-api-env",
            "bind_addr = \"0.0.0.0:8080\"\nmax_connections = 2\n",
        );

        std::env::set_var("CLIMATE_API_BIND_ADDR", "0.0.0.0:9");
        std::env::set_var("CLIMATE_API_MAX_CONNECTIONS", "7");
        let result = ServerConfig::load_from(path.to_str().unwrap());
        std::env::remove_var("CLIMATE_API_BIND_ADDR");
        std::env::remove_var("CLIMATE_API_MAX_CONNECTIONS");
        std::fs::remove_file(path).ok();

        let config = result.unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:9");
        assert_eq!(config.max_connections, 7);
        assert_eq!(config.database_url, "sqlite://Resources/hawaii.sqlite");
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let config = ServerConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
