//! Process Configuration
//!
//! Configuration for the HTTP server and the document store, loaded once at
//! process start from an optional JSON file with environment overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (empty = permissive, for development)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// MongoDB connection string (default: "mongodb://localhost:27017")
    #[serde(default = "default_uri")]
    pub uri: String,

    /// Database name (default: "mydatabase")
    #[serde(default = "default_database")]
    pub database: String,

    /// Collection holding Item documents (default: "items")
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_database() -> String {
    "mydatabase".to_string()
}

fn default_collection() -> String {
    "items".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            database: default_database(),
            collection: default_collection(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub store: StoreConfig,
}

impl Config {
    /// Load configuration from a JSON file, then apply environment
    /// overrides. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            serde_json::from_str(&contents)?
        } else {
            Config::default()
        };
        config.override_from(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply environment-style overrides from a lookup function.
    ///
    /// Recognized keys: `MONGO_URI`, `MONGO_DATABASE_NAME`.
    pub fn override_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(uri) = lookup("MONGO_URI") {
            self.store.uri = uri;
        }
        if let Some(database) = lookup("MONGO_DATABASE_NAME") {
            self.store.database = database;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.store.uri, "mongodb://localhost:27017");
        assert_eq!(config.store.database, "mydatabase");
        assert_eq!(config.store.collection, "items");
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig {
            port: 9090,
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("item-api.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"server": {{"port": 3000}}, "store": {{"database": "testdb"}}}}"#
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.store.database, "testdb");
        assert_eq!(config.store.collection, "items");
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("item-api.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_env_overrides() {
        let mut env = HashMap::new();
        env.insert("MONGO_URI", "mongodb://db.internal:27017");
        env.insert("MONGO_DATABASE_NAME", "production");

        let mut config = Config::default();
        config.override_from(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.store.uri, "mongodb://db.internal:27017");
        assert_eq!(config.store.database, "production");
        assert_eq!(config.store.collection, "items");
    }
}
