//! Server configuration
//!
//! One explicit struct built at startup: bind host, port, and the path of
//! the backing file. Environment variables override the defaults and CLI
//! flags override both; nothing else in the crate reads the environment.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the listening port
pub const PORT_ENV: &str = "DOORBASE_PORT";

/// Environment variable overriding the backing-file path
pub const DB_ENV: &str = "DOORBASE_DB";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path of the JSON file holding the document (default: "db.json")
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_db_path() -> PathBuf {
    PathBuf::from("db.json")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            db_path: default_db_path(),
        }
    }
}

impl ServerConfig {
    /// Defaults overlaid with `DOORBASE_PORT` / `DOORBASE_DB` where set.
    ///
    /// A port value that does not parse as u16 is ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(port) = std::env::var(PORT_ENV).ok().and_then(|v| v.parse().ok()) {
            config.port = port;
        }
        if let Ok(path) = std::env::var(DB_ENV) {
            config.db_path = PathBuf::from(path);
        }
        config
    }

    /// Create a config with the specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
