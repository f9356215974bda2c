//! Server configuration.
//!
//! Values are resolved in three layers: built-in defaults, an optional TOML
//! file, then environment variables.
//!
//! # Configuration file
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 5000
//! static_dir = "static"
//! body_limit_bytes = 1048576
//!
//! [simulation]
//! seed = 42
//! ```
//!
//! # Environment Variables
//!
//! - `FOREST_WATCH_CONFIG`: path to the TOML file (default: `forest-watch.toml` if present)
//! - `HOST`: bind host (default: 0.0.0.0)
//! - `PORT`: bind port (default: 5000)
//! - `STATIC_DIR`: directory holding `index.html` and `favicon.ico` (default: static)
//! - `SIMULATION_SEED`: seed for reproducible reports (default: unseeded)
//! - `BODY_LIMIT_BYTES`: maximum request body size (default: 1 MiB)

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const CONFIG_PATH_ENV: &str = "FOREST_WATCH_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "forest-watch.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{name} must be a valid {expected}, got '{value}'")]
    InvalidEnv {
        name: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid bind address '{0}'")]
    InvalidAddress(String),
}

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served for `/` and `/favicon.ico`.
    pub static_dir: PathBuf,
    /// Seed for the simulation random source; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            seed: None,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

/// On-disk layout; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    server: ServerSection,
    #[serde(default)]
    simulation: SimulationSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServerSection {
    host: Option<String>,
    port: Option<u16>,
    static_dir: Option<PathBuf>,
    body_limit_bytes: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SimulationSection {
    seed: Option<u64>,
}

impl ServerConfig {
    /// Load configuration from the default file location (if any) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            Err(_) => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Defaults overlaid with the contents of a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(content)?;
        let defaults = Self::default();
        Ok(Self {
            host: file.server.host.unwrap_or(defaults.host),
            port: file.server.port.unwrap_or(defaults.port),
            static_dir: file.server.static_dir.unwrap_or(defaults.static_dir),
            seed: file.simulation.seed.or(defaults.seed),
            body_limit_bytes: file
                .server
                .body_limit_bytes
                .unwrap_or(defaults.body_limit_bytes),
        })
    }

    /// Override fields from environment variables that are set.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.host = host;
        }
        if let Some(port) = parse_env("PORT", "port number")? {
            self.port = port;
        }
        if let Ok(dir) = env::var("STATIC_DIR") {
            self.static_dir = PathBuf::from(dir);
        }
        if let Some(seed) = parse_env("SIMULATION_SEED", "unsigned 64-bit integer")? {
            self.seed = Some(seed);
        }
        if let Some(limit) = parse_env("BODY_LIMIT_BYTES", "byte count")? {
            self.body_limit_bytes = limit;
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }
}

fn parse_env<T: std::str::FromStr>(
    name: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv {
                name,
                expected,
                value,
            }),
        Err(_) => Ok(None),
    }
}
