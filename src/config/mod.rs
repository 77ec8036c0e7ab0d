//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `RANKER_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_EMBEDDING_CACHE_CAPACITY, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_REQUEST_TIMEOUT_SECS,
};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `RANKER_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8001`.
    pub port: u16,

    /// IP address to bind to. Default: `0.0.0.0`.
    pub bind_addr: IpAddr,

    /// Directory scanned for resume PDFs. Default: `./resumes`.
    pub resume_dir: PathBuf,

    /// BERT checkpoint directory (`config.json`, `model.safetensors`, `tokenizer.json`).
    /// When unset the embedder runs in stub mode.
    pub model_path: Option<PathBuf>,

    /// Max cached embeddings. `0` disables the cache. Default: `1024`.
    pub embedding_cache_capacity: u64,

    /// Upper bound on one ranking request. Default: `120s`.
    pub request_timeout: Duration,

    /// Max accepted request body size in bytes. Default: 32 MiB.
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8001,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
            resume_dir: PathBuf::from("resumes"),
            model_path: None,
            embedding_cache_capacity: DEFAULT_EMBEDDING_CACHE_CAPACITY,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "RANKER_PORT";
    const ENV_BIND_ADDR: &'static str = "RANKER_BIND_ADDR";
    const ENV_RESUME_DIR: &'static str = "RANKER_RESUME_DIR";
    const ENV_MODEL_PATH: &'static str = "RANKER_MODEL_PATH";
    const ENV_CACHE_CAPACITY: &'static str = "RANKER_EMBEDDING_CACHE_CAPACITY";
    const ENV_REQUEST_TIMEOUT: &'static str = "RANKER_REQUEST_TIMEOUT_SECS";
    const ENV_MAX_UPLOAD: &'static str = "RANKER_MAX_UPLOAD_BYTES";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let resume_dir = Self::parse_path_from_env(Self::ENV_RESUME_DIR, defaults.resume_dir);
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let embedding_cache_capacity =
            Self::parse_u64_from_env(Self::ENV_CACHE_CAPACITY, defaults.embedding_cache_capacity);
        let request_timeout = Self::parse_timeout_from_env(defaults.request_timeout)?;
        let max_upload_bytes = Self::parse_u64_from_env(
            Self::ENV_MAX_UPLOAD,
            defaults.max_upload_bytes as u64,
        ) as usize;

        Ok(Self {
            port,
            bind_addr,
            resume_dir,
            model_path,
            embedding_cache_capacity,
            request_timeout,
            max_upload_bytes,
        })
    }

    /// Validates paths and basic invariants (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resume_dir.exists() && !self.resume_dir.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.resume_dir.clone(),
            });
        }

        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                value: "0".to_string(),
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_timeout_from_env(default: Duration) -> Result<Duration, ConfigError> {
        match env::var(Self::ENV_REQUEST_TIMEOUT) {
            Ok(value) => {
                let secs: u64 = value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidTimeout {
                        value: value.clone(),
                    })?;

                if secs == 0 {
                    return Err(ConfigError::InvalidTimeout { value });
                }

                Ok(Duration::from_secs(secs))
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }
}
