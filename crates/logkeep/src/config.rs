use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tokio::fs;

// ============================================================================
// Config (root)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_saphyr::Error),
}

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// A missing file is not an error and yields the defaults.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path).await {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ConfigError::Io(e)),
        };
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_saphyr::from_str(contents)?)
    }

    /// Resolved path of the log file.
    ///
    /// Relative paths are taken relative to the config file directory.
    pub fn logs_path(&self, config_path: &Path) -> PathBuf {
        let raw = self
            .storage
            .path
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_LOGS_FILE));
        resolve_path(config_path, raw)
    }
}

/// Resolve a path relative to the config file directory.
///
/// If the path is absolute, it is returned as-is.
pub fn resolve_path(config_path: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }

    let config_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    config_dir.join(path)
}

// ============================================================================
// Defaults
// ============================================================================

/// Default config file name.
pub const DEFAULT_CONFIG_FILE: &str = "logkeep.yaml";
/// Default log file name (relative to the config file).
pub const DEFAULT_LOGS_FILE: &str = "logs.json";

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_body_bytes() -> usize {
    10 * 1024 * 1024
}

// ============================================================================
// ServerConfig
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Largest accepted request body, in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

// ============================================================================
// StorageConfig
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.request_timeout_seconds, 30);
        assert_eq!(config.server.max_body_bytes, 10 * 1024 * 1024);
        assert!(config.storage.path.is_none());
    }

    #[test]
    fn parse_partial_config_keeps_defaults() {
        let config = Config::parse(
            r#"
server:
  port: 8081
storage:
  path: data/logs.json
"#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.storage.path, Some(PathBuf::from("data/logs.json")));
    }

    #[test]
    fn parse_empty_document() {
        let config = Config::parse("  \n").unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn parse_rejects_wrong_types() {
        let err = Config::parse("server:\n  port: not-a-port\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[tokio::test]
    async fn load_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path().join("absent.yaml")).await.unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[tokio::test]
    async fn load_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logkeep.yaml");
        std::fs::write(&path, "server:\n  host: 0.0.0.0\n").unwrap();

        let config = Config::load(&path).await.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn logs_path_defaults_next_to_config() {
        let config = Config::default();
        assert_eq!(
            config.logs_path(Path::new("/etc/logkeep/logkeep.yaml")),
            PathBuf::from("/etc/logkeep/logs.json")
        );
        assert_eq!(
            config.logs_path(Path::new("logkeep.yaml")),
            PathBuf::from("logs.json")
        );
    }

    #[test]
    fn resolve_path_keeps_absolute() {
        assert_eq!(
            resolve_path(Path::new("/etc/logkeep.yaml"), Path::new("/var/logs.json")),
            PathBuf::from("/var/logs.json")
        );
    }

    #[test]
    fn resolve_path_joins_relative() {
        assert_eq!(
            resolve_path(Path::new("/etc/logkeep/logkeep.yaml"), Path::new("data/logs.json")),
            PathBuf::from("/etc/logkeep/data/logs.json")
        );
    }
}
