//! Configuration System
//!
//! Settings for the static host binary, loaded from a TOML file and then
//! overridden by `CS_BRANCH_*` environment variables. Command-line flags are
//! applied last by the binary itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Static host configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built UI bundle
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,

    /// Document served for any path without a matching file
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("cs-branch-ui/dist")
}

fn default_index_file() -> String {
    "index.html".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
            index_file: default_index_file(),
        }
    }
}

impl ServerConfig {
    /// Socket address to bind
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed bind address; `host` must be an IP address
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.addr().parse().map_err(|_| ConfigError::InvalidValue {
            key: "server.host",
            value: self.host.clone(),
        })
    }

    /// Full path of the fallback document
    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join(&self.index_file)
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, for development
    #[default]
    Pretty,
    /// One JSON object per line, for log shippers
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                key: "logging.format",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level for this crate; `RUST_LOG` takes precedence when set
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub fn filter_directive(&self) -> String {
        format!("cs_branch={level},tower_http={level}", level = self.level)
    }
}

/// Something that happened while resolving the config
///
/// Resolution runs before the log subscriber exists, so these are collected
/// and handed to the caller to log once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigNote {
    Loaded(PathBuf),
    Skipped { path: PathBuf, error: String },
    Defaults,
    IgnoredOverride { key: &'static str, value: String },
}

impl ConfigNote {
    /// Emit through `tracing` at the matching level
    pub fn log(&self) {
        match self {
            ConfigNote::Loaded(path) => tracing::info!("Loaded config from {:?}", path),
            ConfigNote::Skipped { path, error } => {
                tracing::warn!("Failed to load config from {:?}: {}", path, error)
            }
            ConfigNote::Defaults => tracing::info!("Using default config with environment overrides"),
            ConfigNote::IgnoredOverride { key, value } => {
                tracing::warn!("Ignoring invalid {}: {}", key, value)
            }
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, ConfigNote::Skipped { .. } | ConfigNote::IgnoredOverride { .. })
    }
}

/// A resolved config plus what happened while building it
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub config: Config,
    pub notes: Vec<ConfigNote>,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Files searched when no explicit path is given, in order
    pub fn search_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("cs-branch").join("config.toml")),
            Some(PathBuf::from("/etc/cs-branch/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load the explicit `path` if given (failing loudly), otherwise the first
    /// readable default location, otherwise defaults. Environment overrides
    /// are applied in every case.
    pub fn resolve(path: Option<&Path>) -> Result<Resolved, ConfigError> {
        Self::resolve_with(path, &Self::search_paths(), |key| std::env::var(key).ok())
    }

    /// [`Config::resolve`] with explicit search paths and variable lookup
    pub fn resolve_with(
        path: Option<&Path>,
        search_paths: &[PathBuf],
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Resolved, ConfigError> {
        let mut notes = Vec::new();

        let mut config = match path {
            Some(path) => {
                let config = Self::load(path)?;
                notes.push(ConfigNote::Loaded(path.to_path_buf()));
                config
            }
            None => Self::load_first(search_paths, &mut notes),
        };

        notes.extend(config.apply_overrides(lookup));
        Ok(Resolved { config, notes })
    }

    /// First default location that loads, falling back to defaults
    fn load_first(search_paths: &[PathBuf], notes: &mut Vec<ConfigNote>) -> Self {
        for path in search_paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(config) => {
                    notes.push(ConfigNote::Loaded(path.clone()));
                    return config;
                }
                Err(e) => notes.push(ConfigNote::Skipped {
                    path: path.clone(),
                    error: e.to_string(),
                }),
            }
        }

        notes.push(ConfigNote::Defaults);
        Config::default()
    }

    /// Apply `CS_BRANCH_*` overrides from any key lookup. Unparseable values
    /// are skipped and reported.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<ConfigNote> {
        let mut ignored = Vec::new();

        if let Some(host) = lookup("CS_BRANCH_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("CS_BRANCH_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => ignored.push(ConfigNote::IgnoredOverride {
                    key: "CS_BRANCH_PORT",
                    value: port,
                }),
            }
        }
        if let Some(dist_dir) = lookup("CS_BRANCH_DIST_DIR") {
            self.server.dist_dir = PathBuf::from(dist_dir);
        }

        if let Some(level) = lookup("CS_BRANCH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("CS_BRANCH_LOG_FORMAT") {
            match format.parse() {
                Ok(f) => self.logging.format = f,
                Err(_) => ignored.push(ConfigNote::IgnoredOverride {
                    key: "CS_BRANCH_LOG_FORMAT",
                    value: format,
                }),
            }
        }

        ignored
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# IEEE CS Student Branch site host configuration
#
# Environment variables override these settings:
# - CS_BRANCH_HOST
# - CS_BRANCH_PORT
# - CS_BRANCH_DIST_DIR
# - CS_BRANCH_LOG_LEVEL
# - CS_BRANCH_LOG_FORMAT

[server]
# IP address to bind
host = "0.0.0.0"
port = 8084

# Built UI bundle (output of `trunk build --release`)
dist_dir = "cs-branch-ui/dist"

# Served for every path that is not a file in dist_dir
index_file = "index.html"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.addr(), "0.0.0.0:8084");
        assert_eq!(config.server.index_path(), PathBuf::from("cs-branch-ui/dist/index.html"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9000\n\n[logging]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[server\nport = ").unwrap();
        assert!(matches!(Config::load(&broken), Err(ConfigError::Parse { .. })));
        assert!(Config::resolve_with(Some(&broken), &[], |_| None).is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("CS_BRANCH_HOST", "127.0.0.1"),
            ("CS_BRANCH_PORT", "3000"),
            ("CS_BRANCH_DIST_DIR", "/srv/site"),
            ("CS_BRANCH_LOG_FORMAT", "JSON"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        let ignored = config.apply_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert!(ignored.is_empty());
        assert_eq!(config.server.addr(), "127.0.0.1:3000");
        assert_eq!(config.server.dist_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_overrides_are_skipped() {
        let mut config = Config::default();
        let ignored = config.apply_overrides(|k| match k {
            "CS_BRANCH_PORT" => Some("eighty".to_string()),
            "CS_BRANCH_LOG_FORMAT" => Some("xml".to_string()),
            _ => None,
        });
        assert_eq!(config, Config::default());
        assert_eq!(
            ignored,
            vec![
                ConfigNote::IgnoredOverride {
                    key: "CS_BRANCH_PORT",
                    value: "eighty".to_string(),
                },
                ConfigNote::IgnoredOverride {
                    key: "CS_BRANCH_LOG_FORMAT",
                    value: "xml".to_string(),
                },
            ]
        );
        assert!(ignored.iter().all(ConfigNote::is_warning));
    }

    #[test]
    fn test_broken_default_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[server\nport = ").unwrap();
        let good = dir.path().join("good.toml");
        std::fs::write(&good, "[server]\nport = 9100\n").unwrap();

        let resolved = Config::resolve_with(None, &[broken.clone(), good.clone()], |k| {
            (k == "CS_BRANCH_PORT").then(|| "nope".to_string())
        })
        .unwrap();

        assert_eq!(resolved.config.server.port, 9100);
        assert!(matches!(&resolved.notes[0], ConfigNote::Skipped { path, .. } if *path == broken));
        assert_eq!(resolved.notes[1], ConfigNote::Loaded(good));
        assert!(resolved.notes[2].is_warning());
        assert_eq!(resolved.notes.len(), 3);
    }

    #[test]
    fn test_no_files_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = Config::resolve_with(None, &[dir.path().join("absent.toml")], |_| None).unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.notes, vec![ConfigNote::Defaults]);
    }

    #[test]
    fn test_filter_directive() {
        let logging = LoggingConfig {
            level: "debug".to_string(),
            ..Default::default()
        };
        assert_eq!(logging.filter_directive(), "cs_branch=debug,tower_http=debug");
    }

    #[test]
    fn test_socket_addr() {
        assert!(ServerConfig::default().socket_addr().is_ok());
        let bad = ServerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };
        assert!(bad.socket_addr().is_err());
    }
}
