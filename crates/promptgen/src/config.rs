//! Generator configuration with sensible defaults.
//!
//! [`GeneratorConfig`] can be loaded from an optional TOML file; every field
//! falls back to its default when absent. Command-line flags override the
//! loaded values in the binaries.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::store::FileStore;

/// How long the unlock confirmation stays visible.
pub const DEFAULT_NOTICE_SECS: u64 = 5;

/// Configuration for a generator session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// JSON file backing the access flag.
    /// Default: `<data_dir>/promptgen/state.json`.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Seconds the unlock confirmation stays on screen. Default: `5`.
    #[serde(default = "default_notice_secs")]
    pub notice_secs: u64,
}

fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("promptgen"))
        .unwrap_or_else(|| PathBuf::from(".promptgen"))
        .join("state.json")
}

fn default_notice_secs() -> u64 {
    DEFAULT_NOTICE_SECS
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            notice_secs: DEFAULT_NOTICE_SECS,
        }
    }
}

impl GeneratorConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Load `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_secs(self.notice_secs)
    }

    /// Open the file store this config points at.
    pub fn open_store(&self) -> FileStore {
        FileStore::new(&self.store_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.notice_duration(), Duration::from_secs(5));
        assert_eq!(config.store_path.file_name().unwrap(), "state.json");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config =
            GeneratorConfig::from_toml("notice_secs = 2\n", Path::new("cfg.toml")).unwrap();
        assert_eq!(config.notice_secs, 2);
        assert_eq!(config.store_path, GeneratorConfig::default().store_path);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("promptgen.toml");
        std::fs::write(&path, "store_path = \"/tmp/pg/state.json\"\n").unwrap();

        let config = GeneratorConfig::load(&path).unwrap();
        assert_eq!(config.store_path, PathBuf::from("/tmp/pg/state.json"));
        assert_eq!(config.notice_secs, DEFAULT_NOTICE_SECS);
    }

    #[test]
    fn bad_toml_reports_path() {
        let err = GeneratorConfig::from_toml("notice_secs = \"soon\"", Path::new("bad.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = GeneratorConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_or_default_without_path() {
        assert_eq!(GeneratorConfig::load_or_default(None).unwrap(), GeneratorConfig::default());
    }
}
