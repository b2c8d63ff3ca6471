use super::Configuration;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("malformed config {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Holds the last configuration that loaded successfully.
///
/// Readers take a snapshot under the shared lock; `replace` swaps the whole
/// tree under the exclusive lock, so nobody observes a half-built value.
#[derive(Debug, Default)]
pub struct ConfigStore {
    current: RwLock<Configuration>,
}

impl ConfigStore {
    pub fn new(initial: Configuration) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    pub fn load(path: &Path) -> Result<Configuration, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            _ => ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn replace(&self, config: Configuration) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = config;
    }

    pub fn snapshot(&self) -> Configuration {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Loads `path` and installs it. On error the current configuration is
    /// left untouched.
    pub fn reload(&self, path: &Path) -> Result<Configuration, ConfigError> {
        let config = Self::load(path)?;
        self.replace(config.clone());
        Ok(config)
    }
}
