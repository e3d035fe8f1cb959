//! Configuration loader for YAML files and environment resolution

use crate::config::types::RosterConfig;
use crate::errors::RosterError;
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Overrides `storage.data_dir` when set.
pub const DATA_DIR_ENV: &str = "ROSTER_DATA_DIR";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from `path` when given and present, otherwise start from defaults.
    ///
    /// An explicitly requested file that does not exist is an error; the
    /// implicit default location is allowed to be missing.
    pub async fn load(path: Option<&Path>) -> Result<RosterConfig, RosterError> {
        match path {
            Some(path) => Self::from_file(path).await,
            None => {
                let mut config = RosterConfig::default();
                Self::resolve_environment(&mut config);
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<RosterConfig, RosterError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).await.map_err(|e| {
            RosterError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        log::debug!("Loaded configuration file {}", path.display());
        Self::from_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_str(content: &str) -> Result<RosterConfig, RosterError> {
        // An empty document deserializes to null, which is not a mapping.
        let mut config: RosterConfig = if content.trim().is_empty() {
            RosterConfig::default()
        } else {
            serde_yaml::from_str(content)?
        };

        Self::resolve_environment(&mut config);
        config.validate()?;

        Ok(config)
    }

    fn resolve_environment(config: &mut RosterConfig) {
        if let Ok(dir) = env::var(DATA_DIR_ENV) {
            if !dir.trim().is_empty() {
                log::debug!("Using data directory from {}: {}", DATA_DIR_ENV, dir);
                config.storage.data_dir = PathBuf::from(dir);
            }
        }
    }
}
