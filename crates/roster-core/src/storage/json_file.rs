//! Flat JSON files, one array per entity kind
//!
//! A missing file is created as `[]` on first load. Anything that is not a
//! JSON array of well-formed records is reported as corruption instead of
//! being overwritten.

use crate::config::StorageConfig;
use crate::core_types::{Course, EntityKind, Trainee};
use crate::errors::RosterError;
use crate::storage::RosterStore;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

const EMPTY_COLLECTION: &str = "[]";

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    courses_path: PathBuf,
    trainees_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(courses_path: PathBuf, trainees_path: PathBuf) -> Self {
        Self {
            courses_path,
            trainees_path,
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.courses_path(), config.trainees_path())
    }

    pub fn path_for(&self, kind: EntityKind) -> &Path {
        match kind {
            EntityKind::Course => &self.courses_path,
            EntityKind::Trainee => &self.trainees_path,
        }
    }

    async fn load<T: DeserializeOwned>(&self, kind: EntityKind) -> Result<Vec<T>, RosterError> {
        let path = self.path_for(kind);

        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No {} data at {}, initializing", kind, path.display());
                write_body(path, EMPTY_COLLECTION, kind).await?;
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(RosterError::Persistence(format!(
                    "{} data: could not read {}: {}",
                    kind,
                    path.display(),
                    e
                )))
            }
        };

        let corruption = |reason: String| {
            log::warn!("Corrupted {} data at {}: {}", kind, path.display(), reason);
            RosterError::Corruption {
                path: path.display().to_string(),
                reason,
            }
        };

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| corruption(e.to_string()))?;
        if !value.is_array() {
            return Err(corruption(format!("{} data must be an array", kind)));
        }
        let records: Vec<T> =
            serde_json::from_value(value).map_err(|e| corruption(e.to_string()))?;

        log::debug!("Loaded {} {} records from {}", records.len(), kind, path.display());
        Ok(records)
    }

    async fn save<T: Serialize>(&self, kind: EntityKind, records: &[T]) -> Result<(), RosterError> {
        let path = self.path_for(kind);
        let body = serde_json::to_string_pretty(records)
            .map_err(|e| RosterError::Persistence(format!("{} data: {}", kind, e)))?;
        write_body(path, &body, kind).await?;
        log::debug!("Saved {} {} records to {}", records.len(), kind, path.display());
        Ok(())
    }
}

async fn write_body(path: &Path, body: &str, kind: EntityKind) -> Result<(), RosterError> {
    let failed = |target: &Path, e: std::io::Error| {
        RosterError::Persistence(format!("{} data: {}: {}", kind, target.display(), e))
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await.map_err(|e| failed(parent, e))?;
        }
    }
    fs::write(path, body).await.map_err(|e| failed(path, e))
}

#[async_trait]
impl RosterStore for JsonFileStore {
    async fn load_courses(&self) -> Result<Vec<Course>, RosterError> {
        self.load(EntityKind::Course).await
    }

    async fn save_courses(&self, courses: &[Course]) -> Result<(), RosterError> {
        self.save(EntityKind::Course, courses).await
    }

    async fn load_trainees(&self) -> Result<Vec<Trainee>, RosterError> {
        self.load(EntityKind::Trainee).await
    }

    async fn save_trainees(&self, trainees: &[Trainee]) -> Result<(), RosterError> {
        self.save(EntityKind::Trainee, trainees).await
    }
}
