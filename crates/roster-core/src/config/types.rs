//! Configuration type definitions for the roster manager
//!
//! Every field has a default so an absent or partial YAML file still yields a
//! usable configuration. The defaults reproduce the classic layout: two JSON
//! files under `./data`, 20 seats per course and at most 5 courses per trainee.

use crate::errors::RosterError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RosterConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub ids: IdConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_courses_file")]
    pub courses_file: String,
    #[serde(default = "default_trainees_file")]
    pub trainees_file: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LimitsConfig {
    #[serde(default = "default_course_capacity")]
    pub course_capacity: usize,
    #[serde(default = "default_max_courses_per_trainee")]
    pub max_courses_per_trainee: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdConfig {
    /// Ids are drawn from `[0, upper_bound)`.
    #[serde(default = "default_upper_bound")]
    pub upper_bound: u32,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_courses_file() -> String {
    "courses.json".to_string()
}

fn default_trainees_file() -> String {
    "trainees.json".to_string()
}

fn default_course_capacity() -> usize {
    20
}

fn default_max_courses_per_trainee() -> usize {
    5
}

fn default_upper_bound() -> u32 {
    100_000
}

fn default_max_attempts() -> usize {
    10
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            courses_file: default_courses_file(),
            trainees_file: default_trainees_file(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            course_capacity: default_course_capacity(),
            max_courses_per_trainee: default_max_courses_per_trainee(),
        }
    }
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            upper_bound: default_upper_bound(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl StorageConfig {
    pub fn courses_path(&self) -> PathBuf {
        self.data_dir.join(&self.courses_file)
    }

    pub fn trainees_path(&self) -> PathBuf {
        self.data_dir.join(&self.trainees_file)
    }
}

impl RosterConfig {
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.storage.courses_file.trim().is_empty() || self.storage.trainees_file.trim().is_empty() {
            return Err(RosterError::Config(
                "storage file names must not be empty".to_string(),
            ));
        }
        if self.storage.courses_file == self.storage.trainees_file {
            return Err(RosterError::Config(
                "courses and trainees must be stored in different files".to_string(),
            ));
        }
        if self.limits.course_capacity == 0 {
            return Err(RosterError::Config(
                "limits.course_capacity must be greater than 0".to_string(),
            ));
        }
        if self.limits.max_courses_per_trainee == 0 {
            return Err(RosterError::Config(
                "limits.max_courses_per_trainee must be greater than 0".to_string(),
            ));
        }
        if self.ids.upper_bound == 0 {
            return Err(RosterError::Config(
                "ids.upper_bound must be greater than 0".to_string(),
            ));
        }
        if self.ids.max_attempts == 0 {
            return Err(RosterError::Config(
                "ids.max_attempts must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
