//! In-process store used by tests

use crate::core_types::{Course, Trainee};
use crate::errors::RosterError;
use crate::storage::RosterStore;
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemoryStore {
    courses: Mutex<Vec<Course>>,
    trainees: Mutex<Vec<Trainee>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(courses: Vec<Course>, trainees: Vec<Trainee>) -> Self {
        Self {
            courses: Mutex::new(courses),
            trainees: Mutex::new(trainees),
        }
    }
}

fn poisoned() -> RosterError {
    RosterError::Persistence("in-memory store lock poisoned".to_string())
}

#[async_trait]
impl RosterStore for MemoryStore {
    async fn load_courses(&self) -> Result<Vec<Course>, RosterError> {
        Ok(self.courses.lock().map_err(|_| poisoned())?.clone())
    }

    async fn save_courses(&self, courses: &[Course]) -> Result<(), RosterError> {
        *self.courses.lock().map_err(|_| poisoned())? = courses.to_vec();
        Ok(())
    }

    async fn load_trainees(&self) -> Result<Vec<Trainee>, RosterError> {
        Ok(self.trainees.lock().map_err(|_| poisoned())?.clone())
    }

    async fn save_trainees(&self, trainees: &[Trainee]) -> Result<(), RosterError> {
        *self.trainees.lock().map_err(|_| poisoned())? = trainees.to_vec();
        Ok(())
    }
}
