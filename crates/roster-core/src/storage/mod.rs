//! Backing stores for the course and trainee collections
//!
//! Handlers receive a store through `Arc<dyn RosterStore>` and perform a full
//! load-mutate-save cycle per command. Stores hand out owned copies, so nothing
//! is shared between commands except the persisted data itself.

pub mod json_file;
pub mod memory;

use crate::core_types::{Course, Trainee};
use crate::errors::RosterError;
use async_trait::async_trait;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

#[async_trait]
pub trait RosterStore: Send + Sync {
    async fn load_courses(&self) -> Result<Vec<Course>, RosterError>;
    async fn save_courses(&self, courses: &[Course]) -> Result<(), RosterError>;
    async fn load_trainees(&self) -> Result<Vec<Trainee>, RosterError>;
    async fn save_trainees(&self, trainees: &[Trainee]) -> Result<(), RosterError>;
}
