//! Routes parsed commands to the matching domain handler

use crate::config::RosterConfig;
use crate::errors::RosterError;
use crate::handlers::{CourseHandler, TraineeHandler};
use crate::ids::{IdSource, RandomIds};
use crate::outcome::Outcome;
use crate::parser::{parse_command, ParsedCommand};
use crate::storage::{JsonFileStore, RosterStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct Dispatcher {
    courses: CourseHandler,
    trainees: TraineeHandler,
}

impl Dispatcher {
    pub fn new(store: Arc<dyn RosterStore>, config: &RosterConfig) -> Self {
        Self::with_id_source(store, Arc::new(RandomIds), config)
    }

    pub fn with_id_source(
        store: Arc<dyn RosterStore>,
        ids: Arc<dyn IdSource>,
        config: &RosterConfig,
    ) -> Self {
        let trainees = TraineeHandler::new(store.clone(), ids.clone(), config.ids);
        let courses = CourseHandler::new(store, trainees.clone(), ids, config.ids, config.limits);
        Self { courses, trainees }
    }

    /// Dispatcher backed by the JSON files named in the configuration.
    pub fn from_config(config: &RosterConfig) -> Self {
        let store = JsonFileStore::from_config(&config.storage);
        Self::new(Arc::new(store), config)
    }

    pub async fn execute(&self, line: &str) -> Result<Outcome, RosterError> {
        self.dispatch(&parse_command(line)).await
    }

    pub async fn dispatch(&self, command: &ParsedCommand) -> Result<Outcome, RosterError> {
        let subcommand = match command.subcommand.as_deref() {
            Some(subcommand) if !command.command.is_empty() => subcommand,
            _ => return Err(RosterError::Validation("Invalid command format".to_string())),
        };

        log::debug!("Dispatching {} {} {:?}", command.command, subcommand, command.args);

        match command.command.as_str() {
            "COURSE" => self.courses.handle(subcommand, &command.args).await,
            "TRAINEE" => self.trainees.handle(subcommand, &command.args).await,
            other => Err(RosterError::Validation(format!("Unknown command: {}", other))),
        }
    }

    pub fn courses(&self) -> &CourseHandler {
        &self.courses
    }

    pub fn trainees(&self) -> &TraineeHandler {
        &self.trainees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(Arc::new(MemoryStore::new()), &RosterConfig::default())
    }

    #[tokio::test]
    async fn test_missing_subcommand_is_format_error() {
        let err = dispatcher().execute("COURSE").await.unwrap_err();
        assert_eq!(err, RosterError::Validation("Invalid command format".to_string()));

        let err = dispatcher().execute("").await.unwrap_err();
        assert_eq!(err, RosterError::Validation("Invalid command format".to_string()));
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let err = dispatcher().execute("STUDENT ADD Ada Lovelace").await.unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: STUDENT");
    }

    #[tokio::test]
    async fn test_routes_to_both_handlers() {
        let dispatcher = dispatcher();

        let outcome = dispatcher.execute("COURSE ADD Easy introduction to React 2026-05-01").await.unwrap();
        assert!(matches!(outcome, Outcome::CourseCreated(ref c) if c.name == "Easy introduction to React"));

        let outcome = dispatcher.execute("TRAINEE ADD Ada Lovelace").await.unwrap();
        assert!(matches!(outcome, Outcome::TraineeCreated(_)));

        let err = dispatcher.execute("COURSE WRONG").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid COURSE subcommand: WRONG");
    }
}
