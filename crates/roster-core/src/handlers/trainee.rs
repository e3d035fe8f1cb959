//! Trainee operations
//!
//! Each call loads a fresh copy of the trainee collection, applies one change
//! and writes the whole collection back. The course collection is only read,
//! to list the courses a trainee is enrolled in.

use crate::config::IdConfig;
use crate::core_types::{RecordId, Trainee};
use crate::errors::RosterError;
use crate::handlers::{arg, is_blank, parse_id};
use crate::ids::{allocate_id, IdSource};
use crate::outcome::Outcome;
use crate::storage::RosterStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct TraineeHandler {
    store: Arc<dyn RosterStore>,
    ids: Arc<dyn IdSource>,
    id_config: IdConfig,
}

/// Finds a trainee in an already loaded collection.
pub fn trainee_by_id(trainees: &[Trainee], id: RecordId) -> Result<&Trainee, RosterError> {
    trainees
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| RosterError::NotFound(format!("Trainee with ID {} doesn't exist", id)))
}

impl TraineeHandler {
    pub fn new(store: Arc<dyn RosterStore>, ids: Arc<dyn IdSource>, id_config: IdConfig) -> Self {
        Self {
            store,
            ids,
            id_config,
        }
    }

    pub async fn handle(&self, subcommand: &str, args: &[String]) -> Result<Outcome, RosterError> {
        match subcommand {
            "ADD" => self.add(arg(args, 0), arg(args, 1)).await,
            "UPDATE" => self.update(arg(args, 0), arg(args, 1), arg(args, 2)).await,
            "DELETE" => self.delete(arg(args, 0)).await,
            "GET" => self.get(arg(args, 0)).await,
            "GETALL" => self.get_all().await,
            other => Err(RosterError::Validation(format!(
                "Invalid TRAINEE subcommand: {}",
                other
            ))),
        }
    }

    pub async fn add(&self, first_name: &str, last_name: &str) -> Result<Outcome, RosterError> {
        if is_blank(first_name) || is_blank(last_name) {
            return Err(RosterError::Validation(
                "Must provide first and last name".to_string(),
            ));
        }

        let mut trainees = self.store.load_trainees().await?;

        if trainees
            .iter()
            .any(|t| t.first_name == first_name && t.last_name == last_name)
        {
            return Err(RosterError::Conflict(format!(
                "A trainee named {} {} already exists",
                first_name, last_name
            )));
        }

        let id = allocate_id(self.ids.as_ref(), &self.id_config, |candidate| {
            trainees.iter().any(|t| t.id == candidate)
        })?;

        let trainee = Trainee {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };
        trainees.push(trainee.clone());
        self.store.save_trainees(&trainees).await?;

        log::debug!("Created trainee {}", id);
        Ok(Outcome::TraineeCreated(trainee))
    }

    pub async fn update(
        &self,
        id: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Outcome, RosterError> {
        if is_blank(id) || is_blank(first_name) || is_blank(last_name) {
            return Err(RosterError::Validation(
                "Must provide ID, first name and last name".to_string(),
            ));
        }
        let id = parse_id(id, "trainee ID")?;

        let mut trainees = self.store.load_trainees().await?;
        let index = trainees
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| RosterError::NotFound(format!("Trainee with ID {} doesn't exist", id)))?;

        if trainees
            .iter()
            .any(|t| t.id != id && t.first_name == first_name && t.last_name == last_name)
        {
            return Err(RosterError::Conflict(format!(
                "A trainee named {} {} already exists",
                first_name, last_name
            )));
        }

        let trainee = &mut trainees[index];
        trainee.first_name = first_name.to_string();
        trainee.last_name = last_name.to_string();
        let updated = trainee.clone();

        self.store.save_trainees(&trainees).await?;

        log::debug!("Updated trainee {}", id);
        Ok(Outcome::TraineeUpdated(updated))
    }

    pub async fn delete(&self, id: &str) -> Result<Outcome, RosterError> {
        if is_blank(id) {
            return Err(RosterError::Validation("Must provide trainee ID".to_string()));
        }
        let id = parse_id(id, "trainee ID")?;

        let mut trainees = self.store.load_trainees().await?;
        let removed = trainee_by_id(&trainees, id)?.clone();
        trainees.retain(|t| t.id != id);
        self.store.save_trainees(&trainees).await?;

        // Course participant lists keep the id; there is no cascade.
        log::debug!("Deleted trainee {}", id);
        Ok(Outcome::TraineeDeleted(removed))
    }

    pub async fn get(&self, id: &str) -> Result<Outcome, RosterError> {
        if is_blank(id) {
            return Err(RosterError::Validation("Must provide trainee ID".to_string()));
        }
        let id = parse_id(id, "trainee ID")?;

        let trainee = self.find(id).await?;
        let courses = self
            .store
            .load_courses()
            .await?
            .into_iter()
            .filter(|c| c.has_participant(id))
            .map(|c| c.name)
            .collect();

        Ok(Outcome::TraineeDetail { trainee, courses })
    }

    pub async fn get_all(&self) -> Result<Outcome, RosterError> {
        let mut trainees = self.store.load_trainees().await?;
        sort_by_last_name(&mut trainees);
        Ok(Outcome::TraineeList(trainees))
    }

    /// Lookup used by the course handler when enrolling.
    pub async fn find(&self, id: RecordId) -> Result<Trainee, RosterError> {
        let trainees = self.store.load_trainees().await?;
        trainee_by_id(&trainees, id).cloned()
    }

    pub async fn all(&self) -> Result<Vec<Trainee>, RosterError> {
        self.store.load_trainees().await
    }
}

/// Case-insensitive order first, exact order to break ties. Stable.
fn sort_by_last_name(trainees: &mut [Trainee]) {
    trainees.sort_by(|a, b| {
        a.last_name
            .to_lowercase()
            .cmp(&b.last_name.to_lowercase())
            .then_with(|| a.last_name.cmp(&b.last_name))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::Course;
    use crate::ids::test_support::ScriptedIds;
    use crate::ids::RandomIds;
    use crate::storage::MemoryStore;

    fn trainee(id: RecordId, first: &str, last: &str) -> Trainee {
        Trainee {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    fn handler_with(store: Arc<MemoryStore>) -> TraineeHandler {
        TraineeHandler::new(store, Arc::new(RandomIds), IdConfig::default())
    }

    #[tokio::test]
    async fn test_add_persists_trainee() {
        let store = Arc::new(MemoryStore::new());
        let handler = handler_with(store.clone());

        let outcome = handler.add("Ada", "Lovelace").await.unwrap();
        let stored = store.load_trainees().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(outcome, Outcome::TraineeCreated(stored[0].clone()));
        assert!(stored[0].id < 100_000);
    }

    #[tokio::test]
    async fn test_add_requires_both_names() {
        let handler = handler_with(Arc::new(MemoryStore::new()));

        assert!(matches!(handler.add("", "Lovelace").await, Err(RosterError::Validation(_))));
        assert!(matches!(handler.add("Ada", "  ").await, Err(RosterError::Validation(_))));
    }

    #[tokio::test]
    async fn test_duplicate_name_conflicts() {
        let store = Arc::new(MemoryStore::new());
        let handler = handler_with(store.clone());

        handler.add("Ada", "Lovelace").await.unwrap();
        let err = handler.add("Ada", "Lovelace").await.unwrap_err();
        assert!(matches!(err, RosterError::Conflict(_)));
        assert_eq!(store.load_trainees().await.unwrap().len(), 1);

        // Same last name alone is fine.
        handler.add("Augusta", "Lovelace").await.unwrap();
    }

    #[tokio::test]
    async fn test_id_collision_is_retried_internally() {
        let store = Arc::new(MemoryStore::with_records(vec![], vec![trainee(7, "Alan", "Turing")]));
        let handler = TraineeHandler::new(
            store.clone(),
            Arc::new(ScriptedIds::new(vec![7, 8])),
            IdConfig::default(),
        );

        let outcome = handler.add("Grace", "Hopper").await.unwrap();
        assert_eq!(outcome, Outcome::TraineeCreated(trainee(8, "Grace", "Hopper")));
    }

    #[tokio::test]
    async fn test_update_with_id_zero() {
        let store = Arc::new(MemoryStore::with_records(vec![], vec![trainee(0, "Alan", "Turing")]));
        let handler = handler_with(store.clone());

        handler.update("0", "Alan M.", "Turing").await.unwrap();
        assert_eq!(store.load_trainees().await.unwrap()[0].first_name, "Alan M.");
    }

    #[tokio::test]
    async fn test_update_validation_and_missing() {
        let store = Arc::new(MemoryStore::with_records(vec![], vec![trainee(1, "Alan", "Turing")]));
        let handler = handler_with(store);

        assert!(matches!(
            handler.update("1", "Alan", "").await,
            Err(RosterError::Validation(_))
        ));
        assert!(matches!(
            handler.update("2", "Alan", "Turing").await,
            Err(RosterError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_cannot_take_another_trainees_name() {
        let records = vec![trainee(1, "Ada", "Lovelace"), trainee(2, "Alan", "Turing")];
        let store = Arc::new(MemoryStore::with_records(vec![], records.clone()));
        let handler = handler_with(store.clone());

        let err = handler.update("2", "Ada", "Lovelace").await.unwrap_err();
        assert!(matches!(err, RosterError::Conflict(_)));
        assert_eq!(store.load_trainees().await.unwrap(), records);

        // Keeping one's own name is not a conflict.
        let outcome = handler.update("1", "Ada", "Lovelace").await.unwrap();
        assert_eq!(outcome.to_string(), "UPDATED: 1 Ada Lovelace");
        assert_eq!(store.load_trainees().await.unwrap(), records);
    }

    #[tokio::test]
    async fn test_delete_missing_leaves_collection_unchanged() {
        let records = vec![trainee(1, "Alan", "Turing"), trainee(2, "Grace", "Hopper")];
        let store = Arc::new(MemoryStore::with_records(vec![], records.clone()));
        let handler = handler_with(store.clone());

        let err = handler.delete("3").await.unwrap_err();
        assert_eq!(err, RosterError::NotFound("Trainee with ID 3 doesn't exist".to_string()));
        assert_eq!(store.load_trainees().await.unwrap(), records);

        let outcome = handler.delete("1").await.unwrap();
        assert_eq!(outcome.to_string(), "DELETED: 1 Alan Turing");
        assert_eq!(store.load_trainees().await.unwrap(), vec![trainee(2, "Grace", "Hopper")]);
    }

    #[tokio::test]
    async fn test_get_lists_enrolled_courses() {
        let courses = vec![
            Course {
                id: 10,
                name: "JavaScript".to_string(),
                start_date: "2026-01-01".to_string(),
                participants: vec![1, 2],
            },
            Course {
                id: 11,
                name: "HTML".to_string(),
                start_date: "2026-02-01".to_string(),
                participants: vec![2],
            },
            Course {
                id: 12,
                name: "CSS".to_string(),
                start_date: "2026-03-01".to_string(),
                participants: vec![1],
            },
        ];
        let store = Arc::new(MemoryStore::with_records(courses, vec![trainee(1, "Alan", "Turing")]));
        let handler = handler_with(store);

        let outcome = handler.get("1").await.unwrap();
        assert_eq!(outcome.to_string(), "1 Alan Turing\nCourses: JavaScript, CSS");
    }

    #[tokio::test]
    async fn test_get_all_sorts_by_last_name() {
        let records = vec![
            trainee(1, "Alan", "Turing"),
            trainee(2, "Grace", "hopper"),
            trainee(3, "Ada", "Lovelace"),
            trainee(4, "Edsger", "Dijkstra"),
        ];
        let store = Arc::new(MemoryStore::with_records(vec![], records));
        let handler = handler_with(store);

        match handler.get_all().await.unwrap() {
            Outcome::TraineeList(list) => {
                let names: Vec<&str> = list.iter().map(|t| t.last_name.as_str()).collect();
                assert_eq!(names, vec!["Dijkstra", "hopper", "Lovelace", "Turing"]);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_subcommand() {
        let handler = handler_with(Arc::new(MemoryStore::new()));
        let err = handler.handle("JOIN", &[]).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid TRAINEE subcommand: JOIN");
    }
}
