//! Record types persisted in the two backing collections
//!
//! Courses reference trainees by id only. Nothing here enforces that the
//! referenced trainees still exist; enrollment checks happen in the course
//! handler at the moment of a join.

use serde::{Deserialize, Serialize};
use std::fmt;

pub type RecordId = u32;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Trainee {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
}

impl Trainee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: RecordId,
    pub name: String,
    /// `yyyy-MM-dd`, checked against the pattern only.
    pub start_date: String,
    #[serde(default)]
    pub participants: Vec<RecordId>,
}

impl Course {
    pub fn has_participant(&self, trainee_id: RecordId) -> bool {
        self.participants.contains(&trainee_id)
    }
}

/// The two collections known to the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Course,
    Trainee,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Course => write!(f, "course"),
            EntityKind::Trainee => write!(f, "trainee"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_records_use_camel_case_fields() {
        let course = Course {
            id: 7,
            name: "Basic HTML + CSS".to_string(),
            start_date: "2026-05-01".to_string(),
            participants: vec![1, 2],
        };
        let value = serde_json::to_value(&course).unwrap();
        assert_eq!(
            value,
            json!({"id": 7, "name": "Basic HTML + CSS", "startDate": "2026-05-01", "participants": [1, 2]})
        );

        let trainee: Trainee =
            serde_json::from_value(json!({"id": 3, "firstName": "Ada", "lastName": "Lovelace"}))
                .unwrap();
        assert_eq!(trainee.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_missing_participants_default_to_empty() {
        let course: Course =
            serde_json::from_value(json!({"id": 1, "name": "Rust", "startDate": "2026-01-01"}))
                .unwrap();
        assert!(course.participants.is_empty());
        assert!(!course.has_participant(1));
    }
}
