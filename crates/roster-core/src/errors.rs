//! Error types for every failure a roster command can produce
//!
//! Each variant maps to one class of violated condition so the dispatcher can
//! decide how to present it. Domain errors (validation, lookup, conflicts and
//! capacity) only affect the command that raised them. Corruption of a backing
//! store is reported separately because it means the stored data for that
//! entity kind can no longer be trusted.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Capacity(String),
    #[error("Data file is corrupted. Please fix JSON manually: {path} ({reason})")]
    Corruption { path: String, reason: String },
    #[error("Failed to save {0}")]
    Persistence(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RosterError {
    /// Short label used when the error is presented to the operator.
    pub fn kind(&self) -> &'static str {
        match self {
            RosterError::Validation(_) => "validation",
            RosterError::NotFound(_) => "not found",
            RosterError::Conflict(_) => "conflict",
            RosterError::Capacity(_) => "capacity",
            RosterError::Corruption { .. } => "corruption",
            RosterError::Persistence(_) => "persistence",
            RosterError::Config(_) => "config",
        }
    }

    /// Whether normal operation on the affected entity kind should stop.
    pub fn is_fatal_for_entity(&self) -> bool {
        matches!(self, RosterError::Corruption { .. })
    }
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        RosterError::Persistence(err.to_string())
    }
}

impl From<serde_yaml::Error> for RosterError {
    fn from(err: serde_yaml::Error) -> Self {
        RosterError::Config(format!("Failed to parse YAML config: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_corruption_is_fatal() {
        let corrupted = RosterError::Corruption {
            path: "data/courses.json".to_string(),
            reason: "expected an array".to_string(),
        };
        assert!(corrupted.is_fatal_for_entity());
        assert!(!RosterError::NotFound("missing".to_string()).is_fatal_for_entity());
        assert!(!RosterError::Persistence("disk full".to_string()).is_fatal_for_entity());
    }

    #[test]
    fn test_messages_are_human_readable() {
        let err = RosterError::Capacity("The course is full.".to_string());
        assert_eq!(err.to_string(), "The course is full.");
        assert_eq!(err.kind(), "capacity");

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err: RosterError = io.into();
        assert!(matches!(err, RosterError::Persistence(_)));
    }
}
