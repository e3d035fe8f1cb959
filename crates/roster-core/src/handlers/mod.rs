//! Domain handlers for the two entity kinds
//!
//! Arguments arrive as text straight from the parser. Conversion to ids
//! happens here, at the handler boundary.

pub mod course;
pub mod trainee;

pub use course::CourseHandler;
pub use trainee::TraineeHandler;

use crate::core_types::RecordId;
use crate::errors::RosterError;

/// Positional argument, or an empty string when it was not given.
pub(crate) fn arg(args: &[String], index: usize) -> &str {
    args.get(index).map(String::as_str).unwrap_or("")
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Converts a textual id. `0` is a valid id.
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<RecordId, RosterError> {
    raw.trim().parse::<RecordId>().map_err(|_| {
        RosterError::Validation(format!(
            "Invalid {}: '{}' is not a non-negative integer",
            what, raw
        ))
    })
}
