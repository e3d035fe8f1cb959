//! Course and trainee roster management over flat JSON collections.
//!
//! The crate turns one line of operator input into a typed outcome:
//!
//! - **Parsing**: `parser` splits a line into command, subcommand and arguments
//! - **Handlers**: `handlers` validate and apply course and trainee operations
//! - **Storage**: `storage` loads and saves whole collections behind a trait
//! - **Dispatch**: `dispatch` wires handlers to a store and routes commands
//!
//! Presentation is left to the caller; outcomes implement `Display` for plain
//! text output.

pub mod config;
pub mod core_types;
pub mod dispatch;
pub mod errors;
pub mod handlers;
pub mod ids;
pub mod outcome;
pub mod parser;
pub mod storage;

pub use config::*;
pub use core_types::{Course, EntityKind, RecordId, Trainee};
pub use dispatch::Dispatcher;
pub use errors::RosterError;
pub use outcome::{CourseSummary, Outcome};
pub use parser::{parse_command, ParsedCommand};
pub use storage::{JsonFileStore, MemoryStore, RosterStore};
