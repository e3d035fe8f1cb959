//! Configuration module for the roster manager
//!
//! Supports an optional YAML file, an environment override for the data
//! directory, and programmatic construction through the `Default` impls.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;
