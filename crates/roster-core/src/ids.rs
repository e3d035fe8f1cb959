//! Pseudo-random record id allocation
//!
//! Ids are drawn uniformly from `[0, upper_bound)`. Collisions are possible, so
//! `allocate_id` retries against the ids already in use and gives up with a
//! conflict only after the configured number of attempts.

use crate::config::IdConfig;
use crate::core_types::RecordId;
use crate::errors::RosterError;
use rand::Rng;

pub trait IdSource: Send + Sync {
    fn next_id(&self, upper_bound: RecordId) -> RecordId;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&self, upper_bound: RecordId) -> RecordId {
        rand::rng().random_range(0..upper_bound)
    }
}

pub fn allocate_id<F>(
    source: &dyn IdSource,
    config: &IdConfig,
    mut is_taken: F,
) -> Result<RecordId, RosterError>
where
    F: FnMut(RecordId) -> bool,
{
    for attempt in 1..=config.max_attempts {
        let id = source.next_id(config.upper_bound);
        if !is_taken(id) {
            return Ok(id);
        }
        log::warn!("Generated id {} is already in use (attempt {})", id, attempt);
    }

    Err(RosterError::Conflict(format!(
        "Could not allocate a unique id after {} attempts",
        config.max_attempts
    )))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Hands out a fixed sequence of ids, then repeats the last one.
    pub struct ScriptedIds {
        ids: Mutex<Vec<RecordId>>,
    }

    impl ScriptedIds {
        pub fn new(ids: Vec<RecordId>) -> Self {
            Self {
                ids: Mutex::new(ids),
            }
        }
    }

    impl IdSource for ScriptedIds {
        fn next_id(&self, _upper_bound: RecordId) -> RecordId {
            let mut ids = self.ids.lock().unwrap();
            if ids.len() > 1 {
                ids.remove(0)
            } else {
                ids[0]
            }
        }
    }
}
