//! In-memory SaveRepository for tests and ephemeral sessions.

use std::sync::{Arc, Mutex};

use pet_core::PetState;

use crate::repository::{RepositoryError, Result, SaveRepository};

/// Keeps the snapshot in a shared slot; clones of the repository observe
/// each other's saves, which lets tests inspect what the worker persisted.
#[derive(Clone, Default)]
pub struct MemorySaveRepository {
    slot: Arc<Mutex<Option<PetState>>>,
}

impl MemorySaveRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-seeded with a snapshot, as if a save file existed.
    pub fn with_snapshot(state: PetState) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(state))),
        }
    }
}

impl SaveRepository for MemorySaveRepository {
    fn load(&self) -> Result<Option<PetState>> {
        let slot = self.slot.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(slot.clone())
    }

    fn save(&self, state: &PetState) -> Result<()> {
        let mut slot = self.slot.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = Some(state.clone());
        Ok(())
    }
}
