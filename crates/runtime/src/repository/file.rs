//! File-based SaveRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use pet_core::PetState;

use crate::repository::{RepositoryError, Result, SaveRepository};

/// Stores the snapshot as one pretty-printed JSON file.
///
/// # Atomicity
///
/// Writes go to `pet.json.tmp` in the same directory and are renamed over
/// the real file, so an interrupted save never corrupts the previously
/// durable snapshot.
///
/// # Corruption
///
/// An unparseable file is not fatal: it is moved aside to `pet.json.corrupt`
/// and `load` reports a fresh start.
pub struct FileSaveRepository {
    path: PathBuf,
}

impl FileSaveRepository {
    /// Repository at an explicit path; parent directories are created.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    /// Repository at the platform data directory (e.g.
    /// `~/.local/share/lofty/pet.json` on Linux).
    pub fn at_default_path() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "lofty")
            .ok_or(RepositoryError::NoDataDir)?;
        Self::new(dirs.data_dir().join("pet.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn quarantine_corrupt(&self) {
        let aside = self.path.with_extension("json.corrupt");
        if let Err(error) = fs::rename(&self.path, &aside) {
            tracing::warn!(%error, "failed to move corrupt save aside");
        } else {
            tracing::warn!(path = %aside.display(), "corrupt save preserved");
        }
    }
}

impl SaveRepository for FileSaveRepository {
    fn load(&self) -> Result<Option<PetState>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path)?;
        match serde_json::from_slice::<PetState>(&bytes) {
            Ok(state) => {
                tracing::debug!(path = %self.path.display(), "loaded snapshot");
                Ok(Some(state))
            }
            Err(error) => {
                // Unreadable saves mean a fresh pet, never a crash
                tracing::warn!(%error, "save file unparseable; starting fresh");
                self.quarantine_corrupt();
                Ok(None)
            }
        }
    }

    fn save(&self, state: &PetState) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(state)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(path = %self.path.display(), "saved snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use pet_core::SimConfig;

    fn state() -> PetState {
        PetState::newborn(
            &SimConfig::default(),
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        )
    }

    #[test]
    fn missing_file_is_fresh_start() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path().join("pet.json")).unwrap();
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path().join("pet.json")).unwrap();

        let state = state();
        repo.save(&state).unwrap();
        assert_eq!(repo.load().unwrap().unwrap(), state);

        // No stray temp file left behind
        assert!(!dir.path().join("pet.json.tmp").exists());
    }

    #[test]
    fn corrupt_file_becomes_fresh_start_and_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pet.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let repo = FileSaveRepository::new(&path).unwrap();
        assert!(repo.load().unwrap().is_none());
        assert!(dir.path().join("pet.json.corrupt").exists());

        // A later save works normally
        repo.save(&state()).unwrap();
        assert!(repo.load().unwrap().is_some());
    }

    #[test]
    fn overwrite_keeps_latest_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path().join("pet.json")).unwrap();

        let mut state = state();
        repo.save(&state).unwrap();
        state.meters_mut().unwrap().commits = 9;
        repo.save(&state).unwrap();

        assert_eq!(repo.load().unwrap().unwrap().meters().unwrap().commits, 9);
    }
}
