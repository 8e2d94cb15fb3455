//! Save-file contracts and implementations.
//!
//! The engine only ever sees `load`/`save`; where the snapshot lives and
//! how it is encoded stays behind [`SaveRepository`].

mod error;
mod file;
mod memory;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use memory::MemorySaveRepository;

use pet_core::PetState;

/// Durable storage for the single pet snapshot.
///
/// `save` must be atomic with respect to interruption: a crash mid-write
/// may lose the newest snapshot but never the previously durable one.
pub trait SaveRepository: Send + Sync {
    /// Load the persisted snapshot. `None` means "start fresh" — the file
    /// is missing or was unreadable; neither is an error to the caller.
    fn load(&self) -> Result<Option<PetState>>;

    /// Durably store the current snapshot.
    fn save(&self, state: &PetState) -> Result<()>;
}
