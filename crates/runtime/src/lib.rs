//! Runtime host for the pet simulation.
//!
//! Owns the single [`pet_core::PetState`] behind a background worker task:
//! actions arrive on a channel, a periodic tick advances time, autosave
//! writes the snapshot, and view updates fan out over a broadcast channel.
//! Because the worker processes one event at a time, every engine call is
//! naturally serialized and no locking is needed anywhere.

pub mod error;
pub mod event;
pub mod handle;
pub mod repository;
mod runtime;
mod worker;

pub use error::{Result, RuntimeError};
pub use event::PetEvent;
pub use handle::RuntimeHandle;
pub use repository::{FileSaveRepository, MemorySaveRepository, RepositoryError, SaveRepository};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
