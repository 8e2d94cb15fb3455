//! Events broadcast by the worker to every subscribed frontend.

use pet_core::PetView;

#[derive(Clone, Debug)]
pub enum PetEvent {
    /// Fresh presentation snapshot after any state change (action, tick, or
    /// idle reconciliation). Rejected actions surface here too, as the
    /// complaint line inside the snapshot's journal.
    View(Box<PetView>),

    /// The current snapshot was durably written.
    Saved,
}
