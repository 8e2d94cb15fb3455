//! Cloneable façade over the worker's channels.

use pet_core::Action;
use tokio::sync::{broadcast, mpsc};

use crate::error::{Result, RuntimeError};
use crate::event::PetEvent;
use crate::worker::Command;

/// Handle shared across frontends and async tasks.
#[derive(Clone)]
pub struct RuntimeHandle {
    pub(crate) tx_commands: mpsc::Sender<Command>,
    pub(crate) tx_events: broadcast::Sender<PetEvent>,
}

impl RuntimeHandle {
    /// Forward one discrete user action to the worker. The outcome
    /// (applied or rejected) arrives as the next [`PetEvent::View`].
    pub async fn submit_action(&self, action: Action) -> Result<()> {
        self.tx_commands
            .send(Command::Action(action))
            .await
            .map_err(|_| RuntimeError::NotRunning)
    }

    /// Subscribe to view/save events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<PetEvent> {
        self.tx_events.subscribe()
    }
}
