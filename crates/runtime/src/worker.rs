//! Background task owning the pet state.
//!
//! One `tokio::select!` loop is the serialized stream every mutation flows
//! through: actions, ticks, and autosaves run to completion one at a time,
//! so the engine never sees interleaved calls.

use chrono::Utc;
use tokio::sync::{broadcast, mpsc};
use tokio::time::{self, Duration, MissedTickBehavior};

use pet_core::{Action, ActionOutcome, PetEngine, PetState};

use crate::event::PetEvent;
use crate::repository::SaveRepository;

/// Messages accepted by the worker.
#[derive(Debug)]
pub(crate) enum Command {
    Action(Action),
    Shutdown,
}

pub(crate) struct SimWorker {
    pub engine: PetEngine,
    pub state: PetState,
    pub repository: Box<dyn SaveRepository>,
    pub rx_commands: mpsc::Receiver<Command>,
    pub tx_events: broadcast::Sender<PetEvent>,
    pub tick_interval: Duration,
    pub autosave_interval: Duration,
}

impl SimWorker {
    pub async fn run(mut self) {
        let mut tick = time::interval(self.tick_interval);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut autosave = time::interval(self.autosave_interval);
        autosave.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                command = self.rx_commands.recv() => match command {
                    Some(Command::Action(action)) => self.handle_action(action),
                    Some(Command::Shutdown) | None => break,
                },
                _ = tick.tick() => {
                    self.engine.tick(&mut self.state, Utc::now());
                    self.broadcast_view();
                }
                _ = autosave.tick() => {
                    self.save();
                }
            }
        }

        // Final synchronous save before the task exits
        self.save();
        tracing::info!("pet worker stopped");
    }

    fn handle_action(&mut self, action: Action) {
        match self.engine.execute(&mut self.state, action, Utc::now()) {
            ActionOutcome::Applied { .. } => {
                tracing::debug!(%action, "action applied");
            }
            ActionOutcome::Rejected { reason } => {
                tracing::debug!(%action, %reason, "action rejected");
            }
        }
        self.broadcast_view();
    }

    fn broadcast_view(&self) {
        let view = self.engine.view(&self.state, Utc::now());
        // No subscribers is fine; the send result is irrelevant
        let _ = self.tx_events.send(PetEvent::View(Box::new(view)));
    }

    fn save(&mut self) {
        match self.repository.save(&self.state) {
            Ok(()) => {
                let _ = self.tx_events.send(PetEvent::Saved);
            }
            Err(error) => {
                // Never fatal; the next interval retries
                tracing::warn!(%error, "autosave failed");
            }
        }
    }
}
