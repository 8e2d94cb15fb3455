//! High-level runtime orchestrator.
//!
//! The runtime loads the snapshot, reconciles idle time, spawns the worker,
//! and exposes a builder-based API for clients to drive the simulation.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::Duration;

use chrono::Utc;
use pet_core::{IdleReport, PetEngine, PetView, RngOracle, SimConfig};

use crate::error::{Result, RuntimeError};
use crate::event::PetEvent;
use crate::handle::RuntimeHandle;
use crate::repository::{MemorySaveRepository, SaveRepository};
use crate::worker::{Command, SimWorker};

/// Runtime configuration shared across the orchestrator and the worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub sim: SimConfig,
    pub tick_interval: Duration,
    pub autosave_interval: Duration,
    pub command_buffer_size: usize,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            tick_interval: Duration::from_secs(1),
            autosave_interval: Duration::from_secs(5),
            command_buffer_size: 32,
            event_buffer_size: 100,
        }
    }
}

/// Main runtime that hosts the pet simulation.
///
/// [`RuntimeHandle`] provides a cloneable façade for clients; the runtime
/// itself owns the worker task and the shutdown path.
pub struct Runtime {
    handle: RuntimeHandle,
    worker_handle: JoinHandle<()>,
    initial_view: PetView,
    idle_report: Option<IdleReport>,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<PetEvent> {
        self.handle.subscribe_events()
    }

    /// Snapshot taken right after initialization, so frontends can render
    /// before the first broadcast arrives.
    pub fn initial_view(&self) -> &PetView {
        &self.initial_view
    }

    /// What idle reconciliation did at startup, if a snapshot existed.
    pub fn idle_report(&self) -> Option<&IdleReport> {
        self.idle_report.as_ref()
    }

    /// Stop the worker gracefully. The worker performs a final synchronous
    /// save before its task finishes.
    pub async fn shutdown(self) -> Result<()> {
        let _ = self.handle.tx_commands.send(Command::Shutdown).await;
        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    repository: Option<Box<dyn SaveRepository>>,
    rng: Option<Box<dyn RngOracle>>,
    session_seed: Option<u64>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            repository: None,
            rng: None,
            session_seed: None,
        }
    }

    /// Override runtime configuration.
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Storage for the snapshot. Defaults to an in-memory repository, which
    /// keeps nothing across restarts — real clients pass a file repository.
    pub fn repository(mut self, repository: impl SaveRepository + 'static) -> Self {
        self.repository = Some(Box::new(repository));
        self
    }

    /// Pin the session seed (tests); defaults to a random one.
    pub fn session_seed(mut self, seed: u64) -> Self {
        self.session_seed = Some(seed);
        self
    }

    /// Substitute the RNG oracle (tests).
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Load the snapshot, reconcile idle time, and spawn the worker.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(self) -> Result<Runtime> {
        let repository = self
            .repository
            .unwrap_or_else(|| Box::new(MemorySaveRepository::new()));
        let session_seed = self.session_seed.unwrap_or_else(rand::random);
        let engine = match self.rng {
            Some(rng) => PetEngine::with_rng(self.config.sim.clone(), session_seed, rng),
            None => PetEngine::new(self.config.sim.clone(), session_seed),
        };

        let now = Utc::now();
        let snapshot = match repository.load() {
            Ok(snapshot) => snapshot,
            Err(error) => {
                // A broken save never stops the pet from hatching
                tracing::warn!(%error, "failed to load save; starting fresh");
                None
            }
        };
        let (state, idle_report) = engine.initialize(snapshot, now);
        let initial_view = engine.view(&state, now);
        tracing::info!(name = %state.name, "pet ready");

        let (tx_commands, rx_commands) = mpsc::channel(self.config.command_buffer_size.max(1));
        let (tx_events, _) = broadcast::channel(self.config.event_buffer_size.max(1));

        let worker = SimWorker {
            engine,
            state,
            repository,
            rx_commands,
            tx_events: tx_events.clone(),
            tick_interval: self.config.tick_interval,
            autosave_interval: self.config.autosave_interval,
        };
        let worker_handle = tokio::spawn(worker.run());

        Ok(Runtime {
            handle: RuntimeHandle {
                tx_commands,
                tx_events,
            },
            worker_handle,
            initial_view,
            idle_report,
        })
    }
}
